//! Masking policies: marker types, masking primitives and domain wrappers.
//!
//! This module provides:
//!
//! - **Primitives** (`text`, `digits`): positional masking with a visible
//!   window, and format-preserving masking of digits only.
//!
//! - **Domain wrappers** (`digits`, `email`, `phone`): fixed policies for card
//!   numbers, IBANs, email addresses and phone numbers.
//!
//! - **Policies** (`policies`): Zero-sized marker types and the
//!   [`MaskingPolicy`] trait that maps them to a [`TextMaskPolicy`].
//!
//! # Example
//!
//! ```rust
//! use datamask::{CardNumber, MaskingPolicy, TextMaskPolicy};
//!
//! // Built-in policies have default implementations
//! let policy = CardNumber::policy();
//! assert_eq!(policy.apply_to("4111 1111 1111 1234"), "**** **** **** 1234");
//!
//! // Or create custom policies directly
//! let custom = TextMaskPolicy::keep_last(4).with_mask_char('#');
//! assert_eq!(custom.apply_to("sensitive-data"), "##########data");
//! ```

mod digits;
mod email;
mod phone;
pub mod policies;
pub mod text;

// Re-export everything at the module level for convenience
pub use digits::{
    DigitMaskConfig, format_preserving_mask, mask_card_formatted, mask_iban_formatted,
};
pub use email::{EmailConfig, mask_email};
pub use phone::mask_phone;
pub use policies::{CardNumber, Email, Iban, MaskingPolicy, PhoneNumber, Secret};
pub use text::{
    MASK_CHAR, MaskDirection, MaskSpec, ParseDirectionError, TextMaskPolicy, mask, mask_with_code,
};
