//! Standard masking policies: marker types and their implementations.
//!
//! This module provides:
//!
//! - **Marker types**: Zero-sized types like `CardNumber`, `Iban`, `Email` that
//!   identify what kind of sensitive data a value contains.
//!
//! - **The trait**: [`MaskingPolicy`] associates marker types with their concrete
//!   masking strategies.
//!
//! # Custom Policies
//!
//! You can define your own policy markers:
//!
//! ```rust
//! use datamask::{MaskingPolicy, TextMaskPolicy};
//!
//! #[derive(Clone, Copy)]
//! struct AccountNumber;
//!
//! impl MaskingPolicy for AccountNumber {
//!     fn policy() -> TextMaskPolicy {
//!         TextMaskPolicy::digits_last(2).with_mask_char('#')
//!     }
//! }
//!
//! assert_eq!(AccountNumber::policy().apply_to("12-345-678"), "##-###-#78");
//! ```

use super::text::TextMaskPolicy;

// =============================================================================
// MaskingPolicy trait
// =============================================================================

/// Associates a policy marker type with a concrete string masking policy.
///
/// The policy is defined per marker type and is independent of runtime context.
pub trait MaskingPolicy {
    /// Returns the policy for this marker type.
    fn policy() -> TextMaskPolicy;
}

// =============================================================================
// Marker types and their policy implementations
// =============================================================================

/// Policy marker for card numbers.
///
/// Keeps the last 4 digits and every separator
/// (e.g., `"4111 1111 1111 1234"` → `"**** **** **** 1234"`).
#[derive(Clone, Copy, Debug)]
pub struct CardNumber;

impl MaskingPolicy for CardNumber {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::digits_last(4)
    }
}

/// Policy marker for IBANs.
///
/// Keeps the last 4 digits; letters stay visible
/// (e.g., `"TR320010009999901234567890"` → `"TR********************7890"`).
#[derive(Clone, Copy, Debug)]
pub struct Iban;

impl MaskingPolicy for Iban {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::digits_last(4)
    }
}

/// Policy marker for email addresses.
///
/// Keeps the first character of the username and the full domain
/// (e.g., `"ahmet@example.com"` → `"a****@example.com"`).
#[derive(Clone, Copy, Debug)]
pub struct Email;

impl MaskingPolicy for Email {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::email_local(1)
    }
}

/// Policy marker for phone numbers.
///
/// Masks the middle groups of `+CC NNN NNN NNNN` numbers
/// (e.g., `"+90 555 123 4567"` → `"+90 5** *** 4567"`).
#[derive(Clone, Copy, Debug)]
pub struct PhoneNumber;

impl MaskingPolicy for PhoneNumber {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::phone()
    }
}

/// Policy marker for secrets that must never be partially shown.
///
/// Masks every character (e.g., `"hunter2"` → `"*******"`).
#[derive(Clone, Copy, Debug)]
pub struct Secret;

impl MaskingPolicy for Secret {
    fn policy() -> TextMaskPolicy {
        TextMaskPolicy::full()
    }
}

// =============================================================================
// Tests
// =============================================================================
