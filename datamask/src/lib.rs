//! Format-preserving masking of sensitive strings for display and logging.
//!
//! This crate separates:
//! - **Masking primitives**: positional masking ([`mask`]) and digit-only,
//!   format-preserving masking ([`format_preserving_mask`]).
//! - **Domain policies**: cards, IBANs, emails and phone numbers built on top of
//!   those primitives.
//! - **Policy markers**: zero-sized types (`CardNumber`, `Iban`, `Email`, ...)
//!   that name a kind of data and carry its default [`TextMaskPolicy`].
//!
//! Every masking function is total: degenerate parameters produce a full mask
//! and unrecognised layouts are either fully masked or passed through, never
//! rejected.
//!
//! What this crate does not do:
//! - perform I/O or logging on its own
//! - validate that a value is a real card number, IBAN, email or phone number
//!
//! ```rust
//! use datamask::{mask_card_formatted, mask_email, mask_phone};
//!
//! assert_eq!(mask_card_formatted("4111 1111 1111 1234"), "**** **** **** 1234");
//! assert_eq!(mask_email("ahmet@example.com"), "a****@example.com");
//! assert_eq!(mask_phone("+90 555 123 4567"), "+90 5** *** 4567");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod masked;
pub mod policy;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use masked::Masked;
pub use policy::{
    CardNumber, DigitMaskConfig, Email, EmailConfig, Iban, MASK_CHAR, MaskDirection, MaskSpec,
    MaskingPolicy, ParseDirectionError, PhoneNumber, Secret, TextMaskPolicy,
    format_preserving_mask, mask, mask_card_formatted, mask_email, mask_iban_formatted,
    mask_phone, mask_with_code,
};
#[cfg(feature = "slog")]
pub use crate::slog::{MaskedText, SlogMasked, SlogMaskedExt};
#[cfg(feature = "tracing")]
pub use crate::tracing::{TracingMasked, TracingMaskedExt, TracingMaskedWithExt};
