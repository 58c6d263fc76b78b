//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`Masked`] and [`TextMaskPolicy`] with `slog` by
//! providing `slog::Value` implementations that emit the masked string.
//!
//! It is responsible for:
//! - Ensuring the logged representation is computed by a masking policy,
//!   not taken from the original value.
//! - Avoiding fallible logging APIs: masking is total, so nothing here can
//!   fail before reaching the serializer.
//!
//! It does not configure `slog` or choose which policy applies to a value.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    Masked,
    policy::{MaskingPolicy, TextMaskPolicy},
};

/// Marker trait for types whose `slog` integration always emits masked output.
///
/// This trait is implemented only for wrappers that mask before logging. It
/// is not a blanket impl for raw types.
///
/// ```compile_fail
/// use datamask::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

impl<T, P> SlogValue for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.masked())
    }
}

impl<T, P> SlogMasked for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
}

/// A string already masked by a [`TextMaskPolicy`], ready to be logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedText(String);

impl MaskedText {
    /// Returns the masked text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SlogValue for MaskedText {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.0)
    }
}

impl SlogMasked for MaskedText {}

/// Extension trait for ad-hoc slog logging of masked strings.
///
/// ## Example
/// ```ignore
/// use datamask::{TextMaskPolicy, slog::SlogMaskedExt};
///
/// info!(logger, "payment"; "card" => card.slog_masked(&TextMaskPolicy::digits_last(4)));
/// ```
pub trait SlogMaskedExt {
    /// Masks `self` with `policy` and wraps the result as a `slog::Value`.
    fn slog_masked(&self, policy: &TextMaskPolicy) -> MaskedText;
}

impl<T> SlogMaskedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn slog_masked(&self, policy: &TextMaskPolicy) -> MaskedText {
        MaskedText(policy.apply_to(self.as_ref()))
    }
}
