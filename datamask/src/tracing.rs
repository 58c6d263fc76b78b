//! Adapters for emitting masked values through `tracing`.
//!
//! Values are logged as display strings, so this works with any tracing
//! subscriber.
//!
//! # Example
//!
//! ```ignore
//! use datamask::{CardNumber, Masked, TextMaskPolicy, tracing::TracingMaskedExt};
//!
//! let card = Masked::<_, CardNumber>::new(raw_card);
//! tracing::info!(card = %card.tracing_masked());
//!
//! // Ad-hoc strings take an explicit policy
//! tracing::info!(email = %raw_email.tracing_masked_with(&TextMaskPolicy::email_local(1)));
//! ```

use tracing::field::{DisplayValue, display};

use crate::{
    Masked,
    policy::{MaskingPolicy, TextMaskPolicy},
};

/// Marker trait for types whose `tracing` integration always emits masked output.
///
/// This trait is implemented only for wrappers that mask before logging. It
/// is not a blanket impl for raw types.
pub trait TracingMasked {}

impl<T, P> TracingMasked for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
}

/// Extension trait for logging [`Masked`] values as display strings.
pub trait TracingMaskedExt: TracingMasked {
    /// Wraps the masked form of the value as a `tracing` display value.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T, P> TracingMaskedExt for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        display(self.masked())
    }
}

/// Extension trait for logging ad-hoc strings through an explicit policy.
pub trait TracingMaskedWithExt {
    /// Masks the value with `policy` and wraps it as a `tracing` display value.
    fn tracing_masked_with(&self, policy: &TextMaskPolicy) -> DisplayValue<String>;
}

impl<T> TracingMaskedWithExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn tracing_masked_with(&self, policy: &TextMaskPolicy) -> DisplayValue<String> {
        display(policy.apply_to(self.as_ref()))
    }
}
