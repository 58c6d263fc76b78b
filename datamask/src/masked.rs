//! Wrapper type that only ever renders its value masked.
//!
//! [`Masked<T, P>`] pairs a string-like value with a policy marker `P`. Every
//! formatting path (`Debug`, `Display`, and `Serialize` with the `serde`
//! feature) goes through `P`'s [`TextMaskPolicy`](crate::TextMaskPolicy), so
//! the raw value only leaves the wrapper through the explicit `expose*`
//! accessors.

use std::{fmt, marker::PhantomData};

use crate::policy::MaskingPolicy;

/// Wrapper for string-like values that applies a masking policy on output.
///
/// ```
/// use datamask::{CardNumber, Masked};
///
/// let card = Masked::<_, CardNumber>::new("4111 1111 1111 1234");
/// assert_eq!(card.to_string(), "**** **** **** 1234");
/// assert_eq!(format!("{card:?}"), "Masked(\"**** **** **** 1234\")");
/// ```
///
/// **Deserialization:** with the `serde` feature, `Deserialize` reads the raw
/// inner value, so a wrapper can be filled straight from input data.
pub struct Masked<T, P>(T, PhantomData<P>);

impl<T, P> Masked<T, P> {
    /// Wraps `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Explicitly access the inner value.
    ///
    /// This method makes it clear in your code that you are intentionally
    /// accessing the raw sensitive value. Use with care.
    #[must_use]
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Explicitly access the inner value mutably.
    pub fn expose_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consume the wrapper and return the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, P> Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
    /// Returns the masked string representation using the policy `P`.
    #[must_use]
    pub fn masked(&self) -> String {
        P::policy().apply_to(self.0.as_ref())
    }
}

impl<T, P> From<T> for Masked<T, P> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone, P> Clone for Masked<T, P> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<T: Default, P> Default for Masked<T, P> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, P> PartialEq for Masked<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, P> Eq for Masked<T, P> {}

impl<T, P> fmt::Debug for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Masked").field(&self.masked()).finish()
    }
}

impl<T, P> fmt::Display for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(feature = "serde")]
impl<T, P> serde::Serialize for Masked<T, P>
where
    T: AsRef<str>,
    P: MaskingPolicy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.masked())
    }
}

#[cfg(feature = "serde")]
impl<'de, T, P> serde::Deserialize<'de> for Masked<T, P>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::Masked;
    use crate::{Email, PhoneNumber, Secret};

    #[test]
    fn formats_masked_value() {
        let email = Masked::<String, Email>::from("ahmet@example.com".to_string());
        assert_eq!(email.to_string(), "a****@example.com");
        assert_eq!(format!("{email:?}"), "Masked(\"a****@example.com\")");
    }

    #[test]
    fn expose_returns_raw_value() {
        let mut phone = Masked::<String, PhoneNumber>::new("+90 555 123 4567".to_string());
        assert_eq!(phone.expose(), "+90 555 123 4567");

        phone.expose_mut().replace_range(..3, "+44");
        assert_eq!(phone.masked(), "+44 5** *** 4567");
        assert_eq!(phone.into_inner(), "+44 555 123 4567");
    }

    #[test]
    fn equality_compares_raw_values() {
        let a = Masked::<&str, Secret>::new("one");
        let b = Masked::<&str, Secret>::new("two");
        assert_ne!(a, b);
        assert_eq!(a.masked(), b.masked());
        assert_eq!(a.clone(), a);
    }
}
