//! Phone number masking for the `+CC NNN NNN NNNN` layout.
//!
//! Only one layout is recognised: an optional `+`, a country code of one to
//! three digits, then ten digits grouped 3-3-4 with optional ASCII
//! whitespace between groups. Anything else is returned unchanged.

use std::sync::LazyLock;

use regex::Regex;

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(\+?[0-9]{1,3})[\t\n\f\r ]?",
        r"([0-9])([0-9]{2})[\t\n\f\r ]?",
        r"([0-9]{3})[\t\n\f\r ]?([0-9]{4})",
    ))
    .expect("phone pattern is a valid regex")
});

/// Masks a phone number, showing the country code, the first digit of the
/// subscriber number and the last four digits.
///
/// The masked groups are always `**` and `***`, independent of the input.
/// Numbers in any other layout are returned verbatim.
///
/// # Example
/// ```
/// use datamask::mask_phone;
///
/// assert_eq!(mask_phone("+90 555 123 4567"), "+90 5** *** 4567");
/// assert_eq!(mask_phone("5551234567"), "5551234567");
/// ```
#[must_use]
pub fn mask_phone(phone: &str) -> String {
    match PHONE_PATTERN.captures(phone) {
        Some(caps) => format!("{} {}** *** {}", &caps[1], &caps[2], &caps[5]),
        None => phone.to_string(),
    }
}
