//! Email address masking.
//!
//! The username (everything before the `@`) is masked and the domain is kept
//! intact, so a masked address still tells the reader which provider it
//! belongs to.

use super::text::{MASK_CHAR, full_mask};

/// Masks an email address, keeping only the first character of the username.
///
/// Values that do not contain exactly one `@` are masked entirely. A
/// username of one character is masked too, and an empty username is
/// rendered as a single mask character.
///
/// # Example
/// ```
/// use datamask::mask_email;
///
/// assert_eq!(mask_email("ahmet@example.com"), "a****@example.com");
/// assert_eq!(mask_email("@domain.com"), "*@domain.com");
/// assert_eq!(mask_email("invalidemail"), "************");
/// ```
#[must_use]
pub fn mask_email(email: &str) -> String {
    EmailConfig::new(1).apply_to(email)
}

/// Configuration for email address masking.
///
/// Masks the username while preserving the domain. If the value does not
/// split into exactly one username and one domain, every character is masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmailConfig {
    /// Number of leading characters of the username to keep visible.
    visible_prefix: usize,
    /// Symbol used to mask the username.
    mask_char: char,
}

impl EmailConfig {
    /// Creates a new email config that keeps the first `visible_prefix` chars of the username.
    #[must_use]
    pub fn new(visible_prefix: usize) -> Self {
        Self {
            visible_prefix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn set_mask_char(&mut self, mask_char: char) {
        self.mask_char = mask_char;
    }

    /// Applies the policy to an email address.
    ///
    /// A username no longer than `visible_prefix` is masked in full, so short
    /// usernames never leak completely.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let mut parts = value.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return full_mask(value, self.mask_char);
        };

        let local_len = local.chars().count();
        if local_len == 0 {
            return format!("{}@{domain}", self.mask_char);
        }

        let visible = if local_len > self.visible_prefix {
            self.visible_prefix
        } else {
            0
        };
        let kept: String = local.chars().take(visible).collect();
        let masked: String = std::iter::repeat_n(self.mask_char, local_len - visible).collect();

        format!("{kept}{masked}@{domain}")
    }
}
