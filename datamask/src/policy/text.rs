//! Positional masking and the [`TextMaskPolicy`] strategy enum.
//!
//! Positional masking keeps one contiguous window of a string visible and
//! replaces every other character with a mask character. The window is placed
//! at the start, at the end, or centred, according to [`MaskDirection`].
//!
//! All operations count Unicode scalar values, so multi-byte characters are a
//! single masking unit.

use std::{fmt, str::FromStr};

use super::{digits::DigitMaskConfig, email::EmailConfig, phone};

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Where the visible window of a positional mask sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MaskDirection {
    /// Keep the leading characters visible.
    FromStart,
    /// Keep the trailing characters visible.
    FromEnd,
    /// Keep a centred window visible, leaning towards the start on odd splits.
    FromMiddle,
}

impl MaskDirection {
    /// Numeric code of the direction, as accepted by [`mask_with_code`].
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            MaskDirection::FromStart => 0,
            MaskDirection::FromEnd => 1,
            MaskDirection::FromMiddle => 2,
        }
    }
}

impl TryFrom<i64> for MaskDirection {
    type Error = ParseDirectionError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MaskDirection::FromStart),
            1 => Ok(MaskDirection::FromEnd),
            2 => Ok(MaskDirection::FromMiddle),
            other => Err(ParseDirectionError::UnknownCode(other)),
        }
    }
}

impl FromStr for MaskDirection {
    type Err = ParseDirectionError;

    /// Accepts `start`, `end` and `middle`, optionally prefixed with `from_`
    /// or `from`, in any ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let name = normalized
            .strip_prefix("from_")
            .or_else(|| normalized.strip_prefix("from"))
            .unwrap_or(&normalized);
        match name {
            "start" => Ok(MaskDirection::FromStart),
            "end" => Ok(MaskDirection::FromEnd),
            "middle" => Ok(MaskDirection::FromMiddle),
            _ => Err(ParseDirectionError::UnknownName(s.to_string())),
        }
    }
}

impl fmt::Display for MaskDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaskDirection::FromStart => "from_start",
            MaskDirection::FromEnd => "from_end",
            MaskDirection::FromMiddle => "from_middle",
        };
        f.write_str(name)
    }
}

/// Returned when a raw code or name does not identify a [`MaskDirection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseDirectionError {
    /// The numeric code is not 0, 1 or 2.
    UnknownCode(i64),
    /// The name is not one of the accepted direction names.
    UnknownName(String),
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDirectionError::UnknownCode(code) => {
                write!(f, "unknown mask direction code {code}")
            }
            ParseDirectionError::UnknownName(name) => {
                write!(f, "unknown mask direction {name:?}")
            }
        }
    }
}

impl std::error::Error for ParseDirectionError {}

/// Replaces every character of `value` with `mask_char`.
pub(crate) fn full_mask(value: &str, mask_char: char) -> String {
    value.chars().map(|_| mask_char).collect()
}

/// Masks `value`, leaving a window of `visible_count` characters in clear text.
///
/// The output always has as many characters as `value`. When `visible_count`
/// is zero or not smaller than the length of `value`, every character is
/// masked regardless of `direction`; this function never returns the value
/// fully visible.
///
/// # Example
/// ```
/// use datamask::{MaskDirection, mask};
///
/// assert_eq!(mask("1234567890", 4, MaskDirection::FromEnd, '*'), "******7890");
/// assert_eq!(mask("abcdefg", 3, MaskDirection::FromStart, '#'), "abc####");
/// assert_eq!(mask("abcdefgh", 4, MaskDirection::FromMiddle, '*'), "**cdef**");
/// assert_eq!(mask("short", 10, MaskDirection::FromEnd, '*'), "*****");
/// ```
#[must_use]
pub fn mask(
    value: &str,
    visible_count: usize,
    direction: MaskDirection,
    mask_char: char,
) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    let total = chars.len();
    if visible_count == 0 || visible_count >= total {
        chars.fill(mask_char);
        return chars.into_iter().collect();
    }

    let hidden = total - visible_count;
    let start = match direction {
        MaskDirection::FromStart => 0,
        MaskDirection::FromEnd => hidden,
        MaskDirection::FromMiddle => {
            let start = hidden / 2;
            if start + visible_count > total {
                hidden
            } else {
                start
            }
        }
    };

    chars[..start].fill(mask_char);
    chars[start + visible_count..].fill(mask_char);
    chars.into_iter().collect()
}

/// Masks `value` from raw, unvalidated parameters.
///
/// Negative counts and direction codes outside `0..=2` (see
/// [`MaskDirection::code`]) produce a full mask instead of an error.
///
/// # Example
/// ```
/// use datamask::mask_with_code;
///
/// assert_eq!(mask_with_code("abcdefg", 3, 0, '*'), "abc****");
/// assert_eq!(mask_with_code("abcdefg", -1, 0, '*'), "*******");
/// assert_eq!(mask_with_code("abcdefg", 3, 7, '*'), "*******");
/// ```
#[must_use]
pub fn mask_with_code(
    value: &str,
    visible_count: i64,
    direction_code: i64,
    mask_char: char,
) -> String {
    let visible_count = usize::try_from(visible_count).unwrap_or(0);
    match MaskDirection::try_from(direction_code) {
        Ok(direction) => mask(value, visible_count, direction, mask_char),
        Err(_) => full_mask(value, mask_char),
    }
}

/// Positional masking parameters: how many characters stay visible, where,
/// and which character replaces the rest.
///
/// Use [`MaskSpec::from_start`], [`MaskSpec::from_end`] or
/// [`MaskSpec::from_middle`] to create instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskSpec {
    /// Number of characters left visible.
    visible_count: usize,
    /// Placement of the visible window.
    direction: MaskDirection,
    /// Symbol used for masked positions.
    mask_char: char,
}

impl MaskSpec {
    /// Constructs a spec from its parts, using [`MASK_CHAR`].
    #[must_use]
    pub fn new(visible_count: usize, direction: MaskDirection) -> Self {
        Self {
            visible_count,
            direction,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps the first `visible_count` characters.
    #[must_use]
    pub fn from_start(visible_count: usize) -> Self {
        Self::new(visible_count, MaskDirection::FromStart)
    }

    /// Keeps the last `visible_count` characters.
    #[must_use]
    pub fn from_end(visible_count: usize) -> Self {
        Self::new(visible_count, MaskDirection::FromEnd)
    }

    /// Keeps a centred window of `visible_count` characters.
    #[must_use]
    pub fn from_middle(visible_count: usize) -> Self {
        Self::new(visible_count, MaskDirection::FromMiddle)
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

    /// Number of characters left visible.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Placement of the visible window.
    #[must_use]
    pub fn direction(&self) -> MaskDirection {
        self.direction
    }

    /// Symbol used for masked positions.
    #[must_use]
    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Applies the spec to a string value. See [`mask`].
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        mask(value, self.visible_count, self.direction, self.mask_char)
    }
}

/// A masking strategy for string-like values.
///
/// All strategies operate on Unicode scalar values and return an owned `String`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextMaskPolicy {
    /// Replace every character with the mask character.
    Full {
        /// Symbol used for every position.
        mask_char: char,
    },
    /// Keep one contiguous window visible.
    Positional(MaskSpec),
    /// Mask digits only, keeping separators and letters in place.
    Digits(DigitMaskConfig),
    /// Mask the username of an email address while preserving the domain.
    Email(EmailConfig),
    /// Mask the middle groups of a `+CC NNN NNN NNNN` phone number.
    ///
    /// The mask groups are fixed literals, so this strategy ignores
    /// [`TextMaskPolicy::with_mask_char`].
    Phone,
}

impl TextMaskPolicy {
    /// Constructs [`TextMaskPolicy::Full`] using [`MASK_CHAR`].
    #[must_use]
    pub fn full() -> Self {
        Self::Full {
            mask_char: MASK_CHAR,
        }
    }

    /// Constructs [`TextMaskPolicy::Positional`] from an explicit spec.
    #[must_use]
    pub fn positional(spec: MaskSpec) -> Self {
        Self::Positional(spec)
    }

    /// Keeps only the first `visible_count` characters in clear text.
    #[must_use]
    pub fn keep_first(visible_count: usize) -> Self {
        Self::positional(MaskSpec::from_start(visible_count))
    }

    /// Keeps only the last `visible_count` characters in clear text.
    #[must_use]
    pub fn keep_last(visible_count: usize) -> Self {
        Self::positional(MaskSpec::from_end(visible_count))
    }

    /// Keeps a centred window of `visible_count` characters in clear text.
    #[must_use]
    pub fn keep_middle(visible_count: usize) -> Self {
        Self::positional(MaskSpec::from_middle(visible_count))
    }

    /// Keeps the last `visible_count` digits, leaving non-digits untouched.
    ///
    /// # Example
    /// ```
    /// use datamask::TextMaskPolicy;
    ///
    /// let policy = TextMaskPolicy::digits_last(4);
    /// assert_eq!(policy.apply_to("4111-1111-1111-1234"), "****-****-****-1234");
    /// ```
    #[must_use]
    pub fn digits_last(visible_count: usize) -> Self {
        Self::Digits(DigitMaskConfig::last(visible_count))
    }

    /// Keeps the first `visible_prefix` characters of an email username.
    #[must_use]
    pub fn email_local(visible_prefix: usize) -> Self {
        Self::Email(EmailConfig::new(visible_prefix))
    }

    /// Masks phone numbers in the `+CC NNN NNN NNNN` layout.
    #[must_use]
    pub fn phone() -> Self {
        Self::Phone
    }

    /// Overrides the masking character used by every strategy except
    /// [`TextMaskPolicy::Phone`].
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        match &mut self {
            TextMaskPolicy::Full { mask_char: current } => *current = mask_char,
            TextMaskPolicy::Positional(spec) => spec.set_mask_char(mask_char),
            TextMaskPolicy::Digits(config) => config.set_mask_char(mask_char),
            TextMaskPolicy::Email(config) => config.set_mask_char(mask_char),
            TextMaskPolicy::Phone => {}
        }
        self
    }

    /// Applies the policy to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            TextMaskPolicy::Full { mask_char } => full_mask(value, *mask_char),
            TextMaskPolicy::Positional(spec) => spec.apply_to(value),
            TextMaskPolicy::Digits(config) => config.apply_to(value),
            TextMaskPolicy::Email(config) => config.apply_to(value),
            TextMaskPolicy::Phone => phone::mask_phone(value),
        }
    }
}

impl Default for TextMaskPolicy {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        MaskDirection, MaskSpec, ParseDirectionError, TextMaskPolicy, mask, mask_with_code,
    };

    #[test]
    fn masks_from_each_direction() {
        assert_eq!(mask("1234567890", 4, MaskDirection::FromEnd, '*'), "******7890");
        assert_eq!(mask("abcdefg", 3, MaskDirection::FromStart, '#'), "abc####");
        assert_eq!(mask("abcdefgh", 4, MaskDirection::FromMiddle, '*'), "**cdef**");
    }

    #[test]
    fn middle_window_leans_towards_start_on_odd_split() {
        // 9 - 4 = 5 hidden: 2 before the window, 3 after.
        assert_eq!(mask("abcdefghi", 4, MaskDirection::FromMiddle, '*'), "**cdef***");
        assert_eq!(mask("abc", 1, MaskDirection::FromMiddle, '*'), "*b*");
        assert_eq!(mask("ab", 1, MaskDirection::FromMiddle, '*'), "a*");
    }

    #[test]
    fn out_of_range_counts_mask_everything() {
        for direction in [
            MaskDirection::FromStart,
            MaskDirection::FromEnd,
            MaskDirection::FromMiddle,
        ] {
            assert_eq!(mask("short", 10, direction, '*'), "*****");
            assert_eq!(mask("short", 5, direction, '*'), "*****");
            assert_eq!(mask("visible", 0, direction, '*'), "*******");
        }
    }

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(mask("", 3, MaskDirection::FromEnd, '*'), "");
        assert_eq!(mask("", 0, MaskDirection::FromStart, '*'), "");
    }

    #[test]
    fn raw_codes_fall_back_to_full_mask() {
        assert_eq!(mask_with_code("abcdefgh", 4, 2, '*'), "**cdef**");
        assert_eq!(mask_with_code("abcdefgh", 4, 1, '*'), "****efgh");
        assert_eq!(mask_with_code("abcdefgh", 4, 3, '*'), "********");
        assert_eq!(mask_with_code("abcdefgh", 4, -1, '*'), "********");
        assert_eq!(mask_with_code("abcdefgh", -4, 0, '*'), "********");
    }

    #[test]
    fn direction_round_trips_through_code() {
        for direction in [
            MaskDirection::FromStart,
            MaskDirection::FromEnd,
            MaskDirection::FromMiddle,
        ] {
            assert_eq!(MaskDirection::try_from(direction.code()), Ok(direction));
        }
        assert_eq!(
            MaskDirection::try_from(9),
            Err(ParseDirectionError::UnknownCode(9))
        );
    }

    #[test]
    fn direction_parses_from_names() {
        assert_eq!("start".parse::<MaskDirection>(), Ok(MaskDirection::FromStart));
        assert_eq!("FromEnd".parse::<MaskDirection>(), Ok(MaskDirection::FromEnd));
        assert_eq!(" from_middle ".parse::<MaskDirection>(), Ok(MaskDirection::FromMiddle));
        assert_eq!(
            "sideways".parse::<MaskDirection>(),
            Err(ParseDirectionError::UnknownName("sideways".to_string()))
        );
        assert_eq!(MaskDirection::FromMiddle.to_string(), "from_middle");
    }

    #[test]
    fn spec_respects_mask_char() {
        let spec = MaskSpec::from_end(2).with_mask_char('#');
        assert_eq!(spec.apply_to("abcdef"), "####ef");
        assert_eq!(spec.visible_count(), 2);
        assert_eq!(spec.direction(), MaskDirection::FromEnd);
        assert_eq!(spec.mask_char(), '#');
    }

    #[test]
    fn full_policy_keeps_length() {
        let policy = TextMaskPolicy::default();
        assert_eq!(policy.apply_to("secret"), "******");

        let policy = TextMaskPolicy::full().with_mask_char('x');
        assert_eq!(policy.apply_to("secret"), "xxxxxx");
    }

    #[test]
    fn policy_overrides_mask_char() {
        let policy = TextMaskPolicy::keep_first(2).with_mask_char('#');
        assert_eq!(policy.apply_to("abcdef"), "ab####");

        let policy = TextMaskPolicy::keep_middle(2).with_mask_char('-');
        assert_eq!(policy.apply_to("abcdef"), "--cd--");

        let policy = TextMaskPolicy::digits_last(2).with_mask_char('#');
        assert_eq!(policy.apply_to("12-34-56"), "##-##-56");

        let policy = TextMaskPolicy::email_local(1).with_mask_char('#');
        assert_eq!(policy.apply_to("ahmet@example.com"), "a####@example.com");
    }

    #[test]
    fn phone_policy_ignores_mask_char() {
        let policy = TextMaskPolicy::phone().with_mask_char('#');
        assert_eq!(policy.apply_to("+90 555 123 4567"), "+90 5** *** 4567");
    }
}
