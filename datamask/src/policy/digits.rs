//! Format-preserving masking of digit sequences.
//!
//! Only decimal digits (Unicode category `Nd`) are masked; spaces, dashes,
//! letters and other numeric symbols such as `½` or `²` keep their
//! values and positions. This is what card numbers and IBANs need: the reader
//! still sees the grouping of the original value.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use super::text::{MASK_CHAR, MaskDirection, mask};

fn is_decimal_digit(ch: char) -> bool {
    ch.general_category() == GeneralCategory::DecimalNumber
}

/// Masks the digits of `input`, keeping the last `visible_count` digits.
///
/// Digits are masked with [`mask`] anchored at the end, so the same fallback
/// applies: a count of zero, or one that is not smaller than the number of
/// digits, masks every digit. Input without digits is returned unchanged.
///
/// # Example
/// ```
/// use datamask::format_preserving_mask;
///
/// assert_eq!(
///     format_preserving_mask("4111 1111 1111 1234", 4, '*'),
///     "**** **** **** 1234"
/// );
/// ```
#[must_use]
pub fn format_preserving_mask(input: &str, visible_count: usize, mask_char: char) -> String {
    let digits_only: String = input.chars().filter(|ch| is_decimal_digit(*ch)).collect();
    let masked = mask(&digits_only, visible_count, MaskDirection::FromEnd, mask_char);

    let mut masked_digits = masked.chars();
    input
        .chars()
        .map(|ch| {
            if is_decimal_digit(ch) {
                // `masked` has exactly one char per digit of `input`.
                masked_digits.next().unwrap_or(mask_char)
            } else {
                ch
            }
        })
        .collect()
}

/// Masks a card number, keeping the last 4 digits and the original spacing.
///
/// ```
/// use datamask::mask_card_formatted;
///
/// assert_eq!(mask_card_formatted("4111-1111-1111-1234"), "****-****-****-1234");
/// ```
#[must_use]
pub fn mask_card_formatted(card: &str) -> String {
    format_preserving_mask(card, 4, MASK_CHAR)
}

/// Masks an IBAN, keeping the last 4 digits. Letters such as the country
/// code are not digits and stay visible.
///
/// ```
/// use datamask::mask_iban_formatted;
///
/// assert_eq!(
///     mask_iban_formatted("TR320010009999901234567890"),
///     "TR********************7890"
/// );
/// ```
#[must_use]
pub fn mask_iban_formatted(iban: &str) -> String {
    format_preserving_mask(iban, 4, MASK_CHAR)
}

/// Configuration for format-preserving digit masking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitMaskConfig {
    /// Number of trailing digits to keep visible.
    visible_suffix: usize,
    /// Symbol used for masked digits.
    mask_char: char,
}

impl DigitMaskConfig {
    /// Keeps the last `visible_suffix` digits.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self {
            visible_suffix,
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

    /// Applies the configuration. See [`format_preserving_mask`].
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        format_preserving_mask(value, self.visible_suffix, self.mask_char)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DigitMaskConfig, format_preserving_mask, mask_card_formatted, mask_iban_formatted,
    };

    #[test]
    fn keeps_separators_in_place() {
        assert_eq!(
            format_preserving_mask("4111 1111 1111 1234", 4, '*'),
            "**** **** **** 1234"
        );
        assert_eq!(format_preserving_mask("(555) 123-4567", 2, '#'), "(###) ###-##67");
    }

    #[test]
    fn input_without_digits_is_unchanged() {
        assert_eq!(format_preserving_mask("no digits here", 4, '*'), "no digits here");
        assert_eq!(format_preserving_mask("", 4, '*'), "");
    }

    #[test]
    fn too_few_digits_masks_every_digit() {
        assert_eq!(format_preserving_mask("12 34", 4, '*'), "** **");
        assert_eq!(format_preserving_mask("12 345", 0, '*'), "** ***");
    }

    #[test]
    fn card_and_iban_keep_last_four() {
        assert_eq!(mask_card_formatted("4111 1111 1111 1234"), "**** **** **** 1234");
        assert_eq!(mask_card_formatted("4111111111111234"), "************1234");
        assert_eq!(
            mask_iban_formatted("TR320010009999901234567890"),
            "TR********************7890"
        );
        assert_eq!(
            mask_iban_formatted("GB29 NWBK 6016 1331 9268 19"),
            "GB** NWBK **** **** **68 19"
        );
    }

    #[test]
    fn config_respects_mask_char() {
        let config = DigitMaskConfig::last(3).with_mask_char('x');
        assert_eq!(config.apply_to("12-34-56"), "xx-x4-56");
    }

    #[test]
    fn other_numeric_symbols_are_not_digits() {
        assert_eq!(format_preserving_mask("½1234", 4, '*'), "½****");
        assert_eq!(format_preserving_mask("x²=1234", 4, '*'), "x²=****");
        assert_eq!(format_preserving_mask("Ⅻ 98765", 2, '*'), "Ⅻ ***65");
    }

    #[test]
    fn multibyte_mask_char_is_not_split() {
        assert_eq!(format_preserving_mask("12 34", 1, '•'), "•• •4");
    }
}
