//! Serialization tests for the `serde` feature.
//!
//! Masking parameters round-trip through JSON, and `Masked<T, P>` serializes
//! only its masked form.

#![cfg(feature = "serde")]

use datamask::{CardNumber, DigitMaskConfig, Email, EmailConfig, MaskDirection, MaskSpec, Masked};
use serde::{Deserialize, Serialize};
use serde_json::json;

mod parameters {
    use super::*;

    #[test]
    fn direction_uses_snake_case_names() {
        assert_eq!(
            serde_json::to_value(MaskDirection::FromMiddle).unwrap(),
            json!("from_middle")
        );
        let direction: MaskDirection = serde_json::from_value(json!("from_end")).unwrap();
        assert_eq!(direction, MaskDirection::FromEnd);
    }

    #[test]
    fn mask_spec_round_trips() {
        let spec = MaskSpec::from_start(3).with_mask_char('#');
        let value = serde_json::to_value(spec).unwrap();
        assert_eq!(
            value,
            json!({ "visible_count": 3, "direction": "from_start", "mask_char": "#" })
        );
        let back: MaskSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, spec);
        assert_eq!(back.apply_to("abcdefg"), "abc####");
    }

    #[test]
    fn configs_deserialize_from_json() {
        let digits: DigitMaskConfig =
            serde_json::from_value(json!({ "visible_suffix": 2, "mask_char": "x" })).unwrap();
        assert_eq!(digits.apply_to("12 34"), "xx 34");

        let email: EmailConfig =
            serde_json::from_value(json!({ "visible_prefix": 2, "mask_char": "*" })).unwrap();
        assert_eq!(email.apply_to("alice@example.com"), "al***@example.com");
    }
}

mod masked_wrapper {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Payment {
        amount: u64,
        card: Masked<String, CardNumber>,
        email: Masked<String, Email>,
    }

    #[test]
    fn serializes_masked_form_only() {
        let payment = Payment {
            amount: 1200,
            card: Masked::new("4111 1111 1111 1234".to_string()),
            email: Masked::new("ahmet@example.com".to_string()),
        };
        let value = serde_json::to_value(&payment).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 1200,
                "card": "**** **** **** 1234",
                "email": "a****@example.com",
            })
        );
    }

    #[test]
    fn deserializes_raw_value() {
        let payment: Payment = serde_json::from_value(json!({
            "amount": 5,
            "card": "4111 1111 1111 1234",
            "email": "ahmet@example.com",
        }))
        .unwrap();
        assert_eq!(payment.card.expose(), "4111 1111 1111 1234");
        assert_eq!(payment.email.to_string(), "a****@example.com");
    }
}
