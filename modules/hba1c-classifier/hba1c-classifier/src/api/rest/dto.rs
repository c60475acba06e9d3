use hba1c_classifier_sdk::{Classification, Hba1cInput};
use serde::Serialize;
use serde_json::Value;
use serde_json::value::RawValue;

/// Success body: `{"hba1c": <float>, "status": <string>, "category": <string>}`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationDto {
    pub hba1c: f64,
    pub status: &'static str,
    pub category: &'static str,
}

impl From<Classification> for ClassificationDto {
    fn from(c: Classification) -> Self {
        Self {
            hba1c: c.hba1c,
            status: c.status.as_str(),
            category: c.category(),
        }
    }
}

/// Convert a JSON body value into a raw input.
///
/// `null` counts as absent.
#[must_use]
pub fn input_from_json(value: &Value) -> Option<Hba1cInput> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(Hba1cInput::Number(n.as_f64().unwrap_or(f64::NAN))),
        Value::String(s) => Some(Hba1cInput::Text(s.clone())),
        Value::Bool(_) => Some(Hba1cInput::Unsupported { kind: "boolean" }),
        Value::Array(_) => Some(Hba1cInput::Unsupported { kind: "array" }),
        Value::Object(_) => Some(Hba1cInput::Unsupported { kind: "object" }),
    }
}

/// Convert a raw body value into a raw input.
///
/// A number too large for `f64` fails to parse as a [`Value`]; it is kept
/// as a non-finite number so validation rejects it instead of dropping it.
#[must_use]
pub fn input_from_raw(raw: &RawValue) -> Option<Hba1cInput> {
    match serde_json::from_str::<Value>(raw.get()) {
        Ok(value) => input_from_json(&value),
        Err(_) => Some(Hba1cInput::Number(
            raw.get().trim().parse().unwrap_or(f64::NAN),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hba1c_classifier_sdk::GlycemicStatus;
    use serde_json::json;

    #[test]
    fn test_dto_serializes_all_fields() {
        let dto = ClassificationDto::from(Classification {
            hba1c: 6.5,
            status: GlycemicStatus::Diabetes,
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            json!({"hba1c": 6.5, "status": "diabetes", "category": "Diabetes (\u{2265}6.5%)"})
        );
    }

    #[test]
    fn test_whole_number_keeps_float_form() {
        let dto = ClassificationDto::from(Classification {
            hba1c: 6.0,
            status: GlycemicStatus::Prediabetes,
        });
        let text = serde_json::to_string(&dto).unwrap();
        assert!(text.contains(r#""hba1c":6.0"#), "{text}");
    }

    #[test]
    fn test_input_from_json_kinds() {
        assert_eq!(input_from_json(&json!(null)), None);
        assert_eq!(input_from_json(&json!(5)), Some(Hba1cInput::Number(5.0)));
        assert_eq!(
            input_from_json(&json!("6.1")),
            Some(Hba1cInput::Text("6.1".to_owned()))
        );
        assert_eq!(
            input_from_json(&json!(true)),
            Some(Hba1cInput::Unsupported { kind: "boolean" })
        );
        assert_eq!(
            input_from_json(&json!([5.5])),
            Some(Hba1cInput::Unsupported { kind: "array" })
        );
        assert_eq!(
            input_from_json(&json!({"v": 1})),
            Some(Hba1cInput::Unsupported { kind: "object" })
        );
    }

    fn raw(text: &str) -> Box<RawValue> {
        RawValue::from_string(text.to_owned()).unwrap()
    }

    #[test]
    fn test_input_from_raw_matches_json_kinds() {
        assert_eq!(input_from_raw(&raw("null")), None);
        assert_eq!(input_from_raw(&raw("6.4")), Some(Hba1cInput::Number(6.4)));
        assert_eq!(
            input_from_raw(&raw(r#""5.9""#)),
            Some(Hba1cInput::Text("5.9".to_owned()))
        );
    }

    #[test]
    fn test_overflowing_number_stays_present_and_non_finite() {
        for text in ["1e400", "-1e400"] {
            match input_from_raw(&raw(text)) {
                Some(Hba1cInput::Number(n)) => assert!(!n.is_finite(), "{text}: {n}"),
                other => panic!("{text}: expected a number, got {other:?}"),
            }
        }
    }
}
