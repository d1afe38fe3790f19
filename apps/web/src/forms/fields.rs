//! Form schema building blocks shared by visitor forms and advisory flow inputs.
//!
//! A form is a `Deserialize + Validate` struct plus a `FormSchema` descriptor that the
//! HTML renderer walks. HTML forms deliver every value as a string, so the serde helpers
//! here coerce strings into numbers, enums and booleans. A value that cannot be coerced
//! becomes `None` and is reported by the `required` rule instead of failing the request.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::errors::AppError;

/// Declares a string-backed choice enum with its `<select>` options.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(#[serde(rename = $value)] $variant,)+
        }

        impl $name {
            #[allow(dead_code)]
            pub const OPTIONS: &'static [(&'static str, &'static str)] = &[$(($value, $label)),+];

            #[allow(dead_code)]
            pub fn value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            #[allow(dead_code)]
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}
pub(crate) use choice_enum;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    Number { min: Option<f64>, step: &'static str },
    TextArea,
    Select(&'static [(&'static str, &'static str)]),
    Checkbox,
}

/// One input on a rendered form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub help: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            help: None,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

/// Describes how a form is presented: heading, intro copy and ordered fields.
pub trait FormSchema {
    const TITLE: &'static str;
    const INTRO: &'static str;
    const SUBMIT_LABEL: &'static str;
    const FIELDS: &'static [FieldSpec];
}

/// Raw submitted values, kept so a rejected form can be redisplayed as typed.
pub type RawValues = BTreeMap<String, String>;

/// Turns a submitted JSON object (or string map from an HTML form) into a validated form.
pub fn parse_submission<T>(value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    if !value.is_object() {
        return Err(AppError::BadRequest(
            "Expected a JSON object of form fields".to_string(),
        ));
    }
    let form: T = serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("Malformed submission: {e}")))?;
    form.validate()?;
    Ok(form)
}

/// Converts HTML form pairs into the JSON shape `parse_submission` expects.
pub fn raw_to_value(raw: &RawValues) -> Value {
    Value::Object(
        raw.iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// serde helpers
// ────────────────────────────────────────────────────────────────────────────

/// Free text: trimmed, numbers accepted as their decimal form, missing or null is empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Optional free text. Same coercion as `text`, with blank or missing as `None`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = text(deserializer)?;
    Ok(Some(text).filter(|t| !t.is_empty()))
}

/// Optional typed value. Blank or unparseable input becomes `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(coerce))
}

fn coerce<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            serde_json::from_value(Value::String(s.to_string()))
                .ok()
                .or_else(|| serde_json::from_str(s).ok())
        }
        other => serde_json::from_value(other).ok(),
    }
}

/// HTML checkboxes send `on` when ticked and nothing otherwise.
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "on" | "true" | "yes" | "1"
        ),
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// custom validation rules
// ────────────────────────────────────────────────────────────────────────────

/// 10 to 15 digits; spaces, dashes, parentheses and a leading `+` are ignored.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(invalid("phone", "Enter a valid phone number")),
        }
    }
    if !(10..=15).contains(&digits) {
        return Err(invalid("phone", "Phone number must have 10 to 15 digits"));
    }
    Ok(())
}

/// Indian PAN: five letters, four digits, one letter.
pub fn validate_pan(pan: &str) -> Result<(), ValidationError> {
    let pan = pan.trim();
    let bytes = pan.as_bytes();
    let valid = bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase();
    if valid {
        Ok(())
    } else {
        Err(invalid("pan", "PAN must look like ABCDE1234F"))
    }
}

pub fn must_be_checked(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        Err(invalid("must_be_checked", "This box must be ticked to continue"))
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// First word of a name, for friendly toasts.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    choice_enum! {
        enum Colour {
            Red => ("red", "Red"),
            DarkGreen => ("dark_green", "Dark green"),
        }
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[serde(default, deserialize_with = "text")]
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[serde(default, deserialize_with = "lenient")]
        #[validate(required(message = "Enter a valid age"), range(min = 18, message = "Too young"))]
        age: Option<u32>,
        #[serde(default, deserialize_with = "lenient")]
        colour: Option<Colour>,
        #[serde(default, deserialize_with = "checkbox")]
        agree: bool,
        #[serde(default, deserialize_with = "optional_text")]
        note: Option<String>,
    }

    #[test]
    fn test_strings_are_coerced() {
        let sample: Sample = parse_submission(json!({
            "name": "  Asha  ",
            "age": "30",
            "colour": "dark_green",
            "agree": "on"
        }))
        .unwrap();
        assert_eq!(sample.name, "Asha");
        assert_eq!(sample.age, Some(30));
        assert_eq!(sample.colour, Some(Colour::DarkGreen));
        assert!(sample.agree);
    }

    #[test]
    fn test_unparseable_number_is_reported_as_field_error() {
        let err = parse_submission::<Sample>(json!({"name": "Asha", "age": "thirty"})).unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        let messages = crate::errors::field_messages(&errors);
        assert_eq!(messages["age"], vec!["Enter a valid age".to_string()]);
    }

    #[test]
    fn test_blank_required_text_rejected() {
        let err = parse_submission::<Sample>(json!({"name": "   ", "age": 20})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_choice_becomes_none() {
        let sample: Sample =
            parse_submission(json!({"name": "A", "age": 40, "colour": "purple"})).unwrap();
        assert!(sample.colour.is_none());
        assert!(!sample.agree);
    }

    #[test]
    fn test_optional_text_keeps_numbers_and_drops_blanks() {
        let sample: Sample =
            parse_submission(json!({"name": "A", "age": 40, "note": 12345})).unwrap();
        assert_eq!(sample.note.as_deref(), Some("12345"));

        let sample: Sample =
            parse_submission(json!({"name": "A", "age": 40, "note": "  "})).unwrap();
        assert!(sample.note.is_none());

        let sample: Sample = parse_submission(json!({"name": "A", "age": 40})).unwrap();
        assert!(sample.note.is_none());
    }

    #[test]
    fn test_non_object_is_bad_request() {
        let err = parse_submission::<Sample>(json!(["name"])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_choice_enum_options_and_labels() {
        assert_eq!(Colour::OPTIONS[1], ("dark_green", "Dark green"));
        assert_eq!(Colour::DarkGreen.label(), "Dark green");
        assert_eq!(Colour::Red.value(), "red");
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("+91 98765-43210").is_ok());
        assert!(validate_phone("(022) 2345 6789").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("98765abc43").is_err());
    }

    #[test]
    fn test_pan_rules() {
        assert!(validate_pan("ABCDE1234F").is_ok());
        assert!(validate_pan("abcde1234f").is_err());
        assert!(validate_pan("ABCD12345F").is_err());
        assert!(validate_pan("ABCDE1234").is_err());
    }

    #[test]
    fn test_must_be_checked() {
        assert!(must_be_checked(&true).is_ok());
        assert!(must_be_checked(&false).is_err());
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Ravi Kumar"), "Ravi");
        assert_eq!(first_name(""), "");
    }
}
