// Visitor forms: schema, validation and mock submission.
// Nothing is persisted. An accepted submission is logged and acknowledged with a toast.

pub mod fields;

pub mod careers;
pub mod contact;
pub mod donation;
pub mod farmer;
pub mod handlers;
pub mod volunteer;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::forms::fields::{parse_submission, FormSchema};

/// A form whose accepted submissions are acknowledged with a toast.
pub trait Submission: FormSchema + DeserializeOwned + Serialize + Validate {
    /// Name used in logs and acknowledgements.
    const KIND: &'static str;

    fn toast(&self) -> String;
}

/// Forms reachable through `POST /api/v1/forms/:kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Volunteer,
    Donation,
    Careers,
    Farmers,
    Contact,
}

/// Response to an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement {
    pub status: &'static str,
    pub form: &'static str,
    pub reference: Uuid,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Parses, validates and acknowledges a submission.
pub fn submit<T: Submission>(value: Value) -> Result<(T, Acknowledgement), AppError> {
    let form: T = parse_submission(value)?;
    let ack = acknowledge(&form);
    Ok((form, ack))
}

/// Logs an accepted submission in place of persisting it.
pub fn acknowledge<T: Submission>(form: &T) -> Acknowledgement {
    let ack = Acknowledgement {
        status: "received",
        form: T::KIND,
        reference: Uuid::new_v4(),
        message: form.toast(),
        received_at: Utc::now(),
    };

    let payload = serde_json::to_string(form).unwrap_or_default();
    info!(
        form = T::KIND,
        reference = %ack.reference,
        %payload,
        "Form submission received"
    );

    ack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::volunteer::VolunteerSignup;
    use serde_json::json;

    #[test]
    fn test_submit_acknowledges_valid_form() {
        let (form, ack) = submit::<VolunteerSignup>(json!({
            "full_name": "Kabir Das",
            "email": "kabir@example.org",
            "city": "Varanasi",
            "area_of_interest": "field_work",
            "availability": "flexible",
            "agree_to_terms": true
        }))
        .unwrap();
        assert_eq!(form.city, "Varanasi");
        assert_eq!(ack.status, "received");
        assert_eq!(ack.form, "volunteer");
        assert!(ack.message.contains("Kabir"));
    }

    #[test]
    fn test_submit_rejects_invalid_form() {
        let err = submit::<VolunteerSignup>(json!({"email": "nope"})).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_form_kind_from_path_segment() {
        let kind: FormKind = serde_json::from_value(json!("farmers")).unwrap();
        assert_eq!(kind, FormKind::Farmers);
        assert!(serde_json::from_value::<FormKind>(json!("newsletter")).is_err());
    }
}
