use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::fields::{self, first_name, FieldKind, FieldSpec, FormSchema};
use crate::forms::Submission;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 3, max = 120, message = "Subject must be 3 to 120 characters"))]
    pub subject: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 10, max = 2000, message = "Message must be 10 to 2000 characters"))]
    pub message: String,
}

impl FormSchema for ContactMessage {
    const TITLE: &'static str = "Write to us";
    const INTRO: &'static str = "Questions about our programs, partnerships or a donation? \
        We answer every message within three working days.";
    const SUBMIT_LABEL: &'static str = "Send message";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Your name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email),
        FieldSpec::new("subject", "Subject", FieldKind::Text),
        FieldSpec::new("message", "Message", FieldKind::TextArea),
    ];
}

impl Submission for ContactMessage {
    const KIND: &'static str = "contact";

    fn toast(&self) -> String {
        format!("Thanks, {}! Your message is on its way.", first_name(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields::parse_submission;
    use serde_json::json;

    #[test]
    fn test_contact_message_rules() {
        let ok: ContactMessage = parse_submission(json!({
            "name": "Lakshmi Iyer",
            "email": "lakshmi@example.com",
            "subject": "Partnership",
            "message": "We run a farmer producer company and would like to partner."
        }))
        .unwrap();
        assert_eq!(ok.toast(), "Thanks, Lakshmi! Your message is on its way.");

        let err = parse_submission::<ContactMessage>(json!({
            "name": "Lakshmi Iyer",
            "email": "lakshmi@example.com",
            "subject": "Hi",
            "message": "short"
        }));
        assert!(err.is_err());
    }
}
