use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::fields::{
    self, choice_enum, first_name, FieldKind, FieldSpec, FormSchema,
};
use crate::forms::Submission;

choice_enum! {
    pub enum InterestArea {
        FieldWork => ("field_work", "Field work with farmers"),
        Teaching => ("teaching", "Teaching & mentoring"),
        Healthcare => ("healthcare", "Health camps"),
        Fundraising => ("fundraising", "Fundraising & events"),
        DigitalOutreach => ("digital_outreach", "Digital outreach"),
    }
}

choice_enum! {
    pub enum Availability {
        Weekdays => ("weekdays", "Weekdays"),
        Weekends => ("weekends", "Weekends"),
        Flexible => ("flexible", "Flexible"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VolunteerSignup {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub full_name: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default, deserialize_with = "fields::optional_text")]
    #[validate(custom(function = "fields::validate_phone"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "City must be 2 to 60 characters"))]
    pub city: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose an area of interest"))]
    pub area_of_interest: Option<InterestArea>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Tell us when you are available"))]
    pub availability: Option<Availability>,

    #[serde(default, deserialize_with = "fields::optional_text")]
    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "fields::checkbox")]
    #[validate(custom(function = "fields::must_be_checked"))]
    pub agree_to_terms: bool,
}

impl FormSchema for VolunteerSignup {
    const TITLE: &'static str = "Become a Volunteer";
    const INTRO: &'static str = "Give a few hours a month and help farming families \
        build better livelihoods. Tell us a little about yourself and we will match you \
        with a program near you.";
    const SUBMIT_LABEL: &'static str = "Sign me up";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("full_name", "Full name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email),
        FieldSpec::new("phone", "Phone", FieldKind::Tel).optional(),
        FieldSpec::new("city", "City", FieldKind::Text),
        FieldSpec::new(
            "area_of_interest",
            "Area of interest",
            FieldKind::Select(InterestArea::OPTIONS),
        ),
        FieldSpec::new(
            "availability",
            "Availability",
            FieldKind::Select(Availability::OPTIONS),
        ),
        FieldSpec::new("message", "Anything else we should know?", FieldKind::TextArea)
            .optional()
            .help("Up to 500 characters"),
        FieldSpec::new(
            "agree_to_terms",
            "I agree to the volunteer code of conduct",
            FieldKind::Checkbox,
        ),
    ];
}

impl Submission for VolunteerSignup {
    const KIND: &'static str = "volunteer";

    fn toast(&self) -> String {
        format!(
            "Thank you for volunteering, {}! Our team will reach out soon.",
            first_name(&self.full_name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{field_messages, AppError};
    use crate::forms::fields::parse_submission;
    use serde_json::{json, Value};

    fn valid() -> Value {
        json!({
            "full_name": "Meera Nair",
            "email": "meera@example.org",
            "phone": "",
            "city": "Pune",
            "area_of_interest": "teaching",
            "availability": "weekends",
            "message": "",
            "agree_to_terms": "on"
        })
    }

    fn rejected_fields(value: Value) -> Vec<String> {
        match parse_submission::<VolunteerSignup>(value) {
            Err(AppError::Validation(errors)) => field_messages(&errors).into_keys().collect(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_signup_accepted() {
        let form: VolunteerSignup = parse_submission(valid()).unwrap();
        assert_eq!(form.area_of_interest, Some(InterestArea::Teaching));
        assert!(form.phone.is_none());
        assert!(form.message.is_none());
        assert_eq!(form.toast(), "Thank you for volunteering, Meera! Our team will reach out soon.");
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut value = valid();
        value["email"] = json!("meera-at-example");
        assert_eq!(rejected_fields(value), vec!["email"]);
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("agree_to_terms");
        assert_eq!(rejected_fields(value), vec!["agree_to_terms"]);
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let fields = rejected_fields(json!({}));
        for name in [
            "agree_to_terms",
            "area_of_interest",
            "availability",
            "city",
            "email",
            "full_name",
        ] {
            assert!(fields.contains(&name.to_string()), "missing {name} in {fields:?}");
        }
        assert!(!fields.contains(&"phone".to_string()));
    }

    #[test]
    fn test_short_phone_rejected_when_present() {
        let mut value = valid();
        value["phone"] = json!("12345");
        assert_eq!(rejected_fields(value), vec!["phone"]);
    }

    #[test]
    fn test_numeric_phone_is_checked_not_dropped() {
        let mut value = valid();
        value["phone"] = json!(12345);
        assert_eq!(rejected_fields(value), vec!["phone"]);

        let mut value = valid();
        value["phone"] = json!(9876543210u64);
        let form: VolunteerSignup = parse_submission(value).unwrap();
        assert_eq!(form.phone.as_deref(), Some("9876543210"));
    }
}
