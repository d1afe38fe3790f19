use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::fields::{self, choice_enum, FieldKind, FieldSpec, FormSchema};
use crate::forms::Submission;

choice_enum! {
    pub enum Position {
        FieldCoordinator => ("field_coordinator", "Field Coordinator"),
        Agronomist => ("agronomist", "Agronomist"),
        ProgramManager => ("program_manager", "Program Manager"),
        CommunicationsAssociate => ("communications_associate", "Communications Associate"),
    }
}

/// A current vacancy shown on the careers page.
pub struct Opening {
    pub position: Position,
    pub location: &'static str,
    pub summary: &'static str,
}

pub const OPENINGS: &[Opening] = &[
    Opening {
        position: Position::FieldCoordinator,
        location: "Nashik, Maharashtra",
        summary: "Coordinate village meetings, soil-testing drives and farmer \
            field schools across 20 villages.",
    },
    Opening {
        position: Position::Agronomist,
        location: "Dharwad, Karnataka",
        summary: "Design crop plans with farmer groups and review advisory \
            content before it reaches the field.",
    },
    Opening {
        position: Position::ProgramManager,
        location: "Pune (hybrid)",
        summary: "Own budgets, donor reporting and delivery for the farmer \
            support program.",
    },
    Opening {
        position: Position::CommunicationsAssociate,
        location: "Remote",
        summary: "Tell the stories of the families we work with through \
            reports, social media and our newsletter.",
    },
];

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CareerApplication {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub full_name: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(custom(function = "fields::validate_phone"))]
    pub phone: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the position you are applying for"))]
    pub position: Option<Position>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter whole years between 0 and 50"),
        range(max = 50, message = "Enter whole years between 0 and 50")
    )]
    pub experience_years: Option<u32>,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(url(message = "Enter a link to your resume"))]
    pub resume_url: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(
        min = 50,
        max = 2000,
        message = "Cover letter must be 50 to 2000 characters"
    ))]
    pub cover_letter: String,
}

impl FormSchema for CareerApplication {
    const TITLE: &'static str = "Apply to join us";
    const INTRO: &'static str = "Share a link to your resume (Google Drive, Dropbox or \
        similar) and tell us why the role matters to you.";
    const SUBMIT_LABEL: &'static str = "Submit application";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("full_name", "Full name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email),
        FieldSpec::new("phone", "Phone", FieldKind::Tel),
        FieldSpec::new("position", "Position", FieldKind::Select(Position::OPTIONS)),
        FieldSpec::new(
            "experience_years",
            "Years of experience",
            FieldKind::Number {
                min: Some(0.0),
                step: "1",
            },
        ),
        FieldSpec::new("resume_url", "Resume link", FieldKind::Url),
        FieldSpec::new("cover_letter", "Cover letter", FieldKind::TextArea)
            .help("50 to 2000 characters"),
    ];
}

impl Submission for CareerApplication {
    const KIND: &'static str = "career_application";

    fn toast(&self) -> String {
        let title = self.position.map(|p| p.label()).unwrap_or("the role");
        format!("Application received for {title}. We will be in touch within two weeks.")
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
            "full_name": "Farida Sheikh",
            "email": "farida@example.in",
            "phone": "9876543210",
            "position": "agronomist",
            "experience_years": "6",
            "resume_url": "https://drive.example.com/farida-cv.pdf",
            "cover_letter": "I have spent six years running soil health camps with farmer producer organisations."
        })
    }

    fn rejected_fields(value: Value) -> Vec<String> {
        match parse_submission::<CareerApplication>(value) {
            Err(AppError::Validation(errors)) => field_messages(&errors).into_keys().collect(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_application() {
        let app: CareerApplication = parse_submission(valid()).unwrap();
        assert_eq!(app.position, Some(Position::Agronomist));
        assert_eq!(app.experience_years, Some(6));
        assert!(app.toast().starts_with("Application received for Agronomist."));
    }

    #[test]
    fn test_short_cover_letter_rejected() {
        let mut value = valid();
        value["cover_letter"] = json!("Hire me.");
        assert_eq!(rejected_fields(value), vec!["cover_letter"]);
    }

    #[test]
    fn test_resume_must_be_url() {
        let mut value = valid();
        value["resume_url"] = json!("my resume");
        assert_eq!(rejected_fields(value), vec!["resume_url"]);
    }

    #[test]
    fn test_phone_is_required() {
        let mut value = valid();
        value["phone"] = json!("");
        assert_eq!(rejected_fields(value), vec!["phone"]);
    }

    #[test]
    fn test_experience_range() {
        let mut value = valid();
        value["experience_years"] = json!(75);
        assert_eq!(rejected_fields(value), vec!["experience_years"]);
    }

    #[test]
    fn test_negative_or_fractional_experience_gets_one_message() {
        for bad in ["-1", "2.5", "75"] {
            let mut value = valid();
            value["experience_years"] = json!(bad);
            match parse_submission::<CareerApplication>(value) {
                Err(AppError::Validation(errors)) => assert_eq!(
                    field_messages(&errors)["experience_years"],
                    vec!["Enter whole years between 0 and 50"],
                    "{bad}"
                ),
                other => panic!("expected validation failure for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_every_opening_is_a_selectable_position() {
        assert_eq!(OPENINGS.len(), Position::OPTIONS.len());
        for opening in OPENINGS {
            assert!(Position::OPTIONS
                .iter()
                .any(|(value, _)| *value == opening.position.value()));
        }
    }
}
