use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::fields::{self, choice_enum, FieldKind, FieldSpec, FormSchema};
use crate::forms::Submission;

/// Smallest pledge accepted, in rupees.
pub const MIN_DONATION: f64 = 100.0;

choice_enum! {
    pub enum Frequency {
        OneTime => ("one_time", "One-time"),
        Monthly => ("monthly", "Monthly"),
    }
}

choice_enum! {
    pub enum Program {
        FarmerSupport => ("farmer_support", "Farmer support"),
        Education => ("education", "Rural education"),
        Healthcare => ("healthcare", "Community healthcare"),
        WhereNeeded => ("where_needed", "Where it is needed most"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DonationPledge {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub full_name: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default, deserialize_with = "fields::optional_text")]
    #[validate(custom(function = "fields::validate_phone"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter a valid amount"),
        range(min = 100.0, max = 1000000.0, message = "Donations must be between ₹100 and ₹10,00,000")
    )]
    pub amount: Option<f64>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose how often you want to give"))]
    pub frequency: Option<Frequency>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose a program to support"))]
    pub program: Option<Program>,

    /// Needed only for an 80G tax receipt. Never written to logs.
    #[serde(default, deserialize_with = "fields::optional_text", skip_serializing)]
    #[validate(custom(function = "fields::validate_pan"))]
    pub pan_number: Option<String>,

    #[serde(default, deserialize_with = "fields::checkbox")]
    pub anonymous: bool,
}

impl FormSchema for DonationPledge {
    const TITLE: &'static str = "Donate";
    const INTRO: &'static str = "Every rupee goes to work in the field: seeds, soil testing, \
        classrooms and health camps. Pledge below and our team will send payment details \
        to your email.";
    const SUBMIT_LABEL: &'static str = "Pledge donation";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("full_name", "Full name", FieldKind::Text),
        FieldSpec::new("email", "Email", FieldKind::Email),
        FieldSpec::new("phone", "Phone", FieldKind::Tel).optional(),
        FieldSpec::new(
            "amount",
            "Amount (₹)",
            FieldKind::Number {
                min: Some(MIN_DONATION),
                step: "1",
            },
        )
        .help("Minimum ₹100"),
        FieldSpec::new("frequency", "Frequency", FieldKind::Select(Frequency::OPTIONS)),
        FieldSpec::new("program", "Program", FieldKind::Select(Program::OPTIONS)),
        FieldSpec::new("pan_number", "PAN (for 80G receipt)", FieldKind::Text)
            .optional()
            .help("Format ABCDE1234F"),
        FieldSpec::new(
            "anonymous",
            "Keep my name off the donor wall",
            FieldKind::Checkbox,
        )
        .optional(),
    ];
}

impl Submission for DonationPledge {
    const KIND: &'static str = "donation";

    fn toast(&self) -> String {
        let amount = self.amount.unwrap_or_default();
        match self.frequency {
            Some(Frequency::Monthly) => {
                format!("Thank you for your monthly donation of ₹{amount:.0}!")
            }
            _ => format!("Thank you for your donation of ₹{amount:.0}!"),
        }
    }
}
