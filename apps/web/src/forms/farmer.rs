use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::fields::{self, choice_enum, FieldKind, FieldSpec, FormSchema};
use crate::forms::Submission;

choice_enum! {
    pub enum Irrigation {
        Rainfed => ("rainfed", "Rainfed"),
        Canal => ("canal", "Canal"),
        Borewell => ("borewell", "Borewell / tubewell"),
        Drip => ("drip", "Drip"),
        Sprinkler => ("sprinkler", "Sprinkler"),
    }
}

choice_enum! {
    /// Major Indian soil groups. Shared with the advisory flows.
    pub enum SoilType {
        Alluvial => ("alluvial", "Alluvial"),
        Black => ("black", "Black (regur)"),
        Red => ("red", "Red"),
        Laterite => ("laterite", "Laterite"),
        Sandy => ("sandy", "Sandy / desert"),
        Clay => ("clay", "Clay"),
        Loamy => ("loamy", "Loamy"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FarmerRegistration {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub farmer_name: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(custom(function = "fields::validate_phone"))]
    pub phone: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "Village must be 2 to 60 characters"))]
    pub village: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "District must be 2 to 60 characters"))]
    pub district: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "State must be 2 to 60 characters"))]
    pub state: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter the land size in acres"),
        range(
            exclusive_min = 0.0,
            max = 1000.0,
            message = "Land size must be more than 0 and at most 1000 acres"
        )
    )]
    pub land_size_acres: Option<f64>,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "Crop must be 2 to 60 characters"))]
    pub primary_crop: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the irrigation source"))]
    pub irrigation: Option<Irrigation>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the soil type"))]
    pub soil_type: Option<SoilType>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(range(min = 0.0, message = "Income cannot be negative"))]
    pub annual_income: Option<f64>,

    #[serde(default, deserialize_with = "fields::checkbox")]
    #[validate(custom(function = "fields::must_be_checked"))]
    pub consent: bool,
}

impl FormSchema for FarmerRegistration {
    const TITLE: &'static str = "Farmer registration";
    const INTRO: &'static str = "Field staff and farmers can register a farm here. \
        The details help us plan soil testing, training and input support for your village.";
    const SUBMIT_LABEL: &'static str = "Register farm";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("farmer_name", "Farmer name", FieldKind::Text),
        FieldSpec::new("phone", "Mobile number", FieldKind::Tel),
        FieldSpec::new("village", "Village", FieldKind::Text),
        FieldSpec::new("district", "District", FieldKind::Text),
        FieldSpec::new("state", "State", FieldKind::Text),
        FieldSpec::new(
            "land_size_acres",
            "Land size (acres)",
            FieldKind::Number {
                min: Some(0.0),
                step: "0.01",
            },
        ),
        FieldSpec::new("primary_crop", "Primary crop", FieldKind::Text),
        FieldSpec::new("irrigation", "Irrigation", FieldKind::Select(Irrigation::OPTIONS)),
        FieldSpec::new("soil_type", "Soil type", FieldKind::Select(SoilType::OPTIONS)),
        FieldSpec::new(
            "annual_income",
            "Annual farm income (₹)",
            FieldKind::Number {
                min: Some(0.0),
                step: "1",
            },
        )
        .optional(),
        FieldSpec::new(
            "consent",
            "The farmer agrees to share these details with the foundation",
            FieldKind::Checkbox,
        ),
    ];
}

impl Submission for FarmerRegistration {
    const KIND: &'static str = "farmer_registration";

    fn toast(&self) -> String {
        format!("Farmer details for {} recorded.", self.farmer_name)
    }
}
