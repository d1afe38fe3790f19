use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::flows::prompts::{FERTILIZER_PROMPT_TEMPLATE, FERTILIZER_ROLE};
use crate::flows::{fill_template, label_or_unspecified, or_unspecified, Flow, NutrientLevel};
use crate::forms::farmer::SoilType;
use crate::forms::fields::{self, FieldKind, FieldSpec, FormSchema};
use crate::llm_client::prompts::advisory_system;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FertilizerInput {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "Crop must be 2 to 60 characters"))]
    pub crop: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the soil type"))]
    pub soil_type: Option<SoilType>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter the soil pH"),
        range(min = 3.0, max = 10.0, message = "Soil pH must be between 3 and 10")
    )]
    pub soil_ph: Option<f64>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the nitrogen level"))]
    pub nitrogen: Option<NutrientLevel>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the phosphorus level"))]
    pub phosphorus: Option<NutrientLevel>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose the potassium level"))]
    pub potassium: Option<NutrientLevel>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter the farm size in acres"),
        range(exclusive_min = 0.0, message = "Farm size must be more than 0 acres")
    )]
    pub farm_size_acres: Option<f64>,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Region must be 2 to 100 characters"))]
    pub region: String,
}

impl FormSchema for FertilizerInput {
    const TITLE: &'static str = "Fertilizer recommendation";
    const INTRO: &'static str = "Enter the values from your soil health card to get a \
        fertilizer schedule for your crop.";
    const SUBMIT_LABEL: &'static str = "Get recommendation";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("crop", "Crop", FieldKind::Text),
        FieldSpec::new("soil_type", "Soil type", FieldKind::Select(SoilType::OPTIONS)),
        FieldSpec::new(
            "soil_ph",
            "Soil pH",
            FieldKind::Number {
                min: Some(3.0),
                step: "0.1",
            },
        ),
        FieldSpec::new(
            "nitrogen",
            "Nitrogen (N)",
            FieldKind::Select(NutrientLevel::OPTIONS),
        ),
        FieldSpec::new(
            "phosphorus",
            "Phosphorus (P)",
            FieldKind::Select(NutrientLevel::OPTIONS),
        ),
        FieldSpec::new(
            "potassium",
            "Potassium (K)",
            FieldKind::Select(NutrientLevel::OPTIONS),
        ),
        FieldSpec::new(
            "farm_size_acres",
            "Farm size (acres)",
            FieldKind::Number {
                min: Some(0.0),
                step: "0.01",
            },
        ),
        FieldSpec::new("region", "District / region", FieldKind::Text),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerRecommendation {
    pub fertilizer: String,
    pub quantity_kg_per_acre: f64,
    pub timing: String,
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerOutput {
    pub recommendations: Vec<FertilizerRecommendation>,
    pub general_advice: String,
}

pub struct FertilizerFlow;

impl Flow for FertilizerFlow {
    type Input = FertilizerInput;
    type Output = FertilizerOutput;

    const NAME: &'static str = "fertilizer_recommendation";
    const SLUG: &'static str = "fertilizer";
    const DESCRIPTION: &'static str =
        "Fertilizer types, doses and timing from your soil test and crop.";

    fn system() -> String {
        advisory_system(FERTILIZER_ROLE)
    }

    fn prompt(input: &FertilizerInput) -> String {
        fill_template(
            FERTILIZER_PROMPT_TEMPLATE,
            &[
                ("crop", input.crop.clone()),
                ("soil_type", label_or_unspecified(input.soil_type, SoilType::label)),
                ("soil_ph", or_unspecified(input.soil_ph)),
                ("nitrogen", label_or_unspecified(input.nitrogen, NutrientLevel::label)),
                ("phosphorus", label_or_unspecified(input.phosphorus, NutrientLevel::label)),
                ("potassium", label_or_unspecified(input.potassium, NutrientLevel::label)),
                ("farm_size_acres", or_unspecified(input.farm_size_acres)),
                ("region", input.region.clone()),
            ],
        )
    }

    fn check(output: &FertilizerOutput) -> Result<(), String> {
        if output.recommendations.is_empty() {
            return Err("no fertilizer recommendations".to_string());
        }
        if let Some(bad) = output
            .recommendations
            .iter()
            .find(|r| !r.quantity_kg_per_acre.is_finite() || r.quantity_kg_per_acre < 0.0)
        {
            return Err(format!("invalid quantity for {}", bad.fertilizer));
        }
        Ok(())
    }
}
