use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::flows::prompts::{ORGANIC_PROMPT_TEMPLATE, ORGANIC_ROLE};
use crate::flows::{fill_template, or_unspecified, Flow};
use crate::forms::fields::{self, FieldKind, FieldSpec, FormSchema};
use crate::llm_client::prompts::advisory_system;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrganicFarmingInput {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "Crop must be 2 to 60 characters"))]
    pub crop: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter the farm size in acres"),
        range(exclusive_min = 0.0, message = "Farm size must be more than 0 acres")
    )]
    pub farm_size_acres: Option<f64>,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 3, max = 1000, message = "Describe your current practices"))]
    pub current_practices: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 3, max = 1000, message = "Describe the challenges you face"))]
    pub challenges: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Region must be 2 to 100 characters"))]
    pub region: String,
}

impl FormSchema for OrganicFarmingInput {
    const TITLE: &'static str = "Organic farming advice";
    const INTRO: &'static str = "Tell us how you farm today and what holds you back. \
        You will get organic practices and a step-by-step transition plan.";
    const SUBMIT_LABEL: &'static str = "Get advice";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("crop", "Crop", FieldKind::Text),
        FieldSpec::new(
            "farm_size_acres",
            "Farm size (acres)",
            FieldKind::Number {
                min: Some(0.0),
                step: "0.01",
            },
        ),
        FieldSpec::new("current_practices", "Current practices", FieldKind::TextArea)
            .help("Fertilizers, sprays, tillage, irrigation you use now"),
        FieldSpec::new("challenges", "Main challenges", FieldKind::TextArea),
        FieldSpec::new("region", "District / region", FieldKind::Text),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicPractice {
    pub practice: String,
    pub description: String,
    pub benefits: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganicFarmingOutput {
    pub practices: Vec<OrganicPractice>,
    pub transition_plan: String,
    pub certification_tips: String,
}

pub struct OrganicFarmingFlow;

impl Flow for OrganicFarmingFlow {
    type Input = OrganicFarmingInput;
    type Output = OrganicFarmingOutput;

    const NAME: &'static str = "organic_farming_advice";
    const SLUG: &'static str = "organic-farming";
    const DESCRIPTION: &'static str =
        "Organic practices, a transition plan and certification tips for your farm.";

    fn system() -> String {
        advisory_system(ORGANIC_ROLE)
    }

    fn prompt(input: &OrganicFarmingInput) -> String {
        fill_template(
            ORGANIC_PROMPT_TEMPLATE,
            &[
                ("crop", input.crop.clone()),
                ("farm_size_acres", or_unspecified(input.farm_size_acres)),
                ("current_practices", input.current_practices.clone()),
                ("challenges", input.challenges.clone()),
                ("region", input.region.clone()),
            ],
        )
    }

    fn check(output: &OrganicFarmingOutput) -> Result<(), String> {
        if output.practices.is_empty() {
            return Err("no organic practices".to_string());
        }
        Ok(())
    }
}
