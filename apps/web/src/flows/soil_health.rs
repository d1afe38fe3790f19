use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::flows::prompts::{SOIL_HEALTH_PROMPT_TEMPLATE, SOIL_HEALTH_ROLE};
use crate::flows::{fill_template, label_or_unspecified, or_unspecified, Flow, NutrientLevel};
use crate::forms::farmer::SoilType;
use crate::forms::fields::{self, choice_enum, FieldKind, FieldSpec, FormSchema};
use crate::llm_client::prompts::advisory_system;

choice_enum! {
    pub enum Moisture {
        Dry => ("dry", "Dry"),
        Moderate => ("moderate", "Moderate"),
        Wet => ("wet", "Wet / waterlogged"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SoilHealthInput {
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
    #[validate(
        required(message = "Enter the organic matter percentage"),
        range(min = 0.0, max = 100.0, message = "Organic matter must be between 0 and 100%")
    )]
    pub organic_matter_percent: Option<f64>,

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
    #[validate(required(message = "Choose the moisture level"))]
    pub moisture: Option<Moisture>,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(max = 500, message = "Crop history must be at most 500 characters"))]
    pub crop_history: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Region must be 2 to 100 characters"))]
    pub region: String,
}

impl FormSchema for SoilHealthInput {
    const TITLE: &'static str = "Soil health check";
    const INTRO: &'static str = "Use your latest soil test to get a health score, the \
        most urgent improvements and crops that suit your soil.";
    const SUBMIT_LABEL: &'static str = "Assess my soil";
    const FIELDS: &'static [FieldSpec] = &[
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
            "organic_matter_percent",
            "Organic matter (%)",
            FieldKind::Number {
                min: Some(0.0),
                step: "0.01",
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
        FieldSpec::new("moisture", "Moisture", FieldKind::Select(Moisture::OPTIONS)),
        FieldSpec::new("crop_history", "Crops in the last three seasons", FieldKind::Text)
            .optional(),
        FieldSpec::new("region", "District / region", FieldKind::Text),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilImprovement {
    pub action: String,
    pub reason: String,
    pub timeframe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilHealthOutput {
    pub health_score: u32,
    pub assessment: String,
    pub improvements: Vec<SoilImprovement>,
    pub suitable_crops: Vec<String>,
}

pub struct SoilHealthFlow;

impl Flow for SoilHealthFlow {
    type Input = SoilHealthInput;
    type Output = SoilHealthOutput;

    const NAME: &'static str = "soil_health_recommendation";
    const SLUG: &'static str = "soil-health";
    const DESCRIPTION: &'static str =
        "A soil health score with improvements and crops suited to your soil.";

    fn system() -> String {
        advisory_system(SOIL_HEALTH_ROLE)
    }

    fn prompt(input: &SoilHealthInput) -> String {
        let history = if input.crop_history.is_empty() {
            "not specified".to_string()
        } else {
            input.crop_history.clone()
        };
        fill_template(
            SOIL_HEALTH_PROMPT_TEMPLATE,
            &[
                ("soil_type", label_or_unspecified(input.soil_type, SoilType::label)),
                ("soil_ph", or_unspecified(input.soil_ph)),
                (
                    "organic_matter_percent",
                    or_unspecified(input.organic_matter_percent),
                ),
                ("nitrogen", label_or_unspecified(input.nitrogen, NutrientLevel::label)),
                ("phosphorus", label_or_unspecified(input.phosphorus, NutrientLevel::label)),
                ("potassium", label_or_unspecified(input.potassium, NutrientLevel::label)),
                ("moisture", label_or_unspecified(input.moisture, Moisture::label)),
                ("crop_history", history),
                ("region", input.region.clone()),
            ],
        )
    }

    fn check(output: &SoilHealthOutput) -> Result<(), String> {
        if output.health_score > 100 {
            return Err(format!(
                "health_score {} is outside 0-100",
                output.health_score
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::flows::run_flow;
    use crate::flows::testing::StubRunner;
    use crate::forms::fields::parse_submission;
    use serde_json::json;

    fn input() -> SoilHealthInput {
        parse_submission(json!({
            "soil_type": "black",
            "soil_ph": 7.9,
            "organic_matter_percent": 0.4,
            "nitrogen": "low",
            "phosphorus": "low",
            "potassium": "high",
            "moisture": "moderate",
            "crop_history": "",
            "region": "Akola, Maharashtra"
        }))
        .unwrap()
    }

    #[test]
    fn test_prompt_marks_missing_history() {
        let prompt = SoilHealthFlow::prompt(&input());
        assert!(prompt.contains("last three seasons: not specified"));
        assert!(prompt.contains("- Soil type: Black (regur)"));
        assert!(prompt.contains("- Organic matter: 0.4%"));
    }

    #[tokio::test]
    async fn test_score_above_hundred_rejected() {
        let runner = StubRunner::replying(
            r#"{"health_score": 140, "assessment": "", "improvements": [], "suitable_crops": []}"#,
        );
        let err = run_flow::<SoilHealthFlow>(&runner, &input()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_negative_score_fails_to_parse() {
        let runner = StubRunner::replying(
            r#"{"health_score": -3, "assessment": "", "improvements": [], "suitable_crops": []}"#,
        );
        assert!(run_flow::<SoilHealthFlow>(&runner, &input()).await.is_err());
    }

    #[tokio::test]
    async fn test_valid_assessment() {
        let runner = StubRunner::replying(
            r#"{
                "health_score": 58,
                "assessment": "Alkaline with very low organic carbon.",
                "improvements": [{"action": "Green manure with dhaincha", "reason": "Low carbon", "timeframe": "Kharif"}],
                "suitable_crops": ["Cotton", "Soybean", "Pigeon pea"]
            }"#,
        );
        let output = run_flow::<SoilHealthFlow>(&runner, &input()).await.unwrap();
        assert_eq!(output.health_score, 58);
        assert_eq!(output.suitable_crops.len(), 3);
    }
}
