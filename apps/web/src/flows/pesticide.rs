use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::flows::prompts::{PESTICIDE_PROMPT_TEMPLATE, PESTICIDE_ROLE};
use crate::flows::{fill_template, label_or_unspecified, or_unspecified, Flow};
use crate::forms::fields::{self, choice_enum, FieldKind, FieldSpec, FormSchema};
use crate::llm_client::prompts::{advisory_system, SAFETY_INSTRUCTION};

choice_enum! {
    pub enum Severity {
        Low => ("low", "Low"),
        Moderate => ("moderate", "Moderate"),
        Severe => ("severe", "Severe"),
    }
}

choice_enum! {
    pub enum ControlKind {
        Chemical => ("chemical", "Chemical"),
        Biological => ("biological", "Biological"),
        Organic => ("organic", "Organic"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PesticideInput {
    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 60, message = "Crop must be 2 to 60 characters"))]
    pub crop: String,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 200, message = "Describe the pest or disease"))]
    pub pest_or_disease: String,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(required(message = "Choose how severe the attack is"))]
    pub severity: Option<Severity>,

    #[serde(default, deserialize_with = "fields::lenient")]
    #[validate(
        required(message = "Enter the affected area in acres"),
        range(exclusive_min = 0.0, message = "Affected area must be more than 0 acres")
    )]
    pub affected_area_acres: Option<f64>,

    #[serde(default, deserialize_with = "fields::checkbox")]
    pub prefer_organic: bool,

    #[serde(default, deserialize_with = "fields::text")]
    #[validate(length(min = 2, max = 100, message = "Region must be 2 to 100 characters"))]
    pub region: String,
}

impl FormSchema for PesticideInput {
    const TITLE: &'static str = "Pest & disease control";
    const INTRO: &'static str = "Describe what you see on the crop. You will get control \
        measures with doses and safety precautions, organic-only if you prefer.";
    const SUBMIT_LABEL: &'static str = "Get recommendation";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("crop", "Crop", FieldKind::Text),
        FieldSpec::new("pest_or_disease", "Pest or disease", FieldKind::Text)
            .help("Name it if you know it, or describe the symptoms"),
        FieldSpec::new("severity", "Severity", FieldKind::Select(Severity::OPTIONS)),
        FieldSpec::new(
            "affected_area_acres",
            "Affected area (acres)",
            FieldKind::Number {
                min: Some(0.0),
                step: "0.01",
            },
        ),
        FieldSpec::new(
            "prefer_organic",
            "I prefer organic or biological control",
            FieldKind::Checkbox,
        )
        .optional(),
        FieldSpec::new("region", "District / region", FieldKind::Text),
    ];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PesticideRecommendation {
    pub product: String,
    pub kind: ControlKind,
    pub dosage: String,
    pub method: String,
    pub safety_precautions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PesticideOutput {
    pub recommendations: Vec<PesticideRecommendation>,
    pub ipm_tips: Vec<String>,
    #[serde(default)]
    pub warning: String,
}

pub struct PesticideFlow;

impl Flow for PesticideFlow {
    type Input = PesticideInput;
    type Output = PesticideOutput;

    const NAME: &'static str = "pesticide_recommendation";
    const SLUG: &'static str = "pesticide";
    const DESCRIPTION: &'static str =
        "Integrated pest management advice with doses and safety precautions.";

    fn system() -> String {
        format!("{} {SAFETY_INSTRUCTION}", advisory_system(PESTICIDE_ROLE))
    }

    fn prompt(input: &PesticideInput) -> String {
        fill_template(
            PESTICIDE_PROMPT_TEMPLATE,
            &[
                ("crop", input.crop.clone()),
                ("pest_or_disease", input.pest_or_disease.clone()),
                ("severity", label_or_unspecified(input.severity, Severity::label)),
                ("affected_area_acres", or_unspecified(input.affected_area_acres)),
                (
                    "prefer_organic",
                    if input.prefer_organic { "yes" } else { "no" }.to_string(),
                ),
                ("region", input.region.clone()),
            ],
        )
    }

    fn check(output: &PesticideOutput) -> Result<(), String> {
        if output.recommendations.is_empty() {
            return Err("no control measures".to_string());
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

    fn input(prefer_organic: bool) -> PesticideInput {
        parse_submission(json!({
            "crop": "Tomato",
            "pest_or_disease": "Leaf curl with whiteflies under leaves",
            "severity": "moderate",
            "affected_area_acres": "0.5",
            "prefer_organic": prefer_organic,
            "region": "Kolar, Karnataka"
        }))
        .unwrap()
    }

    #[test]
    fn test_prompt_carries_organic_preference() {
        assert!(PesticideFlow::prompt(&input(true)).contains("prefers organic control: yes"));
        assert!(PesticideFlow::prompt(&input(false)).contains("prefers organic control: no"));
    }

    #[test]
    fn test_system_prompt_includes_safety_rules() {
        assert!(PesticideFlow::system().contains("protective equipment"));
    }

    #[tokio::test]
    async fn test_run_parses_control_kinds() {
        let runner = StubRunner::replying(
            r#"{
                "recommendations": [
                    {"product": "Neem oil", "kind": "organic", "dosage": "5 ml/l",
                     "method": "Evening spray", "safety_precautions": "Gloves"},
                    {"product": "Beauveria bassiana", "kind": "biological", "dosage": "5 g/l",
                     "method": "Spray on undersides", "safety_precautions": "Mask"}
                ],
                "ipm_tips": ["Yellow sticky traps"]
            }"#,
        );
        let output = run_flow::<PesticideFlow>(&runner, &input(true)).await.unwrap();
        assert_eq!(output.recommendations[1].kind, ControlKind::Biological);
        assert!(output.warning.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_control_kind_rejected() {
        let runner = StubRunner::replying(
            r#"{"recommendations": [{"product": "X", "kind": "magic", "dosage": "", "method": "",
                "safety_precautions": ""}], "ipm_tips": [], "warning": ""}"#,
        );
        let err = run_flow::<PesticideFlow>(&runner, &input(false)).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
