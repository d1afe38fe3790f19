//! Advisory flows.
//!
//! A flow is an input schema, an output schema and a prompt template. The reasoning
//! happens in the external model; a flow only validates input, renders the prompt,
//! makes one model call and parses the JSON it gets back.

pub mod fertilizer;
pub mod handlers;
pub mod organic;
pub mod pesticide;
pub mod prompts;
pub mod soil_health;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};
use validator::Validate;

use crate::errors::AppError;
use crate::flows::fertilizer::FertilizerFlow;
use crate::flows::organic::OrganicFarmingFlow;
use crate::flows::pesticide::PesticideFlow;
use crate::flows::soil_health::SoilHealthFlow;
use crate::forms::fields::{choice_enum, FormSchema};
use crate::llm_client::{strip_json_fences, ModelRunner};

choice_enum! {
    /// Soil test rating for a single nutrient.
    pub enum NutrientLevel {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

pub trait Flow: Send + Sync + 'static {
    type Input: FormSchema + DeserializeOwned + Serialize + Validate + Send + Sync;
    type Output: DeserializeOwned + Serialize + Send;

    /// Name used in logs and errors.
    const NAME: &'static str;
    /// URL segment under `/advisory` and `/api/v1/advisory`.
    const SLUG: &'static str;
    const DESCRIPTION: &'static str;

    fn system() -> String;

    fn prompt(input: &Self::Input) -> String;

    /// Rejects model output that parsed but breaks the schema's value rules.
    fn check(_output: &Self::Output) -> Result<(), String> {
        Ok(())
    }
}

/// Runs a flow once against the model. No retries: any failure goes back to the caller.
pub async fn run_flow<F: Flow>(
    runner: &dyn ModelRunner,
    input: &F::Input,
) -> Result<F::Output, AppError> {
    input.validate()?;

    let prompt = F::prompt(input);
    info!(flow = F::NAME, "Running advisory flow");

    let text = runner
        .generate(&F::system(), &prompt)
        .await
        .map_err(|e| {
            warn!(flow = F::NAME, "Model call failed: {e}");
            AppError::from(e)
        })?
        .filter(|text| !text.trim().is_empty())
        .ok_or(AppError::EmptyFlowOutput(F::NAME))?;

    let output: F::Output = serde_json::from_str(strip_json_fences(&text))
        .map_err(|e| AppError::Llm(format!("{} returned malformed JSON: {e}", F::NAME)))?;

    F::check(&output).map_err(|reason| AppError::Llm(format!("{}: {reason}", F::NAME)))?;

    Ok(output)
}

/// Listing entry for a flow.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl FlowSummary {
    pub fn of<F: Flow>() -> Self {
        Self {
            slug: F::SLUG,
            title: F::Input::TITLE,
            description: F::DESCRIPTION,
        }
    }
}

/// Every advisory flow, in menu order.
pub fn catalog() -> Vec<FlowSummary> {
    vec![
        FlowSummary::of::<FertilizerFlow>(),
        FlowSummary::of::<OrganicFarmingFlow>(),
        FlowSummary::of::<PesticideFlow>(),
        FlowSummary::of::<SoilHealthFlow>(),
    ]
}

/// Replaces each `{key}` in `template` with its value in a single pass.
/// Inserted values are never rescanned, and braces that do not name a key are kept.
pub fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (value, end))
        });
        match hit {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Prompt text for an optional value.
pub fn or_unspecified(value: Option<impl ToString>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "not specified".to_string())
}

/// Prompt text for an optional choice.
pub fn label_or_unspecified<T>(value: Option<T>, label: impl Fn(&T) -> &'static str) -> String {
    value
        .as_ref()
        .map(|v| label(v).to_string())
        .unwrap_or_else(|| "not specified".to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, ModelRunner};

    /// Model stub that returns a canned reply and records the prompts it saw.
    pub struct StubRunner {
        reply: Option<String>,
        pub prompts: Mutex<Vec<(String, String)>>,
    }

    impl StubRunner {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn silent() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn last_prompt(&self) -> String {
            self.prompts
                .lock()
                .unwrap()
                .last()
                .map(|(_, prompt)| prompt.clone())
                .unwrap_or_default()
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ModelRunner for StubRunner {
        async fn generate(&self, system: &str, prompt: &str) -> Result<Option<String>, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            Ok(self.reply.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StubRunner;
    use super::*;
    use crate::flows::soil_health::{SoilHealthFlow, SoilHealthInput};
    use crate::llm_client::UnconfiguredRunner;

    fn soil_input() -> SoilHealthInput {
        serde_json::from_value(serde_json::json!({
            "soil_type": "red",
            "soil_ph": "5.4",
            "organic_matter_percent": "0.6",
            "nitrogen": "low",
            "phosphorus": "medium",
            "potassium": "medium",
            "moisture": "dry",
            "crop_history": "Groundnut, groundnut, millet",
            "region": "Anantapur, Andhra Pradesh"
        }))
        .unwrap()
    }

    #[test]
    fn test_catalog_slugs_are_unique() {
        let slugs: Vec<_> = catalog().iter().map(|f| f.slug).collect();
        assert_eq!(
            slugs,
            vec!["fertilizer", "organic-farming", "pesticide", "soil-health"]
        );
    }

    #[test]
    fn test_fill_template_replaces_every_occurrence() {
        let out = fill_template(
            "{crop} in {region}; again {crop}",
            &[("crop", "Rice".to_string()), ("region", "Assam".to_string())],
        );
        assert_eq!(out, "Rice in Assam; again Rice");
    }

    #[test]
    fn test_fill_template_does_not_expand_inserted_values() {
        let out = fill_template(
            "Crop: {crop}\nRegion: {region}",
            &[("crop", "{region}".to_string()), ("region", "Akola".to_string())],
        );
        assert_eq!(out, "Crop: {region}\nRegion: Akola");
    }

    #[test]
    fn test_fill_template_keeps_unknown_braces() {
        let out = fill_template(
            r#"Answer as {"score": n} for {crop} {unknown"#,
            &[("crop", "Rice".to_string())],
        );
        assert_eq!(out, r#"Answer as {"score": n} for Rice {unknown"#);
    }

    #[test]
    fn test_or_unspecified() {
        assert_eq!(or_unspecified(Some(4.5)), "4.5");
        assert_eq!(or_unspecified(None::<f64>), "not specified");
    }

    #[tokio::test]
    async fn test_empty_output_is_an_error() {
        let runner = StubRunner::silent();
        let err = run_flow::<SoilHealthFlow>(&runner, &soil_input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyFlowOutput("soil_health_recommendation")));
    }

    #[tokio::test]
    async fn test_blank_output_is_an_error() {
        let runner = StubRunner::replying("   \n");
        let err = run_flow::<SoilHealthFlow>(&runner, &soil_input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyFlowOutput(_)));
    }

    #[tokio::test]
    async fn test_malformed_output_is_llm_error() {
        let runner = StubRunner::replying("The soil looks fine to me.");
        let err = run_flow::<SoilHealthFlow>(&runner, &soil_input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_fenced_output_is_accepted() {
        let runner = StubRunner::replying(
            "```json\n{\"health_score\": 41, \"assessment\": \"Acidic and low in carbon.\", \
             \"improvements\": [], \"suitable_crops\": [\"Finger millet\"]}\n```",
        );
        let output = run_flow::<SoilHealthFlow>(&runner, &soil_input())
            .await
            .unwrap();
        assert_eq!(output.health_score, 41);
        assert_eq!(runner.calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_model() {
        let runner = StubRunner::replying("{}");
        let mut input = soil_input();
        input.soil_ph = Some(14.5);
        let err = run_flow::<SoilHealthFlow>(&runner, &input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(runner.calls(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_model_means_unavailable() {
        let err = run_flow::<SoilHealthFlow>(&UnconfiguredRunner, &soil_input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AdvisoryUnavailable));
    }
}
