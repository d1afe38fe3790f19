//! Farm advisory pages. Each flow gets a form page; a successful run renders the
//! model's answer under the form.

use std::collections::BTreeMap;
use std::fmt::Write;

use axum::{extract::State, http::StatusCode, response::Html, Form};

use crate::config::Config;
use crate::errors::{field_messages, AppError};
use crate::flows::fertilizer::{FertilizerFlow, FertilizerOutput};
use crate::flows::organic::{OrganicFarmingFlow, OrganicFarmingOutput};
use crate::flows::pesticide::{PesticideFlow, PesticideOutput};
use crate::flows::soil_health::{SoilHealthFlow, SoilHealthOutput};
use crate::flows::{run_flow, Flow};
use crate::forms::fields::{parse_submission, raw_to_value, FormSchema, RawValues};
use crate::pages::content::advisory_cards;
use crate::pages::render::{bullet_list, render_form, FieldErrors};
use crate::pages::{escape_html, layout, Toast};
use crate::state::AppState;

const NAV: &str = "/advisory";

/// A flow with an HTML rendering of its output.
pub trait AdvisoryPage: Flow {
    fn render_output(output: &Self::Output) -> String;
}

impl AdvisoryPage for FertilizerFlow {
    fn render_output(output: &FertilizerOutput) -> String {
        let mut rows = String::new();
        for r in &output.recommendations {
            let _ = write!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&r.fertilizer),
                r.quantity_kg_per_acre,
                escape_html(&r.timing),
                escape_html(&r.method)
            );
        }
        format!(
            r#"<h2>Recommended fertilizers</h2>
<table><thead><tr><th>Fertilizer</th><th>kg / acre</th><th>When</th><th>How</th></tr></thead><tbody>{rows}</tbody></table>
<h3>General advice</h3><p>{}</p>"#,
            escape_html(&output.general_advice)
        )
    }
}

impl AdvisoryPage for OrganicFarmingFlow {
    fn render_output(output: &OrganicFarmingOutput) -> String {
        let practices: String = output
            .practices
            .iter()
            .map(|p| {
                format!(
                    r#"<div class="card"><h3>{}</h3><p>{}</p><p class="help">{}</p></div>"#,
                    escape_html(&p.practice),
                    escape_html(&p.description),
                    escape_html(&p.benefits)
                )
            })
            .collect();
        format!(
            r#"<h2>Practices to adopt</h2>
<div class="grid">{practices}</div>
<h3>Transition plan</h3><p>{}</p>
<h3>Certification</h3><p>{}</p>"#,
            escape_html(&output.transition_plan),
            escape_html(&output.certification_tips)
        )
    }
}

impl AdvisoryPage for PesticideFlow {
    fn render_output(output: &PesticideOutput) -> String {
        let mut rows = String::new();
        for r in &output.recommendations {
            let _ = write!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&r.product),
                r.kind.label(),
                escape_html(&r.dosage),
                escape_html(&r.method),
                escape_html(&r.safety_precautions)
            );
        }
        let warning = if output.warning.trim().is_empty() {
            String::new()
        } else {
            format!(
                r#"<div class="banner"><strong>Warning.</strong> {}</div>"#,
                escape_html(&output.warning)
            )
        };
        format!(
            r#"<h2>Control measures</h2>
{warning}
<table><thead><tr><th>Product</th><th>Type</th><th>Dose</th><th>Method</th><th>Safety</th></tr></thead><tbody>{rows}</tbody></table>
<h3>Integrated pest management</h3>{}"#,
            bullet_list(&output.ipm_tips)
        )
    }
}

impl AdvisoryPage for SoilHealthFlow {
    fn render_output(output: &SoilHealthOutput) -> String {
        let improvements: String = output
            .improvements
            .iter()
            .map(|i| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&i.action),
                    escape_html(&i.reason),
                    escape_html(&i.timeframe)
                )
            })
            .collect();
        format!(
            r#"<div class="stat">{score}/100</div>
<p>{}</p>
<h2>Improvements</h2>
<table><thead><tr><th>Action</th><th>Why</th><th>Timeframe</th></tr></thead><tbody>{improvements}</tbody></table>
<h3>Crops suited to this soil</h3>{}"#,
            escape_html(&output.assessment),
            bullet_list(&output.suitable_crops),
            score = output.health_score,
        )
    }
}

/// GET /advisory
pub async fn advisory_index(State(state): State<AppState>) -> Html<String> {
    let configured = state.config.anthropic_api_key.is_some();
    let notice = if configured {
        ""
    } else {
        r#"<div class="banner">The advisory service is offline at the moment. Please try again later.</div>"#
    };
    let body = format!(
        r#"<h1>Farm advisory</h1>
<p>Free, practical recommendations for your farm. Answers are generated from what you
enter, so check doses against the product label and ask your local extension officer
before large purchases.</p>
{notice}
<div class="grid">{cards}</div>"#,
        cards = advisory_cards()
    );
    Html(layout(&state.config, "Farm Advisory", NAV, None, &body))
}

fn render_advisory_page<F: AdvisoryPage>(
    config: &Config,
    values: &RawValues,
    errors: &FieldErrors,
    toast: Option<&Toast>,
    result: Option<String>,
) -> String {
    let action = format!("/advisory/{}", F::SLUG);
    let result = result
        .map(|html| format!(r#"<section class="result">{html}</section>"#))
        .unwrap_or_default();
    let body = format!(
        r#"<p><a href="/advisory">All advisory tools</a></p>
<h1>{title}</h1>
<p>{intro}</p>
{form}
{result}"#,
        title = escape_html(F::Input::TITLE),
        intro = escape_html(F::Input::INTRO),
        form = render_form::<F::Input>(&action, values, errors),
    );
    layout(config, F::Input::TITLE, NAV, toast, &body)
}

/// GET /advisory/{slug}
pub async fn advisory_form<F: AdvisoryPage>(State(state): State<AppState>) -> Html<String> {
    Html(render_advisory_page::<F>(
        &state.config,
        &RawValues::new(),
        &BTreeMap::new(),
        None,
        None,
    ))
}

/// POST /advisory/{slug}
///
/// The form keeps what was entered either way, so the farmer can adjust and resubmit.
pub async fn advisory_submit<F: AdvisoryPage>(
    State(state): State<AppState>,
    Form(raw): Form<RawValues>,
) -> (StatusCode, Html<String>) {
    let outcome = match parse_submission::<F::Input>(raw_to_value(&raw)) {
        Ok(input) => run_flow::<F>(state.runner.as_ref(), &input).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(output) => (
            StatusCode::OK,
            Html(render_advisory_page::<F>(
                &state.config,
                &raw,
                &BTreeMap::new(),
                Some(&Toast::success("Your recommendation is ready.")),
                Some(F::render_output(&output)),
            )),
        ),
        Err(err) => {
            let errors = match &err {
                AppError::Validation(errors) => field_messages(errors),
                _ => BTreeMap::new(),
            };
            let toast = Toast::error(err.public_message());
            (
                err.status(),
                Html(render_advisory_page::<F>(
                    &state.config,
                    &raw,
                    &errors,
                    Some(&toast),
                    None,
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::soil_health::SoilImprovement;

    #[test]
    fn test_soil_output_renders_score_and_escapes() {
        let output = SoilHealthOutput {
            health_score: 58,
            assessment: "pH <6 limits phosphorus".into(),
            improvements: vec![SoilImprovement {
                action: "Apply lime".into(),
                reason: "Raise pH".into(),
                timeframe: "Before sowing".into(),
            }],
            suitable_crops: vec!["Ragi".into()],
        };
        let html = SoilHealthFlow::render_output(&output);
        assert!(html.contains("58/100"));
        assert!(html.contains("pH &lt;6 limits phosphorus"));
        assert!(html.contains("<td>Apply lime</td>"));
        assert!(html.contains("<li>Ragi</li>"));
    }

    #[test]
    fn test_pesticide_warning_banner_only_when_present() {
        let mut output = PesticideOutput {
            recommendations: vec![],
            ipm_tips: vec!["Install pheromone traps".into()],
            warning: String::new(),
        };
        assert!(!PesticideFlow::render_output(&output).contains("banner"));
        output.warning = "Do not spray during flowering".into();
        assert!(PesticideFlow::render_output(&output).contains("Do not spray during flowering"));
    }
}
