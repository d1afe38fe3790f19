//! Staff area placeholders.

use std::fmt::Write;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::admin::AdminModule;
use crate::models::RecordOutline;
use crate::pages::{escape_html, layout, not_found_page};
use crate::state::AppState;

/// GET /admin
pub async fn admin_index(State(state): State<AppState>) -> Html<String> {
    let cards: String = AdminModule::ALL
        .into_iter()
        .map(|m| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p><a class="btn" href="/admin/{}">Open</a></div>"#,
                escape_html(m.title()),
                m.summary(),
                m.slug()
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Staff area</h1>
<p>Back-office tools for our staff. These modules are being built.</p>
<div class="grid">{cards}</div>"#
    );
    Html(layout(&state.config, "Staff area", "", None, &body))
}

/// GET /admin/:module
pub async fn admin_module(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> (StatusCode, Html<String>) {
    let Some(module) = AdminModule::from_slug(&slug) else {
        return (StatusCode::NOT_FOUND, Html(not_found_page(&state.config)));
    };

    let features: String = module
        .planned_features()
        .iter()
        .map(|f| format!("<li>{f}</li>"))
        .collect();
    let records: String = module.planned_records().iter().map(record_table).collect();

    let body = format!(
        r#"<p><a href="/admin">Staff area</a></p>
<section class="construction">
  <h1>{title}</h1>
  <p><strong>Under Construction</strong></p>
  <p>{summary}</p>
</section>
<h2>What this module will do</h2>
<ul>{features}</ul>
{records}"#,
        title = escape_html(module.title()),
        summary = module.summary(),
    );
    (
        StatusCode::OK,
        Html(layout(&state.config, module.title(), "", None, &body)),
    )
}

fn record_table(record: &RecordOutline) -> String {
    let mut html = format!(
        "<h3>{}</h3><table><thead><tr><th>Field</th><th>Description</th></tr></thead><tbody>",
        record.name
    );
    for field in &record.fields {
        let _ = write!(
            html,
            "<tr><td><code>{}</code></td><td>{}</td></tr>",
            field.name,
            escape_html(field.description)
        );
    }
    html.push_str("</tbody></table>");
    html
}
