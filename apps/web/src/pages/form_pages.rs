//! Pages that host a visitor form: GET renders it, POST validates and answers with a toast.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form,
};

use crate::config::Config;
use crate::errors::{field_messages, AppError};
use crate::forms::careers::{CareerApplication, OPENINGS};
use crate::forms::contact::ContactMessage;
use crate::forms::donation::DonationPledge;
use crate::forms::farmer::FarmerRegistration;
use crate::forms::fields::{raw_to_value, RawValues};
use crate::forms::volunteer::VolunteerSignup;
use crate::forms::{submit, Submission};
use crate::pages::render::{render_form, FieldErrors};
use crate::pages::{escape_html, layout, Toast};
use crate::state::AppState;

/// A form together with the page it lives on.
pub trait FormPage: Submission {
    const PATH: &'static str;
    const PAGE_TITLE: &'static str;
    /// Navigation entry to highlight.
    const NAV: &'static str = "/get-involved";

    /// Content shown above the form.
    fn preamble(_config: &Config) -> String {
        String::new()
    }
}

impl FormPage for VolunteerSignup {
    const PATH: &'static str = "/volunteer";
    const PAGE_TITLE: &'static str = "Volunteer";
}

impl FormPage for DonationPledge {
    const PATH: &'static str = "/donate";
    const PAGE_TITLE: &'static str = "Donate";

    fn preamble(_config: &Config) -> String {
        r#"<div class="grid">
  <div class="card"><div class="stat">₹500</div><p>Seeds for a kitchen garden for one family</p></div>
  <div class="card"><div class="stat">₹1,500</div><p>Soil testing and a season of advice for one farm</p></div>
  <div class="card"><div class="stat">₹5,000</div><p>A month of a rural learning centre</p></div>
</div>
<p class="help">No payment is taken on this page. We email bank and UPI details after your pledge.</p>"#
            .to_string()
    }
}

impl FormPage for CareerApplication {
    const PATH: &'static str = "/careers";
    const PAGE_TITLE: &'static str = "Careers";

    fn preamble(_config: &Config) -> String {
        let openings: String = OPENINGS
            .iter()
            .map(|o| {
                format!(
                    r#"<div class="card"><h3>{}</h3><p class="help">{}</p><p>{}</p></div>"#,
                    o.position.label(),
                    o.location,
                    o.summary
                )
            })
            .collect();
        format!(
            r#"<h1>Careers</h1>
<p>Join a team that spends most of its time in the field, not in meetings.</p>
<h2>Current openings</h2>
<div class="grid">{openings}</div>"#
        )
    }
}

impl FormPage for FarmerRegistration {
    const PATH: &'static str = "/farmers/register";
    const PAGE_TITLE: &'static str = "Farmer registration";
}

impl FormPage for ContactMessage {
    const PATH: &'static str = "/contact";
    const PAGE_TITLE: &'static str = "Contact";
    const NAV: &'static str = "/contact";

    fn preamble(config: &Config) -> String {
        let email = escape_html(&config.contact_email);
        format!(
            r#"<h1>Contact us</h1>
<div class="grid">
  <div class="card"><h3>Head office</h3><p>14 Gangapur Road, Nashik, Maharashtra 422013</p></div>
  <div class="card"><h3>Email</h3><p><a href="mailto:{email}">{email}</a></p></div>
  <div class="card"><h3>Phone</h3><p>+91 253 000 0000<br>Mon–Sat, 10am–6pm</p></div>
</div>"#
        )
    }
}

pub fn render_form_page<T: FormPage>(
    config: &Config,
    values: &RawValues,
    errors: &FieldErrors,
    toast: Option<&Toast>,
) -> String {
    let body = format!(
        r#"{preamble}
<h2>{title}</h2>
<p>{intro}</p>
{form}"#,
        preamble = T::preamble(config),
        title = escape_html(T::TITLE),
        intro = escape_html(T::INTRO),
        form = render_form::<T>(T::PATH, values, errors),
    );
    layout(config, T::PAGE_TITLE, T::NAV, toast, &body)
}

/// GET handler for a form page.
pub async fn form_page<T: FormPage>(State(state): State<AppState>) -> Html<String> {
    Html(render_form_page::<T>(
        &state.config,
        &RawValues::new(),
        &BTreeMap::new(),
        None,
    ))
}

/// POST handler for a form page. Success clears the form; failure keeps what was typed.
pub async fn form_submit<T: FormPage>(
    State(state): State<AppState>,
    Form(raw): Form<RawValues>,
) -> (StatusCode, Html<String>) {
    match submit::<T>(raw_to_value(&raw)) {
        Ok((_, ack)) => (
            StatusCode::OK,
            Html(render_form_page::<T>(
                &state.config,
                &RawValues::new(),
                &BTreeMap::new(),
                Some(&Toast::success(ack.message)),
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
                Html(render_form_page::<T>(&state.config, &raw, &errors, Some(&toast))),
            )
        }
    }
}
