//! Static content pages.

use axum::{extract::State, response::Html};

use crate::flows::catalog;
use crate::pages::{escape_html, layout};
use crate::state::AppState;

struct Program {
    name: &'static str,
    summary: &'static str,
    reach: &'static str,
}

const PROGRAMS: &[Program] = &[
    Program {
        name: "Farmer Field Schools",
        summary: "Season-long training in the farmer's own field on soil testing, \
            seed selection, water budgeting and integrated pest management.",
        reach: "12,400 farmers trained",
    },
    Program {
        name: "Soil Health Mission",
        summary: "Free soil testing camps, soil health cards explained in the local \
            language and follow-up visits to check that advice was usable.",
        reach: "38,000 soil samples tested",
    },
    Program {
        name: "Rural Learning Centres",
        summary: "After-school learning centres for the children of farming families, \
            with a focus on reading, arithmetic and digital skills.",
        reach: "64 centres in 5 districts",
    },
    Program {
        name: "Village Health Camps",
        summary: "Monthly camps with doctors and nurses, anaemia screening for women \
            and adolescents, and referrals to district hospitals.",
        reach: "210 camps last year",
    },
];

const IMPACT: &[(&str, &str)] = &[
    ("420", "villages reached"),
    ("52,000", "farming families supported"),
    ("31%", "average rise in net farm income"),
    ("18", "years in the field"),
];

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let site = escape_html(&state.config.site_name);
    let impact: String = IMPACT
        .iter()
        .map(|(figure, label)| {
            format!(r#"<div class="card"><div class="stat">{figure}</div><p>{label}</p></div>"#)
        })
        .collect();
    let highlights: String = PROGRAMS
        .iter()
        .take(3)
        .map(|p| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
                p.name, p.summary
            )
        })
        .collect();

    let body = format!(
        r#"<section class="hero">
  <h1>Healthy soil. Fair harvests. Thriving villages.</h1>
  <p>{site} walks alongside smallholder farming families with training, free soil testing,
  education for their children and health care close to home.</p>
  <p><a class="btn" href="/donate">Support a farmer</a> <a class="btn" href="/volunteer">Volunteer with us</a></p>
</section>
<h2>Our impact</h2>
<div class="grid">{impact}</div>
<h2>What we do</h2>
<div class="grid">{highlights}</div>
<p><a href="/programs">See all programs</a></p>
<div class="banner">
  <strong>Free farm advisory.</strong> Get fertilizer, pest control, organic farming and
  soil health recommendations in minutes. <a href="/advisory">Try the advisory tools</a>
</div>"#
    );
    Html(layout(&state.config, "Home", "/", None, &body))
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Html<String> {
    let site = escape_html(&state.config.site_name);
    let body = format!(
        r#"<h1>About us</h1>
<p>{site} began in 2008 when a group of agronomists and teachers started a soil testing
camp in a single village in Nashik district. Today we work in 420 villages across
Maharashtra, Karnataka and Andhra Pradesh.</p>
<h2>Our mission</h2>
<p>To help smallholder farming families earn a fair and stable income from healthy land,
and to make sure their children grow up educated and healthy.</p>
<h2>How we work</h2>
<div class="grid">
  <div class="card"><h3>Farmer first</h3><p>Every program is planned with village farmer groups, not for them.</p></div>
  <div class="card"><h3>Evidence based</h3><p>We measure soil, yields and incomes before and after, and publish what we learn.</p></div>
  <div class="card"><h3>Low cost</h3><p>We favour practices that cut input costs over ones that need new purchases.</p></div>
</div>
<h2>Governance</h2>
<p>We are a registered public charitable trust. Donations are eligible for tax exemption
under section 80G, and our audited accounts are published every year.</p>"#
    );
    Html(layout(&state.config, "About", "/about", None, &body))
}

/// GET /programs
pub async fn programs(State(state): State<AppState>) -> Html<String> {
    let cards: String = PROGRAMS
        .iter()
        .map(|p| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p><p class="help">{}</p></div>"#,
                p.name, p.summary, p.reach
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Our programs</h1>
<p>Four programs, one goal: families who can live well from their land.</p>
<div class="grid">{cards}</div>
<p><a class="btn" href="/donate">Fund a program</a></p>"#
    );
    Html(layout(&state.config, "Programs", "/programs", None, &body))
}

/// GET /get-involved
pub async fn get_involved(State(state): State<AppState>) -> Html<String> {
    let body = r#"<h1>Get involved</h1>
<div class="grid">
  <div class="card"><h3>Volunteer</h3><p>Teach at a learning centre, help at a health camp or run our social media.</p><a class="btn" href="/volunteer">Volunteer</a></div>
  <div class="card"><h3>Donate</h3><p>₹1,500 pays for soil testing and a season of advice for one farm.</p><a class="btn" href="/donate">Donate</a></div>
  <div class="card"><h3>Work with us</h3><p>We hire agronomists, coordinators and communicators who want to work in the field.</p><a class="btn" href="/careers">See openings</a></div>
  <div class="card"><h3>Register a farm</h3><p>Farmers and field staff can register a farm to join our programs.</p><a class="btn" href="/farmers/register">Register</a></div>
</div>"#;
    Html(layout(&state.config, "Get Involved", "/get-involved", None, body))
}

/// Short list of advisory tools, used on the advisory landing page.
pub fn advisory_cards() -> String {
    catalog()
        .iter()
        .map(|flow| {
            format!(
                r#"<div class="card"><h3>{}</h3><p>{}</p><a class="btn" href="/advisory/{}">Open</a></div>"#,
                escape_html(flow.title),
                escape_html(flow.description),
                flow.slug
            )
        })
        .collect()
}
