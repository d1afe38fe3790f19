//! Server-rendered HTML pages.
//!
//! Every page goes through `layout`, which adds navigation, the footer and the toast
//! area. Anything a visitor or the model typed is passed through `escape_html`.

pub mod admin;
pub mod advisory;
pub mod content;
pub mod form_pages;
pub mod render;

use axum::{http::StatusCode, response::Html};

use crate::config::Config;

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/programs", "Programs"),
    ("/advisory", "Farm Advisory"),
    ("/get-involved", "Get Involved"),
    ("/contact", "Contact"),
];

const STYLE: &str = r#"
*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#fbfaf6;color:#1f2a1f;line-height:1.55}
a{color:#2f6b2f}
header{background:#fff;border-bottom:1px solid #e5e2d8}
.bar{max-width:1080px;margin:0 auto;padding:14px 20px;display:flex;align-items:center;gap:24px;flex-wrap:wrap}
.brand{font-weight:700;font-size:1.15rem;text-decoration:none;color:#24502a;margin-right:auto}
nav a{text-decoration:none;color:#3d4a3d;margin-left:16px}
nav a.active{color:#24502a;font-weight:600;border-bottom:2px solid #8bbf4a}
.donate{background:#e07a1f;color:#fff!important;padding:8px 16px;border-radius:20px}
main{max-width:1080px;margin:0 auto;padding:32px 20px 64px}
.hero{background:linear-gradient(120deg,#24502a,#4f8a3a);color:#fff;border-radius:18px;padding:48px 36px}
.hero a.btn{background:#fff;color:#24502a}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(230px,1fr));gap:20px;margin:28px 0}
.card{background:#fff;border:1px solid #e5e2d8;border-radius:14px;padding:22px}
.stat{font-size:2rem;font-weight:700;color:#24502a}
.btn{display:inline-block;background:#24502a;color:#fff;border:none;border-radius:10px;padding:12px 22px;font-size:1rem;font-weight:600;text-decoration:none;cursor:pointer}
form.schema{background:#fff;border:1px solid #e5e2d8;border-radius:14px;padding:26px;max-width:640px}
.field{margin-bottom:18px}
.field label{display:block;font-weight:600;margin-bottom:6px}
.field input:not([type=checkbox]),.field select,.field textarea{width:100%;padding:10px 12px;border:1px solid #cfcabb;border-radius:8px;font:inherit;background:#fff}
.field textarea{min-height:120px}
.field .check{display:flex;gap:10px;align-items:flex-start;font-weight:400}
.field.has-error input,.field.has-error select,.field.has-error textarea{border-color:#c0392b}
.req{color:#c0392b}
.help{font-size:.85rem;color:#6b6f63;margin:4px 0 0}
.error{font-size:.85rem;color:#c0392b;margin:4px 0 0}
.toast{position:fixed;right:20px;bottom:20px;max-width:380px;padding:14px 18px;border-radius:12px;color:#fff;box-shadow:0 6px 24px rgba(0,0,0,.18);animation:fade 6s forwards}
.toast-success{background:#2f7d32}
.toast-error{background:#b03a2e}
@keyframes fade{0%,85%{opacity:1}100%{opacity:0;visibility:hidden}}
.result{background:#fff;border:1px solid #cfe3bf;border-left:6px solid #4f8a3a;border-radius:14px;padding:24px;margin-top:28px}
.banner{background:#fff4e5;border:1px solid #f0c78a;border-radius:12px;padding:16px 20px;margin:20px 0}
.construction{text-align:center;padding:40px 20px}
table{border-collapse:collapse;width:100%;margin:12px 0 24px}
th,td{text-align:left;padding:8px 10px;border-bottom:1px solid #e5e2d8;vertical-align:top}
footer{background:#24502a;color:#dfe9d6;padding:32px 20px}
footer a{color:#fff;margin-right:16px}
footer .bar{display:block}
"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Notification shown after a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        let (class, role) = match self.kind {
            ToastKind::Success => ("toast-success", "status"),
            ToastKind::Error => ("toast-error", "alert"),
        };
        format!(
            r#"<div class="toast {class}" role="{role}">{}</div>"#,
            escape_html(&self.message)
        )
    }
}

/// Wraps page content in the site chrome.
pub fn layout(
    config: &Config,
    title: &str,
    active: &str,
    toast: Option<&Toast>,
    body: &str,
) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| {
            let class = if *href == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{href}"{class}>{label}</a>"#)
        })
        .collect();
    let site = escape_html(&config.site_name);
    let contact = escape_html(&config.contact_email);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
<style>{STYLE}</style>
</head>
<body>
<header>
  <div class="bar">
    <a class="brand" href="/">{site}</a>
    <nav>{nav}<a class="donate" href="/donate">Donate</a></nav>
  </div>
</header>
<main>
{body}
</main>
<footer>
  <div class="bar">
    <p><strong>{site}</strong> works with smallholder farming families for fair incomes, healthy soil and thriving villages.</p>
    <p><a href="/volunteer">Volunteer</a><a href="/careers">Careers</a><a href="/farmers/register">Farmer registration</a><a href="/admin">Staff area</a></p>
    <p>Write to us at <a href="mailto:{contact}">{contact}</a></p>
  </div>
</footer>
{toast}
</body>
</html>"##,
        title = escape_html(title),
        toast = toast.map(Toast::render).unwrap_or_default(),
    )
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fallback for unknown paths.
pub async fn not_found(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(not_found_page(&state.config)))
}

pub fn not_found_page(config: &Config) -> String {
    layout(
        config,
        "Page not found",
        "",
        None,
        r#"<section class="construction">
  <h1>We could not find that page</h1>
  <p>The page may have moved. Try the <a href="/">home page</a> or <a href="/contact">write to us</a>.</p>
</section>"#,
    )
}
