use std::collections::BTreeMap;
use std::fmt::Write;

use crate::forms::fields::{FieldKind, FieldSpec, FormSchema, RawValues};
use crate::pages::escape_html;

pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Renders a schema-driven form. `values` repopulates the inputs after a rejected
/// submission; `errors` are shown under the matching fields.
pub fn render_form<T: FormSchema>(action: &str, values: &RawValues, errors: &FieldErrors) -> String {
    let mut html = format!(
        r#"<form class="schema" method="post" action="{}" novalidate>"#,
        escape_html(action)
    );
    for field in T::FIELDS {
        let value = values.get(field.name).map(String::as_str).unwrap_or("");
        let field_errors = errors.get(field.name).map(Vec::as_slice).unwrap_or(&[]);
        html.push_str(&render_field(field, value, field_errors));
    }
    let _ = write!(
        html,
        r#"<button class="btn" type="submit">{}</button></form>"#,
        escape_html(T::SUBMIT_LABEL)
    );
    html
}

fn render_field(field: &FieldSpec, value: &str, errors: &[String]) -> String {
    let name = field.name;
    let label = escape_html(field.label);
    let required = if field.required { " required" } else { "" };
    let marker = if field.required {
        r#" <span class="req">*</span>"#
    } else {
        ""
    };
    let value_attr = escape_html(value);

    let control = match field.kind {
        FieldKind::Checkbox => {
            let checked = if is_checked(value) { " checked" } else { "" };
            return wrap(
                errors,
                format!(
                    r#"<label class="check"><input type="checkbox" id="{name}" name="{name}" value="on"{checked}{required}> {label}{marker}</label>"#
                ),
                field.help,
            );
        }
        FieldKind::TextArea => format!(
            r#"<textarea id="{name}" name="{name}"{required}>{value_attr}</textarea>"#
        ),
        FieldKind::Select(options) => {
            let mut select = format!(
                r#"<select id="{name}" name="{name}"{required}><option value="">Select…</option>"#
            );
            for (option, option_label) in options {
                let selected = if *option == value { " selected" } else { "" };
                let _ = write!(
                    select,
                    r#"<option value="{option}"{selected}>{}</option>"#,
                    escape_html(option_label)
                );
            }
            select.push_str("</select>");
            select
        }
        FieldKind::Number { min, step } => {
            let min = min.map(|m| format!(r#" min="{m}""#)).unwrap_or_default();
            format!(
                r#"<input type="number" id="{name}" name="{name}" value="{value_attr}" step="{step}"{min}{required}>"#
            )
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Url => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Tel => "tel",
                FieldKind::Url => "url",
                _ => "text",
            };
            format!(
                r#"<input type="{input_type}" id="{name}" name="{name}" value="{value_attr}"{required}>"#
            )
        }
    };

    wrap(
        errors,
        format!(r#"<label for="{name}">{label}{marker}</label>{control}"#),
        field.help,
    )
}

fn wrap(errors: &[String], inner: String, help: Option<&str>) -> String {
    let class = if errors.is_empty() {
        "field"
    } else {
        "field has-error"
    };
    let mut html = format!(r#"<div class="{class}">{inner}"#);
    if let Some(help) = help {
        let _ = write!(html, r#"<p class="help">{}</p>"#, escape_html(help));
    }
    for error in errors {
        let _ = write!(html, r#"<p class="error">{}</p>"#, escape_html(error));
    }
    html.push_str("</div>");
    html
}

fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true" | "yes" | "1")
}

/// Renders a list of plain strings.
pub fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul>{items}</ul>")
}
