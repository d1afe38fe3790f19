use axum::{extract::Path, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::forms::careers::CareerApplication;
use crate::forms::contact::ContactMessage;
use crate::forms::donation::DonationPledge;
use crate::forms::farmer::FarmerRegistration;
use crate::forms::volunteer::VolunteerSignup;
use crate::forms::{submit, Acknowledgement, FormKind, Submission};

/// POST /api/v1/forms/:kind
pub async fn handle_submit_form(
    Path(slug): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Acknowledgement>, AppError> {
    let kind: FormKind = serde_json::from_value(Value::String(slug.clone()))
        .map_err(|_| AppError::NotFound(format!("Unknown form '{slug}'")))?;
    let ack = match kind {
        FormKind::Volunteer => accept::<VolunteerSignup>(body)?,
        FormKind::Donation => accept::<DonationPledge>(body)?,
        FormKind::Careers => accept::<CareerApplication>(body)?,
        FormKind::Farmers => accept::<FarmerRegistration>(body)?,
        FormKind::Contact => accept::<ContactMessage>(body)?,
    };
    Ok(Json(ack))
}

fn accept<T: Submission>(body: Value) -> Result<Acknowledgement, AppError> {
    submit::<T>(body).map(|(_, ack)| ack)
}
