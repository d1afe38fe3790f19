pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::admin;
use crate::flows::fertilizer::FertilizerFlow;
use crate::flows::handlers::{handle_list_flows, handle_run_flow};
use crate::flows::organic::OrganicFarmingFlow;
use crate::flows::pesticide::PesticideFlow;
use crate::flows::soil_health::SoilHealthFlow;
use crate::forms;
use crate::forms::careers::CareerApplication;
use crate::forms::contact::ContactMessage;
use crate::forms::donation::DonationPledge;
use crate::forms::farmer::FarmerRegistration;
use crate::forms::volunteer::VolunteerSignup;
use crate::pages::advisory::{advisory_form, advisory_index, advisory_submit, AdvisoryPage};
use crate::pages::form_pages::{form_page, form_submit};
use crate::pages::{self, content};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Content pages
        .route("/", get(content::home))
        .route("/about", get(content::about))
        .route("/programs", get(content::programs))
        .route("/get-involved", get(content::get_involved))
        // Form pages
        .route(
            "/contact",
            get(form_page::<ContactMessage>).post(form_submit::<ContactMessage>),
        )
        .route(
            "/volunteer",
            get(form_page::<VolunteerSignup>).post(form_submit::<VolunteerSignup>),
        )
        .route(
            "/donate",
            get(form_page::<DonationPledge>).post(form_submit::<DonationPledge>),
        )
        .route(
            "/careers",
            get(form_page::<CareerApplication>).post(form_submit::<CareerApplication>),
        )
        .route(
            "/farmers/register",
            get(form_page::<FarmerRegistration>).post(form_submit::<FarmerRegistration>),
        )
        // Staff area placeholders
        .route("/admin", get(pages::admin::admin_index))
        .route("/admin/:module", get(pages::admin::admin_module))
        // JSON API
        .route(
            "/api/v1/forms/:kind",
            post(forms::handlers::handle_submit_form),
        )
        .route("/api/v1/advisory", get(handle_list_flows))
        .route(
            "/api/v1/admin/modules",
            get(admin::handlers::handle_list_modules),
        )
        .route("/advisory", get(advisory_index));

    let router = advisory_routes::<FertilizerFlow>(router);
    let router = advisory_routes::<OrganicFarmingFlow>(router);
    let router = advisory_routes::<PesticideFlow>(router);
    let router = advisory_routes::<SoilHealthFlow>(router);

    router.fallback(pages::not_found).with_state(state)
}

/// HTML page and JSON endpoint for one advisory flow.
fn advisory_routes<F: AdvisoryPage>(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            &format!("/advisory/{}", F::SLUG),
            get(advisory_form::<F>).post(advisory_submit::<F>),
        )
        .route(
            &format!("/api/v1/advisory/{}", F::SLUG),
            post(handle_run_flow::<F>),
        )
}
