use axum::Json;

use crate::admin::{AdminModule, ModuleOverview};

/// GET /api/v1/admin/modules
pub async fn handle_list_modules() -> Json<Vec<ModuleOverview>> {
    Json(AdminModule::ALL.into_iter().map(AdminModule::overview).collect())
}
