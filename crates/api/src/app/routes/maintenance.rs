use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use upkeep_ai::{JobExecutor, MaintenanceAnalysisJob};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route(
        "/maintenance/recommendations",
        post(generate_maintenance_recommendations),
    )
}

/// Run the full predictive-maintenance pipeline for one equipment record.
///
/// Inputs arrive already resolved (the data-fetch layer is upstream); the
/// handler validates, runs the pipeline, meters one prediction event, and
/// returns the seven-section report.
pub async fn generate_maintenance_recommendations(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(tenant): Extension<crate::context::TenantContext>,
    Json(body): Json<dto::MaintenanceAnalysisRequest>,
) -> axum::response::Response {
    let tenant_id = tenant.tenant_id();

    let input = match dto::to_analysis_input(tenant_id, body, Utc::now()) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let job = MaintenanceAnalysisJob::new(tenant_id, input)
        .with_config(services.config().clone());

    let report = match services.executor().run(job) {
        Ok(report) => report,
        Err(e) => return errors::analytics_error_to_response(e),
    };

    // Fire-and-forget billing signal; the response never waits on it.
    services.meter().record(tenant_id, "maintenance.prediction");

    (StatusCode::OK, Json(report)).into_response()
}
