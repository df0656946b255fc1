use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use upkeep_ai::{
    EquipmentSnapshot, MaintenanceAnalysisInput, MaintenanceLogEntry, PredictionHorizon,
    SensorReadings,
};
use upkeep_core::TenantId;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /ai/maintenance/recommendations`.
///
/// Sensor data and maintenance history reuse the pipeline's own wire types;
/// only the equipment record gets a DTO, so that missing required fields can
/// be reported with field-level detail instead of a bare deserialize error.
#[derive(Debug, Deserialize)]
pub struct MaintenanceAnalysisRequest {
    pub equipment: Option<EquipmentRequest>,
    pub sensor_data: Option<SensorReadings>,
    pub maintenance_history: Option<Vec<MaintenanceLogEntry>>,
    pub prediction_horizon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EquipmentRequest {
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub equipment_type: String,
    #[serde(default)]
    pub model: String,
    pub installation_date: Option<DateTime<Utc>>,
    pub last_maintenance_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
}

/// Map the request body into a pipeline input, rejecting with a field-level
/// 400 before the pipeline ever runs.
pub fn to_analysis_input(
    tenant_id: TenantId,
    body: MaintenanceAnalysisRequest,
    as_of: DateTime<Utc>,
) -> Result<MaintenanceAnalysisInput, axum::response::Response> {
    let equipment = body
        .equipment
        .ok_or_else(|| validation_error("equipment", "equipment record is required"))?;

    let equipment_id = match equipment.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(validation_error("equipment.id", "equipment id is required")),
    };

    let horizon = match body.prediction_horizon.as_deref() {
        None => PredictionHorizon::default(),
        Some(raw) => raw.parse::<PredictionHorizon>().map_err(|_| {
            validation_error(
                "prediction_horizon",
                "expected one of 30d, 90d, 6m, 1y",
            )
        })?,
    };

    Ok(MaintenanceAnalysisInput {
        equipment: EquipmentSnapshot {
            tenant_id,
            equipment_id,
            equipment_type: equipment.equipment_type,
            model: equipment.model,
            // Unknown installation date reads as newly installed: the aging
            // gate simply never fires.
            installed_at: equipment.installation_date.unwrap_or(as_of),
            last_maintained_at: equipment.last_maintenance_date,
            location: equipment.location,
        },
        sensors: body.sensor_data,
        history: body.maintenance_history.unwrap_or_default(),
        horizon,
        as_of,
    })
}

fn validation_error(field: &str, message: &str) -> axum::response::Response {
    use axum::response::IntoResponse;
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "field": field,
            "message": message,
        })),
    )
        .into_response()
}
