//! Input snapshots the pipeline runs on.
//!
//! These are caller-supplied, already-materialized values — the pipeline
//! never fetches anything itself. Sensor data and maintenance history are
//! optional; their absence is a valid degraded-confidence path.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use upkeep_core::TenantId;

use crate::result::AnalyticsError;

/// Equipment master record snapshot. Immutable per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSnapshot {
    pub tenant_id: TenantId,
    /// Caller-side identifier (free-form, e.g. "HVAC-EAST-01"). Required.
    pub equipment_id: String,
    /// Free-text category, e.g. "HVAC System - Rooftop Unit".
    pub equipment_type: String,
    pub model: String,
    pub installed_at: DateTime<Utc>,
    pub last_maintained_at: Option<DateTime<Utc>>,
    pub location: String,
}

impl EquipmentSnapshot {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.equipment_id.trim().is_empty() {
            return Err(AnalyticsError::invalid_input(
                "equipment_id",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Whole calendar months between installation and `as_of` (never negative).
    pub fn age_in_months(&self, as_of: DateTime<Utc>) -> i64 {
        months_between(self.installed_at, as_of)
    }

    /// Category match on the free-text type field (case-sensitive, same
    /// convention the callers use in their catalogs).
    pub fn type_contains(&self, needle: &str) -> bool {
        self.equipment_type.contains(needle)
    }
}

fn months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let mut months = (i64::from(to.year()) - i64::from(from.year())) * 12
        + (i64::from(to.month()) - i64::from(from.month()));
    if to.day() < from.day() {
        months -= 1;
    }
    months.max(0)
}

/// How a past maintenance visit was classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Preventive,
    Corrective,
    Emergency,
}

/// One historical maintenance visit. Used only in aggregate (ratios, counts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceLogEntry {
    pub performed_at: DateTime<Utc>,
    pub kind: MaintenanceKind,
    #[serde(default)]
    pub parts_replaced: Vec<String>,
    pub cost: f64,
    pub duration_hours: f64,
}

impl MaintenanceLogEntry {
    fn validate(&self, index: usize) -> Result<(), AnalyticsError> {
        if !self.cost.is_finite() || !self.duration_hours.is_finite() {
            return Err(AnalyticsError::computation(format!(
                "maintenance history entry {index} contains non-finite numbers"
            )));
        }
        Ok(())
    }
}

/// Validate a full history slice (fail-fast before any stage runs).
pub fn validate_history(history: &[MaintenanceLogEntry]) -> Result<(), AnalyticsError> {
    for (i, entry) in history.iter().enumerate() {
        entry.validate(i)?;
    }
    Ok(())
}

/// Named time-series and counters from the equipment's sensors.
///
/// Any subset may be absent. Six *categories* count toward data quality: the
/// four series plus the two counters. Error codes are annotations, not a
/// category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub temperature: Option<Vec<f64>>,
    pub pressure: Option<Vec<f64>>,
    pub vibration: Option<Vec<f64>>,
    pub energy_consumption: Option<Vec<f64>>,
    pub runtime_hours: Option<f64>,
    pub cycle_count: Option<u64>,
    #[serde(default)]
    pub error_codes: Vec<String>,
}

impl SensorReadings {
    pub const CATEGORY_COUNT: usize = 6;

    /// Number of sensor categories carrying data. An empty series counts as
    /// absent.
    pub fn categories_present(&self) -> usize {
        let series = [
            &self.temperature,
            &self.pressure,
            &self.vibration,
            &self.energy_consumption,
        ];
        let mut present = series
            .iter()
            .filter(|s| s.as_ref().is_some_and(|v| !v.is_empty()))
            .count();
        if self.runtime_hours.is_some() {
            present += 1;
        }
        if self.cycle_count.is_some() {
            present += 1;
        }
        present
    }

    /// Reject series arithmetic cannot run on. NaN/infinite readings abort
    /// the whole computation rather than being coerced to zero.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        let series = [
            ("sensors.temperature", &self.temperature),
            ("sensors.pressure", &self.pressure),
            ("sensors.vibration", &self.vibration),
            ("sensors.energy_consumption", &self.energy_consumption),
        ];
        for (name, values) in series {
            if let Some(values) = values {
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(AnalyticsError::computation(format!(
                        "{name} contains non-finite readings"
                    )));
                }
            }
        }
        if let Some(h) = self.runtime_hours {
            if !h.is_finite() {
                return Err(AnalyticsError::computation(
                    "sensors.runtime_hours is non-finite",
                ));
            }
        }
        Ok(())
    }
}
