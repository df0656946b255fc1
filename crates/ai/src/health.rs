//! Health scoring: equipment condition, risk factors, failure-mode
//! predictions.
//!
//! Scoring is additive: every applicable deduction gate fires independently
//! (they are not mutually exclusive), starting from a configured baseline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::equipment::{EquipmentSnapshot, MaintenanceKind, MaintenanceLogEntry, SensorReadings};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTrend {
    Stable,
    Declining,
    Critical,
}

/// A named condition contributing negatively to equipment health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    /// Probability in [0, 1] that the condition materializes.
    pub probability: f64,
    pub potential_impact: String,
}

/// A specific predicted way the equipment may fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureModePrediction {
    pub failure_type: String,
    pub probability: f64,
    /// Textual range, e.g. "2-4 weeks".
    pub estimated_time_to_failure: String,
    pub indicators: Vec<String>,
    pub preventive_actions: Vec<String>,
}

/// Output of the health scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    /// 0-100, higher is healthier.
    pub score: f64,
    pub trend: HealthTrend,
    pub risk_factors: Vec<RiskFactor>,
    pub failure_modes: Vec<FailureModePrediction>,
}

impl HealthAssessment {
    pub fn high_severity_risks(&self) -> impl Iterator<Item = &RiskFactor> {
        self.risk_factors
            .iter()
            .filter(|r| r.severity == Severity::High)
    }
}

/// Score equipment condition from the snapshot, optional sensor data, and
/// optional maintenance history.
pub fn assess_health(
    equipment: &EquipmentSnapshot,
    sensors: Option<&SensorReadings>,
    history: &[MaintenanceLogEntry],
    as_of: DateTime<Utc>,
    cfg: &ScoringConfig,
) -> HealthAssessment {
    let mut score = cfg.baseline_score;
    let mut risk_factors: Vec<RiskFactor> = Vec::new();
    let mut failure_modes: Vec<FailureModePrediction> = Vec::new();

    if let Some(max_temp) = sensors.and_then(|s| series_max(s.temperature.as_deref())) {
        if max_temp > cfg.overheat_threshold {
            score -= cfg.overheat_penalty;
            risk_factors.push(RiskFactor {
                name: "Overheating".to_string(),
                severity: Severity::High,
                description: format!(
                    "Temperature readings peaked at {max_temp:.1}, above the safe operating ceiling of {:.0}",
                    cfg.overheat_threshold
                ),
                probability: 0.78,
                potential_impact: "Component damage and unplanned shutdown".to_string(),
            });
            failure_modes.push(FailureModePrediction {
                failure_type: "Thermal Overload".to_string(),
                probability: 0.65,
                estimated_time_to_failure: "2-4 weeks".to_string(),
                indicators: vec![
                    "Sustained high temperature readings".to_string(),
                    "Reduced cooling efficiency".to_string(),
                ],
                preventive_actions: vec![
                    "Inspect and clean the cooling circuit".to_string(),
                    "Replace degraded thermal components".to_string(),
                ],
            });
        }
    }

    if let Some(mean_vibration) = sensors.and_then(|s| series_mean(s.vibration.as_deref())) {
        if mean_vibration > cfg.vibration_threshold {
            score -= cfg.vibration_penalty;
            risk_factors.push(RiskFactor {
                name: "Excessive Vibration".to_string(),
                severity: Severity::Medium,
                description: format!(
                    "Mean vibration {mean_vibration:.2} exceeds the {:.1} service limit",
                    cfg.vibration_threshold
                ),
                probability: 0.55,
                potential_impact: "Accelerated wear of bearings and mounts".to_string(),
            });
            failure_modes.push(FailureModePrediction {
                failure_type: "Mechanical Wear".to_string(),
                probability: 0.45,
                estimated_time_to_failure: "6-12 weeks".to_string(),
                indicators: vec![
                    "Rising vibration trend".to_string(),
                    "Audible bearing noise".to_string(),
                ],
                preventive_actions: vec![
                    "Balance the rotating assembly".to_string(),
                    "Replace worn bearings and mounts".to_string(),
                ],
            });
        }
    }

    let age_months = equipment.age_in_months(as_of);
    if age_months > cfg.aging_threshold_months {
        score -= cfg.aging_penalty;
        risk_factors.push(RiskFactor {
            name: "Equipment Age".to_string(),
            severity: Severity::Medium,
            description: format!(
                "{age_months} months in service, past the {}-month design window",
                cfg.aging_threshold_months
            ),
            probability: 0.85,
            potential_impact: "Rising failure probability and part obsolescence".to_string(),
        });
    }

    if !history.is_empty() {
        let emergencies = history
            .iter()
            .filter(|e| e.kind == MaintenanceKind::Emergency)
            .count();
        let ratio = emergencies as f64 / history.len() as f64;
        if ratio > cfg.emergency_ratio_threshold {
            score -= cfg.emergency_penalty;
            risk_factors.push(RiskFactor {
                name: "High Emergency Maintenance".to_string(),
                severity: Severity::High,
                description: format!(
                    "{:.0}% of recorded maintenance visits were unplanned emergencies",
                    ratio * 100.0
                ),
                probability: 0.70,
                potential_impact: "Recurring unplanned downtime".to_string(),
            });
        }
    }

    let score = score.clamp(0.0, 100.0);

    HealthAssessment {
        score,
        trend: classify_trend(score),
        risk_factors,
        failure_modes,
    }
}

/// Classify the trend band for a score.
///
/// The 60-80 and 40-60 bands deliberately carry the same label; the two arms
/// stay separate until a distinct intermediate category is agreed with the
/// dashboard team.
fn classify_trend(score: f64) -> HealthTrend {
    if score > 80.0 {
        HealthTrend::Stable
    } else if score > 60.0 {
        HealthTrend::Declining
    } else if score > 40.0 {
        HealthTrend::Declining
    } else {
        HealthTrend::Critical
    }
}

fn series_max(values: Option<&[f64]>) -> Option<f64> {
    values?.iter().copied().reduce(f64::max)
}

fn series_mean(values: Option<&[f64]>) -> Option<f64> {
    let values = values?;
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
