//! Model-quality summary: how much the rest of the report can be trusted,
//! given what data was actually supplied.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::equipment::SensorReadings;
use crate::health::HealthAssessment;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReliabilityTier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlInsights {
    /// 0-1. Grows with data quality, capped below certainty.
    pub model_confidence: f64,
    /// Heuristic constant today; a tracked metric once work-order outcomes
    /// feed back into the system.
    pub historical_accuracy: f64,
    /// 0-100: share of expected sensor categories actually present.
    pub data_quality_score: f64,
    pub reliability: ReliabilityTier,
    pub improvement_suggestions: Vec<String>,
}

/// Summarize confidence and reliability from sensor-data presence and the
/// health result.
///
/// Missing sensors are the degraded-confidence path, not an error: quality
/// reports the configured floor and confidence stays at its base value.
pub fn synthesize_insights(
    sensors: Option<&SensorReadings>,
    health: &HealthAssessment,
    cfg: &AnalysisConfig,
) -> MlInsights {
    let categories = sensors.map_or(0, SensorReadings::categories_present);

    let (data_quality_score, model_confidence) = if categories == 0 {
        (cfg.missing_sensor_quality_floor, cfg.base_model_confidence)
    } else {
        let quality = categories as f64 / SensorReadings::CATEGORY_COUNT as f64 * 100.0;
        let confidence = (cfg.base_model_confidence
            + quality / 100.0 * cfg.confidence_quality_weight)
            .min(cfg.max_model_confidence);
        (quality, confidence)
    };

    let reliability = if data_quality_score > 70.0 {
        ReliabilityTier::High
    } else if data_quality_score > 40.0 {
        ReliabilityTier::Medium
    } else {
        ReliabilityTier::Low
    };

    let mut improvement_suggestions = Vec::new();
    if categories == 0 {
        improvement_suggestions
            .push("Instrument the equipment with temperature and vibration sensors".to_string());
    } else if categories < SensorReadings::CATEGORY_COUNT {
        improvement_suggestions
            .push("Add the missing sensor categories to raise data quality".to_string());
    }
    improvement_suggestions
        .push("Feed completed work-order outcomes back to track real accuracy".to_string());
    if !health.risk_factors.is_empty() {
        improvement_suggestions.push(
            "Track outcomes of the flagged risk factors to calibrate their probabilities"
                .to_string(),
        );
    }

    MlInsights {
        model_confidence,
        historical_accuracy: cfg.historical_accuracy,
        data_quality_score,
        reliability,
        improvement_suggestions,
    }
}
