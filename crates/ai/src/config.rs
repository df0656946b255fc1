use serde::{Deserialize, Serialize};

use crate::result::AnalyticsError;

/// Thresholds and penalties for the health scorer.
///
/// Every constant here is a heuristic calibrated by hand, not a fitted model
/// parameter. Keeping them in one injectable structure lets operators
/// recalibrate against real outcome data without code changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score every assessment starts from, before deductions.
    pub baseline_score: f64,
    /// Max temperature reading above which the overheating gate fires.
    pub overheat_threshold: f64,
    pub overheat_penalty: f64,
    /// Mean vibration above which the wear gate fires.
    pub vibration_threshold: f64,
    pub vibration_penalty: f64,
    /// Equipment age (calendar months since installation) above which the
    /// aging gate fires.
    pub aging_threshold_months: i64,
    pub aging_penalty: f64,
    /// Fraction of history entries that were emergency repairs above which
    /// the reactive-maintenance gate fires.
    pub emergency_ratio_threshold: f64,
    pub emergency_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline_score: 85.0,
            overheat_threshold: 200.0,
            overheat_penalty: 15.0,
            vibration_threshold: 5.0,
            vibration_penalty: 10.0,
            aging_threshold_months: 120,
            aging_penalty: 20.0,
            emergency_ratio_threshold: 0.3,
            emergency_penalty: 15.0,
        }
    }
}

/// Pipeline-wide heuristic constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub scoring: ScoringConfig,
    /// Discount applied to net savings to account for estimate uncertainty.
    pub risk_discount: f64,
    /// Stand-in for a tracked accuracy metric; a real feedback loop should
    /// replace this once completed work orders are fed back.
    pub historical_accuracy: f64,
    /// Data-quality score reported when no sensor data is supplied at all.
    pub missing_sensor_quality_floor: f64,
    /// Model confidence with no sensor signal to lean on.
    pub base_model_confidence: f64,
    pub max_model_confidence: f64,
    /// How strongly data quality lifts confidence above the base.
    pub confidence_quality_weight: f64,
    /// Lead time assumed for parts the stores system has no record of.
    pub default_part_lead_time_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            risk_discount: 0.85,
            historical_accuracy: 0.89,
            missing_sensor_quality_floor: 30.0,
            base_model_confidence: 0.60,
            max_model_confidence: 0.95,
            confidence_quality_weight: 0.35,
            default_part_lead_time_days: 3,
        }
    }
}

impl AnalysisConfig {
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_risk_discount(mut self, risk_discount: f64) -> Self {
        self.risk_discount = risk_discount;
        self
    }

    pub fn with_historical_accuracy(mut self, historical_accuracy: f64) -> Self {
        self.historical_accuracy = historical_accuracy;
        self
    }

    /// Reject configurations arithmetic cannot safely run on.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !(0.0..=100.0).contains(&self.scoring.baseline_score) {
            return Err(AnalyticsError::invalid_input(
                "config.scoring.baseline_score",
                "must be within 0..=100",
            ));
        }
        if !(self.risk_discount.is_finite() && (0.0..=1.0).contains(&self.risk_discount)) {
            return Err(AnalyticsError::invalid_input(
                "config.risk_discount",
                "must be a finite number within 0..=1",
            ));
        }
        if !(0.0..=1.0).contains(&self.base_model_confidence)
            || !(0.0..=1.0).contains(&self.max_model_confidence)
            || self.base_model_confidence > self.max_model_confidence
        {
            return Err(AnalyticsError::invalid_input(
                "config.base_model_confidence",
                "confidence bounds must sit within 0..=1 with base <= max",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_discount_is_rejected() {
        let cfg = AnalysisConfig::default().with_risk_discount(1.5);
        let err = cfg.validate().unwrap_err();
        match err {
            AnalyticsError::InvalidInput { field, .. } => {
                assert_eq!(field, "config.risk_discount");
            }
            _ => panic!("Expected InvalidInput for out-of-range discount"),
        }
    }
}
