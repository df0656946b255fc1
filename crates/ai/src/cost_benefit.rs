//! Cost-benefit aggregation: preventive spend versus avoided emergency cost.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::recommend::MaintenanceRecommendation;

/// Months to break even on preventive spending, or a sentinel when there is
/// no avoided cost to pay back against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackPeriod {
    Months(i64),
    NotApplicable,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<i64> {
        match self {
            PaybackPeriod::Months(m) => Some(*m),
            PaybackPeriod::NotApplicable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBenefitSummary {
    pub preventive_cost: f64,
    pub avoided_emergency_cost: f64,
    pub net_savings: f64,
    /// Rounded to whole percent. Zero when there is no preventive spend.
    pub roi_percent: f64,
    pub payback: PaybackPeriod,
    /// Net savings discounted for estimate uncertainty.
    pub risk_adjusted_savings: f64,
    pub long_term_benefits: Vec<String>,
}

/// Aggregate recommendation costs and benefits into ROI/payback metrics.
///
/// Division guards: an empty recommendation list (zero preventive cost) means
/// ROI and payback are defined as zero, never a division by zero; zero
/// avoided cost with real spend yields the not-applicable payback sentinel.
pub fn analyze_cost_benefit(
    recommendations: &[MaintenanceRecommendation],
    cfg: &AnalysisConfig,
) -> CostBenefitSummary {
    let preventive_cost: f64 = recommendations.iter().map(|r| r.cost.total_cost).sum();
    let avoided_emergency_cost: f64 = recommendations
        .iter()
        .map(|r| r.benefit.avoided_emergency_cost)
        .sum();
    let net_savings = avoided_emergency_cost - preventive_cost;

    let roi_percent = if preventive_cost > 0.0 {
        (net_savings / preventive_cost * 100.0).round()
    } else {
        0.0
    };

    let payback = if preventive_cost == 0.0 {
        PaybackPeriod::Months(0)
    } else if avoided_emergency_cost == 0.0 {
        PaybackPeriod::NotApplicable
    } else {
        PaybackPeriod::Months((preventive_cost / (avoided_emergency_cost / 12.0)).round() as i64)
    };

    CostBenefitSummary {
        preventive_cost,
        avoided_emergency_cost,
        net_savings,
        roi_percent,
        payback,
        risk_adjusted_savings: net_savings * cfg.risk_discount,
        // Static entries; equipment-type-specific benefit tables should
        // replace these once the catalog carries them.
        long_term_benefits: vec![
            "Extended equipment service life".to_string(),
            "Fewer emergency call-outs and unplanned outages".to_string(),
            "More predictable maintenance budgeting".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{
        BenefitEstimate, CostEstimate, DurationRange, MaintenanceType, Priority,
        RequiredResources, SkillLevel,
    };
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn rec(total_cost: f64, avoided: f64) -> MaintenanceRecommendation {
        MaintenanceRecommendation {
            action: MaintenanceType::Inspection,
            priority: Priority::High,
            recommended_date: Utc.with_ymd_and_hms(2025, 6, 8, 0, 0, 0).unwrap(),
            confidence: 0.9,
            summary: "test".to_string(),
            cost: CostEstimate {
                labor_hours: 2.0,
                parts_cost: 0.0,
                total_cost,
                confidence: 0.85,
            },
            benefit: BenefitEstimate {
                prevented_downtime_hours: 4.0,
                avoided_emergency_cost: avoided,
                satisfaction_impact_pct: 10.0,
                life_extension_months: 6,
            },
            resources: RequiredResources {
                skill_level: SkillLevel::Basic,
                tools: vec![],
                duration: DurationRange::new(1.0, 2.0),
                parts: vec![],
            },
        }
    }

    #[test]
    fn sums_and_net_savings_are_exact() {
        let recs = vec![rec(200.0, 800.0), rec(345.0, 500.0)];
        let summary = analyze_cost_benefit(&recs, &AnalysisConfig::default());

        assert_eq!(summary.preventive_cost, 545.0);
        assert_eq!(summary.avoided_emergency_cost, 1300.0);
        assert_eq!(summary.net_savings, 755.0);
        assert_eq!(summary.roi_percent, (755.0f64 / 545.0 * 100.0).round());
        assert_eq!(summary.payback, PaybackPeriod::Months(5));
        assert_eq!(summary.risk_adjusted_savings, 755.0 * 0.85);
    }

    #[test]
    fn empty_recommendations_defines_roi_and_payback_as_zero() {
        let summary = analyze_cost_benefit(&[], &AnalysisConfig::default());

        assert_eq!(summary.preventive_cost, 0.0);
        assert_eq!(summary.roi_percent, 0.0);
        assert_eq!(summary.payback, PaybackPeriod::Months(0));
        assert_eq!(summary.net_savings, 0.0);
    }

    #[test]
    fn zero_avoided_cost_yields_not_applicable_payback() {
        let recs = vec![rec(200.0, 0.0)];
        let summary = analyze_cost_benefit(&recs, &AnalysisConfig::default());

        assert_eq!(summary.payback, PaybackPeriod::NotApplicable);
        assert_eq!(summary.payback.months(), None);
        assert_eq!(summary.roi_percent, -100.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: net savings is exactly avoided minus preventive, and the
        /// guards keep every derived metric finite.
        #[test]
        fn net_savings_identity_holds(
            costs in prop::collection::vec((0.0f64..10_000.0, 0.0f64..10_000.0), 0..12)
        ) {
            let recs: Vec<_> = costs.iter().map(|(c, a)| rec(*c, *a)).collect();
            let summary = analyze_cost_benefit(&recs, &AnalysisConfig::default());

            let preventive: f64 = costs.iter().map(|(c, _)| c).sum();
            let avoided: f64 = costs.iter().map(|(_, a)| a).sum();
            prop_assert_eq!(summary.net_savings, avoided - preventive);
            prop_assert!(summary.roi_percent.is_finite());
            prop_assert!(summary.risk_adjusted_savings.is_finite());
        }
    }
}
