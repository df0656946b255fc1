//! Customer impact: service disruption estimate and communication plan.

use serde::{Deserialize, Serialize};

use crate::recommend::{MaintenanceRecommendation, Priority};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisruptionLevel {
    None,
    Minimal,
    Moderate,
    Significant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerImpactAssessment {
    /// Optimistic total: the sum of each action's minimum duration.
    pub estimated_downtime_hours: f64,
    pub disruption_level: DisruptionLevel,
    pub notification_timeline: String,
    pub mitigation_strategies: Vec<String>,
    pub key_messages: Vec<String>,
}

/// Estimate service disruption from the recommendation list.
pub fn assess_customer_impact(
    recommendations: &[MaintenanceRecommendation],
) -> CustomerImpactAssessment {
    let estimated_downtime_hours: f64 = recommendations
        .iter()
        .map(|r| r.resources.duration.min_hours)
        .sum();

    let disruption_level = if estimated_downtime_hours > 8.0 {
        DisruptionLevel::Significant
    } else if estimated_downtime_hours > 4.0 {
        DisruptionLevel::Moderate
    } else if estimated_downtime_hours > 2.0 {
        DisruptionLevel::Minimal
    } else {
        DisruptionLevel::None
    };

    let urgent = recommendations
        .iter()
        .any(|r| matches!(r.priority, Priority::Immediate | Priority::High));
    let notification_timeline = if urgent {
        "Immediate".to_string()
    } else {
        "3-5 days before scheduled maintenance".to_string()
    };

    CustomerImpactAssessment {
        estimated_downtime_hours,
        disruption_level,
        notification_timeline,
        mitigation_strategies: vec![
            "Schedule work outside peak service hours".to_string(),
            "Stage replacement parts before the visit".to_string(),
            "Provide temporary backup capacity where available".to_string(),
        ],
        key_messages: vec![
            "Preventive work now avoids longer unplanned outages later".to_string(),
            "The work window is confirmed with you in advance".to_string(),
            "All planned actions are bundled into a single visit".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{
        BenefitEstimate, CostEstimate, DurationRange, MaintenanceType, RequiredResources,
        SkillLevel,
    };
    use chrono::{TimeZone, Utc};

    fn rec(min_hours: f64, max_hours: f64, priority: Priority) -> MaintenanceRecommendation {
        MaintenanceRecommendation {
            action: MaintenanceType::Inspection,
            priority,
            recommended_date: Utc.with_ymd_and_hms(2025, 6, 8, 0, 0, 0).unwrap(),
            confidence: 0.9,
            summary: "test".to_string(),
            cost: CostEstimate {
                labor_hours: 2.0,
                parts_cost: 0.0,
                total_cost: 200.0,
                confidence: 0.85,
            },
            benefit: BenefitEstimate {
                prevented_downtime_hours: 24.0,
                avoided_emergency_cost: 800.0,
                satisfaction_impact_pct: 15.0,
                life_extension_months: 6,
            },
            resources: RequiredResources {
                skill_level: SkillLevel::Basic,
                tools: vec![],
                duration: DurationRange::new(min_hours, max_hours),
                parts: vec![],
            },
        }
    }

    #[test]
    fn downtime_sums_the_minimum_durations() {
        let recs = vec![
            rec(2.0, 3.0, Priority::Scheduled),
            rec(4.0, 6.0, Priority::Scheduled),
        ];
        let impact = assess_customer_impact(&recs);

        assert_eq!(impact.estimated_downtime_hours, 6.0);
        assert_eq!(impact.disruption_level, DisruptionLevel::Moderate);
    }

    #[test]
    fn disruption_bands_cover_all_levels() {
        let cases = [
            (vec![], DisruptionLevel::None),
            (vec![rec(2.0, 3.0, Priority::Scheduled)], DisruptionLevel::None),
            (
                vec![rec(3.0, 4.0, Priority::Scheduled)],
                DisruptionLevel::Minimal,
            ),
            (
                vec![rec(4.5, 5.0, Priority::Scheduled)],
                DisruptionLevel::Moderate,
            ),
            (
                vec![rec(9.0, 12.0, Priority::Scheduled)],
                DisruptionLevel::Significant,
            ),
        ];
        for (recs, expected) in cases {
            assert_eq!(assess_customer_impact(&recs).disruption_level, expected);
        }
    }

    #[test]
    fn urgent_priorities_trigger_immediate_notification() {
        let impact = assess_customer_impact(&[rec(1.0, 2.0, Priority::High)]);
        assert_eq!(impact.notification_timeline, "Immediate");

        let impact = assess_customer_impact(&[rec(1.0, 2.0, Priority::Immediate)]);
        assert_eq!(impact.notification_timeline, "Immediate");

        let impact = assess_customer_impact(&[rec(1.0, 2.0, Priority::Medium)]);
        assert_eq!(
            impact.notification_timeline,
            "3-5 days before scheduled maintenance"
        );
    }
}
