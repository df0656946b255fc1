//! Scheduling: turn the recommendation list into a primary schedule plus
//! alternative plans.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::recommend::{MaintenanceRecommendation, Priority, SkillLevel};

/// Pluggable technician-assignment and scoring strategy.
///
/// The pipeline's call contract stays fixed while the strategy behind it can
/// be swapped for a constraint-based or cost-based optimizer.
pub trait SchedulingStrategy: Send + Sync + 'static {
    fn assign_technician(&self, recommendation: &MaintenanceRecommendation) -> String;

    fn optimization_score(&self, recommendation: &MaintenanceRecommendation) -> f64;
}

/// Fixed-value strategy: placeholder until a capacity-aware roster
/// integration lands.
#[derive(Debug, Default, Copy, Clone)]
pub struct StaticAssignmentStrategy;

impl SchedulingStrategy for StaticAssignmentStrategy {
    fn assign_technician(&self, _recommendation: &MaintenanceRecommendation) -> String {
        "Lead Technician".to_string()
    }

    fn optimization_score(&self, _recommendation: &MaintenanceRecommendation) -> f64 {
        87.0
    }
}

/// One slot in the primary schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub scheduled_date: DateTime<Utc>,
    /// Working window within the day.
    pub time_window: String,
    pub tasks: Vec<String>,
    pub required_skill: SkillLevel,
    pub assigned_technician: String,
    pub customer_notification_required: bool,
    pub optimization_score: f64,
    pub rationale: String,
}

/// An alternative plan trading date against cost or speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeSchedule {
    pub strategy: String,
    pub start_date: DateTime<Utc>,
    pub efficiency_score: f64,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub primary: Vec<ScheduleEntry>,
    pub alternatives: Vec<AlternativeSchedule>,
}

const WORK_WINDOW: &str = "09:00-12:00";

/// Build the schedule plan.
///
/// `recommendations` is expected in priority-sorted order (the pipeline sorts
/// once before fan-out); entries are emitted one-to-one in that order, so the
/// primary schedule length always equals the recommendation count.
pub fn build_schedule(
    recommendations: &[MaintenanceRecommendation],
    as_of: DateTime<Utc>,
    strategy: &dyn SchedulingStrategy,
) -> SchedulePlan {
    let primary = recommendations
        .iter()
        .map(|rec| ScheduleEntry {
            scheduled_date: rec.recommended_date,
            time_window: WORK_WINDOW.to_string(),
            tasks: vec![rec.summary.clone()],
            required_skill: rec.resources.skill_level,
            assigned_technician: strategy.assign_technician(rec),
            customer_notification_required: rec.priority == Priority::Immediate,
            optimization_score: strategy.optimization_score(rec),
            rationale: format!(
                "{} priority work slotted ahead of lower-priority actions",
                rec.priority
            ),
        })
        .collect();

    let alternatives = vec![
        AlternativeSchedule {
            strategy: "cost_optimized".to_string(),
            start_date: as_of + Duration::days(30),
            efficiency_score: 78.0,
            advantages: vec![
                "Bundles work into one visit to cut call-out cost".to_string(),
                "Parts arrive by standard delivery".to_string(),
            ],
            disadvantages: vec!["Longer exposure to the flagged risks".to_string()],
        },
        AlternativeSchedule {
            strategy: "time_optimized".to_string(),
            start_date: as_of + Duration::days(3),
            efficiency_score: 92.0,
            advantages: vec!["Fastest risk reduction".to_string()],
            disadvantages: vec![
                "Expedited parts and overtime raise cost".to_string(),
                "Shorter customer notice window".to_string(),
            ],
        },
    ];

    SchedulePlan {
        primary,
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::health::{HealthAssessment, HealthTrend, RiskFactor, Severity};
    use crate::recommend::{generate_recommendations, sort_by_priority};
    use crate::equipment::EquipmentSnapshot;
    use chrono::TimeZone;
    use upkeep_core::TenantId;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn recommendations(count_high_risks: usize, score: f64) -> Vec<MaintenanceRecommendation> {
        let eq = EquipmentSnapshot {
            tenant_id: TenantId::new(),
            equipment_id: "EQ-001".to_string(),
            equipment_type: "HVAC System".to_string(),
            model: "ACME 9000".to_string(),
            installed_at: test_time() - chrono::Duration::days(365),
            last_maintained_at: None,
            location: "Roof".to_string(),
        };
        let health = HealthAssessment {
            score,
            trend: HealthTrend::Declining,
            risk_factors: (0..count_high_risks)
                .map(|i| RiskFactor {
                    name: format!("Risk {i}"),
                    severity: Severity::High,
                    description: String::new(),
                    probability: 0.7,
                    potential_impact: String::new(),
                })
                .collect(),
            failure_modes: vec![],
        };
        let mut recs =
            generate_recommendations(&eq, &health, test_time(), &AnalysisConfig::default());
        sort_by_priority(&mut recs);
        recs
    }

    #[test]
    fn one_schedule_entry_per_recommendation() {
        let recs = recommendations(2, 50.0);
        let plan = build_schedule(&recs, test_time(), &StaticAssignmentStrategy);
        assert_eq!(plan.primary.len(), recs.len());
    }

    #[test]
    fn only_immediate_work_requires_customer_notification() {
        let recs = recommendations(1, 50.0);
        let plan = build_schedule(&recs, test_time(), &StaticAssignmentStrategy);

        let flags: Vec<bool> = plan
            .primary
            .iter()
            .map(|e| e.customer_notification_required)
            .collect();
        // Sorted order: the immediate inspection leads, high-priority work follows.
        assert_eq!(flags[0], true);
        assert!(flags[1..].iter().all(|f| !f));
    }

    #[test]
    fn alternatives_are_fixed_cost_and_time_variants() {
        let plan = build_schedule(&[], test_time(), &StaticAssignmentStrategy);

        assert!(plan.primary.is_empty());
        assert_eq!(plan.alternatives.len(), 2);
        assert_eq!(plan.alternatives[0].strategy, "cost_optimized");
        assert_eq!(
            plan.alternatives[0].start_date,
            test_time() + Duration::days(30)
        );
        assert_eq!(plan.alternatives[0].efficiency_score, 78.0);
        assert_eq!(plan.alternatives[1].strategy, "time_optimized");
        assert_eq!(
            plan.alternatives[1].start_date,
            test_time() + Duration::days(3)
        );
        assert_eq!(plan.alternatives[1].efficiency_score, 92.0);
    }

    #[test]
    fn custom_strategy_drives_assignment_and_score() {
        struct NightShift;
        impl SchedulingStrategy for NightShift {
            fn assign_technician(&self, _: &MaintenanceRecommendation) -> String {
                "Night Crew".to_string()
            }
            fn optimization_score(&self, _: &MaintenanceRecommendation) -> f64 {
                55.5
            }
        }

        let recs = recommendations(0, 50.0);
        let plan = build_schedule(&recs, test_time(), &NightShift);
        assert!(plan
            .primary
            .iter()
            .all(|e| e.assigned_technician == "Night Crew" && e.optimization_score == 55.5));
    }
}
