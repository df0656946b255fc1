//! Recommendation generation: maintenance actions with cost and benefit
//! estimates.
//!
//! Rules are evaluated independently; one invocation may yield several
//! recommendations, or none (an empty list is valid output). Output order is
//! rule order — priority sorting happens once in the pipeline so every
//! downstream consumer observes the same stable order.

use chrono::{DateTime, Duration, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use upkeep_core::ValueObject;

use crate::config::AnalysisConfig;
use crate::equipment::EquipmentSnapshot;
use crate::health::HealthAssessment;
use crate::result::AnalyticsError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Inspection,
    Cleaning,
    Lubrication,
    Calibration,
    PartReplacement,
    SystemUpgrade,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Immediate,
    High,
    Medium,
    Low,
    Scheduled,
}

impl Priority {
    /// Rank for descending priority sorts.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Immediate => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Scheduled => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Immediate => "immediate",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Scheduled => "scheduled",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartAvailability {
    InStock,
    OrderRequired,
}

/// Structured work-duration estimate.
///
/// Deliberately a value type rather than text like "4-6 hours": downstream
/// aggregation reads `min_hours` directly instead of parsing strings.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRange {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl DurationRange {
    pub fn new(min_hours: f64, max_hours: f64) -> Self {
        Self {
            min_hours,
            max_hours,
        }
    }
}

impl ValueObject for DurationRange {}

impl core::fmt::Display for DurationRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{} hours", self.min_hours, self.max_hours)
    }
}

/// A part needed for a recommendation, with procurement detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRequirement {
    pub part_name: String,
    pub quantity: u32,
    pub lead_time_days: u32,
    pub availability: PartAvailability,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub labor_hours: f64,
    pub parts_cost: f64,
    pub total_cost: f64,
    pub confidence: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitEstimate {
    pub prevented_downtime_hours: f64,
    pub avoided_emergency_cost: f64,
    /// Expected customer-satisfaction lift, in percentage points.
    pub satisfaction_impact_pct: f64,
    pub life_extension_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredResources {
    pub skill_level: SkillLevel,
    pub tools: Vec<String>,
    pub duration: DurationRange,
    pub parts: Vec<PartRequirement>,
}

/// A proposed maintenance action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecommendation {
    pub action: MaintenanceType,
    pub priority: Priority,
    pub recommended_date: DateTime<Utc>,
    pub confidence: f64,
    pub summary: String,
    pub cost: CostEstimate,
    pub benefit: BenefitEstimate,
    pub resources: RequiredResources,
}

/// Caller-requested prediction window. Advisory in the current rules: it is
/// recorded and logged, and reserved for horizon-aware rule sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionHorizon {
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "6m")]
    Months6,
    #[serde(rename = "1y")]
    Year1,
}

impl Default for PredictionHorizon {
    fn default() -> Self {
        PredictionHorizon::Days90
    }
}

impl PredictionHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionHorizon::Days30 => "30d",
            PredictionHorizon::Days90 => "90d",
            PredictionHorizon::Months6 => "6m",
            PredictionHorizon::Year1 => "1y",
        }
    }
}

impl core::fmt::Display for PredictionHorizon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionHorizon {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30d" => Ok(PredictionHorizon::Days30),
            "90d" => Ok(PredictionHorizon::Days90),
            "6m" => Ok(PredictionHorizon::Months6),
            "1y" => Ok(PredictionHorizon::Year1),
            other => Err(AnalyticsError::invalid_input(
                "prediction_horizon",
                format!("unknown horizon {other:?}; expected one of 30d, 90d, 6m, 1y"),
            )),
        }
    }
}

/// Generate maintenance recommendations from the health assessment and
/// equipment metadata.
pub fn generate_recommendations(
    equipment: &EquipmentSnapshot,
    health: &HealthAssessment,
    as_of: DateTime<Utc>,
    cfg: &AnalysisConfig,
) -> Vec<MaintenanceRecommendation> {
    let mut recommendations: Vec<MaintenanceRecommendation> = Vec::new();

    if health.score < 60.0 {
        recommendations.push(MaintenanceRecommendation {
            action: MaintenanceType::Inspection,
            priority: Priority::Immediate,
            recommended_date: as_of + Duration::days(7),
            confidence: 0.92,
            summary: "Comprehensive diagnostic inspection".to_string(),
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
                skill_level: SkillLevel::Intermediate,
                tools: vec![
                    "Diagnostic equipment".to_string(),
                    "Multimeter".to_string(),
                ],
                duration: DurationRange::new(2.0, 3.0),
                parts: vec![],
            },
        });
    }

    if equipment.type_contains("HVAC") {
        recommendations.push(MaintenanceRecommendation {
            action: MaintenanceType::Cleaning,
            priority: Priority::High,
            recommended_date: as_of + Duration::days(14),
            confidence: 0.88,
            summary: "Full system cleaning and filter service".to_string(),
            cost: CostEstimate {
                labor_hours: 3.0,
                parts_cost: 45.0,
                total_cost: 345.0,
                confidence: 0.85,
            },
            benefit: BenefitEstimate {
                prevented_downtime_hours: 12.0,
                avoided_emergency_cost: 500.0,
                satisfaction_impact_pct: 10.0,
                life_extension_months: 3,
            },
            resources: RequiredResources {
                skill_level: SkillLevel::Basic,
                tools: vec![],
                duration: DurationRange::new(3.0, 4.0),
                parts: vec![
                    PartRequirement {
                        part_name: "Air Filter".to_string(),
                        quantity: 2,
                        lead_time_days: 1,
                        availability: PartAvailability::InStock,
                    },
                    PartRequirement {
                        part_name: "Cleaning Solution".to_string(),
                        quantity: 1,
                        lead_time_days: 1,
                        availability: PartAvailability::InStock,
                    },
                ],
            },
        });
    }

    for risk in health.high_severity_risks() {
        let part_name = if risk.name.contains("Temperature") {
            "Temperature Sensor"
        } else {
            "Component Part"
        };
        recommendations.push(MaintenanceRecommendation {
            action: MaintenanceType::PartReplacement,
            priority: Priority::High,
            recommended_date: as_of + Duration::days(21),
            confidence: 0.75,
            summary: format!("Replace {part_name} linked to {}", risk.name),
            cost: CostEstimate {
                labor_hours: 4.0,
                parts_cost: 180.0,
                total_cost: 580.0,
                confidence: 0.85,
            },
            benefit: BenefitEstimate {
                prevented_downtime_hours: 48.0,
                avoided_emergency_cost: 1200.0,
                satisfaction_impact_pct: 20.0,
                life_extension_months: 12,
            },
            resources: RequiredResources {
                skill_level: SkillLevel::Advanced,
                tools: vec![],
                duration: DurationRange::new(4.0, 6.0),
                parts: vec![PartRequirement {
                    part_name: part_name.to_string(),
                    quantity: 1,
                    lead_time_days: cfg.default_part_lead_time_days,
                    availability: PartAvailability::OrderRequired,
                }],
            },
        });
    }

    recommendations
}

/// Stable-sort recommendations by descending priority rank; ties keep their
/// original relative order.
pub fn sort_by_priority(recommendations: &mut [MaintenanceRecommendation]) {
    recommendations.sort_by_key(|r| core::cmp::Reverse(r.priority.rank()));
}
