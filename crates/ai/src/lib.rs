//! `upkeep-ai`
//!
//! **Responsibility:** Predictive-maintenance analytics pipeline.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on operational aggregates (work orders, billing, etc).
//! - It must not mutate domain state.
//! - It emits **analytics insights/reports**, not domain events.
//!
//! The pipeline is a deterministic decision engine: health scoring, failure
//! prediction, recommendation generation, scheduling, cost-benefit analysis,
//! inventory planning, and customer-impact assessment, chained per equipment
//! snapshot. Inputs are provided by callers (infra/API); nothing here does I/O.

pub mod config;
pub mod cost_benefit;
pub mod customer_impact;
pub mod equipment;
pub mod executor;
pub mod health;
pub mod insights;
pub mod inventory_plan;
pub mod job;
pub mod pipeline;
pub mod recommend;
pub mod result;
pub mod schedule;

pub use config::{AnalysisConfig, ScoringConfig};
pub use cost_benefit::{CostBenefitSummary, PaybackPeriod};
pub use customer_impact::{CustomerImpactAssessment, DisruptionLevel};
pub use equipment::{EquipmentSnapshot, MaintenanceKind, MaintenanceLogEntry, SensorReadings};
pub use executor::{JobExecutor, LocalJobExecutor, TenantScope};
pub use health::{FailureModePrediction, HealthAssessment, HealthTrend, RiskFactor, Severity};
pub use insights::{MlInsights, ReliabilityTier};
pub use inventory_plan::{InventoryPlan, PartStockRecommendation, SeasonalAdjustment};
pub use job::AnalyticsJob;
pub use pipeline::{MaintenanceAnalysisInput, MaintenanceAnalysisJob, MaintenanceReport};
pub use recommend::{
    BenefitEstimate, CostEstimate, DurationRange, MaintenanceRecommendation, MaintenanceType,
    PartAvailability, PartRequirement, PredictionHorizon, Priority, RequiredResources, SkillLevel,
};
pub use result::AnalyticsError;
pub use schedule::{
    AlternativeSchedule, ScheduleEntry, SchedulePlan, SchedulingStrategy, StaticAssignmentStrategy,
};
