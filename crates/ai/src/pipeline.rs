//! Pipeline assembly: one job runs all seven analysis stages over a single
//! equipment snapshot and joins the results into one report.
//!
//! Stage order: health scoring then recommendation generation are strictly
//! sequential; scheduling, cost-benefit, inventory, and customer impact only
//! depend on the completed recommendation list (insight synthesis on sensors
//! plus the health result), so they run as parallel scoped tasks joined
//! before assembly. No stage performs I/O and no state survives a run.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use upkeep_core::TenantId;

use crate::config::AnalysisConfig;
use crate::cost_benefit::{analyze_cost_benefit, CostBenefitSummary};
use crate::customer_impact::{assess_customer_impact, CustomerImpactAssessment};
use crate::equipment::{
    validate_history, EquipmentSnapshot, MaintenanceLogEntry, SensorReadings,
};
use crate::health::{assess_health, HealthAssessment};
use crate::insights::{synthesize_insights, MlInsights};
use crate::inventory_plan::{plan_inventory, InventoryPlan};
use crate::job::AnalyticsJob;
use crate::recommend::{
    generate_recommendations, sort_by_priority, MaintenanceRecommendation, PredictionHorizon,
};
use crate::result::AnalyticsError;
use crate::schedule::{build_schedule, SchedulePlan, SchedulingStrategy, StaticAssignmentStrategy};

/// Everything one pipeline invocation runs on, already materialized by the
/// caller. `as_of` is the analysis timestamp: identical inputs (including
/// `as_of`) always produce identical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAnalysisInput {
    pub equipment: EquipmentSnapshot,
    pub sensors: Option<SensorReadings>,
    #[serde(default)]
    pub history: Vec<MaintenanceLogEntry>,
    #[serde(default)]
    pub horizon: PredictionHorizon,
    pub as_of: DateTime<Utc>,
}

/// The assembled seven-section analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceReport {
    pub equipment_health: HealthAssessment,
    /// Priority-sorted, ties in rule order.
    pub maintenance_recommendations: Vec<MaintenanceRecommendation>,
    pub optimal_scheduling: SchedulePlan,
    pub cost_benefit_analysis: CostBenefitSummary,
    pub inventory_recommendations: InventoryPlan,
    pub customer_impact_analysis: CustomerImpactAssessment,
    pub machine_learning_insights: MlInsights,
}

/// Deterministic predictive-maintenance job for one equipment snapshot.
pub struct MaintenanceAnalysisJob {
    tenant_id: TenantId,
    input: MaintenanceAnalysisInput,
    config: AnalysisConfig,
    strategy: Arc<dyn SchedulingStrategy>,
}

impl MaintenanceAnalysisJob {
    pub fn new(tenant_id: TenantId, input: MaintenanceAnalysisInput) -> Self {
        Self {
            tenant_id,
            input,
            config: AnalysisConfig::default(),
            strategy: Arc::new(StaticAssignmentStrategy),
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn SchedulingStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    fn validate(&self) -> Result<(), AnalyticsError> {
        if self.input.equipment.tenant_id != self.tenant_id {
            return Err(AnalyticsError::invalid_input(
                "tenant_id",
                "tenant_id mismatch between job and equipment snapshot",
            ));
        }
        self.config.validate()?;
        self.input.equipment.validate()?;
        if let Some(sensors) = &self.input.sensors {
            sensors.validate()?;
        }
        validate_history(&self.input.history)
    }
}

impl AnalyticsJob for MaintenanceAnalysisJob {
    type Input = MaintenanceAnalysisInput;
    type Output = MaintenanceReport;

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<MaintenanceReport, AnalyticsError> {
        // Fail fast: nothing below runs on input we cannot reason about.
        self.validate()?;

        let input = &self.input;
        let sensors = input.sensors.as_ref();
        let as_of = input.as_of;

        let health = assess_health(
            &input.equipment,
            sensors,
            &input.history,
            as_of,
            &self.config.scoring,
        );

        let mut recommendations =
            generate_recommendations(&input.equipment, &health, as_of, &self.config);
        sort_by_priority(&mut recommendations);

        debug!(
            equipment_id = %input.equipment.equipment_id,
            horizon = %input.horizon,
            score = health.score,
            recommendations = recommendations.len(),
            sensors_present = sensors.is_some(),
            "maintenance analysis scored"
        );

        let recommendations = recommendations;
        let equipment_type = input.equipment.equipment_type.as_str();

        std::thread::scope(|s| {
            let scheduling =
                s.spawn(|| build_schedule(&recommendations, as_of, self.strategy.as_ref()));
            let cost_benefit = s.spawn(|| analyze_cost_benefit(&recommendations, &self.config));
            let inventory =
                s.spawn(|| plan_inventory(&recommendations, equipment_type, &self.config));
            let customer_impact = s.spawn(|| assess_customer_impact(&recommendations));
            let insights = s.spawn(|| synthesize_insights(sensors, &health, &self.config));

            let optimal_scheduling = scheduling
                .join()
                .map_err(|_| AnalyticsError::internal("scheduling task panicked"))?;
            let cost_benefit_analysis = cost_benefit
                .join()
                .map_err(|_| AnalyticsError::internal("cost-benefit task panicked"))?;
            let inventory_recommendations = inventory
                .join()
                .map_err(|_| AnalyticsError::internal("inventory task panicked"))?;
            let customer_impact_analysis = customer_impact
                .join()
                .map_err(|_| AnalyticsError::internal("customer-impact task panicked"))?;
            let machine_learning_insights = insights
                .join()
                .map_err(|_| AnalyticsError::internal("insight task panicked"))?;

            Ok(MaintenanceReport {
                equipment_health: health.clone(),
                maintenance_recommendations: recommendations.clone(),
                optimal_scheduling,
                cost_benefit_analysis,
                inventory_recommendations,
                customer_impact_analysis,
                machine_learning_insights,
            })
        })
    }
}
