//! Inventory planning: stocking recommendations aggregated from part
//! requirements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::recommend::MaintenanceRecommendation;

/// Stocking advice for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartStockRecommendation {
    pub part_name: String,
    pub recommended_stock_level: u32,
    /// Unknown to the pipeline; a stores integration fills this in.
    pub current_stock_level: Option<u32>,
    pub reorder_point: u32,
    pub lead_time_days: u32,
    pub annual_usage_forecast: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalAdjustment {
    pub season: String,
    pub part_name: String,
    pub multiplier: f64,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryPlan {
    pub critical_parts_to_stock: Vec<PartStockRecommendation>,
    pub seasonal_adjustments: Vec<SeasonalAdjustment>,
}

/// Aggregate part requirements across recommendations into stocking advice.
///
/// Parts are keyed by name; a part referenced by several recommendations
/// appears exactly once with its quantities summed. Output order is sorted by
/// part name (deterministic).
pub fn plan_inventory(
    recommendations: &[MaintenanceRecommendation],
    equipment_type: &str,
    cfg: &AnalysisConfig,
) -> InventoryPlan {
    let mut quantities: BTreeMap<&str, u32> = BTreeMap::new();
    for rec in recommendations {
        for part in &rec.resources.parts {
            *quantities.entry(part.part_name.as_str()).or_insert(0) += part.quantity;
        }
    }

    let critical_parts_to_stock = quantities
        .into_iter()
        .map(|(part_name, quantity)| PartStockRecommendation {
            part_name: part_name.to_string(),
            recommended_stock_level: (2 * quantity).max(2),
            current_stock_level: None,
            reorder_point: quantity.max(1),
            lead_time_days: cfg.default_part_lead_time_days,
            // Quarterly extrapolation until real usage history is wired in.
            annual_usage_forecast: quantity * 4,
        })
        .collect();

    InventoryPlan {
        critical_parts_to_stock,
        seasonal_adjustments: seasonal_defaults(equipment_type),
    }
}

/// Static per-category seasonal table; extend per equipment category as the
/// catalog grows.
fn seasonal_defaults(equipment_type: &str) -> Vec<SeasonalAdjustment> {
    if equipment_type.contains("HVAC") {
        vec![
            SeasonalAdjustment {
                season: "summer".to_string(),
                part_name: "Air Filter".to_string(),
                multiplier: 1.5,
                rationale: "Higher airflow demand and filter clogging in cooling season"
                    .to_string(),
            },
            SeasonalAdjustment {
                season: "winter".to_string(),
                part_name: "Heating Element".to_string(),
                multiplier: 1.3,
                rationale: "Heating load peaks in cold months".to_string(),
            },
        ]
    } else {
        vec![]
    }
}
