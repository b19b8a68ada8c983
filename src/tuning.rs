//! Data-driven game balance
//!
//! Every number the progression engine uses lives here so the scene can ship
//! a JSON override without rebuilding. Missing fields fall back to defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::PlantType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Growth ===
    /// Growth gained per watering
    pub growth_per_watering: f32,

    // === Planting ===
    /// Minimum distance between two plants
    pub min_plant_spacing: f32,
    pub planting_min_y: f32,
    pub planting_max_y: f32,

    // === Harvest ===
    pub harvest_yield_min: u32,
    pub harvest_yield_max: u32,

    // === Session start ===
    pub starting_inventory: BTreeMap<PlantType, u32>,

    // === Achievement goals ===
    pub mastery_goal: u32,
    pub seed_collector_goal: u32,
    pub efficient_gardener_goal: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        let mut starting_inventory = BTreeMap::new();
        starting_inventory.insert(PlantType::LuminaBloom, STARTING_LUMINA_SEEDS);

        Self {
            growth_per_watering: GROWTH_PER_WATERING,

            min_plant_spacing: MIN_PLANT_SPACING,
            planting_min_y: PLANTING_MIN_Y,
            planting_max_y: PLANTING_MAX_Y,

            harvest_yield_min: HARVEST_YIELD_MIN,
            harvest_yield_max: HARVEST_YIELD_MAX,

            starting_inventory,

            mastery_goal: MASTERY_GOAL,
            seed_collector_goal: SEED_COLLECTOR_GOAL,
            efficient_gardener_goal: EFFICIENT_GARDENER_GOAL,
        }
    }
}

impl Tuning {
    /// Parse an override; falls back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Clamp values that would break the engine's invariants
    pub fn sanitized(mut self) -> Self {
        if self.growth_per_watering.is_nan() || self.growth_per_watering <= 0.0 {
            self.growth_per_watering = GROWTH_PER_WATERING;
        }
        self.growth_per_watering = self.growth_per_watering.min(FULLY_GROWN);
        self.min_plant_spacing = self.min_plant_spacing.max(0.0);
        if self.planting_max_y < self.planting_min_y {
            std::mem::swap(&mut self.planting_min_y, &mut self.planting_max_y);
        }
        if self.harvest_yield_max < self.harvest_yield_min {
            self.harvest_yield_max = self.harvest_yield_min;
        }
        self.mastery_goal = self.mastery_goal.max(1);
        self.seed_collector_goal = self.seed_collector_goal.max(1);
        self.efficient_gardener_goal = self.efficient_gardener_goal.max(1);
        self
    }

    /// Waterings needed to take a seed to full bloom
    pub fn waterings_to_bloom(&self) -> u32 {
        (FULLY_GROWN / self.growth_per_watering).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.waterings_to_bloom(), 5);
        assert_eq!(tuning.starting_inventory.get(&PlantType::LuminaBloom), Some(&5));
        assert_eq!(tuning.mastery_goal, 10);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "growth_per_watering": 0.5, "mastery_goal": 2 }"#);
        assert_eq!(tuning.growth_per_watering, 0.5);
        assert_eq!(tuning.mastery_goal, 2);
        assert_eq!(tuning.seed_collector_goal, SEED_COLLECTOR_GOAL);
        assert_eq!(tuning.waterings_to_bloom(), 2);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(Tuning::from_json("{ not json"), Tuning::default());
    }

    #[test]
    fn test_sanitize_repairs_inverted_ranges() {
        let tuning = Tuning {
            growth_per_watering: -1.0,
            planting_min_y: 10.0,
            planting_max_y: 0.0,
            harvest_yield_min: 4,
            harvest_yield_max: 1,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.growth_per_watering, GROWTH_PER_WATERING);
        assert_eq!((tuning.planting_min_y, tuning.planting_max_y), (0.0, 10.0));
        assert_eq!(tuning.harvest_yield_max, 4);
    }

    #[test]
    fn test_starting_inventory_uses_scene_names() {
        let tuning = Tuning::from_json(r#"{ "starting_inventory": { "DeFiDandelion": 3 } }"#);
        assert_eq!(tuning.starting_inventory.get(&PlantType::DefiDandelion), Some(&3));
    }
}
