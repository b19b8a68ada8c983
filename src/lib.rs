//! Superseed Garden - a floating-island seed cultivation game
//!
//! Core modules:
//! - `sim`: Deterministic progression engine (plants, inventory, achievements, shop)
//! - `session`: Owner of the single mutable game state plus its RNG
//! - `platform`: Browser bindings that expose snapshots and actions to the scene
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use sim::{GardenEvent, GardenState, PlantId, PlantType};
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Growth gained per watering (five waterings from seed to bloom)
    pub const GROWTH_PER_WATERING: f32 = 0.2;
    /// Growth stage at which a plant counts as fully grown
    pub const FULLY_GROWN: f32 = 1.0;

    /// Plants may not be placed closer than this to each other
    pub const MIN_PLANT_SPACING: f32 = 1.0;
    /// Vertical planting band on the island
    pub const PLANTING_MIN_Y: f32 = 0.0;
    pub const PLANTING_MAX_Y: f32 = 10.0;

    /// Seeds returned by a harvest (inclusive range)
    pub const HARVEST_YIELD_MIN: u32 = 2;
    pub const HARVEST_YIELD_MAX: u32 = 3;

    /// Lumina Bloom seeds handed out at session start
    pub const STARTING_LUMINA_SEEDS: u32 = 5;

    /// Perfect growths needed to master a plant type
    pub const MASTERY_GOAL: u32 = 10;
    /// Total seeds needed for the Seed Collector achievement
    pub const SEED_COLLECTOR_GOAL: u32 = 50;
    /// Simultaneously fully grown plants needed for Efficient Gardener
    pub const EFFICIENT_GARDENER_GOAL: u32 = 3;

    /// Prophecy pieces required before the Superseed can be claimed
    pub const TOTAL_PROPHECY_PIECES: u32 = 4;
    /// Ritual marker recorded when the Superseed is claimed
    pub const SUPERSEED_RITUAL: &str = "claimed_superseed";
}

/// True if `a` lies strictly closer than `radius` to `b`
#[inline]
pub fn within_radius(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

