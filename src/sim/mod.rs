//! Progression engine
//!
//! All gameplay state transitions live here. This module must stay pure:
//! - Randomness only through an injected `Rng`
//! - Timestamps passed in by the caller
//! - Stable iteration order (plants keyed by id)
//! - No rendering, audio or platform dependencies

pub mod achievement;
pub mod actions;
pub mod event;
pub mod plant;
pub mod prophecy;
pub mod reject;
pub mod shop;
pub mod state;

#[cfg(test)]
mod proptests;

pub use achievement::{Achievement, AchievementBatch};
pub use actions::{
    add_plant, can_plant_at, harvest, plant_at, select_plant_type, try_harvest, try_plant_at,
    try_water, water,
};
pub use event::{GardenEvent, VictoryInfo, VictoryLink};
pub use plant::{Inventory, Plant, PlantId, PlantMastery, PlantType};
pub use prophecy::{can_claim_superseed, claim_superseed, try_claim_superseed};
pub use reject::Rejection;
pub use shop::{SHOP_CATALOG, ShopListing, can_purchase, purchase, try_purchase};
pub use state::{GameProgress, GardenState, SuperseedProgress};
