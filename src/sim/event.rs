//! Events emitted by state transitions
//!
//! The scene drains these after each action to play sounds, spawn particles
//! and open modals. Rejected actions emit nothing.

use serde::{Deserialize, Serialize};

use super::plant::{PlantId, PlantType};

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GardenEvent {
    Planted { id: PlantId, plant: PlantType },
    Watered { id: PlantId, growth_stage: f32 },
    /// Plant crossed into full growth (fires once per plant)
    FullyGrown { id: PlantId, plant: PlantType },
    Harvested { id: PlantId, plant: PlantType, seeds: u32 },
    AchievementCompleted { id: String },
    ProphecyPieceUnlocked { pieces_found: u32, message: String },
    AllProphecyPiecesFound,
    SeedUnlocked { plant: PlantType },
    SeedPurchased { plant: PlantType },
    SuperseedClaimed,
    /// A Superseed reached full bloom
    Victory(VictoryInfo),
}

/// Outbound link shown on the victory screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryLink {
    pub text: String,
    pub url: String,
    pub description: String,
}

/// Payload for the victory modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryInfo {
    pub title: String,
    pub message: String,
    pub links: Vec<VictoryLink>,
}

impl VictoryInfo {
    /// Victory shown when the Sacred SuperSeed blooms
    pub fn superseed_bloom() -> Self {
        Self {
            title: "Sacred SuperSeed Achieved!".to_owned(),
            message: "The Sacred SuperSeed has bloomed on your island. Every prophecy \
                      piece has been gathered and the garden is complete."
                .to_owned(),
            links: vec![VictoryLink {
                text: "Explore Superseed".to_owned(),
                url: "https://www.superseed.xyz/".to_owned(),
                description: "Learn about self-repaying loans and Proof of Repayment.".to_owned(),
            }],
        }
    }
}
