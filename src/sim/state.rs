//! Garden state and progression records
//!
//! Everything the scene renders from lives here. Actions mutate it through the
//! reducers in `actions`, `shop` and `prophecy`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::achievement::{self, Achievement};
use super::event::GardenEvent;
use super::plant::{Inventory, Plant, PlantId, PlantMastery, PlantType};
use crate::consts::TOTAL_PROPHECY_PIECES;
use crate::tuning::Tuning;

/// Progress toward the Sacred SuperSeed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperseedProgress {
    /// Distinct prophecy pieces unlocked so far (never decreases)
    pub prophecy_pieces_found: u32,
    pub total_pieces: u32,
    /// Human-readable log of unlock events
    pub unlocked_combinations: Vec<String>,
    /// One-time claim markers
    pub completed_rituals: Vec<String>,
}

impl Default for SuperseedProgress {
    fn default() -> Self {
        Self {
            prophecy_pieces_found: 0,
            total_pieces: TOTAL_PROPHECY_PIECES,
            unlocked_combinations: Vec::new(),
            completed_rituals: Vec::new(),
        }
    }
}

impl SuperseedProgress {
    pub fn has_ritual(&self, marker: &str) -> bool {
        self.completed_rituals.iter().any(|r| r == marker)
    }

    pub fn all_pieces_found(&self) -> bool {
        self.prophecy_pieces_found >= self.total_pieces
    }
}

/// Overall progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProgress {
    pub plant_masteries: BTreeMap<PlantType, PlantMastery>,
    pub achievements: Vec<Achievement>,
    pub superseed_progress: SuperseedProgress,
    /// Seeds currently available in the shop (derived, recomputed after each action)
    pub unlocked_seeds: Vec<PlantType>,
}

impl GameProgress {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            plant_masteries: PlantType::ALL
                .iter()
                .map(|&kind| (kind, PlantMastery::default()))
                .collect(),
            achievements: achievement::initial_achievements(tuning),
            superseed_progress: SuperseedProgress::default(),
            unlocked_seeds: vec![PlantType::LuminaBloom],
        }
    }

    pub fn mastery(&self, kind: PlantType) -> PlantMastery {
        self.plant_masteries.get(&kind).copied().unwrap_or_default()
    }

    pub fn mastery_mut(&mut self, kind: PlantType) -> &mut PlantMastery {
        self.plant_masteries.entry(kind).or_default()
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Seeds collected across every plant type
    pub fn total_seeds_collected(&self) -> u32 {
        self.plant_masteries
            .values()
            .map(|m| m.seeds_collected)
            .fold(0, u32::saturating_add)
    }
}

/// Complete single-player garden state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenState {
    /// Plants on the island (ordered by id for stable iteration)
    pub plants: BTreeMap<PlantId, Plant>,
    pub inventory: Inventory,
    /// Seed type armed for planting
    pub selected_plant_type: Option<PlantType>,
    pub game_progress: GameProgress,
    /// Balance numbers this session runs with
    pub tuning: Tuning,
    /// Pending events for the presentation layer
    #[serde(skip)]
    pub events: Vec<GardenEvent>,
}

impl Default for GardenState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GardenState {
    /// Fresh session: starting seeds, zeroed mastery and achievements
    pub fn new(tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            plants: BTreeMap::new(),
            inventory: Inventory::with_counts(&tuning.starting_inventory),
            selected_plant_type: None,
            game_progress: GameProgress::new(&tuning),
            tuning,
            events: Vec::new(),
        }
    }

    pub fn plant(&self, id: &PlantId) -> Option<&Plant> {
        self.plants.get(id)
    }

    pub fn fully_grown_count(&self) -> u32 {
        self.plants.values().filter(|p| p.is_fully_grown()).count() as u32
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GardenEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GardenEvent) {
        self.events.push(event);
    }

    /// JSON snapshot handed to the scene
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
