//! Achievement catalog and batched progress updates
//!
//! Achievements only ever move forward: progress updates are applied as one
//! batch computed from the prior snapshot, and `completed` never flips back.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::plant::PlantType;
use crate::tuning::Tuning;

pub const MASTER_LUMINA: &str = "master_lumina";
pub const MASTER_ETHEREUM: &str = "master_ethereum";
pub const MASTER_OPSTACK: &str = "master_opstack";
pub const MASTER_DEFI: &str = "master_defi";
pub const GROW_FIRST_PLANT: &str = "grow_first_plant";
pub const EFFICIENT_GARDENER: &str = "efficient_gardener";
pub const SEED_COLLECTOR: &str = "seed_collector";

/// What drives an achievement's progress (and therefore its goal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Perfect growths of one plant type
    Mastery,
    FirstHarvest,
    /// Simultaneously fully grown plants
    FullBloomAtOnce,
    /// Seeds collected across all types
    SeedsCollected,
}

/// Static description of a single achievement
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub goal: Goal,
    pub prophecy_piece: Option<u8>,
}

pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: MASTER_LUMINA,
        name: "Lumina Master",
        description: "Master the Lumina Bloom by growing 10 perfect specimens",
        goal: Goal::Mastery,
        prophecy_piece: Some(0),
    },
    AchievementDef {
        id: MASTER_ETHEREUM,
        name: "Ethereum Essence Expert",
        description: "Master the Ethereum Essence by growing 10 perfect specimens",
        goal: Goal::Mastery,
        prophecy_piece: Some(1),
    },
    AchievementDef {
        id: MASTER_OPSTACK,
        name: "OP Stack Oracle",
        description: "Master the OP Stack Orchid by growing 10 perfect specimens",
        goal: Goal::Mastery,
        prophecy_piece: Some(2),
    },
    AchievementDef {
        id: MASTER_DEFI,
        name: "DeFi Sage",
        description: "Master the DeFi Dandelion by growing 10 perfect specimens",
        goal: Goal::Mastery,
        prophecy_piece: Some(3),
    },
    AchievementDef {
        id: GROW_FIRST_PLANT,
        name: "First Steps",
        description: "Grow your first plant to completion",
        goal: Goal::FirstHarvest,
        prophecy_piece: None,
    },
    AchievementDef {
        id: EFFICIENT_GARDENER,
        name: "Efficient Gardener",
        description: "Maintain 3 plants simultaneously at full growth",
        goal: Goal::FullBloomAtOnce,
        prophecy_piece: None,
    },
    AchievementDef {
        id: SEED_COLLECTOR,
        name: "Seed Collector",
        description: "Collect 50 seeds in total",
        goal: Goal::SeedsCollected,
        prophecy_piece: None,
    },
];

/// Mastery achievement for a plant type (the Superseed has none)
pub fn mastery_achievement(kind: PlantType) -> Option<&'static str> {
    match kind {
        PlantType::LuminaBloom => Some(MASTER_LUMINA),
        PlantType::EthereumEssence => Some(MASTER_ETHEREUM),
        PlantType::OpStackOrchid => Some(MASTER_OPSTACK),
        PlantType::DefiDandelion => Some(MASTER_DEFI),
        PlantType::SuperSeed => None,
    }
}

/// Live achievement record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub progress: u32,
    pub max_progress: u32,
    pub completed: bool,
    /// Prophecy piece (0-3) unlocked by completing this achievement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prophecy_piece: Option<u8>,
}

impl Achievement {
    fn from_def(def: &AchievementDef, tuning: &Tuning) -> Self {
        let max_progress = match def.goal {
            Goal::Mastery => tuning.mastery_goal,
            Goal::FirstHarvest => 1,
            Goal::FullBloomAtOnce => tuning.efficient_gardener_goal,
            Goal::SeedsCollected => tuning.seed_collector_goal,
        };
        Self {
            id: def.id.to_owned(),
            name: def.name.to_owned(),
            description: def.description.to_owned(),
            progress: 0,
            max_progress,
            completed: false,
            prophecy_piece: def.prophecy_piece,
        }
    }
}

/// Fresh, zeroed achievement list for a new session
pub fn initial_achievements(tuning: &Tuning) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|def| Achievement::from_def(def, tuning))
        .collect()
}

pub fn is_completed(achievements: &[Achievement], id: &str) -> bool {
    achievements.iter().any(|a| a.id == id && a.completed)
}

/// Distinct prophecy pieces among completed achievements
pub fn prophecy_pieces(achievements: &[Achievement]) -> BTreeSet<u8> {
    achievements
        .iter()
        .filter(|a| a.completed)
        .filter_map(|a| a.prophecy_piece)
        .collect()
}

/// How an update moves an achievement's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Replace progress with the given value
    Set(u32),
    /// Keep the higher of current and given progress
    Raise(u32),
}

/// Progress changes gathered during one action and applied together
#[derive(Debug, Default)]
pub struct AchievementBatch {
    steps: Vec<(&'static str, Step)>,
}

impl AchievementBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, id: &'static str, progress: u32) -> Self {
        self.steps.push((id, Step::Set(progress)));
        self
    }

    pub fn raise(mut self, id: &'static str, progress: u32) -> Self {
        self.steps.push((id, Step::Raise(progress)));
        self
    }

    /// Apply every step; returns ids of achievements completed by this batch
    pub fn apply(self, achievements: &mut [Achievement]) -> Vec<String> {
        let mut newly_completed = Vec::new();
        for achievement in achievements.iter_mut() {
            let mut touched = false;
            for (id, step) in &self.steps {
                if achievement.id != *id {
                    continue;
                }
                touched = true;
                achievement.progress = match *step {
                    Step::Set(value) => value,
                    Step::Raise(value) => achievement.progress.max(value),
                };
            }
            if touched && !achievement.completed && achievement.progress >= achievement.max_progress
            {
                achievement.completed = true;
                newly_completed.push(achievement.id.clone());
            }
        }
        newly_completed
    }
}
