//! Plants, seed inventory and per-type mastery counters

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::FULLY_GROWN;

/// Plant varieties, in unlock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlantType {
    /// Free starter plant
    LuminaBloom,
    EthereumEssence,
    #[serde(rename = "OPStackOrchid")]
    OpStackOrchid,
    #[serde(rename = "DeFiDandelion")]
    DefiDandelion,
    /// Capstone plant, only obtainable by claiming it
    SuperSeed,
}

impl PlantType {
    pub const ALL: [PlantType; 5] = [
        PlantType::LuminaBloom,
        PlantType::EthereumEssence,
        PlantType::OpStackOrchid,
        PlantType::DefiDandelion,
        PlantType::SuperSeed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::LuminaBloom => "LuminaBloom",
            PlantType::EthereumEssence => "EthereumEssence",
            PlantType::OpStackOrchid => "OPStackOrchid",
            PlantType::DefiDandelion => "DeFiDandelion",
            PlantType::SuperSeed => "SuperSeed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "luminabloom" | "lumina" => Some(PlantType::LuminaBloom),
            "ethereumessence" | "ethereum" => Some(PlantType::EthereumEssence),
            "opstackorchid" | "opstack" => Some(PlantType::OpStackOrchid),
            "defidandelion" | "defi" => Some(PlantType::DefiDandelion),
            "superseed" => Some(PlantType::SuperSeed),
            _ => None,
        }
    }

    /// Display name shown on plant labels
    pub fn display_name(&self) -> &'static str {
        match self {
            PlantType::LuminaBloom => "Lumina Bloom",
            PlantType::EthereumEssence => "Ethereum Essence",
            PlantType::OpStackOrchid => "OP Stack Orchid",
            PlantType::DefiDandelion => "DeFi Dandelion",
            PlantType::SuperSeed => "Sacred SuperSeed",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque plant identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(String);

/// Length of generated ids
const ID_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl PlantId {
    /// Draw a random base-36 id
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let id = (0..ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlantId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A planted seed on the island
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    #[serde(rename = "type")]
    pub kind: PlantType,
    pub position: Vec3,
    /// Maturity in [0, 1]; 1 means harvestable
    pub growth_stage: f32,
    /// Timestamp (ms) of planting or last watering
    pub last_watered: f64,
}

impl Plant {
    pub fn new(id: PlantId, kind: PlantType, position: Vec3, now: f64) -> Self {
        Self {
            id,
            kind,
            position,
            growth_stage: 0.0,
            last_watered: now,
        }
    }

    pub fn is_fully_grown(&self) -> bool {
        self.growth_stage >= FULLY_GROWN
    }
}

/// Unplanted seed counts per type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    counts: BTreeMap<PlantType, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            counts: PlantType::ALL.iter().map(|&kind| (kind, 0)).collect(),
        }
    }
}

impl Inventory {
    /// Inventory with every type present, seeded from `starting`
    pub fn with_counts(starting: &BTreeMap<PlantType, u32>) -> Self {
        let mut inventory = Self::default();
        for (&kind, &count) in starting {
            inventory.counts.insert(kind, count);
        }
        inventory
    }

    pub fn count(&self, kind: PlantType) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn add(&mut self, kind: PlantType, amount: u32) {
        let slot = self.counts.entry(kind).or_insert(0);
        *slot = slot.saturating_add(amount);
    }

    /// Remove `amount` seeds; returns false (and leaves the count alone) if short
    pub fn remove(&mut self, kind: PlantType, amount: u32) -> bool {
        let slot = self.counts.entry(kind).or_insert(0);
        match slot.checked_sub(amount) {
            Some(left) => {
                *slot = left;
                true
            }
            None => false,
        }
    }
}

/// Cumulative per-type cultivation stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantMastery {
    pub plants_grown: u32,
    pub perfect_growths: u32,
    pub seeds_collected: u32,
    pub times_cared_for: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_plant_type_names_roundtrip() {
        for kind in PlantType::ALL {
            assert_eq!(PlantType::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PlantType::from_str("defi"), Some(PlantType::DefiDandelion));
        assert_eq!(PlantType::from_str("cactus"), None);
    }

    #[test]
    fn test_plant_type_serializes_with_scene_names() {
        let json = serde_json::to_string(&PlantType::OpStackOrchid).unwrap();
        assert_eq!(json, "\"OPStackOrchid\"");
    }

    #[test]
    fn test_generated_ids_are_base36() {
        let mut rng = Pcg32::seed_from_u64(7);
        let id = PlantId::generate(&mut rng);
        assert_eq!(id.as_str().len(), ID_LEN);
        assert!(id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)));
        assert_ne!(id, PlantId::generate(&mut rng));
    }

    #[test]
    fn test_inventory_remove_refuses_overdraw() {
        let mut inventory = Inventory::default();
        inventory.add(PlantType::LuminaBloom, 2);
        assert!(!inventory.remove(PlantType::LuminaBloom, 3));
        assert_eq!(inventory.count(PlantType::LuminaBloom), 2);
        assert!(inventory.remove(PlantType::LuminaBloom, 2));
        assert_eq!(inventory.count(PlantType::LuminaBloom), 0);
    }

    #[test]
    fn test_inventory_serializes_as_map() {
        let mut starting = BTreeMap::new();
        starting.insert(PlantType::LuminaBloom, 5);
        let inventory = Inventory::with_counts(&starting);
        let value = serde_json::to_value(&inventory).unwrap();
        assert_eq!(value["LuminaBloom"], 5);
        assert_eq!(value["SuperSeed"], 0);
    }
}
