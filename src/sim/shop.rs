//! Seed shop: catalog, unlock gating and purchases

use serde::Serialize;

use super::achievement::{self, MASTER_ETHEREUM, MASTER_OPSTACK};
use super::actions::settle;
use super::event::GardenEvent;
use super::plant::PlantType;
use super::reject::{Rejection, quietly};
use super::state::GardenState;

/// What it takes for a listing to show up in the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnlockRule {
    /// Hold at least this many starter seeds
    StarterSeeds { required: u32 },
    /// Complete a mastery achievement
    Mastery { achievement: &'static str },
}

/// Price of one seed, paid in another seed type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedCost {
    #[serde(rename = "type")]
    pub kind: PlantType,
    pub amount: u32,
}

/// A purchasable seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShopListing {
    pub plant: PlantType,
    pub cost: SeedCost,
    pub unlock: UnlockRule,
    pub description: &'static str,
    pub unlock_requirement: &'static str,
}

pub const SHOP_CATALOG: &[ShopListing] = &[
    ShopListing {
        plant: PlantType::EthereumEssence,
        cost: SeedCost {
            kind: PlantType::LuminaBloom,
            amount: 25,
        },
        unlock: UnlockRule::StarterSeeds { required: 15 },
        description: "A mystical plant with geometric patterns",
        unlock_requirement: "Have 15 Lumina Bloom seeds",
    },
    ShopListing {
        plant: PlantType::OpStackOrchid,
        cost: SeedCost {
            kind: PlantType::EthereumEssence,
            amount: 20,
        },
        unlock: UnlockRule::Mastery {
            achievement: MASTER_ETHEREUM,
        },
        description: "A powerful flower with floating segments",
        unlock_requirement: "Master Ethereum Essence cultivation",
    },
    ShopListing {
        plant: PlantType::DefiDandelion,
        cost: SeedCost {
            kind: PlantType::OpStackOrchid,
            amount: 15,
        },
        unlock: UnlockRule::Mastery {
            achievement: MASTER_OPSTACK,
        },
        description: "Releases magical glowing spores",
        unlock_requirement: "Master OP Stack Orchid cultivation",
    },
];

/// Listing for a type; the starter seed and the Superseed have none
pub fn listing(kind: PlantType) -> Option<&'static ShopListing> {
    SHOP_CATALOG.iter().find(|l| l.plant == kind)
}

fn rule_holds(state: &GardenState, rule: UnlockRule) -> bool {
    match rule {
        UnlockRule::StarterSeeds { required } => {
            state.inventory.count(PlantType::LuminaBloom) >= required
        }
        UnlockRule::Mastery { achievement } => {
            achievement::is_completed(&state.game_progress.achievements, achievement)
        }
    }
}

pub fn is_unlocked(state: &GardenState, kind: PlantType) -> bool {
    listing(kind).is_some_and(|l| rule_holds(state, l.unlock))
}

/// Seed types the shop currently offers, starter first
pub fn unlocked_seeds(state: &GardenState) -> Vec<PlantType> {
    std::iter::once(PlantType::LuminaBloom)
        .chain(
            SHOP_CATALOG
                .iter()
                .filter(|l| rule_holds(state, l.unlock))
                .map(|l| l.plant),
        )
        .collect()
}

/// Recompute `unlocked_seeds`, announcing newly offered types
pub(crate) fn refresh_unlocked_seeds(state: &mut GardenState) {
    let next = unlocked_seeds(state);
    if next == state.game_progress.unlocked_seeds {
        return;
    }
    let fresh: Vec<PlantType> = next
        .iter()
        .copied()
        .filter(|kind| !state.game_progress.unlocked_seeds.contains(kind))
        .collect();
    state.game_progress.unlocked_seeds = next;
    for plant in fresh {
        log::info!("{plant} seeds now available in the shop");
        state.emit(GardenEvent::SeedUnlocked { plant });
    }
}

/// Check a purchase without performing it
pub fn check_purchase(
    state: &GardenState,
    kind: PlantType,
) -> Result<&'static ShopListing, Rejection> {
    let listing = listing(kind).ok_or(Rejection::NotPurchasable(kind))?;
    if !rule_holds(state, listing.unlock) {
        return Err(Rejection::Locked(kind));
    }
    let have = state.inventory.count(listing.cost.kind);
    if have < listing.cost.amount {
        return Err(Rejection::CannotAfford {
            cost: listing.cost.kind,
            needed: listing.cost.amount,
            have,
        });
    }
    Ok(listing)
}

pub fn can_purchase(state: &GardenState, kind: PlantType) -> bool {
    check_purchase(state, kind).is_ok()
}

/// Buy one seed of `kind`, paying in its cost type
pub fn try_purchase(state: &mut GardenState, kind: PlantType) -> Result<(), Rejection> {
    let listing = check_purchase(state, kind)?;
    if !state.inventory.remove(listing.cost.kind, listing.cost.amount) {
        return Err(Rejection::CannotAfford {
            cost: listing.cost.kind,
            needed: listing.cost.amount,
            have: state.inventory.count(listing.cost.kind),
        });
    }
    state.inventory.add(kind, 1);
    state.emit(GardenEvent::SeedPurchased { plant: kind });

    settle(state);
    Ok(())
}

pub fn purchase(state: &mut GardenState, kind: PlantType) -> bool {
    quietly("purchase", try_purchase(state, kind)).is_some()
}
