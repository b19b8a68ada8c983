//! Player actions: select, plant, water, harvest
//!
//! Each reducer either applies its whole effect or leaves the state exactly as
//! it was. Derived progression (prophecy pieces, shop unlocks) is settled at
//! the end of every successful action.

use glam::Vec3;
use rand::Rng;

use super::achievement::{
    self, AchievementBatch, EFFICIENT_GARDENER, GROW_FIRST_PLANT, SEED_COLLECTOR,
};
use super::event::{GardenEvent, VictoryInfo};
use super::plant::{Plant, PlantId, PlantType};
use super::reject::{Rejection, quietly};
use super::state::GardenState;
use super::{prophecy, shop};
use crate::consts::FULLY_GROWN;
use crate::within_radius;

/// Float drift allowed when landing on full growth
const GROWTH_EPSILON: f32 = 1e-5;

/// Arm (or disarm with `None`) a seed type for planting
pub fn select_plant_type(state: &mut GardenState, kind: Option<PlantType>) {
    state.selected_plant_type = kind;
}

/// Check whether a plant could go at `point`
pub fn can_plant_at(state: &GardenState, point: Vec3) -> Result<(), Rejection> {
    let tuning = &state.tuning;
    if !point.is_finite() || !(tuning.planting_min_y..=tuning.planting_max_y).contains(&point.y) {
        return Err(Rejection::OutOfBounds { y: point.y });
    }
    match state
        .plants
        .values()
        .find(|p| within_radius(p.position, point, tuning.min_plant_spacing))
    {
        Some(neighbor) => Err(Rejection::TooClose(neighbor.id.clone())),
        None => Ok(()),
    }
}

/// Place a plant without spending seeds or checking spacing
pub fn add_plant<R: Rng>(
    state: &mut GardenState,
    point: Vec3,
    kind: PlantType,
    now: f64,
    rng: &mut R,
) -> PlantId {
    let mut id = PlantId::generate(rng);
    while state.plants.contains_key(&id) {
        id = PlantId::generate(rng);
    }
    state
        .plants
        .insert(id.clone(), Plant::new(id.clone(), kind, point, now));
    state.emit(GardenEvent::Planted {
        id: id.clone(),
        plant: kind,
    });
    id
}

/// Plant the selected seed type at `point`
pub fn try_plant_at<R: Rng>(
    state: &mut GardenState,
    point: Vec3,
    now: f64,
    rng: &mut R,
) -> Result<PlantId, Rejection> {
    let kind = state.selected_plant_type.ok_or(Rejection::NoSelection)?;
    if state.inventory.count(kind) == 0 {
        return Err(Rejection::OutOfStock(kind));
    }
    can_plant_at(state, point)?;

    if !state.inventory.remove(kind, 1) {
        return Err(Rejection::OutOfStock(kind));
    }
    let id = add_plant(state, point, kind, now, rng);

    // Leave planting mode once the last seed of this type is in the ground
    if state.inventory.count(kind) == 0 {
        state.selected_plant_type = None;
    }

    settle(state);
    Ok(id)
}

pub fn plant_at<R: Rng>(
    state: &mut GardenState,
    point: Vec3,
    now: f64,
    rng: &mut R,
) -> Option<PlantId> {
    quietly("plant", try_plant_at(state, point, now, rng))
}

/// Water a plant; returns true if this watering brought it to full growth
pub fn try_water(state: &mut GardenState, id: &PlantId, now: f64) -> Result<bool, Rejection> {
    let step = state.tuning.growth_per_watering;
    let plant = state
        .plants
        .get_mut(id)
        .ok_or_else(|| Rejection::UnknownPlant(id.clone()))?;

    let before = plant.growth_stage;
    let mut after = (before + step).min(FULLY_GROWN);
    if after >= FULLY_GROWN - GROWTH_EPSILON {
        after = FULLY_GROWN;
    }
    plant.growth_stage = after;
    plant.last_watered = now;
    let kind = plant.kind;

    // Only the crossing counts; watering an already full plant is quiet
    let bloomed = before < FULLY_GROWN && after >= FULLY_GROWN;

    state.game_progress.mastery_mut(kind).times_cared_for += 1;
    state.emit(GardenEvent::Watered {
        id: id.clone(),
        growth_stage: after,
    });

    if bloomed {
        on_fully_grown(state, id, kind);
    }

    settle(state);
    Ok(bloomed)
}

pub fn water(state: &mut GardenState, id: &PlantId, now: f64) -> bool {
    quietly("water", try_water(state, id, now)).is_some()
}

fn on_fully_grown(state: &mut GardenState, id: &PlantId, kind: PlantType) {
    state.emit(GardenEvent::FullyGrown {
        id: id.clone(),
        plant: kind,
    });

    let in_bloom = state.fully_grown_count();
    let completed = AchievementBatch::new()
        .raise(EFFICIENT_GARDENER, in_bloom)
        .apply(&mut state.game_progress.achievements);
    announce(state, completed);

    if kind == PlantType::SuperSeed {
        log::info!("Sacred SuperSeed {id} has bloomed");
        state.emit(GardenEvent::Victory(VictoryInfo::superseed_bloom()));
    }
}

/// Harvest a fully grown plant; returns the seeds gained
pub fn try_harvest<R: Rng>(
    state: &mut GardenState,
    id: &PlantId,
    rng: &mut R,
) -> Result<u32, Rejection> {
    let plant = state
        .plants
        .get(id)
        .ok_or_else(|| Rejection::UnknownPlant(id.clone()))?;
    if !plant.is_fully_grown() {
        return Err(Rejection::NotFullyGrown {
            id: id.clone(),
            growth_stage: plant.growth_stage,
        });
    }
    let kind = plant.kind;

    let seeds = rng.random_range(state.tuning.harvest_yield_min..=state.tuning.harvest_yield_max);

    // Every achievement target below is derived from the pre-harvest snapshot
    let prior = state.game_progress.mastery(kind);
    let perfect_growths = prior.perfect_growths + 1;
    let total_seeds = state.game_progress.total_seeds_collected().saturating_add(seeds);

    let mut batch = AchievementBatch::new()
        .set(GROW_FIRST_PLANT, 1)
        .set(SEED_COLLECTOR, total_seeds);
    if let Some(mastery_id) = achievement::mastery_achievement(kind) {
        batch = batch.set(mastery_id, perfect_growths);
    }

    state.plants.remove(id);
    state.inventory.add(kind, seeds);
    {
        let mastery = state.game_progress.mastery_mut(kind);
        mastery.plants_grown += 1;
        mastery.perfect_growths = perfect_growths;
        mastery.seeds_collected = mastery.seeds_collected.saturating_add(seeds);
    }
    let completed = batch.apply(&mut state.game_progress.achievements);

    log::debug!("Harvested {} for {seeds} seeds", kind.display_name());
    state.emit(GardenEvent::Harvested {
        id: id.clone(),
        plant: kind,
        seeds,
    });
    announce(state, completed);

    settle(state);
    Ok(seeds)
}

pub fn harvest<R: Rng>(state: &mut GardenState, id: &PlantId, rng: &mut R) -> Option<u32> {
    quietly("harvest", try_harvest(state, id, rng))
}

fn announce(state: &mut GardenState, completed: Vec<String>) {
    for id in completed {
        log::info!("Achievement completed: {id}");
        state.emit(GardenEvent::AchievementCompleted { id });
    }
}

/// Recompute everything derived from achievements and inventory
pub(crate) fn settle(state: &mut GardenState) {
    prophecy::propagate(state);
    shop::refresh_unlocked_seeds(state);
}
