//! Property tests over arbitrary action sequences

use glam::Vec3;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::achievement::prophecy_pieces;
use super::*;

#[derive(Debug, Clone)]
enum Action {
    Select(usize),
    Plant(f32, f32, f32),
    Water(usize),
    Harvest(usize),
    Purchase(usize),
    Claim,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..PlantType::ALL.len()).prop_map(Action::Select),
        (-6.0f32..6.0, -2.0f32..12.0, -6.0f32..6.0).prop_map(|(x, y, z)| Action::Plant(x, y, z)),
        (0usize..8).prop_map(Action::Water),
        (0usize..8).prop_map(Action::Harvest),
        (0..PlantType::ALL.len()).prop_map(Action::Purchase),
        Just(Action::Claim),
    ]
}

fn nth_plant(state: &GardenState, n: usize) -> Option<PlantId> {
    if state.plants.is_empty() {
        return None;
    }
    state.plants.keys().nth(n % state.plants.len()).cloned()
}

fn apply(state: &mut GardenState, rng: &mut Pcg32, action: &Action) {
    match *action {
        Action::Select(i) => select_plant_type(state, Some(PlantType::ALL[i])),
        Action::Plant(x, y, z) => {
            plant_at(state, Vec3::new(x, y, z), 0.0, rng);
        }
        Action::Water(n) => {
            if let Some(id) = nth_plant(state, n) {
                water(state, &id, 0.0);
            }
        }
        Action::Harvest(n) => {
            if let Some(id) = nth_plant(state, n) {
                harvest(state, &id, rng);
            }
        }
        Action::Purchase(i) => {
            purchase(state, PlantType::ALL[i]);
        }
        Action::Claim => {
            claim_superseed(state);
        }
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold_across_actions(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..120),
    ) {
        let mut state = GardenState::new(crate::Tuning {
            mastery_goal: 1,
            ..Default::default()
        });
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut pieces_seen = 0;

        for action in &actions {
            apply(&mut state, &mut rng, action);

            let progress = &state.game_progress.superseed_progress;
            prop_assert!(progress.prophecy_pieces_found >= pieces_seen);
            prop_assert_eq!(
                progress.prophecy_pieces_found as usize,
                prophecy_pieces(&state.game_progress.achievements).len()
            );
            pieces_seen = progress.prophecy_pieces_found;

            for plant in state.plants.values() {
                prop_assert!((0.0..=1.0).contains(&plant.growth_stage));
            }
            for a in &state.game_progress.achievements {
                prop_assert!(!a.completed || a.progress >= a.max_progress);
            }
            prop_assert!(progress.completed_rituals.len() <= 1);
        }
    }

    #[test]
    fn prop_no_two_plants_closer_than_spacing(
        points in prop::collection::vec((-4.0f32..4.0, 0.0f32..10.0, -4.0f32..4.0), 1..40),
    ) {
        let mut state = GardenState::new(crate::Tuning {
            starting_inventory: [(PlantType::LuminaBloom, 100)].into_iter().collect(),
            ..Default::default()
        });
        let mut rng = Pcg32::seed_from_u64(5);
        select_plant_type(&mut state, Some(PlantType::LuminaBloom));
        for (x, y, z) in points {
            plant_at(&mut state, Vec3::new(x, y, z), 0.0, &mut rng);
        }
        let plants: Vec<_> = state.plants.values().collect();
        for (i, a) in plants.iter().enumerate() {
            for b in &plants[i + 1..] {
                prop_assert!(a.position.distance(b.position) >= 1.0);
            }
        }
        prop_assert_eq!(
            state.inventory.count(PlantType::LuminaBloom) as usize + plants.len(),
            100
        );
    }

    #[test]
    fn prop_watering_never_overshoots(waterings in 0usize..20) {
        let mut state = GardenState::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let id = add_plant(&mut state, Vec3::ZERO, PlantType::LuminaBloom, 0.0, &mut rng);
        for _ in 0..waterings {
            water(&mut state, &id, 0.0);
        }
        let stage = state.plants[&id].growth_stage;
        prop_assert!(stage <= 1.0);
        prop_assert_eq!(stage >= 1.0, waterings >= 5);
    }
}
