//! Game session: the single owner of mutable garden state
//!
//! The scene talks to one `Session`. It pairs the state with the seeded RNG
//! the reducers draw from, so replays with the same seed and inputs match.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::{self, GardenEvent, GardenState, PlantId, PlantType};
use crate::tuning::Tuning;

pub struct Session {
    state: GardenState,
    rng: Pcg32,
    seed: u64,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("Garden session started with seed: {}", seed);
        Self {
            state: GardenState::new(tuning),
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current snapshot for rendering
    pub fn state(&self) -> &GardenState {
        &self.state
    }

    pub fn select_plant_type(&mut self, kind: Option<PlantType>) {
        sim::select_plant_type(&mut self.state, kind);
    }

    pub fn plant_at(&mut self, point: Vec3, now: f64) -> Option<PlantId> {
        sim::plant_at(&mut self.state, point, now, &mut self.rng)
    }

    pub fn water(&mut self, id: &PlantId, now: f64) -> bool {
        sim::water(&mut self.state, id, now)
    }

    pub fn harvest(&mut self, id: &PlantId) -> Option<u32> {
        sim::harvest(&mut self.state, id, &mut self.rng)
    }

    pub fn can_purchase(&self, kind: PlantType) -> bool {
        sim::can_purchase(&self.state, kind)
    }

    pub fn purchase(&mut self, kind: PlantType) -> bool {
        sim::purchase(&mut self.state, kind)
    }

    pub fn can_claim_superseed(&self) -> bool {
        sim::can_claim_superseed(&self.state)
    }

    pub fn claim_superseed(&mut self) -> bool {
        sim::claim_superseed(&mut self.state)
    }

    pub fn drain_events(&mut self) -> Vec<GardenEvent> {
        self.state.drain_events()
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        self.state.snapshot_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plant, water and harvest one Lumina Bloom at `point`
    fn cultivate(session: &mut Session, point: Vec3) -> u32 {
        session.select_plant_type(Some(PlantType::LuminaBloom));
        let id = session.plant_at(point, 0.0).unwrap();
        for _ in 0..5 {
            session.water(&id, 0.0);
        }
        session.harvest(&id).unwrap()
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Session::new(2024, Tuning::default());
        let mut b = Session::new(2024, Tuning::default());
        for i in 0..4 {
            let point = Vec3::new(i as f32 * 2.0, 0.0, 0.0);
            assert_eq!(cultivate(&mut a, point), cultivate(&mut b, point));
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_lumina_loop_opens_the_shop() {
        let mut session = Session::new(7, Tuning::default());
        while session.state().inventory.count(PlantType::LuminaBloom) < 25 {
            cultivate(&mut session, Vec3::ZERO);
        }
        assert!(session.can_purchase(PlantType::EthereumEssence));
        assert!(session.purchase(PlantType::EthereumEssence));
        assert_eq!(session.state().inventory.count(PlantType::EthereumEssence), 1);

        let events = session.drain_events();
        assert!(events.contains(&GardenEvent::SeedUnlocked {
            plant: PlantType::EthereumEssence
        }));
        assert!(events.contains(&GardenEvent::SeedPurchased {
            plant: PlantType::EthereumEssence
        }));
    }

    #[test]
    fn test_full_campaign_claims_superseed_once() {
        let tuning = Tuning {
            mastery_goal: 1,
            ..Default::default()
        };
        let mut session = Session::new(99, tuning);

        for kind in [
            PlantType::LuminaBloom,
            PlantType::EthereumEssence,
            PlantType::OpStackOrchid,
            PlantType::DefiDandelion,
        ] {
            // Top up the cost seeds directly; the shop economy is covered elsewhere
            session.state.inventory.add(kind, 1);
            session.select_plant_type(Some(kind));
            let id = session.plant_at(Vec3::ZERO, 0.0).unwrap();
            for _ in 0..5 {
                session.water(&id, 0.0);
            }
            session.harvest(&id).unwrap();
        }

        let progress = &session.state().game_progress.superseed_progress;
        assert_eq!(progress.prophecy_pieces_found, 4);
        assert_eq!(progress.unlocked_combinations.len(), 4);
        assert!(session.can_claim_superseed());
        assert!(session.claim_superseed());
        assert!(!session.claim_superseed());
        assert_eq!(session.state().inventory.count(PlantType::SuperSeed), 1);
    }

    #[test]
    fn test_inverted_yield_range_is_repaired() {
        let tuning = Tuning {
            harvest_yield_min: 4,
            harvest_yield_max: 1,
            ..Default::default()
        };
        let mut session = Session::new(1, tuning);
        assert_eq!(session.state().tuning.harvest_yield_max, 4);
        assert_eq!(cultivate(&mut session, Vec3::ZERO), 4);
    }
}
