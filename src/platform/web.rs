//! JS-facing garden handle
//!
//! The scene holds one `Garden`, calls its action methods from pointer and
//! keyboard handlers, then re-renders from `snapshot()` and reacts to
//! `drain_events()` (sounds, particles, modals).

use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::Session;
use crate::sim::{PlantId, PlantType, SHOP_CATALOG};
use crate::tuning::Tuning;

use super::now_ms;

#[wasm_bindgen(start)]
pub fn start() {
    super::init_logging();
    log::info!("Superseed Garden starting...");
}

#[wasm_bindgen]
pub struct Garden {
    session: Session,
}

#[wasm_bindgen]
impl Garden {
    /// New session, optionally with a JSON tuning override
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Garden {
        let tuning = tuning_json
            .as_deref()
            .map(Tuning::from_json)
            .unwrap_or_default();
        let seed = now_ms() as u64;
        Garden {
            session: Session::new(seed, tuning),
        }
    }

    /// Full state as JSON (empty object if serialization fails)
    pub fn snapshot(&self) -> String {
        match self.session.snapshot_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot failed: {e}");
                "{}".to_owned()
            }
        }
    }

    /// Pending events as a JSON array
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> String {
        let events = self.session.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Shop listings as JSON
    #[wasm_bindgen(js_name = shopCatalog)]
    pub fn shop_catalog(&self) -> String {
        serde_json::to_string(SHOP_CATALOG).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Arm a seed type by name; unknown names or `undefined` clear the selection
    #[wasm_bindgen(js_name = selectPlantType)]
    pub fn select_plant_type(&mut self, kind: Option<String>) {
        let kind = kind.as_deref().and_then(PlantType::from_str);
        self.session.select_plant_type(kind);
    }

    /// Plant the selected seed; returns the new plant id
    #[wasm_bindgen(js_name = plantAt)]
    pub fn plant_at(&mut self, x: f32, y: f32, z: f32) -> Option<String> {
        self.session
            .plant_at(Vec3::new(x, y, z), now_ms())
            .map(|id| id.to_string())
    }

    pub fn water(&mut self, id: &str) -> bool {
        self.session.water(&PlantId::from(id), now_ms())
    }

    /// Harvest a grown plant; returns seeds gained
    pub fn harvest(&mut self, id: &str) -> Option<u32> {
        self.session.harvest(&PlantId::from(id))
    }

    #[wasm_bindgen(js_name = canPurchase)]
    pub fn can_purchase(&self, kind: &str) -> bool {
        PlantType::from_str(kind).is_some_and(|k| self.session.can_purchase(k))
    }

    pub fn purchase(&mut self, kind: &str) -> bool {
        match PlantType::from_str(kind) {
            Some(k) => self.session.purchase(k),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = canClaimSuperseed)]
    pub fn can_claim_superseed(&self) -> bool {
        self.session.can_claim_superseed()
    }

    #[wasm_bindgen(js_name = claimSuperseed)]
    pub fn claim_superseed(&mut self) -> bool {
        self.session.claim_superseed()
    }
}
