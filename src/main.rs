//! Superseed Garden entry point
//!
//! On the web the library's `start` hook does the setup and the scene drives
//! a `Garden` handle. Natively this runs a headless auto-gardener that plays
//! the Lumina loop and logs every event, which is handy for balance checks.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use superseed_garden::platform;

    platform::init_logging();
    log::info!("Superseed Garden (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let summary = auto_garden(seed, 200);
    println!("{summary}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's `start`, this is just to satisfy the compiler
}

/// Plots the idle gardener cycles through
#[cfg(not(target_arch = "wasm32"))]
const PLOTS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [2.0, 0.0, 0.0],
    [0.0, 0.0, 2.0],
    [2.0, 0.0, 2.0],
];

/// Play `rounds` plant/water/harvest rounds and describe the outcome
#[cfg(not(target_arch = "wasm32"))]
fn auto_garden(seed: u64, rounds: u32) -> String {
    use glam::Vec3;
    use superseed_garden::sim::PlantType;
    use superseed_garden::{Session, Tuning, platform};

    let mut session = Session::new(seed, Tuning::default());
    let waterings = session.state().tuning.waterings_to_bloom();

    for round in 0..rounds {
        session.select_plant_type(Some(PlantType::LuminaBloom));
        let planted: Vec<_> = PLOTS
            .iter()
            .filter_map(|&xyz| session.plant_at(Vec3::from_array(xyz), platform::now_ms()))
            .collect();
        if planted.is_empty() {
            log::warn!("Round {round}: out of seeds, stopping");
            break;
        }
        for id in &planted {
            for _ in 0..waterings {
                session.water(id, platform::now_ms());
            }
        }
        for id in &planted {
            session.harvest(id);
        }
        for event in session.drain_events() {
            log::debug!("Round {round}: {event:?}");
        }
        if session.can_purchase(PlantType::EthereumEssence) {
            session.purchase(PlantType::EthereumEssence);
        }
    }

    let state = session.state();
    let progress = &state.game_progress;
    let completed: Vec<&str> = progress
        .achievements
        .iter()
        .filter(|a| a.completed)
        .map(|a| a.name.as_str())
        .collect();
    format!(
        "seed {}: Lumina {} / Ethereum {} | prophecy {}/{} | achievements: {}",
        session.seed(),
        state.inventory.count(PlantType::LuminaBloom),
        state.inventory.count(PlantType::EthereumEssence),
        progress.superseed_progress.prophecy_pieces_found,
        progress.superseed_progress.total_pieces,
        completed.join(", ")
    )
}
