//! Prophecy pieces and the Superseed claim

use super::achievement;
use super::event::GardenEvent;
use super::plant::PlantType;
use super::reject::{Rejection, quietly};
use super::state::GardenState;
use crate::consts::SUPERSEED_RITUAL;

/// Sync `prophecy_pieces_found` with the completed achievements.
///
/// The count is the number of distinct pieces held by completed achievements.
/// Completion is monotonic, so the count only grows; a smaller recomputed value
/// is ignored rather than applied.
pub(crate) fn propagate(state: &mut GardenState) {
    let found = achievement::prophecy_pieces(&state.game_progress.achievements).len() as u32;
    let progress = &mut state.game_progress.superseed_progress;
    if found <= progress.prophecy_pieces_found {
        return;
    }

    let message = format!("Prophecy Piece {found} Unlocked!");
    progress.prophecy_pieces_found = found;
    progress.unlocked_combinations.push(message.clone());
    let complete = progress.all_pieces_found();

    log::info!("{message} ({found}/{})", progress.total_pieces);
    state.emit(GardenEvent::ProphecyPieceUnlocked {
        pieces_found: found,
        message,
    });
    if complete {
        log::info!("All prophecy pieces found, the Superseed can now be claimed");
        state.emit(GardenEvent::AllProphecyPiecesFound);
    }
}

pub fn check_claim(state: &GardenState) -> Result<(), Rejection> {
    let progress = &state.game_progress.superseed_progress;
    if progress.has_ritual(SUPERSEED_RITUAL) {
        return Err(Rejection::AlreadyClaimed);
    }
    if !progress.all_pieces_found() {
        return Err(Rejection::PiecesMissing {
            found: progress.prophecy_pieces_found,
            total: progress.total_pieces,
        });
    }
    Ok(())
}

pub fn can_claim_superseed(state: &GardenState) -> bool {
    check_claim(state).is_ok()
}

/// Grant the Superseed; succeeds at most once per session
pub fn try_claim_superseed(state: &mut GardenState) -> Result<(), Rejection> {
    check_claim(state)?;
    state.inventory.add(PlantType::SuperSeed, 1);
    state
        .game_progress
        .superseed_progress
        .completed_rituals
        .push(SUPERSEED_RITUAL.to_owned());
    log::info!("Superseed claimed");
    state.emit(GardenEvent::SuperseedClaimed);
    Ok(())
}

pub fn claim_superseed(state: &mut GardenState) -> bool {
    quietly("claim", try_claim_superseed(state)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::achievement::{
        AchievementBatch, MASTER_DEFI, MASTER_ETHEREUM, MASTER_LUMINA, MASTER_OPSTACK,
        SEED_COLLECTOR,
    };

    fn complete(state: &mut GardenState, id: &'static str) {
        AchievementBatch::new()
            .set(id, 10)
            .apply(&mut state.game_progress.achievements);
        propagate(state);
    }

    #[test]
    fn test_pieces_count_distinct_completed_achievements() {
        let mut state = GardenState::default();
        complete(&mut state, MASTER_LUMINA);
        complete(&mut state, MASTER_LUMINA);
        let progress = &state.game_progress.superseed_progress;
        assert_eq!(progress.prophecy_pieces_found, 1);
        assert_eq!(progress.unlocked_combinations, vec!["Prophecy Piece 1 Unlocked!".to_string()]);
    }

    #[test]
    fn test_achievements_without_pieces_do_not_count() {
        let mut state = GardenState::default();
        AchievementBatch::new()
            .set(SEED_COLLECTOR, 50)
            .apply(&mut state.game_progress.achievements);
        propagate(&mut state);
        assert_eq!(state.game_progress.superseed_progress.prophecy_pieces_found, 0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_claim_needs_all_pieces() {
        let mut state = GardenState::default();
        complete(&mut state, MASTER_LUMINA);
        complete(&mut state, MASTER_ETHEREUM);
        complete(&mut state, MASTER_OPSTACK);
        assert_eq!(
            check_claim(&state),
            Err(Rejection::PiecesMissing { found: 3, total: 4 })
        );

        complete(&mut state, MASTER_DEFI);
        assert!(state.drain_events().contains(&GardenEvent::AllProphecyPiecesFound));
        assert!(can_claim_superseed(&state));
    }

    #[test]
    fn test_claim_succeeds_exactly_once() {
        let mut state = GardenState::default();
        for id in [MASTER_LUMINA, MASTER_ETHEREUM, MASTER_OPSTACK, MASTER_DEFI] {
            complete(&mut state, id);
        }
        assert!(claim_superseed(&mut state));
        assert_eq!(state.inventory.count(PlantType::SuperSeed), 1);

        let before = state.clone();
        assert_eq!(try_claim_superseed(&mut state), Err(Rejection::AlreadyClaimed));
        assert!(!claim_superseed(&mut state));
        assert_eq!(state, before);
    }
}
