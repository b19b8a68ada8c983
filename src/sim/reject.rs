//! Reasons an action was turned down
//!
//! Player actions never fail loudly: the public reducers log the reason at
//! debug level and leave the state untouched. The `try_*` variants hand the
//! reason back for callers (and tests) that want it.

use thiserror::Error;

use super::plant::{PlantId, PlantType};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("no plant type selected")]
    NoSelection,
    #[error("no {0} seeds left")]
    OutOfStock(PlantType),
    #[error("height {y} is outside the planting band")]
    OutOfBounds { y: f32 },
    #[error("too close to plant {0}")]
    TooClose(PlantId),
    #[error("unknown plant {0}")]
    UnknownPlant(PlantId),
    #[error("plant {id} is only {growth_stage} grown")]
    NotFullyGrown { id: PlantId, growth_stage: f32 },
    #[error("{0} is not sold in the shop")]
    NotPurchasable(PlantType),
    #[error("{0} is still locked")]
    Locked(PlantType),
    #[error("need {needed} {cost} seeds, have {have}")]
    CannotAfford { cost: PlantType, needed: u32, have: u32 },
    #[error("only {found} of {total} prophecy pieces found")]
    PiecesMissing { found: u32, total: u32 },
    #[error("the Superseed has already been claimed")]
    AlreadyClaimed,
}

/// Collapse a rejection into the silent no-op result, logging why
pub(crate) fn quietly<T>(action: &str, result: Result<T, Rejection>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(reason) => {
            log::debug!("{action} ignored: {reason}");
            None
        }
    }
}
