//! Table lifecycle derived from the aggregate.

use serde::{Deserialize, Serialize};

use crate::actions::SetupStage;
use crate::core::player::{PlayerId, SEATS};
use crate::core::state::GameState;

/// Where a table is between creation and the end of the game.
///
/// Never stored: always computed from seats, setup progress and the
/// started/ended flags, so it cannot drift from the state it describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum Lifecycle {
    /// Waiting for both seats.
    Lobby { seated: usize },
    /// At least one seat has not picked a deck.
    DeckSelecting,
    SelectingHeroAndBattlefield,
    Active,
    Ended,
}

impl Lifecycle {
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if state.ended {
            return Lifecycle::Ended;
        }
        if state.started {
            return Lifecycle::Active;
        }
        let seated = state.seated_count();
        if seated < SEATS {
            return Lifecycle::Lobby { seated };
        }
        if PlayerId::both().any(|p| SetupStage::of(state, p) == SetupStage::ChoosingDeck) {
            Lifecycle::DeckSelecting
        } else {
            Lifecycle::SelectingHeroAndBattlefield
        }
    }

    /// Whether new players may still sit down.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Lifecycle::Lobby { .. })
    }
}
