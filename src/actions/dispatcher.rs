//! Action dispatcher: validates a command and applies it atomically.
//!
//! ## Atomicity
//!
//! `apply` runs the command against a draft clone of the table and commits
//! the draft only when every step succeeded. `GameState` clones are O(1)
//! (persistent maps underneath), so a rejected action costs nothing and
//! leaves the table exactly as it was.

use std::sync::Arc;

use tracing::{debug, warn};

use super::command::Command;
use crate::cards::{CardDefinition, CardInstance, CardKind, CardRegistry, DeckLibrary};
use crate::core::config::TableConfig;
use crate::core::entity::InstanceId;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::{Area, Zone};

/// Applies commands to tables that share one catalog and deck library.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    pub(super) config: TableConfig,
    pub(super) catalog: Arc<CardRegistry>,
    pub(super) decks: Arc<DeckLibrary>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: TableConfig, catalog: Arc<CardRegistry>, decks: Arc<DeckLibrary>) -> Self {
        Self {
            config,
            catalog,
            decks,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardRegistry {
        &self.catalog
    }

    #[must_use]
    pub fn decks(&self) -> &DeckLibrary {
        &self.decks
    }

    /// Fresh empty table using this dispatcher's config.
    #[must_use]
    pub fn new_table(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// Apply `command` on behalf of `actor`.
    ///
    /// On error `state` is left untouched.
    pub fn apply(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        command: &Command,
    ) -> Result<(), ActionError> {
        let mut draft = state.clone();
        match self.execute(&mut draft, actor, command) {
            Ok(()) => {
                *state = draft;
                debug!(%actor, action = command.name(), "action applied");
                Ok(())
            }
            Err(error) => {
                warn!(%actor, action = command.name(), %error, "action rejected");
                Err(error)
            }
        }
    }

    fn execute(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        command: &Command,
    ) -> Result<(), ActionError> {
        Self::check_phase(state, actor, command)?;

        use Command as C;
        match command {
            C::DrawCard => self.draw_card(state, actor),
            C::DrawRune => self.draw_rune(state, actor),
            C::PlayCard(p) => self.play_card(state, actor, p),
            C::MoveCard(p) => self.move_card(state, actor, p),
            C::DiscardCard(p) => self.discard_card(state, actor, p),
            C::TapCard(p) => self.set_tapped(state, actor, p, true),
            C::UntapCard(p) => self.set_tapped(state, actor, p, false),
            C::UntapAllCards => self.untap_all(state, actor),
            C::RevealCard(p) => self.reveal_card(state, actor, p),
            C::RecycleRune(p) => self.recycle_rune(state, actor, p),
            C::MoveCardToDeckTop(p) => self.deck_transfer(state, actor, p, false),
            C::MoveCardToDeckBottom(p) => self.deck_transfer(state, actor, p, true),
            C::ShuffleMainDeck => {
                state.shuffle(Zone::MainDeck(actor));
                Ok(())
            }
            C::ShuffleRuneDeck => {
                state.shuffle(Zone::RuneDeck(actor));
                Ok(())
            }
            C::UpdateScore(p) => {
                state.player_mut(actor).adjust_score(p.delta);
                Ok(())
            }
            C::AddModifier(p) => self.add_modifier(state, actor, p),
            C::RemoveModifier(p) => self.remove_modifier(state, actor, p),
            C::CreateToken(p) => self.create_token(state, actor, p),
            C::SelectDeck(p) => self.select_deck(state, actor, p),
            C::SelectHero(p) => self.select_hero(state, actor, p),
            C::SelectBattlefield(p) => self.select_battlefield(state, actor, p),
            C::StartGame => self.start_game(state, actor),
        }
    }

    fn check_phase(state: &GameState, actor: PlayerId, command: &Command) -> Result<(), ActionError> {
        if !state.is_seated(actor) {
            return Err(ActionError::NotSeated(actor));
        }
        if command.is_setup() {
            if state.started {
                return Err(ActionError::GameAlreadyStarted);
            }
        } else if state.ended {
            return Err(ActionError::GameEnded);
        } else if !state.started {
            return Err(ActionError::GameNotStarted);
        }
        Ok(())
    }

    // === Catalog helpers ===

    pub(super) fn definition(&self, card: &CardInstance) -> Option<&CardDefinition> {
        self.catalog.get(&card.card_id)
    }

    /// Tokens count as units even without a catalog entry.
    pub(super) fn is_unit(&self, card: &CardInstance) -> bool {
        card.is_token() || self.catalog.kind_of(&card.card_id).is_some_and(CardKind::is_unit)
    }

    pub(super) fn is_rune(&self, card: &CardInstance) -> bool {
        self.catalog.kind_of(&card.card_id) == Some(CardKind::Rune)
    }
}

// === Lookup helpers shared by the handlers ===

/// Resolve `area` for `actor` and check that `id` is there.
///
/// Pending spells only count as the actor's when they were staged by them.
pub(super) fn locate(
    state: &GameState,
    actor: PlayerId,
    area: Area,
    id: InstanceId,
) -> Result<Zone, ActionError> {
    let zone = area.zone_for(actor);
    let present = state.zones.is_in(id, zone)
        && (zone != Zone::PendingSpells
            || state.card(id).is_some_and(|c| c.acting_player == Some(actor)));
    if present {
        Ok(zone)
    } else {
        Err(ActionError::CardNotFound {
            instance: id,
            area: area.as_str(),
        })
    }
}

pub(super) fn card(state: &GameState, id: InstanceId) -> Result<&CardInstance, ActionError> {
    state.card(id).ok_or(ActionError::CardNotFound {
        instance: id,
        area: "table",
    })
}

pub(super) fn card_mut(
    state: &mut GameState,
    id: InstanceId,
) -> Result<&mut CardInstance, ActionError> {
    state.card_mut(id).ok_or(ActionError::CardNotFound {
        instance: id,
        area: "table",
    })
}

/// Reject `area` unless it is one of `allowed`.
pub(super) fn require_area(
    action: &'static str,
    area: Area,
    allowed: &[Area],
) -> Result<(), ActionError> {
    if allowed.contains(&area) {
        Ok(())
    } else {
        Err(ActionError::UnsupportedTarget {
            action,
            area: area.as_str(),
        })
    }
}
