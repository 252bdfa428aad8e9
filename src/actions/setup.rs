//! Pre-game setup: deck, hero and battlefield selection, game start.
//!
//! Per seat the flow is: choose a deck (builds the shuffled main and rune
//! decks, the legend and both candidate pools), pick one hero from the hero
//! pool, pick one battlefield from the battlefield pool. `startGame` needs
//! both seats ready.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::command::{SelectBattlefield, SelectDeck, SelectHero};
use super::dispatcher::Dispatcher;
use crate::cards::{CardKind, DeckList};
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::{Zone, ZonePosition, BATTLEFIELDS};

/// How far a seat has progressed through setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetupStage {
    ChoosingDeck,
    ChoosingHeroAndBattlefield,
    Ready,
}

impl SetupStage {
    /// Stage of `player` on `state`.
    #[must_use]
    pub fn of(state: &GameState, player: PlayerId) -> Self {
        if state.player(player).deck_id.is_none() {
            SetupStage::ChoosingDeck
        } else if state.zones.is_empty(Zone::HeroSlot(player))
            || state.zones.is_empty(battlefield_slot(player))
        {
            SetupStage::ChoosingHeroAndBattlefield
        } else {
            SetupStage::Ready
        }
    }
}

/// The battlefield card slot a seat chooses for (seat N picks slot N).
#[must_use]
pub const fn battlefield_slot(player: PlayerId) -> Zone {
    Zone::BattlefieldCard(player.raw())
}

/// Zones that only exist because of the seat's deck choice.
fn setup_zones(player: PlayerId) -> [Zone; 7] {
    [
        Zone::MainDeck(player),
        Zone::RuneDeck(player),
        Zone::LegendSlot(player),
        Zone::HeroSlot(player),
        Zone::HeroPool(player),
        Zone::BattlefieldPool(player),
        battlefield_slot(player),
    ]
}

/// Drop every card `player`'s deck choice created and forget the choice.
///
/// Only meaningful before the game starts.
pub fn clear_setup(state: &mut GameState, player: PlayerId) {
    for zone in setup_zones(player) {
        for id in state.zones.ids(zone) {
            state.destroy(id);
        }
    }
    state.player_mut(player).deck_id = None;
}

impl Dispatcher {
    pub(super) fn select_deck(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &SelectDeck,
    ) -> Result<(), ActionError> {
        let deck = self
            .decks
            .get(&p.deck_id)
            .ok_or_else(|| ActionError::DeckNotFound(p.deck_id.clone()))?;
        if let Some(unknown) = deck.first_unknown(&self.catalog) {
            return Err(ActionError::UnknownCard(unknown.clone()));
        }

        // re-selection replaces everything the previous deck created
        clear_setup(state, actor);
        self.build_deck(state, actor, deck);
        state.player_mut(actor).deck_id = Some(deck.id.clone());
        info!(%actor, deck = %deck.id, "deck selected");
        Ok(())
    }

    fn build_deck(&self, state: &mut GameState, actor: PlayerId, deck: &DeckList) {
        state.spawn(deck.legend.clone(), actor, Zone::LegendSlot(actor), ZonePosition::Top);

        for card_id in deck.main_deck() {
            state.spawn(card_id.clone(), actor, Zone::MainDeck(actor), ZonePosition::Top);
        }
        state.shuffle(Zone::MainDeck(actor));

        for card_id in deck.rune_deck() {
            state.spawn(card_id.clone(), actor, Zone::RuneDeck(actor), ZonePosition::Top);
        }
        state.shuffle(Zone::RuneDeck(actor));

        // a hero is excluded only when both sides name an affiliation and they differ
        let legend_key = self.catalog.get(&deck.legend).and_then(|l| l.legend_key());
        let mut seen = FxHashSet::default();
        for entry in &deck.cards {
            let Some(def) = self.catalog.get(&entry.card_id) else {
                continue;
            };
            if def.kind != CardKind::HeroUnit || !seen.insert(&entry.card_id) {
                continue;
            }
            if let (Some(legend), Some(hero)) = (&legend_key, def.affiliation_key()) {
                if *legend != hero {
                    continue;
                }
            }
            state.spawn(def.id.clone(), actor, Zone::HeroPool(actor), ZonePosition::Top);
        }

        for card_id in &deck.battlefields {
            state.spawn(
                card_id.clone(),
                actor,
                Zone::BattlefieldPool(actor),
                ZonePosition::Top,
            );
        }
    }

    pub(super) fn select_hero(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &SelectHero,
    ) -> Result<(), ActionError> {
        let pool = Zone::HeroPool(actor);
        let slot = Zone::HeroSlot(actor);
        if !state.zones.is_in(p.card_instance_id, pool) {
            return Err(ActionError::CardNotFound {
                instance: p.card_instance_id,
                area: "heroPool",
            });
        }
        if let Some(previous) = state.zones.top(slot) {
            state.zones.move_to(previous, pool, ZonePosition::Top);
        }
        state.zones.move_to(p.card_instance_id, slot, ZonePosition::Top);
        Ok(())
    }

    pub(super) fn select_battlefield(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &SelectBattlefield,
    ) -> Result<(), ActionError> {
        let index = p.battlefield_index;
        if index >= usize::from(BATTLEFIELDS) {
            return Err(ActionError::IndexOutOfRange {
                index,
                len: usize::from(BATTLEFIELDS),
                area: "battlefields",
            });
        }
        if index != actor.index() {
            return Err(ActionError::WrongBattlefieldSlot {
                player: actor,
                index,
            });
        }

        let pool = Zone::BattlefieldPool(actor);
        let slot = battlefield_slot(actor);
        if !state.zones.is_in(p.card_instance_id, pool) {
            return Err(ActionError::CardNotFound {
                instance: p.card_instance_id,
                area: "battlefieldPool",
            });
        }
        if let Some(previous) = state.zones.top(slot) {
            state.zones.move_to(previous, pool, ZonePosition::Top);
        }
        state.zones.move_to(p.card_instance_id, slot, ZonePosition::Top);
        Ok(())
    }

    pub(super) fn start_game(&self, state: &mut GameState, actor: PlayerId) -> Result<(), ActionError> {
        if !state.is_seated(actor.opponent()) {
            return Err(ActionError::OpponentMissing);
        }
        for player in PlayerId::both() {
            let missing = match SetupStage::of(state, player) {
                SetupStage::Ready => continue,
                SetupStage::ChoosingDeck => "deck",
                SetupStage::ChoosingHeroAndBattlefield
                    if state.zones.is_empty(Zone::HeroSlot(player)) =>
                {
                    "hero"
                }
                SetupStage::ChoosingHeroAndBattlefield => "battlefield",
            };
            return Err(ActionError::NotReady { player, missing });
        }

        for player in PlayerId::both() {
            // the chosen hero starts in its slot, so one copy leaves the deck
            let hero_card = state
                .cards_in(Zone::HeroSlot(player))
                .next()
                .map(|c| c.card_id.clone());
            if let Some(hero_card) = hero_card {
                let copy = state
                    .cards_in(Zone::MainDeck(player))
                    .find(|c| c.card_id == hero_card)
                    .map(|c| c.instance_id);
                if let Some(copy) = copy {
                    state.destroy(copy);
                }
            }

            for pool in [Zone::HeroPool(player), Zone::BattlefieldPool(player)] {
                for id in state.zones.ids(pool) {
                    state.destroy(id);
                }
            }

            for _ in 0..self.config.opening_hand_size {
                state.draw(Zone::MainDeck(player), Zone::Hand(player));
            }
        }

        state.started = true;
        info!(%actor, seed = state.rng_seed(), "game started");
        Ok(())
    }
}
