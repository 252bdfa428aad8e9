//! Table state: the aggregate every action mutates.
//!
//! ## GameState
//!
//! - Card arena (`InstanceId -> CardInstance`), the only owner of card data
//! - Zone manager (where each card is)
//! - Per-seat player records
//! - Lifecycle flags and the table RNG
//!
//! The arena and the zone manager are `im` persistent structures: cloning a
//! `GameState` is O(1), which is what makes draft-and-commit actions cheap.

use im::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use super::config::TableConfig;
use super::entity::InstanceId;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{CardId, CardInstance, TokenProfile};
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// Per-seat record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Display name supplied on join.
    pub name: String,
    pub seated: bool,
    pub score: u32,
    /// Deck chosen with `selectDeck`.
    pub deck_id: Option<String>,
}

impl PlayerState {
    /// Apply a signed score change, flooring at zero.
    pub fn adjust_score(&mut self, delta: i32) {
        self.score = self.score.saturating_add_signed(delta);
    }
}

/// Complete table state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    cards: HashMap<InstanceId, CardInstance>,

    /// Card locations.
    pub zones: ZoneManager,

    pub players: PlayerMap<PlayerState>,

    /// Set by `startGame`.
    pub started: bool,

    /// Set when a player leaves an active game.
    pub ended: bool,

    /// Every id handed out so far, destroyed cards included.
    issued: HashSet<InstanceId>,
    rng: GameRng,
}

impl GameState {
    /// Create an empty table.
    #[must_use]
    pub fn new(config: &TableConfig) -> Self {
        Self::with_rng(config.make_rng())
    }

    /// Create an empty table with a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        Self {
            cards: HashMap::new(),
            zones: ZoneManager::new(),
            players: PlayerMap::default(),
            started: false,
            ended: false,
            issued: HashSet::new(),
            rng,
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    #[must_use]
    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.players[player].seated
    }

    /// Number of occupied seats.
    #[must_use]
    pub fn seated_count(&self) -> usize {
        self.players.iter().filter(|(_, p)| p.seated).count()
    }

    // === Card arena ===

    /// Create a card in `zone` and return its new id.
    pub fn spawn(
        &mut self,
        card_id: CardId,
        owner: PlayerId,
        zone: Zone,
        position: ZonePosition,
    ) -> InstanceId {
        let id = self.alloc_id();
        self.insert(CardInstance::new(id, card_id, owner), zone, position);
        id
    }

    /// Create a token in `zone` and return its new id.
    pub fn spawn_token(
        &mut self,
        card_id: CardId,
        owner: PlayerId,
        profile: TokenProfile,
        zone: Zone,
        position: ZonePosition,
    ) -> InstanceId {
        let id = self.alloc_id();
        self.insert(CardInstance::token(id, card_id, owner, profile), zone, position);
        id
    }

    /// Ids are drawn from the table RNG so they say nothing about the deck
    /// list order a card was built from. They are never reused.
    fn alloc_id(&mut self) -> InstanceId {
        loop {
            let id = InstanceId(self.rng.next_u32());
            if self.issued.insert(id).is_none() {
                return id;
            }
        }
    }

    fn insert(&mut self, card: CardInstance, zone: Zone, position: ZonePosition) {
        self.zones.add(card.instance_id, zone, position);
        self.cards.insert(card.instance_id, card);
    }

    /// Remove a card from the table entirely.
    pub fn destroy(&mut self, id: InstanceId) -> Option<CardInstance> {
        self.zones.remove(id);
        self.cards.remove(&id)
    }

    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    pub fn card_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&id)
    }

    /// Cards in a zone, in order.
    pub fn cards_in(&self, zone: Zone) -> impl Iterator<Item = &CardInstance> + '_ {
        self.zones.iter(zone).filter_map(move |id| self.cards.get(&id))
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Every arena card is tracked by the zone manager exactly once, and
    /// nothing else is.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.zones.is_consistent()
            && self.zones.total_cards() == self.cards.len()
            && self
                .zones
                .locations()
                .all(|(id, _)| self.cards.get(&id).is_some_and(|c| c.instance_id == id))
    }

    // === Deck operations ===

    /// Move the top card of `from` to the end of `to`.
    ///
    /// Returns `None` (and changes nothing) when `from` is empty.
    pub fn draw(&mut self, from: Zone, to: Zone) -> Option<InstanceId> {
        let id = self.zones.top(from)?;
        self.zones.move_to(id, to, ZonePosition::Top);
        Some(id)
    }

    /// Shuffle a zone with the table RNG.
    pub fn shuffle(&mut self, zone: Zone) {
        self.zones.shuffle(zone, &mut self.rng);
    }

    /// Seed of the table RNG.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }
}
