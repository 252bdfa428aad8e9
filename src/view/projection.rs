//! Per-seat projection of the table.
//!
//! `project` is a pure function of the state: no RNG, no mutation, no
//! logging. Hidden information is removed here and nowhere else:
//!
//! - deck contents never leave the engine, only their sizes
//! - the opponent's hand is a count
//! - a face-down card owned by someone else keeps its position and flags
//!   but loses its identity (`cardId`, `name`, `kind`, `power`)
//! - the opponent's pending spells are listed only once face up
//! - setup pools are shown to their owner only

use serde::Serialize;

use super::lifecycle::Lifecycle;
use crate::actions::SetupStage;
use crate::cards::{CardId, CardInstance, CardKind, CardRegistry, Modifier};
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::{Zone, BATTLEFIELDS};

/// A card as one observer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub instance_id: InstanceId,
    pub owner: PlayerId,
    pub face_up: bool,
    pub tapped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<CardId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CardKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_token: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acting_player: Option<PlayerId>,
}

impl CardView {
    /// Whether the card's identity was withheld.
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.card_id.is_none()
    }
}

/// One seat's public information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub player: PlayerId,
    pub name: String,
    pub seated: bool,
    pub deck_selected: bool,
    pub stage: SetupStage,
    pub score: u32,
    pub hand_count: usize,
    pub main_deck_count: usize,
    pub rune_deck_count: usize,
    pub graveyard: Vec<CardView>,
    pub base: Vec<CardView>,
    pub rune_area: Vec<CardView>,
    pub hero: Option<CardView>,
    pub legend: Option<CardView>,
}

/// A battlefield card and the units on each side of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlefieldView {
    pub index: u8,
    pub card: Option<CardView>,
    /// Indexed by seat.
    pub units: [Vec<CardView>; 2],
}

/// Everything one seat is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub observer: PlayerId,
    pub lifecycle: Lifecycle,
    /// Indexed by seat.
    pub seats: [SeatView; 2],
    /// The observer's own hand.
    pub hand: Vec<CardView>,
    pub battlefields: Vec<BattlefieldView>,
    pub pending_spells: Vec<CardView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hero_pool: Vec<CardView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub battlefield_pool: Vec<CardView>,
}

impl PlayerView {
    #[must_use]
    pub fn me(&self) -> &SeatView {
        &self.seats[self.observer.index()]
    }

    #[must_use]
    pub fn opponent(&self) -> &SeatView {
        &self.seats[self.observer.opponent().index()]
    }

    /// Every card listed anywhere in the view.
    pub fn cards(&self) -> impl Iterator<Item = &CardView> {
        let seats = self.seats.iter().flat_map(|s| {
            s.graveyard
                .iter()
                .chain(&s.base)
                .chain(&s.rune_area)
                .chain(&s.hero)
                .chain(&s.legend)
        });
        let fields = self
            .battlefields
            .iter()
            .flat_map(|b| b.card.iter().chain(b.units.iter().flatten()));
        seats
            .chain(fields)
            .chain(&self.hand)
            .chain(&self.pending_spells)
            .chain(&self.hero_pool)
            .chain(&self.battlefield_pool)
    }

    /// Look up a visible card by instance id.
    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<&CardView> {
        self.cards().find(|c| c.instance_id == id)
    }
}

struct Projector<'a> {
    state: &'a GameState,
    catalog: &'a CardRegistry,
    observer: PlayerId,
}

impl Projector<'_> {
    fn card(&self, card: &CardInstance) -> CardView {
        let mut view = CardView {
            instance_id: card.instance_id,
            owner: card.owner,
            face_up: card.face_up,
            tapped: card.tapped,
            card_id: None,
            name: None,
            kind: None,
            power: None,
            is_token: false,
            modifiers: card.modifiers.to_vec(),
            acting_player: card.acting_player,
        };
        if !card.face_up && card.owner != self.observer {
            return view;
        }

        let def = self.catalog.get(&card.card_id);
        view.card_id = Some(card.card_id.clone());
        view.is_token = card.is_token();
        match &card.token {
            Some(profile) => {
                view.name = Some(profile.name.clone());
                view.kind = Some(CardKind::TokenUnit);
                view.power = Some(profile.power);
            }
            None => {
                view.name = def.map(|d| d.name.clone());
                view.kind = def.map(|d| d.kind);
                view.power = def.and_then(|d| d.power);
            }
        }
        view
    }

    fn zone(&self, zone: Zone) -> Vec<CardView> {
        self.state.cards_in(zone).map(|c| self.card(c)).collect()
    }

    fn slot(&self, zone: Zone) -> Option<CardView> {
        self.state.cards_in(zone).next().map(|c| self.card(c))
    }

    fn seat(&self, player: PlayerId) -> SeatView {
        let record = self.state.player(player);
        let zones = &self.state.zones;
        SeatView {
            player,
            name: record.name.clone(),
            seated: record.seated,
            deck_selected: record.deck_id.is_some(),
            stage: SetupStage::of(self.state, player),
            score: record.score,
            hand_count: zones.len(Zone::Hand(player)),
            main_deck_count: zones.len(Zone::MainDeck(player)),
            rune_deck_count: zones.len(Zone::RuneDeck(player)),
            graveyard: self.zone(Zone::Graveyard(player)),
            base: self.zone(Zone::Base(player)),
            rune_area: self.zone(Zone::RuneArea(player)),
            hero: self.slot(Zone::HeroSlot(player)),
            legend: self.slot(Zone::LegendSlot(player)),
        }
    }

    fn battlefield(&self, index: u8) -> BattlefieldView {
        BattlefieldView {
            index,
            card: self.slot(Zone::BattlefieldCard(index)),
            units: [
                self.zone(Zone::units(index, PlayerId::FIRST)),
                self.zone(Zone::units(index, PlayerId::SECOND)),
            ],
        }
    }

    fn pending(&self) -> Vec<CardView> {
        self.state
            .cards_in(Zone::PendingSpells)
            .filter(|c| c.acting_player == Some(self.observer) || c.face_up)
            .map(|c| self.card(c))
            .collect()
    }

    fn project(&self) -> PlayerView {
        let me = self.observer;
        PlayerView {
            observer: me,
            lifecycle: Lifecycle::of(self.state),
            seats: [self.seat(PlayerId::FIRST), self.seat(PlayerId::SECOND)],
            hand: self.zone(Zone::Hand(me)),
            battlefields: (0..BATTLEFIELDS).map(|i| self.battlefield(i)).collect(),
            pending_spells: self.pending(),
            hero_pool: self.zone(Zone::HeroPool(me)),
            battlefield_pool: self.zone(Zone::BattlefieldPool(me)),
        }
    }
}

/// Project `state` for `observer`.
#[must_use]
pub fn project(state: &GameState, catalog: &CardRegistry, observer: PlayerId) -> PlayerView {
    Projector {
        state,
        catalog,
        observer,
    }
    .project()
}
