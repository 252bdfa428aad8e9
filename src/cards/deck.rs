//! Deck lists, already parsed by the host.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::CardId;
use super::registry::CardRegistry;

/// `count` copies of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    pub card_id: CardId,
    pub count: u32,
}

impl DeckEntry {
    #[must_use]
    pub fn new(card_id: impl Into<CardId>, count: u32) -> Self {
        Self {
            card_id: card_id.into(),
            count,
        }
    }
}

/// A playable deck: legend, main deck, rune deck and battlefield candidates.
///
/// Hero candidates are not listed separately; they are the hero units in
/// the main deck that share the legend's affiliation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckList {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub legend: CardId,
    #[serde(default)]
    pub cards: Vec<DeckEntry>,
    #[serde(default)]
    pub runes: Vec<DeckEntry>,
    #[serde(default)]
    pub battlefields: Vec<CardId>,
}

impl DeckList {
    /// Main deck card ids, one per copy, in list order.
    pub fn main_deck(&self) -> impl Iterator<Item = &CardId> {
        expand(&self.cards)
    }

    /// Rune deck card ids, one per copy, in list order.
    pub fn rune_deck(&self) -> impl Iterator<Item = &CardId> {
        expand(&self.runes)
    }

    /// Every card id the deck references, including the legend.
    pub fn referenced(&self) -> impl Iterator<Item = &CardId> {
        std::iter::once(&self.legend)
            .chain(self.cards.iter().map(|e| &e.card_id))
            .chain(self.runes.iter().map(|e| &e.card_id))
            .chain(self.battlefields.iter())
    }

    /// First referenced card missing from the catalog.
    #[must_use]
    pub fn first_unknown<'a>(&'a self, catalog: &CardRegistry) -> Option<&'a CardId> {
        self.referenced().find(|id| !catalog.contains(id))
    }
}

fn expand(entries: &[DeckEntry]) -> impl Iterator<Item = &CardId> {
    entries
        .iter()
        .flat_map(|e| std::iter::repeat(&e.card_id).take(e.count as usize))
}

/// Decks selectable at a table, keyed by deck id.
#[derive(Clone, Debug, Default)]
pub struct DeckLibrary {
    decks: FxHashMap<String, DeckList>,
}

impl DeckLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a deck.
    pub fn insert(&mut self, deck: DeckList) -> Option<DeckList> {
        self.decks.insert(deck.id.clone(), deck)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DeckList> {
        self.decks.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Iterate over deck ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.decks.keys().map(String::as_str)
    }
}

impl FromIterator<DeckList> for DeckLibrary {
    fn from_iter<I: IntoIterator<Item = DeckList>>(iter: I) -> Self {
        let mut library = Self::new();
        for deck in iter {
            library.insert(deck);
        }
        library
    }
}
