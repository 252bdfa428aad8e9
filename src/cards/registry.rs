//! Card registry for definition lookup.
//!
//! The `CardRegistry` is the read-only catalog a table consults. Hosts fill
//! it once at startup (usually from JSON) and share it between rooms.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rune_table::cards::{CardRegistry, CardDefinition, CardId, CardKind};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("OGN-001", "Fury Rune", CardKind::Rune));
///
/// let found = registry.get(&CardId::new("OGN-001")).unwrap();
/// assert_eq!(found.name, "Fury Rune");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Kind of a card, if it is in the catalog.
    #[must_use]
    pub fn kind_of(&self, id: &CardId) -> Option<CardKind> {
        self.get(id).map(|c| c.kind)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

impl FromIterator<CardDefinition> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CardRegistry {
        [
            CardDefinition::new("U1", "Scrapper", CardKind::Unit),
            CardDefinition::new("H1", "Jinx", CardKind::HeroUnit),
            CardDefinition::new("H2", "Vi", CardKind::HeroUnit),
            CardDefinition::new("R1", "Fury Rune", CardKind::Rune),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup() {
        let registry = sample();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains(&CardId::new("U1")));
        assert!(!registry.contains(&CardId::new("nope")));
        assert_eq!(registry.kind_of(&CardId::new("R1")), Some(CardKind::Rune));
        assert_eq!(registry.kind_of(&CardId::new("nope")), None);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_panics() {
        let mut registry = sample();
        registry.register(CardDefinition::new("U1", "Again", CardKind::Unit));
    }

    #[test]
    fn test_empty() {
        assert!(CardRegistry::new().is_empty());
    }
}
