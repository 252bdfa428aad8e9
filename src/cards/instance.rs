//! Card instances - one physical card on the table.
//!
//! A `CardInstance` is created once (deck construction, setup candidates,
//! token creation) and then only mutated: moving zones never clones or
//! re-identifies it. Where it currently lives is tracked by the zone manager,
//! not by the instance.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::CardId;
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;

/// Client-tracked adjustment on a card (e.g. `{"kind": "power", "magnitude": 2}`).
///
/// The engine stores modifiers but never interprets them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifier {
    pub kind: String,
    #[serde(default)]
    pub magnitude: i32,
}

impl Modifier {
    #[must_use]
    pub fn new(kind: impl Into<String>, magnitude: i32) -> Self {
        Self {
            kind: kind.into(),
            magnitude,
        }
    }
}

/// Name and power carried by a token, which has no catalog entry of its own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenProfile {
    pub name: String,
    pub power: u32,
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Stable identity across zone moves.
    pub instance_id: InstanceId,

    /// Catalog reference. Tokens may reference a template card or a
    /// synthetic id.
    pub card_id: CardId,

    pub owner: PlayerId,

    /// When false the card's identity is hidden from everyone but its owner.
    pub face_up: bool,

    pub tapped: bool,

    pub modifiers: SmallVec<[Modifier; 2]>,

    /// Present only on tokens.
    pub token: Option<TokenProfile>,

    /// Set while the card sits in the shared pending-spell area.
    pub acting_player: Option<PlayerId>,
}

impl CardInstance {
    /// Create an untapped, face-up card.
    #[must_use]
    pub fn new(instance_id: InstanceId, card_id: CardId, owner: PlayerId) -> Self {
        Self {
            instance_id,
            card_id,
            owner,
            face_up: true,
            tapped: false,
            modifiers: SmallVec::new(),
            token: None,
            acting_player: None,
        }
    }

    /// Create a token.
    #[must_use]
    pub fn token(
        instance_id: InstanceId,
        card_id: CardId,
        owner: PlayerId,
        profile: TokenProfile,
    ) -> Self {
        Self {
            token: Some(profile),
            ..Self::new(instance_id, card_id, owner)
        }
    }

    /// Tokens are destroyed instead of going to a graveyard.
    #[must_use]
    pub fn is_token(&self) -> bool {
        self.token.is_some()
    }

    /// Untap and turn face up; what a card looks like in a graveyard.
    pub fn reset(&mut self) {
        self.tapped = false;
        self.face_up = true;
    }

    /// Remove the modifier at `index`.
    pub fn remove_modifier(&mut self, index: usize) -> Option<Modifier> {
        (index < self.modifiers.len()).then(|| self.modifiers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CardInstance {
        CardInstance::new(InstanceId(1), CardId::new("OGN-001"), PlayerId::FIRST)
    }

    #[test]
    fn test_new_defaults() {
        let card = sample();
        assert!(card.face_up);
        assert!(!card.tapped);
        assert!(!card.is_token());
        assert!(card.modifiers.is_empty());
        assert_eq!(card.acting_player, None);
    }

    #[test]
    fn test_token() {
        let card = CardInstance::token(
            InstanceId(9),
            CardId::new("token"),
            PlayerId::SECOND,
            TokenProfile { name: "Recruit".into(), power: 1 },
        );
        assert!(card.is_token());
        assert_eq!(card.owner, PlayerId::SECOND);
    }

    #[test]
    fn test_reset() {
        let mut card = sample();
        card.tapped = true;
        card.face_up = false;
        card.reset();
        assert!(!card.tapped);
        assert!(card.face_up);
    }

    #[test]
    fn test_remove_modifier_by_index() {
        let mut card = sample();
        card.modifiers.push(Modifier::new("power", 2));
        card.modifiers.push(Modifier::new("shield", 1));

        assert_eq!(card.remove_modifier(5), None);
        assert_eq!(card.remove_modifier(0), Some(Modifier::new("power", 2)));
        assert_eq!(card.modifiers.len(), 1);
        assert_eq!(card.modifiers[0].kind, "shield");
    }
}
