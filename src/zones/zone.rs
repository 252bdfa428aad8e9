//! Zone and area identifiers.
//!
//! `Zone` is the engine's precise address of a card list. `Area` is the
//! coarser name clients use on the wire ("battlefield1", "hero", ...) and
//! resolves to a zone relative to the acting player.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Number of shared battlefields.
pub const BATTLEFIELDS: u8 = 2;

/// A card list on the table.
///
/// Deck zones keep their top card at the end of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand(PlayerId),
    MainDeck(PlayerId),
    RuneDeck(PlayerId),
    RuneArea(PlayerId),
    Base(PlayerId),
    Graveyard(PlayerId),
    /// Selected hero; at most one card.
    HeroSlot(PlayerId),
    /// Deck legend; at most one card, never moved by zone transitions.
    LegendSlot(PlayerId),
    /// Hero candidates during setup.
    HeroPool(PlayerId),
    /// Battlefield candidates during setup.
    BattlefieldPool(PlayerId),
    /// One player's units on one battlefield.
    Units { field: u8, side: PlayerId },
    /// The battlefield card itself; fixed once the game starts.
    BattlefieldCard(u8),
    /// Shared staging list; entries carry their acting player.
    PendingSpells,
}

impl Zone {
    /// Units zone shorthand.
    #[must_use]
    pub const fn units(field: u8, side: PlayerId) -> Self {
        Zone::Units { field, side }
    }

    /// Every zone on a two-seat table.
    #[must_use]
    pub fn all() -> Vec<Zone> {
        let mut zones = Vec::with_capacity(27);
        for p in PlayerId::both() {
            zones.extend([
                Zone::Hand(p),
                Zone::MainDeck(p),
                Zone::RuneDeck(p),
                Zone::RuneArea(p),
                Zone::Base(p),
                Zone::Graveyard(p),
                Zone::HeroSlot(p),
                Zone::LegendSlot(p),
                Zone::HeroPool(p),
                Zone::BattlefieldPool(p),
            ]);
            for field in 0..BATTLEFIELDS {
                zones.push(Zone::units(field, p));
            }
        }
        for field in 0..BATTLEFIELDS {
            zones.push(Zone::BattlefieldCard(field));
        }
        zones.push(Zone::PendingSpells);
        zones
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Hand(p) => write!(f, "{p}.hand"),
            Zone::MainDeck(p) => write!(f, "{p}.mainDeck"),
            Zone::RuneDeck(p) => write!(f, "{p}.runeDeck"),
            Zone::RuneArea(p) => write!(f, "{p}.runeArea"),
            Zone::Base(p) => write!(f, "{p}.base"),
            Zone::Graveyard(p) => write!(f, "{p}.graveyard"),
            Zone::HeroSlot(p) => write!(f, "{p}.hero"),
            Zone::LegendSlot(p) => write!(f, "{p}.legend"),
            Zone::HeroPool(p) => write!(f, "{p}.heroPool"),
            Zone::BattlefieldPool(p) => write!(f, "{p}.battlefieldPool"),
            Zone::Units { field, side } => write!(f, "battlefield{}.{side}", field + 1),
            Zone::BattlefieldCard(field) => write!(f, "battlefield{}.card", field + 1),
            Zone::PendingSpells => f.write_str("pendingSpells"),
        }
    }
}

/// Client-facing area names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Area {
    Hand,
    Graveyard,
    MainDeck,
    MainDeckTop,
    MainDeckBottom,
    Base,
    Battlefield1,
    Battlefield2,
    Hero,
    Legend,
    PendingSpells,
    #[serde(alias = "rune")]
    RuneArea,
}

impl Area {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Area::Hand => "hand",
            Area::Graveyard => "graveyard",
            Area::MainDeck => "mainDeck",
            Area::MainDeckTop => "mainDeckTop",
            Area::MainDeckBottom => "mainDeckBottom",
            Area::Base => "base",
            Area::Battlefield1 => "battlefield1",
            Area::Battlefield2 => "battlefield2",
            Area::Hero => "hero",
            Area::Legend => "legend",
            Area::PendingSpells => "pendingSpells",
            Area::RuneArea => "runeArea",
        }
    }

    /// Battlefield index for `battlefield1` / `battlefield2`.
    #[must_use]
    pub const fn field(self) -> Option<u8> {
        match self {
            Area::Battlefield1 => Some(0),
            Area::Battlefield2 => Some(1),
            _ => None,
        }
    }

    /// Zone this area names for `player`.
    ///
    /// Battlefields resolve to the player's own unit list; the three
    /// main-deck spellings all resolve to the main deck.
    #[must_use]
    pub const fn zone_for(self, player: PlayerId) -> Zone {
        match self {
            Area::Hand => Zone::Hand(player),
            Area::Graveyard => Zone::Graveyard(player),
            Area::MainDeck | Area::MainDeckTop | Area::MainDeckBottom => Zone::MainDeck(player),
            Area::Base => Zone::Base(player),
            Area::Battlefield1 => Zone::units(0, player),
            Area::Battlefield2 => Zone::units(1, player),
            Area::Hero => Zone::HeroSlot(player),
            Area::Legend => Zone::LegendSlot(player),
            Area::PendingSpells => Zone::PendingSpells,
            Area::RuneArea => Zone::RuneArea(player),
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
