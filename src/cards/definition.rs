//! Card definitions - static card data from the catalog.
//!
//! Definitions never change during a game. The engine only consults a
//! handful of fields: the kind (unit tap policy, hero candidates, rune
//! re-sort), the first color (rune ordering), and the legend affiliation
//! (hero candidate filtering). Everything else is carried for the views.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Catalog identifier, e.g. `"OGN-001"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Card category as printed in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    Unit,
    HeroUnit,
    TokenUnit,
    Spell,
    Rune,
    Battlefield,
    Legend,
    Equipment,
    #[serde(other)]
    Other,
}

impl CardKind {
    /// Units get tapped when they arrive on a battlefield or base.
    #[must_use]
    pub const fn is_unit(self) -> bool {
        matches!(self, CardKind::Unit | CardKind::HeroUnit | CardKind::TokenUnit)
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Colorless,
}

/// Static card data.
///
/// ```
/// use rune_table::cards::{CardDefinition, CardKind, Color};
///
/// let hero = CardDefinition::new("OGN-030", "Jinx, Loose Cannon", CardKind::HeroUnit)
///     .with_color(Color::Red)
///     .with_power(4)
///     .with_affiliation("Jinx");
///
/// assert!(hero.kind.is_unit());
/// assert_eq!(hero.affiliation_key().as_deref(), Some("jinx"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    #[serde(default)]
    pub colors: SmallVec<[Color; 2]>,
    #[serde(default)]
    pub power: Option<u32>,
    /// Legend a hero belongs to, or the legend's own champion name.
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl CardDefinition {
    /// Create a new card definition.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            colors: SmallVec::new(),
            power: None,
            affiliation: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    /// First listed color, used as the rune sort key.
    #[must_use]
    pub fn primary_color(&self) -> Option<Color> {
        self.colors.first().copied()
    }

    /// Affiliation normalized for comparison (trimmed, lowercase).
    #[must_use]
    pub fn affiliation_key(&self) -> Option<String> {
        self.affiliation.as_deref().and_then(normalize)
    }

    /// Affiliation of a legend card.
    ///
    /// Falls back to the part of the name before the first `-` so that
    /// `"Jinx - Loose Cannon"` still matches heroes affiliated with `jinx`.
    #[must_use]
    pub fn legend_key(&self) -> Option<String> {
        self.affiliation_key()
            .or_else(|| self.name.split('-').next().and_then(normalize))
    }
}

fn normalize(raw: &str) -> Option<String> {
    let key = raw.trim().to_lowercase();
    (!key.is_empty()).then_some(key)
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
