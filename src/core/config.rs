//! Table configuration.
//!
//! Hosts usually deserialize a `TableConfig` from their own settings file;
//! every field has a default, so an empty object is a valid config.
//!
//! ```
//! use rune_table::core::TableConfig;
//!
//! let config = TableConfig::default()
//!     .with_opening_hand_size(5)
//!     .with_seed(42);
//! assert_eq!(config.opening_hand_size, 5);
//! assert_eq!(config.seed, Some(42));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::cards::Color;

/// Cards each player draws when the game starts.
pub const DEFAULT_OPENING_HAND: usize = 4;

/// Rune-area color order: primary colors first, colorless last.
pub const DEFAULT_RUNE_COLOR_PRIORITY: [Color; 7] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Orange,
    Color::Purple,
    Color::Colorless,
];

/// Per-table settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Cards drawn by each player on `startGame`.
    pub opening_hand_size: usize,

    /// Sort priority for the rune area. Colors not listed sort last.
    pub rune_color_priority: Vec<Color>,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            opening_hand_size: DEFAULT_OPENING_HAND,
            rune_color_priority: DEFAULT_RUNE_COLOR_PRIORITY.to_vec(),
            seed: None,
        }
    }
}

impl TableConfig {
    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Replace the rune color priority.
    #[must_use]
    pub fn with_rune_color_priority(mut self, priority: impl IntoIterator<Item = Color>) -> Self {
        self.rune_color_priority = priority.into_iter().collect();
        self
    }

    /// Pin the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 1-based sort ordinal for a rune color; `usize::MAX` when unknown.
    #[must_use]
    pub fn color_ordinal(&self, color: Option<Color>) -> usize {
        color
            .and_then(|c| self.rune_color_priority.iter().position(|&p| p == c))
            .map_or(usize::MAX, |i| i + 1)
    }

    /// Build the RNG for a new table.
    #[must_use]
    pub fn make_rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.opening_hand_size, 4);
        assert_eq!(config.rune_color_priority.len(), 7);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_color_ordinal() {
        let config = TableConfig::default();
        assert_eq!(config.color_ordinal(Some(Color::Red)), 1);
        assert_eq!(config.color_ordinal(Some(Color::Colorless)), 7);
        assert_eq!(config.color_ordinal(None), usize::MAX);

        let custom = config.with_rune_color_priority([Color::Blue]);
        assert_eq!(custom.color_ordinal(Some(Color::Blue)), 1);
        assert_eq!(custom.color_ordinal(Some(Color::Red)), usize::MAX);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TableConfig =
            serde_json::from_str(r#"{"openingHandSize": 6, "seed": 9}"#).unwrap();
        assert_eq!(config.opening_hand_size, 6);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rune_color_priority, DEFAULT_RUNE_COLOR_PRIORITY.to_vec());
    }

    #[test]
    fn test_seeded_rng() {
        let config = TableConfig::default().with_seed(11);
        assert_eq!(config.make_rng(), GameRng::new(11));
    }
}
