//! Seat identification and per-seat data storage.
//!
//! A table has exactly two seats. `PlayerId::FIRST` owns battlefield slot 0
//! during setup, `PlayerId::SECOND` slot 1. No other seat can be built, on
//! the wire or in code.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at a table.
pub const SEATS: usize = 2;

/// Seat identifier.
///
/// Serialized as the bare seat index; anything but 0 or 1 fails to decode.
///
/// ```
/// use rune_table::core::PlayerId;
///
/// assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::SECOND);
/// assert!(serde_json::from_str::<PlayerId>("2").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// First seat.
    pub const FIRST: PlayerId = PlayerId(0);
    /// Second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat index as stored.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The other seat.
    ///
    /// ```
    /// use rune_table::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in seat order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }

    /// Parse a seat index received from the outside.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SEATS).then(|| Self(index as u8))
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(raw)).ok_or_else(|| format!("no seat {raw} at a {SEATS}-seat table"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player{}", self.0 + 1)
    }
}

/// Per-seat data storage.
///
/// ```
/// use rune_table::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// score[PlayerId::SECOND] = 3;
/// assert_eq!(score[PlayerId::FIRST], 0);
/// assert_eq!(score[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; SEATS],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(PlayerId::from_index(0), Some(PlayerId::FIRST));
        assert_eq!(PlayerId::from_index(1), Some(PlayerId::SECOND));
        assert_eq!(PlayerId::from_index(2), None);
    }

    #[test]
    fn test_unknown_seat_rejected_on_decode() {
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::FIRST);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(PlayerId::try_from(255u8).is_err());
        assert_eq!(serde_json::to_string(&PlayerId::SECOND).unwrap(), "1");
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(PlayerId::FIRST.to_string(), "player1");
        assert_eq!(PlayerId::SECOND.to_string(), "player2");
    }

    #[test]
    fn test_player_map_iter_order() {
        let map = PlayerMap::new(|p| p.index() * 10);
        let pairs: Vec<_> = map.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, 0), (PlayerId::SECOND, 10)]);
    }
}
