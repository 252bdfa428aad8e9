//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` is the single source of truth for where each card
//! instance is. Every zone is an ordered list; a card id is in at most one
//! list, and `locations` always agrees with the lists.
//!
//! Both maps are `im` persistent structures, so cloning the manager for a
//! draft action is O(1).

use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::core::entity::InstanceId;
use crate::core::rng::GameRng;

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// End of the list (top of a deck).
    Top,
    /// Start of the list (bottom of a deck).
    Bottom,
    /// Insert at a specific index, clamped to the list length.
    Index(usize),
}

/// Tracks card locations across zones.
///
/// ## Usage
///
/// ```
/// use rune_table::zones::{Zone, ZoneManager, ZonePosition};
/// use rune_table::core::{InstanceId, PlayerId};
///
/// let mut manager = ZoneManager::new();
/// let deck = Zone::MainDeck(PlayerId::FIRST);
///
/// manager.add(InstanceId(10), deck, ZonePosition::Top);
/// manager.add(InstanceId(11), deck, ZonePosition::Bottom);
///
/// assert_eq!(manager.ids(deck), vec![InstanceId(11), InstanceId(10)]);
/// assert_eq!(manager.top(deck), Some(InstanceId(10)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneManager {
    /// instance -> zone
    locations: HashMap<InstanceId, Zone>,

    /// zone -> ordered instances; zones that were never used are absent
    order: HashMap<Zone, Vector<InstanceId>>,
}

fn insert_at(list: &mut Vector<InstanceId>, id: InstanceId, position: ZonePosition) {
    match position {
        ZonePosition::Top => list.push_back(id),
        ZonePosition::Bottom => list.push_front(id),
        ZonePosition::Index(i) => {
            let idx = i.min(list.len());
            list.insert(idx, id);
        }
    }
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to a zone.
    ///
    /// Panics if the card is already tracked.
    pub fn add(&mut self, id: InstanceId, zone: Zone, position: ZonePosition) {
        if self.locations.contains_key(&id) {
            panic!("Instance {id} already exists in zone manager");
        }
        self.locations.insert(id, zone);
        insert_at(self.order.entry(zone).or_insert_with(Vector::new), id, position);
    }

    /// Move a card to `zone` (possibly the zone it is already in, to reorder).
    ///
    /// `Index` positions refer to the destination list after the card has
    /// been taken out of its source. Returns the old zone, or `None` if the
    /// card is not tracked.
    pub fn move_to(&mut self, id: InstanceId, zone: Zone, position: ZonePosition) -> Option<Zone> {
        let old = self.remove(id)?;
        self.add(id, zone, position);
        Some(old)
    }

    /// Stop tracking a card.
    ///
    /// Returns the zone it was in, or `None` if not found.
    pub fn remove(&mut self, id: InstanceId) -> Option<Zone> {
        let zone = self.locations.remove(&id)?;
        if let Some(list) = self.order.get_mut(&zone) {
            if let Some(idx) = list.iter().position(|&e| e == id) {
                list.remove(idx);
            }
        }
        Some(zone)
    }

    /// Zone a card is in.
    #[must_use]
    pub fn zone_of(&self, id: InstanceId) -> Option<Zone> {
        self.locations.get(&id).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in(&self, id: InstanceId, zone: Zone) -> bool {
        self.zone_of(id) == Some(zone)
    }

    /// Cards in a zone, in order.
    pub fn iter(&self, zone: Zone) -> impl Iterator<Item = InstanceId> + '_ {
        self.order.get(&zone).into_iter().flat_map(|l| l.iter().copied())
    }

    /// Cards in a zone, in order, collected.
    #[must_use]
    pub fn ids(&self, zone: Zone) -> Vec<InstanceId> {
        self.iter(zone).collect()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.order.get(&zone).map_or(0, Vector::len)
    }

    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.len(zone) == 0
    }

    /// Card at `index` (0 = bottom for decks).
    #[must_use]
    pub fn at(&self, zone: Zone, index: usize) -> Option<InstanceId> {
        self.order.get(&zone)?.get(index).copied()
    }

    /// Top card (last in the list).
    #[must_use]
    pub fn top(&self, zone: Zone) -> Option<InstanceId> {
        self.order.get(&zone)?.back().copied()
    }

    /// Bottom card (first in the list).
    #[must_use]
    pub fn bottom(&self, zone: Zone) -> Option<InstanceId> {
        self.order.get(&zone)?.front().copied()
    }

    /// Shuffle a zone in place.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(list) = self.order.get_mut(&zone) {
            rng.shuffle_vector(list);
        }
    }

    /// Replace a zone's order with a permutation of its current contents.
    ///
    /// Panics if `ids` is not a permutation of the zone.
    pub fn reorder(&mut self, zone: Zone, ids: Vec<InstanceId>) {
        assert_eq!(ids.len(), self.len(zone), "reorder of {zone} changes its size");
        assert!(
            ids.iter().all(|&id| self.is_in(id, zone)),
            "reorder of {zone} introduces foreign cards"
        );
        self.order.insert(zone, ids.into_iter().collect());
    }

    /// Total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager tracks a card.
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Every tracked card and its zone, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = (InstanceId, Zone)> + '_ {
        self.locations.iter().map(|(&id, &zone)| (id, zone))
    }

    /// True when every tracked card appears exactly once, in the list of the
    /// zone it is recorded in.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let listed: usize = self.order.values().map(Vector::len).sum();
        listed == self.locations.len()
            && self
                .order
                .iter()
                .all(|(zone, list)| list.iter().all(|id| self.locations.get(id) == Some(zone)))
    }
}
