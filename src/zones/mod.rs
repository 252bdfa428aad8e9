//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Precise card list address (per-seat zones, battlefield sides,
//!   shared pending spells)
//! - `Area`: Client-facing area names resolved relative to the actor
//! - `ZoneManager`: Card location tracking and movement
//! - `ZonePosition`: Insertion position within a zone

pub mod manager;
pub mod zone;

pub use manager::{ZoneManager, ZonePosition};
pub use zone::{Area, Zone, BATTLEFIELDS};
