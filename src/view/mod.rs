//! Per-seat views of a table.
//!
//! ## Key Types
//!
//! - `PlayerView`: What one seat may see, ready to serialize
//! - `CardView`: A card, redacted when face down and not the observer's
//! - `Lifecycle`: Table phase derived from the state

pub mod lifecycle;
pub mod projection;

pub use lifecycle::Lifecycle;
pub use projection::{project, BattlefieldView, CardView, PlayerView, SeatView};
