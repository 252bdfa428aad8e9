//! # rune-table
//!
//! Authoritative state engine for a two-player rune card game played on a
//! shared virtual table.
//!
//! ## Design Principles
//!
//! 1. **Manual Table**: The engine enforces zone rules (who owns what, what
//!    may be face down, what happens to tokens) but no game rules. Players
//!    move cards; the engine keeps the table consistent.
//!
//! 2. **All-or-Nothing Actions**: Every action runs against a draft copy of
//!    the table and is committed only on success.
//!
//! 3. **Server-Side Secrecy**: Clients receive per-seat projections; hidden
//!    cards never leave the engine.
//!
//! ## Architecture
//!
//! - **Arena Storage**: Cards live in one table keyed by `InstanceId`;
//!   zones hold ids only.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, which makes
//!   draft-and-commit cheap.
//!
//! - **Serial Rooms**: Each room is mutated under its own lock; rooms run
//!   concurrently.
//!
//! ## Modules
//!
//! - `core`: Instance ids, seats, state, errors, RNG, configuration
//! - `zones`: Zones, client areas and the zone manager
//! - `cards`: Catalog definitions, instances, deck lists
//! - `actions`: Command vocabulary and the dispatcher
//! - `view`: Per-seat projection and lifecycle
//! - `session`: Rooms and the room registry

pub mod core;
pub mod zones;
pub mod cards;
pub mod actions;
pub mod view;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ErrorKind, GameRng, GameState, InstanceId, PlayerId, PlayerMap, PlayerState,
    TableConfig,
};

pub use crate::zones::{Area, Zone, ZoneManager, ZonePosition};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardKind, CardRegistry, Color, DeckEntry, DeckLibrary,
    DeckList, Modifier, TokenProfile,
};

pub use crate::actions::{Command, Dispatcher, SetupStage};

pub use crate::view::{project, CardView, Lifecycle, PlayerView};

pub use crate::session::{Envelope, ErrorReply, Outbound, Room, RoomId, RoomRegistry, SessionError};
