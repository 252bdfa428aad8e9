//! Rooms: seats, action routing and broadcast.
//!
//! ## Key Types
//!
//! - `RoomRegistry`: Async map of rooms; create, discover, join, submit, leave
//! - `Room`: One table driven serially
//! - `Envelope` / `Outbound`: Inbound action and per-seat outbound messages
//! - `SessionError`: Failures around a table (unknown room, full room, ...)

pub mod envelope;
pub mod error;
pub mod registry;
pub mod room;

pub use envelope::{Envelope, ErrorReply, Outbound};
pub use error::SessionError;
pub use registry::RoomRegistry;
pub use room::{Room, RoomId};

pub use crate::actions::SetupStage;
pub use crate::view::Lifecycle;
