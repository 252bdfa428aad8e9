//! Core engine types: instance ids, seats, state, errors, RNG, configuration.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::TableConfig;
pub use entity::InstanceId;
pub use error::{ActionError, ErrorKind};
pub use player::{PlayerId, PlayerMap, SEATS};
pub use rng::GameRng;
pub use state::{GameState, PlayerState};
