//! Table actions: decoding, validation and atomic application.
//!
//! ## Key Types
//!
//! - `Command`: Closed set of actions a seated player can submit
//! - `Dispatcher`: Applies a command to a `GameState` all-or-nothing
//! - `SetupStage`: Per-seat progress through deck, hero and battlefield choice

pub mod command;
pub mod dispatcher;
pub mod setup;

mod card_state;
mod movement;
mod runes;

pub use command::{
    AddModifier, CardTarget, Command, CreateToken, DeckTransfer, DiscardCard, MoveCard, PlayCard,
    RecycleRune, RemoveModifier, SelectBattlefield, SelectDeck, SelectHero, UpdateScore,
};
pub use dispatcher::Dispatcher;
pub use movement::{DEFAULT_TOKEN_CARD_ID, DEFAULT_TOKEN_NAME};
pub use setup::{battlefield_slot, clear_setup, SetupStage};
