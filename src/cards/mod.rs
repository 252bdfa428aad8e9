//! Card system: catalog definitions, runtime instances, deck lists.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier
//! - `CardDefinition`: Static card data (kind, colors, affiliation)
//! - `CardInstance`: One physical card on the table
//! - `CardRegistry`: Read-only catalog lookup
//! - `DeckList` / `DeckLibrary`: Parsed decks selectable at a table

pub mod definition;
pub mod deck;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind, Color};
pub use deck::{DeckEntry, DeckLibrary, DeckList};
pub use instance::{CardInstance, Modifier, TokenProfile};
pub use registry::CardRegistry;
