//! Card instance identification.
//!
//! Every physical card on the table (deck cards, setup candidates, tokens)
//! carries an `InstanceId` drawn at random by its table. Ids are never
//! reused, so a move can always be checked against the id the client names,
//! and they carry no ordering a client could read card identities from.
//!
//! ```
//! use rune_table::core::InstanceId;
//!
//! let id = InstanceId::new(17);
//! assert_eq!(id.raw(), 17);
//! assert_eq!(id.to_string(), "card#17");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one table.
///
/// Serialized as a bare number on the wire (`"cardInstanceId": 17`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

impl From<u32> for InstanceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_bare_number() {
        let json = serde_json::to_string(&InstanceId(7)).unwrap();
        assert_eq!(json, "7");

        let back: InstanceId = serde_json::from_str("12").unwrap();
        assert_eq!(back, InstanceId(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(3)), "card#3");
    }
}
