//! Wire shapes exchanged with clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{ActionError, ErrorKind};
use crate::core::player::PlayerId;
use crate::view::PlayerView;

/// An inbound action: `{"action": "...", "data": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub action: String,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    #[must_use]
    pub fn new(action: impl Into<String>, data: Value) -> Self {
        Self {
            action: action.into(),
            data,
        }
    }

    /// An action without payload.
    #[must_use]
    pub fn bare(action: impl Into<String>) -> Self {
        Self::new(action, Value::Null)
    }
}

/// Error sent back to the player whose action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
    pub kind: ErrorKind,
}

impl From<&ActionError> for ErrorReply {
    fn from(err: &ActionError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// A message addressed to one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outbound {
    View { target: PlayerId, view: PlayerView },
    Rejected { target: PlayerId, reply: ErrorReply },
}

impl Outbound {
    #[must_use]
    pub fn target(&self) -> PlayerId {
        match self {
            Outbound::View { target, .. } | Outbound::Rejected { target, .. } => *target,
        }
    }

    #[must_use]
    pub fn as_view(&self) -> Option<&PlayerView> {
        match self {
            Outbound::View { view, .. } => Some(view),
            Outbound::Rejected { .. } => None,
        }
    }

    #[must_use]
    pub fn as_rejection(&self) -> Option<&ErrorReply> {
        match self {
            Outbound::Rejected { reply, .. } => Some(reply),
            Outbound::View { .. } => None,
        }
    }
}
