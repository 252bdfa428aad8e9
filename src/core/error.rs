//! Action failure taxonomy.
//!
//! Every rejected action maps to exactly one [`ErrorKind`]. Rejections are
//! reported to the acting player only and never change table state.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;
use crate::cards::CardId;

/// Coarse classification of an [`ActionError`], sent to clients alongside
/// the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// A named card, index, deck or catalog entry does not exist where expected.
    NotFound,
    /// The transfer breaks a zone rule.
    IllegalTransfer,
    /// The action is not allowed in the current lifecycle state.
    InvalidState,
    /// The action name or its payload is not part of the vocabulary.
    UnknownAction,
}

impl ErrorKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "notFound",
            ErrorKind::IllegalTransfer => "illegalTransfer",
            ErrorKind::InvalidState => "invalidState",
            ErrorKind::UnknownAction => "unknownAction",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    // NotFound
    #[error("card {instance} not found in {area}")]
    CardNotFound {
        instance: InstanceId,
        area: &'static str,
    },
    #[error("index {index} out of range for {area} (size {len})")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        area: &'static str,
    },
    #[error("deck `{0}` not found")]
    DeckNotFound(String),
    #[error("card `{0}` is not in the catalog")]
    UnknownCard(CardId),

    // IllegalTransfer
    #[error("battlefield {} already holds a face-down card", .field + 1)]
    FaceDownOccupied { field: u8 },
    #[error("token {0} cannot enter a graveyard")]
    TokenToGraveyard(InstanceId),
    #[error("{player} may not choose battlefield slot {index}")]
    WrongBattlefieldSlot { player: PlayerId, index: usize },
    #[error("{0} slot is already occupied")]
    SlotOccupied(&'static str),
    #[error("{action} does not support area `{area}`")]
    UnsupportedTarget {
        action: &'static str,
        area: &'static str,
    },

    // InvalidState
    #[error("{0} is not seated at this table")]
    NotSeated(PlayerId),
    #[error("game has not started")]
    GameNotStarted,
    #[error("game has already started")]
    GameAlreadyStarted,
    #[error("game has ended")]
    GameEnded,
    #[error("{player} is not ready: {missing}")]
    NotReady {
        player: PlayerId,
        missing: &'static str,
    },
    #[error("the other seat is empty")]
    OpponentMissing,

    // UnknownAction
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    #[error("malformed payload for {action}: {reason}")]
    MalformedPayload {
        action: &'static str,
        reason: String,
    },
}

impl ActionError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        use ActionError::*;
        match self {
            CardNotFound { .. } | IndexOutOfRange { .. } | DeckNotFound(_) | UnknownCard(_) => {
                ErrorKind::NotFound
            }
            FaceDownOccupied { .. }
            | TokenToGraveyard(_)
            | WrongBattlefieldSlot { .. }
            | SlotOccupied(_)
            | UnsupportedTarget { .. } => ErrorKind::IllegalTransfer,
            NotSeated(_) | GameNotStarted | GameAlreadyStarted | GameEnded | NotReady { .. }
            | OpponentMissing => ErrorKind::InvalidState,
            UnknownAction(_) | MalformedPayload { .. } => ErrorKind::UnknownAction,
        }
    }
}
