//! Room-level failures.

use thiserror::Error;

use super::room::RoomId;
use crate::core::player::PlayerId;

/// Failures that happen around a table rather than on it.
///
/// Action rejections are not session errors: they travel back to the actor
/// as [`Outbound::Rejected`](super::Outbound::Rejected).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),
    #[error("room {0} has no free seat")]
    RoomFull(RoomId),
    #[error("{0} is not seated")]
    NotSeated(PlayerId),
    #[error("card catalog is empty")]
    CatalogUnavailable,
}
