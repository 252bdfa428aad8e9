//! Room registry: creation, discovery and routing.
//!
//! ## Locking
//!
//! The room map sits behind a `RwLock`; each room behind its own `Mutex`.
//! Routing takes the map's read lock only long enough to clone the room's
//! `Arc`, then holds the room lock for decode, apply and project, so every
//! broadcast reflects the state right after its action. Different rooms
//! never contend.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use super::envelope::{Envelope, Outbound};
use super::error::SessionError;
use super::room::{Room, RoomId};
use crate::actions::Dispatcher;
use crate::core::player::PlayerId;
use crate::view::PlayerView;

/// All live rooms of one host.
#[derive(Debug)]
pub struct RoomRegistry {
    dispatcher: Dispatcher,
    rooms: RwLock<FxHashMap<RoomId, Arc<Mutex<Room>>>>,
}

impl RoomRegistry {
    #[must_use]
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            rooms: RwLock::new(FxHashMap::default()),
        }
    }

    /// Open an empty room.
    pub async fn create(&self) -> Result<RoomId, SessionError> {
        if self.dispatcher.catalog().is_empty() {
            return Err(SessionError::CatalogUnavailable);
        }
        let id = RoomId::new();
        let room = Room::new(id, self.dispatcher.clone());
        self.rooms.write().await.insert(id, Arc::new(Mutex::new(room)));
        info!(room = %id, "room created");
        Ok(id)
    }

    /// A room that has not started and still has a free seat.
    pub async fn find_available_room(&self) -> Option<RoomId> {
        let rooms = self.rooms.read().await;
        for (id, room) in rooms.iter() {
            if room.lock().await.is_available() {
                return Some(*id);
            }
        }
        None
    }

    /// Sit down in an available room, opening one when there is none.
    pub async fn join_any(
        &self,
        name: &str,
    ) -> Result<(RoomId, PlayerId, Vec<Outbound>), SessionError> {
        if let Some(id) = self.find_available_room().await {
            match self.join(id, name).await {
                Ok((seat, msgs)) => return Ok((id, seat, msgs)),
                // lost the seat to a concurrent join; fall through to a new room
                Err(SessionError::RoomFull(_) | SessionError::RoomNotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        let id = self.create().await?;
        let (seat, msgs) = self.join(id, name).await?;
        Ok((id, seat, msgs))
    }

    pub async fn join(
        &self,
        id: RoomId,
        name: &str,
    ) -> Result<(PlayerId, Vec<Outbound>), SessionError> {
        let room = self.room(id).await?;
        let mut room = room.lock().await;
        room.join(name)
    }

    /// Route one client action to its room.
    pub async fn submit(
        &self,
        id: RoomId,
        actor: PlayerId,
        envelope: Envelope,
    ) -> Result<Vec<Outbound>, SessionError> {
        let room = self.room(id).await?;
        let mut room = room.lock().await;
        Ok(room.handle(actor, envelope))
    }

    /// Remove a player; the room is dropped once nobody is seated.
    pub async fn leave(&self, id: RoomId, player: PlayerId) -> Result<Vec<Outbound>, SessionError> {
        let msgs = {
            let room = self.room(id).await?;
            let mut room = room.lock().await;
            room.leave(player)?
        };

        let mut rooms = self.rooms.write().await;
        let empty = match rooms.get(&id) {
            Some(room) => room.lock().await.is_empty(),
            None => false,
        };
        if empty {
            rooms.remove(&id);
            info!(room = %id, "room closed");
        }
        Ok(msgs)
    }

    pub async fn view(&self, id: RoomId, player: PlayerId) -> Result<PlayerView, SessionError> {
        let room = self.room(id).await?;
        let room = room.lock().await;
        Ok(room.view(player))
    }

    pub async fn contains(&self, id: RoomId) -> bool {
        self.rooms.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }

    async fn room(&self, id: RoomId) -> Result<Arc<Mutex<Room>>, SessionError> {
        self.rooms
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::RoomNotFound(id))
    }
}
