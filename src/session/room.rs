//! A single table and the seats around it.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::envelope::{Envelope, ErrorReply, Outbound};
use super::error::SessionError;
use crate::actions::{clear_setup, Command, Dispatcher};
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::view::{project, Lifecycle, PlayerView};

/// Room identifier, a random v4 UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub Uuid);

impl RoomId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One table: its state plus the dispatcher that mutates it.
///
/// A room is driven serially; every method takes `&mut self` and returns
/// the messages to deliver, computed from the state after the change.
#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    dispatcher: Dispatcher,
    state: GameState,
}

impl Room {
    #[must_use]
    pub fn new(id: RoomId, dispatcher: Dispatcher) -> Self {
        let state = dispatcher.new_table();
        Self {
            id,
            dispatcher,
            state,
        }
    }

    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::of(&self.state)
    }

    /// No seat is taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.seated_count() == 0
    }

    /// Accepting players: not started and a seat is free.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.lifecycle().is_open()
    }

    /// Seat a player in the first free seat.
    pub fn join(&mut self, name: &str) -> Result<(PlayerId, Vec<Outbound>), SessionError> {
        if self.state.started {
            return Err(SessionError::RoomFull(self.id));
        }
        let seat = PlayerId::both()
            .find(|&p| !self.state.is_seated(p))
            .ok_or(SessionError::RoomFull(self.id))?;

        let record = self.state.player_mut(seat);
        record.seated = true;
        record.name = name.to_owned();
        info!(room = %self.id, player = %seat, name, "player joined");
        Ok((seat, self.broadcast()))
    }

    /// Remove a player.
    ///
    /// Before the game starts the seat is freed together with the player's
    /// setup. During a game the game ends.
    pub fn leave(&mut self, player: PlayerId) -> Result<Vec<Outbound>, SessionError> {
        if !self.state.is_seated(player) {
            return Err(SessionError::NotSeated(player));
        }

        if !self.state.started {
            clear_setup(&mut self.state, player);
        } else if !self.state.ended {
            self.state.ended = true;
            info!(room = %self.id, %player, "game ended");
        }
        let record = self.state.player_mut(player);
        record.seated = false;
        record.name.clear();
        info!(room = %self.id, %player, "player left");
        Ok(self.broadcast())
    }

    /// Decode and apply one client action.
    ///
    /// Accepted actions produce a fresh view for every seated player;
    /// rejected ones produce a single reply to the actor.
    pub fn handle(&mut self, actor: PlayerId, envelope: Envelope) -> Vec<Outbound> {
        let result = Command::decode(&envelope.action, envelope.data)
            .and_then(|command| self.dispatcher.apply(&mut self.state, actor, &command));
        match result {
            Ok(()) => self.broadcast(),
            Err(err) => vec![Outbound::Rejected {
                target: actor,
                reply: ErrorReply::from(&err),
            }],
        }
    }

    /// What `player` currently sees.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> PlayerView {
        project(&self.state, self.dispatcher.catalog(), player)
    }

    fn broadcast(&self) -> Vec<Outbound> {
        PlayerId::both()
            .filter(|&p| self.state.is_seated(p))
            .map(|p| Outbound::View {
                target: p,
                view: self.view(p),
            })
            .collect()
    }
}
