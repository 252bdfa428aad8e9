//! Card transfers between zones: draw, play, move, discard, deck placement,
//! token creation.
//!
//! Each destination has its own entry policy for `tapped` and `face_up`;
//! those policies are applied here and nowhere else.

use super::command::{CreateToken, DeckTransfer, DiscardCard, MoveCard, PlayCard};
use super::dispatcher::{card, card_mut, locate, require_area, Dispatcher};
use crate::cards::{CardId, TokenProfile};
use crate::core::entity::InstanceId;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::{Area, Zone, ZonePosition};

/// Areas `moveCard` may take a card from.
const MOVE_SOURCES: [Area; 8] = [
    Area::Hand,
    Area::Graveyard,
    Area::MainDeck,
    Area::Base,
    Area::Battlefield1,
    Area::Battlefield2,
    Area::Hero,
    Area::PendingSpells,
];

/// Search order for `discardCard` without an explicit area.
const DISCARD_PRECEDENCE: [Area; 6] = [
    Area::Hand,
    Area::Base,
    Area::Hero,
    Area::PendingSpells,
    Area::Battlefield1,
    Area::Battlefield2,
];

/// Name used for tokens created without one.
pub const DEFAULT_TOKEN_NAME: &str = "Token";

/// Catalog id recorded on tokens created without a template card.
pub const DEFAULT_TOKEN_CARD_ID: &str = "token";

/// Fail if a face-down card already sits on either side of `field`.
fn ensure_no_face_down(state: &GameState, field: u8, entering: InstanceId) -> Result<(), ActionError> {
    let occupied = PlayerId::both().any(|side| {
        state
            .cards_in(Zone::units(field, side))
            .any(|c| !c.face_up && c.instance_id != entering)
    });
    if occupied {
        Err(ActionError::FaceDownOccupied { field })
    } else {
        Ok(())
    }
}

/// Insertion position from an optional client index, validated against the
/// destination size once `id` has left its current place.
fn insert_position(
    state: &GameState,
    dest: Zone,
    id: InstanceId,
    index: Option<usize>,
    area: Area,
) -> Result<ZonePosition, ActionError> {
    let Some(index) = index else {
        return Ok(ZonePosition::Top);
    };
    let len = state.zones.len(dest) - usize::from(state.zones.is_in(id, dest));
    if index > len {
        return Err(ActionError::IndexOutOfRange {
            index,
            len,
            area: area.as_str(),
        });
    }
    Ok(ZonePosition::Index(index))
}

/// The card a `moveCard` names and the zone it leaves.
///
/// Deck contents are never shown, so a `mainDeck` source may be picked by
/// position alone. Elsewhere the id is required and `fromIndex`, when given,
/// must point at it.
fn move_source(
    state: &GameState,
    actor: PlayerId,
    p: &MoveCard,
) -> Result<(InstanceId, Zone), ActionError> {
    let area = p.from_area;
    let out_of_range = |index: usize, zone: Zone| ActionError::IndexOutOfRange {
        index,
        len: state.zones.len(zone),
        area: area.as_str(),
    };

    let Some(id) = p.card_instance_id else {
        let zone = area.zone_for(actor);
        return match (area, p.from_index) {
            (Area::MainDeck, Some(index)) => state
                .zones
                .at(zone, index)
                .map(|id| (id, zone))
                .ok_or_else(|| out_of_range(index, zone)),
            _ => Err(ActionError::MalformedPayload {
                action: "moveCard",
                reason: format!("cardInstanceId is required when moving from {}", area.as_str()),
            }),
        };
    };

    let from = locate(state, actor, area, id)?;
    if let Some(index) = p.from_index {
        match state.zones.at(from, index) {
            Some(found) if found == id => {}
            Some(_) => {
                return Err(ActionError::CardNotFound {
                    instance: id,
                    area: area.as_str(),
                })
            }
            None => return Err(out_of_range(index, from)),
        }
    }
    Ok((id, from))
}

impl Dispatcher {
    pub(super) fn draw_card(&self, state: &mut GameState, actor: PlayerId) -> Result<(), ActionError> {
        if let Some(id) = state.draw(Zone::MainDeck(actor), Zone::Hand(actor)) {
            card_mut(state, id)?.tapped = false;
        }
        Ok(())
    }

    pub(super) fn play_card(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &PlayCard,
    ) -> Result<(), ActionError> {
        let id = p.card_instance_id;
        let visible = p.visible_to_opponent;
        locate(state, actor, Area::Hand, id)?;

        let card_ref = card(state, id)?;
        let unit = self.is_unit(card_ref);
        let owner = card_ref.owner;
        let token = card_ref.is_token();

        match p.target_area {
            Area::Battlefield1 | Area::Battlefield2 => {
                let field = p.target_area.field().unwrap_or_default();
                if !visible {
                    ensure_no_face_down(state, field, id)?;
                }
                state.zones.move_to(id, Zone::units(field, actor), ZonePosition::Top);
                let c = card_mut(state, id)?;
                c.face_up = visible;
                c.modifiers.clear();
                if unit {
                    // face-down placements stay upright
                    c.tapped = visible;
                }
            }
            Area::Base => {
                state.zones.move_to(id, Zone::Base(owner), ZonePosition::Top);
                let c = card_mut(state, id)?;
                c.face_up = visible;
                if unit {
                    c.tapped = visible;
                }
            }
            Area::Graveyard => {
                if token {
                    return Err(ActionError::TokenToGraveyard(id));
                }
                state.zones.move_to(id, Zone::Graveyard(owner), ZonePosition::Top);
                card_mut(state, id)?.reset();
            }
            Area::PendingSpells => {
                state.zones.move_to(id, Zone::PendingSpells, ZonePosition::Top);
                let c = card_mut(state, id)?;
                c.acting_player = Some(actor);
                c.face_up = visible;
            }
            other => {
                return Err(ActionError::UnsupportedTarget {
                    action: "playCard",
                    area: other.as_str(),
                })
            }
        }
        Ok(())
    }

    pub(super) fn move_card(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &MoveCard,
    ) -> Result<(), ActionError> {
        let visible = p.visible_to_opponent;
        require_area("moveCard", p.from_area, &MOVE_SOURCES)?;
        let (id, from) = move_source(state, actor, p)?;

        let card_ref = card(state, id)?;
        let unit = self.is_unit(card_ref);
        let owner = card_ref.owner;

        let (dest, position) = match p.to_area {
            Area::Hand => {
                let dest = Zone::Hand(owner);
                (dest, insert_position(state, dest, id, p.to_index, p.to_area)?)
            }
            Area::Graveyard => {
                if card_ref.is_token() {
                    return Err(ActionError::TokenToGraveyard(id));
                }
                let dest = Zone::Graveyard(owner);
                (dest, insert_position(state, dest, id, p.to_index, p.to_area)?)
            }
            Area::MainDeckTop => (Zone::MainDeck(owner), ZonePosition::Top),
            Area::MainDeckBottom => (Zone::MainDeck(owner), ZonePosition::Bottom),
            Area::Base => {
                let dest = Zone::Base(owner);
                (dest, insert_position(state, dest, id, p.to_index, p.to_area)?)
            }
            Area::Battlefield1 | Area::Battlefield2 => {
                let field = p.to_area.field().unwrap_or_default();
                if !visible {
                    ensure_no_face_down(state, field, id)?;
                }
                let dest = Zone::units(field, actor);
                (dest, insert_position(state, dest, id, p.to_index, p.to_area)?)
            }
            Area::Hero => {
                let dest = Zone::HeroSlot(owner);
                if state.zones.iter(dest).any(|other| other != id) {
                    return Err(ActionError::SlotOccupied("hero"));
                }
                (dest, ZonePosition::Top)
            }
            Area::PendingSpells => {
                let dest = Zone::PendingSpells;
                (dest, insert_position(state, dest, id, p.to_index, p.to_area)?)
            }
            other => {
                return Err(ActionError::UnsupportedTarget {
                    action: "moveCard",
                    area: other.as_str(),
                })
            }
        };

        state.zones.move_to(id, dest, position);

        let c = card_mut(state, id)?;
        if from == Zone::PendingSpells && dest != Zone::PendingSpells {
            c.acting_player = None;
        }
        match p.to_area {
            Area::Hand => c.tapped = false,
            Area::Graveyard => c.reset(),
            Area::Base => {
                c.face_up = true;
                if unit {
                    c.tapped = true;
                }
            }
            Area::Battlefield1 | Area::Battlefield2 => {
                c.face_up = visible;
                if unit {
                    c.tapped = !(p.from_area == Area::Hand && !visible);
                }
            }
            Area::PendingSpells => {
                c.acting_player = Some(actor);
                c.face_up = visible;
            }
            _ => {}
        }
        Ok(())
    }

    pub(super) fn discard_card(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &DiscardCard,
    ) -> Result<(), ActionError> {
        let id = p.card_instance_id;
        let candidates: &[Area] = match &p.from_area {
            Some(area) => {
                require_area("discardCard", *area, &DISCARD_PRECEDENCE)?;
                std::slice::from_ref(area)
            }
            None => &DISCARD_PRECEDENCE,
        };

        let found = candidates
            .iter()
            .any(|&area| locate(state, actor, area, id).is_ok());
        if !found {
            return Err(ActionError::CardNotFound {
                instance: id,
                area: p.from_area.map_or("any area", Area::as_str),
            });
        }

        let (token, owner) = {
            let c = card(state, id)?;
            (c.is_token(), c.owner)
        };
        if token {
            state.destroy(id);
            return Ok(());
        }
        state.zones.move_to(id, Zone::Graveyard(owner), ZonePosition::Top);
        let c = card_mut(state, id)?;
        c.reset();
        c.acting_player = None;
        Ok(())
    }

    pub(super) fn deck_transfer(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &DeckTransfer,
        bottom: bool,
    ) -> Result<(), ActionError> {
        let action = if bottom {
            "moveCardToDeckBottom"
        } else {
            "moveCardToDeckTop"
        };
        let area = p.from_area.unwrap_or(Area::Hand);
        require_area(action, area, &[Area::Hand])?;
        locate(state, actor, area, p.card_instance_id)?;

        let owner = card(state, p.card_instance_id)?.owner;
        let position = if bottom {
            ZonePosition::Bottom
        } else {
            ZonePosition::Top
        };
        state
            .zones
            .move_to(p.card_instance_id, Zone::MainDeck(owner), position);
        Ok(())
    }

    pub(super) fn create_token(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &CreateToken,
    ) -> Result<(), ActionError> {
        let area = p.target_area.unwrap_or(Area::Hand);
        require_area(
            "createToken",
            area,
            &[Area::Hand, Area::Base, Area::Battlefield1, Area::Battlefield2],
        )?;

        let template = p.token_card_id.as_ref().and_then(|id| self.catalog.get(id));
        let profile = TokenProfile {
            name: p
                .name
                .clone()
                .or_else(|| template.map(|t| t.name.clone()))
                .unwrap_or_else(|| DEFAULT_TOKEN_NAME.to_owned()),
            power: p.power.or_else(|| template.and_then(|t| t.power)).unwrap_or(1),
        };
        let card_id = p
            .token_card_id
            .clone()
            .unwrap_or_else(|| CardId::new(DEFAULT_TOKEN_CARD_ID));

        state.spawn_token(card_id, actor, profile, area.zone_for(actor), ZonePosition::Top);
        Ok(())
    }
}
