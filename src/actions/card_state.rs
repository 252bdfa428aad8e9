//! In-place card state changes: tap, reveal, modifiers.

use super::command::{AddModifier, CardTarget, RemoveModifier};
use super::dispatcher::{card_mut, locate, require_area, Dispatcher};
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::Area;

/// Areas where a card can be addressed for in-place changes.
const IN_PLAY: [Area; 8] = [
    Area::Hand,
    Area::Base,
    Area::Hero,
    Area::Legend,
    Area::Battlefield1,
    Area::Battlefield2,
    Area::PendingSpells,
    Area::RuneArea,
];

impl Dispatcher {
    pub(super) fn set_tapped(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &CardTarget,
        tapped: bool,
    ) -> Result<(), ActionError> {
        let action = if tapped { "tapCard" } else { "untapCard" };
        require_area(action, p.area, &IN_PLAY)?;
        locate(state, actor, p.area, p.card_instance_id)?;

        let c = card_mut(state, p.card_instance_id)?;
        c.tapped = tapped;
        let owner = c.owner;
        if self.is_rune(c) {
            self.sort_rune_area(state, owner);
        }
        Ok(())
    }

    pub(super) fn reveal_card(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &CardTarget,
    ) -> Result<(), ActionError> {
        require_area("revealCard", p.area, &IN_PLAY)?;
        locate(state, actor, p.area, p.card_instance_id)?;
        card_mut(state, p.card_instance_id)?.face_up = true;
        Ok(())
    }

    pub(super) fn add_modifier(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &AddModifier,
    ) -> Result<(), ActionError> {
        require_area("addModifier", p.area, &IN_PLAY)?;
        locate(state, actor, p.area, p.card_instance_id)?;
        card_mut(state, p.card_instance_id)?
            .modifiers
            .push(p.modifier.clone());
        Ok(())
    }

    pub(super) fn remove_modifier(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &RemoveModifier,
    ) -> Result<(), ActionError> {
        require_area("removeModifier", p.area, &IN_PLAY)?;
        locate(state, actor, p.area, p.card_instance_id)?;
        let c = card_mut(state, p.card_instance_id)?;
        let len = c.modifiers.len();
        c.remove_modifier(p.modifier_index)
            .map(|_| ())
            .ok_or(ActionError::IndexOutOfRange {
                index: p.modifier_index,
                len,
                area: "modifiers",
            })
    }
}
