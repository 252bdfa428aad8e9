//! Rune deck and rune area handling.
//!
//! The rune area is kept sorted: untapped runes first, then by the
//! configured color priority. The sort is stable, so runes of the same
//! state and color keep their relative order.

use super::command::RecycleRune;
use super::dispatcher::{card_mut, Dispatcher};
use crate::core::error::ActionError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::zones::{Zone, ZonePosition};

impl Dispatcher {
    /// Re-sort `player`'s rune area by (tapped, color ordinal).
    pub fn sort_rune_area(&self, state: &mut GameState, player: PlayerId) {
        let zone = Zone::RuneArea(player);
        let mut keyed: Vec<_> = state
            .cards_in(zone)
            .map(|c| {
                let color = self.definition(c).and_then(|d| d.primary_color());
                ((c.tapped, self.config.color_ordinal(color)), c.instance_id)
            })
            .collect();
        keyed.sort_by_key(|(key, _)| *key);
        state
            .zones
            .reorder(zone, keyed.into_iter().map(|(_, id)| id).collect());
    }

    pub(super) fn draw_rune(&self, state: &mut GameState, actor: PlayerId) -> Result<(), ActionError> {
        let Some(id) = state.draw(Zone::RuneDeck(actor), Zone::RuneArea(actor)) else {
            return Ok(());
        };
        card_mut(state, id)?.tapped = false;
        self.sort_rune_area(state, actor);
        Ok(())
    }

    pub(super) fn recycle_rune(
        &self,
        state: &mut GameState,
        actor: PlayerId,
        p: &RecycleRune,
    ) -> Result<(), ActionError> {
        let area = Zone::RuneArea(actor);
        let id = state
            .zones
            .at(area, p.rune_index)
            .ok_or(ActionError::IndexOutOfRange {
                index: p.rune_index,
                len: state.zones.len(area),
                area: "runeArea",
            })?;
        state
            .zones
            .move_to(id, Zone::RuneDeck(actor), ZonePosition::Bottom);
        Ok(())
    }

    pub(super) fn untap_all(&self, state: &mut GameState, actor: PlayerId) -> Result<(), ActionError> {
        let own_zones = [
            Zone::Hand(actor),
            Zone::Base(actor),
            Zone::HeroSlot(actor),
            Zone::LegendSlot(actor),
            Zone::RuneArea(actor),
            Zone::units(0, actor),
            Zone::units(1, actor),
        ];
        let zones = &state.zones;
        let mut ids: Vec<_> = own_zones.iter().flat_map(|&zone| zones.iter(zone)).collect();
        ids.extend(
            state
                .cards_in(Zone::PendingSpells)
                .filter(|c| c.acting_player == Some(actor))
                .map(|c| c.instance_id),
        );

        for id in ids {
            card_mut(state, id)?.tapped = false;
        }
        self.sort_rune_area(state, actor);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::actions::Command;
    use crate::cards::{CardDefinition, CardId, CardKind, CardRegistry, Color, DeckLibrary};
    use crate::core::config::TableConfig;
    use crate::core::entity::InstanceId;

    const P1: PlayerId = PlayerId::FIRST;

    fn setup() -> (Dispatcher, GameState) {
        let catalog: CardRegistry = [
            CardDefinition::new("RR", "Fury", CardKind::Rune).with_color(Color::Red),
            CardDefinition::new("RB", "Calm", CardKind::Rune).with_color(Color::Blue),
            CardDefinition::new("RC", "Plain", CardKind::Rune).with_color(Color::Colorless),
            CardDefinition::new("RX", "Odd", CardKind::Rune),
        ]
        .into_iter()
        .collect();
        let d = Dispatcher::new(
            TableConfig::default().with_seed(8),
            Arc::new(catalog),
            Arc::new(DeckLibrary::new()),
        );
        let mut state = d.new_table();
        for p in PlayerId::both() {
            state.players[p].seated = true;
        }
        state.started = true;
        (d, state)
    }

    fn rune(state: &mut GameState, card_id: &str, zone: Zone) -> InstanceId {
        state.spawn(CardId::new(card_id), P1, zone, ZonePosition::Top)
    }

    #[test]
    fn test_sort_orders_tapped_then_color() {
        let (d, mut state) = setup();
        let area = Zone::RuneArea(P1);
        let odd = rune(&mut state, "RX", area);
        let colorless = rune(&mut state, "RC", area);
        let red_tapped = rune(&mut state, "RR", area);
        let blue = rune(&mut state, "RB", area);
        let red = rune(&mut state, "RR", area);
        state.card_mut(red_tapped).unwrap().tapped = true;

        d.sort_rune_area(&mut state, P1);

        assert_eq!(
            state.zones.ids(area),
            vec![red, blue, colorless, odd, red_tapped]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let (d, mut state) = setup();
        let area = Zone::RuneArea(P1);
        let first = rune(&mut state, "RB", area);
        let second = rune(&mut state, "RB", area);
        d.sort_rune_area(&mut state, P1);
        assert_eq!(state.zones.ids(area), vec![first, second]);
    }

    #[test]
    fn test_draw_rune_untaps_and_sorts() {
        let (d, mut state) = setup();
        let blue_in_area = rune(&mut state, "RB", Zone::RuneArea(P1));
        let red = rune(&mut state, "RR", Zone::RuneDeck(P1));
        state.card_mut(red).unwrap().tapped = true;

        d.apply(&mut state, P1, &Command::DrawRune).unwrap();

        assert!(!state.card(red).unwrap().tapped);
        assert_eq!(state.zones.ids(Zone::RuneArea(P1)), vec![red, blue_in_area]);
    }

    #[test]
    fn test_draw_rune_empty_is_noop() {
        let (d, mut state) = setup();
        let before = state.clone();
        d.apply(&mut state, P1, &Command::DrawRune).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_recycle_rune_to_bottom() {
        let (d, mut state) = setup();
        let deck_card = rune(&mut state, "RC", Zone::RuneDeck(P1));
        let a = rune(&mut state, "RR", Zone::RuneArea(P1));
        let b = rune(&mut state, "RB", Zone::RuneArea(P1));

        d.apply(&mut state, P1, &Command::RecycleRune(RecycleRune { rune_index: 1 }))
            .unwrap();

        assert_eq!(state.zones.ids(Zone::RuneArea(P1)), vec![a]);
        assert_eq!(state.zones.ids(Zone::RuneDeck(P1)), vec![b, deck_card]);
    }

    #[test]
    fn test_recycle_rune_bad_index() {
        let (d, mut state) = setup();
        let err = d
            .apply(&mut state, P1, &Command::RecycleRune(RecycleRune { rune_index: 0 }))
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::IndexOutOfRange { index: 0, len: 0, area: "runeArea" }
        );
    }

    #[test]
    fn test_untap_all_covers_own_zones_only() {
        let (d, mut state) = setup();
        let p2 = PlayerId::SECOND;
        let own = [
            rune(&mut state, "RR", Zone::RuneArea(P1)),
            rune(&mut state, "RX", Zone::Base(P1)),
            rune(&mut state, "RX", Zone::units(1, P1)),
            rune(&mut state, "RX", Zone::LegendSlot(P1)),
            rune(&mut state, "RX", Zone::PendingSpells),
        ];
        state.card_mut(own[4]).unwrap().acting_player = Some(P1);
        let theirs = state.spawn(CardId::new("RX"), p2, Zone::units(1, p2), ZonePosition::Top);
        let theirs_pending = state.spawn(CardId::new("RX"), p2, Zone::PendingSpells, ZonePosition::Top);
        state.card_mut(theirs_pending).unwrap().acting_player = Some(p2);
        for id in own.iter().copied().chain([theirs, theirs_pending]) {
            state.card_mut(id).unwrap().tapped = true;
        }

        d.apply(&mut state, P1, &Command::UntapAllCards).unwrap();

        for id in own {
            assert!(!state.card(id).unwrap().tapped, "{id} still tapped");
        }
        assert!(state.card(theirs).unwrap().tapped);
        assert!(state.card(theirs_pending).unwrap().tapped);
    }
}
