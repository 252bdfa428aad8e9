//! Shared fixture: a small catalog, two decks and tables at each stage.
#![allow(dead_code)]

use std::sync::Arc;

use rune_table::{
    CardDefinition, CardId, CardKind, CardRegistry, Color, Command, DeckEntry, DeckLibrary,
    DeckList, Dispatcher, GameState, InstanceId, PlayerId, TableConfig, Zone,
};
use serde_json::Value;

pub const P1: PlayerId = PlayerId::FIRST;
pub const P2: PlayerId = PlayerId::SECOND;

/// Cards used by both decks.
pub fn catalog() -> CardRegistry {
    [
        CardDefinition::new("L-JINX", "Jinx - Loose Cannon", CardKind::Legend),
        CardDefinition::new("L-VI", "Vi - Piltover Enforcer", CardKind::Legend).with_affiliation("Vi"),
        CardDefinition::new("H-JINX", "Jinx", CardKind::HeroUnit)
            .with_affiliation("Jinx")
            .with_power(3),
        CardDefinition::new("H-VI", "Vi", CardKind::HeroUnit)
            .with_affiliation("Vi")
            .with_power(4),
        CardDefinition::new("U-SCRAP", "Scrapper", CardKind::Unit).with_power(2),
        CardDefinition::new("U-GUARD", "Warden", CardKind::Unit).with_power(3),
        CardDefinition::new("S-ZAP", "Zap", CardKind::Spell),
        CardDefinition::new("R-FURY", "Fury Rune", CardKind::Rune).with_color(Color::Red),
        CardDefinition::new("R-CALM", "Calm Rune", CardKind::Rune).with_color(Color::Blue),
        CardDefinition::new("B-BRIDGE", "Bridge", CardKind::Battlefield),
        CardDefinition::new("B-DOCKS", "Docks", CardKind::Battlefield),
        CardDefinition::new("B-ALLEY", "Alley", CardKind::Battlefield),
        CardDefinition::new("T-RECRUIT", "Recruit", CardKind::TokenUnit).with_power(1),
    ]
    .into_iter()
    .collect()
}

/// 40-card main decks with their hero exactly once.
pub fn decks() -> DeckLibrary {
    let jinx = DeckList {
        id: "jinx".into(),
        name: "Zaun Chaos".into(),
        legend: CardId::new("L-JINX"),
        cards: vec![
            DeckEntry::new("H-JINX", 1),
            DeckEntry::new("H-VI", 1),
            DeckEntry::new("U-SCRAP", 20),
            DeckEntry::new("S-ZAP", 18),
        ],
        runes: vec![DeckEntry::new("R-FURY", 6), DeckEntry::new("R-CALM", 6)],
        battlefields: vec![
            CardId::new("B-BRIDGE"),
            CardId::new("B-DOCKS"),
            CardId::new("B-ALLEY"),
        ],
    };
    let vi = DeckList {
        id: "vi".into(),
        name: "Piltover Order".into(),
        legend: CardId::new("L-VI"),
        cards: vec![
            DeckEntry::new("H-VI", 1),
            DeckEntry::new("U-GUARD", 39),
        ],
        runes: vec![DeckEntry::new("R-CALM", 12)],
        battlefields: vec![CardId::new("B-DOCKS"), CardId::new("B-ALLEY")],
    };
    [jinx, vi].into_iter().collect()
}

pub fn dispatcher() -> Dispatcher {
    dispatcher_with(TableConfig::default().with_seed(42))
}

pub fn dispatcher_with(config: TableConfig) -> Dispatcher {
    Dispatcher::new(config, Arc::new(catalog()), Arc::new(decks()))
}

/// Decode and apply a wire action.
pub fn act(
    d: &Dispatcher,
    state: &mut GameState,
    actor: PlayerId,
    action: &str,
    data: Value,
) -> Result<(), rune_table::ActionError> {
    let command = Command::decode(action, data)?;
    d.apply(state, actor, &command)
}

/// Both seats taken, nothing selected.
pub fn lobby(d: &Dispatcher) -> GameState {
    let mut state = d.new_table();
    for (p, name) in PlayerId::both().zip(["jinx", "vi"]) {
        let record = state.player_mut(p);
        record.seated = true;
        record.name = name.to_owned();
    }
    state
}

/// Instance of `card_id` in `zone`.
pub fn find(state: &GameState, zone: Zone, card_id: &str) -> Option<InstanceId> {
    state
        .cards_in(zone)
        .find(|c| c.card_id.as_str() == card_id)
        .map(|c| c.instance_id)
}

/// Pick deck, first hero candidate and first battlefield candidate.
pub fn prepare(d: &Dispatcher, state: &mut GameState, player: PlayerId, deck: &str) {
    act(d, state, player, "selectDeck", serde_json::json!({ "deckId": deck })).unwrap();
    let hero = state.zones.bottom(Zone::HeroPool(player)).unwrap();
    let field = state.zones.bottom(Zone::BattlefieldPool(player)).unwrap();
    act(d, state, player, "selectHero", serde_json::json!({ "cardInstanceId": hero })).unwrap();
    act(
        d,
        state,
        player,
        "selectBattlefield",
        serde_json::json!({ "battlefieldIndex": player.index(), "cardInstanceId": field }),
    )
    .unwrap();
}

/// Both players set up, game not started.
pub fn ready_table(d: &Dispatcher) -> GameState {
    let mut state = lobby(d);
    prepare(d, &mut state, P1, "jinx");
    prepare(d, &mut state, P2, "vi");
    state
}

/// A started game with opening hands drawn.
pub fn active_table(d: &Dispatcher) -> GameState {
    let mut state = ready_table(d);
    act(d, &mut state, P1, "startGame", Value::Null).unwrap();
    state
}

/// Route engine logs to the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
