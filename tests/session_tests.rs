//! Room registry tests: creation, discovery, routing and teardown.

mod common;

use std::sync::Arc;

use common::{catalog, decks, P1, P2};
use rune_table::{
    CardRegistry, DeckLibrary, Dispatcher, Envelope, ErrorKind, Lifecycle, Outbound, RoomId,
    RoomRegistry, SessionError, TableConfig,
};
use serde_json::json;

fn registry() -> RoomRegistry {
    RoomRegistry::new(common::dispatcher())
}

fn views(msgs: &[Outbound]) -> usize {
    msgs.iter().filter(|m| m.as_view().is_some()).count()
}

/// Drive both seats of `room` through setup to an active game.
async fn start(registry: &RoomRegistry, room: RoomId) {
    for (seat, deck) in [(P1, "jinx"), (P2, "vi")] {
        let msgs = registry
            .submit(room, seat, Envelope::new("selectDeck", json!({"deckId": deck})))
            .await
            .unwrap();
        let view = msgs
            .iter()
            .find(|m| m.target() == seat)
            .and_then(Outbound::as_view)
            .unwrap();
        let hero = view.hero_pool[0].instance_id;
        let field = view.battlefield_pool[0].instance_id;

        registry
            .submit(room, seat, Envelope::new("selectHero", json!({"cardInstanceId": hero})))
            .await
            .unwrap();
        registry
            .submit(
                room,
                seat,
                Envelope::new(
                    "selectBattlefield",
                    json!({"battlefieldIndex": seat.index(), "cardInstanceId": field}),
                ),
            )
            .await
            .unwrap();
    }
    let msgs = registry.submit(room, P1, Envelope::bare("startGame")).await.unwrap();
    assert_eq!(views(&msgs), 2);
}

// =============================================================================
// Room Management Tests
// =============================================================================

/// Rooms cannot be opened without a catalog.
#[tokio::test]
async fn test_create_requires_catalog() {
    let dispatcher = Dispatcher::new(
        TableConfig::default(),
        Arc::new(CardRegistry::new()),
        Arc::new(DeckLibrary::new()),
    );
    let registry = RoomRegistry::new(dispatcher);
    assert_eq!(registry.create().await, Err(SessionError::CatalogUnavailable));
    assert!(registry.is_empty().await);
}

/// Players are matched into the same open room until it fills.
#[tokio::test]
async fn test_join_any_pairs_players() {
    common::init_tracing();
    let registry = registry();

    let (room_a, seat_a, msgs) = registry.join_any("jinx").await.unwrap();
    assert_eq!(seat_a, P1);
    assert_eq!(views(&msgs), 1);

    let (room_b, seat_b, msgs) = registry.join_any("vi").await.unwrap();
    assert_eq!(room_b, room_a);
    assert_eq!(seat_b, P2);
    assert_eq!(views(&msgs), 2);
    assert_eq!(registry.find_available_room().await, None);

    let (room_c, seat_c, _) = registry.join_any("ekko").await.unwrap();
    assert_ne!(room_c, room_a);
    assert_eq!(seat_c, P1);
    assert_eq!(registry.len().await, 2);
}

/// Explicit joins to a full or unknown room fail.
#[tokio::test]
async fn test_join_errors() {
    let registry = registry();
    let room = registry.create().await.unwrap();
    registry.join(room, "jinx").await.unwrap();
    registry.join(room, "vi").await.unwrap();

    assert_eq!(registry.join(room, "ekko").await.unwrap_err(), SessionError::RoomFull(room));

    let missing = RoomId::new();
    assert_eq!(
        registry.join(missing, "ekko").await.unwrap_err(),
        SessionError::RoomNotFound(missing)
    );
    assert!(registry
        .submit(missing, P1, Envelope::bare("drawCard"))
        .await
        .is_err());
}

// =============================================================================
// Routing Tests
// =============================================================================

/// Accepted actions reach every seat; rejections reach the actor only.
#[tokio::test]
async fn test_broadcast_and_rejection() {
    let registry = registry();
    let room = registry.create().await.unwrap();
    registry.join(room, "jinx").await.unwrap();
    registry.join(room, "vi").await.unwrap();
    start(&registry, room).await;

    let msgs = registry.submit(room, P2, Envelope::bare("drawCard")).await.unwrap();
    assert_eq!(views(&msgs), 2);
    for msg in &msgs {
        let view = msg.as_view().unwrap();
        assert_eq!(view.observer, msg.target());
        assert_eq!(view.seats[P2.index()].hand_count, 5);
    }

    let msgs = registry
        .submit(room, P1, Envelope::new("recycleRune", json!({"runeIndex": 9})))
        .await
        .unwrap();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].target(), P1);
    assert_eq!(msgs[0].as_rejection().unwrap().kind, ErrorKind::NotFound);
}

/// Broadcasts are computed after the action was applied.
#[tokio::test]
async fn test_views_reflect_post_action_state() {
    let registry = registry();
    let room = registry.create().await.unwrap();
    registry.join(room, "jinx").await.unwrap();
    registry.join(room, "vi").await.unwrap();
    start(&registry, room).await;

    let view = registry.view(room, P1).await.unwrap();
    let card = view.hand[0].instance_id;
    let msgs = registry
        .submit(room, P1, Envelope::new("discardCard", json!({"cardInstanceId": card})))
        .await
        .unwrap();

    let opponent_view = msgs
        .iter()
        .find(|m| m.target() == P2)
        .and_then(Outbound::as_view)
        .unwrap();
    assert_eq!(opponent_view.seats[P1.index()].graveyard[0].instance_id, card);
    assert_eq!(opponent_view.seats[P1.index()].hand_count, 3);
}

/// Rooms run independently under concurrent load.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_rooms() {
    let registry = Arc::new(RoomRegistry::new(Dispatcher::new(
        TableConfig::default().with_seed(9),
        Arc::new(catalog()),
        Arc::new(decks()),
    )));

    let mut rooms = Vec::new();
    for _ in 0..4 {
        let room = registry.create().await.unwrap();
        registry.join(room, "a").await.unwrap();
        registry.join(room, "b").await.unwrap();
        start(&registry, room).await;
        rooms.push(room);
    }

    let mut tasks = Vec::new();
    for room in rooms.iter().copied() {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            for _ in 0..10 {
                registry.submit(room, P1, Envelope::bare("drawCard")).await.unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    for room in rooms {
        let view = registry.view(room, P1).await.unwrap();
        assert_eq!(view.hand.len(), 14);
        assert_eq!(view.opponent().hand_count, 4);
    }
}

// =============================================================================
// Leave Tests
// =============================================================================

/// Leaving mid-game ends it; the last player out closes the room.
#[tokio::test]
async fn test_leave_ends_game_and_closes_room() {
    let registry = registry();
    let room = registry.create().await.unwrap();
    registry.join(room, "jinx").await.unwrap();
    registry.join(room, "vi").await.unwrap();
    start(&registry, room).await;

    let msgs = registry.leave(room, P2).await.unwrap();
    assert_eq!(msgs.len(), 1);
    assert_eq!(msgs[0].as_view().unwrap().lifecycle, Lifecycle::Ended);

    let msgs = registry.submit(room, P1, Envelope::bare("drawCard")).await.unwrap();
    assert_eq!(msgs[0].as_rejection().unwrap().kind, ErrorKind::InvalidState);
    assert_eq!(registry.find_available_room().await, None);

    assert_eq!(
        registry.leave(room, P2).await.unwrap_err(),
        SessionError::NotSeated(P2)
    );
    registry.leave(room, P1).await.unwrap();
    assert!(!registry.contains(room).await);
}

/// Leaving during setup frees the seat and drops the leaver's cards.
#[tokio::test]
async fn test_leave_during_setup() {
    let registry = registry();
    let room = registry.create().await.unwrap();
    registry.join(room, "jinx").await.unwrap();
    registry.join(room, "vi").await.unwrap();
    registry
        .submit(room, P2, Envelope::new("selectDeck", json!({"deckId": "vi"})))
        .await
        .unwrap();

    registry.leave(room, P2).await.unwrap();
    assert_eq!(registry.find_available_room().await, Some(room));

    let view = registry.view(room, P1).await.unwrap();
    assert_eq!(view.lifecycle, Lifecycle::Lobby { seated: 1 });
    let seat = view.opponent();
    assert!(!seat.seated && !seat.deck_selected);
    assert_eq!(seat.main_deck_count, 0);
    assert!(seat.legend.is_none());

    let (seat, _) = registry.join(room, "ekko").await.unwrap();
    assert_eq!(seat, P2);
}
