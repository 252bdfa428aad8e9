//! The closed action vocabulary and its typed payloads.
//!
//! Clients send `{action, data}`. [`Command::decode`] turns that pair into a
//! `Command`; names outside the vocabulary fail with `UnknownAction` and
//! payloads that do not fit fail with `MalformedPayload`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::{CardId, Modifier};
use crate::core::entity::InstanceId;
use crate::core::error::ActionError;
use crate::zones::Area;

fn visible_default() -> bool {
    true
}

/// Play a card from hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayCard {
    pub card_instance_id: InstanceId,
    pub target_area: Area,
    #[serde(default = "visible_default")]
    pub visible_to_opponent: bool,
}

/// Generic zone-to-zone transfer.
///
/// Main-deck cards are addressed by `fromIndex` alone (0 is the bottom);
/// every other source needs `cardInstanceId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_instance_id: Option<InstanceId>,
    pub from_area: Area,
    pub to_area: Area,
    #[serde(default)]
    pub from_index: Option<usize>,
    #[serde(default)]
    pub to_index: Option<usize>,
    #[serde(default = "visible_default")]
    pub visible_to_opponent: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscardCard {
    pub card_instance_id: InstanceId,
    /// Search only this area instead of the default precedence.
    #[serde(default)]
    pub from_area: Option<Area>,
}

/// A card addressed by area, for tap/untap/reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTarget {
    pub card_instance_id: InstanceId,
    pub area: Area,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecycleRune {
    pub rune_index: usize,
}

/// Hand card to the top or bottom of the main deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckTransfer {
    pub card_instance_id: InstanceId,
    #[serde(default)]
    pub from_area: Option<Area>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScore {
    pub delta: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddModifier {
    pub card_instance_id: InstanceId,
    pub area: Area,
    pub modifier: Modifier,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveModifier {
    pub card_instance_id: InstanceId,
    pub area: Area,
    pub modifier_index: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToken {
    #[serde(default)]
    pub token_card_id: Option<CardId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub power: Option<u32>,
    /// `hand` (default), `base`, `battlefield1` or `battlefield2`.
    #[serde(default)]
    pub target_area: Option<Area>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDeck {
    pub deck_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectHero {
    pub card_instance_id: InstanceId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectBattlefield {
    pub battlefield_index: usize,
    pub card_instance_id: InstanceId,
}

/// Every action a client can submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    DrawCard,
    DrawRune,
    PlayCard(PlayCard),
    MoveCard(MoveCard),
    DiscardCard(DiscardCard),
    TapCard(CardTarget),
    UntapCard(CardTarget),
    UntapAllCards,
    RevealCard(CardTarget),
    RecycleRune(RecycleRune),
    MoveCardToDeckTop(DeckTransfer),
    MoveCardToDeckBottom(DeckTransfer),
    ShuffleMainDeck,
    ShuffleRuneDeck,
    UpdateScore(UpdateScore),
    AddModifier(AddModifier),
    RemoveModifier(RemoveModifier),
    CreateToken(CreateToken),
    SelectDeck(SelectDeck),
    SelectHero(SelectHero),
    SelectBattlefield(SelectBattlefield),
    StartGame,
}

fn payload<T: DeserializeOwned>(action: &'static str, data: Value) -> Result<T, ActionError> {
    serde_json::from_value(data).map_err(|e| ActionError::MalformedPayload {
        action,
        reason: e.to_string(),
    })
}

/// Payload for actions whose fields are all optional; `null` means `{}`.
fn optional_payload<T: DeserializeOwned + Default>(
    action: &'static str,
    data: Value,
) -> Result<T, ActionError> {
    if data.is_null() {
        Ok(T::default())
    } else {
        payload(action, data)
    }
}

impl Command {
    /// Decode a wire action.
    ///
    /// ```
    /// use rune_table::actions::Command;
    /// use rune_table::core::ErrorKind;
    /// use serde_json::json;
    ///
    /// let cmd = Command::decode("updateScore", json!({"delta": -2})).unwrap();
    /// assert_eq!(cmd.name(), "updateScore");
    ///
    /// let err = Command::decode("castFireball", json!({})).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UnknownAction);
    /// ```
    pub fn decode(action: &str, data: Value) -> Result<Command, ActionError> {
        use Command as C;
        let command = match action {
            "drawCard" => C::DrawCard,
            "drawRune" => C::DrawRune,
            "playCard" => C::PlayCard(payload("playCard", data)?),
            "moveCard" => C::MoveCard(payload("moveCard", data)?),
            "discardCard" => C::DiscardCard(payload("discardCard", data)?),
            "tapCard" => C::TapCard(payload("tapCard", data)?),
            "untapCard" => C::UntapCard(payload("untapCard", data)?),
            "untapAllCards" => C::UntapAllCards,
            "revealCard" => C::RevealCard(payload("revealCard", data)?),
            "recycleRune" => C::RecycleRune(payload("recycleRune", data)?),
            "moveCardToDeckTop" => C::MoveCardToDeckTop(payload("moveCardToDeckTop", data)?),
            "moveCardToDeckBottom" => {
                C::MoveCardToDeckBottom(payload("moveCardToDeckBottom", data)?)
            }
            "shuffleMainDeck" => C::ShuffleMainDeck,
            "shuffleRuneDeck" => C::ShuffleRuneDeck,
            "updateScore" => C::UpdateScore(payload("updateScore", data)?),
            "addModifier" => C::AddModifier(payload("addModifier", data)?),
            "removeModifier" => C::RemoveModifier(payload("removeModifier", data)?),
            "createToken" => C::CreateToken(optional_payload("createToken", data)?),
            "selectDeck" => C::SelectDeck(payload("selectDeck", data)?),
            "selectHero" => C::SelectHero(payload("selectHero", data)?),
            "selectBattlefield" => C::SelectBattlefield(payload("selectBattlefield", data)?),
            "startGame" => C::StartGame,
            other => return Err(ActionError::UnknownAction(other.to_owned())),
        };
        Ok(command)
    }

    /// Wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        use Command as C;
        match self {
            C::DrawCard => "drawCard",
            C::DrawRune => "drawRune",
            C::PlayCard(_) => "playCard",
            C::MoveCard(_) => "moveCard",
            C::DiscardCard(_) => "discardCard",
            C::TapCard(_) => "tapCard",
            C::UntapCard(_) => "untapCard",
            C::UntapAllCards => "untapAllCards",
            C::RevealCard(_) => "revealCard",
            C::RecycleRune(_) => "recycleRune",
            C::MoveCardToDeckTop(_) => "moveCardToDeckTop",
            C::MoveCardToDeckBottom(_) => "moveCardToDeckBottom",
            C::ShuffleMainDeck => "shuffleMainDeck",
            C::ShuffleRuneDeck => "shuffleRuneDeck",
            C::UpdateScore(_) => "updateScore",
            C::AddModifier(_) => "addModifier",
            C::RemoveModifier(_) => "removeModifier",
            C::CreateToken(_) => "createToken",
            C::SelectDeck(_) => "selectDeck",
            C::SelectHero(_) => "selectHero",
            C::SelectBattlefield(_) => "selectBattlefield",
            C::StartGame => "startGame",
        }
    }

    /// Setup actions run before the game starts; everything else after.
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        matches!(
            self,
            Command::SelectDeck(_)
                | Command::SelectHero(_)
                | Command::SelectBattlefield(_)
                | Command::StartGame
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_decode_play_card_defaults_visible() {
        let cmd = Command::decode(
            "playCard",
            json!({"cardInstanceId": 4, "targetArea": "battlefield1"}),
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::PlayCard(PlayCard {
                card_instance_id: InstanceId(4),
                target_area: Area::Battlefield1,
                visible_to_opponent: true,
            })
        );
    }

    #[test]
    fn test_decode_move_card() {
        let cmd = Command::decode(
            "moveCard",
            json!({
                "cardInstanceId": 9,
                "fromArea": "hand",
                "toArea": "mainDeckBottom",
                "fromIndex": 2,
                "visibleToOpponent": false
            }),
        )
        .unwrap();
        let Command::MoveCard(mv) = cmd else {
            panic!("expected moveCard");
        };
        assert_eq!(mv.card_instance_id, Some(InstanceId(9)));
        assert_eq!(mv.from_index, Some(2));
        assert_eq!(mv.to_index, None);
        assert_eq!(mv.to_area, Area::MainDeckBottom);
        assert!(!mv.visible_to_opponent);
    }

    #[test]
    fn test_decode_move_card_by_deck_position() {
        let cmd = Command::decode(
            "moveCard",
            json!({"fromArea": "mainDeck", "toArea": "hand", "fromIndex": 0}),
        )
        .unwrap();
        let Command::MoveCard(mv) = cmd else {
            panic!("expected moveCard");
        };
        assert_eq!(mv.card_instance_id, None);
        assert_eq!(mv.from_index, Some(0));
    }

    #[test]
    fn test_decode_ignores_data_for_unit_actions() {
        assert_eq!(Command::decode("drawCard", Value::Null).unwrap(), Command::DrawCard);
        assert_eq!(
            Command::decode("untapAllCards", json!({"junk": 1})).unwrap(),
            Command::UntapAllCards
        );
    }

    #[test]
    fn test_decode_create_token_null() {
        let cmd = Command::decode("createToken", Value::Null).unwrap();
        assert_eq!(cmd, Command::CreateToken(CreateToken::default()));
    }

    #[test]
    fn test_unknown_action() {
        let err = Command::decode("moveFromGraveyardToHand", json!({})).unwrap_err();
        assert_eq!(err, ActionError::UnknownAction("moveFromGraveyardToHand".into()));
        assert_eq!(err.kind(), ErrorKind::UnknownAction);
    }

    #[test]
    fn test_malformed_payload() {
        let err = Command::decode("recycleRune", json!({"runeIndex": "two"})).unwrap_err();
        assert!(matches!(err, ActionError::MalformedPayload { action: "recycleRune", .. }));
        assert_eq!(err.kind(), ErrorKind::UnknownAction);

        let err = Command::decode("tapCard", json!({"cardInstanceId": 1, "area": "deck"}))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownAction);
    }

    #[test]
    fn test_name_matches_decode() {
        let names = [
            "drawCard",
            "drawRune",
            "untapAllCards",
            "shuffleMainDeck",
            "shuffleRuneDeck",
            "startGame",
        ];
        for name in names {
            assert_eq!(Command::decode(name, Value::Null).unwrap().name(), name);
        }
    }

    #[test]
    fn test_is_setup() {
        assert!(Command::StartGame.is_setup());
        assert!(!Command::DrawCard.is_setup());
    }
}
