//! Tool adapter tests.
//!
//! Drives a full match through JSON tool calls, the way an agent framework
//! would, and checks the adapter agrees with the engine.

use rps_plus::core::{Move, Side};
use rps_plus::rules::RoundOutcome;
use rps_plus::state::MatchResult;
use rps_plus::tools::{Referee, ToolCall, ToolResponse};

fn call(referee: &mut Referee, json: &str) -> ToolResponse {
    let call: ToolCall = serde_json::from_str(json).unwrap();
    referee.invoke(call).unwrap()
}

#[test]
fn test_tool_call_json_shape() {
    let call = ToolCall::ValidateMove {
        input: "Rock".to_string(),
        bomb_used: false,
    };
    let json = serde_json::to_value(&call).unwrap();
    assert_eq!(json["tool"], "validate_move");
    assert_eq!(json["input"], "Rock");

    let call: ToolCall =
        serde_json::from_str(r#"{"tool":"resolve_round","user_move":"bomb","bot_move":"rock"}"#)
            .unwrap();
    assert_eq!(
        call,
        ToolCall::ResolveRound {
            user_move: Move::Bomb,
            bot_move: Move::Rock
        }
    );
}

#[test]
fn test_full_match_through_tools() {
    let mut referee = Referee::new(3).unwrap();

    // Round 1: invalid input is wasted.
    let response = call(&mut referee, r#"{"tool":"validate_move","input":"lizard","bomb_used":false}"#);
    assert!(matches!(response, ToolResponse::Invalid { .. }));
    call(&mut referee, r#"{"tool":"update_game_state","result":"draw"}"#);

    // Round 2: bomb against paper.
    let response = call(&mut referee, r#"{"tool":"validate_move","input":" BOMB ","bomb_used":false}"#);
    assert_eq!(response, ToolResponse::Valid { value: Move::Bomb });
    let response = call(&mut referee, r#"{"tool":"resolve_round","user_move":"bomb","bot_move":"paper"}"#);
    assert_eq!(
        response,
        ToolResponse::Outcome {
            result: RoundOutcome::FirstPlayer
        }
    );
    call(&mut referee, r#"{"tool":"update_game_state","result":"first_player"}"#);

    // Round 3: bomb already spent by the caller's bookkeeping.
    let response = call(&mut referee, r#"{"tool":"validate_move","input":"bomb","bomb_used":true}"#);
    let ToolResponse::Invalid { message, .. } = response else {
        panic!("expected rejection");
    };
    assert_eq!(message, "Bomb already used. This round is wasted.");

    let ToolResponse::State { state } =
        call(&mut referee, r#"{"tool":"update_game_state","result":"draw"}"#)
    else {
        panic!("expected state");
    };
    assert!(state.is_over());
    assert_eq!(state.round(), 4);
    assert_eq!(state.score(Side::First), 1);
    assert_eq!(state.result(), Some(MatchResult::FirstPlayerWins));

    // The adapter does not track bombs itself.
    assert!(!referee.state().bomb_used(Side::First));

    let over: ToolCall = serde_json::from_str(r#"{"tool":"update_game_state","result":"draw"}"#).unwrap();
    assert!(referee.invoke(over).is_err());
}

#[test]
fn test_response_serialization() {
    let response = ToolResponse::Outcome {
        result: RoundOutcome::SecondPlayer,
    };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"kind":"outcome","result":"second_player"}"#);
}

#[test]
fn test_state_response_round_trips_and_rejects_tampering() {
    let mut referee = Referee::new(3).unwrap();
    let response = call(&mut referee, r#"{"tool":"update_game_state","result":"second_player"}"#);
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        r#"{"kind":"state","state":{"round":2,"max_rounds":3,"scores":[0,1],"bomb_used":[false,false],"phase":"in_progress"}}"#
    );
    assert_eq!(serde_json::from_str::<ToolResponse>(&json).unwrap(), response);

    let tampered = r#"{"kind":"state","state":{"round":9,"max_rounds":3,"scores":[0,0],"bomb_used":[false,false],"phase":"in_progress"}}"#;
    assert!(serde_json::from_str::<ToolResponse>(tampered).is_err());
}
