//! Adapter exposing the referee operations as named, independently
//! invocable actions.
//!
//! Each of the three operations maps to one `ToolRequest` variant; an
//! external orchestrator serializes a request, `dispatch` applies it to
//! a `GameState`, and the reply mirrors the shapes the operations
//! return (accepted/rejected validation, a winner, a round summary).
//! There is no behavioral coupling to the state machine beyond calling
//! the operations in whatever order the orchestrator chooses.

use serde::{Deserialize, Serialize};

use crate::core::moves::{Move, PlayedMove};
use crate::core::player::Player;
use crate::core::state::{GameState, RoundSummary};
use crate::rules::{Outcome, Referee, ValidationResult};

/// One invocation of a referee operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolRequest {
    ValidateMove { player: Player, raw_move: String },
    ResolveRound { user_move: Move, bot_move: Move },
    UpdateGameState {
        outcome: Outcome,
        user_move: PlayedMove,
        bot_move: PlayedMove,
    },
}

/// Reply to a `ValidateMove` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReply {
    pub valid: bool,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    pub accepted: Option<Move>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Reply to any tool request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Validation(ValidationReply),
    Resolution { winner: Outcome },
    Update(RoundSummary),
}

/// Apply one tool request to a game state.
///
/// `ValidateMove` and `ResolveRound` leave the state untouched;
/// `UpdateGameState` mutates it exactly as `Referee::update` does.
pub fn dispatch(state: &mut GameState, request: &ToolRequest) -> ToolResponse {
    let referee = Referee::new();

    match request {
        ToolRequest::ValidateMove { player, raw_move } => {
            let reply = match referee.validate(state, *player, raw_move) {
                ValidationResult::Accepted(mv) => ValidationReply {
                    valid: true,
                    accepted: Some(mv),
                    reason: None,
                },
                ValidationResult::Rejected(reason) => ValidationReply {
                    valid: false,
                    accepted: None,
                    reason: Some(reason.to_string()),
                },
            };
            ToolResponse::Validation(reply)
        }
        ToolRequest::ResolveRound {
            user_move,
            bot_move,
        } => ToolResponse::Resolution {
            winner: referee.resolve(*user_move, *bot_move),
        },
        ToolRequest::UpdateGameState {
            outcome,
            user_move,
            bot_move,
        } => ToolResponse::Update(referee.update(state, *outcome, *user_move, *bot_move)),
    }
}
