//! The three referee operations over a `GameState`.
//!
//! - `validate`: pure check of a raw token against the move set and the
//!   one-bomb-per-side rule. Returns a structured result, never a fault.
//! - `resolve`: pure, deterministic outcome of two accepted moves.
//! - `update`: the only mutation point. Called exactly once per round,
//!   after validation and resolution (or via `forfeit` when validation
//!   rejected the input).
//!
//! The caller contract is strict sequence per round:
//! validate -> resolve -> update, or validate -> forfeit.

use serde::{Deserialize, Serialize};

use crate::core::moves::{Move, PlayedMove};
use crate::core::player::Player;
use crate::core::state::{GameState, RoundRecord, RoundSummary};

/// Result of a resolved round, and of the overall game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The human side won.
    User,
    /// The automated opponent won.
    Bot,
    Draw,
}

impl Outcome {
    /// The outcome in which `player` wins.
    #[must_use]
    pub const fn win_for(player: Player) -> Outcome {
        match player {
            Player::User => Outcome::User,
            Player::Bot => Outcome::Bot,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::User => Some(Player::User),
            Outcome::Bot => Some(Player::Bot),
            Outcome::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::User => f.write_str("user"),
            Outcome::Bot => f.write_str("bot"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Why a candidate move was rejected.
///
/// Both variants recover locally as a forfeited round; neither is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Raw input was not one of the four legal move names.
    InvalidToken,
    /// A legal `bomb` token, but that side's bomb is already spent.
    BombAlreadyUsed(Player),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::InvalidToken => f.write_str("Invalid move"),
            RejectReason::BombAlreadyUsed(player) => {
                write!(f, "{player} bomb already used")
            }
        }
    }
}

/// Result of validating one side's candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    Accepted(Move),
    Rejected(RejectReason),
}

impl ValidationResult {
    /// The accepted move, if validation passed.
    #[must_use]
    pub const fn accepted(self) -> Option<Move> {
        match self {
            ValidationResult::Accepted(m) => Some(m),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// The rejection reason, if validation failed.
    #[must_use]
    pub const fn rejected(self) -> Option<RejectReason> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(r) => Some(r),
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }
}

/// The referee. Stateless; every operation takes the game state
/// explicitly, so one referee can serve any number of games.
#[derive(Clone, Copy, Debug, Default)]
pub struct Referee;

impl Referee {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate one side's raw move token against the current state.
    ///
    /// Pure: reads only the bomb-used flags, mutates nothing, and does
    /// not consume a bomb usage.
    #[must_use]
    pub fn validate(&self, state: &GameState, player: Player, raw_move: &str) -> ValidationResult {
        let Some(mv) = Move::parse(raw_move) else {
            return ValidationResult::Rejected(RejectReason::InvalidToken);
        };

        if mv == Move::Bomb && state.bomb_used(player) {
            return ValidationResult::Rejected(RejectReason::BombAlreadyUsed(player));
        }

        ValidationResult::Accepted(mv)
    }

    /// Resolve a round between two accepted moves.
    ///
    /// Resolution order: equal moves draw (including bomb vs bomb), a
    /// lone bomb wins unconditionally, otherwise the standard table
    /// (rock > scissors > paper > rock) decides.
    #[must_use]
    pub fn resolve(&self, user_move: Move, bot_move: Move) -> Outcome {
        if user_move == bot_move {
            return Outcome::Draw;
        }

        if user_move == Move::Bomb {
            return Outcome::User;
        }
        if bot_move == Move::Bomb {
            return Outcome::Bot;
        }

        if user_move.beats(bot_move) {
            Outcome::User
        } else {
            Outcome::Bot
        }
    }

    /// Apply one round's result to the game state.
    ///
    /// Advances the round counter unconditionally, marks legal bomb
    /// plays as spent, credits the winner, flips `game_over` at the
    /// round limit, and appends the round to the history.
    ///
    /// Calling this on a finished game is a protected no-op that
    /// returns the final snapshot.
    pub fn update(
        &self,
        state: &mut GameState,
        outcome: Outcome,
        user_move: PlayedMove,
        bot_move: PlayedMove,
    ) -> RoundSummary {
        self.apply(state, outcome, user_move, bot_move, None)
    }

    /// Forfeit the current round after a validation rejection.
    ///
    /// Records the sentinel non-move for both sides, so no bomb flag is
    /// touched; the round still counts toward the limit.
    pub fn forfeit(&self, state: &mut GameState, reason: RejectReason) -> RoundSummary {
        self.apply(
            state,
            Outcome::Draw,
            PlayedMove::Forfeited,
            PlayedMove::Forfeited,
            Some(reason),
        )
    }

    /// The final game result, once the round limit has been reached.
    ///
    /// Returns `None` while the game is in progress.
    #[must_use]
    pub fn final_result(&self, state: &GameState) -> Option<Outcome> {
        if !state.is_over() {
            return None;
        }

        let user = state.score(Player::User);
        let bot = state.score(Player::Bot);

        Some(match user.cmp(&bot) {
            std::cmp::Ordering::Greater => Outcome::User,
            std::cmp::Ordering::Less => Outcome::Bot,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    fn apply(
        &self,
        state: &mut GameState,
        outcome: Outcome,
        user_move: PlayedMove,
        bot_move: PlayedMove,
        rejection: Option<RejectReason>,
    ) -> RoundSummary {
        if state.game_over {
            // Caller contract violation; keep the state frozen.
            return state.summary();
        }

        state.round += 1;

        if user_move.is_bomb() {
            state.bomb_used[Player::User] = true;
        }
        if bot_move.is_bomb() {
            state.bomb_used[Player::Bot] = true;
        }

        if let Some(winner) = outcome.winner() {
            state.scores[winner] += 1;
        }

        if state.round >= state.max_rounds {
            state.game_over = true;
        }

        state.history.push(RoundRecord {
            round: state.round,
            user_move,
            bot_move,
            outcome,
            rejection,
        });

        state.summary()
    }
}
