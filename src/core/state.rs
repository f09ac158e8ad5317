//! Game state: the single mutable record for one game.
//!
//! ## GameState
//!
//! One instance per game, created with defaults and mutated only by the
//! referee's state updater, exactly once per round, in round order.
//!
//! Invariants maintained here and by the updater:
//! - `0 <= round <= max_rounds`
//! - `score(User) + score(Bot) <= round` (draws and forfeits score nothing)
//! - a bomb flag is set only by a legal bomb play and never resets
//! - `game_over` iff `round == max_rounds`, and it is monotonic
//!
//! A rematch requires a fresh instance; `Finished` is terminal.

use serde::{Deserialize, Serialize};

use super::moves::PlayedMove;
use super::player::{Player, SideMap};
use crate::rules::{Outcome, RejectReason};

/// Default round limit: best of 3.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Coarse game lifecycle view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    Finished,
}

/// Snapshot returned by the state updater after each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Rounds completed so far.
    pub round: u32,
    pub user_score: u32,
    pub bot_score: u32,
    pub game_over: bool,
}

/// One completed round, as recorded in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub user_move: PlayedMove,
    pub bot_move: PlayedMove,
    pub outcome: Outcome,
    /// Why the round was forfeited, if it was.
    pub rejection: Option<RejectReason>,
}

impl RoundRecord {
    /// True iff this round was lost to invalid input rather than resolved.
    #[must_use]
    pub fn is_forfeit(&self) -> bool {
        self.rejection.is_some()
    }
}

/// The mutable record for one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) round: u32,
    pub(crate) scores: SideMap<u32>,
    pub(crate) bomb_used: SideMap<bool>,
    pub(crate) max_rounds: u32,
    pub(crate) game_over: bool,
    pub(crate) history: Vec<RoundRecord>,
}

impl GameState {
    /// Create a fresh best-of-3 game.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_rounds(DEFAULT_MAX_ROUNDS)
    }

    /// Create a fresh game with a custom round limit.
    #[must_use]
    pub fn with_max_rounds(max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "Must have at least 1 round");

        Self {
            round: 0,
            scores: SideMap::default(),
            bomb_used: SideMap::default(),
            max_rounds,
            game_over: false,
            history: Vec::new(),
        }
    }

    /// Rounds completed so far (0-based counter).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Wins accumulated by one side.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Whether one side has already spent its bomb.
    #[must_use]
    pub fn bomb_used(&self, player: Player) -> bool {
        self.bomb_used[player]
    }

    /// The fixed round limit for this game.
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// True once the round limit has been reached.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Lifecycle view derived from the round counter.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Finished
        } else {
            GamePhase::InProgress
        }
    }

    /// All rounds completed so far, in order.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Current snapshot in updater-summary form.
    #[must_use]
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            round: self.round,
            user_score: self.scores[Player::User],
            bot_score: self.scores[Player::Bot],
            game_over: self.game_over,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
