//! Full-game driver: one session owns one game.
//!
//! `GameSession` wires the referee, the bot policy, and the RNG around
//! a single `GameState` and walks the strict per-round sequence:
//! validate the user's input, then either forfeit (rejected input,
//! bot never moves, automatic draw) or pick the bot's move, resolve,
//! and update. Console I/O stays outside; the session returns a
//! `RoundReport` per round and a final `Outcome` once the round limit
//! is reached.
//!
//! A forfeited round is reported distinctly from a resolved one: it
//! carries no bot move and no comparative outcome, because no contest
//! occurred.

use crate::core::moves::Move;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, RoundSummary};
use crate::policy::{MovePolicy, UniformRandom};
use crate::rules::{Outcome, Referee, RejectReason, ValidationResult};

/// What happened in one round, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundReport {
    /// Both sides played; the round was contested.
    Resolved {
        user_move: Move,
        bot_move: Move,
        outcome: Outcome,
        summary: RoundSummary,
    },
    /// The user's input was rejected; automatic draw, no contest.
    Forfeited {
        reason: RejectReason,
        summary: RoundSummary,
    },
}

impl RoundReport {
    /// The post-round state snapshot, either way.
    #[must_use]
    pub const fn summary(&self) -> RoundSummary {
        match self {
            RoundReport::Resolved { summary, .. } | RoundReport::Forfeited { summary, .. } => {
                *summary
            }
        }
    }
}

/// Builder for a `GameSession`.
pub struct GameSessionBuilder {
    max_rounds: u32,
    policy: Box<dyn MovePolicy>,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            max_rounds: crate::core::state::DEFAULT_MAX_ROUNDS,
            policy: Box::new(UniformRandom),
        }
    }
}

impl GameSessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the best-of-3 round limit.
    #[must_use]
    pub fn max_rounds(mut self, max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "Must have at least 1 round");
        self.max_rounds = max_rounds;
        self
    }

    /// Replace the bot policy (scripted opponents in tests).
    #[must_use]
    pub fn policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Build the session with a fixed RNG seed.
    #[must_use]
    pub fn build(self, seed: u64) -> GameSession {
        GameSession {
            state: GameState::with_max_rounds(self.max_rounds),
            referee: Referee::new(),
            rng: GameRng::new(seed),
            policy: self.policy,
        }
    }
}

/// One game of rock-paper-scissors-plus against the bot.
pub struct GameSession {
    state: GameState,
    referee: Referee,
    rng: GameRng,
    policy: Box<dyn MovePolicy>,
}

impl GameSession {
    /// Best-of-3 against the uniform random bot, with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameSessionBuilder::new().build(seed)
    }

    /// Best-of-3 against the uniform random bot, OS-seeded.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            state: GameState::new(),
            referee: Referee::new(),
            rng: GameRng::from_entropy(),
            policy: Box::new(UniformRandom),
        }
    }

    /// Play one round from the user's raw input.
    ///
    /// Returns `None` once the game is over; the state is terminal and
    /// no further rounds exist.
    pub fn play_round(&mut self, raw_user_move: &str) -> Option<RoundReport> {
        if self.state.is_over() {
            return None;
        }

        let round = self.state.round() + 1;

        match self.referee.validate(&self.state, Player::User, raw_user_move) {
            ValidationResult::Rejected(reason) => {
                log::debug!("round {round}: forfeited ({reason})");
                let summary = self.referee.forfeit(&mut self.state, reason);
                Some(RoundReport::Forfeited { reason, summary })
            }
            ValidationResult::Accepted(user_move) => {
                let bot_move = self.policy.choose_move(&self.state, &mut self.rng);
                let outcome = self.referee.resolve(user_move, bot_move);
                let summary = self.referee.update(
                    &mut self.state,
                    outcome,
                    user_move.into(),
                    bot_move.into(),
                );
                log::debug!("round {round}: {user_move} vs {bot_move} -> {outcome}");
                Some(RoundReport::Resolved {
                    user_move,
                    bot_move,
                    outcome,
                    summary,
                })
            }
        }
    }

    /// The game state, read-only.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The final result, once the round limit has been reached.
    #[must_use]
    pub fn final_result(&self) -> Option<Outcome> {
        self.referee.final_result(&self.state)
    }

    /// Start a fresh game, keeping the policy and forking the RNG so
    /// the rematch gets an independent move stream.
    #[must_use]
    pub fn rematch(mut self) -> Self {
        Self {
            state: GameState::with_max_rounds(self.state.max_rounds()),
            referee: self.referee,
            rng: self.rng.fork(),
            policy: self.policy,
        }
    }
}
