//! Move vocabulary: the four legal moves and the forfeit sentinel.
//!
//! ## Move
//!
//! One of rock, paper, scissors, bomb. Parsed case-insensitively from
//! free-form input; an unrecognized token is not a `Move` at all - the
//! validator reports it as a rejected result.
//!
//! ## PlayedMove
//!
//! What actually went into a round. A forfeited round (invalid input)
//! records `PlayedMove::Forfeited` for both sides so that bomb
//! bookkeeping can never be triggered by a sentinel value.

use serde::{Deserialize, Serialize};

/// A legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every other move; usable at most once per side per game.
    Bomb,
}

impl Move {
    /// All four legal moves, in parse order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// Parse a raw token case-insensitively.
    ///
    /// Returns `None` for anything outside the four legal names.
    ///
    /// ```
    /// use rps_plus::Move;
    ///
    /// assert_eq!(Move::parse("ROCK"), Some(Move::Rock));
    /// assert_eq!(Move::parse("Bomb"), Some(Move::Bomb));
    /// assert_eq!(Move::parse("lizard"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Move> {
        match raw.trim().to_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            _ => None,
        }
    }

    /// Standard-rule comparison: does `self` beat `other`?
    ///
    /// Only meaningful for the three classic moves; `Bomb` never appears
    /// here because the resolver short-circuits it first.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// The lowercase wire name of this move.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a side actually contributed to a round.
///
/// Forfeited rounds carry no real move; only `Played(Bomb)` may consume
/// a side's bomb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayedMove {
    Played(Move),
    /// Sentinel for a round lost to invalid input. No bomb bookkeeping.
    Forfeited,
}

impl PlayedMove {
    /// True iff this is a legal bomb play.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, PlayedMove::Played(Move::Bomb))
    }

    /// The underlying move, if one was played.
    #[must_use]
    pub const fn as_move(self) -> Option<Move> {
        match self {
            PlayedMove::Played(m) => Some(m),
            PlayedMove::Forfeited => None,
        }
    }
}

impl From<Move> for PlayedMove {
    fn from(m: Move) -> Self {
        PlayedMove::Played(m)
    }
}

impl std::fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayedMove::Played(m) => m.fmt(f),
            PlayedMove::Forfeited => f.write_str("none"),
        }
    }
}
