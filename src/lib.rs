//! # rps-plus
//!
//! Referee engine for best-of-3 rock-paper-scissors extended with a
//! single-use "bomb" move that beats everything except another bomb.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Every game owns one `GameState` instance.
//!    The referee operations take it as an explicit parameter - there is
//!    no ambient global state, so concurrent games and deterministic
//!    tests come for free.
//!
//! 2. **Structured Results**: Invalid input is data, not a fault.
//!    Validation returns a `ValidationResult`; a rejected move forfeits
//!    the round as a draw and the game continues.
//!
//! 3. **Deterministic Randomness**: The bot's move selection runs on a
//!    seeded ChaCha8 RNG, so a session replays byte-for-byte in tests.
//!
//! ## Modules
//!
//! - `core`: Moves, players, game state, round records, RNG
//! - `rules`: The referee - validate, resolve, update
//! - `policy`: Bot move selection
//! - `session`: Full-game driver (validate -> resolve -> update per round)
//! - `tools`: Serde adapter exposing the referee operations as named actions

pub mod core;
pub mod rules;
pub mod policy;
pub mod session;
pub mod tools;

// Re-export commonly used types
pub use crate::core::{
    GamePhase, GameRng, GameState, Move, PlayedMove, Player, RoundRecord, RoundSummary, SideMap,
};

pub use crate::rules::{Outcome, Referee, RejectReason, ValidationResult};

pub use crate::policy::{MovePolicy, UniformRandom};

pub use crate::session::{GameSession, GameSessionBuilder, RoundReport};

pub use crate::tools::{dispatch, ToolRequest, ToolResponse};
