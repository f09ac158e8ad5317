//! Core types: moves, players, game state, round records, RNG.
//!
//! This module contains the fundamental building blocks the referee
//! operates over. Nothing here knows about control flow or I/O.

pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use moves::{Move, PlayedMove};
pub use player::{Player, SideMap};
pub use rng::GameRng;
pub use state::{GamePhase, GameState, RoundRecord, RoundSummary};
