//! Bot move selection.
//!
//! Policies are trait-based so a session can swap the opponent out
//! (scripted opponents in tests, uniform random in play). A policy must
//! never offer `bomb` once the bot's bomb flag is set; the validator
//! would reject it and the bot would forfeit its own round.

use crate::core::moves::Move;
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

/// Policy for choosing the bot's move each round.
pub trait MovePolicy: Send + Sync {
    /// Choose a move that is legal for the bot in the current state.
    fn choose_move(&self, state: &GameState, rng: &mut GameRng) -> Move;
}

/// Uniform random choice among the bot's currently-legal moves.
///
/// All four moves while the bomb is available, the three classic moves
/// once it is spent.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose_move(&self, state: &GameState, rng: &mut GameRng) -> Move {
        let mut legal: Vec<Move> = Move::ALL.to_vec();
        if state.bomb_used(Player::Bot) {
            legal.retain(|&m| m != Move::Bomb);
        }

        rng.choose(&legal).copied().unwrap_or(Move::Rock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_covers_all_moves_when_bomb_available() {
        let state = GameState::new();
        let mut rng = GameRng::new(42);
        let policy = UniformRandom;

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(policy.choose_move(&state, &mut rng));
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_uniform_never_offers_spent_bomb() {
        let mut state = GameState::new();
        state.bomb_used[Player::Bot] = true;

        let mut rng = GameRng::new(42);
        let policy = UniformRandom;

        for _ in 0..200 {
            assert_ne!(policy.choose_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn test_uniform_ignores_user_bomb_flag() {
        let mut state = GameState::new();
        state.bomb_used[Player::User] = true;

        let mut rng = GameRng::new(7);
        let policy = UniformRandom;

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(policy.choose_move(&state, &mut rng));
        }

        assert!(seen.contains(&Move::Bomb));
    }

    #[test]
    fn test_uniform_is_deterministic_under_seed() {
        let state = GameState::new();
        let policy = UniformRandom;

        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..50 {
            assert_eq!(
                policy.choose_move(&state, &mut rng1),
                policy.choose_move(&state, &mut rng2)
            );
        }
    }
}
