//! The two sides of a game and per-side data storage.
//!
//! ## Player
//!
//! The human (`User`) or the automated opponent (`Bot`).
//!
//! ## SideMap
//!
//! Per-side data storage indexable by `Player`. The score and bomb-used
//! pairs in the game state go through this so the validator and updater
//! never branch on which side they are handling.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    User,
    Bot,
}

impl Player {
    /// Both sides, user first.
    pub const BOTH: [Player; 2] = [Player::User, Player::Bot];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::User => Player::Bot,
            Player::Bot => Player::User,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::User => f.write_str("User"),
            Player::Bot => f.write_str("Bot"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rps_plus::{Player, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::default();
/// scores[Player::User] += 1;
///
/// assert_eq!(scores[Player::User], 1);
/// assert_eq!(scores[Player::Bot], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub user: T,
    pub bot: T,
}

impl<T> SideMap<T> {
    /// Create with both sides set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            user: value.clone(),
            bot: value,
        }
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::User => &self.user,
            Player::Bot => &self.bot,
        }
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::User => &mut self.user,
            Player::Bot => &mut self.bot,
        }
    }
}

impl<T> Index<Player> for SideMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &T {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for SideMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut T {
        self.get_mut(player)
    }
}
