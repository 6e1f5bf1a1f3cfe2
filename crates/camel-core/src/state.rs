//! Game state — the whole world of a single playthrough.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Mutable state of one playthrough. Created at game start, discarded at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Miles traveled. Never decreases.
    pub player_position: i32,
    /// Pursuer position in miles.
    pub enemy_position: i32,
    /// Canteen uses left, at most `MAXIMUM_DRINKS`.
    pub drinks_remaining: u32,
    pub tiredness: u32,
    pub thirst: u32,
    /// Once set, never cleared.
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_position: PLAYER_START,
            enemy_position: ENEMY_START,
            drinks_remaining: MAXIMUM_DRINKS,
            tiredness: 0,
            thirst: 0,
            game_over: false,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pursuit distance: player position minus pursuer position.
    pub fn margin(&self) -> i32 {
        self.player_position - self.enemy_position
    }

    pub fn reached_finish(&self) -> bool {
        self.player_position >= FINISH_LINE
    }

    pub fn status(&self) -> StatusView {
        StatusView {
            miles_traveled: self.player_position,
            drinks_remaining: self.drinks_remaining,
            margin: self.margin(),
        }
    }
}

/// What a status check reveals to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub miles_traveled: i32,
    pub drinks_remaining: u32,
    pub margin: i32,
}
