//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Reached the finish line.
    Won,
    /// Thirst went past the limit.
    DiedOfThirst,
    /// Tiredness went past the limit; the camel died and the natives caught up.
    CamelCollapsed,
    /// The natives closed the margin to zero.
    Caught,
    /// The player quit.
    Quit,
    /// Input ran out before the game ended.
    InputClosed,
}

impl Outcome {
    /// Whether this outcome counts as a victory.
    pub fn is_victory(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// Travel pace for the movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pace {
    Moderate,
    Full,
}
