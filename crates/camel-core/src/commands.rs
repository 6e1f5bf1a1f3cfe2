//! Player commands and the command table.
//!
//! Each command has a single-letter code. Input is matched against codes
//! after trimming and uppercasing; anything else is not a command.

use serde::{Deserialize, Serialize};

use crate::enums::Pace;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Drink from the canteen (A).
    Drink,
    /// Travel at moderate speed (B).
    AheadModerate,
    /// Travel at full speed (C).
    AheadFull,
    /// Stop and rest the camel (D).
    Rest,
    /// Print position, drinks and margin (E). Free action.
    Status,
    /// Give up (Q).
    Quit,
}

impl Command {
    /// The command table, in menu order.
    pub const ALL: [Command; 6] = [
        Command::Drink,
        Command::AheadModerate,
        Command::AheadFull,
        Command::Rest,
        Command::Status,
        Command::Quit,
    ];

    pub fn code(self) -> char {
        match self {
            Command::Drink => 'A',
            Command::AheadModerate => 'B',
            Command::AheadFull => 'C',
            Command::Rest => 'D',
            Command::Status => 'E',
            Command::Quit => 'Q',
        }
    }

    /// Menu text, without the code prefix.
    pub fn label(self) -> &'static str {
        match self {
            Command::Drink => "Drink from your canteen.",
            Command::AheadModerate => "Ahead moderate speed.",
            Command::AheadFull => "Ahead full speed.",
            Command::Rest => "Stop and rest.",
            Command::Status => "Status check.",
            Command::Quit => "Quit.",
        }
    }

    /// Look up a line of player input in the command table.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    /// Returns `None` for anything that is not exactly one known code.
    pub fn parse(input: &str) -> Option<Command> {
        let normalized = input.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|cmd| normalized.len() == 1 && normalized.starts_with(cmd.code()))
    }

    /// Movement pace, if this is a movement command.
    pub fn pace(self) -> Option<Pace> {
        match self {
            Command::AheadModerate => Some(Pace::Moderate),
            Command::AheadFull => Some(Pace::Full),
            _ => None,
        }
    }
}

/// The menu printed before every prompt, one entry per line.
pub fn menu_lines() -> impl Iterator<Item = String> {
    Command::ALL
        .into_iter()
        .map(|cmd| format!("{}. {}", cmd.code(), cmd.label()))
}
