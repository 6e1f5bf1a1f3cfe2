//! Events emitted by the engine for player feedback.
//!
//! The engine never formats text itself; every line it prints comes from
//! [`GameEvent::message`].

use serde::{Deserialize, Serialize};

/// Feedback produced by commands and state checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    // --- Commands ---
    Drank,
    CanteenEmpty,
    /// Omitted once thirst is past the limit.
    Traveled { miles: i32 },
    Rested,
    Status {
        miles_traveled: i32,
        drinks: u32,
        margin: i32,
    },
    Quit,
    OasisFound,

    // --- State checks ---
    CamelTiring,
    CamelCollapsed,
    Thirsty,
    DiedOfThirst,
    NativesClosing,
    Caught,
    Won,

    // --- Input ---
    InvalidCommand,
}

impl GameEvent {
    /// Text shown to the player. May span several lines.
    pub fn message(&self) -> String {
        match self {
            GameEvent::Drank => "You drink from your canteen!".into(),
            GameEvent::CanteenEmpty => "Your canteen is empty!".into(),
            GameEvent::Traveled { miles } => format!("You traveled {miles} miles."),
            GameEvent::Rested => "You stop and rest!".into(),
            GameEvent::Status {
                miles_traveled,
                drinks,
                margin,
            } => format!(
                "Miles traveled: {miles_traveled}\n\
                 Drinks in canteen: {drinks}\n\
                 The natives are {margin} miles behind you."
            ),
            GameEvent::Quit => "Quitter!".into(),
            GameEvent::OasisFound => "You found an oasis! You are now hydrated, fully rested, \
                                      and have a full canteen!"
                .into(),
            GameEvent::CamelTiring => "Your camel is getting tired.".into(),
            GameEvent::CamelCollapsed => {
                "Your camel died from tiredness and you were caught!".into()
            }
            GameEvent::Thirsty => "You are getting thirsty!".into(),
            GameEvent::DiedOfThirst => "You died from thirst!".into(),
            GameEvent::NativesClosing => "The natives are getting close!".into(),
            GameEvent::Caught => "You were caught by the natives!".into(),
            GameEvent::Won => "You made it across the desert! You won!".into(),
            GameEvent::InvalidCommand => "Not a valid command!".into(),
        }
    }
}
