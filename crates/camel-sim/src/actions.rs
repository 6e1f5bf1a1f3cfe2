//! Command handlers.
//!
//! Pure functions over `GameState`: each mutates the state, reports what the
//! player should see, and says whether the command used up the turn. World
//! resolution (pursuer advance, state checks) is the engine's job, not theirs.

use camel_core::commands::Command;
use camel_core::constants::*;
use camel_core::enums::{Outcome, Pace};
use camel_core::events::GameEvent;
use camel_core::state::GameState;

use crate::random::RandomSource;

/// Result of running one command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// `true` ends the prompt loop and resolves the world; `false` re-prompts.
    pub consumes_turn: bool,
    pub events: Vec<GameEvent>,
    /// Set when the command itself ends the game.
    pub outcome: Option<Outcome>,
}

impl ActionResult {
    fn turn(events: Vec<GameEvent>) -> Self {
        Self {
            consumes_turn: true,
            events,
            outcome: None,
        }
    }

    fn free(events: Vec<GameEvent>) -> Self {
        Self {
            consumes_turn: false,
            events,
            outcome: None,
        }
    }
}

/// Dispatch a command to its handler.
///
/// With `oasis` enabled, every movement command also rolls for an oasis.
pub fn perform<R: RandomSource>(
    command: Command,
    state: &mut GameState,
    rng: &mut R,
    oasis: bool,
) -> ActionResult {
    match command {
        Command::Drink => drink(state),
        Command::AheadModerate => move_on(state, rng, Pace::Moderate, oasis),
        Command::AheadFull => move_on(state, rng, Pace::Full, oasis),
        Command::Rest => rest(state),
        Command::Status => status(state),
        Command::Quit => quit(state),
    }
}

fn move_on<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    pace: Pace,
    oasis: bool,
) -> ActionResult {
    let mut result = advance(state, rng, pace);
    if oasis {
        result.events.extend(find_oasis(state, rng));
    }
    result
}

pub fn drink(state: &mut GameState) -> ActionResult {
    if state.drinks_remaining == 0 {
        return ActionResult::free(vec![GameEvent::CanteenEmpty]);
    }
    state.drinks_remaining -= 1;
    state.thirst = 0;
    ActionResult::turn(vec![GameEvent::Drank])
}

/// Move the player at the given pace and tire the camel.
pub fn advance<R: RandomSource>(state: &mut GameState, rng: &mut R, pace: Pace) -> ActionResult {
    let events = match pace {
        Pace::Moderate => {
            let distance = rng.roll(MODERATE_SPEED_DISTANCE);
            let events = travel(state, distance);
            state.tiredness += MODERATE_SPEED_TIREDNESS;
            events
        }
        Pace::Full => {
            let distance = rng.roll(FULL_SPEED_DISTANCE);
            let events = travel(state, distance);
            state.tiredness += rng.roll(FULL_SPEED_TIREDNESS).max(0) as u32;
            events
        }
    };
    ActionResult::turn(events)
}

/// Shared travel effect: distance, one point of thirst, and a report that
/// is dropped once the thirst check is going to announce a death instead.
fn travel(state: &mut GameState, distance: i32) -> Vec<GameEvent> {
    state.player_position += distance.max(0);
    state.thirst += TRAVEL_THIRST;
    if state.thirst <= THIRST_LIMIT {
        vec![GameEvent::Traveled { miles: distance }]
    } else {
        Vec::new()
    }
}

pub fn rest(state: &mut GameState) -> ActionResult {
    state.tiredness = 0;
    ActionResult::turn(vec![GameEvent::Rested])
}

pub fn status(state: &GameState) -> ActionResult {
    let view = state.status();
    ActionResult::free(vec![GameEvent::Status {
        miles_traveled: view.miles_traveled,
        drinks: view.drinks_remaining,
        margin: view.margin,
    }])
}

pub fn quit(state: &mut GameState) -> ActionResult {
    state.game_over = true;
    ActionResult {
        consumes_turn: true,
        events: vec![GameEvent::Quit],
        outcome: Some(Outcome::Quit),
    }
}

/// Roll for an oasis. A hit refills the canteen and clears thirst and tiredness.
pub fn find_oasis<R: RandomSource>(state: &mut GameState, rng: &mut R) -> Option<GameEvent> {
    if rng.roll(OASIS_ROLL) != OASIS_HIT {
        return None;
    }
    state.thirst = 0;
    state.tiredness = 0;
    state.drinks_remaining = MAXIMUM_DRINKS;
    Some(GameEvent::OasisFound)
}
