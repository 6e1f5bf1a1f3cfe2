//! End-of-turn state checks.
//!
//! Pure functions over `GameState`, evaluated in [`StateCheck::ORDER`] after
//! every resolved turn. The first check that ends the game stops the rest:
//! a collapsed camel is reported even when thirst or the natives would also
//! have finished the player that turn.

use log::trace;

use camel_core::constants::*;
use camel_core::enums::Outcome;
use camel_core::events::GameEvent;
use camel_core::state::GameState;

/// One named post-turn check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCheck {
    Tiredness,
    Thirst,
    Natives,
    Win,
}

/// Result of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Play goes on, possibly with a warning.
    Continue(Option<GameEvent>),
    /// The game ends here.
    End { outcome: Outcome, event: GameEvent },
}

/// Everything the check pass produced for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub events: Vec<GameEvent>,
    pub outcome: Option<Outcome>,
}

impl StateCheck {
    /// Evaluation order. Part of the game rules, not an implementation detail.
    pub const ORDER: [StateCheck; 4] = [
        StateCheck::Tiredness,
        StateCheck::Thirst,
        StateCheck::Natives,
        StateCheck::Win,
    ];

    pub fn evaluate(self, state: &GameState) -> CheckResult {
        match self {
            StateCheck::Tiredness => check_tiredness(state),
            StateCheck::Thirst => check_thirst(state),
            StateCheck::Natives => check_natives(state),
            StateCheck::Win => check_win(state),
        }
    }
}

/// Run every check in order, stopping at the first that ends the game.
pub fn run_all(state: &GameState) -> CheckReport {
    let mut report = CheckReport::default();
    for check in StateCheck::ORDER {
        let result = check.evaluate(state);
        trace!("{check:?} check -> {result:?}");
        match result {
            CheckResult::Continue(warning) => report.events.extend(warning),
            CheckResult::End { outcome, event } => {
                report.events.push(event);
                report.outcome = Some(outcome);
                break;
            }
        }
    }
    report
}

fn check_tiredness(state: &GameState) -> CheckResult {
    if state.tiredness > TIREDNESS_LIMIT {
        CheckResult::End {
            outcome: Outcome::CamelCollapsed,
            event: GameEvent::CamelCollapsed,
        }
    } else if state.tiredness > TIREDNESS_WARNING {
        CheckResult::Continue(Some(GameEvent::CamelTiring))
    } else {
        CheckResult::Continue(None)
    }
}

fn check_thirst(state: &GameState) -> CheckResult {
    if state.thirst > THIRST_LIMIT {
        CheckResult::End {
            outcome: Outcome::DiedOfThirst,
            event: GameEvent::DiedOfThirst,
        }
    } else if state.thirst > THIRST_WARNING {
        CheckResult::Continue(Some(GameEvent::Thirsty))
    } else {
        CheckResult::Continue(None)
    }
}

fn check_natives(state: &GameState) -> CheckResult {
    // Past the finish line the natives no longer matter.
    if state.reached_finish() {
        return CheckResult::Continue(None);
    }
    let margin = state.margin();
    if margin <= 0 {
        CheckResult::End {
            outcome: Outcome::Caught,
            event: GameEvent::Caught,
        }
    } else if margin < NATIVES_WARNING_MARGIN {
        CheckResult::Continue(Some(GameEvent::NativesClosing))
    } else {
        CheckResult::Continue(None)
    }
}

fn check_win(state: &GameState) -> CheckResult {
    if state.reached_finish() {
        CheckResult::End {
            outcome: Outcome::Won,
            event: GameEvent::Won,
        }
    } else {
        CheckResult::Continue(None)
    }
}
