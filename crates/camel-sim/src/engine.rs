//! Game engine — the turn loop of the game.
//!
//! `GameEngine` owns the `GameState`, resolves player commands, advances the
//! pursuers and runs the state checks. `submit` is the headless API and
//! `run` drives a full interactive session over a `TextIo`.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use camel_core::commands::{menu_lines, Command};
use camel_core::constants::ENEMY_ADVANCE;
use camel_core::enums::Outcome;
use camel_core::events::GameEvent;
use camel_core::state::GameState;

use crate::actions;
use crate::checks;
use crate::error::CamelError;
use crate::io::TextIo;
use crate::random::{RandomSource, SeededRandom};

/// Prompt written before reading each command.
pub const PROMPT: &str = "What is your command? ";

/// Configuration for starting a new game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    /// Roll for an oasis after every movement command.
    pub oasis: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            oasis: false,
        }
    }
}

/// What happened when one command was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Whether the command used up the turn. Free and rejected commands don't.
    pub consumed: bool,
    /// Feedback in the order it should be shown.
    pub events: Vec<GameEvent>,
    /// Set when this command ended the game.
    pub outcome: Option<Outcome>,
}

/// The game engine. Owns the game state and the random source.
pub struct GameEngine<R = SeededRandom> {
    state: GameState,
    rng: R,
    oasis: bool,
    outcome: Option<Outcome>,
    turns: u32,
}

impl GameEngine<SeededRandom> {
    /// Create a new engine seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        Self::with_random(config, SeededRandom::new(config.seed))
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a new engine drawing from the given source. `config.seed` is unused.
    pub fn with_random(config: SimConfig, rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
            oasis: config.oasis,
            outcome: None,
            turns: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// How the game ended, once it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Mutable access to the state, for setting up test scenarios.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Number of resolved turns so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Resolve one command.
    ///
    /// A turn-consuming command that leaves the game running advances the
    /// pursuers and then runs the state checks. Free or rejected commands
    /// touch neither.
    pub fn submit(&mut self, command: Command) -> Result<TurnReport, CamelError> {
        if self.is_over() {
            return Err(CamelError::GameOver);
        }

        let action = actions::perform(command, &mut self.state, &mut self.rng, self.oasis);
        let mut events = action.events;
        let mut outcome = action.outcome;
        if let Some(ending) = outcome {
            self.finish(ending);
        }

        if action.consumes_turn && !self.is_over() {
            let advance = self.rng.roll(ENEMY_ADVANCE);
            self.state.enemy_position += advance;
            self.turns += 1;
            debug!(
                "turn {} after {command:?}: natives +{advance}, position {}, margin {}, thirst {}, tiredness {}",
                self.turns,
                self.state.player_position,
                self.state.margin(),
                self.state.thirst,
                self.state.tiredness,
            );

            let report = checks::run_all(&self.state);
            events.extend(report.events);
            if let Some(ending) = report.outcome {
                self.finish(ending);
                outcome = Some(ending);
            }
        }

        Ok(TurnReport {
            consumed: action.consumes_turn,
            events,
            outcome,
        })
    }

    /// Play the game to completion over the given I/O.
    ///
    /// End of input ends the game with `Outcome::InputClosed`.
    pub fn run<T: TextIo>(&mut self, io: &mut T) -> Result<Outcome, CamelError> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }

            io.write_line("")?;
            for line in menu_lines() {
                io.write_line(&line)?;
            }
            io.write(PROMPT)?;
            let input = io.read_line()?;
            io.write_line("")?;

            let Some(input) = input else {
                info!("input closed after {} turns", self.turns);
                self.finish(Outcome::InputClosed);
                continue;
            };

            match Command::parse(&input) {
                Some(command) => {
                    let report = self.submit(command)?;
                    for event in &report.events {
                        write_event(io, event)?;
                    }
                }
                None => {
                    debug!("rejected input {input:?}");
                    write_event(io, &GameEvent::InvalidCommand)?;
                }
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state.game_over = true;
        self.outcome = Some(outcome);
        info!(
            "game over: {outcome:?} at mile {} after {} turns",
            self.state.player_position, self.turns
        );
    }
}

fn write_event<T: TextIo>(io: &mut T, event: &GameEvent) -> std::io::Result<()> {
    for line in event.message().lines() {
        io.write_line(line)?;
    }
    Ok(())
}
