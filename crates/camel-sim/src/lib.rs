//! Turn engine for the Camel desert chase.
//!
//! Owns the game state, resolves player commands, runs the ordered state
//! checks, and drives the interactive loop over an injected `TextIo`.
//! Randomness comes from an injected `RandomSource`, so a seed or a script
//! fully determines a playthrough.

pub mod actions;
pub mod checks;
pub mod engine;
pub mod error;
pub mod io;
pub mod random;

pub use camel_core as core;
pub use engine::{GameEngine, SimConfig, TurnReport};
pub use error::CamelError;
