//! Core types and definitions for the Camel desert chase.
//!
//! This crate defines the vocabulary shared by the engine and the binary:
//! commands, game state, events, outcomes, and tuning constants.
//! It performs no I/O and draws no random numbers.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
