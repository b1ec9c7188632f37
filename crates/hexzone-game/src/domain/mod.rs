//! Domain model for the game session context.

pub mod attribute;
pub mod board;
pub mod commands;
pub mod dice;
pub mod items;
pub mod outcome;
pub mod pieces;
pub mod session;
pub mod snapshot;
