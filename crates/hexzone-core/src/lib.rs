//! Shared domain abstractions for Hexzone.
//!
//! This crate defines the fundamental traits and types that the game
//! context and its adapters depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod rng;
pub mod snapshot;

/// Index of a tile on the track, in `[0, num_tiles)`.
pub type TileIndex = u32;

/// Identifier of a piece (one per player).
pub type PieceId = u32;
