//! Game session bounded context: board, pieces, items and moves.
//!
//! Responsible for the board and its zones, the pieces and the items they
//! collect, advisory dice rolls, and the move resolver that decides every
//! turn's outcome.

pub mod application;
pub mod domain;
