//! Application layer: command and query handlers around the session.

pub mod command_handlers;
pub mod query_handlers;
pub mod session_slot;
