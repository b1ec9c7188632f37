//! Command abstractions.

use uuid::Uuid;

/// A request to change (or inspect) the game session.
///
/// Every command carries a correlation ID so a single HTTP request can be
/// followed through the handler and domain logs.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name used in logs, e.g. `"game.move_piece"`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command through the system.
    fn correlation_id(&self) -> Uuid;
}
