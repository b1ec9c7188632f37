//! Holder for the single live game session.

use std::sync::{Mutex, MutexGuard};

use hexzone_core::error::DomainError;

use crate::domain::session::GameSession;

/// The process-wide home of the current game.
///
/// Handlers lock the slot only around synchronous domain calls, which
/// serializes moves; the guard is never held across an await point.
#[derive(Debug, Default)]
pub struct SessionSlot {
    inner: Mutex<Option<GameSession>>,
}

impl SessionSlot {
    /// Creates an empty slot (no game started).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot already holding `session`.
    #[must_use]
    pub fn with_session(session: GameSession) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }

    /// Locks the slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the mutex is poisoned.
    pub fn lock(&self) -> Result<MutexGuard<'_, Option<GameSession>>, DomainError> {
        self.inner
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("session mutex poisoned: {e}")))
    }

    /// Installs `session`, returning the game it replaced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the mutex is poisoned.
    pub fn replace(&self, session: GameSession) -> Result<Option<GameSession>, DomainError> {
        Ok(self.lock()?.replace(session))
    }

    /// Returns `true` if a game has been started or loaded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the mutex is poisoned.
    pub fn is_active(&self) -> Result<bool, DomainError> {
        Ok(self.lock()?.is_some())
    }
}
