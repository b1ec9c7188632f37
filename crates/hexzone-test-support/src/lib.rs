//! Shared test mocks and utilities for the Hexzone board game engine.

mod clock;
mod rng;
mod snapshot_store;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
pub use snapshot_store::{EmptySnapshotStore, FailingSnapshotStore, RecordingSnapshotStore};
