//! Hexzone snapshot persistence.
//!
//! Implements the `SnapshotStore` trait from `hexzone-core` on top of a
//! single JSON file.

pub mod file_snapshot_store;
