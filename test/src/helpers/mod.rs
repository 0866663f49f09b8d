//! Test helpers for driving a control surface without a live engine
pub mod assertions;
pub mod fake_engine;
pub mod snapshot_builder;

pub use assertions::*;
pub use fake_engine::{bundle_bytes, decode_all, FakeEngine};
pub use manual_clock::ManualClock;
pub use snapshot_builder::SnapshotBuilder;
