//! Shared test doubles for Parley integration tests.

mod generator;

pub use generator::{FailingGenerator, FixedGenerator, RecordingGenerator, SilentGenerator};
