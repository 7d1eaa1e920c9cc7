//! Rolling conversation window for Parley.

pub mod buffer;
pub mod model;

/// Fixed-capacity FIFO window over past exchanges.
pub use buffer::{DEFAULT_WINDOW_SIZE, WindowBuffer};
/// One remembered exchange.
pub use model::MemoryEntry;
