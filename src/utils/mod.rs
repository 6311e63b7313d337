//! Utility functions.

mod timing;

pub use timing::duration_to_ms;
