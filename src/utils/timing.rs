//! Timing helpers.
//!
//! Probes measure with `std::time::Instant`; reports carry milliseconds as
//! floating point so sub-millisecond latencies on fast links survive.

use std::time::Duration;

/// Converts a duration to fractional milliseconds.
pub fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
