use serde::{Deserialize, Serialize};

/// Timestamp format used everywhere a reading is generated or displayed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One generated temperature observation.
///
/// Immutable once created: the sampler mints a `Reading` per tick and nothing
/// downstream ever mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in °C, rounded to one decimal by the sampler.
    pub temperature: f64,
    /// Local wall-clock time of generation, formatted as [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
}

impl Reading {
    pub fn new(temperature: f64, timestamp: impl Into<String>) -> Self {
        Self {
            temperature,
            timestamp: timestamp.into(),
        }
    }
}
