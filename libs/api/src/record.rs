use serde::{Deserialize, Serialize};

/// One synthetic buoy reading.
///
/// Immutable once generated — ownership moves to the queue service on
/// enqueue. `timestamp` is `YYYY-MM-DDTHH:MM:SSZ` (UTC), stamped at
/// generation time, so readings produced in sequence carry
/// non-decreasing stamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: f64,
    pub location: String,
    pub timestamp: String,
}
