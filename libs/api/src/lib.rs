use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

mod error;
mod record;
mod util;

pub use error::QueueError;
pub use record::Reading;
pub use util::{now_ms, utc_stamp_from_ms};

// ════════════════════════════════════════════════════════════════
//  Queue Metadata
// ════════════════════════════════════════════════════════════════

/// Metadata of a named queue, as returned by the backend's read
/// capability. Queues are owned and mutated entirely by the backend;
/// clients only ever hold a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueInfo {
    /// Opaque queue identifier.
    pub id: String,
    /// Display name, used for confirmatory logging only.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ════════════════════════════════════════════════════════════════
//  Wire Types
// ════════════════════════════════════════════════════════════════

/// Backend acknowledgement of an enqueue. Surfaced in logs, never
/// interpreted — any affirmative return counts as success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub id: Option<String>,
}

/// One dequeued item. The payload stays an opaque JSON value — the
/// consumer observes it, it does not process it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    pub content: serde_json::Value,
}

// ════════════════════════════════════════════════════════════════
//  Queue Service Capability
// ════════════════════════════════════════════════════════════════

/// The queue service as seen by its clients: read metadata, enqueue one
/// reading, dequeue one item. All queue I/O goes through this trait,
/// keeping the producer/consumer loops decoupled from the transport.
///
/// `dequeue` distinguishes "nothing ready" (`Ok(None)`) from a backend
/// failure (`Err`) — the former triggers backoff, only the latter
/// propagates.
pub trait QueueService: Send + Sync {
    /// Fetch metadata for `queue_id`. `Ok(None)` = no such queue.
    fn read<'a>(
        &'a self,
        queue_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<QueueInfo>, QueueError>> + Send + 'a>>;

    /// Append one reading to the queue. Ownership of the payload
    /// transfers to the backend on success.
    fn enqueue<'a>(
        &'a self,
        queue_id: &'a str,
        reading: &'a Reading,
    ) -> Pin<Box<dyn Future<Output = Result<Receipt, QueueError>> + Send + 'a>>;

    /// Pull at most `limit` items, returning the first. `Ok(None)` =
    /// queue currently empty.
    fn dequeue<'a>(
        &'a self,
        queue_id: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Message>, QueueError>> + Send + 'a>>;
}
