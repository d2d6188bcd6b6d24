use std::time::Duration;

use tokio::time::Instant;

use queue_api::{QueueError, QueueInfo, QueueService};

/// Default sleep between polls while the queue is empty.
pub const IDLE_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct ConsumerOpts {
    /// Total wall-clock window to keep polling.
    pub window: Duration,
    /// Sleep between polls when the queue reports nothing ready.
    pub idle_backoff: Duration,
}

impl ConsumerOpts {
    /// Window given in minutes, matching the invocation parameter.
    pub fn for_minutes(minutes: f64) -> Self {
        Self {
            window: Duration::from_secs_f64(minutes * 60.0),
            idle_backoff: IDLE_BACKOFF,
        }
    }
}

/// Poll the queue one item at a time until the window elapses.
///
/// The deadline is fixed once at entry and never re-derived, so
/// processing time cannot extend the window. An item is logged as
/// consumed and nothing more — acknowledgement semantics belong to the
/// backend. An empty poll sleeps `idle_backoff` and re-checks the
/// deadline; a backend error propagates immediately. The loop exits on
/// the deadline alone, never on an empty queue, so it may finish having
/// consumed zero, some, or many items.
pub async fn run(
    service: &dyn QueueService,
    queue: &QueueInfo,
    opts: &ConsumerOpts,
) -> Result<(), QueueError> {
    let deadline = Instant::now() + opts.window;
    while Instant::now() < deadline {
        match service.dequeue(&queue.id, 1).await? {
            Some(message) => {
                tracing::info!(
                    queue = %queue.id,
                    id = ?message.id,
                    content = %message.content,
                    "consumed message"
                );
            }
            None => {
                tracing::info!(queue = %queue.id, "queue empty, waiting");
                tokio::time::sleep(opts.idle_backoff).await;
            }
        }
    }
    tracing::info!(queue = %queue.id, "subscription window elapsed");
    Ok(())
}
