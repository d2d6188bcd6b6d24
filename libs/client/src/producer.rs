use std::time::Duration;

use queue_api::{QueueError, QueueInfo, QueueService};

use crate::synth::{self, Rng};

/// Default delay between consecutive sends.
pub const SEND_PACE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct ProducerOpts {
    /// Number of readings to generate and enqueue.
    pub count: u64,
    /// Delay between consecutive sends. A self-imposed rate limit —
    /// it does not read backend load.
    pub pace: Duration,
}

impl ProducerOpts {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            pace: SEND_PACE,
        }
    }
}

/// Generate `opts.count` readings and enqueue them one at a time, in
/// strict sequential order.
///
/// Each send logs the backend's receipt without interpreting it. The
/// first backend error terminates the loop; readings already sent are
/// accounted for only in the log trail. `count == 0` completes
/// immediately without sleeping.
pub async fn run(
    service: &dyn QueueService,
    queue: &QueueInfo,
    opts: &ProducerOpts,
    rng: &mut Rng,
) -> Result<(), QueueError> {
    for seq in 0..opts.count {
        let reading = synth::reading(rng);
        let receipt = service.enqueue(&queue.id, &reading).await?;
        tracing::info!(
            queue = %queue.id,
            seq,
            temperature = reading.temperature,
            location = %reading.location,
            timestamp = %reading.timestamp,
            receipt = ?receipt.id,
            "enqueued reading"
        );
        if seq + 1 < opts.count {
            tokio::time::sleep(opts.pace).await;
        }
    }
    tracing::info!(queue = %queue.id, count = opts.count, "producer done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockQueue;
    use tokio::time::Instant;

    fn queue() -> QueueInfo {
        QueueInfo {
            id: "q1".into(),
            name: "Buoy readings".into(),
            description: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn enqueues_exactly_count_in_order() {
        let svc = MockQueue::with_queue("q1", "Buoy readings");
        let mut rng = Rng::new(7);

        run(&svc, &queue(), &ProducerOpts::new(5), &mut rng)
            .await
            .unwrap();

        let sent = svc.enqueued();
        assert_eq!(sent.len(), 5);
        // Send order follows generation order: stamps never decrease.
        for pair in sent.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        // Each reading is a fresh draw, not a repeat of the previous one.
        for pair in sent.windows(2) {
            assert_ne!(pair[0].temperature, pair[1].temperature);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_then_paces_sends_at_fixed_interval() {
        let svc = MockQueue::with_queue("q1", "Buoy readings");
        let mut rng = Rng::new(3);
        let start = Instant::now();

        let info = crate::resolve(&svc, "q1").await.unwrap();
        run(&svc, &info, &ProducerOpts::new(3), &mut rng)
            .await
            .unwrap();

        // 3 sends, 200 ms between consecutive ones.
        assert_eq!(svc.enqueued().len(), 3);
        assert_eq!(Instant::now() - start, Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_count_is_an_immediate_noop() {
        let svc = MockQueue::with_queue("q1", "Buoy readings");
        let mut rng = Rng::new(3);
        let start = Instant::now();

        run(&svc, &queue(), &ProducerOpts::new(0), &mut rng)
            .await
            .unwrap();

        assert!(svc.enqueued().is_empty());
        assert_eq!(Instant::now(), start);
    }

    #[tokio::test(start_paused = true)]
    async fn enqueue_error_stops_the_loop() {
        let svc = MockQueue::with_queue("q1", "Buoy readings").fail_enqueue_at(2);
        let mut rng = Rng::new(11);

        let err = run(&svc, &queue(), &ProducerOpts::new(5), &mut rng)
            .await
            .unwrap_err();

        assert!(matches!(err, QueueError::Backend(_)));
        // The two sends before the failure went through; nothing after.
        assert_eq!(svc.enqueued().len(), 2);
    }
}
