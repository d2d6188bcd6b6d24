use queue_api::{QueueError, QueueInfo, QueueService};

/// Look up the queue behind `queue_id`, failing fast when the backend
/// knows no queue under that id.
///
/// The returned metadata feeds one confirmatory log line; beyond that
/// it carries no behavioral weight. A missing queue is fatal for the
/// invocation and is not retried.
pub async fn resolve(service: &dyn QueueService, queue_id: &str) -> Result<QueueInfo, QueueError> {
    let info = service
        .read(queue_id)
        .await?
        .ok_or_else(|| QueueError::NotFound(queue_id.to_string()))?;
    tracing::info!(queue = %queue_id, name = %info.name, "resolved queue");
    Ok(info)
}
