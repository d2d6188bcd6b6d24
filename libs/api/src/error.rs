#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("queue '{0}' not found")]
    NotFound(String),

    #[error("backend: {0}")]
    Backend(String),
}

impl QueueError {
    /// Backend failure with a short context prefix, e.g. "enqueue: timed out".
    pub fn backend(context: &str, detail: impl std::fmt::Display) -> Self {
        QueueError::Backend(format!("{context}: {detail}"))
    }
}
