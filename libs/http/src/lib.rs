use std::future::Future;
use std::pin::Pin;

use queue_api::{Message, QueueError, QueueInfo, QueueService, Reading, Receipt};

// ═══════════════════════════════════════════════════════════════
//  HttpQueue
// ═══════════════════════════════════════════════════════════════

/// REST-backed queue service client.
///
/// Endpoint layout:
/// - `GET  {base}/1/queues/{id}` — queue metadata, 404 = unknown queue
/// - `POST {base}/1/queues/{id}/messages` — enqueue one JSON reading
/// - `GET  {base}/1/queues/{id}/messages?limit=N` — dequeue up to N
///
/// Non-success responses (other than the read 404) surface as
/// `QueueError::Backend` with status and body.
pub struct HttpQueue {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpQueue {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, QueueError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| QueueError::backend("HTTP client", e))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        })
    }

    fn queue_url(&self, queue_id: &str) -> String {
        format!("{}/1/queues/{queue_id}", self.base_url)
    }

    fn messages_url(&self, queue_id: &str) -> String {
        format!("{}/1/queues/{queue_id}/messages", self.base_url)
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<(reqwest::StatusCode, String), QueueError> {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req
            .send()
            .await
            .map_err(|e| QueueError::backend(context, e))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| QueueError::backend(context, e))?;
        Ok((status, body))
    }
}

impl QueueService for HttpQueue {
    fn read<'a>(
        &'a self,
        queue_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<QueueInfo>, QueueError>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.http.get(self.queue_url(queue_id));
            let (status, body) = self.send(req, "read").await?;
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if !status.is_success() {
                return Err(QueueError::backend("read", format!("{status}: {body}")));
            }
            let info: QueueInfo =
                serde_json::from_str(&body).map_err(|e| QueueError::backend("read", e))?;
            Ok(Some(info))
        })
    }

    fn enqueue<'a>(
        &'a self,
        queue_id: &'a str,
        reading: &'a Reading,
    ) -> Pin<Box<dyn Future<Output = Result<Receipt, QueueError>> + Send + 'a>> {
        Box::pin(async move {
            let payload =
                serde_json::to_vec(reading).map_err(|e| QueueError::backend("enqueue", e))?;
            let req = self
                .http
                .post(self.messages_url(queue_id))
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
            let (status, body) = self.send(req, "enqueue").await?;
            if !status.is_success() {
                return Err(QueueError::backend("enqueue", format!("{status}: {body}")));
            }
            parse_receipt(&body)
        })
    }

    fn dequeue<'a>(
        &'a self,
        queue_id: &'a str,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Message>, QueueError>> + Send + 'a>> {
        Box::pin(async move {
            let req = self
                .http
                .get(self.messages_url(queue_id))
                .query(&[("limit", limit)]);
            let (status, body) = self.send(req, "dequeue").await?;
            if !status.is_success() {
                return Err(QueueError::backend("dequeue", format!("{status}: {body}")));
            }
            parse_messages(&body)
        })
    }
}

// ═══════════════════════════════════════════════════════════════
//  Response parsing
// ═══════════════════════════════════════════════════════════════

/// Parse an enqueue acknowledgement. Backends that acknowledge with an
/// empty body still count as success.
fn parse_receipt(body: &str) -> Result<Receipt, QueueError> {
    if body.trim().is_empty() {
        return Ok(Receipt { id: None });
    }
    serde_json::from_str(body).map_err(|e| QueueError::backend("enqueue response", e))
}

/// Parse a dequeue response into at most one message.
///
/// Accepts a bare message array (the usual form) or a single message
/// object; an empty body, empty array, or JSON null all mean "nothing
/// ready".
fn parse_messages(body: &str) -> Result<Option<Message>, QueueError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| QueueError::backend("dequeue response", e))?;
    let first = match value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Array(items) => match items.into_iter().next() {
            Some(item) => item,
            None => return Ok(None),
        },
        other => other,
    };
    let message: Message =
        serde_json::from_value(first).map_err(|e| QueueError::backend("dequeue response", e))?;
    Ok(Some(message))
}
