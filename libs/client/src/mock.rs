//! Scripted in-process backend for loop tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use tokio::time::Instant;

use queue_api::{Message, QueueError, QueueInfo, QueueService, Reading, Receipt};

/// One scripted dequeue outcome. Once the script drains, every further
/// poll reports an empty queue.
pub enum Poll {
    Empty,
    Item(Message),
    Fail(&'static str),
}

pub struct MockQueue {
    info: Option<QueueInfo>,
    polls: Mutex<VecDeque<Poll>>,
    enqueued: Mutex<Vec<Reading>>,
    enqueue_fail_at: Option<usize>,
    dequeue_times: Mutex<Vec<Instant>>,
}

impl MockQueue {
    pub fn with_queue(id: &str, name: &str) -> Self {
        Self {
            info: Some(QueueInfo {
                id: id.into(),
                name: name.into(),
                description: None,
            }),
            polls: Mutex::new(VecDeque::new()),
            enqueued: Mutex::new(Vec::new()),
            enqueue_fail_at: None,
            dequeue_times: Mutex::new(Vec::new()),
        }
    }

    pub fn script(self, polls: Vec<Poll>) -> Self {
        Self {
            polls: Mutex::new(polls.into()),
            ..self
        }
    }

    /// Fail the enqueue with 0-based index `index`; earlier sends succeed.
    pub fn fail_enqueue_at(self, index: usize) -> Self {
        Self {
            enqueue_fail_at: Some(index),
            ..self
        }
    }

    pub fn enqueued(&self) -> Vec<Reading> {
        self.enqueued.lock().unwrap().clone()
    }

    /// Virtual instants at which `dequeue` was called, in order.
    pub fn dequeue_times(&self) -> Vec<Instant> {
        self.dequeue_times.lock().unwrap().clone()
    }
}

pub fn message(id: &str, content: serde_json::Value) -> Message {
    Message {
        id: Some(id.into()),
        content,
    }
}

impl QueueService for MockQueue {
    fn read<'a>(
        &'a self,
        queue_id: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<QueueInfo>, QueueError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.info.clone().filter(|q| q.id == queue_id)) })
    }

    fn enqueue<'a>(
        &'a self,
        _queue_id: &'a str,
        reading: &'a Reading,
    ) -> Pin<Box<dyn Future<Output = Result<Receipt, QueueError>> + Send + 'a>> {
        Box::pin(async move {
            let mut sent = self.enqueued.lock().unwrap();
            if self.enqueue_fail_at == Some(sent.len()) {
                return Err(QueueError::Backend("scripted enqueue failure".into()));
            }
            sent.push(reading.clone());
            Ok(Receipt {
                id: Some(format!("msg-{}", sent.len())),
            })
        })
    }

    fn dequeue<'a>(
        &'a self,
        _queue_id: &'a str,
        _limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Message>, QueueError>> + Send + 'a>> {
        Box::pin(async move {
            self.dequeue_times.lock().unwrap().push(Instant::now());
            match self.polls.lock().unwrap().pop_front() {
                None | Some(Poll::Empty) => Ok(None),
                Some(Poll::Item(message)) => Ok(Some(message)),
                Some(Poll::Fail(detail)) => Err(QueueError::Backend(detail.into())),
            }
        })
    }
}
