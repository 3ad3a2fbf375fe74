//! Mock source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::source::{ResourceRequest, ResourceSource};
use crate::{FetchError, Result};

/// Mock source that answers each path with a canned reply.
///
/// Useful for testing without a running API. Paths with no canned reply
/// answer with status 404.
#[derive(Clone, Default)]
pub struct MockSource {
    replies: HashMap<String, Reply>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
enum Reply {
    Json(serde_json::Value),
    Status(u16),
    Transport(String),
    Decode(String),
}

impl MockSource {
    /// Creates a mock with no canned replies.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_fetch::MockSource;
    ///
    /// let source = MockSource::new()
    ///     .with_json("/certifs/getCertificates", serde_json::json!([]))
    ///     .with_status("/projets/getProjects", 500);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a JSON body.
    pub fn with_json(mut self, path: impl Into<String>, body: serde_json::Value) -> Self {
        self.replies.insert(path.into(), Reply::Json(body));
        self
    }

    /// Answer `path` with a non-success status.
    pub fn with_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.replies.insert(path.into(), Reply::Status(status));
        self
    }

    /// Fail `path` at the transport level.
    pub fn with_transport_error(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.replies
            .insert(path.into(), Reply::Transport(message.into()));
        self
    }

    /// Answer `path` with an undecodable body.
    pub fn with_decode_error(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.replies.insert(path.into(), Reply::Decode(message.into()));
        self
    }

    /// Wait this long before every reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Paths requested so far, in order. Clones share the log.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ResourceSource for MockSource {
    async fn fetch(&self, request: &ResourceRequest) -> Result<serde_json::Value> {
        self.calls.lock().await.push(request.path.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.replies.get(&request.path) {
            Some(Reply::Json(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(FetchError::status(*status)),
            Some(Reply::Transport(message)) => Err(FetchError::transport(request.noun, message)),
            Some(Reply::Decode(message)) => Err(FetchError::decode(message)),
            None => Err(FetchError::status(404)),
        }
    }
}
