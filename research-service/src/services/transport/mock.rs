//! Recording transport for tests.

use super::{GenerationTransport, TransportError};
use crate::services::gemini::GenerateContentRequest;
use async_trait::async_trait;
use std::sync::Mutex;

/// One call observed by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub request: GenerateContentRequest,
}

enum Reply {
    Body(String),
    Failure(String),
}

/// Answers every call with the same canned body or failure and remembers what
/// was sent.
pub struct MockTransport {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn responding_with(body: impl Into<String>) -> Self {
        Self::new(Reply::Body(body.into()))
    }

    pub fn failing_with(message: impl Into<String>) -> Self {
        Self::new(Reply::Failure(message.into()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    /// Prompt text of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.calls().pop().and_then(|call| {
            call.request
                .contents
                .into_iter()
                .next()?
                .parts
                .into_iter()
                .next()
                .map(|part| part.text)
        })
    }
}

#[async_trait]
impl GenerationTransport for MockTransport {
    async fn send(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, TransportError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                url: url.to_string(),
                request: request.clone(),
            });
        }

        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Failure(message) => Err(TransportError::Other(message.clone())),
        }
    }
}
