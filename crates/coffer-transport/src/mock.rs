//! A scripted, in-memory [`HttpTransport`] for tests.
//!
//! Responses are queued up front and handed out in order; every request
//! that reaches the transport is recorded so tests can assert on the
//! exact URL, headers and body that would have gone over the wire.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{HttpRequest, HttpResponse, HttpTransport, TransportError};

enum Scripted {
    Respond(HttpResponse),
    Delayed(Duration, HttpResponse),
    Fail(TransportError),
}

#[derive(Default)]
struct Inner {
    script: VecDeque<Scripted>,
    sent: Vec<HttpRequest>,
}

/// Hands out pre-scripted responses and records what was sent.
///
/// Clones share the same script and log, so a test can keep one handle
/// while the gateway owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    /// Creates a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn respond(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.push(Scripted::Respond(HttpResponse::new(status, body)))
    }

    /// Queues a response that only arrives after `delay`.
    pub fn respond_after(
        &self,
        delay: Duration,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> &Self {
        self.push(Scripted::Delayed(delay, HttpResponse::new(status, body)))
    }

    /// Queues a transport-level failure.
    pub fn fail(&self, error: TransportError) -> &Self {
        self.push(Scripted::Fail(error))
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().sent.clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().sent.last().cloned()
    }

    /// Number of scripted entries not consumed yet.
    pub fn pending(&self) -> usize {
        self.lock().script.len()
    }

    fn push(&self, entry: Scripted) -> &Self {
        self.lock().script.push_back(entry);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panicking test thread can poison the lock; the data is still
        // usable for the remaining assertions.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HttpTransport for MockTransport {
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError> {
        let next = {
            let mut inner = self.lock();
            inner.sent.push(request);
            inner.script.pop_front()
        };

        match next {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Delayed(delay, response)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            Some(Scripted::Fail(error)) => Err(error),
            None => Err(TransportError::SendFailed(std::io::Error::other(
                "mock transport has no scripted response left",
            ))),
        }
    }
}
