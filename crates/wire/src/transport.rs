// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::request::Request;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error text the daemon uses when an account's credentials were rejected.
pub const AUTHORIZATION_FAILED: &str = "[401] Authorization failed!";

/// Errors surfaced by the transport for a single request
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Error reported by the daemon or the socket, message kept verbatim
    #[error("{0}")]
    Failed(String),
    /// Daemon answered with a different response type than expected
    #[error("unexpected response: expected {expected}, got {actual}")]
    UnexpectedResponse { expected: String, actual: String, data: Value },
    #[error("connection to daemon closed")]
    Closed,
    #[error("request timed out")]
    Timeout,
}

impl TransportError {
    /// True when the daemon rejected the account's credentials.
    pub fn is_authorization_failure(&self) -> bool {
        matches!(self, TransportError::Failed(msg) if msg == AUTHORIZATION_FAILED)
    }

    /// Actual response type of an [`TransportError::UnexpectedResponse`].
    pub fn response_type(&self) -> Option<&str> {
        match self {
            TransportError::UnexpectedResponse { actual, .. } => Some(actual),
            _ => None,
        }
    }
}

/// Request/response channel to the daemon.
///
/// Implementations correlate each request with its response and validate the
/// response type against [`Request::response_type`]. Timeouts and
/// cancellation must resolve to an error, never hang.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and wait for the matching response payload.
    async fn request(&self, request: Request) -> Result<Value, TransportError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Transport, TransportError};
    use crate::request::Request;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::Value;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeTransportState {
        calls: Vec<Request>,
        responses: HashMap<String, VecDeque<Result<Value, TransportError>>>,
    }

    /// Fake transport for testing.
    ///
    /// Records every request and replays queued responses per command.
    /// Commands with nothing queued answer with an empty object.
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        inner: Arc<Mutex<FakeTransportState>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response for the next `command` request.
        pub fn respond(&self, command: &str, response: Result<Value, TransportError>) {
            self.inner.lock().responses.entry(command.to_string()).or_default().push_back(response);
        }

        pub fn respond_ok(&self, command: &str, value: Value) {
            self.respond(command, Ok(value));
        }

        pub fn fail(&self, command: &str, error: TransportError) {
            self.respond(command, Err(error));
        }

        /// Get all recorded requests
        pub fn calls(&self) -> Vec<Request> {
            self.inner.lock().calls.clone()
        }

        /// Recorded requests for one command
        pub fn calls_for(&self, command: &str) -> Vec<Request> {
            self.inner.lock().calls.iter().filter(|r| r.command == command).cloned().collect()
        }

        /// Command names in the order they were sent
        pub fn commands(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|r| r.command.clone()).collect()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn request(&self, request: Request) -> Result<Value, TransportError> {
            let mut inner = self.inner.lock();
            let response = inner
                .responses
                .get_mut(&request.command)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| Ok(Value::Object(Default::default())));
            inner.calls.push(request);
            response
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTransport;

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
