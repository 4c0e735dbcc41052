//! Test-only utilities for safely mutating process-global state in tests
//! and for intercepting requests without a network.

use std::sync::{Arc, Mutex, PoisonError};

use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::StatusCode;

use crate::{
    error::Channel3Error,
    request::RequestSpec,
    transport::{AsyncTransport, BlockingTransport, RawResponse},
};

/// RAII guard for temporarily setting an environment variable.
///
/// The variable is automatically restored to its previous state (or removed if it
/// was not set) when the guard is dropped.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set an environment variable temporarily.
    ///
    /// # Safety
    ///
    /// This function uses `unsafe` because `std::env::set_var` can cause data races
    /// if called concurrently. Safe when used with `#[serial(env)]`.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Remove an environment variable temporarily.
    ///
    /// # Safety
    ///
    /// This function uses `unsafe` because `std::env::remove_var` can cause data races
    /// if called concurrently. Safe when used with `#[serial(env)]`.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Transport that records every request and answers with a canned response.
///
/// Clones share the same record, so a test can keep one handle and give
/// another to a client. Implements both transport traits.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    response: RawResponse,
    requests: Arc<Mutex<Vec<RequestSpec>>>,
}

impl RecordingTransport {
    /// Answers every request with `status` and `body`
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            response: RawResponse {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body: body.into(),
            },
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answers every request with `200 OK` and `body` serialized as JSON
    #[must_use]
    pub fn json(body: &serde_json::Value) -> Self {
        Self::new(200, body.to_string())
    }

    /// Returns every request sent so far, oldest first
    #[must_use]
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many requests were sent
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn record(&self, request: &RequestSpec) -> RawResponse {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.response.clone()
    }
}

impl AsyncTransport for RecordingTransport {
    fn send<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> BoxFuture<'a, Result<RawResponse, Channel3Error>> {
        let response = self.record(request);
        Box::pin(futures::future::ready(Ok(response)))
    }
}

impl BlockingTransport for RecordingTransport {
    fn send(&self, request: &RequestSpec) -> Result<RawResponse, Channel3Error> {
        Ok(self.record(request))
    }
}
