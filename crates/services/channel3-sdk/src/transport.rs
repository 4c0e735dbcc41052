//! The seam between the clients and the HTTP stack.
//!
//! Transports only move bytes: they send a [`RequestSpec`] and return the
//! status and body, or [`Channel3Error::Connection`] when no response was
//! obtained. Status classification and decoding happen in
//! [`crate::response`].

use std::time::Duration;

use bytes::Bytes;
use futures::future::BoxFuture;
use reqwest::StatusCode;

use crate::{error::Channel3Error, request::RequestSpec};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Full response body
    pub body: Bytes,
}

/// Sends requests for the async [`Client`](crate::Client)
pub trait AsyncTransport: Send + Sync {
    /// Sends `request`, suspending until the full response body is read
    fn send<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> BoxFuture<'a, Result<RawResponse, Channel3Error>>;
}

/// Sends requests for the [`BlockingClient`](crate::BlockingClient)
pub trait BlockingTransport: Send + Sync {
    /// Sends `request`, blocking until the full response body is read
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Connection`] if no response was obtained.
    fn send(&self, request: &RequestSpec) -> Result<RawResponse, Channel3Error>;
}

impl AsyncTransport for reqwest::Client {
    fn send<'a>(
        &'a self,
        request: &'a RequestSpec,
    ) -> BoxFuture<'a, Result<RawResponse, Channel3Error>> {
        Box::pin(async move {
            let mut builder = self
                .request(request.method.clone(), request.url.as_str())
                .headers(request.headers.clone());
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let response = builder.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, Channel3Error>(RawResponse { status, body })
        })
    }
}

impl BlockingTransport for reqwest::blocking::Client {
    fn send(&self, request: &RequestSpec) -> Result<RawResponse, Channel3Error> {
        let mut builder = self
            .request(request.method.clone(), request.url.as_str())
            .headers(request.headers.clone());
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_vec());
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?;
        Ok(RawResponse { status, body })
    }
}

/// Builds the default async transport with the given round-trip timeout
///
/// # Errors
///
/// Returns [`Channel3Error::Config`] if the HTTP client cannot be built.
pub fn async_http_client(timeout: Duration) -> Result<reqwest::Client, Channel3Error> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
        .map_err(|e| Channel3Error::Config(format!("Failed to build HTTP client: {e}")))
}

/// Builds the default blocking transport with the given round-trip timeout
///
/// # Errors
///
/// Returns [`Channel3Error::Config`] if the HTTP client cannot be built.
pub fn blocking_http_client(timeout: Duration) -> Result<reqwest::blocking::Client, Channel3Error> {
    reqwest::blocking::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()
        .map_err(|e| Channel3Error::Config(format!("Failed to build HTTP client: {e}")))
}
