#![deny(missing_docs)]

//! # `channel3-sdk`
//!
//! Channel3 product search and brand API client, in async ([`Client`]) and
//! blocking ([`BlockingClient`]) flavours.
//!
//! ## Quick Start
//!
//! ```no_run
//! use channel3_sdk::{Client, types::{SearchFilters, SearchRequest, Gender}};
//!
//! # async fn example() -> Result<(), channel3_sdk::Channel3Error> {
//! let client = Client::new()?;
//!
//! let req = SearchRequest::new("running shoes")
//!     .with_filters(SearchFilters::new().with_gender(Gender::Female))
//!     .with_size(10);
//!
//! for product in client.search(req).await? {
//!     println!("{} ({:.2})", product.title, product.score.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! The API key comes from [`Channel3Config::with_api_key`] or, failing that,
//! the `CHANNEL3_API_KEY` environment variable. Construction fails with
//! [`Channel3Error::Config`] when neither is set.
//!
//! ## Errors and retries
//!
//! Every failure is a [`Channel3Error`]. The clients never retry; use
//! [`Channel3Error::is_retryable`] to drive a retry policy of your own.

/// Blocking client
pub mod blocking;
/// Async client
pub mod client;
/// Configuration types for the clients
pub mod config;
/// Error types
pub mod error;
/// Request construction
pub mod request;
/// Response handling
pub mod response;
/// Retry classification helpers
pub mod retry;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// HTTP transport seam
pub mod transport;
/// Request and response types
pub mod types;

pub use crate::blocking::BlockingClient;
pub use crate::client::Client;
pub use crate::config::Channel3Config;
pub use crate::error::{ApiErrorObject, Channel3Error};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{BlockingClient, Channel3Config, Channel3Error, Client};
}
