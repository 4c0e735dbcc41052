//! Pure response handling shared by the async and blocking clients.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{self, Channel3Error};

/// Turns a raw status and body into a decoded value or a typed error
///
/// Any 2xx status decodes `body` as `T`. Every other status is classified by
/// [`error::from_status`]; `resource_id` is attached to not-found errors.
///
/// # Errors
///
/// Returns the taxonomy error for non-2xx statuses, or
/// [`Channel3Error::Serde`] if a success body cannot be decoded as `T`.
pub fn handle<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    resource_id: Option<&str>,
) -> Result<T, Channel3Error> {
    if !status.is_success() {
        return Err(error::from_status(status, body, resource_id));
    }

    serde_json::from_slice(body).map_err(|e| error::map_deser(&e, body))
}
