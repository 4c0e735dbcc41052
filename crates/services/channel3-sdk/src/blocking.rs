//! Blocking Channel3 client.
//!
//! Mirrors [`crate::Client`] operation for operation. Both clients build
//! requests and handle responses through the same code; only the transport
//! call differs.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::{Channel3Config, Config},
    error::Channel3Error,
    request::Operation,
    response,
    transport::{self, BlockingTransport},
    types::{Brand, BrandList, ListBrandsParams, Product, ProductDetail, SearchRequest},
};

/// Blocking Channel3 API client
///
/// Each call occupies the calling thread for the full round trip. Must not be
/// created or dropped from within an async runtime when using the default
/// transport; use [`crate::Client`] there instead.
#[derive(Debug, Clone)]
pub struct BlockingClient<C: Config = Channel3Config, T = reqwest::blocking::Client> {
    transport: T,
    config: C,
    headers: HeaderMap,
}

impl BlockingClient<Channel3Config> {
    /// Creates a new client with default configuration
    ///
    /// Reads `CHANNEL3_API_KEY` and `CHANNEL3_BASE_URL` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Config`] if no API key is available.
    pub fn new() -> Result<Self, Channel3Error> {
        Self::with_config(Channel3Config::new())
    }
}

impl<C: Config> BlockingClient<C> {
    /// Creates a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Config`] if the configuration is unusable
    /// or the HTTP client cannot be built.
    pub fn with_config(config: C) -> Result<Self, Channel3Error> {
        config.validate()?;
        let headers = config.headers()?;
        let transport = transport::blocking_http_client(config.timeout())?;
        Ok(Self {
            transport,
            config,
            headers,
        })
    }
}

impl<C: Config, T: BlockingTransport> BlockingClient<C, T> {
    /// Replaces the transport, e.g. to intercept requests in tests
    #[must_use]
    pub fn with_transport<U: BlockingTransport>(self, transport: U) -> BlockingClient<C, U> {
        BlockingClient {
            transport,
            config: self.config,
            headers: self.headers,
        }
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Returns the headers sent with every request
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the transport carrying requests
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Searches for products, returned in server order
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub fn search(&self, req: SearchRequest) -> Result<Vec<Product>, Channel3Error> {
        self.execute(Operation::Search(&req))
    }

    /// Fetches full details for a product
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Validation`] without sending anything if
    /// `product_id` is empty or whitespace-only.
    pub fn get_product(&self, product_id: &str) -> Result<ProductDetail, Channel3Error> {
        self.execute(Operation::GetProduct { product_id })
    }

    /// Fetches a brand by id
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Validation`] without sending anything if
    /// `brand_id` is empty or whitespace-only.
    pub fn get_brand(&self, brand_id: &str) -> Result<Brand, Channel3Error> {
        self.execute(Operation::GetBrand { brand_id })
    }

    /// Lists brands, optionally filtered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub fn list_brands(&self, params: ListBrandsParams) -> Result<BrandList, Channel3Error> {
        self.execute(Operation::ListBrands(&params))
    }

    fn execute<O: DeserializeOwned>(&self, op: Operation<'_>) -> Result<O, Channel3Error> {
        let spec = op.build(&self.config, &self.headers)?;

        debug!(method = %spec.method, path = %spec.path, "sending request");
        let raw = self.transport.send(&spec)?;
        debug!(
            method = %spec.method,
            path = %spec.path,
            status = raw.status.as_u16(),
            "received response"
        );

        response::handle(raw.status, &raw.body, op.resource_id())
    }
}
