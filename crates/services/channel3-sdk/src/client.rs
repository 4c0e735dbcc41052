use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::{Channel3Config, Config},
    error::Channel3Error,
    request::Operation,
    response,
    transport::{self, AsyncTransport},
    types::{Brand, BrandList, ListBrandsParams, Product, ProductDetail, SearchRequest},
};

/// Async Channel3 API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration, and over the [`AsyncTransport`] that
/// carries requests. Configuration and headers are resolved once, at
/// construction, and never change afterwards, so a client can be shared
/// across tasks freely.
#[derive(Debug, Clone)]
pub struct Client<C: Config = Channel3Config, T = reqwest::Client> {
    transport: T,
    config: C,
    headers: HeaderMap,
}

impl Client<Channel3Config> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for configuration:
    /// - `CHANNEL3_API_KEY` for API key authentication
    /// - `CHANNEL3_BASE_URL` for a custom API base URL
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Config`] if no API key is available.
    pub fn new() -> Result<Self, Channel3Error> {
        Self::with_config(Channel3Config::new())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Config`] if the configuration is unusable
    /// or the HTTP client cannot be built.
    pub fn with_config(config: C) -> Result<Self, Channel3Error> {
        config.validate()?;
        let headers = config.headers()?;
        let transport = transport::async_http_client(config.timeout())?;
        Ok(Self {
            transport,
            config,
            headers,
        })
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// The supplied client is used as-is; the configured timeout is not
    /// applied to it.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.transport = http;
        self
    }
}

impl<C: Config, T: AsyncTransport> Client<C, T> {
    /// Replaces the transport, e.g. to intercept requests in tests
    #[must_use]
    pub fn with_transport<U: AsyncTransport>(self, transport: U) -> Client<C, U> {
        Client {
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
    pub async fn search(&self, req: SearchRequest) -> Result<Vec<Product>, Channel3Error> {
        self.execute(Operation::Search(&req)).await
    }

    /// Fetches full details for a product
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Validation`] without sending anything if
    /// `product_id` is empty or whitespace-only, and otherwise an error if the
    /// request fails or the API returns an error.
    pub async fn get_product(&self, product_id: &str) -> Result<ProductDetail, Channel3Error> {
        self.execute(Operation::GetProduct { product_id }).await
    }

    /// Fetches a brand by id
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Validation`] without sending anything if
    /// `brand_id` is empty or whitespace-only, and otherwise an error if the
    /// request fails or the API returns an error.
    pub async fn get_brand(&self, brand_id: &str) -> Result<Brand, Channel3Error> {
        self.execute(Operation::GetBrand { brand_id }).await
    }

    /// Lists brands, optionally filtered by name
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list_brands(&self, params: ListBrandsParams) -> Result<BrandList, Channel3Error> {
        self.execute(Operation::ListBrands(&params)).await
    }

    async fn execute<O: DeserializeOwned>(&self, op: Operation<'_>) -> Result<O, Channel3Error> {
        let spec = op.build(&self.config, &self.headers)?;

        debug!(method = %spec.method, path = %spec.path, "sending request");
        let raw = self.transport.send(&spec).await?;
        debug!(
            method = %spec.method,
            path = %spec.path,
            status = raw.status.as_u16(),
            "received response"
        );

        response::handle(raw.status, &raw.body, op.resource_id())
    }
}
