//! Pure request construction shared by the async and blocking clients.
//!
//! Nothing here performs I/O. Identical operations built against the same
//! configuration produce equal [`RequestSpec`] values regardless of which
//! client issues them.

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::{
    config::Config,
    error::Channel3Error,
    types::{Availability, Gender, ListBrandsParams, SearchFilters, SearchRequest},
};

/// A fully-resolved HTTP request, ready to hand to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Logical endpoint path, e.g. `/products/prod_123`
    pub path: String,
    /// Absolute URL with path identifiers percent-encoded
    pub url: String,
    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,
    /// Headers sent with the request
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Option<Bytes>,
}

/// A logical API operation and its arguments
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    /// `POST /search`
    Search(&'a SearchRequest),
    /// `GET /products/{product_id}`
    GetProduct {
        /// Product to fetch
        product_id: &'a str,
    },
    /// `GET /brands`
    ListBrands(&'a ListBrandsParams),
    /// `GET /brands/{brand_id}`
    GetBrand {
        /// Brand to fetch
        brand_id: &'a str,
    },
}

impl Operation<'_> {
    /// Identifier targeted by the operation, if it has one
    #[must_use]
    pub const fn resource_id(&self) -> Option<&str> {
        match self {
            Self::GetProduct { product_id } => Some(*product_id),
            Self::GetBrand { brand_id } => Some(*brand_id),
            Self::Search(_) | Self::ListBrands(_) => None,
        }
    }

    /// Builds the request for this operation
    ///
    /// `headers` are the per-client headers resolved at construction.
    ///
    /// # Errors
    ///
    /// Returns [`Channel3Error::Validation`] if a path identifier is empty or
    /// whitespace-only or a search filter holds a value the API cannot accept, [`Channel3Error::Serde`] if the body cannot be
    /// serialized, and [`Channel3Error::Config`] if the base URL is unusable.
    pub fn build<C: Config + ?Sized>(
        &self,
        config: &C,
        headers: &HeaderMap,
    ) -> Result<RequestSpec, Channel3Error> {
        match *self {
            Self::Search(req) => {
                if let Some(filters) = &req.filters {
                    check_filters(filters)?;
                }
                let mut spec = RequestSpec::new(Method::POST, config, &["search"], headers)?;
                spec.set_json_body(req)?;
                Ok(spec)
            }
            Self::GetProduct { product_id } => {
                let id = require_id("product_id", product_id)?;
                RequestSpec::new(Method::GET, config, &["products", id], headers)
            }
            Self::ListBrands(params) => {
                let mut spec = RequestSpec::new(Method::GET, config, &["brands"], headers)?;
                spec.query = list_query(params);
                Ok(spec)
            }
            Self::GetBrand { brand_id } => {
                let id = require_id("brand_id", brand_id)?;
                RequestSpec::new(Method::GET, config, &["brands", id], headers)
            }
        }
    }
}

impl RequestSpec {
    fn new<C: Config + ?Sized>(
        method: Method,
        config: &C,
        segments: &[&str],
        headers: &HeaderMap,
    ) -> Result<Self, Channel3Error> {
        let mut url = reqwest::Url::parse(&config.url(""))
            .map_err(|e| Channel3Error::Config(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| Channel3Error::Config("Base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);

        Ok(Self {
            method,
            path: format!("/{}", segments.join("/")),
            url: url.into(),
            query: Vec::new(),
            headers: headers.clone(),
            body: None,
        })
    }

    fn set_json_body<B: Serialize + ?Sized>(&mut self, body: &B) -> Result<(), Channel3Error> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| Channel3Error::Serde(format!("Failed to encode request body: {e}")))?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Bytes::from(bytes));
        Ok(())
    }
}

fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str, Channel3Error> {
    if value.trim().is_empty() {
        return Err(Channel3Error::invalid_argument(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(value)
}

fn check_filters(filters: &SearchFilters) -> Result<(), Channel3Error> {
    for (name, price) in [
        ("min_price", filters.min_price),
        ("max_price", filters.max_price),
    ] {
        if price.is_some_and(|p| !p.is_finite()) {
            return Err(Channel3Error::invalid_argument(format!(
                "{name} must be finite"
            )));
        }
    }
    if filters.gender == Some(Gender::Unknown) {
        return Err(Channel3Error::invalid_argument(
            "gender must be a known value",
        ));
    }
    if filters
        .availability
        .as_ref()
        .is_some_and(|a| a.contains(&Availability::Unknown))
    {
        return Err(Channel3Error::invalid_argument(
            "availability must contain only known values",
        ));
    }
    Ok(())
}

fn list_query(params: &ListBrandsParams) -> Vec<(String, String)> {
    let mut query = Vec::new();
    if let Some(page) = params.page {
        query.push(("page".to_string(), page.to_string()));
    }
    if let Some(q) = &params.query {
        query.push(("query".to_string(), q.clone()));
    }
    if let Some(size) = params.size {
        query.push(("size".to_string(), size.to_string()));
    }
    query
}
