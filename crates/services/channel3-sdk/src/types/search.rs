//! Types for the Channel3 `/search` endpoint

use serde::{Deserialize, Serialize};

use super::common::{Availability, Gender};

/// Optional criteria narrowing a search
///
/// Only fields that are set are sent; unset fields are omitted from the
/// request body rather than sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Restrict results to these brands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_ids: Option<Vec<String>>,
    /// Restrict results to a target gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Restrict results to these colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Lowest acceptable price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Highest acceptable price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Restrict results to these stock states
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<Availability>>,
}

impl SearchFilters {
    /// Creates an empty filter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given brand ids
    #[must_use]
    pub fn with_brand_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brand_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to a target gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Restrict to the given colors
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the lowest acceptable price
    #[must_use]
    pub const fn with_min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Set the highest acceptable price
    #[must_use]
    pub const fn with_max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Restrict to the given stock states
    #[must_use]
    pub fn with_availability(mut self, availability: impl Into<Vec<Availability>>) -> Self {
        self.availability = Some(availability.into());
        self
    }
}

/// Request body for `POST /search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query
    pub query: String,

    /// Optional narrowing criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,

    /// Page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl SearchRequest {
    /// Create a new search request with the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: None,
            page: None,
            size: None,
        }
    }

    /// Set the filters
    #[must_use]
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the page number
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}
