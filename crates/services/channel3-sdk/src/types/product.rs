//! Product types returned by `/search` and `/products/{product_id}`
//!
//! These decode the nested response shape (`offers`, `merchant_offerings`,
//! `family`, `family_members`). Fields from the older flat shape
//! (`variants`, top-level `price`/`availability`) are ignored.

use serde::{Deserialize, Serialize};

use super::common::{Availability, Gender, Price, null_as_default};

/// A purchase option for a product at a specific merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Link to the product on the merchant's site
    pub url: String,
    /// Name of the merchant
    pub merchant_name: String,
    /// Price at this merchant
    pub price: Price,
    /// Stock state at this merchant
    #[serde(default)]
    pub availability: Availability,
}

/// A reference to a related product, such as a color or size variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Identifier of the related product
    pub id: String,
    /// Title of the related product
    #[serde(default)]
    pub title: Option<String>,
    /// Primary image of the related product
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A single search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,
    /// Relevance score in `[0, 1]`, when the server sends one
    #[serde(default)]
    pub score: Option<f64>,
    /// Product title
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Name of the brand
    #[serde(default)]
    pub brand_name: Option<String>,
    /// Primary image
    #[serde(default)]
    pub image_url: Option<String>,
    /// Purchase options, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub offers: Vec<Offer>,
    /// Related products
    #[serde(default, deserialize_with = "null_as_default")]
    pub family: Vec<FamilyMember>,
}

/// Full product details returned when fetching a product by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// Unique product identifier (not always echoed by the API)
    #[serde(default)]
    pub id: Option<String>,
    /// Product title
    pub title: String,
    /// Product description
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the brand
    #[serde(default)]
    pub brand_id: Option<String>,
    /// Name of the brand
    #[serde(default)]
    pub brand_name: Option<String>,
    /// All product images
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_urls: Vec<String>,
    /// Target gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Materials the product is made of
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: Vec<String>,
    /// Highlighted features
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_features: Vec<String>,
    /// Related products
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_members: Vec<FamilyMember>,
    /// Purchase options, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub merchant_offerings: Vec<Offer>,
}

impl ProductDetail {
    /// Returns the lowest-priced offering, if any
    ///
    /// Offerings in different currencies are compared by raw amount.
    #[must_use]
    pub fn cheapest_offering(&self) -> Option<&Offer> {
        self.merchant_offerings
            .iter()
            .min_by(|a, b| a.price.amount.total_cmp(&b.price.amount))
    }
}
