//! Brand types returned by `/brands` and `/brands/{brand_id}`

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// A brand known to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Unique brand identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Logo image
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Short description of the brand
    #[serde(default)]
    pub description: Option<String>,
}

/// Query parameters for `GET /brands`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBrandsParams {
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Name filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ListBrandsParams {
    /// Creates empty list parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the name filter
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Result of `GET /brands`
///
/// The endpoint answers either with a bare array of brands or with a paged
/// object; both decode to this type, with paging fields left empty for the
/// bare form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BrandListWire")]
pub struct BrandList {
    /// Brands on this page, in server order
    pub items: Vec<Brand>,
    /// Current page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Total number of brands matching the query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Total number of pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl BrandList {
    /// Returns the brands on this page
    #[must_use]
    pub fn into_items(self) -> Vec<Brand> {
        self.items
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BrandListWire {
    Bare(Vec<Brand>),
    Paged {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<Brand>,
        #[serde(default)]
        page: Option<u32>,
        #[serde(default)]
        size: Option<u32>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        pages: Option<u32>,
    },
}

impl From<BrandListWire> for BrandList {
    fn from(wire: BrandListWire) -> Self {
        match wire {
            BrandListWire::Bare(items) => Self {
                items,
                ..Self::default()
            },
            BrandListWire::Paged {
                items,
                page,
                size,
                total,
                pages,
            } => Self {
                items,
                page,
                size,
                total,
                pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn brand_json() -> serde_json::Value {
        json!({
            "id": "brand_123",
            "name": "Test Brand",
            "logo_url": "https://example.com/logo.jpg",
            "description": "Test brand description"
        })
    }

    #[test]
    fn brand_optional_fields_default_to_none() {
        let b: Brand = serde_json::from_value(json!({"id": "b", "name": "B"})).unwrap();
        assert!(b.logo_url.is_none());
        assert!(b.description.is_none());
    }

    #[test]
    fn bare_and_paged_lists_yield_same_items() {
        let bare: BrandList = serde_json::from_value(json!([brand_json()])).unwrap();
        let paged: BrandList = serde_json::from_value(json!({
            "items": [brand_json()],
            "page": 1,
            "size": 20,
            "total": 1,
            "pages": 1
        }))
        .unwrap();

        assert_eq!(bare.items, paged.items);
        assert_eq!(bare.page, None);
        assert_eq!(paged.page, Some(1));
        assert_eq!(paged.total, Some(1));
        assert_eq!(paged.into_items()[0].id, "brand_123");
    }

    #[test]
    fn paged_list_with_null_items_is_empty() {
        let list: BrandList = serde_json::from_value(json!({"items": null, "total": 0})).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.total, Some(0));
    }

    #[test]
    fn list_params_omit_unset_fields() {
        let v = serde_json::to_value(ListBrandsParams::new().with_query("nike")).unwrap();
        assert_eq!(v, json!({"query": "nike"}));
    }
}
