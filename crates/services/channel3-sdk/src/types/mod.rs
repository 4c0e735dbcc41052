//! Request and response types for the Channel3 API

/// Brand endpoint types
pub mod brand;
/// Shared types used across endpoints
pub mod common;
/// Product types
pub mod product;
/// Search endpoint types
pub mod search;

pub use brand::{Brand, BrandList, ListBrandsParams};
pub use common::{Availability, Gender, Price};
pub use product::{FamilyMember, Offer, Product, ProductDetail};
pub use search::{SearchFilters, SearchRequest};
