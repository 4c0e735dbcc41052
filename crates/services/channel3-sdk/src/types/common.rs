//! Shared types used across Channel3 API endpoints

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a missing or `null` value as `T::default()`
///
/// Used with `#[serde(default, deserialize_with = ...)]` so optional arrays
/// decode to empty sequences whether the field is absent or explicitly null.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A monetary amount in a given currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Numeric amount (sent on the wire as `price`)
    #[serde(rename = "price")]
    pub amount: f64,
    /// ISO 4217 currency code
    pub currency: String,
}

impl Price {
    /// Creates a price
    #[must_use]
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Stock state of an offer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// Available for purchase now
    InStock,
    /// Not currently available
    OutOfStock,
    /// Can be ordered ahead of release
    PreOrder,
    /// Only a few units left
    LimitedAvailability,
    /// Can be ordered, ships when restocked
    BackOrder,
    /// No longer sold
    Discontinued,
    /// Sold out
    SoldOut,
    /// A state this client does not recognise, or none was given.
    /// Not accepted as a search filter.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Target gender of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Men's products
    Male,
    /// Women's products
    Female,
    /// Products for everyone
    Unisex,
    /// A value this client does not recognise. Not accepted as a search filter.
    #[serde(other)]
    Unknown,
}
