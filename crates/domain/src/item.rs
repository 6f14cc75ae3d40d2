//! Item — the record managed by the inventory.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InventoryError, ValidationError};

/// An inventory record. Identity is external: the store key, not a field.
///
/// Fields missing from an incoming payload, or sent as `null`, fall back to
/// their zero value so that [`Item::validate`] decides whether the record is
/// acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub description: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tunable field rules applied by [`Item::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Accept `price == 0`. Off by default: a zero price is indistinguishable
    /// from a missing one on the wire, and the service has always rejected it.
    pub allow_zero_price: bool,
}

impl Item {
    /// Create a builder for constructing an [`Item`].
    #[must_use]
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    /// Decode an item from a raw JSON request body.
    ///
    /// Only the first JSON value is read; anything after it is ignored. A
    /// bare `null` decodes to an all-zero item, left for validation to reject.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::PayloadMalformed`] when `body` does not start
    /// with a JSON object matching the item shape.
    pub fn from_json(body: &[u8]) -> Result<Self, InventoryError> {
        let mut deserializer = serde_json::Deserializer::from_slice(body);
        let item = Option::<Self>::deserialize(&mut deserializer)?;
        Ok(item.unwrap_or_default())
    }

    /// Check field rules.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] when `name` is empty, or when
    /// `price` is zero and the policy does not allow it.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self, policy: ValidationPolicy) -> Result<(), InventoryError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.price == 0.0 && !policy.allow_zero_price {
            return Err(ValidationError::MissingPrice.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Item`].
#[derive(Debug, Default)]
pub struct ItemBuilder {
    name: Option<String>,
    price: Option<f64>,
    description: Option<String>,
}

impl ItemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate with the default policy, and return an [`Item`].
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if `name` or `price` is missing.
    pub fn build(self) -> Result<Item, InventoryError> {
        let item = Item {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        item.validate(ValidationPolicy::default())?;
        Ok(item)
    }
}
