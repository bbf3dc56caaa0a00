use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Catalog record. `image` is a public path like `/images/shirt.png`, empty
/// until an upload is attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Price as sent by clients: either a JSON number or a numeric string
/// (the form posts strings).
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Product creation request body.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewProduct {
    /// Validate and coerce, yielding the name and numeric price.
    pub fn validate(&self) -> Result<(String, f64), ModelError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ModelError::Validation("Name and price are required".into()))?;
        let price = self
            .price
            .as_ref()
            .ok_or_else(|| ModelError::Validation("Name and price are required".into()))?;
        let price = price
            .as_number()
            .filter(|p| p.is_finite())
            .ok_or_else(|| ModelError::Validation("Price must be a valid number".into()))?;
        if price < 0.0 {
            return Err(ModelError::Validation("Price must not be negative".into()));
        }
        Ok((name.to_string(), price))
    }
}
