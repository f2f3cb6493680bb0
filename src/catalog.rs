//! Typed boundary over external product data
//!
//! The catalog collaborator stores products as schemaless JSON rows (either
//! an array, or an object keyed by product id). Everything entering the
//! library is validated here into [`Product`] records; malformed rows are
//! skipped rather than propagated with missing fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{MatchError, Result};

/// A validated catalog product
///
/// Read-only input to the matcher; nothing in this crate mutates catalog
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Price, if the row carried one
    pub price: Option<f64>,
    /// Primary image URL
    pub image_url: Option<String>,
    /// Tagged color names ("red", "navy", ...)
    pub available_colors: Vec<String>,
    /// Whether the product is purchasable
    pub in_stock: bool,
    /// Whether the product is shown in listings
    pub is_visible: bool,
}

/// Raw product row as stored by the catalog backend
///
/// Field names follow the backend's mixed conventions; every field is
/// optional because rows have no enforced schema.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawProduct {
    id: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    image_url: Option<String>,
    #[serde(rename = "availableColors")]
    available_colors: Option<Vec<String>>,
    in_stock: Option<bool>,
    #[serde(rename = "isVisible")]
    is_visible: Option<bool>,
}

impl RawProduct {
    /// Validate into a [`Product`], defaulting optional fields
    ///
    /// `fallback_id` is the object key when the catalog is id-keyed.
    /// Returns `None` for rows without any usable id.
    fn validate(self, fallback_id: Option<&str>) -> Option<Product> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .or_else(|| fallback_id.map(str::to_string))?;
        if id.is_empty() {
            return None;
        }

        Some(Product {
            id,
            name: self.name.unwrap_or_default(),
            price: self.price,
            image_url: self.image_url,
            available_colors: self.available_colors.unwrap_or_default(),
            // Missing stock flag means not purchasable; missing visibility
            // means visible (only an explicit false hides a product)
            in_stock: self.in_stock.unwrap_or(false),
            is_visible: self.is_visible.unwrap_or(true),
        })
    }
}

/// A validated product catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-validated products
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from a JSON value
    ///
    /// Accepts either a JSON array of rows or an object mapping product id
    /// to row. Rows that fail validation are skipped. An empty catalog is
    /// valid; a value of the wrong shape is not.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Catalog`] if `value` is neither array nor
    /// object.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let products = match value {
            Value::Array(rows) => rows
                .into_iter()
                .filter_map(|row| {
                    serde_json::from_value::<RawProduct>(row)
                        .ok()
                        .and_then(|raw| raw.validate(None))
                })
                .collect(),
            Value::Object(rows) => rows
                .into_iter()
                .filter_map(|(key, row)| {
                    serde_json::from_value::<RawProduct>(row)
                        .ok()
                        .and_then(|raw| raw.validate(Some(&key)))
                })
                .collect(),
            _ => {
                return Err(MatchError::catalog_message(
                    "Catalog data must be a JSON array or object",
                ))
            }
        };

        Ok(Self { products })
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Catalog`] if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatchError::catalog(format!("Failed to read catalog {}", path.display()), e)
        })?;
        let value: Value = serde_json::from_str(&content).map_err(|e| {
            MatchError::catalog(format!("Failed to parse catalog {}", path.display()), e)
        })?;
        Self::from_json_value(value)
    }

    /// Validated products, in source order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
