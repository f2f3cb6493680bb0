//! Ranking catalog products against detected colors
//!
//! A product scores by how much of its own color tagging is covered by the
//! detected set, not by how many detected colors it uses. A scarf tagged
//! only "red" scores 100% against a red dress even if the dress also shows
//! white and gold.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::color::extract::ColorInfo;
use crate::config::MatchingConfig;

/// A catalog product ranked against the detected colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedProduct {
    /// The matched product
    pub product: Product,
    /// round(100 * |matching colors| / |product's tagged colors|)
    pub match_percentage: u32,
    /// Tagged colors present in the detected set, lowercased
    pub matching_colors: Vec<String>,
}

/// Rank catalog products by color overlap with the detected set
///
/// Only in-stock, visible products with a non-empty tag list are
/// considered; `exclude_id` removes the product currently being viewed.
/// Matching is a case-insensitive comparison of palette names. Results are
/// sorted by descending percentage with catalog order preserved on ties
/// (stable sort), truncated to `config.max_results`.
///
/// An empty detected set yields an empty result: no product can match zero
/// colors.
pub fn match_products(
    colors: &[ColorInfo],
    catalog: &[Product],
    exclude_id: Option<&str>,
    config: &MatchingConfig,
) -> Vec<MatchedProduct> {
    if colors.is_empty() {
        return Vec::new();
    }

    let detected: Vec<String> = colors.iter().map(|c| c.name.to_lowercase()).collect();

    let mut matches: Vec<MatchedProduct> = catalog
        .iter()
        .filter(|product| is_candidate(product, exclude_id))
        .filter_map(|product| score_product(product, &detected))
        .collect();

    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches.truncate(config.max_results);
    matches
}

/// Candidate filter: purchasable, not hidden, tagged, not the excluded id
fn is_candidate(product: &Product, exclude_id: Option<&str>) -> bool {
    product.in_stock
        && product.is_visible
        && !product.available_colors.is_empty()
        && exclude_id != Some(product.id.as_str())
}

/// Score one product; `None` when no tagged color overlaps
fn score_product(product: &Product, detected: &[String]) -> Option<MatchedProduct> {
    let tagged: Vec<String> = product
        .available_colors
        .iter()
        .map(|c| c.to_lowercase())
        .collect();

    let matching_colors: Vec<String> = tagged
        .iter()
        .filter(|color| detected.contains(color))
        .cloned()
        .collect();

    if matching_colors.is_empty() {
        return None;
    }

    let match_percentage =
        (matching_colors.len() as f64 / tagged.len() as f64 * 100.0).round() as u32;

    Some(MatchedProduct {
        product: product.clone(),
        match_percentage,
        matching_colors,
    })
}
