//! # colormatch
//!
//! A Rust crate for finding catalog products that match the colors of an
//! outfit photograph.
//!
//! This library provides:
//! - Dominant-color extraction from a photo, biased toward saturated fabric
//!   colors over background
//! - Labeling of detected colors against a fixed named palette
//! - Ranking of catalog products by overlap with their tagged colors
//!
//! ## Example
//!
//! ```rust,no_run
//! use colormatch::{match_outfit, Catalog};
//! use std::path::Path;
//!
//! let catalog = Catalog::from_json_file(Path::new("products.json"))?;
//! let report = match_outfit(Path::new("dress.jpg"), &catalog, None)?;
//! for color in &report.detected_colors {
//!     println!("{} {} ({:.2}%)", color.hex, color.name, color.percentage);
//! }
//! for matched in &report.matches {
//!     println!("{}: {}% match", matched.product.name, matched.match_percentage);
//! }
//! # Ok::<(), colormatch::MatchError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod matching;
pub mod session;

pub use catalog::{Catalog, Product};
pub use color::extract::{extract_dominant_colors, ColorInfo};
pub use config::MatcherConfig;
pub use error::{MatchError, Result};
pub use matching::{match_products, MatchedProduct};
pub use session::{MatchSession, RequestToken};

/// Complete result of one match request
///
/// Both lists may be empty: an image with no valid pixels detects no
/// colors, and zero detected colors match zero products. Neither case is
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Dominant colors detected in the image, descending by percentage
    pub detected_colors: Vec<ColorInfo>,
    /// Ranked product matches, descending by match percentage
    pub matches: Vec<MatchedProduct>,
}

/// Match an outfit photo against a product catalog
///
/// This is the one-shot entry point: it loads and decodes the image,
/// extracts its dominant colors, and ranks the catalog against them using
/// the default configuration. For cancel-and-replace handling across
/// multiple submissions, use [`MatchSession`] instead.
///
/// # Arguments
///
/// * `image_path` - Path to the photo
/// * `catalog` - Validated product catalog (read-only)
/// * `exclude_id` - Product id to leave out of the results, e.g. the
///   product currently being viewed
///
/// # Errors
///
/// Returns [`MatchError::ImageLoad`] if the image cannot be loaded or
/// decoded. A decodable image that yields no colors is a success with
/// empty lists.
pub fn match_outfit(
    image_path: &Path,
    catalog: &Catalog,
    exclude_id: Option<&str>,
) -> Result<MatchReport> {
    match_outfit_with_config(image_path, catalog, exclude_id, &MatcherConfig::default())
}

/// [`match_outfit`] with an explicit configuration
pub fn match_outfit_with_config(
    image_path: &Path,
    catalog: &Catalog,
    exclude_id: Option<&str>,
    config: &MatcherConfig,
) -> Result<MatchReport> {
    let image = image_loader::load_image(image_path)?;
    let detected_colors = extract_dominant_colors(&image, config);
    let matches = match_products(
        &detected_colors,
        catalog.products(),
        exclude_id,
        &config.matching,
    );

    Ok(MatchReport {
        detected_colors,
        matches,
    })
}
