//! Configuration structures for the color matching pipeline.
//!
//! All tunable parameters, organized into logical groups for sampling,
//! pixel filtering, bucketing, and product matching.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed
//! programmatically:
//!
//! ```no_run
//! use colormatch::MatcherConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = MatcherConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = MatcherConfig::default();
//! # Ok::<(), colormatch::MatchError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{buckets, filters, matching, sampling};
use crate::error::{MatchError, Result};

/// Complete configuration for color extraction and product matching.
///
/// Can be serialized to/from JSON for reproducible runs. The defaults are
/// the production constants from [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Sampling region configuration
    pub sampling: SamplingConfig,

    /// Per-pixel filter configuration
    pub filters: FilterConfig,

    /// Quantization bucket configuration
    pub buckets: BucketConfig,

    /// Product matching configuration
    pub matching: MatchingConfig,
}

/// Sampling region parameters.
///
/// Controls which part of the image contributes pixels to the scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Fraction of width/height covered by the central focus region (0.0-1.0]
    pub focus_fraction: f32,

    /// Border margin in pixels excluded inside the focus region
    pub edge_margin_px: u32,
}

/// Per-pixel validity filters.
///
/// Pixels failing any filter are excluded from the frequency count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum alpha value; below is near-transparent
    pub min_alpha: u8,

    /// Minimum mean brightness (r+g+b)/3; below is near-black
    pub min_brightness: f32,

    /// Maximum mean brightness; above is near-white
    pub max_brightness: f32,

    /// Minimum saturation (max-min)/max
    pub min_saturation: f32,
}

/// Quantization and bucket filtering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    /// Channel quantization step
    pub quant_step: u8,

    /// Buckets above this share (percent of valid pixels) are treated as
    /// uniform background
    pub max_dominant_share_percent: f64,

    /// Minimum bucket share (percent) kept during filtering
    pub min_bucket_share_percent: f64,

    /// Entries at or below this percentage are dropped from the result
    pub min_report_percent: f64,

    /// Number of top buckets reported
    pub max_reported_colors: usize,
}

/// Product matching parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Maximum number of matched products returned
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig {
                focus_fraction: sampling::FOCUS_FRACTION,
                edge_margin_px: sampling::EDGE_MARGIN_PX,
            },
            filters: FilterConfig {
                min_alpha: filters::MIN_ALPHA,
                min_brightness: filters::MIN_BRIGHTNESS,
                max_brightness: filters::MAX_BRIGHTNESS,
                min_saturation: filters::MIN_SATURATION,
            },
            buckets: BucketConfig {
                quant_step: buckets::QUANT_STEP,
                max_dominant_share_percent: buckets::MAX_DOMINANT_SHARE_PERCENT,
                min_bucket_share_percent: buckets::MIN_BUCKET_SHARE_PERCENT,
                min_report_percent: buckets::MIN_REPORT_PERCENT,
                max_reported_colors: buckets::MAX_REPORTED_COLORS,
            },
            matching: MatchingConfig {
                max_results: matching::MAX_RESULTS,
            },
        }
    }
}

impl MatcherConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Processing`] if the file cannot be read or
    /// parsed, or [`MatchError::InvalidParameter`] if a value is out of
    /// range.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MatchError::processing(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            MatchError::processing(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MatchError::processing(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json).map_err(|e| {
            MatchError::processing(format!("Failed to write config {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.sampling.focus_fraction > 0.0 && self.sampling.focus_fraction <= 1.0) {
            return Err(MatchError::invalid_parameter(
                "sampling.focus_fraction",
                self.sampling.focus_fraction,
            ));
        }
        if self.buckets.quant_step == 0 {
            return Err(MatchError::invalid_parameter(
                "buckets.quant_step",
                self.buckets.quant_step,
            ));
        }
        if self.buckets.max_reported_colors == 0 {
            return Err(MatchError::invalid_parameter(
                "buckets.max_reported_colors",
                self.buckets.max_reported_colors,
            ));
        }
        if !(0.0..=1.0).contains(&self.filters.min_saturation) {
            return Err(MatchError::invalid_parameter(
                "filters.min_saturation",
                self.filters.min_saturation,
            ));
        }
        if self.filters.min_brightness >= self.filters.max_brightness {
            return Err(MatchError::invalid_parameter(
                "filters.min_brightness",
                self.filters.min_brightness,
            ));
        }
        Ok(())
    }
}
