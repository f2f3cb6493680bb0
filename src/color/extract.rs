//! Dominant-color extraction from an RGBA raster
//!
//! Single-pass pixel-sampling heuristic:
//! - Sampling is restricted to a central focus region, minus an interior
//!   edge margin, to discard likely background.
//! - Near-transparent, near-white, near-black, and low-saturation pixels
//!   are skipped; what survives is biased toward saturated fabric colors.
//! - Surviving pixels are quantized into frequency buckets; buckets that
//!   dominate the sample (uniform background) or fall below a minimum share
//!   are filtered out, with a fallback to the unfiltered table when the
//!   filter would eliminate everything (a uniformly colored garment).
//! - The top buckets are labeled against the fixed named palette.
//!
//! The scan is a pure function of the pixel data and the configuration:
//! no randomness, deterministic output, bounded by image resolution.

use std::collections::HashMap;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::convert::{brightness, quantize_channel, rgb_to_hex, saturation};
use crate::color::palette::nearest_name;
use crate::config::MatcherConfig;

/// A detected dominant color
///
/// `percentage` is this bucket's share of the pixels that survived
/// filtering, not of the whole image; percentages across a result need not
/// sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    /// Quantized bucket value as "#RRGGBB"
    pub hex: String,
    /// Nearest palette name
    pub name: String,
    /// Share of valid sampled pixels, 0-100 with 2 decimal precision
    pub percentage: f64,
}

/// Quantized frequency bucket, keyed by the rounded RGB triple
type BucketCounts = HashMap<[u8; 3], u32>;

/// Extract the dominant colors of an image
///
/// Returns up to `config.buckets.max_reported_colors` entries in descending
/// percentage order. An image with no valid pixels (fully transparent,
/// uniformly neutral) yields an empty vec; callers must treat that as
/// "no colors detected", not an error.
pub fn extract_dominant_colors(image: &RgbaImage, config: &MatcherConfig) -> Vec<ColorInfo> {
    let (counts, valid_pixels) = count_buckets(image, config);

    if valid_pixels == 0 {
        return Vec::new();
    }

    let ranked = rank_buckets(counts, valid_pixels, config);

    ranked
        .into_iter()
        .take(config.buckets.max_reported_colors)
        .map(|(rgb, count)| ColorInfo {
            hex: rgb_to_hex(rgb),
            name: nearest_name(rgb).to_string(),
            percentage: share_percent(count, valid_pixels),
        })
        .filter(|color| color.percentage > config.buckets.min_report_percent)
        .collect()
}

/// Scan the focus region and count quantized buckets over valid pixels
fn count_buckets(image: &RgbaImage, config: &MatcherConfig) -> (BucketCounts, u32) {
    let (width, height) = image.dimensions();

    let focus_width = (width as f32 * config.sampling.focus_fraction).floor() as u32;
    let focus_height = (height as f32 * config.sampling.focus_fraction).floor() as u32;
    let start_x = (width - focus_width) / 2;
    let start_y = (height - focus_height) / 2;
    let margin = config.sampling.edge_margin_px;

    let step = config.buckets.quant_step;
    let mut counts = BucketCounts::new();
    let mut valid_pixels = 0u32;

    for y in 0..focus_height {
        // Interior margin on top and bottom of the focus region
        if y < margin || y + margin > focus_height {
            continue;
        }
        for x in 0..focus_width {
            if x < margin || x + margin > focus_width {
                continue;
            }

            let pixel = image.get_pixel(start_x + x, start_y + y);
            let [r, g, b, a] = pixel.0;

            if a < config.filters.min_alpha {
                continue;
            }

            let bright = brightness(r, g, b);
            if bright > config.filters.max_brightness || bright < config.filters.min_brightness {
                continue;
            }

            if saturation(r, g, b) < config.filters.min_saturation {
                continue;
            }

            let key = [
                quantize_channel(r, step),
                quantize_channel(g, step),
                quantize_channel(b, step),
            ];
            *counts.entry(key).or_insert(0) += 1;
            valid_pixels += 1;
        }
    }

    (counts, valid_pixels)
}

/// Filter and rank buckets by descending frequency
///
/// Drops buckets dominating the sample (uniform background) and buckets
/// below the minimum share; falls back to the unfiltered table when
/// filtering would remove every bucket. Ties in frequency break toward the
/// smaller bucket key so the order is deterministic.
fn rank_buckets(
    counts: BucketCounts,
    valid_pixels: u32,
    config: &MatcherConfig,
) -> Vec<([u8; 3], u32)> {
    let filtered: Vec<([u8; 3], u32)> = counts
        .iter()
        .filter(|(_, &count)| {
            let share = share_of(count, valid_pixels);
            share <= config.buckets.max_dominant_share_percent
                && share >= config.buckets.min_bucket_share_percent
        })
        .map(|(&rgb, &count)| (rgb, count))
        .collect();

    let mut ranked = if filtered.is_empty() {
        counts.into_iter().collect()
    } else {
        filtered
    };

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

fn share_of(count: u32, valid_pixels: u32) -> f64 {
    count as f64 / valid_pixels as f64 * 100.0
}

/// Bucket share rounded to 2 decimal places
fn share_percent(count: u32, valid_pixels: u32) -> f64 {
    (share_of(count, valid_pixels) * 100.0).round() / 100.0
}
