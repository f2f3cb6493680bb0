//! Tuning constants for color extraction and product matching
//!
//! The filter and bucket thresholds are empirical values carried over from
//! the production matcher. They are the only "policy" in the algorithm;
//! changing them changes matching behavior silently, so treat them as fixed
//! unless a recalibration is explicitly requested.

/// Sampling region parameters
pub mod sampling {
    /// Fraction of image width/height covered by the central focus region
    pub const FOCUS_FRACTION: f32 = 0.8;

    /// Border margin (pixels) excluded inside the focus region to suppress
    /// background bleed
    pub const EDGE_MARGIN_PX: u32 = 30;
}

/// Per-pixel validity filters
pub mod filters {
    /// Minimum alpha for a pixel to count (below is near-transparent)
    pub const MIN_ALPHA: u8 = 200;

    /// Mean-brightness bounds; pixels outside (near-black / near-white)
    /// are skipped
    pub const MIN_BRIGHTNESS: f32 = 15.0;
    pub const MAX_BRIGHTNESS: f32 = 240.0;

    /// Minimum saturation (max-min)/max; biases detection toward saturated
    /// fabric colors over neutral background
    pub const MIN_SATURATION: f32 = 0.25;
}

/// Quantization and frequency-bucket parameters
pub mod buckets {
    /// Channel quantization step; merges near-identical shades and bounds
    /// bucket cardinality to at most 26x26x26
    pub const QUANT_STEP: u8 = 10;

    /// Largest quantized channel value. 255 rounds half-up to 260, which
    /// does not fit a byte, so quantization clamps here.
    pub const MAX_QUANTIZED_CHANNEL: u8 = 250;

    /// Buckets above this share of valid pixels are treated as uniform
    /// background and dropped (unless that would drop every bucket)
    pub const MAX_DOMINANT_SHARE_PERCENT: f64 = 40.0;

    /// Minimum bucket share kept during filtering
    pub const MIN_BUCKET_SHARE_PERCENT: f64 = 1.0;

    /// Post-filter reporting threshold; entries at or below are dropped
    pub const MIN_REPORT_PERCENT: f64 = 1.5;

    /// Number of top buckets reported
    pub const MAX_REPORTED_COLORS: usize = 5;
}

/// Product matching parameters
pub mod matching {
    /// Maximum number of matched products returned
    pub const MAX_RESULTS: usize = 10;
}

/// Performance limits
pub mod performance {
    /// Maximum image size to process without downscaling
    pub const MAX_PROCESSING_PIXELS: u32 = 16_000_000; // 16MP

    /// Downscale target for very large images
    pub const DOWNSCALE_TARGET_PIXELS: u32 = 8_000_000; // 8MP
}
