//! Color value conversions: hex strings, quantization, channel math

use crate::error::{MatchError, Result};
use palette::Srgb;

/// Format RGB bytes as an uppercase hex string ("#RRGGBB")
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

/// Format a palette color as an uppercase hex string
pub fn srgb_to_hex(srgb: Srgb<u8>) -> String {
    rgb_to_hex([srgb.red, srgb.green, srgb.blue])
}

/// Parse a hex color string ("#FF0000" or "FF0000") into a palette color
///
/// # Errors
///
/// Returns [`MatchError::Processing`] if the string is not six hex digits.
pub fn hex_to_srgb(hex: &str) -> Result<Srgb<u8>> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(MatchError::processing(format!(
            "Invalid hex color: expected 6 characters, got {}",
            hex.len()
        )));
    }

    let r = u8::from_str_radix(&hex[0..2], 16)
        .map_err(|e| MatchError::processing(format!("Invalid red value: {}", e)))?;
    let g = u8::from_str_radix(&hex[2..4], 16)
        .map_err(|e| MatchError::processing(format!("Invalid green value: {}", e)))?;
    let b = u8::from_str_radix(&hex[4..6], 16)
        .map_err(|e| MatchError::processing(format!("Invalid blue value: {}", e)))?;

    Ok(Srgb::new(r, g, b))
}

/// Quantize a channel value to the nearest multiple of the step
///
/// Rounds half up (5 with step 10 quantizes to 10), then clamps to the
/// largest multiple of the step that fits a byte (255 with step 10 would
/// otherwise round to 260). With the default step this clamp is
/// [`crate::constants::buckets::MAX_QUANTIZED_CHANNEL`].
pub fn quantize_channel(value: u8, step: u8) -> u8 {
    debug_assert!(step > 0);
    let step = step as u32;
    let rounded = (value as u32 + step / 2) / step * step;
    rounded.min(255 / step * step) as u8
}

/// Mean brightness (r+g+b)/3 of a pixel
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as u32 + g as u32 + b as u32) as f32 / 3.0
}

/// Saturation (max-min)/max of a pixel; 0 when max is 0
pub fn saturation(r: u8, g: u8, b: u8) -> f32 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == 0 {
        0.0
    } else {
        (max - min) as f32 / max as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::buckets;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex([255, 0, 0]), "#FF0000");
        assert_eq!(rgb_to_hex([0, 255, 0]), "#00FF00");
        assert_eq!(rgb_to_hex([0, 0, 255]), "#0000FF");
        assert_eq!(rgb_to_hex([240, 70, 70]), "#F04646");
    }

    #[test]
    fn test_hex_to_srgb() {
        let red = hex_to_srgb("#FF0000").unwrap();
        assert_eq!((red.red, red.green, red.blue), (255, 0, 0));

        // Without leading #
        let green = hex_to_srgb("00FF00").unwrap();
        assert_eq!((green.red, green.green, green.blue), (0, 255, 0));
    }

    #[test]
    fn test_hex_to_srgb_invalid() {
        assert!(hex_to_srgb("#FF").is_err());
        assert!(hex_to_srgb("#GGGGGG").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let srgb = hex_to_srgb("#3B82F6").unwrap();
        assert_eq!(srgb_to_hex(srgb), "#3B82F6");
    }

    #[test]
    fn test_quantize_rounds_half_up() {
        // Documented convention: 5 rounds up to 10
        assert_eq!(quantize_channel(5, 10), 10);
        assert_eq!(quantize_channel(4, 10), 0);
        assert_eq!(quantize_channel(14, 10), 10);
        assert_eq!(quantize_channel(15, 10), 20);
    }

    #[test]
    fn test_quantize_clamps_top_of_range() {
        assert_eq!(quantize_channel(250, 10), 250);
        assert_eq!(quantize_channel(255, 10), 250);
        assert_eq!(quantize_channel(246, 10), 250);
        assert_eq!(
            quantize_channel(255, buckets::QUANT_STEP),
            buckets::MAX_QUANTIZED_CHANNEL
        );
    }

    #[test]
    fn test_quantize_merges_nearby_values() {
        // Values within the same step bucket coincide
        assert_eq!(quantize_channel(58, 10), quantize_channel(62, 10));
        // Values a full step apart after rounding stay distinct
        assert_ne!(quantize_channel(58, 10), quantize_channel(72, 10));
    }

    #[test]
    fn test_brightness() {
        assert_eq!(brightness(0, 0, 0), 0.0);
        assert_eq!(brightness(255, 255, 255), 255.0);
        assert!((brightness(239, 68, 68) - 125.0).abs() < 0.001);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(saturation(0, 0, 0), 0.0);
        assert_eq!(saturation(128, 128, 128), 0.0);
        assert_eq!(saturation(255, 0, 0), 1.0);
        let s = saturation(239, 68, 68);
        assert!((s - (239.0 - 68.0) / 239.0).abs() < 0.001);
    }
}
