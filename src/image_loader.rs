//! Image loading with format detection and size capping
//!
//! Single entry point for decoding photos into RGBA pixel buffers.
//!
//! ## Supported Formats
//!
//! Via the `image` crate: JPEG, PNG, GIF, WebP, TIFF, BMP.
//!
//! ## Design
//!
//! All images are decoded to `RgbaImage` so the extraction scan sees a
//! uniform RGBA raster regardless of source format. Very large photos are
//! downscaled to a processing cap before sampling; the pixel scan is bounded
//! by resolution, so this keeps worst-case latency in check on smartphone
//! originals.

use crate::constants::performance;
use crate::error::{MatchError, Result};
use image::{imageops, RgbaImage};
use std::path::Path;

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &["jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp"]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

/// Load an image from disk as an RGBA buffer
///
/// Detects the format from the file extension, decodes, and downscales if
/// the image exceeds the processing cap.
///
/// # Errors
///
/// Returns [`MatchError::ImageLoad`] if the file cannot be opened or
/// decoded, or [`MatchError::Processing`] if the extension is unknown.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    ImageFormat::from_extension(path).ok_or_else(|| {
        MatchError::processing(format!(
            "Unknown image format for file: {}",
            path.display()
        ))
    })?;

    let reader = image::ImageReader::open(path).map_err(|e| {
        MatchError::image_load(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;

    let img = reader.decode().map_err(|e| {
        MatchError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    Ok(cap_size(img.to_rgba8()))
}

/// Decode an in-memory image buffer (file upload or camera capture)
///
/// # Errors
///
/// Returns [`MatchError::ImageLoad`] if the bytes are not a decodable image.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| MatchError::image_load("Failed to decode image buffer", e))?;
    Ok(cap_size(img.to_rgba8()))
}

/// Downscale images above the processing cap, preserving aspect ratio
fn cap_size(image: RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let pixels = width as u64 * height as u64;

    if pixels <= performance::MAX_PROCESSING_PIXELS as u64 {
        return image;
    }

    let scale = (performance::DOWNSCALE_TARGET_PIXELS as f64 / pixels as f64).sqrt();
    let new_width = ((width as f64 * scale) as u32).max(1);
    let new_height = ((height as f64 * scale) as u32).max(1);

    imageops::resize(&image, new_width, new_height, imageops::FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("photo.xyz")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("webp"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("nonexistent_file.jpg"));
        assert!(matches!(result, Err(MatchError::ImageLoad { .. })));
    }

    #[test]
    fn test_load_image_unknown_extension() {
        let result = load_image(Path::new("whatever.xyz"));
        assert!(matches!(result, Err(MatchError::Processing { .. })));
    }

    #[test]
    fn test_decode_image_garbage() {
        let result = decode_image(&[0u8, 1, 2, 3]);
        assert!(matches!(result, Err(MatchError::ImageLoad { .. })));
    }

    #[test]
    fn test_cap_size_leaves_small_images_alone() {
        let img = RgbaImage::from_pixel(64, 64, image::Rgba([10, 20, 30, 255]));
        let capped = cap_size(img);
        assert_eq!(capped.dimensions(), (64, 64));
    }
}
