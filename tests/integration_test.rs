//! Integration tests for the complete match pipeline
//!
//! These tests validate the end-to-end workflow over synthetic images:
//! - Image loading and decoding
//! - Dominant-color extraction and palette naming
//! - Catalog validation and product ranking
//! - Session cancel-and-replace semantics
//! - Error handling for bad inputs

use colormatch::{
    extract_dominant_colors, match_outfit, match_products, Catalog, ColorInfo, MatchError,
    MatchSession, MatcherConfig, Product,
};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

fn product(id: &str, colors: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        price: Some(29.0),
        image_url: Some(format!("https://cdn.example/{}.jpg", id)),
        available_colors: colors.iter().map(|c| c.to_string()).collect(),
        in_stock: true,
        is_visible: true,
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_match_outfit_file_not_found() {
    let result = match_outfit(Path::new("nonexistent_file.jpg"), &Catalog::default(), None);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), MatchError::ImageLoad { .. }));
}

#[test]
fn test_match_outfit_undecodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_an_image.png");
    std::fs::write(&path, b"definitely not a PNG").unwrap();

    let result = match_outfit(&path, &Catalog::default(), None);
    assert!(matches!(result, Err(MatchError::ImageLoad { .. })));
}

#[test]
fn test_catalog_unavailable_is_error_empty_catalog_is_not() {
    // Missing file: error
    let result = Catalog::from_json_file(Path::new("nonexistent_catalog.json"));
    assert!(matches!(result, Err(MatchError::Catalog { .. })));

    // Empty catalog: valid, matching yields empty results
    let catalog = Catalog::from_json_value(serde_json::json!([])).unwrap();
    let colors = vec![ColorInfo {
        hex: "#F04646".to_string(),
        name: "red".to_string(),
        percentage: 80.0,
    }];
    let matches = match_products(
        &colors,
        catalog.products(),
        None,
        &MatcherConfig::default().matching,
    );
    assert!(matches.is_empty());
}

// ============================================================================
// Extraction Properties
// ============================================================================

#[test]
fn test_fully_transparent_image_detects_nothing() {
    let image = solid(120, 120, [200, 30, 30, 0]);
    let colors = extract_dominant_colors(&image, &MatcherConfig::default());
    assert!(colors.is_empty());
}

#[test]
fn test_solid_red_detected_as_red() {
    // Palette red (239,68,68): alpha 255, brightness 125, saturation ~0.72
    let image = solid(200, 200, [239, 68, 68, 255]);
    let colors = extract_dominant_colors(&image, &MatcherConfig::default());

    assert!(!colors.is_empty());
    assert_eq!(colors[0].name, "red");
}

#[test]
fn test_extraction_is_deterministic() {
    let mut image = solid(240, 240, [239, 68, 68, 255]);
    for y in 120..240 {
        for x in 0..240 {
            image.put_pixel(x, y, Rgba([20, 184, 166, 255]));
        }
    }

    let config = MatcherConfig::default();
    let first = extract_dominant_colors(&image, &config);
    let second = extract_dominant_colors(&image, &config);
    assert_eq!(first, second);
}

#[test]
fn test_white_border_blue_center_scenario() {
    // 100x100: white in the outer 20px border, solid blue inside. The
    // border is excluded by the central crop plus edge margin (and white
    // would fail the brightness filter anyway), so blue dominates.
    let mut image = solid(100, 100, [255, 255, 255, 255]);
    for y in 20..80 {
        for x in 20..80 {
            image.put_pixel(x, y, Rgba([59, 130, 246, 255]));
        }
    }

    let colors = extract_dominant_colors(&image, &MatcherConfig::default());
    assert!(!colors.is_empty());
    assert_eq!(colors[0].name, "blue");
    assert!(colors[0].percentage > 50.0);
}

#[test]
fn test_loaded_image_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("red.png");
    solid(200, 200, [239, 68, 68, 255]).save(&path).unwrap();

    let catalog = Catalog::new(vec![product("scarf", &["red"]), product("bag", &["navy"])]);
    let report = match_outfit(&path, &catalog, None).unwrap();

    assert_eq!(report.detected_colors[0].name, "red");
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].product.id, "scarf");
    assert_eq!(report.matches[0].match_percentage, 100);
}

// ============================================================================
// Matching Properties
// ============================================================================

#[test]
fn test_matches_capped_and_sorted() {
    let mut catalog = Vec::new();
    for i in 0..30 {
        // Alternate between 100% and 50% scorers
        let colors: &[&str] = if i % 2 == 0 { &["red"] } else { &["red", "navy"] };
        catalog.push(product(&format!("p{}", i), colors));
    }

    let colors = vec![ColorInfo {
        hex: "#F04646".to_string(),
        name: "red".to_string(),
        percentage: 90.0,
    }];
    let matches = match_products(&colors, &catalog, None, &MatcherConfig::default().matching);

    assert_eq!(matches.len(), 10);
    for pair in matches.windows(2) {
        assert!(pair[0].match_percentage >= pair[1].match_percentage);
    }
    // With 15 products at 100%, the top 10 are all full matches
    assert!(matches.iter().all(|m| m.match_percentage == 100));
}

#[test]
fn test_excluded_product_absent() {
    let catalog = vec![product("current", &["red"]), product("other", &["red"])];
    let colors = vec![ColorInfo {
        hex: "#F04646".to_string(),
        name: "red".to_string(),
        percentage: 90.0,
    }];

    let matches = match_products(
        &colors,
        &catalog,
        Some("current"),
        &MatcherConfig::default().matching,
    );
    assert!(matches.iter().all(|m| m.product.id != "current"));
}

#[test]
fn test_empty_detected_colors_means_no_matches() {
    let catalog = vec![product("p1", &["red"]), product("p2", &["blue"])];
    let matches = match_products(&[], &catalog, None, &MatcherConfig::default().matching);
    assert!(matches.is_empty());
}

#[test]
fn test_neutral_image_end_to_end_yields_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    solid(150, 150, [128, 128, 128, 255]).save(&path).unwrap();

    let catalog = Catalog::new(vec![product("p1", &["gray"])]);
    let report = match_outfit(&path, &catalog, None).unwrap();

    // Unsaturated gray fails the saturation filter: no colors, no matches,
    // and no error
    assert!(report.detected_colors.is_empty());
    assert!(report.matches.is_empty());
}

// ============================================================================
// Session Semantics
// ============================================================================

#[test]
fn test_session_delivers_only_latest_request() {
    let session = MatchSession::default();
    let catalog = Catalog::new(vec![product("scarf", &["red"])]);
    let image = solid(200, 200, [239, 68, 68, 255]);

    let first = session.begin_request();
    let second = session.begin_request();

    let stale = session.run_request(first, &image, &catalog, None);
    assert!(matches!(stale, Err(MatchError::Superseded)));

    let report = session.run_request(second, &image, &catalog, None).unwrap();
    assert_eq!(report.matches.len(), 1);
}

#[test]
fn test_session_close_drops_in_flight_request() {
    let session = MatchSession::default();
    let token = session.begin_request();
    session.close();

    let image = solid(100, 100, [239, 68, 68, 255]);
    let result = session.run_request(token, &image, &Catalog::default(), None);
    assert!(matches!(result, Err(MatchError::Superseded)));
}
