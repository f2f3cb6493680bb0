//! Command-line interface for colormatch
//!
//! Basic CLI tool for testing color extraction and product matching

use colormatch::{match_outfit_with_config, Catalog, MatchReport, MatcherConfig};
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut exclude_id = None;
    let mut config_path = None;
    let mut image_path_arg = None;
    let mut catalog_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--exclude" => {
                if i + 1 < args.len() {
                    exclude_id = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --exclude requires a product id");
                    process::exit(1);
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else if catalog_path_arg.is_none() {
                    catalog_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Too many positional arguments");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let (image_path_str, catalog_path_str) = match (image_path_arg, catalog_path_arg) {
        (Some(image), Some(catalog)) => (image, catalog),
        _ => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);
    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match MatcherConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Failed to load config: {}", error);
                process::exit(1);
            }
        },
        None => MatcherConfig::default(),
    };

    let catalog = match Catalog::from_json_file(Path::new(&catalog_path_str)) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("Failed to load catalog: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    match match_outfit_with_config(image_path, &catalog, exclude_id.as_deref(), &config) {
        Ok(report) => print_report(&report),
        Err(error) => {
            eprintln!("Matching failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path> <catalog.json>", program_name);
    eprintln!();
    eprintln!("Detect the dominant colors of an outfit photo and rank catalog");
    eprintln!("products by color overlap.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --exclude ID     Leave this product id out of the results");
    eprintln!("  --config FILE    Load matcher configuration from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} dress.jpg products.json", program_name);
    eprintln!("  {} --exclude prod-42 dress.jpg products.json", program_name);
}

fn print_report(report: &MatchReport) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            process::exit(1);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Detected Colors:");
    if report.detected_colors.is_empty() {
        eprintln!("  (none - image may be mostly neutral or transparent)");
    }
    for color in &report.detected_colors {
        eprintln!("  {} {} ({:.2}%)", color.hex, color.name, color.percentage);
    }

    eprintln!();
    eprintln!("Matched Products: {}", report.matches.len());
    for matched in &report.matches {
        eprintln!(
            "  {} - {}% match ({})",
            matched.product.name,
            matched.match_percentage,
            matched.matching_colors.join(", ")
        );
    }
}
