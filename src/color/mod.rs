//! Color handling: quantization, naming, and dominant-color extraction

pub mod convert;
pub mod extract;
pub mod palette;

pub use convert::quantize_channel;
pub use extract::{extract_dominant_colors, ColorInfo};
pub use palette::nearest_name;
