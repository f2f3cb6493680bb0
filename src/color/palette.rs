//! Fixed palette of named reference colors
//!
//! Detected buckets and product color tags are both labeled against this
//! table. It is a process-wide constant; names are lowercase so matching
//! can compare them directly.

use palette::Srgb;

/// A named reference color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Lowercase canonical name
    pub name: &'static str,
    /// Reference value as RGB bytes
    pub rgb: [u8; 3],
}

impl NamedColor {
    /// Reference value as a palette color
    pub fn srgb(&self) -> Srgb<u8> {
        Srgb::new(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// The fixed named palette.
///
/// "grey" is a deliberate alias of "gray" so both spellings in product tags
/// resolve to the same reference value.
pub const NAMED_COLORS: [NamedColor; 22] = [
    NamedColor { name: "red", rgb: [0xEF, 0x44, 0x44] },
    NamedColor { name: "blue", rgb: [0x3B, 0x82, 0xF6] },
    NamedColor { name: "green", rgb: [0x10, 0xB9, 0x81] },
    NamedColor { name: "yellow", rgb: [0xF5, 0x9E, 0x0B] },
    NamedColor { name: "black", rgb: [0x00, 0x00, 0x00] },
    NamedColor { name: "white", rgb: [0xFF, 0xFF, 0xFF] },
    NamedColor { name: "gray", rgb: [0x6B, 0x72, 0x80] },
    NamedColor { name: "grey", rgb: [0x6B, 0x72, 0x80] },
    NamedColor { name: "pink", rgb: [0xEC, 0x48, 0x99] },
    NamedColor { name: "purple", rgb: [0xA8, 0x55, 0xF7] },
    NamedColor { name: "orange", rgb: [0xF9, 0x73, 0x16] },
    NamedColor { name: "brown", rgb: [0x92, 0x40, 0x0E] },
    NamedColor { name: "navy", rgb: [0x1E, 0x3A, 0x8A] },
    NamedColor { name: "beige", rgb: [0xD4, 0xC5, 0xB9] },
    NamedColor { name: "cream", rgb: [0xFF, 0xFD, 0xD0] },
    NamedColor { name: "maroon", rgb: [0x80, 0x00, 0x00] },
    NamedColor { name: "gold", rgb: [0xFF, 0xD7, 0x00] },
    NamedColor { name: "silver", rgb: [0xC0, 0xC0, 0xC0] },
    NamedColor { name: "teal", rgb: [0x14, 0xB8, 0xA6] },
    NamedColor { name: "cyan", rgb: [0x06, 0xB6, 0xD4] },
    NamedColor { name: "lime", rgb: [0x84, 0xCC, 0x16] },
    NamedColor { name: "indigo", rgb: [0x63, 0x66, 0xF1] },
];

/// Resolve the nearest palette name for an RGB value
///
/// Minimum Euclidean distance in RGB space; ties break toward the earlier
/// table entry (first minimum wins), so results are deterministic.
pub fn nearest_name(rgb: [u8; 3]) -> &'static str {
    let mut best = NAMED_COLORS[0].name;
    let mut best_dist = u32::MAX;

    for entry in &NAMED_COLORS {
        let dist = distance_squared(rgb, entry.rgb);
        if dist < best_dist {
            best_dist = dist;
            best = entry.name;
        }
    }

    best
}

/// Squared Euclidean distance between two RGB values
///
/// Ordering-equivalent to the true distance and avoids the square root in
/// the per-bucket loop.
fn distance_squared(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}
