//! Color-affinity classification
//!
//! Maps an `#RRGGBB` hex color to the set of semantic color keywords used
//! by creature affinity scoring. Malformed input degrades to an empty set;
//! classification never fails.

use indexmap::IndexSet;

/// Keyword set produced by classification (deduplicated, insertion order)
pub type ColorKeywords = IndexSet<&'static str>;

/// A band of the color wheel mapped to keyword labels
struct HueBand {
    keys: &'static [&'static str],
    h_min: u16,
    h_max: u16,
}

impl HueBand {
    /// Half-open containment; bands with h_max < h_min wrap the 0/360 seam
    fn contains(&self, h: u16) -> bool {
        if self.h_max < self.h_min {
            h >= self.h_min || h < self.h_max
        } else {
            h >= self.h_min && h < self.h_max
        }
    }
}

/// Overlapping hue bands covering the wheel, red split across the seam
const HUE_BANDS: [HueBand; 12] = [
    HueBand { keys: &["red", "crimson"], h_min: 345, h_max: 360 },
    HueBand { keys: &["red", "crimson"], h_min: 0, h_max: 15 },
    HueBand { keys: &["orange", "flame"], h_min: 15, h_max: 40 },
    HueBand { keys: &["yellow", "gold", "lemon", "amber"], h_min: 40, h_max: 65 },
    HueBand { keys: &["lime", "green"], h_min: 65, h_max: 100 },
    HueBand { keys: &["green", "sage", "teal", "olive"], h_min: 100, h_max: 165 },
    HueBand { keys: &["teal", "cyan", "aqua", "crystal"], h_min: 165, h_max: 195 },
    HueBand { keys: &["sky", "blue", "cerulean", "aqua"], h_min: 195, h_max: 235 },
    HueBand { keys: &["blue", "navy", "indigo"], h_min: 235, h_max: 255 },
    HueBand { keys: &["indigo", "purple", "violet"], h_min: 255, h_max: 285 },
    HueBand { keys: &["purple", "lavender", "violet"], h_min: 285, h_max: 325 },
    HueBand { keys: &["pink", "rose", "blush"], h_min: 325, h_max: 345 },
];

/// Strict `#RRGGBB` parse; anything else is None
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let rest = hex.strip_prefix('#')?;
    if rest.len() != 6 || !rest.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&rest[0..2], 16).ok()?;
    let g = u8::from_str_radix(&rest[2..4], 16).ok()?;
    let b = u8::from_str_radix(&rest[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to integer-rounded HSL: hue in 0..360, saturation and
/// lightness in 0..=100
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (u16, u8, u8) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    // Rounding can land exactly on 360; fold it back onto the red seam
    let h = ((h * 360.0).round() as u16) % 360;
    (h, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
}

/// Classify a hex color into its affinity keywords
pub fn classify_hex(hex: &str) -> ColorKeywords {
    let mut keys = ColorKeywords::new();
    let Some((r, g, b)) = parse_hex(hex) else {
        return keys;
    };
    let (h, s, l) = rgb_to_hsl(r, g, b);

    // Achromatic colors get their own vocabulary
    if s < 10 {
        let set: &[&str] = if l > 85 {
            &["white", "pearl", "silver", "cream"]
        } else if l < 20 {
            &["black", "dark", "charcoal"]
        } else {
            &["silver", "slate", "gray"]
        };
        keys.extend(set.iter().copied());
        return keys;
    }
    if l < 20 {
        keys.extend(["dark", "black", "navy"]);
        return keys;
    }
    if l > 85 {
        keys.extend(["white", "cream", "pearl", "light"]);
        return keys;
    }

    for band in &HUE_BANDS {
        if band.contains(h) {
            keys.extend(band.keys.iter().copied());
        }
    }

    // Lightness and saturation augmentation
    if l < 35 {
        keys.extend(["dark", "navy", "charcoal"]);
    }
    if l > 70 {
        keys.extend(["light", "cream", "pale"]);
    }
    if s > 80 {
        keys.extend(["vivid", "bright"]);
    }
    keys
}
