//! Color-space conversions and perceptual family classification
//!
//! Everything in here is a pure function of its input: hex parsing, HSL
//! derivation, the OKLab opponent-space transform, and the layered family
//! classifier built on top of them. Malformed hex never raises — it yields a
//! degenerate zero color that downstream scoring treats as neutral.

use serde::{Deserialize, Serialize};

/// Hue in whole degrees (0-360), saturation/lightness in whole percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Color family labels, from the twelve hue-bucket bases through the
/// specialized override categories to the purely lexical ones (earth,
/// seasonal, floral, cosmic, vintage, festive) that only ever appear as
/// name kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Red,
    Orange,
    Yellow,
    Chartreuse,
    Green,
    Springgreen,
    Cyan,
    Azure,
    Blue,
    Violet,
    Magenta,
    Rose,
    Neutral,
    Lime,
    Teal,
    Purple,
    Brown,
    Gray,
    Pink,
    Black,
    White,
    Metallic,
    Pastel,
    Neon,
    Earth,
    Jewel,
    Skin,
    Seasonal,
    Food,
    Nature,
    Floral,
    Cosmic,
    Vintage,
    Festive,
}

impl Family {
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Red => "red",
            Family::Orange => "orange",
            Family::Yellow => "yellow",
            Family::Chartreuse => "chartreuse",
            Family::Green => "green",
            Family::Springgreen => "springgreen",
            Family::Cyan => "cyan",
            Family::Azure => "azure",
            Family::Blue => "blue",
            Family::Violet => "violet",
            Family::Magenta => "magenta",
            Family::Rose => "rose",
            Family::Neutral => "neutral",
            Family::Lime => "lime",
            Family::Teal => "teal",
            Family::Purple => "purple",
            Family::Brown => "brown",
            Family::Gray => "gray",
            Family::Pink => "pink",
            Family::Black => "black",
            Family::White => "white",
            Family::Metallic => "metallic",
            Family::Pastel => "pastel",
            Family::Neon => "neon",
            Family::Earth => "earth",
            Family::Jewel => "jewel",
            Family::Skin => "skin",
            Family::Seasonal => "seasonal",
            Family::Food => "food",
            Family::Nature => "nature",
            Family::Floral => "floral",
            Family::Cosmic => "cosmic",
            Family::Vintage => "vintage",
            Family::Festive => "festive",
        }
    }

    /// Parse a lowercase family label; unknown labels return `None`.
    pub fn parse(label: &str) -> Option<Family> {
        const ALL: [Family; 34] = [
            Family::Red,
            Family::Orange,
            Family::Yellow,
            Family::Chartreuse,
            Family::Green,
            Family::Springgreen,
            Family::Cyan,
            Family::Azure,
            Family::Blue,
            Family::Violet,
            Family::Magenta,
            Family::Rose,
            Family::Neutral,
            Family::Lime,
            Family::Teal,
            Family::Purple,
            Family::Brown,
            Family::Gray,
            Family::Pink,
            Family::Black,
            Family::White,
            Family::Metallic,
            Family::Pastel,
            Family::Neon,
            Family::Earth,
            Family::Jewel,
            Family::Skin,
            Family::Seasonal,
            Family::Food,
            Family::Nature,
            Family::Floral,
            Family::Cosmic,
            Family::Vintage,
            Family::Festive,
        ];
        let label = label.trim().to_lowercase();
        ALL.iter().copied().find(|f| f.as_str() == label)
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse warm/cool split by hue angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturationTier {
    Achromatic,
    Muted,
    Soft,
    Vivid,
    Saturated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightnessTier {
    VeryDark,
    Dark,
    Medium,
    Light,
    VeryLight,
}

/// HEX(A) → RGBA conversion, channels in [0, 1].
///
/// Accepts 3/6/8 hex digits with an optional leading `#`; 3-digit input is
/// digit-doubled, 8-digit input carries an alpha channel. Anything else
/// yields the zero sentinel (black, opaque) instead of an error.
pub fn hex_to_rgba(hex: &str) -> [f64; 4] {
    const SENTINEL: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

    let normalized = hex.trim().to_lowercase();
    let normalized = normalized.strip_prefix('#').unwrap_or(&normalized);

    if !matches!(normalized.len(), 3 | 6 | 8)
        || !normalized.chars().all(|c| c.is_ascii_hexdigit())
    {
        return SENTINEL;
    }

    let expanded: String = if normalized.len() == 3 {
        normalized.chars().flat_map(|c| [c, c]).collect()
    } else {
        normalized.to_string()
    };

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16).unwrap_or(0) as f64
    };

    let (r, g, b) = (byte(0..2), byte(2..4), byte(4..6));
    let a = if expanded.len() == 8 { byte(6..8) } else { 255.0 };

    let round3 = |v: f64| (v / 255.0 * 1000.0).round() / 1000.0;
    [round3(r), round3(g), round3(b), round3(a)]
}

/// HEX → RGB, channels in [0, 1]; alpha is dropped.
pub fn hex_to_rgb(hex: &str) -> [f64; 3] {
    let [r, g, b, _] = hex_to_rgba(hex);
    [r, g, b]
}

/// Standard max/min-channel HSL derivation plus the hue range: a symmetric
/// interval around the hue whose width shrinks as saturation grows. Hue is
/// returned in whole degrees, saturation/lightness in whole percent. A
/// collapsed interval of `[0, 360]` signals that hue carries no information
/// for this color.
pub fn hex_to_hsl_metrics(hex: &str) -> (Hsl, [f64; 2]) {
    let [r, g, b] = hex_to_rgb(hex);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == r {
            let mut h = (g - b) / delta * 60.0;
            if g < b {
                h += 360.0;
            }
            h
        } else if max == g {
            (b - r) / delta * 60.0 + 120.0
        } else {
            (r - g) / delta * 60.0 + 240.0
        };
        (h, s)
    };

    let range = hue_range(h, s * 100.0);
    let hsl = Hsl {
        h: h.round(),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    };
    (hsl, range)
}

/// Hue interval in degrees around `h`, half-width `max(1, 20·(1 − s/100))`,
/// clamped to [0, 360]. Below 5% saturation, or when the clamped interval
/// would span more than 180°, the full circle is returned.
pub fn hue_range(h: f64, s: f64) -> [f64; 2] {
    if s < 5.0 {
        return [0.0, 360.0];
    }

    let spread = (20.0 * (1.0 - s / 100.0)).max(1.0);
    let start = (h - spread).max(0.0);
    let end = (h + spread).min(360.0);

    if end - start > 180.0 {
        return [0.0, 360.0];
    }

    let round1 = |v: f64| (v * 10.0).round() / 10.0;
    [round1(start), round1(end)]
}

/// HSL → canonical `#rrggbb` string. Inputs are hue in degrees and
/// saturation/lightness in percent; out-of-range values are clamped.
pub fn hsl_to_hex(hsl: &Hsl) -> String {
    let h = hsl.h.rem_euclid(360.0);
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let gray = (l * 255.0).round().max(0.0) as u8;
        return format!("#{gray:02x}{gray:02x}{gray:02x}");
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let sector = h / 60.0;

    let (r1, g1, b1) = if sector < 1.0 {
        (c, x, 0.0)
    } else if sector < 2.0 {
        (x, c, 0.0)
    } else if sector < 3.0 {
        (0.0, c, x)
    } else if sector < 4.0 {
        (0.0, x, c)
    } else if sector < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |v: f64| ((v + m) * 255.0).round().max(0.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r1), channel(g1), channel(b1))
}

/// sRGB → OKLab with the reference constants: gamma decode, ×100 linear
/// scale, cone-response matrix, cube-root compression, opponent matrix.
/// Every chroma and L threshold in the classifier is calibrated against this
/// exact pipeline, scale factor included.
pub fn rgb_to_oklab(rgb: [f64; 3]) -> [f64; 3] {
    let linear = |c: f64| {
        let c = if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        };
        c * 100.0
    };

    let (r, g, b) = (linear(rgb[0]), linear(rgb[1]), linear(rgb[2]));

    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883097949 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    ]
}

/// Classify an HSL color into its family.
///
/// Layered decision: achromatic fast path, OKLab chroma gate, twelve-bucket
/// hue base, ordered override rules (first match wins), final remaps.
pub fn classify_family(hsl: &Hsl) -> Family {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s;
    let l = hsl.l;

    // Achromatic fast path
    if s < 8.0 {
        if l < 15.0 {
            return Family::Black;
        }
        if l > 92.0 {
            return Family::White;
        }
        return Family::Gray;
    }

    let base = if h < 15.0 {
        Family::Red
    } else if h < 30.0 {
        Family::Orange
    } else if h < 60.0 {
        Family::Yellow
    } else if h < 90.0 {
        Family::Chartreuse
    } else if h < 150.0 {
        Family::Green
    } else if h < 180.0 {
        Family::Springgreen
    } else if h < 210.0 {
        Family::Cyan
    } else if h < 240.0 {
        Family::Azure
    } else if h < 270.0 {
        Family::Blue
    } else if h < 300.0 {
        Family::Violet
    } else if h < 330.0 {
        Family::Magenta
    } else {
        Family::Rose
    };

    // OKLab chroma is a better neutrality signal than HSL saturation
    let rgb = hex_to_rgb(&hsl_to_hex(&Hsl { h, s, l }));
    let [ok_l, ok_a, ok_b] = rgb_to_oklab(rgb);
    let chroma = (ok_a * ok_a + ok_b * ok_b).sqrt();
    if chroma < 0.045 {
        return Family::Neutral;
    }

    // Override rules, first match wins
    if s < 30.0 && l > 60.0 {
        return Family::Pastel;
    }
    if s > 80.0 && l > 80.0 {
        return Family::Neon;
    }
    if chroma < 0.15 && matches!(base, Family::Orange | Family::Yellow | Family::Red) && l < 70.0 {
        return Family::Brown;
    }
    if matches!(base, Family::Red | Family::Rose | Family::Magenta)
        && ok_l > 0.75
        && chroma > 0.08
        && chroma < 0.22
    {
        return Family::Pink;
    }
    if matches!(base, Family::Yellow | Family::Orange) && s > 20.0 && s < 70.0 && l > 50.0 {
        return Family::Metallic;
    }
    if matches!(base, Family::Orange | Family::Yellow | Family::Brown)
        && s > 20.0
        && s < 70.0
        && l > 40.0
        && l < 90.0
    {
        return Family::Skin;
    }
    if matches!(
        base,
        Family::Red | Family::Green | Family::Blue | Family::Purple | Family::Magenta
    ) && s > 70.0
        && l > 50.0
        && chroma > 0.20
    {
        return Family::Jewel;
    }
    if matches!(
        base,
        Family::Green | Family::Blue | Family::Springgreen | Family::Cyan
    ) && s > 30.0
        && s < 80.0
        && l > 30.0
        && l < 90.0
    {
        return Family::Nature;
    }
    if matches!(
        base,
        Family::Red | Family::Orange | Family::Yellow | Family::Green | Family::Brown
    ) && s > 50.0
        && l > 50.0
    {
        return Family::Food;
    }

    match base {
        Family::Chartreuse => Family::Lime,
        Family::Cyan | Family::Springgreen => Family::Teal,
        Family::Violet => Family::Purple,
        other => other,
    }
}

/// Warm for hues in [0, 60] and [300, 360], cool for [120, 240].
pub fn temperature(hsl: &Hsl) -> Temperature {
    let h = hsl.h.rem_euclid(360.0);
    if h <= 60.0 || h >= 300.0 {
        Temperature::Warm
    } else if (120.0..=240.0).contains(&h) {
        Temperature::Cool
    } else {
        Temperature::Neutral
    }
}

pub fn saturation_tier(hsl: &Hsl) -> SaturationTier {
    if hsl.s < 5.0 {
        SaturationTier::Achromatic
    } else if hsl.s < 25.0 {
        SaturationTier::Muted
    } else if hsl.s < 50.0 {
        SaturationTier::Soft
    } else if hsl.s < 75.0 {
        SaturationTier::Vivid
    } else {
        SaturationTier::Saturated
    }
}

pub fn lightness_tier(hsl: &Hsl) -> LightnessTier {
    if hsl.l < 20.0 {
        LightnessTier::VeryDark
    } else if hsl.l < 40.0 {
        LightnessTier::Dark
    } else if hsl.l < 60.0 {
        LightnessTier::Medium
    } else if hsl.l < 80.0 {
        LightnessTier::Light
    } else {
        LightnessTier::VeryLight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_basic() {
        assert_eq!(hex_to_rgb("#ff0000"), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb("00ff00"), [0.0, 1.0, 0.0]);
        assert_eq!(hex_to_rgb("#0000FF"), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hex_to_rgb_three_digit_doubles() {
        assert_eq!(hex_to_rgb("#f00"), hex_to_rgb("#ff0000"));
        assert_eq!(hex_to_rgb("abc"), hex_to_rgb("aabbcc"));
    }

    #[test]
    fn test_hex_to_rgba_eight_digit_alpha() {
        let [r, g, b, a] = hex_to_rgba("#ff000080");
        assert_eq!([r, g, b], [1.0, 0.0, 0.0]);
        assert!((a - 0.502).abs() < 1e-9, "alpha 0x80 should be ~0.502, got {a}");
    }

    #[test]
    fn test_hex_to_rgb_malformed_is_zero_sentinel() {
        assert_eq!(hex_to_rgb("nope"), [0.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb("#12345"), [0.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(""), [0.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb("#ggg"), [0.0, 0.0, 0.0]);
    }

    fn hsl_of(hex: &str) -> Hsl {
        hex_to_hsl_metrics(hex).0
    }

    #[test]
    fn test_hex_to_hsl_primaries() {
        assert_eq!(hsl_of("#ff0000"), Hsl { h: 0.0, s: 100.0, l: 50.0 });
        assert_eq!(hsl_of("#00ff00"), Hsl { h: 120.0, s: 100.0, l: 50.0 });
        assert_eq!(hsl_of("#0000ff"), Hsl { h: 240.0, s: 100.0, l: 50.0 });
    }

    #[test]
    fn test_hex_to_hsl_grays() {
        let white = hsl_of("#ffffff");
        assert_eq!((white.s, white.l), (0.0, 100.0));
        let black = hsl_of("#000000");
        assert_eq!((black.s, black.l), (0.0, 0.0));
        let mid = hsl_of("#808080");
        assert_eq!(mid.s, 0.0);
        assert_eq!(mid.l, 50.0);
    }

    #[test]
    fn test_hue_range_collapses_for_desaturated() {
        assert_eq!(hue_range(200.0, 3.0), [0.0, 360.0]);
    }

    #[test]
    fn test_hue_range_narrows_with_saturation() {
        // Full saturation pins the half-width at the 1 degree floor
        assert_eq!(hue_range(120.0, 100.0), [119.0, 121.0]);
        // Half saturation widens to 10 degrees either side
        assert_eq!(hue_range(120.0, 50.0), [110.0, 130.0]);
    }

    #[test]
    fn test_hsl_to_hex_round_trip() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#336699", "#808080"] {
            let hsl = hsl_of(hex);
            let back = hsl_to_hex(&hsl);
            let rgb_a = hex_to_rgb(hex);
            let rgb_b = hex_to_rgb(&back);
            for (a, b) in rgb_a.iter().zip(rgb_b.iter()) {
                assert!(
                    (a - b).abs() < 0.02,
                    "{hex} -> {back} drifted more than rounding allows"
                );
            }
        }
    }

    #[test]
    fn test_oklab_neutral_axis() {
        let [_, a, b] = rgb_to_oklab([0.5, 0.5, 0.5]);
        let chroma = (a * a + b * b).sqrt();
        assert!(chroma < 0.001, "gray should sit on the neutral axis, chroma {chroma}");
    }

    #[test]
    fn test_classify_family_achromatic_fast_path() {
        assert_eq!(classify_family(&Hsl { h: 0.0, s: 2.0, l: 5.0 }), Family::Black);
        assert_eq!(classify_family(&Hsl { h: 0.0, s: 2.0, l: 97.0 }), Family::White);
        assert_eq!(classify_family(&Hsl { h: 0.0, s: 2.0, l: 50.0 }), Family::Gray);
    }

    #[test]
    fn test_classify_family_base_buckets() {
        assert_eq!(classify_family(&Hsl { h: 5.0, s: 90.0, l: 45.0 }), Family::Red);
        assert_eq!(classify_family(&Hsl { h: 250.0, s: 90.0, l: 40.0 }), Family::Blue);
        assert_eq!(classify_family(&Hsl { h: 340.0, s: 90.0, l: 45.0 }), Family::Rose);
    }

    #[test]
    fn test_classify_family_remaps() {
        // Chartreuse band with strong chroma, dark enough to dodge overrides
        assert_eq!(classify_family(&Hsl { h: 75.0, s: 95.0, l: 40.0 }), Family::Lime);
        assert_eq!(classify_family(&Hsl { h: 285.0, s: 60.0, l: 40.0 }), Family::Purple);
    }

    #[test]
    fn test_classify_family_pastel_override() {
        assert_eq!(classify_family(&Hsl { h: 10.0, s: 20.0, l: 80.0 }), Family::Pastel);
    }

    #[test]
    fn test_classify_family_brown_override() {
        // Low-chroma warm mid-dark tones read as brown, not orange
        assert_eq!(classify_family(&Hsl { h: 25.0, s: 40.0, l: 30.0 }), Family::Brown);
    }

    #[test]
    fn test_classify_family_is_deterministic() {
        let hsl = Hsl { h: 200.0, s: 60.0, l: 55.0 };
        assert_eq!(classify_family(&hsl), classify_family(&hsl));
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(temperature(&Hsl { h: 30.0, s: 50.0, l: 50.0 }), Temperature::Warm);
        assert_eq!(temperature(&Hsl { h: 330.0, s: 50.0, l: 50.0 }), Temperature::Warm);
        assert_eq!(temperature(&Hsl { h: 180.0, s: 50.0, l: 50.0 }), Temperature::Cool);
        assert_eq!(temperature(&Hsl { h: 90.0, s: 50.0, l: 50.0 }), Temperature::Neutral);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(saturation_tier(&Hsl { h: 0.0, s: 3.0, l: 50.0 }), SaturationTier::Achromatic);
        assert_eq!(saturation_tier(&Hsl { h: 0.0, s: 80.0, l: 50.0 }), SaturationTier::Saturated);
        assert_eq!(lightness_tier(&Hsl { h: 0.0, s: 50.0, l: 10.0 }), LightnessTier::VeryDark);
        assert_eq!(lightness_tier(&Hsl { h: 0.0, s: 50.0, l: 85.0 }), LightnessTier::VeryLight);
    }

    #[test]
    fn test_family_parse_round_trip() {
        assert_eq!(Family::parse("teal"), Some(Family::Teal));
        assert_eq!(Family::parse("Springgreen"), Some(Family::Springgreen));
        assert_eq!(Family::parse("mauve"), None);
    }
}
