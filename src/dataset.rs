//! Color dataset model
//!
//! A `ColorRecord` is the unit of data everywhere: canonical lowercase
//! `#rrggbb` hex, a free-text name, and the values derived from the hex
//! (RGB, HSL, hue range, family). The engine never mutates a record's hex.

use serde::Serialize;
use thiserror::Error;

use crate::metrics::{self, Family, Hsl};

pub mod detect;
pub mod io;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to detect dataset format")]
    UnknownFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorRecord {
    pub hex: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "originalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    pub rgb: [f64; 3],
    pub hsl: Hsl,
    #[serde(rename = "hueRange")]
    pub hue_range: [f64; 2],
}

impl ColorRecord {
    /// Build a record from raw hex/name strings, deriving every other field.
    /// Returns `None` when the hex cannot be canonicalized.
    pub fn from_raw(hex: &str, name: &str) -> Option<Self> {
        Self::from_parts(hex, name, None, None)
    }

    /// Like [`from_raw`](Self::from_raw), but keeps supplied RGB/HSL values
    /// instead of deriving them. The hex still uniquely determines derived
    /// values; supplied ones are the caller's responsibility.
    pub fn from_parts(
        hex: &str,
        name: &str,
        rgb: Option<[f64; 3]>,
        hsl: Option<Hsl>,
    ) -> Option<Self> {
        let canonical = normalize_hex(hex)?;
        let rgb = rgb.unwrap_or_else(|| metrics::hex_to_rgb(&canonical));
        let (derived_hsl, hue_range) = metrics::hex_to_hsl_metrics(&canonical);
        let hsl = hsl.unwrap_or(derived_hsl);
        let normalized = normalize_name(name);
        let original_name = if name.is_empty() { None } else { Some(name.to_string()) };

        Some(Self {
            hex: canonical,
            name: normalized,
            family: Some(metrics::classify_family(&hsl)),
            category: None,
            original_name,
            rgb,
            hsl,
            hue_range,
        })
    }

    /// Re-derive the family from the stored HSL.
    pub fn refresh_family(&mut self) {
        self.family = Some(metrics::classify_family(&self.hsl));
    }
}

/// Canonicalize a hex string: strip `#`, lowercase, digit-double 3-digit
/// forms, truncate 8-digit forms to their color channels. Unusable input
/// yields `None`.
pub fn normalize_hex(raw: &str) -> Option<String> {
    let stripped = raw.trim().to_lowercase();
    let stripped = stripped.strip_prefix('#').unwrap_or(&stripped);

    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match stripped.len() {
        3 => Some(format!(
            "#{}",
            stripped.chars().flat_map(|c| [c, c]).collect::<String>()
        )),
        6 => Some(format!("#{stripped}")),
        8 => Some(format!("#{}", &stripped[..6])),
        _ => None,
    }
}

/// Trim and collapse internal whitespace runs to single spaces.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex_canonical_forms() {
        assert_eq!(normalize_hex("#FF0000"), Some("#ff0000".into()));
        assert_eq!(normalize_hex("ff0000"), Some("#ff0000".into()));
        assert_eq!(normalize_hex("#abc"), Some("#aabbcc".into()));
        assert_eq!(normalize_hex("#11223344"), Some("#112233".into()));
    }

    #[test]
    fn test_normalize_hex_rejects_garbage() {
        assert_eq!(normalize_hex("red"), None);
        assert_eq!(normalize_hex("#1234"), None);
        assert_eq!(normalize_hex(""), None);
    }

    #[test]
    fn test_normalize_name_collapses_whitespace() {
        assert_eq!(normalize_name("  Deep   Sky Blue "), "Deep Sky Blue");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_from_raw_derives_everything() {
        let record = ColorRecord::from_raw("#FF0000", "Red").unwrap();
        assert_eq!(record.hex, "#ff0000");
        assert_eq!(record.name, "Red");
        assert_eq!(record.rgb, [1.0, 0.0, 0.0]);
        assert_eq!(record.hsl, Hsl { h: 0.0, s: 100.0, l: 50.0 });
        assert!(record.family.is_some());
    }

    #[test]
    fn test_from_raw_drops_bad_hex() {
        assert!(ColorRecord::from_raw("#zzz", "Broken").is_none());
    }
}
