//! Heuristic dataset layout detection
//!
//! Color lists arrive in a handful of JSON shapes. The detector scores each
//! candidate layout against a sample of the document and the loader parses
//! with the best-scoring one.

use serde_json::Value;

use crate::dataset::ColorRecord;
use crate::metrics::{Family, Hsl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Array of `{hex, name, ...}` objects
    Objects,
    /// Array of 2-element arrays, hex and name in either order
    Pairs,
    /// Flat map of hex→name or name→hex
    Object,
    /// Map of arbitrary keys to `{hex, name}` objects
    Keyed,
    /// Map of category → array of `{hex, name}`; a `meta` key is ignored
    Structured,
}

impl DatasetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetFormat::Objects => "objects",
            DatasetFormat::Pairs => "pairs",
            DatasetFormat::Object => "object",
            DatasetFormat::Keyed => "keyed",
            DatasetFormat::Structured => "structured",
        }
    }
}

impl std::fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Detection {
    pub format: DatasetFormat,
    pub confidence: f64,
}

const SAMPLE_LIMIT: usize = 50;

fn looks_hex(s: &str) -> bool {
    let s = s.strip_prefix('#').unwrap_or(s);
    (3..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_hexdigit())
}

fn has_hex_and_name(value: &Value) -> bool {
    value
        .get("hex")
        .and_then(Value::as_str)
        .is_some_and(looks_hex)
        && value.get("name").is_some_and(Value::is_string)
}

/// Score every candidate layout; best first. Empty output means the document
/// matches nothing we know how to read.
pub fn detect(data: &Value) -> Vec<Detection> {
    let mut detections: Vec<Detection> = Vec::new();

    match data {
        Value::Array(items) if !items.is_empty() => {
            let sample = &items[..items.len().min(SAMPLE_LIMIT)];
            let total = sample.len() as f64;

            let objects = sample
                .iter()
                .filter(|v| v.get("hex").and_then(Value::as_str).is_some_and(looks_hex))
                .count() as f64;
            if objects / total >= 0.5 {
                detections.push(Detection {
                    format: DatasetFormat::Objects,
                    confidence: objects / total,
                });
            }

            let pairs = sample
                .iter()
                .filter(|v| match v.as_array() {
                    Some(pair) if pair.len() == 2 => pair
                        .iter()
                        .any(|e| e.as_str().is_some_and(looks_hex)),
                    _ => false,
                })
                .count() as f64;
            if pairs / total >= 0.5 {
                detections.push(Detection {
                    format: DatasetFormat::Pairs,
                    confidence: pairs / total,
                });
            }
        }
        Value::Object(map) if !map.is_empty() => {
            let entries: Vec<(&String, &Value)> =
                map.iter().filter(|(k, _)| *k != "meta").take(SAMPLE_LIMIT).collect();
            let total = entries.len() as f64;
            if total == 0.0 {
                return detections;
            }

            let flat = entries
                .iter()
                .filter(|(k, v)| match v.as_str() {
                    Some(s) => looks_hex(k) || looks_hex(s),
                    None => false,
                })
                .count() as f64;
            if flat / total >= 0.5 {
                detections.push(Detection {
                    format: DatasetFormat::Object,
                    confidence: flat / total,
                });
            }

            let keyed = entries
                .iter()
                .filter(|(_, v)| has_hex_and_name(v))
                .count() as f64;
            if keyed / total >= 0.5 {
                detections.push(Detection {
                    format: DatasetFormat::Keyed,
                    confidence: keyed / total,
                });
            }

            let structured = entries
                .iter()
                .filter(|(_, v)| match v.as_array() {
                    Some(items) => !items.is_empty() && items.iter().all(has_hex_and_name),
                    None => false,
                })
                .count() as f64;
            if structured / total >= 0.5 {
                detections.push(Detection {
                    format: DatasetFormat::Structured,
                    confidence: structured / total,
                });
            }
        }
        _ => {}
    }

    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    detections
}

/// Convert a document to records using the given layout. Entries that do not
/// fit the layout are skipped, never fatal.
pub fn parse(data: &Value, format: DatasetFormat) -> Vec<ColorRecord> {
    match format {
        DatasetFormat::Objects => parse_objects(data),
        DatasetFormat::Pairs => parse_pairs(data),
        DatasetFormat::Object => parse_object(data),
        DatasetFormat::Keyed => parse_keyed(data),
        DatasetFormat::Structured => parse_structured(data),
    }
}

fn parse_objects(data: &Value) -> Vec<ColorRecord> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let hex = item.get("hex")?.as_str()?;
            let name = item.get("name").and_then(Value::as_str).unwrap_or("");
            let rgb = item.get("rgb").and_then(parse_rgb);
            let hsl = item.get("hsl").and_then(parse_hsl);
            let mut record = ColorRecord::from_parts(hex, name, rgb, hsl)?;
            if let Some(family) = item
                .get("family")
                .and_then(Value::as_str)
                .and_then(Family::parse)
            {
                record.family = Some(family);
            }
            Some(record)
        })
        .collect()
}

fn parse_rgb(value: &Value) -> Option<[f64; 3]> {
    let arr = value.as_array()?;
    if arr.len() != 3 {
        return None;
    }
    let mut out = [0.0; 3];
    for (slot, v) in out.iter_mut().zip(arr) {
        *slot = v.as_f64()?;
    }
    Some(out)
}

fn parse_hsl(value: &Value) -> Option<Hsl> {
    Some(Hsl {
        h: value.get("h")?.as_f64()?,
        s: value.get("s")?.as_f64()?,
        l: value.get("l")?.as_f64()?,
    })
}

fn parse_pairs(data: &Value) -> Vec<ColorRecord> {
    let Some(items) = data.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let pair = item.as_array()?;
            if pair.len() != 2 {
                return None;
            }
            let a = pair[0].as_str();
            let b = pair[1].as_str();
            let (hex, name) = match (a, b) {
                (Some(a), Some(b)) if looks_hex(a) => (a, b),
                (Some(a), Some(b)) if looks_hex(b) => (b, a),
                _ => return None,
            };
            if name.is_empty() {
                return None;
            }
            ColorRecord::from_raw(hex, name)
        })
        .collect()
}

fn parse_object(data: &Value) -> Vec<ColorRecord> {
    let Some(map) = data.as_object() else {
        return Vec::new();
    };

    map.iter()
        .filter_map(|(key, value)| {
            let value = value.as_str()?;
            let (hex, name) = if looks_hex(key) {
                (key.as_str(), value)
            } else if looks_hex(value) {
                (value, key.as_str())
            } else {
                return None;
            };
            if name.is_empty() {
                return None;
            }
            ColorRecord::from_raw(hex, name)
        })
        .collect()
}

fn parse_keyed(data: &Value) -> Vec<ColorRecord> {
    let Some(map) = data.as_object() else {
        return Vec::new();
    };

    map.values()
        .filter_map(|value| {
            let hex = value.get("hex")?.as_str()?;
            let name = value.get("name")?.as_str()?;
            if name.is_empty() {
                return None;
            }
            ColorRecord::from_raw(hex, name)
        })
        .collect()
}

fn parse_structured(data: &Value) -> Vec<ColorRecord> {
    let Some(map) = data.as_object() else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for (category, items) in map {
        if category == "meta" {
            continue;
        }
        let Some(items) = items.as_array() else {
            continue;
        };
        for item in items {
            let Some(hex) = item.get("hex").and_then(Value::as_str) else {
                continue;
            };
            let Some(name) = item.get("name").and_then(Value::as_str) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            if let Some(mut record) = ColorRecord::from_raw(hex, name) {
                record.category = Some(category.clone());
                records.push(record);
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_array_of_objects() {
        let data = json!([
            {"hex": "#ff0000", "name": "Red"},
            {"hex": "#00ff00", "name": "Green"}
        ]);
        let detections = detect(&data);
        assert_eq!(detections[0].format, DatasetFormat::Objects);
        assert_eq!(detections[0].confidence, 1.0);
    }

    #[test]
    fn test_detect_pairs_either_order() {
        let data = json!([["#ff0000", "Red"], ["Blue", "#0000ff"]]);
        let detections = detect(&data);
        assert_eq!(detections[0].format, DatasetFormat::Pairs);

        let records = parse(&data, DatasetFormat::Pairs);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Red");
        assert_eq!(records[1].hex, "#0000ff");
    }

    #[test]
    fn test_detect_flat_map() {
        let data = json!({"#ff0000": "Red", "#0000ff": "Blue"});
        let detections = detect(&data);
        assert_eq!(detections[0].format, DatasetFormat::Object);

        let records = parse(&data, DatasetFormat::Object);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_detect_keyed_map() {
        let data = json!({
            "r1": {"hex": "#ff0000", "name": "Red"},
            "b1": {"hex": "#0000ff", "name": "Blue"}
        });
        let detections = detect(&data);
        assert_eq!(detections[0].format, DatasetFormat::Keyed);
    }

    #[test]
    fn test_detect_structured_ignores_meta() {
        let data = json!({
            "meta": {"version": 2},
            "warm": [{"hex": "#ff0000", "name": "Red"}],
            "cool": [{"hex": "#0000ff", "name": "Blue"}]
        });
        let detections = detect(&data);
        assert_eq!(detections[0].format, DatasetFormat::Structured);

        let records = parse(&data, DatasetFormat::Structured);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.category.is_some()));
    }

    #[test]
    fn test_detect_rejects_unknown_shapes() {
        assert!(detect(&json!(42)).is_empty());
        assert!(detect(&json!([1, 2, 3])).is_empty());
        assert!(detect(&json!({"a": {"b": "c"}})).is_empty());
    }

    #[test]
    fn test_parse_objects_keeps_empty_names() {
        let data = json!([
            {"hex": "#ff0000", "name": "Red"},
            {"hex": "#123456"}
        ]);
        let records = parse(&data, DatasetFormat::Objects);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "");
    }

    #[test]
    fn test_parse_skips_broken_entries() {
        let data = json!([
            {"hex": "#ff0000", "name": "Red"},
            {"hex": "not-a-color", "name": "Broken"},
            {"name": "No Hex"}
        ]);
        let records = parse(&data, DatasetFormat::Objects);
        assert_eq!(records.len(), 1);
    }
}
