//! Dataset loading and saving

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dataset::{ColorRecord, ParseError};

use super::detect::{self, DatasetFormat};

/// On-disk output format for the canonical record array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Minified JSON
    Min,
}

#[derive(Debug)]
pub struct LoadedDataset {
    pub records: Vec<ColorRecord>,
    pub format: DatasetFormat,
    pub confidence: f64,
}

/// Read a dataset file, auto-detect its layout, and convert to records.
/// Families are re-derived from HSL for every record so downstream scoring
/// always sees the classifier's labels.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    let detections = detect::detect(&value);
    let best = detections.first().ok_or(ParseError::UnknownFormat)?;
    debug!(
        path = %path.display(),
        format = %best.format,
        confidence = best.confidence,
        "dataset format detected"
    );

    let mut records = detect::parse(&value, best.format);
    for record in &mut records {
        record.refresh_family();
    }

    Ok(LoadedDataset {
        records,
        format: best.format,
        confidence: best.confidence,
    })
}

/// Write records as a JSON array, pretty or minified.
pub fn save_dataset(records: &[ColorRecord], path: &Path, format: SaveFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let content = match format {
        SaveFormat::Json => serde_json::to_string_pretty(records)?,
        SaveFormat::Min => serde_json::to_string(records)?,
    };
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
