//! Dataset maintenance commands: recalc, sort, merge, convert

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::warn;

use crate::cli::SortField;
use crate::dataset::io::{self, SaveFormat};
use crate::dataset::ColorRecord;
use crate::dedup::Deduplicator;
use crate::lexicon::Lexicon;
use crate::metrics;
use crate::report::DedupSummary;
use crate::utils::is_dataset_file;

pub(crate) fn cmd_recalc(
    dataset: &Path,
    output: &Path,
    force_family: bool,
    format: SaveFormat,
) -> Result<()> {
    let loaded = io::load_dataset(dataset)
        .with_context(|| format!("failed to load {}", dataset.display()))?;
    println!("Recalculating {} colors from hex...", loaded.records.len());

    let mut records = loaded.records;
    let mut rgb_changed = 0;
    let mut hsl_changed = 0;
    let mut range_changed = 0;

    for record in &mut records {
        let rgb = metrics::hex_to_rgb(&record.hex);
        let (hsl, hue_range) = metrics::hex_to_hsl_metrics(&record.hex);

        if record.rgb != rgb {
            record.rgb = rgb;
            rgb_changed += 1;
        }
        if record.hsl != hsl {
            record.hsl = hsl;
            hsl_changed += 1;
        }
        if record.hue_range != hue_range {
            record.hue_range = hue_range;
            range_changed += 1;
        }
        if force_family {
            record.refresh_family();
        }
    }

    println!("Recalculation complete:");
    println!("  RGB updated:       {rgb_changed}");
    println!("  HSL updated:       {hsl_changed}");
    println!("  Hue range updated: {range_changed}");

    io::save_dataset(&records, output, format)?;
    println!("Saved {} colors: {}", records.len(), output.display());
    Ok(())
}

pub(crate) fn cmd_sort(
    dataset: &Path,
    output: &Path,
    by: SortField,
    reverse: bool,
    format: SaveFormat,
) -> Result<()> {
    let loaded = io::load_dataset(dataset)
        .with_context(|| format!("failed to load {}", dataset.display()))?;
    let mut records = loaded.records;

    println!(
        "Sorting {} colors by {}{}...",
        records.len(),
        match by {
            SortField::Name => "name",
            SortField::Hex => "hex",
            SortField::Hue => "hue",
        },
        if reverse { " (reverse)" } else { "" }
    );

    match by {
        SortField::Name => records.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortField::Hex => records.sort_by(|a, b| a.hex.cmp(&b.hex)),
        SortField::Hue => records.sort_by(|a, b| {
            a.hsl
                .h
                .partial_cmp(&b.hsl.h)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
    if reverse {
        records.reverse();
    }

    io::save_dataset(&records, output, format)?;
    println!("Saved {} colors: {}", records.len(), output.display());
    Ok(())
}

pub(crate) fn cmd_merge(output: &Path, datasets: &[PathBuf], format: SaveFormat) -> Result<()> {
    println!("Merging {} datasets...", datasets.len());

    let progress = ProgressBar::new(datasets.len() as u64);
    let mut all: Vec<ColorRecord> = Vec::new();

    for path in datasets {
        if !is_dataset_file(path) {
            warn!(path = %path.display(), "unexpected extension for a dataset file");
        }
        let loaded = io::load_dataset(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        println!(
            "  {}: {} colors ({} layout)",
            path.display(),
            loaded.records.len(),
            loaded.format
        );
        all.extend(loaded.records);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let deduper = Deduplicator::new(Lexicon::builtin());
    let outcome = deduper.deduplicate(&all);
    let summary = DedupSummary::new(all.len(), outcome.colors.len());
    println!(
        "Merged: {} colors in, {} unique, {} dropped ({})",
        summary.original, summary.deduplicated, summary.removed, summary.removal_rate
    );

    io::save_dataset(&outcome.colors, output, format)?;
    println!("Saved {} colors: {}", outcome.colors.len(), output.display());
    Ok(())
}

pub(crate) fn cmd_convert(dataset: &Path, output: &Path, format: SaveFormat) -> Result<()> {
    let loaded = io::load_dataset(dataset)
        .with_context(|| format!("failed to load {}", dataset.display()))?;
    println!(
        "Loaded {} colors ({} layout, {:.0}% confidence)",
        loaded.records.len(),
        loaded.format,
        loaded.confidence * 100.0
    );

    io::save_dataset(&loaded.records, output, format)?;
    println!("Saved {} colors: {}", loaded.records.len(), output.display());
    Ok(())
}
