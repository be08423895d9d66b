//! The flagship dedup command

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::dataset::io::{self, SaveFormat};
use crate::dedup::Deduplicator;
use crate::lexicon::Lexicon;
use crate::report;

pub(crate) fn cmd_dedup(
    dataset: &Path,
    output: Option<&Path>,
    format: SaveFormat,
    show_report: bool,
    save_report: Option<&Path>,
    group_limit: usize,
) -> Result<()> {
    let loaded = io::load_dataset(dataset)
        .with_context(|| format!("failed to load {}", dataset.display()))?;
    println!(
        "Loaded {} colors from {} ({} layout, {:.0}% confidence)",
        loaded.records.len(),
        dataset.display(),
        loaded.format,
        loaded.confidence * 100.0
    );

    let spinner = spinner("Scoring duplicate groups...");
    let deduper = Deduplicator::new(Lexicon::builtin());
    let outcome = deduper.deduplicate(&loaded.records);
    spinner.finish_and_clear();

    let summary = report::DedupSummary::new(loaded.records.len(), outcome.colors.len());
    report::print_summary(&summary);

    if show_report {
        report::print_groups(&outcome.groups, group_limit);
    }

    if let Some(path) = save_report {
        let full = report::build_report(&deduper, loaded.records.len(), &outcome);
        report::save_report(&full, path)?;
        println!("Report saved: {}", path.display());
    }

    if let Some(path) = output {
        io::save_dataset(&outcome.colors, path, format)?;
        println!("Saved {} colors: {}", outcome.colors.len(), path.display());
    }

    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
