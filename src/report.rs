//! Console and JSON reporting for deduplication runs

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::dedup::{DedupOutcome, Deduplicator, DuplicateGroup};
use crate::metrics;

#[derive(Debug, Clone, Serialize)]
pub struct DedupSummary {
    pub original: usize,
    pub deduplicated: usize,
    pub removed: usize,
    pub removal_rate: String,
}

impl DedupSummary {
    pub fn new(original: usize, deduplicated: usize) -> Self {
        let removed = original.saturating_sub(deduplicated);
        let rate = if original == 0 {
            0.0
        } else {
            removed as f64 / original as f64 * 100.0
        };
        Self {
            original,
            deduplicated,
            removed,
            removal_rate: format!("{rate:.1}%"),
        }
    }
}

/// Saved report: the run summary, every collapsed group, and two coarse
/// distributions over the survivors.
#[derive(Debug, Serialize)]
pub struct DedupReport<'a> {
    pub summary: DedupSummary,
    pub duplicates: &'a [DuplicateGroup],
    pub analysis: SurvivorAnalysis,
}

#[derive(Debug, Serialize)]
pub struct SurvivorAnalysis {
    /// Survivors per warm/cool/neutral temperature band
    pub by_temperature: BTreeMap<&'static str, usize>,
    /// Survivors per leading extracted kernel ("unclassified" when the name
    /// references no family)
    pub kernel_distribution: BTreeMap<String, usize>,
}

pub fn build_report<'a>(
    deduper: &Deduplicator,
    original: usize,
    outcome: &'a DedupOutcome,
) -> DedupReport<'a> {
    let mut by_temperature: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut kernel_distribution: BTreeMap<String, usize> = BTreeMap::new();

    for color in &outcome.colors {
        let temp = metrics::temperature(&color.hsl);
        *by_temperature.entry(temp.as_str()).or_default() += 1;

        let features = deduper.analyzer().extract_features(&color.name);
        let kernel = features
            .kernels
            .first()
            .map(|f| f.as_str().to_string())
            .unwrap_or_else(|| "unclassified".to_string());
        *kernel_distribution.entry(kernel).or_default() += 1;
    }

    DedupReport {
        summary: DedupSummary::new(original, outcome.colors.len()),
        duplicates: &outcome.groups,
        analysis: SurvivorAnalysis {
            by_temperature,
            kernel_distribution,
        },
    }
}

pub fn print_summary(summary: &DedupSummary) {
    println!("\nDeduplication statistics:");
    println!("  Original:  {}", summary.original);
    println!("  Unique:    {}", summary.deduplicated);
    println!("  Removed:   {}", summary.removed);
    println!("  Rate:      {}", summary.removal_rate);
}

/// Print up to `limit` duplicate groups, one line each.
pub fn print_groups(groups: &[DuplicateGroup], limit: usize) {
    if groups.is_empty() {
        println!("No duplicate groups found.");
        return;
    }

    println!("\nDuplicate groups:");
    for group in groups.iter().take(limit) {
        println!(
            "  {}: {} -> {} ({})",
            group.hex,
            group.names.join(" / "),
            group.selected,
            group.reason
        );
    }
    if groups.len() > limit {
        println!("  ... and {} more groups", groups.len() - limit);
    }
}

pub fn save_report(report: &DedupReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColorRecord;
    use crate::lexicon::Lexicon;

    #[test]
    fn test_summary_rate() {
        let summary = DedupSummary::new(200, 150);
        assert_eq!(summary.removed, 50);
        assert_eq!(summary.removal_rate, "25.0%");
    }

    #[test]
    fn test_summary_empty_input_has_zero_rate() {
        let summary = DedupSummary::new(0, 0);
        assert_eq!(summary.removal_rate, "0.0%");
    }

    #[test]
    fn test_report_distributions_cover_all_survivors() {
        let deduper = Deduplicator::new(Lexicon::builtin());
        let input = vec![
            ColorRecord::from_raw("#ff0000", "Red").unwrap(),
            ColorRecord::from_raw("#ff0000", "Crimson").unwrap(),
            ColorRecord::from_raw("#0000ff", "Blue Night").unwrap(),
        ];
        let outcome = deduper.deduplicate(&input);
        let report = build_report(&deduper, input.len(), &outcome);

        assert_eq!(report.summary.original, 3);
        assert_eq!(report.summary.deduplicated, outcome.colors.len());
        let temp_total: usize = report.analysis.by_temperature.values().sum();
        let kernel_total: usize = report.analysis.kernel_distribution.values().sum();
        assert_eq!(temp_total, outcome.colors.len());
        assert_eq!(kernel_total, outcome.colors.len());
    }
}
