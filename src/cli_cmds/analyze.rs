//! Whole-dataset analysis: statistics, tops, patterns, distributions

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde::Serialize;

use crate::dataset::{io, ColorRecord};
use crate::lexicon::Lexicon;
use crate::utils::percent;

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResult {
    total: usize,
    valid: usize,
    invalid: usize,
    families: usize,
    duplicates: DuplicateCounts,
    stats: DatasetStats,
    top: TopStats,
    distributions: Distributions,
    patterns: Patterns,
}

#[derive(Debug, Serialize)]
struct DuplicateCounts {
    hex_duplicates: usize,
    name_duplicates: usize,
    exact_duplicates: usize,
    unique_hex: usize,
    unique_names: usize,
}

#[derive(Debug, Serialize)]
struct DatasetStats {
    name_length_avg: f64,
    name_length_min: usize,
    name_length_max: usize,
    avg_words: f64,
    avg_word_length: f64,
}

#[derive(Debug, Serialize)]
struct TopStats {
    longest_names: Vec<String>,
    shortest_names: Vec<String>,
    most_common_words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Distributions {
    /// Name lengths bucketed by fives ("0-", "5-", "10-", ...)
    name_length_buckets: BTreeMap<String, usize>,
    /// Records per leading hex byte
    hex_groups: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
struct Patterns {
    has_numbers: usize,
    has_special_chars: usize,
    camel_case: usize,
    all_lower: usize,
    all_upper: usize,
    descriptor_words: usize,
    known_compounds: usize,
}

pub(crate) fn cmd_analyze(dataset: &Path, output: Option<&Path>) -> Result<()> {
    let loaded = io::load_dataset(dataset)
        .with_context(|| format!("failed to load {}", dataset.display()))?;

    let result = analyze(&loaded.records);

    if let Some(path) = output {
        let content = serde_json::to_string_pretty(&result)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Analysis saved: {}", path.display());
    } else {
        print_report(dataset, &result);
    }

    Ok(())
}

fn analyze(records: &[ColorRecord]) -> AnalyzeResult {
    let lexicon = Lexicon::builtin();
    let progress = ProgressBar::new(records.len() as u64);

    let mut hex_seen: HashSet<String> = HashSet::new();
    let mut name_seen: HashSet<String> = HashSet::new();
    let mut exact_seen: HashSet<String> = HashSet::new();
    let mut family_seen: HashSet<&'static str> = HashSet::new();
    let mut hex_duplicates = 0;
    let mut name_duplicates = 0;
    let mut exact_duplicates = 0;

    let mut valid = 0;
    let mut length_sum = 0usize;
    let mut length_min = usize::MAX;
    let mut length_max = 0usize;
    let mut words_sum = 0usize;
    let mut word_length_sum = 0.0f64;
    let mut word_counts: HashMap<String, usize> = HashMap::new();

    let mut name_length_buckets: BTreeMap<String, usize> = BTreeMap::new();
    let mut hex_groups: BTreeMap<String, usize> = BTreeMap::new();

    let mut patterns = Patterns {
        has_numbers: 0,
        has_special_chars: 0,
        camel_case: 0,
        all_lower: 0,
        all_upper: 0,
        descriptor_words: 0,
        known_compounds: 0,
    };

    for record in records {
        progress.inc(1);

        let hex_key = record.hex.to_lowercase();
        let name_key = record.name.to_lowercase();
        let exact_key = format!("{hex_key}|{name_key}");

        if !hex_seen.insert(hex_key) {
            hex_duplicates += 1;
        }
        if !name_seen.insert(name_key.clone()) {
            name_duplicates += 1;
        }
        if !exact_seen.insert(exact_key) {
            exact_duplicates += 1;
        }
        if let Some(family) = record.family {
            family_seen.insert(family.as_str());
        }

        if is_canonical_hex(&record.hex) {
            valid += 1;
        }

        let len = record.name.chars().count();
        length_sum += len;
        length_min = length_min.min(len);
        length_max = length_max.max(len);

        let words: Vec<&str> = record.name.split_whitespace().collect();
        words_sum += words.len();
        for word in &words {
            word_length_sum += word.chars().count() as f64 / words.len() as f64;
            *word_counts.entry(word.to_lowercase()).or_default() += 1;
        }

        let bucket = format!("{}-", len / 5 * 5);
        *name_length_buckets.entry(bucket).or_default() += 1;
        if record.hex.len() >= 3 {
            *hex_groups.entry(record.hex[1..3].to_string()).or_default() += 1;
        }

        scan_patterns(&record.name, &name_key, &lexicon, &mut patterns);
    }

    progress.finish_and_clear();

    let total = records.len();
    let divisor = total.max(1) as f64;

    let mut by_count: Vec<(&String, &usize)> = word_counts.iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let most_common_words = by_count.iter().take(10).map(|(w, _)| (*w).clone()).collect();

    let mut by_length: Vec<&ColorRecord> = records.iter().collect();
    by_length.sort_by_key(|r| std::cmp::Reverse(r.name.chars().count()));
    let longest_names = by_length.iter().take(5).map(|r| r.name.clone()).collect();
    by_length.sort_by_key(|r| r.name.chars().count());
    let shortest_names = by_length.iter().take(5).map(|r| r.name.clone()).collect();

    AnalyzeResult {
        total,
        valid,
        invalid: total - valid,
        families: family_seen.len(),
        duplicates: DuplicateCounts {
            hex_duplicates,
            name_duplicates,
            exact_duplicates,
            unique_hex: hex_seen.len(),
            unique_names: name_seen.len(),
        },
        stats: DatasetStats {
            name_length_avg: length_sum as f64 / divisor,
            name_length_min: if total == 0 { 0 } else { length_min },
            name_length_max: length_max,
            avg_words: words_sum as f64 / divisor,
            avg_word_length: word_length_sum / divisor,
        },
        top: TopStats {
            longest_names,
            shortest_names,
            most_common_words,
        },
        distributions: Distributions {
            name_length_buckets,
            hex_groups,
        },
        patterns,
    }
}

fn scan_patterns(name: &str, name_lower: &str, lexicon: &Lexicon, patterns: &mut Patterns) {
    if name.chars().any(|c| c.is_ascii_digit()) {
        patterns.has_numbers += 1;
    }
    if name
        .chars()
        .any(|c| !(c.is_ascii_alphabetic() || c == ' ' || c == '-'))
    {
        patterns.has_special_chars += 1;
    }
    let chars: Vec<char> = name.chars().collect();
    if chars
        .windows(2)
        .any(|w| w[0].is_ascii_lowercase() && w[1].is_ascii_uppercase())
    {
        patterns.camel_case += 1;
    }
    if !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-')
    {
        patterns.all_lower += 1;
    }
    if !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == ' ' || c == '-')
    {
        patterns.all_upper += 1;
    }
    let has_descriptor = lexicon
        .descriptors()
        .iter()
        .flat_map(|(_, words)| words.iter())
        .any(|word| name_lower.contains(word.as_str()));
    if has_descriptor {
        patterns.descriptor_words += 1;
    }
    let squashed: String = name_lower
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    if lexicon.compounds().iter().any(|c| *c == squashed) {
        patterns.known_compounds += 1;
    }
}

fn is_canonical_hex(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn print_report(dataset: &Path, result: &AnalyzeResult) {
    println!("Dataset analysis: {}", dataset.display());
    println!(
        "Total colors: {} across {} families",
        result.total, result.families
    );
    println!(
        "Valid: {} ({}), invalid: {}",
        result.valid,
        percent(result.valid, result.total),
        result.invalid
    );

    println!("\nDuplicates:");
    println!(
        "  Hex doubles:   {} ({})",
        result.duplicates.hex_duplicates,
        percent(result.duplicates.hex_duplicates, result.total)
    );
    println!(
        "  Name doubles:  {} ({})",
        result.duplicates.name_duplicates,
        percent(result.duplicates.name_duplicates, result.total)
    );
    println!("  Exact doubles: {}", result.duplicates.exact_duplicates);
    println!("  Unique hex:    {}", result.duplicates.unique_hex);
    println!("  Unique names:  {}", result.duplicates.unique_names);

    println!("\nName statistics:");
    println!(
        "  Length: {:.1} avg ({}-{})",
        result.stats.name_length_avg, result.stats.name_length_min, result.stats.name_length_max
    );
    println!(
        "  Words: {:.1} avg, {:.1} chars each",
        result.stats.avg_words, result.stats.avg_word_length
    );

    println!("\nTops:");
    println!("  Longest:  {}", result.top.longest_names.join(", "));
    println!("  Shortest: {}", result.top.shortest_names.join(", "));
    println!("  Popular words: {}", result.top.most_common_words.join(", "));

    println!("\nPatterns:");
    println!("  With numbers:       {}", result.patterns.has_numbers);
    println!("  Special characters: {}", result.patterns.has_special_chars);
    println!("  CamelCase:          {}", result.patterns.camel_case);
    println!("  All lowercase:      {}", result.patterns.all_lower);
    println!("  Descriptor words:   {}", result.patterns.descriptor_words);
    println!("  Known compounds:    {}", result.patterns.known_compounds);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColorRecord;

    fn record(hex: &str, name: &str) -> ColorRecord {
        ColorRecord::from_raw(hex, name).unwrap()
    }

    #[test]
    fn test_analyze_counts_duplicates() {
        let records = vec![
            record("#ff0000", "Red"),
            record("#ff0000", "Crimson"),
            record("#0000ff", "Red"),
            record("#0000ff", "Red"),
        ];
        let result = analyze(&records);
        assert_eq!(result.total, 4);
        assert_eq!(result.duplicates.hex_duplicates, 2);
        assert_eq!(result.duplicates.name_duplicates, 2);
        assert_eq!(result.duplicates.exact_duplicates, 1);
        assert_eq!(result.duplicates.unique_hex, 2);
        assert_eq!(result.duplicates.unique_names, 2);
    }

    #[test]
    fn test_analyze_patterns() {
        let records = vec![
            record("#ff0000", "Red 2"),
            record("#00ff00", "deepGreen"),
            record("#0000ff", "calm sea"),
        ];
        let result = analyze(&records);
        assert_eq!(result.patterns.has_numbers, 1);
        assert_eq!(result.patterns.camel_case, 1);
        assert_eq!(result.patterns.all_lower, 1, "only 'calm sea' is all lowercase");
        assert!(result.patterns.descriptor_words >= 1, "'calm sea' carries descriptors");
    }

    #[test]
    fn test_analyze_recognizes_known_compounds() {
        let records = vec![
            record("#000080", "Navy Blue"),
            record("#4682b4", "steel-blue"),
            record("#ff0000", "Red"),
        ];
        let result = analyze(&records);
        assert_eq!(result.patterns.known_compounds, 2);
    }

    #[test]
    fn test_analyze_empty_dataset_does_not_panic() {
        let result = analyze(&[]);
        assert_eq!(result.total, 0);
        assert_eq!(result.stats.name_length_min, 0);
    }

    #[test]
    fn test_analyze_tops() {
        let records = vec![
            record("#111111", "A"),
            record("#222222", "Medium Name"),
            record("#333333", "The Very Longest Name Here"),
        ];
        let result = analyze(&records);
        assert_eq!(result.top.longest_names[0], "The Very Longest Name Here");
        assert_eq!(result.top.shortest_names[0], "A");
    }
}
