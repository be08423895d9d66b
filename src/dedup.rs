//! Semantic deduplication engine
//!
//! Two-phase exact dedup over an in-memory dataset: records are grouped by
//! lowercase hex first, then the hex winners are grouped by lowercase name.
//! Within each group of two or more, a single winner is selected by a
//! weighted score, and every collapsed group is reported with the reasoning
//! behind the choice. The engine is a pure function of its input plus the
//! lexicon: no I/O, no shared mutable state, deterministic for a given
//! input order.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::dataset::ColorRecord;
use crate::lexicon::Lexicon;

pub mod semantic;
pub mod strings;

use semantic::SemanticAnalyzer;

/// One collapsed group of duplicates, for the report.
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    /// The shared hex, or the comma-joined hexes of a name group.
    pub hex: String,
    /// All member names, original order.
    pub names: Vec<String>,
    /// The winning name.
    pub selected: String,
    /// Human-readable justification, tagged `| HEX` or `| NAME`.
    pub reason: String,
}

/// Reduced dataset plus the per-group report.
#[derive(Debug)]
pub struct DedupOutcome {
    pub colors: Vec<ColorRecord>,
    pub groups: Vec<DuplicateGroup>,
}

pub struct Deduplicator {
    analyzer: SemanticAnalyzer,
}

impl Deduplicator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            analyzer: SemanticAnalyzer::new(lexicon),
        }
    }

    pub fn analyzer(&self) -> &SemanticAnalyzer {
        &self.analyzer
    }

    /// Run both phases over `colors` and return the survivors together with
    /// every duplicate group. Input records are never mutated; winners are
    /// cloned out.
    pub fn deduplicate(&self, colors: &[ColorRecord]) -> DedupOutcome {
        // Phase A: group by lowercase hex, first-seen order
        let hex_groups = group_by(colors.iter(), |c| c.hex.to_lowercase());
        debug!(records = colors.len(), hex_groups = hex_groups.len(), "hex grouping done");

        let mut hex_winners: Vec<&ColorRecord> = Vec::new();
        let mut hex_duplicates: Vec<DuplicateGroup> = Vec::new();

        for (hex, group) in &hex_groups {
            if group.len() == 1 {
                hex_winners.push(group[0]);
            } else {
                let winner = group[self.select_best(group)];
                hex_duplicates.push(DuplicateGroup {
                    hex: hex.clone(),
                    names: group.iter().map(|c| c.name.clone()).collect(),
                    selected: winner.name.clone(),
                    reason: format!("{} | HEX", self.selection_reason(group, winner)),
                });
                hex_winners.push(winner);
            }
        }

        // Phase B: group the hex winners by lowercase name. Winners with an
        // empty name are left out of name grouping entirely.
        let name_groups = group_by(
            hex_winners.iter().copied().filter(|c| !c.name.is_empty()),
            |c| c.name.to_lowercase(),
        );
        debug!(name_groups = name_groups.len(), "name grouping done");

        if name_groups.is_empty() {
            return DedupOutcome {
                colors: hex_winners.into_iter().cloned().collect(),
                groups: hex_duplicates,
            };
        }

        let mut result: Vec<ColorRecord> = Vec::new();
        let mut name_duplicates: Vec<DuplicateGroup> = Vec::new();

        for (_, group) in &name_groups {
            if group.len() == 1 {
                result.push(group[0].clone());
            } else {
                let winner = group[self.select_best(group)];
                name_duplicates.push(DuplicateGroup {
                    hex: group
                        .iter()
                        .map(|c| c.hex.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    names: group.iter().map(|c| c.name.clone()).collect(),
                    selected: winner.name.clone(),
                    reason: format!("{} | NAME", self.selection_reason(group, winner)),
                });
                result.push(winner.clone());
            }
        }

        hex_duplicates.extend(name_duplicates);
        DedupOutcome {
            colors: result,
            groups: hex_duplicates,
        }
    }

    /// Index of the best-scoring member. The sort is stable and descending,
    /// so ties keep their original relative order.
    fn select_best(&self, group: &[&ColorRecord]) -> usize {
        let mut scored: Vec<(f64, usize)> = group
            .iter()
            .enumerate()
            .map(|(idx, color)| (self.calculate_score(color, group, idx), idx))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored[0].1
    }

    /// Weighted member score: 50% semantic agreement, 25% uniqueness among
    /// the group's names, 15% closeness to a ten-character name, 10%
    /// original-order priority.
    fn calculate_score(&self, color: &ColorRecord, group: &[&ColorRecord], index: usize) -> f64 {
        let mut score = 0.0;

        score += self.analyzer.score_semantic_match(color) * 0.5;

        let mut min_distance = f64::INFINITY;
        for (other_idx, other) in group.iter().enumerate() {
            if other_idx == index {
                continue;
            }
            let dist = strings::damerau_levenshtein(&color.name, &other.name) as f64;
            min_distance = min_distance.min(dist);
        }
        score += (min_distance * 10.0).min(100.0) * 0.25;

        let length_score = (10.0 - (color.name.chars().count() as f64 - 10.0).abs()).max(0.0);
        score += length_score * 0.15;

        let priority_score = (group.len() - index) as f64 * 5.0;
        score += priority_score * 0.10;

        score
    }

    fn selection_reason(&self, group: &[&ColorRecord], winner: &ColorRecord) -> String {
        let mut reasons: Vec<String> = Vec::new();

        let names: Vec<&str> = group.iter().map(|c| c.name.as_str()).collect();
        if names.contains(&"gray") && names.contains(&"grey") {
            reasons.push("CSS standard".to_string());
        }

        let semantic_score = self.analyzer.score_semantic_match(winner);
        if semantic_score > 50.0 {
            reasons.push(format!("Semantic: {}", semantic_score.round() as i64));
        }

        reasons.join(" | ")
    }
}

/// Bucket items by key, preserving first-seen key order.
fn group_by<'a, I, F>(items: I, key: F) -> Vec<(String, Vec<&'a ColorRecord>)>
where
    I: Iterator<Item = &'a ColorRecord>,
    F: Fn(&ColorRecord) -> String,
{
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<&'a ColorRecord>> = HashMap::new();

    for item in items {
        let k = key(item);
        buckets
            .entry(k.clone())
            .or_insert_with(|| {
                order.push(k);
                Vec::new()
            })
            .push(item);
    }

    order
        .into_iter()
        .map(|k| {
            let group = buckets.remove(&k).expect("ordered key has a bucket");
            (k, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hex: &str, name: &str) -> ColorRecord {
        ColorRecord::from_raw(hex, name).expect("test hex must parse")
    }

    fn deduper() -> Deduplicator {
        Deduplicator::new(Lexicon::builtin())
    }

    #[test]
    fn test_no_duplicates_passes_through() {
        let input = vec![record("#ff0000", "Red"), record("#00ff00", "Green Leaf")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 2);
        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.colors[0].hex, "#ff0000");
        assert_eq!(outcome.colors[1].hex, "#00ff00");
    }

    #[test]
    fn test_same_hex_collapses_with_hex_tag() {
        let input = vec![record("#ff0000", "Red"), record("#ff0000", "Crimson")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 1);
        assert_eq!(outcome.groups.len(), 1);
        let group = &outcome.groups[0];
        assert_eq!(group.hex, "#ff0000");
        assert_eq!(group.names, vec!["Red", "Crimson"]);
        assert!(group.reason.ends_with("| HEX"), "reason was {:?}", group.reason);
        assert!(group.names.contains(&group.selected));
    }

    #[test]
    fn test_same_name_collapses_with_name_tag() {
        let input = vec![record("#808080", "Stone"), record("#818181", "stone")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 1);
        assert_eq!(outcome.groups.len(), 1);
        let group = &outcome.groups[0];
        assert_eq!(group.hex, "#808080, #818181");
        assert!(group.reason.ends_with("| NAME"), "reason was {:?}", group.reason);
    }

    #[test]
    fn test_gray_grey_reason_mentions_css_standard() {
        let input = vec![record("#808080", "gray"), record("#818181", "grey")];
        // Different hexes survive phase A; "gray" and "grey" do not share a
        // lowercase name, so they stay separate records
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 2);

        // Same hex forces them into one phase-A group
        let input = vec![record("#808080", "gray"), record("#808080", "grey")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 1);
        assert!(
            outcome.groups[0].reason.contains("CSS standard"),
            "reason was {:?}",
            outcome.groups[0].reason
        );
    }

    #[test]
    fn test_result_never_grows_and_hexes_come_from_input() {
        let input = vec![
            record("#ff0000", "Red"),
            record("#ff0000", "Ruby"),
            record("#0000ff", "Blue"),
            record("#00ff00", "Blue"),
        ];
        let outcome = deduper().deduplicate(&input);
        assert!(outcome.colors.len() <= input.len());
        for survivor in &outcome.colors {
            assert!(input.iter().any(|c| c.hex == survivor.hex));
        }
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let input = vec![
            record("#ff0000", "Red"),
            record("#ff0000", "Crimson"),
            record("#112233", "Night"),
            record("#445566", "night"),
        ];
        let first = deduper().deduplicate(&input);
        let second = deduper().deduplicate(&first.colors);
        assert_eq!(second.colors.len(), first.colors.len());
        assert!(second.groups.is_empty(), "second pass must find nothing");
    }

    #[test]
    fn test_empty_named_sole_survivor_is_dropped_in_phase_b() {
        // Documented behavior: a nameless hex winner is excluded from name
        // grouping and silently vanishes once any other winner has a name
        let input = vec![record("#123456", ""), record("#ff0000", "Red")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 1);
        assert_eq!(outcome.colors[0].name, "Red");
        assert!(outcome.groups.is_empty());
    }

    #[test]
    fn test_all_empty_names_return_hex_winners_unchanged() {
        let input = vec![record("#123456", ""), record("#654321", "")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 2);
        assert!(outcome.groups.is_empty());
    }

    #[test]
    fn test_winner_chosen_by_score_not_alphabet() {
        // "Crimson Red" agrees with the hue and sits near the ideal name
        // length; "Zzz" only wins alphabetically backwards, "Aaa" forwards
        let input = vec![
            record("#d62828", "Aaa"),
            record("#d62828", "Crimson Red"),
            record("#d62828", "Zzz"),
        ];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors[0].name, "Crimson Red");
    }

    #[test]
    fn test_tied_scores_keep_original_order() {
        // Identical names score identically; the stable sort must keep the
        // first occurrence in front
        let a = record("#ff0000", "Red");
        let b = record("#ff0000", "Red");
        let input = vec![a, b];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 1);
        assert_eq!(outcome.colors[0].name, "Red");
    }

    #[test]
    fn test_deterministic_across_runs() {
        let input = vec![
            record("#ff0000", "Red"),
            record("#ff0000", "Scarlet"),
            record("#00aa88", "Lagoon"),
            record("#00aa88", "Teal Wave"),
        ];
        let d = deduper();
        let first = d.deduplicate(&input);
        let second = d.deduplicate(&input);
        let names_a: Vec<_> = first.colors.iter().map(|c| &c.name).collect();
        let names_b: Vec<_> = second.colors.iter().map(|c| &c.name).collect();
        assert_eq!(names_a, names_b);
        assert_eq!(first.groups.len(), second.groups.len());
    }

    #[test]
    fn test_unparseable_hex_scores_low_but_never_aborts() {
        // A record built by hand around a degenerate hex still flows through
        let mut broken = record("#000000", "Mystery");
        broken.hex = "#zzzzzz".to_string();
        let input = vec![broken, record("#ff0000", "Red")];
        let outcome = deduper().deduplicate(&input);
        assert_eq!(outcome.colors.len(), 2);
    }
}
