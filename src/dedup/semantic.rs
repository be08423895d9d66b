//! Lexicon-driven semantic analysis of color names

use crate::dataset::ColorRecord;
use crate::lexicon::{Lexicon, ModifierCategory};
use crate::metrics::{self, Family, LightnessTier, SaturationTier, Temperature};

/// Features extracted from a single name. Ephemeral: recomputed per call,
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticFeatures {
    /// Modifier categories matched, at most one entry per category.
    pub modifiers: Vec<ModifierCategory>,
    /// Families referenced by the name, in lexicon order.
    pub kernels: Vec<Family>,
    /// Warm/cool hint inferred from kernels; the last kernel match wins.
    pub temperature: Option<Temperature>,
    /// More than one kernel, or any modifier at all.
    pub compound: bool,
    pub has_dash: bool,
}

pub struct SemanticAnalyzer {
    lexicon: Lexicon,
}

impl SemanticAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Bidirectional substring test between a name (spaced and space-stripped
    /// forms) and a lexicon variant (plus its optional space-stripped form).
    fn includes(lower: &str, combi: &str, pure: &str, combined: Option<&str>) -> bool {
        lower.contains(pure)
            || pure.contains(lower)
            || combined.is_some_and(|c| lower.contains(c) || c.contains(lower))
            || combi.contains(pure)
            || pure.contains(combi)
            || combined.is_some_and(|c| combi.contains(c) || c.contains(combi))
    }

    /// Extract which modifier categories and family kernels a name textually
    /// references.
    pub fn extract_features(&self, name: &str) -> SemanticFeatures {
        let lower = name.to_lowercase();
        let combi = lower.replace(' ', "");

        let mut features = SemanticFeatures {
            modifiers: Vec::new(),
            kernels: Vec::new(),
            temperature: None,
            compound: false,
            has_dash: name.contains('-'),
        };

        for (category, variants) in self.lexicon.modifiers() {
            if variants
                .iter()
                .any(|v| Self::includes(&lower, &combi, v, None))
            {
                features.modifiers.push(*category);
            }
        }

        for entry in self.lexicon.kernels() {
            for (variant, combined) in entry.variants.iter().zip(entry.combined.iter()) {
                if Self::includes(&lower, &combi, variant, Some(combined)) {
                    features.kernels.push(entry.family);
                    match entry.family {
                        Family::Red | Family::Pink | Family::Orange => {
                            features.temperature = Some(Temperature::Warm);
                        }
                        Family::Blue | Family::Cyan => {
                            features.temperature = Some(Temperature::Cool);
                        }
                        _ => {}
                    }
                    break;
                }
            }
        }

        features.compound = features.kernels.len() > 1 || !features.modifiers.is_empty();
        features
    }

    /// How well a name's semantics agree with the color's classified
    /// attributes. Capped at 100 from above, unbounded below.
    pub fn score_semantic_match(&self, color: &ColorRecord) -> f64 {
        let features = self.extract_features(&color.name);

        let family = metrics::classify_family(&color.hsl);
        let temp = metrics::temperature(&color.hsl);
        let saturation = metrics::saturation_tier(&color.hsl);
        let lightness = metrics::lightness_tier(&color.hsl);

        let mut score = 0.0;

        if features.temperature == Some(temp) {
            score += 25.0;
        }
        if features.modifiers.contains(&ModifierCategory::Dark)
            && matches!(lightness, LightnessTier::Dark | LightnessTier::VeryDark)
        {
            score += 15.0;
        }
        if features.modifiers.contains(&ModifierCategory::Light)
            && matches!(lightness, LightnessTier::Light | LightnessTier::VeryLight)
        {
            score += 15.0;
        }
        if features.modifiers.contains(&ModifierCategory::Bright)
            && saturation == SaturationTier::Saturated
        {
            score += 10.0;
        }
        if features.kernels.contains(&family) {
            score += 25.0;
        }

        score += 5.0 * features.kernels.len() as f64;

        if features.compound {
            score -= 5.0;
        }

        score.min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn analyzer() -> SemanticAnalyzer {
        SemanticAnalyzer::new(Lexicon::builtin())
    }

    #[test]
    fn test_extract_single_kernel() {
        let features = analyzer().extract_features("Crimson");
        assert!(features.kernels.contains(&Family::Red));
        assert_eq!(features.temperature, Some(Temperature::Warm));
    }

    #[test]
    fn test_extract_cool_kernel() {
        let features = analyzer().extract_features("Cerulean");
        // Azure comes before blue in lexicon order and carries no hint;
        // the blue match later overwrites nothing warm
        assert!(features.kernels.contains(&Family::Azure));
        assert!(features.kernels.contains(&Family::Blue));
        assert_eq!(features.temperature, Some(Temperature::Cool));
    }

    #[test]
    fn test_last_kernel_match_wins_temperature() {
        // "ruby" hits red (warm) early, "sky" hits cyan (cool) later;
        // the later kernels carry no hint and leave cool in place
        let features = analyzer().extract_features("Ruby Sky");
        assert_eq!(features.temperature, Some(Temperature::Cool));

        // "coral" keeps matching down the table; the pink entry near the
        // end flips the hint back to warm
        let features = analyzer().extract_features("Coral Blue");
        assert_eq!(features.temperature, Some(Temperature::Warm));
    }

    #[test]
    fn test_modifiers_one_per_category() {
        let features = analyzer().extract_features("dark dull navy");
        let dark_hits = features
            .modifiers
            .iter()
            .filter(|m| **m == ModifierCategory::Dark)
            .count();
        assert_eq!(dark_hits, 1);
        assert!(features.modifiers.contains(&ModifierCategory::Dull));
        assert!(features.compound);
    }

    #[test]
    fn test_compound_flags() {
        let plain = analyzer().extract_features("xyzzy");
        assert!(!plain.compound);

        let dashed = analyzer().extract_features("blue-green");
        assert!(dashed.has_dash);

        let double = analyzer().extract_features("navy blue");
        assert!(double.compound, "two kernels make a compound");
    }

    #[test]
    fn test_combi_form_matches_spaceless_compounds() {
        let features = analyzer().extract_features("navy blue");
        assert!(features.kernels.contains(&Family::Blue));
    }

    #[test]
    fn test_score_rewards_matching_family() {
        let a = analyzer();
        let red = ColorRecord::from_raw("#d62828", "Crimson Red").unwrap();
        let mislabeled = ColorRecord::from_raw("#d62828", "Ocean Blue").unwrap();
        assert!(
            a.score_semantic_match(&red) > a.score_semantic_match(&mislabeled),
            "a name agreeing with the hue should outscore a contradicting one"
        );
    }

    #[test]
    fn test_score_capped_at_100() {
        let a = analyzer();
        // An empty name substring-matches every table entry; the cap holds
        let record = ColorRecord::from_raw("#ff0000", "").unwrap();
        assert_eq!(a.score_semantic_match(&record), 100.0);
    }
}
