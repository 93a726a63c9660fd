use regex::Regex;

/// Fallback label when no synonym or heuristic applies.
const FALLBACK_LABEL: &str = "fish food";

/// One canonical label and the raw substrings that map to it.
#[derive(Debug, Clone)]
pub struct SynonymEntry {
    pub canonical: &'static str,
    pub synonyms: &'static [&'static str],
}

/// Maps raw extracted food-label text to a canonical label from a fixed
/// vocabulary. The synonym table is injected at construction and tested
/// in order, first match wins, so specific labels ("micro pellets") take
/// priority over generic ones ("pellets").
pub struct FoodLabelNormalizer {
    table: Vec<SynonymEntry>,
    of_phrase_re: Regex,
}

/// Default vocabulary, ordered by specificity.
fn default_table() -> Vec<SynonymEntry> {
    vec![
        SynonymEntry {
            canonical: "micropellets",
            synonyms: &["micropellets", "micro pellets", "micro-pellets"],
        },
        SynonymEntry {
            canonical: "mini pellets",
            synonyms: &["mini pellets"],
        },
        SynonymEntry {
            canonical: "small pellets",
            synonyms: &["small pellets", "pellets"],
        },
        SynonymEntry {
            canonical: "flakes",
            synonyms: &["flake food", "flakes"],
        },
        SynonymEntry {
            canonical: "algae wafers",
            synonyms: &["algae wafers", "wafers"],
        },
        SynonymEntry {
            canonical: "bloodworms",
            synonyms: &["bloodworms", "bloodworm", "blood worms"],
        },
        SynonymEntry {
            canonical: "brine shrimp",
            synonyms: &["brine shrimp"],
        },
        SynonymEntry {
            canonical: "daphnia",
            synonyms: &["daphnia"],
        },
        SynonymEntry {
            canonical: "cooked peas",
            synonyms: &["cooked peas", "cooked pea", "peas", "pea"],
        },
    ]
}

impl FoodLabelNormalizer {
    pub fn new() -> Self {
        Self::with_table(default_table())
    }

    pub fn with_table(table: Vec<SynonymEntry>) -> Self {
        Self {
            table,
            of_phrase_re: Regex::new(r"\bof\b\s+(.+)").expect("valid of-phrase pattern"),
        }
    }

    /// Total: every input maps to some non-empty label, never an error.
    /// Canonical labels are fixed points.
    pub fn normalize(&self, raw_label: &str) -> String {
        let lowered = raw_label.to_lowercase();

        for entry in &self.table {
            if entry.synonyms.iter().any(|syn| lowered.contains(syn)) {
                return entry.canonical.to_string();
            }
        }

        // secondary heuristic: "small pinch of flakes" -> "flakes"
        if let Some(caps) = self.of_phrase_re.captures(&lowered) {
            if let Some(phrase) = caps.get(1) {
                let cleaned = strip_generic_words(phrase.as_str());
                if !cleaned.is_empty() {
                    return cleaned;
                }
            }
        }

        FALLBACK_LABEL.to_string()
    }
}

impl Default for FoodLabelNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_generic_words(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .filter(|word| {
            let word = word.trim_matches(|c: char| !c.is_alphanumeric());
            !matches!(word, "food" | "feed" | "feeds") && !word.is_empty()
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_synonym_priority() {
        let normalizer = FoodLabelNormalizer::new();
        // micropellets checked before the generic "pellets" synonym
        assert_eq!(normalizer.normalize("2 micro pellets"), "micropellets");
        assert_eq!(normalizer.normalize("micro-pellets"), "micropellets");
        assert_eq!(normalizer.normalize("mini pellets"), "mini pellets");
        assert_eq!(normalizer.normalize("sinking pellets"), "small pellets");
    }

    #[test]
    fn test_normalize_known_labels() {
        let normalizer = FoodLabelNormalizer::new();
        assert_eq!(normalizer.normalize("tropical flake food"), "flakes");
        assert_eq!(normalizer.normalize("algae wafers"), "algae wafers");
        assert_eq!(normalizer.normalize("frozen bloodworm cubes"), "bloodworms");
        assert_eq!(normalizer.normalize("live brine shrimp"), "brine shrimp");
        assert_eq!(normalizer.normalize("daphnia"), "daphnia");
        assert_eq!(normalizer.normalize("blanched cooked peas"), "cooked peas");
    }

    #[test]
    fn test_normalize_of_phrase_heuristic() {
        let normalizer = FoodLabelNormalizer::new();
        assert_eq!(normalizer.normalize("a small pinch of spirulina"), "spirulina");
        // generic words stripped from the extracted phrase
        assert_eq!(
            normalizer.normalize("a portion of freeze-dried tubifex food"),
            "freeze-dried tubifex"
        );
    }

    #[test]
    fn test_normalize_fallback() {
        let normalizer = FoodLabelNormalizer::new();
        assert_eq!(normalizer.normalize(""), "fish food");
        assert_eq!(normalizer.normalize("???"), "fish food");
        assert_eq!(normalizer.normalize("a pinch of food"), "fish food");
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_labels() {
        let normalizer = FoodLabelNormalizer::new();
        for label in [
            "micropellets",
            "mini pellets",
            "small pellets",
            "flakes",
            "algae wafers",
            "bloodworms",
            "brine shrimp",
            "daphnia",
            "cooked peas",
            "fish food",
        ] {
            assert_eq!(normalizer.normalize(&normalizer.normalize(label)), label);
        }
    }

    #[test]
    fn test_normalize_case_insensitive() {
        let normalizer = FoodLabelNormalizer::new();
        assert_eq!(normalizer.normalize("FLAKES"), "flakes");
    }
}
