use crate::core::normalizer::FoodLabelNormalizer;
use crate::core::parser::PortionExpressionParser;
use crate::domain::model::PortionOption;
use regex::Regex;

/// Scales a per-fish portion expression to per-species totals, keeping
/// "or"-separated feeding alternatives as independent options in source
/// order. The first option is the primary one used for tank totals.
pub struct SpeciesPortionCalculator {
    parser: PortionExpressionParser,
    normalizer: FoodLabelNormalizer,
    or_split_re: Regex,
}

impl SpeciesPortionCalculator {
    pub fn new(parser: PortionExpressionParser, normalizer: FoodLabelNormalizer) -> Self {
        Self {
            parser,
            normalizer,
            or_split_re: Regex::new(r"(?i)\bor\b").expect("valid or pattern"),
        }
    }

    /// Precondition: quantity >= 1, enforced by the config layer before
    /// this is reached.
    pub fn compute(&self, expression: &str, quantity: u32) -> Vec<PortionOption> {
        self.or_split_re
            .split(expression)
            .map(|option| {
                let option = option.trim().trim_start_matches(',').trim();
                let parsed = self.parser.parse(option);
                let food_label = self.normalizer.normalize(&parsed.raw_food_label);
                PortionOption {
                    per_fish_low: parsed.low,
                    per_fish_high: parsed.high,
                    total_low: parsed.low.saturating_mul(quantity),
                    total_high: parsed.high.saturating_mul(quantity),
                    food_label,
                }
            })
            .collect()
    }
}

impl Default for SpeciesPortionCalculator {
    fn default() -> Self {
        Self::new(PortionExpressionParser::new(), FoodLabelNormalizer::new())
    }
}
