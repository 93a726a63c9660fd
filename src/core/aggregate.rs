use crate::domain::model::{PortionOption, SpeciesPortionResult, TankTotal};

/// Combines per-species totals into tank-wide totals per food label and
/// renders the human-readable summary.
///
/// Only each species' first (primary) option accumulates into the tank
/// total; alternatives were never meant to be fed simultaneously, so
/// counting them all would double-count. All options stay on the
/// per-species result for descriptive display.
pub struct TankAggregator;

impl TankAggregator {
    pub fn aggregate(results: &[SpeciesPortionResult]) -> Vec<TankTotal> {
        let mut totals: Vec<TankTotal> = Vec::new();

        for result in results {
            let Some(primary) = result.options.first() else {
                continue;
            };
            match totals
                .iter_mut()
                .find(|t| t.food_label == primary.food_label)
            {
                Some(total) => {
                    total.low = total.low.saturating_add(primary.total_low);
                    total.high = total.high.saturating_add(primary.total_high);
                }
                None => totals.push(TankTotal {
                    food_label: primary.food_label.clone(),
                    low: primary.total_low,
                    high: primary.total_high,
                }),
            }
        }

        totals
    }

    /// e.g. "3–6 pcs of flakes; 4 pcs of bloodworms"
    pub fn summary(totals: &[TankTotal]) -> String {
        totals
            .iter()
            .map(|t| format!("{} pcs of {}", render_range(t.low, t.high), t.food_label))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Per-species descriptive text with every alternative, e.g.
    /// "3–6 pcs of flakes OR 9 pcs of bloodworms".
    pub fn describe_options(options: &[PortionOption]) -> String {
        options
            .iter()
            .map(|o| {
                format!(
                    "{} pcs of {}",
                    render_range(o.total_low, o.total_high),
                    o.food_label
                )
            })
            .collect::<Vec<_>>()
            .join(" OR ")
    }
}

fn render_range(low: u32, high: u32) -> String {
    if low == high {
        format!("{}", low)
    } else {
        format!("{}–{}", low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(name: &str, options: Vec<PortionOption>) -> SpeciesPortionResult {
        SpeciesPortionResult {
            species_name: name.to_string(),
            quantity: 1,
            options,
        }
    }

    fn option(label: &str, total_low: u32, total_high: u32) -> PortionOption {
        PortionOption {
            per_fish_low: total_low,
            per_fish_high: total_high,
            total_low,
            total_high,
            food_label: label.to_string(),
        }
    }

    #[test]
    fn test_aggregate_sums_matching_labels() {
        let results = vec![
            species("neon tetra", vec![option("flakes", 2, 3)]),
            species("guppy", vec![option("flakes", 4, 4)]),
        ];

        let totals = TankAggregator::aggregate(&results);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].food_label, "flakes");
        assert_eq!(totals[0].low, 6);
        assert_eq!(totals[0].high, 7);
    }

    #[test]
    fn test_aggregate_only_primary_option_counts() {
        let results = vec![species(
            "corydoras",
            vec![option("algae wafers", 2, 2), option("bloodworms", 6, 6)],
        )];

        let totals = TankAggregator::aggregate(&results);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].food_label, "algae wafers");
    }

    #[test]
    fn test_aggregate_preserves_first_seen_label_order() {
        let results = vec![
            species("betta", vec![option("micropellets", 3, 3)]),
            species("pleco", vec![option("algae wafers", 1, 2)]),
            species("betta sorority", vec![option("micropellets", 6, 6)]),
        ];

        let totals = TankAggregator::aggregate(&results);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].food_label, "micropellets");
        assert_eq!(totals[0].low, 9);
        assert_eq!(totals[1].food_label, "algae wafers");
    }

    #[test]
    fn test_aggregate_skips_species_without_options() {
        let results = vec![species("mystery fish", vec![])];
        assert!(TankAggregator::aggregate(&results).is_empty());
    }

    #[test]
    fn test_summary_rendering() {
        let totals = vec![
            TankTotal {
                food_label: "flakes".to_string(),
                low: 3,
                high: 6,
            },
            TankTotal {
                food_label: "bloodworms".to_string(),
                low: 4,
                high: 4,
            },
        ];

        assert_eq!(
            TankAggregator::summary(&totals),
            "3–6 pcs of flakes; 4 pcs of bloodworms"
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(TankAggregator::summary(&[]), "");
    }

    #[test]
    fn test_describe_options_joins_alternatives() {
        let options = vec![option("flakes", 3, 6), option("bloodworms", 9, 9)];
        assert_eq!(
            TankAggregator::describe_options(&options),
            "3–6 pcs of flakes OR 9 pcs of bloodworms"
        );
    }
}
