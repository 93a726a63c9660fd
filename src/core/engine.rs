use crate::core::aggregate::TankAggregator;
use crate::core::notes::FeedingNotesFormatter;
use crate::core::species::SpeciesPortionCalculator;
use crate::domain::model::{FeedingPlan, SpeciesNotes, SpeciesPortionResult, SpeciesSelection};
use crate::domain::ports::RecommendationProvider;
use crate::utils::error::Result;
use chrono::Utc;

/// Drives the full calculation: one recommendation lookup per selected
/// species, awaited in selection order, then the pure core assembles the
/// plan. No state crosses lookups.
pub struct DietEngine<P: RecommendationProvider> {
    provider: P,
    calculator: SpeciesPortionCalculator,
    formatter: FeedingNotesFormatter,
}

impl<P: RecommendationProvider> DietEngine<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            calculator: SpeciesPortionCalculator::default(),
            formatter: FeedingNotesFormatter::new(),
        }
    }

    pub async fn run(&self, selection: &[SpeciesSelection]) -> Result<FeedingPlan> {
        tracing::info!("🐟 Calculating feeding plan for {} species", selection.len());

        let mut species_results = Vec::with_capacity(selection.len());
        let mut notes = Vec::with_capacity(selection.len());

        for entry in selection {
            tracing::debug!(
                "Requesting recommendation for '{}' (x{})",
                entry.name,
                entry.quantity
            );
            let recommendation = self.provider.recommend(&entry.name, entry.quantity).await?;

            let options = self
                .calculator
                .compute(&recommendation.portion_expression, entry.quantity);
            tracing::debug!(
                "'{}': {}",
                entry.name,
                TankAggregator::describe_options(&options)
            );

            species_results.push(SpeciesPortionResult {
                species_name: entry.name.clone(),
                quantity: entry.quantity,
                options,
            });
            notes.push(SpeciesNotes {
                species_name: entry.name.clone(),
                lines: self.formatter.clean(&recommendation.feeding_notes),
            });
        }

        let tank_totals = TankAggregator::aggregate(&species_results);
        let summary = TankAggregator::summary(&tank_totals);
        tracing::info!("🧮 Tank total: {}", summary);

        Ok(FeedingPlan {
            species: species_results,
            tank_totals,
            summary,
            notes,
            generated_at: Utc::now(),
        })
    }
}
