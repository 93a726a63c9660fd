use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the species -> quantity selection the caller built up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesSelection {
    pub name: String,
    pub quantity: u32,
}

/// What the external recommendation provider returns for one species.
/// No schema guarantees beyond "strings, possibly malformed" — empty
/// fields flow through the core and degrade to its built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendation {
    pub portion_expression: String,
    pub feeding_notes: String,
}

/// Result of parsing a single free-text portion description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPortion {
    pub low: u32,
    pub high: u32,
    pub raw_food_label: String,
}

/// One feeding alternative for a species, scaled by its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortionOption {
    pub per_fish_low: u32,
    pub per_fish_high: u32,
    pub total_low: u32,
    pub total_high: u32,
    pub food_label: String,
}

/// Per-species totals; multiple options arise from "or"-separated
/// alternatives in the source expression. The first option is primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesPortionResult {
    pub species_name: String,
    pub quantity: u32,
    pub options: Vec<PortionOption>,
}

/// Tank-wide running total for one canonical food label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankTotal {
    pub food_label: String,
    pub low: u32,
    pub high: u32,
}

/// Cleaned feeding-notes lines for one species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesNotes {
    pub species_name: String,
    pub lines: Vec<String>,
}

/// The fully assembled payload handed to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedingPlan {
    pub species: Vec<SpeciesPortionResult>,
    pub tank_totals: Vec<TankTotal>,
    pub summary: String,
    pub notes: Vec<SpeciesNotes>,
    pub generated_at: DateTime<Utc>,
}
