pub mod aggregate;
pub mod engine;
pub mod normalizer;
pub mod notes;
pub mod parser;
pub mod species;

pub use crate::domain::model::{
    FeedingPlan, ParsedPortion, PortionOption, SpeciesPortionResult, SpeciesSelection, TankTotal,
};
pub use crate::domain::ports::{ConfigProvider, PlanStore, RecommendationProvider};
pub use crate::utils::error::Result;
