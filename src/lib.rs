pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalPlanStore, CliConfig};

pub use adapters::HttpRecommendationProvider;
pub use core::engine::DietEngine;
pub use utils::error::{DietError, Result};
