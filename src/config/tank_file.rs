use crate::domain::model::SpeciesSelection;
use crate::utils::error::{DietError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk tank description:
///
/// ```toml
/// [[species]]
/// name = "neon tetra"
/// quantity = 6
///
/// [[species]]
/// name = "corydoras"
/// quantity = 4
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankFile {
    pub species: Vec<SpeciesEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    pub quantity: u32,
}

impl TankFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tank: TankFile = toml::from_str(content)?;
        tank.check_entries()?;
        Ok(tank)
    }

    pub fn into_selection(self) -> Vec<SpeciesSelection> {
        self.species
            .into_iter()
            .map(|entry| SpeciesSelection {
                name: entry.name,
                quantity: entry.quantity,
            })
            .collect()
    }

    fn check_entries(&self) -> Result<()> {
        for entry in &self.species {
            if entry.name.trim().is_empty() {
                return Err(DietError::InvalidConfigValueError {
                    field: "species.name".to_string(),
                    value: entry.name.clone(),
                    reason: "Name cannot be empty".to_string(),
                });
            }
            if entry.quantity < 1 {
                return Err(DietError::InvalidConfigValueError {
                    field: "species.quantity".to_string(),
                    value: entry.quantity.to_string(),
                    reason: "Quantity must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }
}
