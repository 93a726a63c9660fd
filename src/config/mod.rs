#[cfg(feature = "cli")]
pub mod cli;
pub mod tank_file;

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::config::tank_file::TankFile;
    use crate::domain::model::SpeciesSelection;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::{DietError, Result};
    use crate::utils::validation::{
        validate_non_empty_string, validate_positive_number, validate_url, Validate,
    };
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "aquafeed")]
    #[command(about = "Feeding-diet calculator for a tank of selected fish species")]
    pub struct CliConfig {
        #[arg(long, default_value = "https://api.aquafeed.example/recommend")]
        pub api_endpoint: String,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        /// Species selection as name:quantity pairs, e.g. "neon tetra:6,guppy:3"
        #[arg(long, value_delimiter = ',')]
        pub species: Vec<String>,

        /// TOML tank file listing species and quantities
        #[arg(long)]
        pub tank_file: Option<String>,

        #[arg(long, default_value = "10")]
        pub timeout_secs: u64,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Tank-file entries first, then CLI pairs, in the order given.
        pub fn selection(&self) -> Result<Vec<SpeciesSelection>> {
            let mut selection = Vec::new();

            if let Some(path) = &self.tank_file {
                let tank = TankFile::from_file(path)?;
                selection.extend(tank.into_selection());
            }

            for pair in &self.species {
                selection.push(parse_species_pair(pair)?);
            }

            if selection.is_empty() {
                return Err(DietError::MissingConfigError {
                    field: "species (or tank_file)".to_string(),
                });
            }

            Ok(selection)
        }
    }

    fn parse_species_pair(pair: &str) -> Result<SpeciesSelection> {
        let Some((name, quantity)) = pair.rsplit_once(':') else {
            return Err(DietError::InvalidConfigValueError {
                field: "species".to_string(),
                value: pair.to_string(),
                reason: "Expected name:quantity".to_string(),
            });
        };

        validate_non_empty_string("species", name)?;
        let quantity: u32 = quantity.trim().parse().map_err(|_| {
            DietError::InvalidConfigValueError {
                field: "species".to_string(),
                value: pair.to_string(),
                reason: "Quantity must be a positive integer".to_string(),
            }
        })?;
        validate_positive_number("quantity", quantity as u64, 1)?;

        Ok(SpeciesSelection {
            name: name.trim().to_string(),
            quantity,
        })
    }

    impl ConfigProvider for CliConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn request_timeout_secs(&self) -> u64 {
            self.timeout_secs
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("api_endpoint", &self.api_endpoint)?;
            validate_non_empty_string("output_path", &self.output_path)?;
            validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
            for pair in &self.species {
                parse_species_pair(pair)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn config(species: Vec<&str>) -> CliConfig {
            CliConfig {
                api_endpoint: "https://api.example.com/recommend".to_string(),
                output_path: "./output".to_string(),
                species: species.into_iter().map(str::to_string).collect(),
                tank_file: None,
                timeout_secs: 10,
                verbose: false,
            }
        }

        #[test]
        fn test_selection_parses_pairs() {
            let selection = config(vec!["neon tetra:6", "guppy:3"]).selection().unwrap();

            assert_eq!(selection.len(), 2);
            assert_eq!(selection[0].name, "neon tetra");
            assert_eq!(selection[0].quantity, 6);
            assert_eq!(selection[1].name, "guppy");
            assert_eq!(selection[1].quantity, 3);
        }

        #[test]
        fn test_selection_rejects_zero_quantity() {
            assert!(config(vec!["guppy:0"]).selection().is_err());
        }

        #[test]
        fn test_selection_rejects_malformed_pair() {
            assert!(config(vec!["guppy"]).selection().is_err());
            assert!(config(vec![":3"]).selection().is_err());
        }

        #[test]
        fn test_selection_requires_at_least_one_species() {
            assert!(config(vec![]).selection().is_err());
        }

        #[test]
        fn test_validate_checks_endpoint_scheme() {
            let mut cfg = config(vec!["guppy:1"]);
            cfg.api_endpoint = "ftp://bad".to_string();
            assert!(cfg.validate().is_err());
        }
    }
}
