use aquafeed::core::aggregate::TankAggregator;
use aquafeed::domain::ports::{ConfigProvider, PlanStore};
use aquafeed::utils::{logger, validation::Validate};
use aquafeed::{CliConfig, DietEngine, HttpRecommendationProvider, LocalPlanStore};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting aquafeed diet calculator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let selection = match config.selection() {
        Ok(selection) => selection,
        Err(e) => {
            tracing::error!("❌ Invalid species selection: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let provider = HttpRecommendationProvider::new(
        config.api_endpoint().to_string(),
        config.request_timeout_secs(),
    )?;
    let store = LocalPlanStore::new(config.output_path().to_string());
    let engine = DietEngine::new(provider);

    match engine.run(&selection).await {
        Ok(plan) => {
            println!("✅ Feeding plan calculated");
            for result in &plan.species {
                println!(
                    "  {} (x{}): {}",
                    result.species_name,
                    result.quantity,
                    TankAggregator::describe_options(&result.options)
                );
            }
            println!("🧮 Tank total: {}", plan.summary);
            for notes in &plan.notes {
                println!("📝 {}:", notes.species_name);
                for line in &notes.lines {
                    println!("  - {}", line);
                }
            }

            let saved_path = store.save_plan("feeding_plan", &plan).await?;
            tracing::info!("📁 Plan saved to: {}", saved_path);
            println!("📁 Plan saved to: {}", saved_path);
        }
        Err(e) => {
            tracing::error!("❌ Diet calculation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
