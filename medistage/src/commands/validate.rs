// medistage/src/commands/validate.rs
//
// USE CASE: Run the staging validation workflow.

use std::path::PathBuf;

use anyhow::Context;
use medistage_core::application::{ValidationOptions, run_validation};
use medistage_core::domain::outcome::ValidationStatus;
use medistage_core::domain::progress::ProgressEvent;
use medistage_core::infrastructure::adapters::postgres::PgStagingStore;
use medistage_core::infrastructure::config::{CATALOG_FILE, load_settings};

pub async fn execute(
    config_dir: PathBuf,
    database_url: String,
    timeout: Option<u32>,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let mut settings = load_settings(&config_dir).with_context(|| {
        format!("Failed to load application settings from {:?}", config_dir)
    })?;
    if let Some(secs) = timeout {
        settings.command_timeout_secs = secs;
    }
    println!(
        "   Schema: {} (timeout {}s)",
        settings.schema, settings.command_timeout_secs
    );
    let catalog_path = config_dir.join(CATALOG_FILE);

    // B. Instantiate the DB Adapter (PostgreSQL)
    let store = PgStagingStore::connect(&database_url)
        .await
        .context("Failed to connect to the staging database")?;

    // C. Run the Orchestrator (Application Layer)
    // Dependency injection happens here: we pass the store and the config.
    let options = ValidationOptions::from(&settings);
    let sink = |event: ProgressEvent| {
        println!("   [{:>3}%] {}", event.percent, event.message);
    };

    let status = run_validation(&store, &catalog_path, &options, Some(&sink)).await;

    match status {
        ValidationStatus::Completed => {
            println!("\n✨ SUCCESS! Validation finished in {:.2?}", start.elapsed());
        }
        ValidationStatus::NothingToValidate => {
            println!(
                "\nℹ️  No validation performed (status {}). Check the messages above.",
                status.code()
            );
        }
        ValidationStatus::BusinessFailure => {
            eprintln!(
                "\n❌ FAILURE. A validation procedure rejected the staged data (status {}).",
                status.code()
            );
            std::process::exit(1);
        }
        ValidationStatus::InfrastructureFault => {
            eprintln!("\n💥 CRITICAL VALIDATION ERROR (status {}).", status.code());
            std::process::exit(1);
        }
    }

    Ok(())
}
