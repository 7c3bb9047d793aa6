// medistage/src/commands/status.rs
//
// USE CASE: Inspect the staging tables (pending rows awaiting validation).

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::Table;
use medistage_core::application::take_snapshot;
use medistage_core::infrastructure::adapters::postgres::PgStagingStore;
use medistage_core::infrastructure::config::load_settings;

pub async fn execute(config_dir: PathBuf, database_url: String) -> anyhow::Result<()> {
    let settings = load_settings(&config_dir).with_context(|| {
        format!("Failed to load application settings from {:?}", config_dir)
    })?;

    let store = PgStagingStore::connect(&database_url)
        .await
        .context("Failed to connect to the staging database")?;

    let result = take_snapshot(&store, &settings.schema).await;
    store.disconnect().await;
    let snapshot = result.context("Failed to query staging tables")?;

    println!("\n🔍 Staging schema '{}': rows awaiting validation", settings.schema);

    let mut table = Table::new();
    table.set_header(vec!["Table", "Pending rows"]);
    table.add_row(vec![
        "patient_study_metadata".to_string(),
        snapshot.study_pending.to_string(),
    ]);
    table.add_row(vec![
        "patient_study_series_data".to_string(),
        snapshot.series_pending.to_string(),
    ]);
    println!("{table}");

    if snapshot.is_empty() {
        println!("ℹ️  Nothing staged for validation.");
    }

    Ok(())
}
