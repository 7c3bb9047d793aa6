// medistage/src/commands/deploy.rs
//
// USE CASE: Manually (re)deploy every validation procedure from the catalog.

use std::path::PathBuf;

use anyhow::Context;
use medistage_core::application::deploy_all;
use medistage_core::infrastructure::adapters::postgres::PgStagingStore;
use medistage_core::infrastructure::config::load_catalog;

pub async fn execute(config_dir: PathBuf, database_url: String) -> anyhow::Result<()> {
    println!("📦 Deploying validation procedures...");

    let catalog = load_catalog(&config_dir)
        .with_context(|| format!("Failed to load SQL catalog from {:?}", config_dir))?;

    let store = PgStagingStore::connect(&database_url)
        .await
        .context("Failed to connect to the staging database")?;

    let result = deploy_all(&store, &catalog).await;
    store.disconnect().await;

    let deployed = result.context("Procedure deployment failed")?;
    println!("✨ {deployed} procedures deployed successfully!");

    Ok(())
}
