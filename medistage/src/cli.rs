// medistage/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medistage")]
#[command(about = "Staging-database validation pipeline for clinical study metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧪 Validates staged study/series records through the procedure workflow
    Validate {
        /// Configuration directory (settings.json + sql_catalog.json)
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,

        /// Staging database connection string (already decrypted)
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,

        /// Override the command timeout from settings.json (seconds)
        #[arg(long)]
        timeout: Option<u32>,
    },

    /// 📦 Deploys (or redeploys) every validation procedure from the catalog
    Deploy {
        /// Configuration directory (settings.json + sql_catalog.json)
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,

        /// Staging database connection string (already decrypted)
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },

    /// 🔍 Shows pending staging rows awaiting validation
    Status {
        /// Configuration directory (settings.json + sql_catalog.json)
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,

        /// Staging database connection string (already decrypted)
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
}
