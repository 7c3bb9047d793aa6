// medistage/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug medistage validate ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            config_dir,
            database_url,
            timeout,
        } => commands::validate::execute(config_dir, database_url, timeout).await,

        Commands::Deploy {
            config_dir,
            database_url,
        } => commands::deploy::execute(config_dir, database_url).await,

        Commands::Status {
            config_dir,
            database_url,
        } => commands::status::execute(config_dir, database_url).await,
    }
}
