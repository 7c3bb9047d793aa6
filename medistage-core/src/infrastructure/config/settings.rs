// medistage-core/src/infrastructure/config/settings.rs
//
// Application settings loaded from the configuration directory. Explicit
// values passed into the orchestrator entry point; no process-wide singleton.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

fn default_timeout() -> u32 {
    300
}

fn default_schema() -> String {
    "staging".to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    /// Command timeout applied to the staging connection, in seconds.
    #[serde(default = "default_timeout")]
    pub command_timeout_secs: u32,

    /// Schema holding the staging tables and validation procedures.
    #[serde(default = "default_schema")]
    pub schema: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            command_timeout_secs: default_timeout(),
            schema: default_schema(),
        }
    }
}

#[instrument(skip(config_dir))]
pub fn load_settings(config_dir: &Path) -> Result<AppSettings, InfrastructureError> {
    let settings_path = find_settings_file(config_dir)?;
    info!(path = ?settings_path, "Loading application settings");

    let content = fs::read_to_string(&settings_path)?;
    let mut settings: AppSettings = serde_json::from_str(&content).map_err(|e| {
        InfrastructureError::ConfigError(format!(
            "Failed to parse settings at {:?}: {e}",
            settings_path
        ))
    })?;

    // Override via environment variables (layering pattern).
    // Allows: MEDISTAGE_TIMEOUT=60 medistage validate
    apply_env_overrides(&mut settings);

    Ok(settings)
}

fn find_settings_file(config_dir: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["settings.json", "app_settings.json"];
    for filename in candidates {
        let p = config_dir.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No settings file found in {:?}. Checked: {:?}",
        config_dir, candidates
    )))
}

fn apply_env_overrides(settings: &mut AppSettings) {
    if let Ok(val) = std::env::var("MEDISTAGE_TIMEOUT")
        && let Ok(secs) = val.parse::<u32>()
    {
        info!(old = settings.command_timeout_secs, new = secs, "Overriding timeout via ENV");
        settings.command_timeout_secs = secs;
    }
    if let Ok(val) = std::env::var("MEDISTAGE_SCHEMA") {
        info!(old = ?settings.schema, new = ?val, "Overriding schema via ENV");
        settings.schema = val;
    }
}
