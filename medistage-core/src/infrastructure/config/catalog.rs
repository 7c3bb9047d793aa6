// medistage-core/src/infrastructure/config/catalog.rs
//
// Loader for the SQL catalog document (logical name -> candidate statements,
// grouped into queries and procedures).

use std::fs;
use std::path::Path;
use tracing::{info, instrument};

use crate::domain::catalog::ProcedureCatalog;
use crate::infrastructure::error::InfrastructureError;

pub const CATALOG_FILE: &str = "sql_catalog.json";

/// Load the catalog from its conventional location inside a config directory.
pub fn load_catalog(config_dir: &Path) -> Result<ProcedureCatalog, InfrastructureError> {
    load_catalog_file(&config_dir.join(CATALOG_FILE))
}

#[instrument(skip(path))]
pub fn load_catalog_file(path: &Path) -> Result<ProcedureCatalog, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(path)?;
    let catalog: ProcedureCatalog = serde_json::from_str(&content).map_err(|e| {
        InfrastructureError::ConfigError(format!("Failed to parse SQL catalog at {:?}: {e}", path))
    })?;

    info!(
        queries = catalog.queries.len(),
        procedures = catalog.procedures.len(),
        "SQL catalog loaded"
    );
    Ok(catalog)
}
