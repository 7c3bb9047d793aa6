// medistage-core/src/application/deployment.rs
//
// Procedure-deployment guard: one existence-count query against the server's
// routine catalog, scoped to the staging schema. Pure read; the orchestrator
// decides whether to trigger a (re)deployment. The check-then-deploy pair is
// non-atomic: redeploying an existing procedure overwrites it.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::domain::catalog::ProcedureCatalog;
use crate::domain::procedures::RequiredProcedureSet;
use crate::error::MedistageError;
use crate::ports::store::StagingStore;

#[derive(Error, Debug)]
pub enum GuardError {
    /// The COUNT(*) query produced no usable value. Distinct from a literal
    /// zero, which means none of the required procedures exist yet.
    #[error("Procedure existence check returned no usable value")]
    MissingCount,

    #[error(transparent)]
    Store(#[from] MedistageError),
}

/// Count how many of the required procedures already exist server-side.
pub async fn ensure_deployed(
    store: &dyn StagingStore,
    schema: &str,
    required: &RequiredProcedureSet,
) -> Result<u64, GuardError> {
    let names = required
        .names()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT COUNT(*) FROM information_schema.routines \
         WHERE routine_schema = '{schema}' AND routine_name IN ({names})"
    );

    match store.query_scalar(&sql).await? {
        Some(value) => {
            let existing = u64::try_from(value).unwrap_or(0);
            debug!(
                existing,
                required = required.len(),
                "Procedure existence check"
            );
            Ok(existing)
        }
        None => {
            error!("Unexpected NULL from COUNT(*) procedure existence query");
            Err(GuardError::MissingCount)
        }
    }
}

/// Deploy every procedure definition in the catalog (first candidate each).
/// Returns how many definitions were executed.
pub async fn deploy_all(
    store: &dyn StagingStore,
    catalog: &ProcedureCatalog,
) -> Result<usize, MedistageError> {
    let mut deployed = 0;
    for definition in catalog.procedure_definitions() {
        let (name, sql) = definition?;
        store.execute(sql).await?;
        debug!(procedure = name, "Deployed procedure definition");
        deployed += 1;
    }
    info!(deployed, "Procedure deployment finished");
    Ok(deployed)
}
