// medistage-core/src/application/validation.rs
//
// Validation orchestrator. One invocation: take a snapshot of pending staging
// rows, guard the required procedures, execute the branch selected by the
// snapshot and convert per-step outcomes into progress events plus a final
// status code. The borrowed store is released exactly once on every exit
// path, including faults.

use std::path::Path;
use tracing::{error, info};

use crate::application::deployment;
use crate::domain::outcome::{ProcedureOutcome, ProcedureResult, ValidationStatus};
use crate::domain::procedures::RequiredProcedureSet;
use crate::domain::progress::{ProgressEvent, ProgressSink};
use crate::domain::snapshot::StagingSnapshot;
use crate::error::MedistageError;
use crate::infrastructure::config::catalog::load_catalog_file;
use crate::infrastructure::config::settings::AppSettings;
use crate::ports::store::StagingStore;

const STUDY_TABLE: &str = "patient_study_metadata";
const SERIES_TABLE: &str = "patient_study_series_data";

#[derive(Debug, Clone)]
pub struct ValidationOptions {
    pub command_timeout_secs: u32,
    pub schema: String,
}

impl From<&AppSettings> for ValidationOptions {
    fn from(settings: &AppSettings) -> Self {
        Self {
            command_timeout_secs: settings.command_timeout_secs,
            schema: settings.schema.clone(),
        }
    }
}

/// Run the full validation workflow against a connected staging store.
///
/// Status contract: 0 all steps completed, -1 nothing to do or a
/// configuration/guard failure before any step ran, -2 a procedure signaled
/// business failure, -3 infrastructure fault.
pub async fn run_validation(
    store: &dyn StagingStore,
    catalog_path: &Path,
    options: &ValidationOptions,
    progress: Option<&dyn ProgressSink>,
) -> ValidationStatus {
    let status = match drive(store, catalog_path, options, progress).await {
        Ok(status) => status,
        Err(e) => {
            error!("Unexpected error while validating staging records: {e}");
            report(progress, 0, "Unexpected error while validating records");
            ValidationStatus::InfrastructureFault
        }
    };
    // Release the connection regardless of which terminal state was reached.
    store.disconnect().await;
    status
}

/// Pending-row counts for both staging tables. Taken once per run; the
/// snapshot is the sole authority for branch selection.
pub async fn take_snapshot(
    store: &dyn StagingStore,
    schema: &str,
) -> Result<StagingSnapshot, MedistageError> {
    let study_pending = pending_count(store, schema, STUDY_TABLE).await?;
    let series_pending = pending_count(store, schema, SERIES_TABLE).await?;
    Ok(StagingSnapshot {
        study_pending,
        series_pending,
    })
}

async fn pending_count(
    store: &dyn StagingStore,
    schema: &str,
    table: &str,
) -> Result<u64, MedistageError> {
    let sql =
        format!("SELECT COUNT(*) FROM {schema}.{table} WHERE status IS NULL OR status = ''");
    let value = store.query_scalar(&sql).await?.unwrap_or(0);
    Ok(u64::try_from(value).unwrap_or(0))
}

/// The state machine proper. Expected conditions (no records, missing
/// catalog, guard failure, business failure) come back as Ok(status) after
/// reporting; only genuine infrastructure faults propagate as Err.
async fn drive(
    store: &dyn StagingStore,
    catalog_path: &Path,
    options: &ValidationOptions,
    progress: Option<&dyn ProgressSink>,
) -> Result<ValidationStatus, MedistageError> {
    store
        .set_command_timeout(options.command_timeout_secs)
        .await?;

    // Preflight: skip the whole procedure machinery when there is nothing
    // staged to validate.
    let snapshot = take_snapshot(store, &options.schema).await?;
    if snapshot.is_empty() {
        info!("No records for validation");
        report(progress, 0, "No records for validation");
        return Ok(ValidationStatus::NothingToValidate);
    }

    // Procedure guard: catalog on disk, required set resolvable, procedures
    // present server-side (redeploying everything when any are missing).
    let catalog = match load_catalog_file(catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Could not load SQL catalog from {:?}: {e}", catalog_path);
            report(progress, 0, "Something went wrong when loading configuration...");
            return Ok(ValidationStatus::NothingToValidate);
        }
    };

    let required = match RequiredProcedureSet::resolve(&catalog) {
        Ok(required) => required,
        Err(e) => {
            error!("SQL catalog is missing required procedures: {e}");
            report(progress, 0, "Something went wrong when loading configuration...");
            return Ok(ValidationStatus::NothingToValidate);
        }
    };

    match deployment::ensure_deployed(store, &options.schema, &required).await {
        Ok(existing) if (existing as usize) < required.len() => {
            info!(
                existing,
                required = required.len(),
                "Some procedures are missing, deploying all procedures first"
            );
            deployment::deploy_all(store, &catalog).await?;
        }
        Ok(_) => {}
        Err(e) => {
            error!("Error checking existing procedures, cannot proceed with validation: {e}");
            report(progress, 0, "Could not verify validation procedures");
            return Ok(ValidationStatus::NothingToValidate);
        }
    }

    // Execution: branch selected by the snapshot, study group always first.
    let plan = required.plan(snapshot.branch());
    let total = plan.len();
    info!(
        study = snapshot.study_pending,
        series = snapshot.series_pending,
        steps = total,
        "Executing validation branch"
    );

    let mut done = 0usize;
    for step in &plan {
        let qualified = format!("{}.{}", options.schema, step.procedure);
        let value = store.call_procedure(&qualified).await?;
        let outcome = ProcedureOutcome {
            procedure: step.procedure.clone(),
            result: ProcedureResult::from_return_status(value),
        };

        match outcome.result {
            ProcedureResult::Success => {
                done += 1;
                if done == total {
                    report(progress, 100, "Validation complete 100% done...");
                } else {
                    let percent = (done * 100 / total) as u8;
                    report(
                        progress,
                        percent,
                        format!("Validating records {percent}% done..."),
                    );
                }
            }
            ProcedureResult::Failed(code) => {
                error!(
                    "Stored procedure {} failed with status = {code}",
                    outcome.procedure
                );
                report(
                    progress,
                    0,
                    format!("Validation was unsuccessful for {}", step.group.label()),
                );
                return Ok(ValidationStatus::BusinessFailure);
            }
            ProcedureResult::NoResult => {
                error!("Stored procedure {} returned no value", outcome.procedure);
                report(
                    progress,
                    0,
                    format!("Validation was unsuccessful for {}", step.group.label()),
                );
                return Ok(ValidationStatus::BusinessFailure);
            }
        }
    }

    info!("Validation complete for the selected branch");
    Ok(ValidationStatus::Completed)
}

fn report(progress: Option<&dyn ProgressSink>, percent: u8, message: impl Into<String>) {
    if let Some(sink) = progress {
        sink.report(ProgressEvent::new(percent, message));
    }
}
