// medistage-core/src/domain/mod.rs

pub mod catalog;
pub mod error;
pub mod outcome;
pub mod procedures;
pub mod progress;
pub mod snapshot;

// --- RE-EXPORTS (FACADE PATTERN) ---
pub use catalog::ProcedureCatalog;
pub use outcome::{ProcedureOutcome, ProcedureResult, ValidationStatus};
pub use procedures::{RequiredProcedureSet, StepGroup, ValidationStep};
pub use progress::{ProgressEvent, ProgressSink};
pub use snapshot::{StagingSnapshot, ValidationBranch};
