// medistage-core/src/application/mod.rs

pub mod deployment;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use medistage_core::application::{run_validation, ensure_deployed};`
// without knowing the internal file structure.

pub use deployment::{GuardError, deploy_all, ensure_deployed};
pub use validation::{ValidationOptions, run_validation, take_snapshot};
