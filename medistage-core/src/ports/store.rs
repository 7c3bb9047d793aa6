// medistage-core/src/ports/store.rs
//
// This file defines what the application needs from the staging database,
// without knowing how it's done. The orchestrator never creates the store;
// it borrows one from the caller and releases its scoped resources on exit.

use crate::error::MedistageError;
use async_trait::async_trait;

#[async_trait]
pub trait StagingStore: Send + Sync {
    /// Apply the caller-supplied command timeout to every subsequent
    /// round-trip on this connection.
    async fn set_command_timeout(&self, seconds: u32) -> Result<(), MedistageError>;

    /// Run a query expected to produce a single scalar value.
    /// `None` means the server produced no usable value (no row, or NULL).
    async fn query_scalar(&self, sql: &str) -> Result<Option<i64>, MedistageError>;

    /// Invoke a stored procedure by schema-qualified name and return its
    /// integer ReturnStatus output. `None` means the call produced no value.
    async fn call_procedure(&self, qualified_name: &str) -> Result<Option<i32>, MedistageError>;

    /// Execute a statement for its side effects (procedure deployment DDL).
    async fn execute(&self, sql: &str) -> Result<(), MedistageError>;

    /// Release the connection. Idempotent, safe to call even if the store
    /// never connected.
    async fn disconnect(&self);
}
