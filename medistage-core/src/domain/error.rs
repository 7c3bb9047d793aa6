// medistage-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Query '{0}' not found in catalog")]
    #[diagnostic(
        code(medistage::domain::query_not_found),
        help("Check the 'queries' section of your sql_catalog.json.")
    )]
    QueryNotFound(String),

    #[error("Procedure '{0}' not found in catalog")]
    #[diagnostic(
        code(medistage::domain::procedure_not_found),
        help("Check the 'procedures' section of your sql_catalog.json.")
    )]
    ProcedureNotFound(String),

    #[error("Catalog entry '{0}' has no candidate statement")]
    #[diagnostic(code(medistage::domain::empty_entry))]
    EmptyCatalogEntry(String),
}
