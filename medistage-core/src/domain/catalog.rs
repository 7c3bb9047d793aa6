// medistage-core/src/domain/catalog.rs
//
// Immutable lookup of named SQL statements, loaded from the external
// sql_catalog.json document. Two groups: ad-hoc queries and stored-procedure
// definitions. Each logical name maps to an ordered list of candidate
// statements; the first candidate is authoritative.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcedureCatalog {
    #[serde(default)]
    pub queries: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub procedures: BTreeMap<String, Vec<String>>,
}

impl ProcedureCatalog {
    /// Resolve a query by logical name. Unknown name is a hard error.
    pub fn query(&self, name: &str) -> Result<&str, DomainError> {
        let candidates = self
            .queries
            .get(name)
            .ok_or_else(|| DomainError::QueryNotFound(name.to_string()))?;
        first_candidate(name, candidates)
    }

    /// Resolve a procedure definition by logical name. Unknown name is a hard error.
    pub fn procedure(&self, name: &str) -> Result<&str, DomainError> {
        let candidates = self
            .procedures
            .get(name)
            .ok_or_else(|| DomainError::ProcedureNotFound(name.to_string()))?;
        first_candidate(name, candidates)
    }

    /// All procedure definitions (first candidate each), in stable name order.
    /// Consumed by the bulk (re)deployment path.
    pub fn procedure_definitions(
        &self,
    ) -> impl Iterator<Item = Result<(&str, &str), DomainError>> {
        self.procedures
            .iter()
            .map(|(name, candidates)| Ok((name.as_str(), first_candidate(name, candidates)?)))
    }
}

fn first_candidate<'a>(name: &str, candidates: &'a [String]) -> Result<&'a str, DomainError> {
    candidates
        .first()
        .map(String::as_str)
        .ok_or_else(|| DomainError::EmptyCatalogEntry(name.to_string()))
}
