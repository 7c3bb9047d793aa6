// medistage-core/src/domain/outcome.rs
//
// Caller-visible completion contract of a validation run, plus the typed
// per-step result that replaces the original boxed output parameter.

/// Final status of one orchestrator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// 0: all applicable steps completed successfully.
    Completed,
    /// -1: no records to validate, or a configuration/preflight failure
    /// before any step ran.
    NothingToValidate,
    /// -2: a procedure executed and signaled logical/business failure.
    BusinessFailure,
    /// -3: infrastructure/unexpected fault (connectivity, timeout).
    InfrastructureFault,
}

impl ValidationStatus {
    pub fn code(&self) -> i32 {
        match self {
            ValidationStatus::Completed => 0,
            ValidationStatus::NothingToValidate => -1,
            ValidationStatus::BusinessFailure => -2,
            ValidationStatus::InfrastructureFault => -3,
        }
    }
}

/// What a single stored-procedure call reported through its ReturnStatus
/// output. An absent value is an explicit variant, not a cast concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureResult {
    Success,
    Failed(i32),
    NoResult,
}

impl ProcedureResult {
    pub fn from_return_status(value: Option<i32>) -> Self {
        match value {
            Some(0) => ProcedureResult::Success,
            Some(code) => ProcedureResult::Failed(code),
            None => ProcedureResult::NoResult,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcedureResult::Success)
    }
}

/// Per-step outcome, produced and consumed within one orchestration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureOutcome {
    pub procedure: String,
    pub result: ProcedureResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ValidationStatus::Completed.code(), 0);
        assert_eq!(ValidationStatus::NothingToValidate.code(), -1);
        assert_eq!(ValidationStatus::BusinessFailure.code(), -2);
        assert_eq!(ValidationStatus::InfrastructureFault.code(), -3);
    }

    #[test]
    fn test_return_status_interpretation() {
        assert!(ProcedureResult::from_return_status(Some(0)).is_success());
        assert_eq!(
            ProcedureResult::from_return_status(Some(7)),
            ProcedureResult::Failed(7)
        );
        assert_eq!(
            ProcedureResult::from_return_status(None),
            ProcedureResult::NoResult
        );
    }
}
