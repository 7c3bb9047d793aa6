// medistage-core/src/domain/procedures.rs
//
// The six required validation procedures, partitioned into a study group and
// a series group. Order is fixed and semantically meaningful: study-level
// duplicate/invalid marking runs before series-level validation, which
// depends on the markers it leaves behind.

use crate::domain::catalog::ProcedureCatalog;
use crate::domain::error::DomainError;
use crate::domain::snapshot::ValidationBranch;

// Study group, in execution order.
pub const MARK_STUDY_DUPLICATES: &str = "mark_study_duplicates";
pub const UPDATE_STUDY_DEMOGRAPHIC_INVALID: &str = "update_study_demographic_invalid";
pub const UPDATE_STUDY_NULL_CHECK_INVALID: &str = "update_study_null_check_invalid";
pub const UPDATE_STUDY_VALID: &str = "update_study_valid";

// Series group, in execution order.
pub const UPDATE_SERIES_INVALID: &str = "update_series_invalid";
pub const UPDATE_SERIES_VALID: &str = "update_series_valid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepGroup {
    Study,
    Series,
}

impl StepGroup {
    /// User-facing label used in failure progress messages.
    pub fn label(&self) -> &'static str {
        match self {
            StepGroup::Study => "patient study",
            StepGroup::Series => "patient study series",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationStep {
    pub procedure: String,
    pub group: StepGroup,
}

/// Named, validated replacement for the original positional index coupling:
/// the study branch owns exactly four procedures, the series branch exactly two.
#[derive(Debug, Clone)]
pub struct RequiredProcedureSet {
    pub study: [String; 4],
    pub series: [String; 2],
}

impl RequiredProcedureSet {
    /// Resolve the six fixed logical names against the catalog.
    /// Every name must exist with at least one candidate definition.
    pub fn resolve(catalog: &ProcedureCatalog) -> Result<Self, DomainError> {
        let set = Self::fixed_order();
        for name in set.names() {
            catalog.procedure(name)?;
        }
        Ok(set)
    }

    pub fn fixed_order() -> Self {
        Self {
            study: [
                MARK_STUDY_DUPLICATES.to_string(),
                UPDATE_STUDY_DEMOGRAPHIC_INVALID.to_string(),
                UPDATE_STUDY_NULL_CHECK_INVALID.to_string(),
                UPDATE_STUDY_VALID.to_string(),
            ],
            series: [
                UPDATE_SERIES_INVALID.to_string(),
                UPDATE_SERIES_VALID.to_string(),
            ],
        }
    }

    /// All six names, study group first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.study
            .iter()
            .chain(self.series.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.study.len() + self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordered step plan for the selected branch. Study steps always precede
    /// series steps; progress percent is relative to the plan's length.
    pub fn plan(&self, branch: ValidationBranch) -> Vec<ValidationStep> {
        let study_steps = self.study.iter().map(|p| ValidationStep {
            procedure: p.clone(),
            group: StepGroup::Study,
        });
        let series_steps = self.series.iter().map(|p| ValidationStep {
            procedure: p.clone(),
            group: StepGroup::Series,
        });

        match branch {
            ValidationBranch::Empty => Vec::new(),
            ValidationBranch::StudyOnly => study_steps.collect(),
            ValidationBranch::SeriesOnly => series_steps.collect(),
            ValidationBranch::Both => study_steps.chain(series_steps).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog_with(names: &[&str]) -> ProcedureCatalog {
        let mut catalog = ProcedureCatalog::default();
        for name in names {
            catalog
                .procedures
                .insert(name.to_string(), vec![format!("CREATE FUNCTION {name}")]);
        }
        catalog
    }

    fn full_catalog() -> ProcedureCatalog {
        catalog_with(&[
            MARK_STUDY_DUPLICATES,
            UPDATE_STUDY_DEMOGRAPHIC_INVALID,
            UPDATE_STUDY_NULL_CHECK_INVALID,
            UPDATE_STUDY_VALID,
            UPDATE_SERIES_INVALID,
            UPDATE_SERIES_VALID,
        ])
    }

    #[test]
    fn test_resolve_full_catalog() {
        let set = RequiredProcedureSet::resolve(&full_catalog()).unwrap();
        assert_eq!(set.len(), 6);
        assert_eq!(set.study[0], MARK_STUDY_DUPLICATES);
        assert_eq!(set.series[1], UPDATE_SERIES_VALID);
    }

    #[test]
    fn test_resolve_missing_procedure() {
        let catalog = catalog_with(&[MARK_STUDY_DUPLICATES]);
        let err = RequiredProcedureSet::resolve(&catalog).unwrap_err();
        assert!(matches!(err, DomainError::ProcedureNotFound(_)));
    }

    #[test]
    fn test_plan_both_runs_study_before_series() {
        let set = RequiredProcedureSet::fixed_order();
        let plan = set.plan(ValidationBranch::Both);
        assert_eq!(plan.len(), 6);
        assert!(plan[..4].iter().all(|s| s.group == StepGroup::Study));
        assert!(plan[4..].iter().all(|s| s.group == StepGroup::Series));
        assert_eq!(plan[0].procedure, MARK_STUDY_DUPLICATES);
        assert_eq!(plan[5].procedure, UPDATE_SERIES_VALID);
    }

    #[test]
    fn test_plan_study_only() {
        let set = RequiredProcedureSet::fixed_order();
        let plan = set.plan(ValidationBranch::StudyOnly);
        assert_eq!(plan.len(), 4);
        assert!(plan.iter().all(|s| s.group == StepGroup::Study));
    }

    #[test]
    fn test_plan_series_only() {
        let set = RequiredProcedureSet::fixed_order();
        let plan = set.plan(ValidationBranch::SeriesOnly);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].procedure, UPDATE_SERIES_INVALID);
        assert_eq!(plan[1].procedure, UPDATE_SERIES_VALID);
    }
}
