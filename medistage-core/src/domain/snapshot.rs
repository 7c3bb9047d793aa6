// medistage-core/src/domain/snapshot.rs
//
// Counts of not-yet-processed rows in the study and series staging tables,
// taken once at the start of a validation run. The snapshot is the sole
// authority for branch selection; it is never re-taken mid-run.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagingSnapshot {
    pub study_pending: u64,
    pub series_pending: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationBranch {
    /// Nothing to validate: neither table has pending rows.
    Empty,
    StudyOnly,
    SeriesOnly,
    Both,
}

impl StagingSnapshot {
    pub fn branch(&self) -> ValidationBranch {
        match (self.study_pending, self.series_pending) {
            (0, 0) => ValidationBranch::Empty,
            (_, 0) => ValidationBranch::StudyOnly,
            (0, _) => ValidationBranch::SeriesOnly,
            (_, _) => ValidationBranch::Both,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.branch() == ValidationBranch::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_selection() {
        let snap = |study, series| StagingSnapshot {
            study_pending: study,
            series_pending: series,
        };
        assert_eq!(snap(0, 0).branch(), ValidationBranch::Empty);
        assert_eq!(snap(5, 0).branch(), ValidationBranch::StudyOnly);
        assert_eq!(snap(0, 3).branch(), ValidationBranch::SeriesOnly);
        assert_eq!(snap(5, 3).branch(), ValidationBranch::Both);
    }

    #[test]
    fn test_is_empty() {
        let snap = StagingSnapshot {
            study_pending: 0,
            series_pending: 0,
        };
        assert!(snap.is_empty());
    }
}
