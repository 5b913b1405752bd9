//! Success/failure tallies for one batch run

/// Counters threaded through validation and execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Deleted (or simulated in dry-run)
    pub successful: usize,
    /// Delete calls that failed
    pub failed_deletions: usize,
    /// Candidates rejected by validation
    pub inaccessible: usize,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// All failures, validation rejections included
    pub fn failed(&self) -> usize {
        self.failed_deletions + self.inaccessible
    }

    /// Every candidate that was processed
    pub fn total(&self) -> usize {
        self.successful + self.failed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_empty() {
        let report = BatchReport::new();
        assert_eq!(report.total(), 0);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_failed_includes_inaccessible() {
        let report = BatchReport {
            successful: 2,
            failed_deletions: 1,
            inaccessible: 2,
        };
        assert_eq!(report.failed(), 3);
        assert_eq!(report.total(), 5);
        assert!(report.has_failures());
    }
}
