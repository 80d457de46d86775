use crate::error::StorageError;

/// Row a best-effort write was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    PickScore { pick_id: i64 },
    Standing { user_id: i64, week_id: i64 },
    WeekFinalized { week_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub target: WriteTarget,
    pub error: String,
}

/// Outcome of every best-effort write made during one calculation.
///
/// A failed write is logged and kept here; it never aborts the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistenceReport {
    pub attempted: usize,
    pub failures: Vec<WriteFailure>,
}

impl PersistenceReport {
    pub fn record(&mut self, target: WriteTarget, result: Result<(), StorageError>) {
        self.attempted += 1;

        if let Err(e) = result {
            tracing::warn!(?target, error = %e, "Best-effort write failed");
            self.failures.push(WriteFailure {
                target,
                error: e.to_string(),
            });
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    pub fn failed(&self, target: &WriteTarget) -> bool {
        self.failures.iter().any(|f| &f.target == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_successes_and_keeps_failures() {
        let mut report = PersistenceReport::default();
        report.record(WriteTarget::PickScore { pick_id: 1 }, Ok(()));
        report.record(
            WriteTarget::PickScore { pick_id: 2 },
            Err(StorageError::NotFound),
        );

        assert_eq!(report.attempted, 2);
        assert_eq!(report.succeeded(), 1);
        assert!(!report.is_clean());
        assert!(report.failed(&WriteTarget::PickScore { pick_id: 2 }));
        assert!(!report.failed(&WriteTarget::PickScore { pick_id: 1 }));
        assert_eq!(report.failures[0].error, "Not found");
    }
}
