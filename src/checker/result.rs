use std::path::PathBuf;

use crate::classifier::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
}

/// Result of checking one file. Created once per input file during a single
/// pass and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub path: PathBuf,
    pub line_count: usize,
    pub limit: usize,
    pub category: Category,
    pub status: CheckStatus,
}

impl CheckResult {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed)
    }
}

/// Outcome of a whole run: one result per input file, in input order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub results: Vec<CheckResult>,
}

impl RunReport {
    #[must_use]
    pub const fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// Failing results as an ordered subsequence of the input, preserving
    /// input order. Grouping for display is a formatting concern.
    pub fn violations(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failed())
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.results.iter().any(CheckResult::is_failed)
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.has_violations() {
            crate::EXIT_LIMIT_EXCEEDED
        } else {
            crate::EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
