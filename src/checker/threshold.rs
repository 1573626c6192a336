use std::path::Path;

use crate::classifier::TestClassifier;

use super::{CheckResult, CheckStatus, Checker};

/// Checks line counts against a single run-wide limit and assigns each file
/// its report group.
pub struct ThresholdChecker {
    max_lines: usize,
    classifier: TestClassifier,
}

impl ThresholdChecker {
    #[must_use]
    pub const fn new(max_lines: usize, classifier: TestClassifier) -> Self {
        Self {
            max_lines,
            classifier,
        }
    }

    #[must_use]
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }
}

impl Checker for ThresholdChecker {
    fn check(&self, path: &Path, line_count: usize) -> CheckResult {
        // Strict comparison: a file with exactly max_lines lines passes.
        let status = if line_count > self.max_lines {
            CheckStatus::Failed
        } else {
            CheckStatus::Passed
        };

        CheckResult {
            path: path.to_path_buf(),
            line_count,
            limit: self.max_lines,
            category: self.classifier.classify(path),
            status,
        }
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
