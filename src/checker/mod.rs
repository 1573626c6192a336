mod result;
mod threshold;

pub use result::{CheckResult, CheckStatus, RunReport};
pub use threshold::ThresholdChecker;

use std::path::Path;

pub trait Checker {
    /// Check a single file's line count against the configured limit.
    fn check(&self, path: &Path, line_count: usize) -> CheckResult;
}
