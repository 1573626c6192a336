use serde::Serialize;

use crate::checker::{CheckResult, RunReport};
use crate::error::Result;

use super::OutputFormatter;

/// Machine-readable report. The summary always carries the configured
/// limit, even when no file failed or no file was checked.
pub struct JsonFormatter {
    max_lines: usize,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }
}

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    violations: Vec<Violation>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    passed: usize,
    failed: usize,
    max_lines: usize,
}

#[derive(Serialize)]
struct Violation {
    path: String,
    lines: usize,
    limit: usize,
    category: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let failed = report.violations().count();

        let output = JsonOutput {
            summary: Summary {
                total_files: report.results.len(),
                passed: report.results.len() - failed,
                failed,
                max_lines: self.max_lines,
            },
            violations: report.violations().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> Violation {
    Violation {
        path: result.path.display().to_string(),
        lines: result.line_count,
        limit: result.limit,
        category: result.category.as_str().to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
