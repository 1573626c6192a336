use std::io::Write as IoWrite;

use crate::checker::{CheckResult, RunReport};
use crate::classifier::Category;
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable grouped report.
///
/// Violations are grouped by category with the Test group printed first,
/// then Application modules, followed by refactoring suggestions for each
/// non-empty group.
pub struct TextFormatter {
    use_colors: bool,
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, false)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: bool) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn write_group(&self, header: &str, items: &[&CheckResult], output: &mut Vec<u8>) {
        if items.is_empty() {
            return;
        }
        writeln!(output, "{header}").ok();
        for result in items {
            let entry = format!("- {} ({} lines)", result.path.display(), result.line_count);
            writeln!(output, "{}", self.colorize(&entry, ansi::RED)).ok();
        }
    }

    fn write_suggestions(test_violations: bool, app_violations: bool, output: &mut Vec<u8>) {
        if test_violations {
            writeln!(output, "\nSuggestions (tests):").ok();
            writeln!(output, "- Split by feature/scenario into multiple files.").ok();
            writeln!(output, "- Extract common setup into shared fixtures.").ok();
            writeln!(output, "- Prefer parametrization where appropriate.").ok();
        }

        if app_violations {
            writeln!(output, "\nSuggestions (application modules):").ok();
            writeln!(output, "- Split into focused submodules within the same package.").ok();
            writeln!(output, "- Preserve the public API via re-exports if needed.").ok();
            writeln!(output, "- Isolate shared types/constants to avoid import cycles.").ok();
        }
    }

    fn write_passed(&self, report: &RunReport, output: &mut Vec<u8>) {
        let passed: Vec<_> = report.results.iter().filter(|r| r.is_passed()).collect();
        if passed.is_empty() {
            return;
        }
        writeln!(output, "Files within the limit:").ok();
        for result in passed {
            writeln!(output, "- {} ({} lines)", result.path.display(), result.line_count).ok();
        }
        writeln!(output).ok();
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = Vec::new();

        if report.results.is_empty() {
            writeln!(output, "No files checked.").ok();
            return Ok(String::from_utf8_lossy(&output).to_string());
        }

        if self.verbose {
            self.write_passed(report, &mut output);
        }

        if !report.has_violations() {
            let limit = report.results[0].limit;
            let message = format!(
                "All {} file(s) within the {limit}-line limit.",
                report.results.len()
            );
            writeln!(output, "{}", self.colorize(&message, ansi::GREEN)).ok();
            return Ok(String::from_utf8_lossy(&output).to_string());
        }

        let (tests, apps): (Vec<_>, Vec<_>) = report
            .violations()
            .partition(|r| r.category == Category::Test);

        writeln!(output, "Line limit check failed:\n").ok();

        let limit = tests.iter().chain(&apps).next().map_or(0, |r| r.limit);
        self.write_group(
            &format!("Test files exceeding the {limit}-line limit:"),
            &tests,
            &mut output,
        );
        if !tests.is_empty() && !apps.is_empty() {
            writeln!(output).ok();
        }
        self.write_group(
            &format!("Application modules exceeding the {limit}-line limit:"),
            &apps,
            &mut output,
        );

        Self::write_suggestions(!tests.is_empty(), !apps.is_empty(), &mut output);

        writeln!(output, "\nOnce refactored, re-run the hook or commit again.").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
