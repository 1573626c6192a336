use serde::{Deserialize, Serialize};

use crate::error::{LineGuardError, Result};

/// Default maximum lines per file when neither config nor CLI supplies one.
pub const DEFAULT_MAX_LINES: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum allowed lines per file.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Test-file classification settings.
    #[serde(default)]
    pub tests: TestsConfig,
}

/// Settings that decide whether a file is reported under the Test group
/// or the Application group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TestsConfig {
    /// Glob patterns matched against the file name and its stem.
    #[serde(default = "default_test_patterns")]
    pub patterns: Vec<String>,

    /// Path segments whose presence marks a file as a test file.
    #[serde(default = "default_dir_segments")]
    pub dir_segments: Vec<String>,
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

fn default_test_patterns() -> Vec<String> {
    vec!["test_*".to_string(), "*_test".to_string()]
}

fn default_dir_segments() -> Vec<String> {
    vec!["tests".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            tests: TestsConfig::default(),
        }
    }
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            patterns: default_test_patterns(),
            dir_segments: default_dir_segments(),
        }
    }
}

impl Config {
    /// Validate semantic correctness beyond what serde enforces.
    ///
    /// # Errors
    /// Returns `LineGuardError::Config` when the threshold is zero and
    /// `LineGuardError::InvalidPattern` when a test pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.max_lines == 0 {
            return Err(LineGuardError::Config(
                "max_lines must be a positive integer".to_string(),
            ));
        }

        for pattern in &self.tests.patterns {
            globset::Glob::new(pattern).map_err(|e| LineGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
