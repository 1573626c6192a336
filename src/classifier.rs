use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::TestsConfig;
use crate::error::{LineGuardError, Result};

/// Report group assigned to every checked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Test,
    Application,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Application => "application",
        }
    }
}

/// Classifies paths as test or application code.
///
/// A path is a test file when its file name or file stem matches one of the
/// configured glob patterns, or when any path segment equals one of the
/// configured directory names (compared case-insensitively, so `Tests/` on
/// case-preserving filesystems still matches).
#[derive(Debug)]
pub struct TestClassifier {
    name_patterns: GlobSet,
    dir_segments: Vec<String>,
}

impl TestClassifier {
    /// Build a classifier from the `[tests]` config section.
    ///
    /// # Errors
    /// Returns `LineGuardError::InvalidPattern` when a pattern is not a valid glob.
    pub fn new(config: &TestsConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.patterns {
            let glob = Glob::new(pattern).map_err(|e| LineGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let name_patterns = builder.build().map_err(|e| LineGuardError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            name_patterns,
            dir_segments: config
                .dir_segments
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        })
    }

    #[must_use]
    pub fn classify(&self, path: &Path) -> Category {
        if self.matches_name(path) || self.in_test_dir(path) {
            Category::Test
        } else {
            Category::Application
        }
    }

    fn matches_name(&self, path: &Path) -> bool {
        let name_matches = path
            .file_name()
            .is_some_and(|name| self.name_patterns.is_match(Path::new(name)));
        let stem_matches = path
            .file_stem()
            .is_some_and(|stem| self.name_patterns.is_match(Path::new(stem)));
        name_matches || stem_matches
    }

    fn in_test_dir(&self, path: &Path) -> bool {
        path.components().any(|c| {
            let segment = c.as_os_str().to_string_lossy().to_lowercase();
            self.dir_segments.iter().any(|s| *s == segment)
        })
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
