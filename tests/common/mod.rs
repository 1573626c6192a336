#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the line-guard binary.
#[macro_export]
macro_rules! line_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("line-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file containing the given number of newline-terminated lines.
    pub fn create_file_with_lines(&self, relative_path: &str, lines: usize) {
        let mut content = String::new();
        for i in 0..lines {
            let _ = writeln!(content, "value_{i} = {i}");
        }
        self.create_file(relative_path, &content);
    }

    /// Creates a line-guard config file in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".line-guard.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Config lowering the limit far enough to trigger failures easily.
pub const LOW_LIMIT_CONFIG: &str = "max_lines = 5\n";

/// Config with custom test classification patterns.
pub const SPEC_PATTERN_CONFIG: &str = r#"
max_lines = 5

[tests]
patterns = ["spec_*"]
dir_segments = ["specs"]
"#;
