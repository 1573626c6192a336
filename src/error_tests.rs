use std::path::PathBuf;

use super::*;

#[test]
fn config_error_display() {
    let err = LineGuardError::Config("max_lines must be a positive integer".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: max_lines must be a positive integer"
    );
}

#[test]
fn file_read_error_names_the_path() {
    let err = LineGuardError::FileRead {
        path: PathBuf::from("src/missing.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.to_string(), "Failed to read file: src/missing.py");
}

#[test]
fn invalid_pattern_error_names_the_pattern() {
    let glob_err = globset::Glob::new("te{st").unwrap_err();
    let err = LineGuardError::InvalidPattern {
        pattern: "te{st".to_string(),
        source: glob_err,
    };
    assert_eq!(err.to_string(), "Invalid test pattern: te{st");
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: LineGuardError = io_err.into();
    assert!(matches!(err, LineGuardError::Io(_)));
}
