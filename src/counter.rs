use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LineGuardError, Result};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Counts lines in source files.
///
/// A line is a newline-terminated run of bytes. A trailing partial line
/// (content after the last `\n`) counts as one line; an empty file has
/// zero lines. Non-UTF-8 content is tolerated: only line terminators
/// matter for the count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCounter;

impl LineCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn count(self, source: &str) -> usize {
        source.lines().count()
    }

    /// Count lines from a buffered reader (streaming, memory-efficient for
    /// large files).
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(self, mut reader: R) -> std::io::Result<usize> {
        let mut lines = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }
            lines += 1;
        }
        Ok(lines)
    }

    /// Count lines in the file at `path`.
    ///
    /// An unreadable or nonexistent path is fatal for the run, so the error
    /// names the offending file.
    ///
    /// # Errors
    /// Returns `LineGuardError::FileRead` when the file cannot be opened or read.
    pub fn count_file(self, path: &Path) -> Result<usize> {
        self.count_file_with_threshold(path, LARGE_FILE_THRESHOLD)
    }

    fn count_file_with_threshold(self, path: &Path, streaming_threshold: u64) -> Result<usize> {
        let map_err = |e: std::io::Error| LineGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        };

        let metadata = fs::metadata(path).map_err(map_err)?;

        if metadata.len() >= streaming_threshold {
            let file = File::open(path).map_err(map_err)?;
            self.count_reader(BufReader::new(file)).map_err(map_err)
        } else {
            let bytes = fs::read(path).map_err(map_err)?;
            Ok(self.count(&String::from_utf8_lossy(&bytes)))
        }
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
