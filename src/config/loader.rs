use std::fs;
use std::path::Path;

use crate::error::{LineGuardError, Result};

use super::Config;

/// Default configuration file name, discovered in the current directory.
pub const CONFIG_FILE_NAME: &str = ".line-guard.toml";

pub trait ConfigLoader {
    /// Load configuration by discovering the default file in the current
    /// directory, falling back to defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        self.load_from_path(path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(LineGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| LineGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
