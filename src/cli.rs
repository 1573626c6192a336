use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "line-guard")]
#[command(author, version, about = "Fail the commit when source files exceed a line-count limit")]
#[command(long_about = "A pre-commit hook that fails if any provided file exceeds the configured\n\
    maximum number of lines. The calling framework supplies the file list.\n\n\
    Exit codes:\n  \
    0 - All files within limit or no files provided\n  \
    1 - One or more files exceed the limit\n  \
    2 - Configuration or file-access error")]
pub struct Cli {
    /// Files to check (pre-commit passes changed filenames automatically)
    pub paths: Vec<PathBuf>,

    /// Maximum allowed lines per file (overrides config)
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Also list files that pass the check
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the report (exit code still reflects the result)
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
