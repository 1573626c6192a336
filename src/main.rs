use clap::Parser;

use line_guard::checker::{Checker, RunReport, ThresholdChecker};
use line_guard::classifier::TestClassifier;
use line_guard::cli::{Cli, ColorChoice};
use line_guard::config::{Config, ConfigLoader, FileConfigLoader};
use line_guard::counter::LineCounter;
use line_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use line_guard::EXIT_CONFIG_ERROR;

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> line_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(cli)?;

    // 2. Apply CLI argument overrides, then re-validate before any file is read
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 3. Build the checker
    let classifier = TestClassifier::new(&config.tests)?;
    let checker = ThresholdChecker::new(config.max_lines, classifier);

    // 4. Count and check each file, strictly in input order. An unreadable
    //    path aborts the whole run; no partial report is printed.
    let counter = LineCounter::new();
    let mut results = Vec::with_capacity(cli.paths.len());
    for path in &cli.paths {
        let line_count = counter.count_file(path)?;
        results.push(checker.check(path, line_count));
    }
    let report = RunReport::new(results);

    // 5. Format and print the report
    let output = format_output(
        cli.format,
        &report,
        color_choice_to_mode(cli.color),
        cli.verbose,
        config.max_lines,
    )?;
    if !cli.quiet {
        print!("{output}");
    }

    // 6. Exit code: 0 iff no violations
    Ok(report.exit_code())
}

fn load_config(cli: &Cli) -> line_guard::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

const fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(max_lines) = cli.max_lines {
        config.max_lines = max_lines;
    }
}

fn format_output(
    format: OutputFormat,
    report: &RunReport,
    color_mode: ColorMode,
    verbose: bool,
    max_lines: usize,
) -> line_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter::new(max_lines).format(report),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
