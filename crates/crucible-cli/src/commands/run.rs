//! Run command - execute registered tests

use crate::suites;
use anyhow::Result;
use crucible_config::{ColorMode, ConfigLoader};
use crucible_core::CpuTimer;
use std::path::PathBuf;

/// Arguments for the run command
pub struct RunArgs {
    /// Requested test names; empty means the configured default selection,
    /// or everything
    pub names: Vec<String>,
    /// Disable colored output
    pub no_color: bool,
    /// Print run timing
    pub verbose: bool,
    /// Directory to resolve crucible.toml from
    pub dir: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            no_color: false,
            verbose: false,
            dir: PathBuf::from("."),
        }
    }
}

/// Run the run command; returns the aggregate result of the test run
///
/// Mapping the aggregate to a process exit code is the caller's job.
pub fn run(args: RunArgs) -> Result<bool> {
    let config = ConfigLoader::new().load_from_directory(&args.dir)?;

    match config.project.output.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
    if args.no_color {
        colored::control::set_override(false);
    }
    let verbose = args.verbose || config.project.output.verbose;

    let driver = suites::bootstrap();

    let mut timer = CpuTimer::new();
    timer.start();

    let ok = if !args.names.is_empty() {
        driver.run_tests(&args.names)
    } else if !config.project.suite.default_tests.is_empty() {
        driver.run_tests(&config.project.suite.default_tests)
    } else {
        driver.run_all_tests()
    };

    timer.stop();
    if verbose {
        println!("Total time: {:.1} ms", timer.elapsed_ms());
    }

    Ok(ok)
}
