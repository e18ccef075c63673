use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod suites;

/// Crucible unit-test harness for numerical kernels.
///
/// Crucible runs tolerance-aware unit tests registered by the suites built
/// into this binary. Tests run one after another; a failing check is
/// reported inline and the run keeps going with the next test.
///
/// EXAMPLES:
///     crucible run                 Run every registered test
///     crucible run ReduceSum       Run a named subset
///     crucible list                List registered test names
///
/// ENVIRONMENT VARIABLES:
///     CRUCIBLE_VERBOSE  Set to '1' to print run timing
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "crucible")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run registered tests
    ///
    /// With no names, runs the selection configured in crucible.toml, or
    /// every registered test when none is configured. Unknown names are
    /// reported as warnings and skipped. Exits non-zero when any executed
    /// test fails.
    ///
    /// EXAMPLES:
    ///     crucible run                        Run everything
    ///     crucible run SaxpyBasic DotProduct  Run two tests
    ///     crucible run --verbose              Print run timing
    #[command(visible_alias = "r")]
    Run {
        /// Test names to run (empty = configured default, or all)
        names: Vec<String>,
        /// Disable colored output
        #[arg(long, env = "NO_COLOR")]
        no_color: bool,
        /// Print run timing
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// List registered test names
    ///
    /// Prints every registered test, comma-separated, in registration order.
    ///
    /// EXAMPLES:
    ///     crucible list       List all tests
    #[command(visible_alias = "ls")]
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env_config = config::Config::from_env();

    match cli.command {
        Commands::Run {
            names,
            no_color,
            verbose,
        } => {
            let args = commands::run::RunArgs {
                names,
                no_color: no_color || env_config.no_color,
                verbose: verbose || env_config.verbose,
                dir: std::env::current_dir()?,
            };
            let ok = commands::run::run(args)?;
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::List => {
            commands::list::run()?;
        }
    }

    Ok(())
}
