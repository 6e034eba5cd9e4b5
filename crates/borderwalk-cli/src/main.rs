mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use borderwalk_cli::output::OutputFormat;
use borderwalk_lib::{DEFAULT_INPUT_FILE, DEFAULT_MIN_ROUTE_LENGTH, DEFAULT_OUTPUT_FILE};

use commands::build::{handle_build, BuildCommandArgs};
use commands::route::{handle_route, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Greedy country border route utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a greedy route from every country and save the long ones.
    Build {
        /// Country dataset (JSON array of `country`/`borders` objects).
        #[arg(long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,
        /// Route collection file to write.
        #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
        /// Minimum number of countries a route needs to be saved.
        #[arg(long, default_value_t = DEFAULT_MIN_ROUTE_LENGTH)]
        min_length: usize,
        /// Only print the final summary.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the greedy route starting at one country.
    Route {
        /// Starting country name.
        #[arg(long = "from")]
        from: String,
        /// Country dataset (JSON array of `country`/`borders` objects).
        #[arg(long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build {
            input,
            output,
            min_length,
            quiet,
        } => handle_build(
            &BuildCommandArgs {
                input,
                output,
                min_length,
                quiet,
            },
            cli.format,
        ),
        Command::Route { from, input } => handle_route(&RouteCommandArgs { input, from }, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
