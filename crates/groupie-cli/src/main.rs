//! groupie CLI binary entrypoint.

mod commands;
mod logging;
pub mod paths;

use clap::Parser;
use commands::Commands;

/// groupie: search suggestions and range selection for the terminal
#[derive(Parser)]
#[command(name = "groupie", version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (defaults to $GROUPIE_HOME/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Parses CLI arguments, installs logging and dispatches to command handlers.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    commands::execute(cli.command, cli.config.as_deref());
}
