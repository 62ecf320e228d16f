use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod admin;
mod data;
mod error;
mod output;
mod utils;

use error::Result;

use admin::AdminCommands;
use data::DataCommands;

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "Protect, open and publish the activity dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Envelope operations
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },
    /// Admin publishing operations
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

// Logs go to stderr; stdout carries data. RUST_LOG overrides the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Data { command } => match command {
            DataCommands::Protect { config } => {
                data::protect::execute(config)?;
            }
            DataCommands::Unprotect { config } => {
                data::unprotect::execute(config)?;
            }
            DataCommands::Inspect { config } => {
                data::inspect::execute(config)?;
            }
            DataCommands::Checksum { config } => {
                data::checksum::execute(config)?;
            }
        },
        Commands::Admin { command } => match command {
            AdminCommands::Publish { config } => {
                admin::publish::execute(config)?;
            }
            AdminCommands::Delete { config } => {
                admin::delete::execute(config)?;
            }
            AdminCommands::Show { config } => {
                admin::show::execute(config)?;
            }
        },
    }

    Ok(())
}
