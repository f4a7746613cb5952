mod commands;
mod input;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use qbval_core::config::{ConfigLoader, EditorConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "qbval", version, about = "Query-builder value editor resolver")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Editor config file (defaults to ./qbval.yaml, then ~/.qbval/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log resolution decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the control for one editor state (JSON file, or - for stdin)
    Resolve { state: String },
    /// Flatten an option list (JSON file, or - for stdin)
    Flatten { options: String },
    /// Run a JSON-lines file of states through one editing slot
    Replay { states: String },
}

async fn load_config(path: Option<&PathBuf>) -> Result<EditorConfig, qbval_core::ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from(path).await,
        None => ConfigLoader::load_default().await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the outcomes.
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(args.config.as_ref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = match args.command {
        Command::Resolve { state } => {
            let state = input::parse_state(&input::read_source(&state).await?)?;
            commands::resolve_state(&state, &config, args.format)?
        }
        Command::Flatten { options } => {
            let options = input::parse_options(&input::read_source(&options).await?)?;
            commands::flatten_options(&options, args.format)?
        }
        Command::Replay { states } => {
            let states = input::parse_state_lines(&input::read_source(&states).await?)?;
            info!("Replaying {} states", states.len());
            commands::replay(&states, config, args.format)?
        }
    };

    print!("{}", output);
    if args.format == OutputFormat::Json && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
