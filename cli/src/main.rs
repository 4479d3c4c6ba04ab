use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use tracing::info;
use whiteboard::config::ControllerConfig;
use whiteboard::controller::Controller;
use whiteboard::error::ConfigError;
use whiteboard::hooks::{MemoryClipboard, MemoryStore};
use whiteboard::surface::Scene;

mod script;

use script::{ScriptError, Step, replay};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read script {path}: {source}")]
    ReadScript { path: String, source: io::Error },
    #[error("invalid script: {0}")]
    InvalidScript(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("replay failed: {0}")]
    Replay(#[from] ScriptError),
}

#[derive(Parser, Debug)]
#[command(name = "whiteboard", about = "Headless whiteboard drawing session")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON gesture script and print the resulting board.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(default_value = "-", help = "Script file path, or - for stdin")]
    script: String,

    #[arg(long, env = "WHITEBOARD_WIDTH", default_value_t = 1280.0)]
    width: f64,

    #[arg(long, env = "WHITEBOARD_HEIGHT", default_value_t = 720.0)]
    height: f64,

    #[arg(long, default_value_t = false, help = "Print JSON on a single line")]
    compact: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Replay(args) => run_replay(&args),
    }
}

fn run_replay(args: &ReplayArgs) -> Result<(), CliError> {
    let source = read_script(&args.script)?;
    let steps = serde_json::from_str::<Vec<Step>>(&source)?;
    let config = ControllerConfig::from_env()?;

    let mut ctl = Controller::new(Scene::new(args.width, args.height), config)
        .with_store(Box::new(MemoryStore::new()))
        .with_clipboard(Box::new(MemoryClipboard::new()));
    let report = replay(&mut ctl, &steps)?;
    info!(steps = steps.len(), shapes = report.shapes.len(), "replay finished");

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");
    Ok(())
}

fn read_script(path: &str) -> Result<String, CliError> {
    let read = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| CliError::ReadScript { path: path.to_owned(), source })
}
