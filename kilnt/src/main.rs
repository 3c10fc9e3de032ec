//! kilnt - command-line driver for the Kiln lexer.
//!
//! This is the main entry point for the kilnt CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use kilnc_lex::PositionMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{parse_position, OutputFormat};
use commands::{run_check, run_init, run_lex, CheckArgs, InitArgs, LexArgs};
use config::Config;
use error::{KilntError, Result};

/// kilnt - tokenize and check Kiln source files
#[derive(Parser, Debug)]
#[command(name = "kilnt")]
#[command(author = "Kiln Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check Kiln source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KILNT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KILNT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KILNT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kilnt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Every token, including the final EOF, is written one per line
    /// (or as a JSON array) to the output file or stdout.
    Lex(LexCommand),

    /// Report malformed tokens
    ///
    /// Fails if any input contains `UNKNOWN` or `ERROR` tokens.
    Check(CheckCommand),

    /// Write a default kilnt.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to tokenize
    input: PathBuf,

    /// Output file (default: from config, else stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dump format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Which position each token reports (start, end)
    #[arg(short, long, value_parser = parse_position)]
    position: Option<PositionMode>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing kilnt.toml
    #[arg(short, long)]
    force: bool,
}

/// Parses arguments, loads configuration, initializes logging and
/// dispatches to the selected command.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token dumps on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| KilntError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        input: args.input,
        output: args.output,
        format: args.format,
        position: args.position,
        config,
    };
    run_lex(lex_args).map(|_| ())
}

fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        inputs: args.inputs,
        config,
    };
    run_check(check_args).map(|_| ())
}

fn execute_init(args: InitCommand) -> Result<()> {
    let init_args = InitArgs {
        force: args.force,
        path: args.path,
    };
    run_init(init_args).map(|_| ())
}
