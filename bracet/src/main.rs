//! Bracet CLI - dump and check the tokens of brace-delimited source files.
//!
//! This is the main entry point for the bracet CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_command, CheckArgs, CheckCommand, InitArgs, InitCommand, TokensArgs, TokensCommand,
};
use config::{Config, OutputFormat};
use error::{BracetError, Result};

/// Bracet - lossless lexer front end
///
/// Bracet prints the tokens of source files, checks that they lex cleanly,
/// and writes a default configuration file.
#[derive(Parser, Debug)]
#[command(name = "bracet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump and check the tokens of brace-delimited source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "BRACET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BRACET_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "BRACET_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the bracet CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of one or more files
    Tokens(TokensCli),

    /// Check that files lex cleanly and their scopes balance
    ///
    /// Exits with a non-zero status if any file fails.
    Check(CheckCli),

    /// Write a default bracet.toml
    Init(InitCli),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCli {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long, value_parser = parse_output_format)]
    format: Option<OutputFormat>,

    /// Hide whitespace, linebreak and comment tokens
    #[arg(long)]
    no_trivia: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCli {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Report unbalanced scopes as warnings instead of failures
    #[arg(long)]
    allow_unbalanced: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCli {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format `{s}` (expected text or json)"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging and executes the selected
/// command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Library crates log through the `log` facade; `try_init` bridges those
/// records into this subscriber.
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
        .map_err(|e| BracetError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, letting flags override the configuration.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            run_command::<TokensCommand>(TokensArgs {
                files: args.files,
                format: args.format.unwrap_or(config.output.format),
                show_trivia: config.output.show_trivia && !args.no_trivia,
            })?;
        },
        Commands::Check(args) => {
            run_command::<CheckCommand>(CheckArgs {
                files: args.files,
                require_balanced: config.check.require_balanced && !args.allow_unbalanced,
            })?;
        },
        Commands::Init(args) => {
            run_command::<InitCommand>(InitArgs {
                force: args.force,
                path: args.path,
            })?;
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["bracet", "tokens", "a.swift", "b.swift"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert!(args.format.is_none());
            assert!(!args.no_trivia);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["bracet", "tokens", "a.swift", "--format", "json", "--no-trivia"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.no_trivia);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["bracet", "tokens", "a.swift", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_files() {
        assert!(Cli::try_parse_from(["bracet", "tokens"]).is_err());
        assert!(Cli::try_parse_from(["bracet", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["bracet", "check", "a.swift", "--allow-unbalanced"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("a.swift")]);
            assert!(args.allow_unbalanced);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["bracet", "init", "--path", "/tmp/test", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/test")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "bracet",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/bracet.toml",
            "init",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/bracet.toml")));
    }
}
