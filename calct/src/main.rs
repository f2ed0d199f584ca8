//! Calct CLI - a command-line front end for the calc tokenizer.
//!
//! This is the main entry point for the calct CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    tokenize::{run_tokenize, TokenizeArgs},
};
use config::Config;
use error::{CalctError, Result};

/// Calct - tokenize calc expressions
///
/// Calct splits arithmetic expressions into tokens and prints them as text
/// or JSON.
#[derive(Parser, Debug)]
#[command(name = "calct")]
#[command(author = "Calc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize calc expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CALCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CALCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CALCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the calct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize expressions
    ///
    /// Tokenizes each expression argument, or each line of the input file,
    /// or each line of stdin when neither is given.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Expressions to tokenize (may start with `-`; put flags first)
    #[arg(value_name = "EXPR", allow_hyphen_values = true)]
    expressions: Vec<String>,

    /// Read expressions from a file, one per line
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Show byte spans in text output
    #[arg(short, long)]
    spans: bool,

    /// Exit with an error if any unknown token is found
    #[arg(long)]
    fail_on_unknown: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Events go to stderr so that stdout carries only command output.
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
        .map_err(|e| CalctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
    }
}

/// Merge command-line flags over configuration values.
fn tokenize_args(args: TokenizeCommand, config: &Config) -> TokenizeArgs {
    TokenizeArgs {
        expressions: args.expressions,
        file: args.file,
        format: args.format.unwrap_or(config.format),
        show_spans: args.spans || config.show_spans,
        fail_on_unknown: args.fail_on_unknown || config.fail_on_unknown,
    }
}

fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<()> {
    run_tokenize(tokenize_args(args, &config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokenize_expressions() {
        let cli = Cli::parse_from(["calct", "tokenize", "1 + 2", "max(3)"]);
        let Commands::Tokenize(args) = cli.command;
        assert_eq!(args.expressions, vec!["1 + 2", "max(3)"]);
        assert!(args.file.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_cli_parse_tokenize_with_file() {
        let cli = Cli::parse_from(["calct", "tokenize", "--file", "exprs.txt"]);
        let Commands::Tokenize(args) = cli.command;
        assert_eq!(args.file, Some(PathBuf::from("exprs.txt")));
        assert!(args.expressions.is_empty());
    }

    #[test]
    fn test_cli_file_conflicts_with_expressions() {
        let result = Cli::try_parse_from(["calct", "tokenize", "--file", "exprs.txt", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_tokenize_flags() {
        let cli = Cli::parse_from([
            "calct",
            "tokenize",
            "--format",
            "json",
            "--spans",
            "--fail-on-unknown",
            "5",
        ]);
        let Commands::Tokenize(args) = cli.command;
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.spans);
        assert!(args.fail_on_unknown);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["calct", "tokenize", "--format", "xml", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_accepts_leading_minus_expression() {
        let cli = Cli::parse_from(["calct", "tokenize", "-5 + 3", "-x"]);
        let Commands::Tokenize(args) = cli.command;
        assert_eq!(args.expressions, vec!["-5 + 3", "-x"]);
    }

    #[test]
    fn test_cli_rejects_init() {
        assert!(Cli::try_parse_from(["calct", "init"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "calct",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/calct.toml",
            "tokenize",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/calct.toml")));
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let cli = Cli::parse_from(["calct", "tokenize", "1"]);
        let config = Config {
            format: OutputFormat::Json,
            show_spans: true,
            fail_on_unknown: true,
        };
        let Commands::Tokenize(args) = cli.command;
        let merged = tokenize_args(args, &config);
        assert_eq!(merged.format, OutputFormat::Json);
        assert!(merged.show_spans);
        assert!(merged.fail_on_unknown);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["calct", "tokenize", "--format", "text", "1"]);
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let Commands::Tokenize(args) = cli.command;
        assert_eq!(tokenize_args(args, &config).format, OutputFormat::Text);
    }
}
