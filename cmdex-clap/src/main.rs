//! # cmdex-demo
//!
//! Small CLI showing Examples sections in `--help` output.
//!
//! ```bash
//! cmdex-demo --help                  # program examples
//! cmdex-demo version --help          # examples for `version`
//! cmdex-demo help config snapshot    # examples for `config snapshot`
//! CMDEX_EXAMPLES=extra.toml cmdex-demo --help
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use cmdex::{App, ExamplesFile};
use cmdex_clap::{CliError, ExampleParser, Parsed};
use tracing::{debug, info};

/// Environment variable naming an extra TOML/JSON examples file.
const EXAMPLES_ENV: &str = "CMDEX_EXAMPLES";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "cmdex-demo")]
#[command(about = "This is my app.")]
#[command(version, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialise app data.
    Init,

    /// Get application version details.
    Version {
        /// Get version details in json format.
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Snapshot the current configuration.
    Snapshot {
        /// Snapshot name.
        name: String,
    },
}

// ============================================================================
// Examples
// ============================================================================

fn register_examples(app: &mut App) {
    app.example(
        "init",
        "Ius legimus nonumes te, pri dicat nominavi copiosae id, odio rebum facilis ea pro.",
    );
    app.example(
        "config snapshot odio",
        "At vis primis debitis, ei verear omittantur.",
    );
    app.command("version")
        .example("--json", "At vis primis debitis, ei verear omittantur.");
    app.command("config")
        .example("snapshot odio", "At vis primis debitis, ei verear omittantur.");
    app.command("config snapshot")
        .example("odio", "At vis primis debitis, ei verear omittantur.");
}

fn load_extra_examples(app: &mut App) -> Result<()> {
    let Some(path) = std::env::var_os(EXAMPLES_ENV).map(PathBuf::from) else {
        return Ok(());
    };

    let file = ExamplesFile::load_from_path(&path)
        .with_context(|| format!("loading examples from {EXAMPLES_ENV}"))?;
    file.apply(app);
    debug!(path = %path.display(), "applied extra examples");
    Ok(())
}

// ============================================================================
// Commands
// ============================================================================

fn run_command(matches: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let cli = Cli::from_arg_matches(matches).context("decoding arguments")?;
    info!(command = ?cli.command, "running command");

    match cli.command {
        Commands::Init => writeln!(out, "initialised app data")?,
        Commands::Version { json: true } => writeln!(
            out,
            "{{\"name\":\"cmdex-demo\",\"version\":\"{}\"}}",
            env!("CARGO_PKG_VERSION")
        )?,
        Commands::Version { json: false } => {
            writeln!(out, "cmdex-demo {}", env!("CARGO_PKG_VERSION"))?
        }
        Commands::Config {
            command: ConfigCommands::Snapshot { name },
        } => writeln!(out, "saved snapshot {name}")?,
    }
    Ok(())
}

fn run() -> Result<ExitCode> {
    let mut parser = ExampleParser::new(Cli::command()).context("building parser")?;
    register_examples(parser.examples_mut());
    load_extra_examples(parser.examples_mut())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match parser.try_parse_from(std::env::args_os(), &mut out) {
        Ok(Parsed::Matches(matches)) => {
            run_command(&matches, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(Parsed::Help) | Ok(Parsed::Version) => Ok(ExitCode::SUCCESS),
        Err(CliError::Clap(err)) => {
            err.print().context("printing usage error")?;
            Ok(ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2)))
        }
        Err(err) => Err(anyhow::Error::new(err).context("rendering help")),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[cmdex-demo][error] {e:#}");
            ExitCode::FAILURE
        }
    }
}
