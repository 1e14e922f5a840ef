//! # cmdex-clap
//!
//! Appends [`cmdex`] Examples sections to the help `clap` generates.
//!
//! ```rust
//! use clap::Command;
//! use cmdex_clap::{ExampleParser, Parsed};
//!
//! let cli = Command::new("myapp").subcommand(Command::new("init"));
//! let mut parser = ExampleParser::new(cli).expect("named command");
//! parser.examples_mut().command("init").example("--force", "Re-create app data.");
//!
//! let mut out = Vec::new();
//! let parsed = parser
//!     .try_parse_from(["myapp", "init", "--help"], &mut out)
//!     .expect("help");
//! assert!(matches!(parsed, Parsed::Help));
//! assert!(String::from_utf8_lossy(&out).contains("  myapp init --force\n"));
//! ```

mod context;
mod error;
mod parser;

pub use context::ClapContext;
pub use error::CliError;
pub use parser::{ExampleParser, Parsed};
