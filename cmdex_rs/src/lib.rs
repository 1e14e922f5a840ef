//! # cmdex
//!
//! Curated, per-command **Examples** sections for generated CLI help.
//!
//! A program registers example invocations against command paths while it
//! declares its commands. When help is requested, the currently selected
//! command path is looked up and the matching examples are appended after the
//! default help text:
//!
//! ```text
//!
//! Examples:
//!   myapp version --json
//!     Print version details as JSON.
//! ```
//!
//! ## Features
//!
//! - **Path-keyed registry** - examples live on exactly one node of the command tree
//! - **No inheritance** - a command only shows examples curated for it
//! - **Pluggable sources** - the help decorator only needs an [`ExamplesFinder`]
//! - **File-backed examples** - load TOML/JSON example lists with [`ExamplesFile`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cmdex::{App, ExamplesFinder};
//!
//! let mut app = App::new("myapp");
//! app.example("init", "Initialise app data.");
//! app.command("version").example("--json", "Print version details as JSON.");
//!
//! let found = app.find("version");
//! let lines = found.lines().expect("version has examples");
//! assert_eq!(lines[2], "  myapp version --json");
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod example;
pub mod finder;
pub mod help;
pub mod node;
pub mod path;

pub use app::App;
pub use config::{ExampleEntry, ExamplesFile};
pub use error::ConfigError;
pub use example::Example;
pub use finder::{ExamplesFinder, ExamplesFound};
pub use help::{RenderContext, render_help, write_lines};
pub use node::CommandNode;
pub use path::{command_path, split_path};
