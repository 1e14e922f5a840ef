//! clap parser wrapper that decorates help output with examples.

use std::ffi::{OsStr, OsString};
use std::io::Write;

use clap::error::ErrorKind;
use clap::{Arg, ArgMatches, Command};
use cmdex::{App, RenderContext, render_help};
use tracing::debug;

use crate::context::ClapContext;
use crate::error::CliError;

/// Outcome of a successful parse.
#[derive(Debug)]
pub enum Parsed {
    /// Regular invocation.
    Matches(ArgMatches),
    /// Help was requested and written.
    Help,
    /// Version was requested and written.
    Version,
}

/// A clap command paired with the examples registry for its help output.
pub struct ExampleParser {
    command: Command,
    name: String,
    examples: App,
}

impl ExampleParser {
    /// Wrap `command`; the examples registry is named after it.
    pub fn new(command: Command) -> Result<Self, CliError> {
        let name = command
            .get_display_name()
            .unwrap_or_else(|| command.get_name())
            .trim()
            .to_string();
        if name.is_empty() {
            return Err(CliError::EmptyName);
        }

        Ok(Self {
            examples: App::new(name.clone()),
            name,
            command,
        })
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn examples(&self) -> &App {
        &self.examples
    }

    /// Registry to attach examples to while the commands are declared.
    pub fn examples_mut(&mut self) -> &mut App {
        &mut self.examples
    }

    /// Parse `args` (program name first), writing help or version to `out`.
    pub fn try_parse_from<I, T>(&self, args: I, out: &mut dyn Write) -> Result<Parsed, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        let err = match self.command.clone().try_get_matches_from(args.iter().cloned()) {
            Ok(matches) => return Ok(Parsed::Matches(matches)),
            Err(err) => err,
        };

        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let selected = self.selected_path(&args[..]);
                debug!(selected = ?selected, "help requested");

                let help = err.render().to_string();
                let mut ctx = ClapContext::new(&self.name, selected, out);
                render_help::<_, ClapContext<'_>, _, CliError>(
                    &self.examples,
                    |ctx| {
                        ctx.output().write_all(help.as_bytes())?;
                        Ok(())
                    },
                    &mut ctx,
                )?;
                Ok(Parsed::Help)
            }
            ErrorKind::DisplayVersion => {
                out.write_all(err.render().to_string().as_bytes())?;
                Ok(Parsed::Version)
            }
            _ => Err(CliError::Clap(err)),
        }
    }

    /// Full path of the command `args` select, program name included.
    ///
    /// Follows subcommand names and aliases, skips option values, and treats
    /// `help <command>...` like `<command>... --help`. `None` when the
    /// program itself is selected.
    pub fn selected_path<T: AsRef<OsStr>>(&self, args: &[T]) -> Option<String> {
        let mut lineage: Vec<&Command> = vec![&self.command];
        let mut segments: Vec<&str> = Vec::new();
        let mut help_subcommand = false;

        let mut tokens = args
            .iter()
            .skip(1)
            .map(|arg| arg.as_ref().to_string_lossy().into_owned());

        while let Some(token) = tokens.next() {
            let current = lineage[lineage.len() - 1];

            if token == "--" {
                break;
            }

            if let Some(long) = token.strip_prefix("--") {
                if !long.contains('=')
                    && option_takes_value(&lineage, |arg| arg.get_long() == Some(long))
                {
                    tokens.next();
                }
                continue;
            }

            if let Some(shorts) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
                let mut chars = shorts.chars();
                if let (Some(short), "") = (chars.next(), chars.as_str()) {
                    if option_takes_value(&lineage, |arg| arg.get_short() == Some(short)) {
                        tokens.next();
                    }
                }
                continue;
            }

            if let Some(sub) = current.find_subcommand(&token) {
                segments.push(sub.get_name());
                lineage.push(sub);
                continue;
            }

            if !help_subcommand
                && token == "help"
                && current.has_subcommands()
                && !current.is_disable_help_subcommand_set()
            {
                help_subcommand = true;
                continue;
            }

            if help_subcommand {
                break;
            }
        }

        if segments.is_empty() {
            None
        } else {
            Some(format!("{} {}", self.name, segments.join(" ")))
        }
    }
}

/// Whether the option matched by `is_match` consumes the next token.
///
/// Looks at the innermost command's arguments and at global arguments of its
/// ancestors.
fn option_takes_value(lineage: &[&Command], is_match: impl Fn(&Arg) -> bool) -> bool {
    let Some((current, ancestors)) = lineage.split_last() else {
        return false;
    };

    current
        .get_arguments()
        .chain(
            ancestors
                .iter()
                .flat_map(|cmd| cmd.get_arguments())
                .filter(|arg| arg.is_global_set()),
        )
        .find(|&arg| is_match(arg))
        .is_some_and(|arg| arg.get_action().takes_values())
}
