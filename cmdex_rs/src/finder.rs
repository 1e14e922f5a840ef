//! Lookup contract between example sources and the help decorator.

use crate::example::Example;

/// Finds the examples that belong to a particular command.
///
/// The help decorator only depends on this trait, so any source of examples
/// can stand in for the in-memory [`App`](crate::App) registry.
pub trait ExamplesFinder {
    /// `command` is the space-joined path without the program name;
    /// an empty string addresses the program itself.
    fn find(&self, command: &str) -> ExamplesFound<'_>;
}

/// Result of a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamplesFound<'a> {
    /// Program display name, leading every rendered command line.
    pub context: &'a str,
    /// Segments of the command that owns `examples`.
    pub path: &'a [String],
    /// `None` means nothing should be printed.
    pub examples: Option<&'a [Example]>,
}

impl<'a> ExamplesFound<'a> {
    /// A lookup that found nothing to print.
    pub fn none(context: &'a str) -> Self {
        Self {
            context,
            path: &[],
            examples: None,
        }
    }

    /// Build the Examples block, one entry per output line.
    ///
    /// The block opens with a blank line and the `Examples:` heading; entries
    /// are separated by a single blank line with none after the last one.
    pub fn lines(&self) -> Option<Vec<String>> {
        let examples = self.examples?;

        let mut lines = Vec::with_capacity(2 + examples.len() * 3);
        lines.push(String::new());
        lines.push("Examples:".to_string());
        for (i, example) in examples.iter().enumerate() {
            lines.push(format!("  {}", example.cli(self.context, self.path)));
            lines.push(format!("    {}", example.description()));
            if i < examples.len() - 1 {
                lines.push(String::new());
            }
        }
        Some(lines)
    }
}
