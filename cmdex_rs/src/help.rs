//! Help decoration.
//!
//! Runs the parser's default help renderer, then appends the Examples block
//! for the selected command.

use std::io::{self, Write};

use tracing::trace;

use crate::finder::ExamplesFinder;
use crate::path::command_path;

/// What the help decorator needs from the argument parser while rendering.
pub trait RenderContext {
    /// Declared display name of the program.
    fn program_name(&self) -> &str;

    /// Full path of the selected command, program name included.
    ///
    /// `None` when help was requested for the program itself.
    fn selected_path(&self) -> Option<&str>;

    /// Stream the help text is written to.
    fn output(&mut self) -> &mut dyn Write;
}

/// Render help with the default renderer, followed by the selected command's
/// examples.
///
/// A renderer failure is returned unchanged and nothing else is written. A
/// missing examples list is not an error. Write failures stop the block at the
/// failing line; lines already written stay written.
pub fn render_help<F, C, R, E>(finder: &F, default_renderer: R, ctx: &mut C) -> Result<(), E>
where
    F: ExamplesFinder + ?Sized,
    C: RenderContext + ?Sized,
    R: FnOnce(&mut C) -> Result<(), E>,
    E: From<io::Error>,
{
    let command = command_path(ctx.program_name(), ctx.selected_path());
    let found = finder.find(&command);

    default_renderer(&mut *ctx)?;

    let Some(lines) = found.lines() else {
        return Ok(());
    };

    trace!(command = %command, lines = lines.len(), "appending examples to help");
    write_lines(ctx.output(), &lines[..])?;
    Ok(())
}

/// Write each line followed by a newline, one write per line.
///
/// Returns the first failure without attempting the remaining lines.
pub fn write_lines<S: AsRef<str>>(out: &mut dyn Write, lines: &[S]) -> io::Result<()> {
    for line in lines {
        let mut buf = String::with_capacity(line.as_ref().len() + 1);
        buf.push_str(line.as_ref());
        buf.push('\n');
        out.write_all(buf.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines_terminates_each_line() {
        let mut out = Vec::new();
        write_lines(&mut out, &["", "Examples:", "  app x"]).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "\nExamples:\n  app x\n");
    }

    #[test]
    fn test_write_lines_empty_writes_nothing() {
        let mut out = Vec::new();
        let lines: [&str; 0] = [];
        write_lines(&mut out, &lines).expect("write");
        assert!(out.is_empty());
    }
}
