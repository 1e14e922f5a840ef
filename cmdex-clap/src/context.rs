//! Render context handed to the help decorator during a clap help request.

use std::io::Write;

use cmdex::RenderContext;

pub struct ClapContext<'a> {
    program_name: &'a str,
    selected: Option<String>,
    out: &'a mut dyn Write,
}

impl<'a> ClapContext<'a> {
    /// `selected` is the selected command's full path, program name included.
    pub fn new(
        program_name: &'a str,
        selected: Option<String>,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            program_name,
            selected,
            out,
        }
    }
}

impl RenderContext for ClapContext<'_> {
    fn program_name(&self) -> &str {
        self.program_name
    }

    fn selected_path(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}
