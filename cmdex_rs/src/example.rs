//! A single curated usage example.

/// An example invocation relative to the command path that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    args: String,
    description: String,
}

impl Example {
    pub fn new(args: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            args: args.into(),
            description: description.into(),
        }
    }

    /// Invocation fragment, e.g. `--json` or `snapshot odio`.
    pub fn args(&self) -> &str {
        &self.args
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render the fully-qualified command line for this example.
    ///
    /// `context` is the program's display name and `node_path` the segments of
    /// the command that owns the example. The args text is emitted verbatim.
    pub fn cli<S: AsRef<str>>(&self, context: &str, node_path: &[S]) -> String {
        let mut line = String::with_capacity(context.len() + self.args.len() + 16);
        line.push_str(context);
        for segment in node_path {
            line.push(' ');
            line.push_str(segment.as_ref());
        }
        line.push(' ');
        line.push_str(&self.args);
        line
    }
}
