//! Examples registry.
//!
//! Built once while the program declares its commands, then only read while
//! help is rendered.

use tracing::debug;

use crate::example::Example;
use crate::finder::{ExamplesFinder, ExamplesFound};
use crate::node::CommandNode;

/// Registry of examples keyed by command path.
#[derive(Debug, Clone)]
pub struct App {
    context: String,
    root: CommandNode,
}

impl App {
    /// Create an empty registry for the program displayed as `context`.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            root: CommandNode::root(),
        }
    }

    /// Program display name used as the first token of every example.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Attach an example to the program itself.
    pub fn example(
        &mut self,
        args: impl Into<String>,
        description: impl Into<String>,
    ) -> &Example {
        self.root.example(args, description)
    }

    /// Node for a whitespace-separated command path, created on demand.
    ///
    /// Repeated calls with the same path return the same node.
    pub fn command(&mut self, path: &str) -> &mut CommandNode {
        self.root.command(path)
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }
}

impl ExamplesFinder for App {
    /// Examples registered directly on `command`.
    ///
    /// Unknown paths and nodes without examples of their own find nothing;
    /// examples are never inherited from ancestors or descendants.
    fn find(&self, command: &str) -> ExamplesFound<'_> {
        let Some(node) = self.root.get(command) else {
            debug!(command, "no command node for examples lookup");
            return ExamplesFound::none(&self.context);
        };

        if node.examples().is_empty() {
            debug!(command, "command has no examples");
            return ExamplesFound::none(&self.context);
        }

        debug!(command, count = node.examples().len(), "found examples");
        ExamplesFound {
            context: &self.context,
            path: node.path(),
            examples: Some(node.examples()),
        }
    }
}
