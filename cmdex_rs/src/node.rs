//! Command tree nodes.
//!
//! Every node owns the examples registered for exactly its own path. Nodes are
//! created on first addressing and never removed.

use std::collections::BTreeMap;

use tracing::trace;

use crate::example::Example;
use crate::path::split_path;

/// A node of the command tree, keyed by its path from the program root.
#[derive(Debug, Default, Clone)]
pub struct CommandNode {
    path: Vec<String>,
    examples: Vec<Example>,
    children: BTreeMap<String, CommandNode>,
}

impl CommandNode {
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Segments identifying this node; empty for the root.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Examples registered directly on this node, in insertion order.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Append an example to this node and return it.
    pub fn example(
        &mut self,
        args: impl Into<String>,
        description: impl Into<String>,
    ) -> &Example {
        let example = Example::new(args, description);
        trace!(path = ?self.path, args = example.args(), "registered example");
        let index = self.examples.len();
        self.examples.push(example);
        &self.examples[index]
    }

    /// Walk to the descendant at `path`, creating missing nodes on the way.
    ///
    /// `"config snapshot"` and `command("config")` followed by
    /// `command("snapshot")` reach the same node.
    pub fn command(&mut self, path: &str) -> &mut CommandNode {
        let mut node = self;
        for segment in split_path(path) {
            node = node.child(segment);
        }
        node
    }

    /// Look up an existing descendant without creating anything.
    pub fn get(&self, path: &str) -> Option<&CommandNode> {
        let mut node = self;
        for segment in split_path(path) {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    fn child(&mut self, segment: &str) -> &mut CommandNode {
        let parent = &self.path;
        self.children
            .entry(segment.to_string())
            .or_insert_with(|| {
                let mut path = parent.clone();
                path.push(segment.to_string());
                trace!(path = ?path, "created command node");
                CommandNode {
                    path,
                    ..Self::default()
                }
            })
    }
}
