//! Node type for diagrams.

use serde::{Deserialize, Serialize};

/// A node in a diagram: one machine state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagramNode {
    /// State identifier, unique within the diagram
    pub id: String,
    /// Display label; may span several lines
    pub label: String,
    /// Whether this is the machine's initial state
    pub initial: bool,
}

impl DiagramNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            initial: false,
        }
    }

    /// The label collapsed onto a single line, for terminal output.
    pub fn inline_label(&self) -> String {
        self.label.lines().collect::<Vec<_>>().join(" | ")
    }
}
