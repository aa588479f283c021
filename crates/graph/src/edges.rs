//! Edge type for diagrams.

use serde::{Deserialize, Serialize};

/// A labeled transition arrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagramEdge {
    /// Input symbol (Moore) or `symbol/output` (Mealy)
    pub label: String,
}

impl DiagramEdge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
