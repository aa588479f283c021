//! Serialization types for diagram export.
//!
//! These are the JSON-facing shapes of a [`Diagram`]; node and edge
//! references use state ids rather than petgraph indices.

use crate::{Diagram, RankDir};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// Serializable representation of a Diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRepr {
    pub name: String,
    pub rank_dir: RankDir,
    pub initial: Option<String>,
    pub nodes: Vec<NodeRepr>,
    pub edges: Vec<EdgeRepr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRepr {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRepr {
    pub source: String,
    pub target: String,
    pub label: String,
}

impl From<&Diagram> for DiagramRepr {
    fn from(diagram: &Diagram) -> Self {
        let inner = diagram.inner();

        let nodes = diagram
            .nodes()
            .map(|(_, n)| NodeRepr {
                id: n.id.clone(),
                label: n.label.clone(),
            })
            .collect();

        let edges = inner
            .edge_references()
            .map(|e| EdgeRepr {
                source: inner[e.source()].id.clone(),
                target: inner[e.target()].id.clone(),
                label: e.weight().label.clone(),
            })
            .collect();

        let initial = diagram
            .initial()
            .and_then(|idx| diagram.get_node(idx))
            .map(|n| n.id.clone());

        Self {
            name: diagram.name().to_string(),
            rank_dir: diagram.rank_dir(),
            initial,
            nodes,
            edges,
        }
    }
}

impl DiagramRepr {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphSink;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_repr_uses_state_ids() {
        let mut diagram = Diagram::new("g");
        diagram.add_node("A", "A\nx");
        diagram.add_edge("A", "B", "0/y");
        diagram.mark_initial("A");

        let repr = DiagramRepr::from(&diagram);

        assert_eq!(repr.initial.as_deref(), Some("A"));
        assert_eq!(
            repr.edges,
            vec![EdgeRepr {
                source: "A".into(),
                target: "B".into(),
                label: "0/y".into()
            }]
        );
        assert_eq!(repr.nodes[1].label, "B");

        let json = repr.to_json().unwrap();
        let parsed: DiagramRepr = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, repr);
    }
}
