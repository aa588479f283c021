//! Graphviz DOT output.
//!
//! This is the text handed to the `dot` program by
//! [`GraphvizRenderer`](super::GraphvizRenderer); it can also be written out
//! as-is and laid out by any DOT-compatible tool.

use crate::Diagram;
use petgraph::visit::EdgeRef;
use std::fmt::Write;

/// Id of the invisible node whose arrow points at the initial state.
const START_MARKER: &str = "__start__";

/// Render a Diagram as a DOT `digraph`.
///
/// Nodes are written before edges, both in insertion order. The initial
/// state, if marked, gets an incoming arrow from a point-shaped marker node.
pub fn render_dot(diagram: &Diagram) -> String {
    let inner = diagram.inner();
    let mut output = String::new();

    writeln!(output, "digraph \"{}\" {{", escape_dot(diagram.name())).unwrap();
    writeln!(output, "    rankdir={};", diagram.rank_dir()).unwrap();

    let initial = diagram.initial().and_then(|idx| diagram.get_node(idx));
    if initial.is_some() {
        writeln!(output, "    \"{}\" [shape=point, label=\"\"];", START_MARKER).unwrap();
    }

    for (_, node) in diagram.nodes() {
        writeln!(
            output,
            "    \"{}\" [label=\"{}\"];",
            escape_dot(&node.id),
            escape_dot(&node.label)
        )
        .unwrap();
    }

    if let Some(node) = initial {
        writeln!(output, "    \"{}\" -> \"{}\";", START_MARKER, escape_dot(&node.id)).unwrap();
    }

    for edge in inner.edge_references() {
        writeln!(
            output,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            escape_dot(&inner[edge.source()].id),
            escape_dot(&inner[edge.target()].id),
            escape_dot(&edge.weight().label)
        )
        .unwrap();
    }

    writeln!(output, "}}").unwrap();
    output
}

/// Escape a string for use inside a double-quoted DOT id.
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
