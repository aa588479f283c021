//! ASCII rendering for terminal display.
//!
//! The diagram is printed as a depth-first tree from the initial state. A
//! state already printed is shown again with `↩` instead of being expanded,
//! so cycles terminate.

use crate::Diagram;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;
use std::fmt::Write;

/// Render a Diagram as an ASCII tree.
///
/// Roots are, in order: the initial state, states without incoming edges,
/// then any state not yet reached, so every state appears at least once.
pub fn render_ascii_tree(diagram: &Diagram) -> String {
    let inner = diagram.inner();
    let mut output = String::new();
    let mut visited: HashSet<NodeIndex> = HashSet::new();

    let mut has_incoming: HashSet<NodeIndex> = HashSet::new();
    for edge in inner.edge_references() {
        if edge.source() != edge.target() {
            has_incoming.insert(edge.target());
        }
    }

    let mut roots: Vec<NodeIndex> = diagram.initial().into_iter().collect();
    roots.extend(inner.node_indices().filter(|idx| !has_incoming.contains(idx)));
    roots.extend(inner.node_indices());

    for root in roots {
        if !visited.insert(root) {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        writeln!(output, "{}", node_label(diagram, root)).unwrap();
        render_children(&mut output, diagram, root, "", &mut visited);
    }

    output
}

fn render_children(
    output: &mut String,
    diagram: &Diagram,
    node: NodeIndex,
    prefix: &str,
    visited: &mut HashSet<NodeIndex>,
) {
    let edges = diagram.edges_from(node);

    for (i, edge) in edges.iter().enumerate() {
        let is_last = i == edges.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        let child = edge.target();
        let label = node_label(diagram, child);

        if !visited.insert(child) {
            writeln!(output, "{}{} {} → {} ↩", prefix, connector, edge.weight().label, label)
                .unwrap();
            continue;
        }

        writeln!(output, "{}{} {} → {}", prefix, connector, edge.weight().label, label).unwrap();
        let deeper = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        render_children(output, diagram, child, &deeper, visited);
    }
}

fn node_label(diagram: &Diagram, idx: NodeIndex) -> String {
    diagram
        .get_node(idx)
        .map(|n| n.inline_label())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphSink;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tree_from_initial_state() {
        let mut diagram = Diagram::new("moore_machine");
        diagram.add_node("B_y", "B_y\ny");
        diagram.add_node("C_z", "C_z\nz");
        diagram.add_node("A_x", "A_x\nx");
        diagram.mark_initial("A_x");
        diagram.add_edge("B_y", "A_x", "0");
        diagram.add_edge("B_y", "C_z", "1");
        diagram.add_edge("C_z", "C_z", "0");
        diagram.add_edge("C_z", "A_x", "1");
        diagram.add_edge("A_x", "B_y", "0");
        diagram.add_edge("A_x", "C_z", "1");

        let expected = "\
A_x | x
├─ 0 → B_y | y
│   ├─ 0 → A_x | x ↩
│   └─ 1 → C_z | z
│       ├─ 0 → C_z | z ↩
│       └─ 1 → A_x | x ↩
└─ 1 → C_z | z ↩
";
        assert_eq!(render_ascii_tree(&diagram), expected);
    }

    #[test]
    fn test_unreached_states_become_roots() {
        let mut diagram = Diagram::new("g");
        diagram.add_node("A", "A");
        diagram.add_node("B", "B");
        diagram.mark_initial("A");
        diagram.add_edge("A", "A", "0/x");
        diagram.add_edge("B", "A", "0/y");

        let tree = render_ascii_tree(&diagram);
        assert_eq!(tree, "A\n└─ 0/x → A ↩\n\nB\n└─ 0/y → A ↩\n");
    }

    #[test]
    fn test_empty_diagram() {
        assert_eq!(render_ascii_tree(&Diagram::new("g")), "");
    }
}
