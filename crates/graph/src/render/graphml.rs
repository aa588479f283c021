//! GraphML export for graph visualization.
//!
//! GraphML is an XML-based format for graph exchange that is widely supported
//! by graph visualization tools like yEd, Gephi, Cytoscape, etc.

use crate::Diagram;
use petgraph::visit::EdgeRef;
use std::fmt::Write;

/// Render a Diagram as GraphML XML.
///
/// The output includes:
/// - Node attributes: label, initial
/// - Edge attributes: label
pub fn render_graphml(diagram: &Diagram) -> String {
    let inner = diagram.inner();
    let mut output = String::new();

    // XML header and GraphML schema
    writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(output, r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns""#).unwrap();
    writeln!(output, r#"         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#).unwrap();
    writeln!(output, r#"         xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns"#)
        .unwrap();
    writeln!(output, r#"         http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#)
        .unwrap();

    writeln!(output, r#"  <key id="label" for="node" attr.name="label" attr.type="string"/>"#)
        .unwrap();
    writeln!(
        output,
        r#"  <key id="initial" for="node" attr.name="initial" attr.type="boolean"/>"#
    )
    .unwrap();
    writeln!(
        output,
        r#"  <key id="edge_label" for="edge" attr.name="label" attr.type="string"/>"#
    )
    .unwrap();

    writeln!(
        output,
        r#"  <graph id="{}" edgedefault="directed">"#,
        escape_xml(diagram.name())
    )
    .unwrap();

    for (_, node) in diagram.nodes() {
        writeln!(output, r#"    <node id="{}">"#, escape_xml(&node.id)).unwrap();
        writeln!(output, r#"      <data key="label">{}</data>"#, escape_xml(&node.label)).unwrap();
        writeln!(output, r#"      <data key="initial">{}</data>"#, node.initial).unwrap();
        writeln!(output, r#"    </node>"#).unwrap();
    }

    for (edge_id, edge) in inner.edge_references().enumerate() {
        writeln!(
            output,
            r#"    <edge id="e{}" source="{}" target="{}">"#,
            edge_id,
            escape_xml(&inner[edge.source()].id),
            escape_xml(&inner[edge.target()].id)
        )
        .unwrap();
        writeln!(
            output,
            r#"      <data key="edge_label">{}</data>"#,
            escape_xml(&edge.weight().label)
        )
        .unwrap();
        writeln!(output, r#"    </edge>"#).unwrap();
    }

    writeln!(output, r#"  </graph>"#).unwrap();
    writeln!(output, r#"</graphml>"#).unwrap();

    output
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
