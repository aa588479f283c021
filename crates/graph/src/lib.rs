//! # mealy-moore-graph
//!
//! Diagrams of Mealy and Moore machines.
//!
//! A machine is drawn into a [`GraphSink`]; the in-memory sink, [`Diagram`],
//! is then handed to one of the renderers.
//!
//! ## Features
//!
//! - **Two variants**: Moore nodes read `state\noutput` with input symbols on
//!   the edges, Mealy nodes are bare states with `symbol/output` edges
//! - **Text renderers**: Graphviz DOT, GraphML, an ASCII tree and JSON
//! - **Images**: [`GraphvizRenderer`] runs `dot` to produce PNG or SVG files
//!
//! ## Example
//!
//! ```ignore
//! use mealy_moore_graph::{Diagram, GraphvizRenderer, OutputFormat};
//!
//! let moore = mealy.to_moore()?;
//! let diagram = Diagram::from_moore(&moore);
//! let path = GraphvizRenderer::new().render(&diagram, "moore_machine", OutputFormat::Png)?;
//! println!("Moore machine diagram saved as {}", path.display());
//! ```

mod builder;
mod edges;
mod error;
pub mod export;
mod nodes;
pub mod render;
mod sink;

pub use builder::{draw_mealy, draw_moore, MEALY_DIAGRAM_NAME, MOORE_DIAGRAM_NAME};
pub use edges::DiagramEdge;
pub use error::RenderError;
pub use export::{DiagramRepr, EdgeRepr, NodeRepr};
pub use nodes::DiagramNode;
pub use render::{render_ascii_tree, render_dot, render_graphml, GraphvizRenderer, OutputFormat};
pub use sink::{GraphSink, RankDir};

use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// A labeled directed graph of machine states.
#[derive(Debug, Clone)]
pub struct Diagram {
    /// Graph name, also the default output file base name
    name: String,

    /// The underlying directed graph
    graph: DiGraph<DiagramNode, DiagramEdge>,

    /// Index of nodes by state id
    nodes: HashMap<String, NodeIndex>,

    rank_dir: RankDir,

    /// The initial state's node (if marked)
    initial: Option<NodeIndex>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: DiGraph::new(),
            nodes: HashMap::new(),
            rank_dir: RankDir::default(),
            initial: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank_dir(&self) -> RankDir {
        self.rank_dir
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn inner(&self) -> &DiGraph<DiagramNode, DiagramEdge> {
        &self.graph
    }

    /// Get a node by its index.
    pub fn get_node(&self, index: NodeIndex) -> Option<&DiagramNode> {
        self.graph.node_weight(index)
    }

    /// Look up a node index by state id.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get(id).copied()
    }

    /// Look up a node by state id.
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.get_index(id).and_then(|idx| self.get_node(idx))
    }

    /// The initial state's node index.
    pub fn initial(&self) -> Option<NodeIndex> {
        self.initial
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &DiagramNode)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.get_node(idx).map(|n| (idx, n)))
    }

    /// Outgoing edges of `index` in insertion order.
    pub fn edges_from(&self, index: NodeIndex) -> Vec<EdgeReference<'_, DiagramEdge>> {
        let mut edges: Vec<_> = self.graph.edges(index).collect();
        edges.sort_by_key(|e| e.id());
        edges
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(DiagramNode::new(id, id));
        self.nodes.insert(id.to_string(), idx);
        idx
    }
}
