//! The interface diagram builders draw into.
//!
//! Builders only ever talk to a [`GraphSink`], so they carry no dependency on
//! a particular layout or rendering backend. [`Diagram`] is the in-memory
//! implementation every renderer in this crate reads from.

use crate::{Diagram, DiagramEdge, DiagramNode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout direction hint passed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl RankDir {
    /// Graphviz `rankdir` attribute value.
    pub fn as_graphviz(&self) -> &'static str {
        match self {
            RankDir::TopToBottom => "TB",
            RankDir::LeftToRight => "LR",
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_graphviz())
    }
}

/// Something a directed, labeled graph can be drawn into.
pub trait GraphSink {
    /// Add a node, or relabel it if `id` is already present.
    fn add_node(&mut self, id: &str, label: &str);

    /// Add a labeled edge. Endpoints that were never added become nodes
    /// labeled with their id.
    fn add_edge(&mut self, source: &str, target: &str, label: &str);

    fn set_rank_dir(&mut self, dir: RankDir);

    /// Flag `id` as the entry point of the machine.
    fn mark_initial(&mut self, _id: &str) {}
}

impl GraphSink for Diagram {
    fn add_node(&mut self, id: &str, label: &str) {
        match self.nodes.get(id) {
            Some(&idx) => self.graph[idx].label = label.to_string(),
            None => {
                let idx = self.graph.add_node(DiagramNode::new(id, label));
                self.nodes.insert(id.to_string(), idx);
            }
        }
    }

    fn add_edge(&mut self, source: &str, target: &str, label: &str) {
        let src = self.ensure_node(source);
        let dst = self.ensure_node(target);
        self.graph.add_edge(src, dst, DiagramEdge::new(label));
    }

    fn set_rank_dir(&mut self, dir: RankDir) {
        self.rank_dir = dir;
    }

    fn mark_initial(&mut self, id: &str) {
        if let Some(prev) = self.initial {
            self.graph[prev].initial = false;
        }
        let idx = self.ensure_node(id);
        self.graph[idx].initial = true;
        self.initial = Some(idx);
    }
}
