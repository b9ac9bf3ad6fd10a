//! Plain-data export for external renderers.
//!
//! The graph is drawn elsewhere; this module only hands out the structure
//! plus any paths to highlight, each tagged with an id the renderer can map
//! to a color.

use crate::edge::WordEdge;
use crate::graph::{GraphStats, WordGraph};
use serde::{Deserialize, Serialize};

/// A path the renderer should draw on top of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedPath {
    /// Stable per-export id, starting at 1.
    pub id: usize,
    pub nodes: Vec<String>,
}

/// Graph snapshot for visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub version: String,
    pub stats: GraphStats,
    pub nodes: Vec<String>,
    pub edges: Vec<WordEdge>,
    pub paths: Vec<HighlightedPath>,
}

impl GraphExport {
    pub fn new(graph: &WordGraph) -> Self {
        Self {
            version: "1.0".to_string(),
            stats: graph.stats(),
            nodes: graph.words().map(str::to_string).collect(),
            edges: graph.edges(),
            paths: Vec::new(),
        }
    }

    /// Adds paths to highlight, numbering them after any already present.
    pub fn with_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        for nodes in paths {
            let id = self.paths.len() + 1;
            self.paths.push(HighlightedPath { id, nodes });
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
