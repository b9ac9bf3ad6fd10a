//! Core graph data structure.
//!
//! WordGraph wraps a petgraph `DiGraph` whose nodes are words and whose
//! edge weights count adjacent occurrences, plus a word index for lookups.
//!
//! Nothing is ever removed, so petgraph indexes double as creation order:
//! lower `NodeIndex` means the word was seen earlier, lower `EdgeIndex`
//! means the edge was created earlier. Every ordered query relies on this.

use crate::edge::WordEdge;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a word in the graph.
pub type NodeId = NodeIndex;

/// Unique identifier for an edge in the graph.
pub type EdgeId = EdgeIndex;

/// One outgoing edge of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    pub edge: EdgeId,
    pub node: NodeId,
    pub weight: u32,
}

/// The word adjacency graph.
///
/// Built once by [`GraphBuilder`](crate::GraphBuilder) and read-only
/// afterwards; there are no public mutators.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<String, u32>,

    /// Maps words to graph node indexes.
    word_index: HashMap<String, NodeId>,
}

impl WordGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `word`, creating it on first sight.
    fn intern(&mut self, word: &str) -> NodeId {
        if let Some(&index) = self.word_index.get(word) {
            return index;
        }
        let index = self.graph.add_node(word.to_string());
        self.word_index.insert(word.to_string(), index);
        index
    }

    /// Records one occurrence of `to` immediately following `from`.
    pub(crate) fn record_pair(&mut self, from: &str, to: &str) {
        let from = self.intern(from);
        let to = self.intern(to);

        match self.graph.find_edge(from, to) {
            Some(edge) => self.graph[edge] += 1,
            None => {
                self.graph.add_edge(from, to, 1);
            }
        }
    }

    /// Gets the node index for a word.
    pub fn get_index(&self, word: &str) -> Option<NodeId> {
        self.word_index.get(word).copied()
    }

    /// Gets the word stored at a node index.
    pub fn word(&self, index: NodeId) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    /// Whether the word is a node (as source or destination).
    pub fn contains(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Whether the word has at least one outgoing edge.
    pub fn is_source(&self, word: &str) -> bool {
        self.get_index(word)
            .map(|index| self.graph.edges(index).next().is_some())
            .unwrap_or(false)
    }

    /// Outgoing edges of a node, in the order they were created.
    pub fn successors(&self, index: NodeId) -> Vec<Successor> {
        let mut successors: Vec<Successor> = self
            .graph
            .edges(index)
            .map(|edge_ref| Successor {
                edge: edge_ref.id(),
                node: edge_ref.target(),
                weight: *edge_ref.weight(),
            })
            .collect();

        // petgraph walks adjacency lists newest-first
        successors.sort_by_key(|s| s.edge);
        successors
    }

    /// Weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.graph.find_edge(from, to).is_some()
    }

    /// Sum of a node's outgoing edge weights.
    pub fn out_weight(&self, index: NodeId) -> u64 {
        self.graph
            .edges(index)
            .map(|edge_ref| u64::from(*edge_ref.weight()))
            .sum()
    }

    /// Total weight of a path given as words.
    ///
    /// Returns `None` if any consecutive pair is not an edge.
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S]) -> Option<u64> {
        path.windows(2).try_fold(0u64, |total, pair| {
            let from = self.get_index(pair[0].as_ref())?;
            let to = self.get_index(pair[1].as_ref())?;
            Some(total + u64::from(self.weight(from, to)?))
        })
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterates over all node indexes, oldest first.
    pub fn node_indexes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    /// Iterates over all words, oldest first.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// All edges grouped by source (oldest source first), each group in
    /// creation order.
    pub fn edges(&self) -> Vec<WordEdge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for index in self.node_indexes() {
            let source = &self.graph[index];
            for successor in self.successors(index) {
                edges.push(WordEdge {
                    source: source.clone(),
                    target: self.graph[successor.node].clone(),
                    weight: successor.weight,
                });
            }
        }
        edges
    }

    /// Adjacency listing, one `"{src} -> {dst} [weight={w}]"` line per edge.
    pub fn adjacency_lines(&self) -> Vec<String> {
        self.edges().iter().map(ToString::to_string).collect()
    }
}

/// Graph statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Sum of all edge weights, i.e. the number of adjacent pairs seen.
    pub total_weight: u64,
}

impl WordGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_weight: self
                .graph
                .edge_weights()
                .map(|&w| u64::from(w))
                .sum(),
        }
    }
}
