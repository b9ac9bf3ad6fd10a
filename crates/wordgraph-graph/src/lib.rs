//! Wordgraph Graph - word adjacency graph and its analyses
//!
//! This crate builds a weighted directed graph where an edge `a -> b`
//! counts how often `b` immediately follows `a` in a corpus, then answers
//! questions about it: bridge words, shortest paths, PageRank and random
//! walks.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a word index for lookups.
//! Node and edge indexes follow creation order, which every query uses
//! to keep its output deterministic. Once built, the graph is read-only.
//!
//! # Example
//!
//! ```
//! use wordgraph_graph::GraphBuilder;
//!
//! let graph = GraphBuilder::from_text("carefully analyzed the report");
//!
//! let report = graph.bridge_words("carefully", "the");
//! assert_eq!(
//!     report.to_string(),
//!     "The bridge words from carefully to the are: analyzed."
//! );
//! ```

mod bridge;
mod builder;
mod edge;
mod error;
mod export;
mod graph;
mod paths;
mod ranking;
mod walk;

pub use bridge::BridgeReport;
pub use builder::GraphBuilder;
pub use edge::WordEdge;
pub use error::GraphError;
pub use export::{GraphExport, HighlightedPath};
pub use graph::{EdgeId, GraphStats, NodeId, Successor, WordGraph};
pub use paths::{PathSet, ShortestPath};
pub use ranking::{compute_page_rank, PageRankScores, RankConfig};
pub use walk::{RandomWalk, Step, WalkEnd};
