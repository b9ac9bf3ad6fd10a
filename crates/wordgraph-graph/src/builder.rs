//! Graph builder for constructing the word graph from token streams.
//!
//! The builder owns the graph while it is mutable. Once `build` hands it
//! out, the graph can no longer change.

use crate::graph::WordGraph;
use tracing::debug;
use wordgraph_core::normalize;

/// Builds a WordGraph from normalized tokens.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: WordGraph,
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every adjacent pair of a token sequence.
    ///
    /// Pairs never span two calls, so separate documents can be fed one
    /// at a time without linking the last word of one to the first of the
    /// next.
    pub fn add_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) -> &mut Self {
        for pair in tokens.windows(2) {
            self.graph.record_pair(pair[0].as_ref(), pair[1].as_ref());
        }
        self
    }

    /// Normalizes raw text and adds its tokens.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        let tokens = normalize(text);
        self.add_tokens(&tokens)
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> WordGraph {
        debug!(
            "Built word graph: {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }

    /// Builds a graph from a single token sequence.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> WordGraph {
        let mut builder = Self::new();
        builder.add_tokens(tokens);
        builder.build()
    }

    /// Builds a graph from raw text.
    pub fn from_text(text: &str) -> WordGraph {
        let mut builder = Self::new();
        builder.add_text(text);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_counts_pairs() {
        let graph = GraphBuilder::from_text("the report the report was");

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.adjacency_lines(),
            vec![
                "the -> report [weight=2]",
                "report -> the [weight=1]",
                "report -> was [weight=1]",
            ]
        );
    }

    #[test]
    fn test_zero_or_one_token_is_empty() {
        let none: [&str; 0] = [];
        assert!(GraphBuilder::from_tokens(&none).is_empty());

        let single = GraphBuilder::from_tokens(&["alone"]);
        assert_eq!(single.node_count(), 0);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = "carefully analyzed the report the report was wrote and shared by the scientist";
        let first = GraphBuilder::from_text(text);
        let second = GraphBuilder::from_text(text);

        assert_eq!(first.edges(), second.edges());
        assert_eq!(
            first.words().collect::<Vec<_>>(),
            second.words().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_pairs_do_not_span_calls() {
        let mut builder = GraphBuilder::new();
        builder.add_text("alpha beta").add_text("gamma delta");
        let graph = builder.build();

        let beta = graph.get_index("beta").unwrap();
        let gamma = graph.get_index("gamma").unwrap();
        assert!(!graph.has_edge(beta, gamma));
        assert_eq!(graph.edge_count(), 2);
    }
}
