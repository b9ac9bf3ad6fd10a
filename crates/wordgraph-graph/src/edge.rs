//! Edge types for the word graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weighted edge between two words, detached from the graph.
///
/// Used for adjacency listings and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEdge {
    pub source: String,
    pub target: String,
    /// How many times `target` immediately followed `source`.
    pub weight: u32,
}

impl fmt::Display for WordEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [weight={}]", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_line_format() {
        let edge = WordEdge {
            source: "the".into(),
            target: "report".into(),
            weight: 2,
        };
        assert_eq!(edge.to_string(), "the -> report [weight=2]");
    }
}
