use thiserror::Error;

/// Failures reported by graph queries.
///
/// The `Display` strings are what the CLI shows to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("{0} not in graph!")]
    NodeNotFound(String),

    #[error("No path from {from} to {to}.")]
    NoPath { from: String, to: String },

    #[error("The graph is empty.")]
    EmptyGraph,
}
