//! Wordgraph Core - text handling for the word graph
//!
//! This crate turns raw text into the token stream the graph is built
//! from. It also owns corpus loading and the analysis configuration,
//! so the graph crate never touches the filesystem.
//!
//! # Example
//!
//! ```
//! use wordgraph_core::normalize;
//!
//! let tokens = normalize("The report, the REPORT!");
//! assert_eq!(tokens, vec!["the", "report", "the", "report"]);
//! ```

mod config;
mod corpus;
mod error;
mod normalize;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use corpus::load_corpus;
pub use error::{CoreError, Result};
pub use normalize::{normalize, normalize_word};
