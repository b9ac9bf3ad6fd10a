//! Bridge words and bridge-guided text generation.
//!
//! A bridge word `m` between `a` and `b` is one where both `a -> m` and
//! `m -> b` are edges, so "a m b" is a walk the corpus could produce.

use crate::graph::{NodeId, WordGraph};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use wordgraph_core::{normalize, normalize_word};

/// Outcome of a bridge-word query.
///
/// `Display` renders the user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeReport {
    /// `from` has no outgoing edges or `to` is not a node.
    MissingWord { from: String, to: String },
    None { from: String, to: String },
    Found {
        from: String,
        to: String,
        words: Vec<String>,
    },
}

impl BridgeReport {
    /// Bridge words found, empty for the other outcomes.
    pub fn words(&self) -> &[String] {
        match self {
            BridgeReport::Found { words, .. } => words,
            _ => &[],
        }
    }
}

impl fmt::Display for BridgeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeReport::MissingWord { from, to } => {
                write!(f, "No {} or {} in the graph!", from, to)
            }
            BridgeReport::None { from, to } => {
                write!(f, "No bridge words from {} to {}!", from, to)
            }
            BridgeReport::Found { from, to, words } => write!(
                f,
                "The bridge words from {} to {} are: {}.",
                from,
                to,
                words.join(", ")
            ),
        }
    }
}

impl WordGraph {
    /// Looks up the bridge words from `from` to `to`.
    ///
    /// `from` must have outgoing edges while `to` only has to exist as a
    /// node. Results follow the creation order of `from`'s edges.
    pub fn bridge_words(&self, from: &str, to: &str) -> BridgeReport {
        let from = normalize_word(from);
        let to = normalize_word(to);

        let (Some(from_idx), Some(to_idx)) = (self.get_index(&from), self.get_index(&to)) else {
            return BridgeReport::MissingWord { from, to };
        };
        if !self.is_source(&from) {
            return BridgeReport::MissingWord { from, to };
        }

        let words: Vec<String> = self
            .bridges_between(from_idx, to_idx)
            .into_iter()
            .filter_map(|idx| self.word(idx).map(str::to_string))
            .collect();

        if words.is_empty() {
            BridgeReport::None { from, to }
        } else {
            BridgeReport::Found { from, to, words }
        }
    }

    fn bridges_between(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        self.successors(from)
            .into_iter()
            .map(|s| s.node)
            .filter(|&middle| self.has_edge(middle, to))
            .collect()
    }

    /// Rewrites `text`, inserting one random bridge word between each
    /// adjacent pair that has any.
    ///
    /// The input is normalized first, so the output is lowercase and
    /// punctuation-free. Pairs involving unknown words get no bridge.
    pub fn generate_text<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let words = normalize(text);
        let Some(last) = words.last() else {
            return String::new();
        };

        let mut output: Vec<&str> = Vec::with_capacity(words.len() * 2);
        for pair in words.windows(2) {
            output.push(&pair[0]);

            let (Some(from), Some(to)) = (self.get_index(&pair[0]), self.get_index(&pair[1]))
            else {
                continue;
            };
            let bridges = self.bridges_between(from, to);
            if let Some(word) = bridges.choose(rng).and_then(|&idx| self.word(idx)) {
                output.push(word);
            }
        }
        output.push(last);

        output.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const REPORT_CORPUS: &str =
        "carefully analyzed the report. the report was wrote and shared by the scientist.";
    const SCIENTIST_CORPUS: &str = "the scientist analyzed it again carefully analyzed the report";

    #[test]
    fn test_missing_first_word() {
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        assert_eq!(
            graph.bridge_words("hello", "the").to_string(),
            "No hello or the in the graph!"
        );
    }

    #[test]
    fn test_missing_second_word() {
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        assert_eq!(
            graph.bridge_words("the", "hello").to_string(),
            "No the or hello in the graph!"
        );
    }

    #[test]
    fn test_no_bridge_words() {
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        assert_eq!(
            graph.bridge_words("the", "carefully").to_string(),
            "No bridge words from the to carefully!"
        );
    }

    #[test]
    fn test_single_bridge_word() {
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        let report = graph.bridge_words("carefully", "the");
        assert_eq!(
            report.to_string(),
            "The bridge words from carefully to the are: analyzed."
        );
        assert_eq!(report.words(), ["analyzed".to_string()]);
    }

    #[test]
    fn test_bridge_in_scientist_corpus() {
        let graph = GraphBuilder::from_text(SCIENTIST_CORPUS);
        assert_eq!(graph.bridge_words("carefully", "the").words(), ["analyzed"]);
    }

    #[test]
    fn test_query_words_are_normalized() {
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        assert_eq!(
            graph.bridge_words("Carefully", "THE!").to_string(),
            "The bridge words from carefully to the are: analyzed."
        );
    }

    #[test]
    fn test_sink_as_first_word_is_missing() {
        // "scientist" is a node but never precedes anything
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        for to in ["the", "report", "scientist", "nowhere"] {
            assert!(matches!(
                graph.bridge_words("scientist", to),
                BridgeReport::MissingWord { .. }
            ));
        }
    }

    #[test]
    fn test_sink_as_second_word_is_accepted() {
        let graph = GraphBuilder::from_text(REPORT_CORPUS);
        assert_eq!(
            graph.bridge_words("by", "scientist").to_string(),
            "The bridge words from by to scientist are: the."
        );
    }

    #[test]
    fn test_multiple_bridges_keep_edge_order() {
        let graph = GraphBuilder::from_text("a x b a y b a z c");
        assert_eq!(
            graph.bridge_words("a", "b").to_string(),
            "The bridge words from a to b are: x, y."
        );
    }

    #[test]
    fn test_generate_inserts_bridges() {
        let graph = GraphBuilder::from_text(SCIENTIST_CORPUS);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        // each pair has exactly one bridge: scientist, then it
        let output = graph.generate_text("the ANAlyzed, again", &mut rng);
        assert_eq!(output, "the scientist analyzed it again");
    }

    #[test]
    fn test_generated_words_are_bridges() {
        let graph = GraphBuilder::from_text("a x b a y b b q c a w c");
        let input = normalize("a b c");

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let output = graph.generate_text("a b c", &mut rng);
            let words: Vec<&str> = output.split(' ').collect();

            assert_eq!(words.first(), Some(&"a"));
            assert_eq!(words.last(), Some(&"c"));

            let inserted: Vec<usize> = (0..words.len())
                .filter(|&i| !input.iter().any(|w| w == words[i]))
                .collect();
            for i in inserted {
                let left = graph.get_index(words[i - 1]).unwrap();
                let middle = graph.get_index(words[i]).unwrap();
                let right = graph.get_index(words[i + 1]).unwrap();
                assert!(graph.has_edge(left, middle));
                assert!(graph.has_edge(middle, right));
            }
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let graph = GraphBuilder::from_text("a x b a y b a z b");
        let first = graph.generate_text("a b", &mut ChaCha8Rng::seed_from_u64(9));
        let second = graph.generate_text("a b", &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_without_bridges_is_identity() {
        let graph = GraphBuilder::from_text(SCIENTIST_CORPUS);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            graph.generate_text("analyzed it again", &mut rng),
            "analyzed it again"
        );
        assert_eq!(
            graph.generate_text("Unknown WORDS here", &mut rng),
            "unknown words here"
        );
    }

    #[test]
    fn test_generate_single_and_empty() {
        let graph = GraphBuilder::from_text(SCIENTIST_CORPUS);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(graph.generate_text("team", &mut rng), "team");
        assert_eq!(graph.generate_text("", &mut rng), "");
        assert_eq!(graph.generate_text("?!", &mut rng), "");
    }

    #[test]
    fn test_generate_does_not_change_graph() {
        let graph = GraphBuilder::from_text(SCIENTIST_CORPUS);
        let before = graph.edges();
        graph.generate_text("zebra the analyzed", &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(graph.edges(), before);
        assert!(!graph.contains("zebra"));
    }
}
