//! Text normalization.
//!
//! Only ASCII letters survive. Everything else (digits, punctuation,
//! accented letters) acts as a word separator, and the output is lowercase.

/// Splits text into lowercase ASCII-alphabetic tokens, in order.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Normalizes a single query word.
///
/// Unlike [`normalize`], non-letters are dropped rather than turned into
/// separators, so `"don't"` becomes `"dont"`. An input with no letters
/// yields an empty string, which never matches a node.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
