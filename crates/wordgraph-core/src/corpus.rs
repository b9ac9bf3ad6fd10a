//! Corpus loading.

use crate::error::{CoreError, Result};
use crate::normalize::normalize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a UTF-8 text file and returns its normalized token stream.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the file cannot be read and
/// [`CoreError::EmptyInput`] if it contains no words.
pub fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;
    let tokens = normalize(&text);

    if tokens.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    debug!("Loaded {} tokens from {}", tokens.len(), path.display());
    Ok(tokens)
}
