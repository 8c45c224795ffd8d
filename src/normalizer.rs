//! Input normalizer - turns raw seed text into base words.

use secrecy::{ExposeSecret, SecretString};

use crate::candidates::BaseWord;
use crate::error::WordlistError;

/// Splits raw seed text on newlines and commas into trimmed base words.
///
/// Order of first appearance is preserved. Repeated seeds are kept as-is,
/// the candidate set collapses them later.
///
/// # Errors
///
/// Returns `EmptyInput` if no non-blank piece remains.
pub fn normalize(raw: &SecretString) -> Result<Vec<BaseWord>, WordlistError> {
    let words: Vec<BaseWord> = raw
        .expose_secret()
        .split(['\n', ','])
        .filter_map(BaseWord::new)
        .collect();

    if words.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Normalization FAILED: no seed words in input");
        return Err(WordlistError::EmptyInput);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Normalized {} seed words", words.len());

    Ok(words)
}
