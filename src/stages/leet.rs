//! Leet stage - single-pass leetspeak substitution.

use super::permutation::{reverse, title_case};
use super::StageResult;
use crate::candidates::{check_limit, CandidateSet};
use crate::config::LeetMap;

/// Adds the leetspeak variant of every word currently in `set`.
///
/// Words are read from the incoming set only, so output of this pass is
/// never substituted again. For each word that changes, the leet word,
/// its title-cased form and its reversal are added.
pub fn leetify(set: CandidateSet, map: &LeetMap, limit: Option<usize>) -> StageResult {
    let mut added = CandidateSet::new();

    for word in set.iter() {
        let Some(leet) = leet_substitute(word, map) else {
            continue;
        };
        let titled = title_case(&leet);
        let reversed = reverse(&leet);
        for variant in [leet, titled, reversed] {
            if !set.contains(&variant) && added.insert(variant) {
                check_limit(set.len() + added.len(), limit)?;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Leet stage: {} candidates + {} leet variants", set.len(), added.len());

    let mut out = set;
    out.merge_bounded(added, limit)?;
    Ok(out)
}

/// Replaces every mapped letter of `word` with its first substitution.
///
/// Returns `None` when the word has no mapped letter.
pub fn leet_substitute(word: &str, map: &LeetMap) -> Option<String> {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match map.substitution(c) {
            Some(sub) => out.push_str(sub),
            None => out.push(c),
        }
    }
    (out != word).then_some(out)
}
