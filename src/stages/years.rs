//! Year stage - appends and prepends year tokens to candidate words.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::StageResult;
use crate::candidates::CandidateSet;
use crate::config::YearRange;
use crate::error::WordlistError;

/// Words of this many chars or fewer are never augmented.
const MIN_WORD_LEN: usize = 2;

/// Adds `word + year` and `year + word` for every word longer than two
/// chars and every token of `years`. The incoming words are kept.
pub fn augment_years(set: CandidateSet, years: &YearRange, limit: Option<usize>) -> StageResult {
    let tokens = years.tokens();
    let resident = AtomicUsize::new(0);
    let added = augment_partition(&set, &tokens, 0, 1, limit, &resident, || Ok(()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Year stage: {} candidates + {} year variants ({} tokens)",
        set.len(),
        added.len(),
        tokens.len()
    );

    let mut out = set;
    out.merge_bounded(added, limit)?;
    Ok(out)
}

/// Augments the words of `set` whose iteration index is congruent to
/// `partition` modulo `partitions`.
///
/// Only entries missing from `set` are returned, so the caller merges the
/// partitions back into `set`. Iteration order of an unmodified set is
/// stable, which keeps the partitions disjoint. `checkpoint` runs before
/// each word and aborts the partition on error.
///
/// `resident` counts the additions held by every partition sharing it.
/// A slot is reserved before each insert, so `set.len() + resident` never
/// exceeds `limit`. Entries produced by two partitions are counted twice.
pub(crate) fn augment_partition<F>(
    set: &CandidateSet,
    tokens: &[String],
    partition: usize,
    partitions: usize,
    limit: Option<usize>,
    resident: &AtomicUsize,
    checkpoint: F,
) -> StageResult
where
    F: Fn() -> Result<(), WordlistError>,
{
    let mut added = CandidateSet::new();

    for word in set.iter().skip(partition).step_by(partitions.max(1)) {
        checkpoint()?;

        if word.chars().count() <= MIN_WORD_LEN {
            continue;
        }

        for year in tokens {
            for candidate in [format!("{}{}", word, year), format!("{}{}", year, word)] {
                if set.contains(&candidate) || added.contains(&candidate) {
                    continue;
                }
                reserve(resident, set.len(), limit)?;
                added.insert(candidate);
            }
        }
    }

    Ok(added)
}

/// Claims one slot of the shared addition budget.
fn reserve(resident: &AtomicUsize, base: usize, limit: Option<usize>) -> Result<(), WordlistError> {
    let Some(limit) = limit else {
        resident.fetch_add(1, Ordering::Relaxed);
        return Ok(());
    };
    resident
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| {
            (base + n < limit).then_some(n + 1)
        })
        .map(|_| ())
        .map_err(|_| WordlistError::CandidateLimitExceeded { limit })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: u16) -> YearRange {
        YearRange::new(y, y).unwrap()
    }

    #[test]
    fn test_augment_single_year() {
        let set: CandidateSet = ["test"].into_iter().collect();
        let out = augment_years(set, &year(1995), None).unwrap();

        for expected in ["test", "test1995", "1995test", "test95", "95test"] {
            assert!(out.contains(expected), "missing {}", expected);
        }
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_augment_skips_short_words() {
        let set: CandidateSet = ["ab", "x", "abc"].into_iter().collect();
        let out = augment_years(set, &year(2000), None).unwrap();

        assert!(!out.contains("ab2000"));
        assert!(!out.contains("00x"));
        assert!(out.contains("abc2000"));
        assert!(out.contains("00abc"));
        assert_eq!(out.len(), 3 + 4);
    }

    #[test]
    fn test_augment_counts_chars_not_bytes() {
        // two chars, four bytes
        let set: CandidateSet = ["éé"].into_iter().collect();
        let out = augment_years(set, &year(1999), None).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_augment_growth_bound() {
        let set: CandidateSet = ["sparky", "Sparky", "ykraps", "99"].into_iter().collect();
        let range = YearRange::new(1990, 1999).unwrap();
        let tokens = range.tokens().len();
        let out = augment_years(set, &range, None).unwrap();

        assert_eq!(tokens, 20);
        assert!(out.len() <= 4 + 3 * tokens * 2);
        assert_eq!(out.len(), 4 + 3 * tokens * 2);
    }

    #[test]
    fn test_augment_existing_entries_not_duplicated() {
        let set: CandidateSet = ["cat", "cat95"].into_iter().collect();
        let out = augment_years(set, &year(1995), None).unwrap();
        assert!(out.contains("cat95"));
        // cat95 also gets its own augmentations
        assert!(out.contains("cat9595"));
    }

    #[test]
    fn test_augment_respects_limit() {
        let set: CandidateSet = ["summer"].into_iter().collect();
        let result = augment_years(set, &YearRange::default(), Some(50));
        assert!(matches!(
            result,
            Err(WordlistError::CandidateLimitExceeded { limit: 50 })
        ));
    }

    #[test]
    fn test_partitions_cover_every_word() {
        let set: CandidateSet = ["alpha", "bravo", "charlie", "delta", "echo"]
            .into_iter()
            .collect();
        let tokens = year(2001).tokens();

        let mut merged = CandidateSet::new();
        for p in 0..3 {
            let part = augment_partition(&set, &tokens, p, 3, None, &AtomicUsize::new(0), || Ok(()))
                .unwrap();
            merged.merge_bounded(part, None).unwrap();
        }

        let whole =
            augment_partition(&set, &tokens, 0, 1, None, &AtomicUsize::new(0), || Ok(())).unwrap();
        assert_eq!(merged, whole);
        assert_eq!(whole.len(), 5 * 4);
    }

    #[test]
    fn test_partitions_share_limit() {
        let set: CandidateSet = ["jsmith", "sparky", "summer", "mittens", "rosebud", "kensington"]
            .into_iter()
            .collect();
        let tokens = YearRange::default().tokens();
        let limit = set.len() + 500;
        let resident = AtomicUsize::new(0);

        // parts stay alive together, as they do while workers run
        let parts: Vec<StageResult> = (0..8)
            .map(|p| augment_partition(&set, &tokens, p, 8, Some(limit), &resident, || Ok(())))
            .collect();

        let held: usize = parts.iter().flatten().map(CandidateSet::len).sum();
        assert!(set.len() + held <= limit, "{} additions held", held);
        assert!(set.len() + resident.load(Ordering::Relaxed) <= limit);
        assert!(parts.iter().any(|p| matches!(
            p,
            Err(WordlistError::CandidateLimitExceeded { limit: l }) if *l == limit
        )));
    }

    #[test]
    fn test_partition_stops_at_checkpoint() {
        use std::cell::Cell;

        let set: CandidateSet = ["alpha", "bravo", "charlie", "delta"].into_iter().collect();
        let tokens = year(2001).tokens();
        let calls = Cell::new(0);

        let result = augment_partition(&set, &tokens, 0, 1, None, &AtomicUsize::new(0), || {
            calls.set(calls.get() + 1);
            if calls.get() > 2 {
                Err(WordlistError::InvalidConfig("stop".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }
}
