//! Expansion configuration.
//!
//! Handles the year range, the leetspeak table and the candidate limit,
//! plus the environment overrides read by [`ExpandConfig::from_env`].

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::error::WordlistError;

pub const DEFAULT_YEAR_START: u16 = 1980;
pub const DEFAULT_YEAR_END: u16 = 2025;
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000_000;

const MIN_YEAR: u16 = 1000;
const MAX_YEAR: u16 = 9999;

pub const ENV_YEAR_START: &str = "PWD_WORDLIST_YEAR_START";
pub const ENV_YEAR_END: &str = "PWD_WORDLIST_YEAR_END";
pub const ENV_MAX_CANDIDATES: &str = "PWD_WORDLIST_MAX_CANDIDATES";
pub const ENV_WORKERS: &str = "PWD_WORDLIST_WORKERS";

/// Inclusive range of calendar years used for augmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: u16,
    end: u16,
}

impl YearRange {
    /// Creates a range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `start > end` or a bound is not a
    /// four-digit year.
    pub fn new(start: u16, end: u16) -> Result<Self, WordlistError> {
        if start > end {
            return Err(WordlistError::InvalidConfig(format!(
                "year range start {} is after end {}",
                start, end
            )));
        }
        if start < MIN_YEAR || end > MAX_YEAR {
            return Err(WordlistError::InvalidConfig(format!(
                "year range {}-{} is outside {}-{}",
                start, end, MIN_YEAR, MAX_YEAR
            )));
        }
        Ok(YearRange { start, end })
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Expands the range into year tokens.
    ///
    /// Every full year comes first in ascending order, followed by each
    /// distinct two-digit suffix (`1995` -> `95`, `2004` -> `04`).
    pub fn tokens(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let full = (self.start..=self.end).map(|y| y.to_string());
        let short = (self.start..=self.end).map(|y| format!("{:02}", y % 100));
        full.chain(short).filter(|t| seen.insert(t.clone())).collect()
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange {
            start: DEFAULT_YEAR_START,
            end: DEFAULT_YEAR_END,
        }
    }
}

/// Ordered leetspeak table: letter -> substitution variants.
///
/// Only the first variant of each letter is ever applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeetMap {
    entries: Vec<(char, Vec<String>)>,
}

impl LeetMap {
    /// Builds a table from `(letter, variants)` pairs.
    ///
    /// Letters are lowercased; letters without variants and repeated
    /// letters after the first occurrence are dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, Vec<S>)>,
        S: Into<String>,
    {
        let mut table: Vec<(char, Vec<String>)> = Vec::new();
        for (letter, variants) in entries {
            let letter = lower_char(letter);
            let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
            if variants.is_empty() || table.iter().any(|(l, _)| *l == letter) {
                continue;
            }
            table.push((letter, variants));
        }
        LeetMap { entries: table }
    }

    /// The substitution for `c`, matching the letter in either case.
    pub fn substitution(&self, c: char) -> Option<&str> {
        let key = lower_char(c);
        self.entries
            .iter()
            .find(|(letter, _)| *letter == key)
            .and_then(|(_, variants)| variants.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LeetMap {
    fn default() -> Self {
        LeetMap::from_entries([
            ('a', vec!["4", "@"]),
            ('e', vec!["3"]),
            ('i', vec!["1", "!"]),
            ('o', vec!["0"]),
            ('s', vec!["5", "$"]),
            ('t', vec!["7", "+"]),
            ('l', vec!["1", "|"]),
        ])
    }
}

/// Lowercases a char when its lowercase form is a single char.
fn lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Configuration consumed by the expansion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    pub year_range: YearRange,
    pub leet_map: LeetMap,
    /// Hard cap on the candidate set size. `None` disables the check.
    pub max_candidates: Option<usize>,
    /// Worker count for the partitioned year stage (async only).
    pub workers: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        ExpandConfig {
            year_range: YearRange::default(),
            leet_map: LeetMap::default(),
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            workers: default_workers(),
        }
    }
}

impl ExpandConfig {
    /// Builds a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_WORDLIST_YEAR_START` / `PWD_WORDLIST_YEAR_END` (default 1980 / 2025)
    /// - `PWD_WORDLIST_MAX_CANDIDATES`, `0` disables the cap (default 10,000,000)
    /// - `PWD_WORDLIST_WORKERS` (default: available parallelism)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a variable is set but cannot be parsed,
    /// or the resulting year range is invalid.
    pub fn from_env() -> Result<Self, WordlistError> {
        let start = env_var::<u16>(ENV_YEAR_START)?.unwrap_or(DEFAULT_YEAR_START);
        let end = env_var::<u16>(ENV_YEAR_END)?.unwrap_or(DEFAULT_YEAR_END);
        let max_candidates = match env_var::<usize>(ENV_MAX_CANDIDATES)? {
            Some(0) => None,
            Some(limit) => Some(limit),
            None => Some(DEFAULT_MAX_CANDIDATES),
        };
        let workers = match env_var::<usize>(ENV_WORKERS)? {
            Some(0) => {
                return Err(WordlistError::InvalidConfig(format!(
                    "{} must be at least 1",
                    ENV_WORKERS
                )));
            }
            Some(n) => n,
            None => default_workers(),
        };

        let config = ExpandConfig {
            year_range: YearRange::new(start, end)?,
            leet_map: LeetMap::default(),
            max_candidates,
            workers,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("Expand config loaded from environment: {:?}", config);

        Ok(config)
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn env_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>, WordlistError> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            WordlistError::InvalidConfig(format!("{} has invalid value {:?}", key, value))
        }),
        Err(_) => Ok(None),
    }
}
