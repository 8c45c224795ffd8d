//! Expansion stages
//!
//! Each stage takes the previous candidate set and returns a superset.

mod leet;
mod permutation;
mod years;

pub use leet::{leet_substitute, leetify};
pub use permutation::{permutations, permute, reverse, title_case};
pub use years::augment_years;

#[cfg(feature = "async")]
pub(crate) use years::augment_partition;

use crate::candidates::CandidateSet;
use crate::error::WordlistError;

/// Result type for stage functions.
/// - `Ok(set)` - the grown candidate set
/// - `Err(CandidateLimitExceeded)` - the configured cap was hit
pub type StageResult = Result<CandidateSet, WordlistError>;
