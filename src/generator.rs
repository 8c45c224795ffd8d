//! Wordlist generator - runs the expansion pipeline end to end.

use std::path::Path;

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::path::PathBuf;
#[cfg(feature = "async")]
use std::sync::atomic::AtomicUsize;
#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;
#[cfg(feature = "async")]
use tokio::task::JoinSet;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::candidates::{BaseWord, CandidateSet};
use crate::config::ExpandConfig;
use crate::error::WordlistError;
use crate::exporter::export;
use crate::normalizer::normalize;
use crate::stages::{augment_years, leetify, permute, StageResult};

#[cfg(feature = "async")]
use crate::stages::augment_partition;

fn leet_stage(set: CandidateSet, config: &ExpandConfig) -> StageResult {
    leetify(set, &config.leet_map, config.max_candidates)
}

fn year_stage(set: CandidateSet, config: &ExpandConfig) -> StageResult {
    augment_years(set, &config.year_range, config.max_candidates)
}

/// Expands base words into the full candidate set.
///
/// Runs permutation, leetspeak and year augmentation in that order. The
/// result depends only on `base` and `config`.
///
/// # Errors
///
/// Returns `CandidateLimitExceeded` if the set grows past
/// `config.max_candidates`.
pub fn expand(base: &[BaseWord], config: &ExpandConfig) -> Result<CandidateSet, WordlistError> {
    let mut set = permute(base, config.max_candidates)?;

    // Orchestrator: execute stages in sequence
    let stages: Vec<(&str, fn(CandidateSet, &ExpandConfig) -> StageResult)> =
        vec![("leet", leet_stage), ("years", year_stage)];

    for (stage_name, stage_fn) in stages {
        set = match stage_fn(set, config) {
            Ok(set) => set,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Expansion stage {} FAILED: {}", stage_name, e);
                return Err(e);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!("Stage {} done: {} candidates", stage_name, set.len());
        #[cfg(not(feature = "tracing"))]
        let _ = stage_name;
    }

    Ok(set)
}

/// Normalizes `raw`, expands it and exports the result to `dest`.
///
/// Returns the number of entries written.
///
/// # Errors
///
/// - `EmptyInput` before any expansion if `raw` holds no seed words
/// - `CandidateLimitExceeded` if the configured cap is hit
/// - `Io` if the wordlist cannot be written
pub fn generate_and_export<P: AsRef<Path>>(
    raw: &SecretString,
    dest: P,
    config: &ExpandConfig,
) -> Result<usize, WordlistError> {
    let base = normalize(raw)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Generating wordlist from {} seed words", base.len());

    let set = expand(&base, config)?;
    export(&set, dest)
}

#[cfg(feature = "async")]
fn ensure_active(token: &CancellationToken) -> Result<(), WordlistError> {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Wordlist generation cancelled");
        return Err(WordlistError::Cancelled);
    }
    Ok(())
}

/// Async version of [`expand`].
///
/// The year stage is split across `config.workers` blocking tasks, each
/// building its own set of additions over a shared read-only snapshot.
/// The additions are merged once every worker is done, so the result is
/// identical to [`expand`]. Workers draw from one shared addition budget,
/// so memory stays within `config.max_candidates`, and the first failing
/// worker cancels the others.
///
/// # Errors
///
/// Besides the errors of [`expand`], returns `Cancelled` if `token` fires
/// before the set is complete and `Worker` if a worker task panics.
#[cfg(feature = "async")]
pub async fn expand_async(
    base: Vec<BaseWord>,
    config: ExpandConfig,
    token: CancellationToken,
) -> Result<CandidateSet, WordlistError> {
    let limit = config.max_candidates;
    let workers = config.workers.max(1);

    ensure_active(&token)?;
    let set = permute(&base, limit)?;
    ensure_active(&token)?;
    let set = leetify(set, &config.leet_map, limit)?;
    ensure_active(&token)?;

    let shared = Arc::new(set);
    let tokens: Arc<[String]> = config.year_range.tokens().into();
    let resident = Arc::new(AtomicUsize::new(0));
    let worker_token = token.child_token();

    let mut workers_set = JoinSet::new();
    for partition in 0..workers {
        let shared = Arc::clone(&shared);
        let tokens = Arc::clone(&tokens);
        let resident = Arc::clone(&resident);
        let worker_token = worker_token.clone();
        workers_set.spawn_blocking(move || {
            augment_partition(&shared, &tokens, partition, workers, limit, &resident, || {
                ensure_active(&worker_token)
            })
        });
    }

    let mut parts = Vec::with_capacity(workers);
    while let Some(joined) = workers_set.join_next().await {
        let outcome = match joined {
            Ok(result) => result,
            Err(e) => Err(WordlistError::from(e)),
        };
        match outcome {
            Ok(part) => parts.push(part),
            Err(e) => {
                // stop the remaining workers
                worker_token.cancel();
                #[cfg(feature = "tracing")]
                tracing::error!("Year stage worker FAILED: {}", e);
                return Err(e);
            }
        }
    }

    let mut set = Arc::try_unwrap(shared).unwrap_or_else(|shared| (*shared).clone());
    for part in parts {
        set.merge_bounded(part, limit)?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Year stage done on {} workers: {} candidates", workers, set.len());

    Ok(set)
}

/// Async version of [`generate_and_export`]. The file write runs on the
/// blocking pool.
#[cfg(feature = "async")]
pub async fn generate_and_export_async(
    raw: &SecretString,
    dest: PathBuf,
    config: ExpandConfig,
    token: CancellationToken,
) -> Result<usize, WordlistError> {
    let base = normalize(raw)?;
    let set = expand_async(base, config, token.clone()).await?;
    ensure_active(&token)?;

    tokio::task::spawn_blocking(move || export(&set, &dest)).await?
}

/// Runs [`generate_and_export_async`] and sends the outcome via channel.
#[cfg(feature = "async")]
pub async fn generate_and_export_tx(
    raw: &SecretString,
    dest: PathBuf,
    config: ExpandConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Result<usize, WordlistError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("wordlist generation is about to start...");

    let outcome = generate_and_export_async(raw, dest, config, token).await;

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send wordlist generation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
