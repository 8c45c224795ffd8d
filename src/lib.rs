//! Personalised wordlist generation library
//!
//! This library expands a handful of seed strings (names, dates, pet
//! names, favourite words) into a candidate-password dictionary for
//! offline password auditing.
//!
//! The pipeline runs in a fixed order:
//! normalize -> permutations -> leetspeak -> years -> sorted export.
//!
//! # Features
//!
//! - `async` (default): Enables the partitioned async pipeline with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`ExpandConfig::from_env`]:
//!
//! - `PWD_WORDLIST_YEAR_START` / `PWD_WORDLIST_YEAR_END`: year range (default: 1980-2025)
//! - `PWD_WORDLIST_MAX_CANDIDATES`: candidate cap, `0` disables it (default: 10,000,000)
//! - `PWD_WORDLIST_WORKERS`: year stage workers (default: available parallelism)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_wordlist::{generate_and_export, ExpandConfig};
//! use secrecy::SecretString;
//!
//! let config = ExpandConfig::from_env().expect("Invalid wordlist configuration");
//! let seeds = SecretString::new("Jsmith\nSparky, 1995\nSummer".to_string().into());
//!
//! let count = generate_and_export(&seeds, "custom_attack_list.txt", &config)
//!     .expect("Failed to generate wordlist");
//! println!("Wordlist created with {} entries", count);
//! ```

// Internal modules
mod candidates;
mod config;
mod error;
mod exporter;
mod generator;
mod normalizer;
mod stages;

// Public API
pub use candidates::{BaseWord, CandidateSet};
pub use config::{
    ExpandConfig, LeetMap, YearRange, DEFAULT_MAX_CANDIDATES, DEFAULT_YEAR_END,
    DEFAULT_YEAR_START, ENV_MAX_CANDIDATES, ENV_WORKERS, ENV_YEAR_END, ENV_YEAR_START,
};
pub use error::WordlistError;
pub use exporter::export;
pub use generator::{expand, generate_and_export};
pub use normalizer::normalize;
pub use stages::{
    augment_years, leet_substitute, leetify, permutations, permute, reverse, title_case,
    StageResult,
};

#[cfg(feature = "async")]
pub use generator::{expand_async, generate_and_export_async, generate_and_export_tx};
