//! Candidate password wordlist generation from biographical data.
//!
//! A subject [`Record`] expands into a candidate set through deterministic
//! string transformations (case and reversal shapes, full and partial
//! leetspeak, special-character padding, pairwise concatenation), optionally
//! filtered against a complexity [`Policy`]. Generation and filtering are
//! pure functions; all I/O lives at the module boundaries (`input`,
//! `writer`, `config`).

pub mod config;
pub mod error;
pub mod generate;
pub mod input;
pub mod io_utils;
pub mod policy;
pub mod record;
pub mod stats;
pub mod transform;
pub mod writer;

pub use config::FileConfig;
pub use error::PassgasError;
pub use generate::{generate_candidates, GenParams, DEFAULT_SPECIAL_CHARS};
pub use policy::{filter_candidates, meets_policy, Policy};
pub use record::Record;
pub use stats::RunStats;
pub use transform::{
    case_and_reverse_variants, leet_variants, special_char_variants, LeetMap,
};
