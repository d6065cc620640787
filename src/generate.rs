//! Candidate generation: the transformation closure over a record's words.

use std::collections::HashSet;

use crate::record::Record;
use crate::transform::{case_and_reverse_variants, leet_variants, special_char_variants, LeetMap};

/// The 30 symbols used for padding by default.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>?/\\|";

/// Generation parameters. There is no process-wide default state; callers
/// own the configuration and pass it in explicitly.
#[derive(Debug, Clone)]
pub struct GenParams {
    /// Upper bound on repeated special characters per padding sequence.
    /// The dominant cost driver: alphabet size `A` and bound `R` yield on
    /// the order of `2 * R * A^R` padded variants per word. The defaults
    /// (A = 30, R = 3) produce tens of thousands of strings per word.
    pub max_special_repeats: usize,
    /// Leetspeak substitution table.
    pub leet_map: LeetMap,
    /// Padding alphabet, in enumeration order.
    pub special_chars: Vec<char>,
    /// Hard cap on the per-record candidate count. `None` means unbounded.
    pub candidate_cap: Option<usize>,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            max_special_repeats: 3,
            leet_map: LeetMap::default(),
            special_chars: DEFAULT_SPECIAL_CHARS.chars().collect(),
            candidate_cap: None,
        }
    }
}

/// Expand a record into its full candidate set.
///
/// Every base word goes through case/reverse variants, then the leetspeak
/// closure of those, then special-character padding of everything. Each
/// distinct unordered pair of base words is also concatenated (in sorted
/// order) and fed through the leet and padding steps only; pairs skip the
/// case/reverse step on purpose.
///
/// The result is a pure function of the base word set and the parameters:
/// identical inputs always produce identical sets.
pub fn generate_candidates(record: &Record, params: &GenParams) -> HashSet<String> {
    // Sorted so that pair concatenation order is deterministic.
    let mut words: Vec<String> = record.base_words().into_iter().collect();
    words.sort();

    let mut candidates = HashSet::new();

    for word in &words {
        let mut closure: HashSet<String> = HashSet::new();
        for shaped in case_and_reverse_variants(word) {
            closure.extend(leet_variants(&shaped, &params.leet_map));
        }
        // Pad in sorted order so that a cap cuts the expansion off at the
        // same point on every run.
        let mut members: Vec<&String> = closure.iter().collect();
        members.sort();
        for variant in members {
            special_char_variants(
                variant,
                &params.special_chars,
                params.max_special_repeats,
                params.candidate_cap,
                &mut candidates,
            );
        }
        candidates.extend(closure);
    }

    for (i, a) in words.iter().enumerate() {
        for b in &words[i + 1..] {
            let combined = format!("{a}{b}");
            candidates.extend(leet_variants(&combined, &params.leet_map));
            special_char_variants(
                &combined,
                &params.special_chars,
                params.max_special_repeats,
                params.candidate_cap,
                &mut candidates,
            );
        }
    }

    if let Some(cap) = params.candidate_cap {
        // Leet closures above may overshoot by a handful; trim back
        // deterministically on the sorted view.
        if candidates.len() > cap {
            let mut sorted: Vec<String> = candidates.into_iter().collect();
            sorted.sort();
            sorted.truncate(cap);
            candidates = sorted.into_iter().collect();
        }
    }

    candidates
}
