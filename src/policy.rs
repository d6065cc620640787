//! Complexity policy applied to generated candidates.

use serde::Deserialize;
use std::collections::HashSet;

/// Password acceptance rules. All enabled checks must pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_numeric: bool,
    pub require_special: bool,
}

impl Policy {
    /// True when every check is disabled, i.e. filtering is the identity.
    pub fn is_permissive(&self) -> bool {
        self.min_length == 0
            && !self.require_uppercase
            && !self.require_numeric
            && !self.require_special
    }
}

/// Check one candidate against the policy. Length is measured in characters
/// and "special" means membership in `special_chars`.
pub fn meets_policy(password: &str, policy: &Policy, special_chars: &[char]) -> bool {
    if password.chars().count() < policy.min_length {
        return false;
    }
    if policy.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
        return false;
    }
    if policy.require_numeric && !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if policy.require_special && !password.chars().any(|c| special_chars.contains(&c)) {
        return false;
    }
    true
}

/// Retain the candidates that satisfy `policy`. Candidates are judged
/// independently; the result is always a subset of the input.
pub fn filter_candidates(
    candidates: &HashSet<String>,
    policy: &Policy,
    special_chars: &[char],
) -> HashSet<String> {
    if policy.is_permissive() {
        return candidates.clone();
    }
    candidates
        .iter()
        .filter(|c| meets_policy(c, policy, special_chars))
        .cloned()
        .collect()
}
