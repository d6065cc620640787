//! Optional JSON configuration file for generation parameters and policy.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::PassgasError;
use crate::generate::GenParams;
use crate::policy::Policy;
use crate::transform::LeetMap;

/// On-disk configuration. Every key is optional; anything omitted keeps its
/// built-in default, and explicit CLI flags win over file values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Single-character keys mapped to replacement text.
    pub leet_map: Option<HashMap<String, String>>,
    /// Padding alphabet as one string, in enumeration order.
    pub special_chars: Option<String>,
    pub max_special_repeats: Option<usize>,
    /// Hard cap on per-record candidates.
    pub cap: Option<usize>,
    pub policy: Option<Policy>,
}

impl FileConfig {
    /// Parse a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PassgasError> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| PassgasError::Config(e.to_string()))
    }

    /// Fold file values into generation parameters.
    pub fn apply(&self, params: &mut GenParams) -> Result<(), PassgasError> {
        if let Some(map) = &self.leet_map {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, rep) in map {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => pairs.push((c, rep.clone())),
                    _ => {
                        return Err(PassgasError::Config(format!(
                            "leet_map key {key:?} must be a single character"
                        )))
                    }
                }
            }
            params.leet_map = LeetMap::from_pairs(pairs);
        }
        if let Some(chars) = &self.special_chars {
            params.special_chars = chars.chars().collect();
        }
        if let Some(r) = self.max_special_repeats {
            params.max_special_repeats = r;
        }
        if let Some(cap) = self.cap {
            params.candidate_cap = Some(cap);
        }
        Ok(())
    }
}
