//! Subject records and the base words extracted from them.

use serde::Deserialize;
use std::collections::HashSet;

/// Biographical data for one subject. Every field is optional; absent,
/// empty, and the literal placeholder "N/A" are all treated the same.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub partnername: Option<String>,
    #[serde(default)]
    pub partnernickname: Option<String>,
    #[serde(default)]
    pub partnerbirthdate: Option<String>,
    #[serde(default)]
    pub petname: Option<String>,
    #[serde(default)]
    pub companyname: Option<String>,
    /// Free-text comma-separated keywords.
    #[serde(default)]
    pub keywords: Option<String>,
}

/// Normalize a raw field value. Whitespace is trimmed; an empty result or
/// the placeholder "N/A" (any case) counts as absent.
pub fn sanitize(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a keyword field into individual entries. One layer of surrounding
/// quotes is stripped from the whole field, then entries are split on commas,
/// trimmed, and empties dropped.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let stripped = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(raw);
    stripped
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Record {
    /// The deduplicated set of usable words: every sanitized named field
    /// plus every parsed keyword.
    pub fn base_words(&self) -> HashSet<String> {
        let mut words: HashSet<String> = [
            &self.firstname,
            &self.lastname,
            &self.nickname,
            &self.birthdate,
            &self.partnername,
            &self.partnernickname,
            &self.partnerbirthdate,
            &self.petname,
            &self.companyname,
        ]
        .into_iter()
        .filter_map(|f| sanitize(f.as_deref()))
        .collect();

        if let Some(kw) = sanitize(self.keywords.as_deref()) {
            words.extend(parse_keywords(&kw));
        }
        words
    }

    /// True when no field survives sanitization.
    pub fn is_blank(&self) -> bool {
        self.base_words().is_empty()
    }
}
