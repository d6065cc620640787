//! Output boundary: sorted flat-text wordlists, one per subject plus a master.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PassgasError;
use crate::record::{sanitize, Record};

/// Name of the deduplicated union written once per run.
pub const MASTER_FILENAME: &str = "master_password_list.txt";

/// Order candidates case-insensitively, with a case-sensitive tiebreak so
/// the ordering is total and stable.
pub fn sorted_candidates(candidates: &HashSet<String>) -> Vec<&String> {
    let mut sorted: Vec<&String> = candidates.iter().collect();
    sorted.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    sorted
}

/// Per-subject output filename: `<first>_<last>_passwords.txt`, lowercased.
/// Subjects without usable names fall back to a positional name.
pub fn subject_filename(record: &Record, index: usize) -> String {
    let first = sanitize(record.firstname.as_deref()).map(|s| s.to_lowercase());
    let last = sanitize(record.lastname.as_deref()).map(|s| s.to_lowercase());
    match (first, last) {
        (Some(f), Some(l)) => format!("{f}_{l}_passwords.txt"),
        (Some(f), None) => format!("{f}_passwords.txt"),
        (None, Some(l)) => format!("{l}_passwords.txt"),
        (None, None) => format!("subject_{index}_passwords.txt"),
    }
}

/// Write one wordlist as newline-joined, case-insensitively sorted text.
/// An empty candidate set yields a zero-length file, not an error.
pub fn write_wordlist(path: &Path, candidates: &HashSet<String>) -> Result<(), PassgasError> {
    let sorted = sorted_candidates(candidates);
    let mut body = String::new();
    for (i, candidate) in sorted.iter().enumerate() {
        if i > 0 {
            body.push('\n');
        }
        body.push_str(candidate);
    }
    fs::write(path, body)?;
    Ok(())
}

/// Ensure the output directory exists and return the master list path in it.
pub fn prepare_output_dir(dir: &Path) -> Result<PathBuf, PassgasError> {
    fs::create_dir_all(dir)?;
    Ok(dir.join(MASTER_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorting_is_case_insensitive_and_total() {
        let set: HashSet<String> = ["banana", "Apple", "apple", "Cherry"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let sorted: Vec<&str> = sorted_candidates(&set).iter().map(|s| s.as_str()).collect();
        assert_eq!(sorted, vec!["Apple", "apple", "banana", "Cherry"]);
    }

    #[test]
    fn filenames_fall_back_when_names_missing() {
        let full = Record {
            firstname: Some("Max".into()),
            lastname: Some("Muster".into()),
            ..Record::default()
        };
        assert_eq!(subject_filename(&full, 0), "max_muster_passwords.txt");

        let partial = Record {
            firstname: Some("Max".into()),
            lastname: Some("N/A".into()),
            ..Record::default()
        };
        assert_eq!(subject_filename(&partial, 0), "max_passwords.txt");

        let blank = Record::default();
        assert_eq!(subject_filename(&blank, 3), "subject_3_passwords.txt");
    }
}
