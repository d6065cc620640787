//! Single-word transformation rules: case/reverse, leetspeak, special-char padding.

use std::collections::{HashMap, HashSet};

/// Character substitution table for leetspeak transforms.
///
/// Maps a lowercase letter to its replacement text. A character without an
/// entry passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeetMap {
    map: HashMap<char, String>,
}

impl LeetMap {
    /// Build a map from (character, replacement) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            map: pairs.into_iter().map(|(c, s)| (c, s.into())).collect(),
        }
    }

    /// Substitute every eligible character in `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.map.get(&c) {
                Some(rep) => out.push_str(rep),
                None => out.push(c),
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for LeetMap {
    /// The conventional mapping: a→4, e→3, i→1, o→0, s→5, t→7.
    fn default() -> Self {
        Self::from_pairs([
            ('a', "4"),
            ('e', "3"),
            ('i', "1"),
            ('o', "0"),
            ('s', "5"),
            ('t', "7"),
        ])
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// This is deliberately not a full case fold: "mcDonald" becomes "McDonald",
/// not "Mcdonald".
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The four basic shapes of a word: itself, capitalized, reversed, and
/// capitalized-reversed. Duplicates collapse, so the result has between one
/// and four members.
pub fn case_and_reverse_variants(word: &str) -> HashSet<String> {
    let reversed: String = word.chars().rev().collect();
    let mut out = HashSet::with_capacity(4);
    out.insert(capitalize(word));
    out.insert(capitalize(&reversed));
    out.insert(word.to_string());
    out.insert(reversed);
    out
}

/// Leetspeak variants of `word`: the word itself, the fully substituted form,
/// and every suffix-substituted form `word[..i] + apply(word[i..])`.
///
/// At most `len + 2` strings before deduplication. An empty word or an empty
/// mapping yields just the word.
pub fn leet_variants(word: &str, map: &LeetMap) -> HashSet<String> {
    let mut out = HashSet::new();
    out.insert(word.to_string());
    if word.is_empty() || map.is_empty() {
        return out;
    }
    out.insert(map.apply(word));
    for (i, _) in word.char_indices() {
        let mut partial = String::with_capacity(word.len());
        partial.push_str(&word[..i]);
        partial.push_str(&map.apply(&word[i..]));
        out.insert(partial);
    }
    out
}

/// Pad `word` with every sequence of up to `max_repeats` characters drawn
/// with repetition from `alphabet`, both as suffix and prefix. The word
/// itself is always included; `max_repeats == 0` yields exactly that.
///
/// The expansion is exponential in `max_repeats`: alphabet size `A` and
/// repeat bound `R` produce on the order of `2 * R * A^R` strings per word.
/// Callers bound memory through `cap`: once `out` holds `cap` strings no
/// further variants are added.
pub fn special_char_variants(
    word: &str,
    alphabet: &[char],
    max_repeats: usize,
    cap: Option<usize>,
    out: &mut HashSet<String>,
) {
    out.insert(word.to_string());
    if alphabet.is_empty() {
        return;
    }
    let cap = cap.unwrap_or(usize::MAX);
    for repeat in 1..=max_repeats {
        // Odometer over alphabet indices enumerates the Cartesian product
        // in lexicographic order of the alphabet sequence.
        let mut digits = vec![0usize; repeat];
        'combos: loop {
            if out.len() >= cap {
                return;
            }
            let combo: String = digits.iter().map(|&d| alphabet[d]).collect();
            let mut suffixed = String::with_capacity(word.len() + combo.len());
            suffixed.push_str(word);
            suffixed.push_str(&combo);
            out.insert(suffixed);
            if out.len() >= cap {
                return;
            }
            let mut prefixed = String::with_capacity(word.len() + combo.len());
            prefixed.push_str(&combo);
            prefixed.push_str(word);
            out.insert(prefixed);

            let mut pos = repeat;
            while pos > 0 {
                pos -= 1;
                digits[pos] += 1;
                if digits[pos] < alphabet.len() {
                    continue 'combos;
                }
                digits[pos] = 0;
            }
            // Odometer wrapped: every sequence of this length emitted.
            break;
        }
    }
}
