//! Bidirectional IPA ↔ spelling tables and longest-match segmentation.

use std::collections::HashMap;

/// Returns the first `n` characters of `text`, or `None` when it is shorter.
pub fn char_prefix(text: &str, n: usize) -> Option<&str> {
    if n == 0 {
        return Some("");
    }
    match text.char_indices().nth(n) {
        Some((end, _)) => Some(&text[..end]),
        None if text.chars().count() == n => Some(text),
        None => None,
    }
}

/// Returns the last `n` characters of `text`, or `None` when it is shorter.
pub fn char_suffix(text: &str, n: usize) -> Option<&str> {
    let len = text.chars().count();
    if n > len {
        return None;
    }
    let start = text
        .char_indices()
        .nth(len - n)
        .map_or(text.len(), |(idx, _)| idx);
    Some(&text[start..])
}

/// Static `(ipa, spelling)` pairs indexed in both directions.
///
/// Several IPA values may share a spelling and vice versa; the earliest pair
/// is canonical in each direction.
#[derive(Debug)]
pub struct SymbolTable {
    pairs: &'static [(&'static str, &'static str)],
    to_spelling: HashMap<&'static str, &'static str>,
    to_ipa: HashMap<&'static str, &'static str>,
}

impl SymbolTable {
    /// Indexes the pairs.
    pub fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        let mut to_spelling = HashMap::with_capacity(pairs.len());
        let mut to_ipa = HashMap::with_capacity(pairs.len());
        for &(ipa, spelling) in pairs {
            to_spelling.entry(ipa).or_insert(spelling);
            to_ipa.entry(spelling).or_insert(ipa);
        }
        Self {
            pairs,
            to_spelling,
            to_ipa,
        }
    }

    /// Canonical spelling of an IPA value.
    pub fn spelling(&self, ipa: &str) -> Option<&'static str> {
        self.to_spelling.get(ipa).copied()
    }

    /// Canonical IPA value of a spelling.
    pub fn ipa(&self, spelling: &str) -> Option<&'static str> {
        self.to_ipa.get(spelling).copied()
    }

    /// The table's own copy of `ipa`, if it is a member.
    pub fn intern(&self, ipa: &str) -> Option<&'static str> {
        self.to_spelling.get_key_value(ipa).map(|(key, _)| *key)
    }

    /// Distinct IPA values in table order.
    pub fn ipa_values(&self) -> Vec<&'static str> {
        let mut seen = Vec::with_capacity(self.pairs.len());
        for &(ipa, _) in self.pairs {
            if !seen.contains(&ipa) {
                seen.push(ipa);
            }
        }
        seen
    }

    /// Longest spelled prefix of `text` (up to `max_chars` characters) that
    /// names a table entry, falling back to an empty spelling when the table
    /// has one. Returns `(ipa, spelling)`.
    pub fn spelled_prefix(&self, text: &str, max_chars: usize) -> Option<(&'static str, &'static str)> {
        longest_prefix(text, max_chars, |candidate| {
            self.to_ipa
                .get_key_value(candidate)
                .map(|(spelling, ipa)| (*ipa, *spelling))
        })
    }

    /// Longest IPA prefix of `text` (up to `max_chars` characters) that is a
    /// table entry, with the same empty fallback. Returns the interned IPA.
    pub fn ipa_prefix(&self, text: &str, max_chars: usize) -> Option<&'static str> {
        longest_prefix(text, max_chars, |candidate| self.intern(candidate))
    }
}

fn longest_prefix<T>(
    text: &str,
    max_chars: usize,
    lookup: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    for n in (1..=max_chars).rev() {
        if let Some(found) = char_prefix(text, n).and_then(&lookup) {
            return Some(found);
        }
    }
    lookup("")
}

#[cfg(test)]
mod tests {
    use super::*;

    static PAIRS: &[(&str, &str)] = &[("", ""), ("tɕʰ", "q"), ("ŋ", "ng"), ("n", "n"), ("ʈʂ", "zh")];

    #[test]
    fn prefixes_count_characters_not_bytes() {
        assert_eq!(char_prefix("ŋa", 1), Some("ŋ"));
        assert_eq!(char_prefix("ŋa", 2), Some("ŋa"));
        assert_eq!(char_prefix("ŋa", 3), None);
        assert_eq!(char_suffix("tɕʰ", 2), Some("ɕʰ"));
    }

    #[test]
    fn longest_match_prefers_longer_spellings() {
        let table = SymbolTable::new(PAIRS);
        assert_eq!(table.spelled_prefix("nga", 3), Some(("ŋ", "ng")));
        assert_eq!(table.spelled_prefix("na", 3), Some(("n", "n")));
        assert_eq!(table.spelled_prefix("a", 3), Some(("", "")));
        assert_eq!(table.ipa_prefix("tɕʰa", 3), Some("tɕʰ"));
    }
}
