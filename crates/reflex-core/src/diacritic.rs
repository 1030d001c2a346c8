//! Unicode helpers for tone diacritics and tone numerals.
//!
//! Marks are stripped from the canonical decomposition and inserted before
//! canonical recomposition, so precomposed input such as `ố` and decomposed
//! input such as `o + ̂ + ́` behave the same.

use unicode_normalization::UnicodeNormalization;

/// Combining macron, ◌̄.
pub const MACRON: char = '\u{0304}';
/// Combining acute accent, ◌́.
pub const ACUTE: char = '\u{0301}';
/// Combining grave accent, ◌̀.
pub const GRAVE: char = '\u{0300}';
/// Combining circumflex, ◌̂.
pub const CIRCUMFLEX: char = '\u{0302}';
/// Combining caron, ◌̌.
pub const CARON: char = '\u{030C}';
/// Combining tilde, ◌̃.
pub const TILDE: char = '\u{0303}';
/// Combining hook above, ◌̉.
pub const HOOK: char = '\u{0309}';
/// Combining dot below, ◌̣.
pub const DOT_BELOW: char = '\u{0323}';

/// Canonical composition (NFC).
pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Canonical decomposition (NFD).
pub fn nfd(text: &str) -> String {
    text.nfd().collect()
}

/// Removes the first combining mark accepted by `is_mark` and recomposes.
pub fn strip_mark(text: &str, is_mark: impl Fn(char) -> bool) -> (String, Option<char>) {
    let mut found = None;
    let mut kept = String::with_capacity(text.len());
    for ch in text.nfd() {
        if found.is_none() && is_mark(ch) {
            found = Some(ch);
        } else {
            kept.push(ch);
        }
    }
    (nfc(&kept), found)
}

/// Writes `mark` after the character at `position` (counted in characters) and recomposes.
///
/// A position past the end places the mark on the last character.
pub fn attach_mark_at(text: &str, position: usize, mark: Option<char>) -> String {
    let Some(mark) = mark else {
        return nfc(text);
    };
    let count = text.chars().count();
    let position = position.min(count.saturating_sub(1));
    let mut out = String::with_capacity(text.len() + mark.len_utf8());
    for (idx, ch) in text.chars().enumerate() {
        out.push(ch);
        if idx == position {
            out.push(mark);
        }
    }
    if count == 0 {
        out.push(mark);
    }
    nfc(&out)
}

/// Writes `mark` over the last character of `text`.
pub fn attach_mark(text: &str, mark: Option<char>) -> String {
    attach_mark_at(text, usize::MAX, mark)
}

/// Splits a single trailing ASCII digit off `text`.
pub fn split_tone_digit(text: &str) -> (&str, Option<char>) {
    match text.chars().last() {
        Some(last) if last.is_ascii_digit() => (&text[..text.len() - 1], Some(last)),
        _ => (text, None),
    }
}

/// Replaces superscript digits (`⁰` … `⁹`) with their ASCII forms.
pub fn superscript_to_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '⁰' => '0',
            '¹' => '1',
            '²' => '2',
            '³' => '3',
            '⁴' => '4',
            '⁵' => '5',
            '⁶' => '6',
            '⁷' => '7',
            '⁸' => '8',
            '⁹' => '9',
            other => other,
        })
        .collect()
}

/// Static string for a tone digit.
pub fn digit_str(digit: char) -> Option<&'static str> {
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    digit.to_digit(10).map(|value| DIGITS[value as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_marks_from_precomposed_letters() {
        let (text, mark) = strip_mark("qiāng", |ch| ch == MACRON);
        assert_eq!(text, "qiang");
        assert_eq!(mark, Some(MACRON));
    }

    #[test]
    fn keeps_vowel_quality_marks() {
        let (text, mark) = strip_mark("quốc", |ch| ch == ACUTE);
        assert_eq!(text, "quôc");
        assert_eq!(mark, Some(ACUTE));
    }

    #[test]
    fn attaches_on_requested_character() {
        assert_eq!(attach_mark("ô", Some(ACUTE)), "ố");
        assert_eq!(attach_mark_at("ia", 0, Some(ACUTE)), "ía");
        assert_eq!(attach_mark("a", None), "a");
    }

    #[test]
    fn digits_split_from_the_end() {
        assert_eq!(split_tone_digit("gwaang2"), ("gwaang", Some('2')));
        assert_eq!(split_tone_digit("ma"), ("ma", None));
        assert_eq!(superscript_to_digits("ɦɑ̃¹³"), "ɦɑ̃13");
    }
}
