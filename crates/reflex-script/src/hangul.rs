//! Arithmetic Hangul syllable composition.
//!
//! A precomposed syllable is `0xAC00 + (lead * 21 + vowel) * 28 + trail`;
//! trail index 0 means no final consonant. Jamo are exchanged as
//! compatibility jamo (U+3131 block), the form dictionaries print.

/// First precomposed syllable, 가.
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Number of leading consonants.
pub const LEAD_COUNT: u32 = 19;
/// Number of vowels.
pub const VOWEL_COUNT: u32 = 21;
/// Number of trailing slots, including the empty one.
pub const TRAIL_COUNT: u32 = 28;
/// Syllables per leading consonant.
pub const BLOCK_COUNT: u32 = VOWEL_COUNT * TRAIL_COUNT;
/// Number of precomposed syllables.
pub const SYLLABLE_COUNT: u32 = LEAD_COUNT * BLOCK_COUNT;

/// Leading consonants in index order.
pub const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// Vowels in index order.
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants in index order; index 0 is empty.
pub const TRAILS: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// Jamo indices of one precomposed syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JamoIndices {
    /// Leading consonant index, `0..19`.
    pub lead: u32,
    /// Vowel index, `0..21`.
    pub vowel: u32,
    /// Trailing consonant index, `0..28`.
    pub trail: u32,
}

/// Composes a syllable from jamo indices; `None` when an index is out of range.
pub fn compose(indices: JamoIndices) -> Option<char> {
    let JamoIndices { lead, vowel, trail } = indices;
    if lead >= LEAD_COUNT || vowel >= VOWEL_COUNT || trail >= TRAIL_COUNT {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + lead * BLOCK_COUNT + vowel * TRAIL_COUNT + trail)
}

/// Splits a precomposed syllable into jamo indices; `None` outside the block.
pub fn decompose(syllable: char) -> Option<JamoIndices> {
    let offset = (syllable as u32).checked_sub(SYLLABLE_BASE)?;
    if offset >= SYLLABLE_COUNT {
        return None;
    }
    Some(JamoIndices {
        lead: offset / BLOCK_COUNT,
        vowel: (offset % BLOCK_COUNT) / TRAIL_COUNT,
        trail: offset % TRAIL_COUNT,
    })
}

fn position<T: PartialEq>(table: &[T], item: &T) -> Option<u32> {
    table
        .iter()
        .position(|candidate| candidate == item)
        .and_then(|idx| u32::try_from(idx).ok())
}

/// Composes a syllable from compatibility jamo.
pub fn compose_jamo(lead: char, vowel: char, trail: Option<char>) -> Option<char> {
    compose(JamoIndices {
        lead: position(&LEADS, &lead)?,
        vowel: position(&VOWELS, &vowel)?,
        trail: position(&TRAILS, &trail)?,
    })
}

/// Splits a precomposed syllable into compatibility jamo.
pub fn decompose_jamo(syllable: char) -> Option<(char, char, Option<char>)> {
    let JamoIndices { lead, vowel, trail } = decompose(syllable)?;
    Some((
        LEADS[lead as usize],
        VOWELS[vowel as usize],
        TRAILS[trail as usize],
    ))
}

/// Spells text as a jamo sequence, leaving non-syllables untouched.
pub fn to_jamo(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        match decompose_jamo(ch) {
            Some((lead, vowel, trail)) => {
                out.push(lead);
                out.push(vowel);
                out.extend(trail);
            }
            None => out.push(ch),
        }
    }
    out
}

/// Greedily recombines a jamo sequence into syllables.
///
/// A lead followed by a vowel starts a syllable; the next jamo joins it as
/// the trail when it is a legal trail.
pub fn from_jamo(text: &str) -> String {
    let jamo: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut idx = 0;
    while idx < jamo.len() {
        let lead = jamo[idx];
        let vowel = jamo.get(idx + 1).copied();
        let composed = vowel.and_then(|vowel| {
            let trail = jamo.get(idx + 2).copied().filter(|ch| TRAILS.contains(&Some(*ch)));
            compose_jamo(lead, vowel, trail).map(|syllable| (syllable, trail.is_some()))
        });
        match composed {
            Some((syllable, has_trail)) => {
                out.push(syllable);
                idx += if has_trail { 3 } else { 2 };
            }
            None => {
                out.push(lead);
                idx += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_syllables() {
        assert_eq!(decompose_jamo('한'), Some(('ㅎ', 'ㅏ', Some('ㄴ'))));
        assert_eq!(compose_jamo('ㄱ', 'ㅡ', Some('ㄹ')), Some('글'));
        assert_eq!(compose_jamo('ㅇ', 'ㅢ', None), Some('의'));
        assert_eq!(decompose('a'), None);
    }

    #[test]
    fn out_of_range_indices_do_not_compose() {
        let indices = JamoIndices {
            lead: LEAD_COUNT,
            vowel: 0,
            trail: 0,
        };
        assert_eq!(compose(indices), None);
    }

    #[test]
    fn jamo_strings_recombine() {
        assert_eq!(to_jamo("한글"), "ㅎㅏㄴㄱㅡㄹ");
        assert_eq!(from_jamo("ㅎㅏㄴㄱㅡㄹ"), "한글");
        assert_eq!(from_jamo("ㅇㅏㅇㅣ"), "앙ㅣ");
    }
}
