//! Kana catalog.
//!
//! Each unit carries its hiragana and katakana spellings, the phonological
//! tuple it writes, its Hepburn romanisation and a narrow transcription.
//! Nippon-shiki romanisation is the tuple itself with `j` written `y`.
//! Lookups scan the catalog linearly; it is small and fixed.

use serde::{Deserialize, Serialize};

/// Textual forms a kana unit can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KanaForm {
    /// カタカナ.
    Katakana,
    /// ひらがな.
    Hiragana,
    /// Nippon-shiki romanisation.
    Nippon,
    /// Hepburn romanisation.
    Hepburn,
    /// The phonological tuple, concatenated.
    Raw,
}

impl KanaForm {
    /// Parse order: scripts before romanisations.
    pub const ALL: [KanaForm; 5] = [
        KanaForm::Katakana,
        KanaForm::Hiragana,
        KanaForm::Nippon,
        KanaForm::Hepburn,
        KanaForm::Raw,
    ];
}

/// One unit of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kana {
    /// Hiragana spelling.
    pub hiragana: &'static str,
    /// Katakana spelling.
    pub katakana: &'static str,
    /// Onset consonant; `n` and `q` for the moraic nasal and the geminate marker.
    pub initial: &'static str,
    /// Glide: `""`, `j`, `w` or `wj`.
    pub medial: &'static str,
    /// Vowel; empty for the moraic units.
    pub nucleus: &'static str,
    /// Hepburn romanisation.
    pub hepburn: &'static str,
    /// Narrow transcription.
    pub strict: &'static str,
}

impl Kana {
    const fn new(
        hiragana: &'static str,
        katakana: &'static str,
        tuple: (&'static str, &'static str, &'static str),
        hepburn: &'static str,
        strict: &'static str,
    ) -> Self {
        Self {
            hiragana,
            katakana,
            initial: tuple.0,
            medial: tuple.1,
            nucleus: tuple.2,
            hepburn,
            strict,
        }
    }

    /// The tuple, concatenated.
    pub fn raw(&self) -> String {
        [self.initial, self.medial, self.nucleus].concat()
    }

    /// Nippon-shiki romanisation.
    pub fn nippon(&self) -> String {
        self.raw().replace('j', "y")
    }

    /// Whether the unit has a vowel, i.e. can head a syllable.
    pub fn is_mora(&self) -> bool {
        !self.nucleus.is_empty()
    }

    /// The unit written in `form`.
    pub fn form(&self, form: KanaForm) -> String {
        match form {
            KanaForm::Katakana => self.katakana.to_owned(),
            KanaForm::Hiragana => self.hiragana.to_owned(),
            KanaForm::Nippon => self.nippon(),
            KanaForm::Hepburn => self.hepburn.to_owned(),
            KanaForm::Raw => self.raw(),
        }
    }
}

/// Every legal unit, including palatal digraphs, labial-glide units, the
/// moraic nasal and the geminate marker. The first row is the empty unit.
pub static CATALOG: &[Kana] = &[
    Kana::new("", "", ("", "", ""), "", ""),
    Kana::new("あ", "ア", ("", "", "a"), "a", "a"),
    Kana::new("い", "イ", ("", "", "i"), "i", "i"),
    Kana::new("う", "ウ", ("", "", "u"), "u", "ʉ"),
    Kana::new("え", "エ", ("", "", "e"), "e", "e"),
    Kana::new("お", "オ", ("", "", "o"), "o", "o"),
    Kana::new("や", "ヤ", ("", "j", "a"), "ya", "ja"),
    Kana::new("ゆ", "ユ", ("", "j", "u"), "yu", "jʉ"),
    Kana::new("よ", "ヨ", ("", "j", "o"), "yo", "jo"),
    Kana::new("か", "カ", ("k", "", "a"), "ka", "ka"),
    Kana::new("き", "キ", ("k", "", "i"), "ki", "ki"),
    Kana::new("く", "ク", ("k", "", "u"), "ku", "kʉ"),
    Kana::new("け", "ケ", ("k", "", "e"), "ke", "ke"),
    Kana::new("こ", "コ", ("k", "", "o"), "ko", "ko"),
    Kana::new("きゃ", "キャ", ("k", "j", "a"), "kya", "kja"),
    Kana::new("きゅ", "キュ", ("k", "j", "u"), "kyu", "kjʉ"),
    Kana::new("きょ", "キョ", ("k", "j", "o"), "kyo", "kjo"),
    Kana::new("さ", "サ", ("s", "", "a"), "sa", "sa"),
    Kana::new("し", "シ", ("s", "", "i"), "shi", "ɕi"),
    Kana::new("す", "ス", ("s", "", "u"), "su", "sʉ"),
    Kana::new("せ", "セ", ("s", "", "e"), "se", "se"),
    Kana::new("そ", "ソ", ("s", "", "o"), "so", "so"),
    Kana::new("しゃ", "シャ", ("s", "j", "a"), "sha", "ɕja"),
    Kana::new("しゅ", "シュ", ("s", "j", "u"), "shu", "ɕjʉ"),
    Kana::new("しょ", "ショ", ("s", "j", "o"), "sho", "ɕjo"),
    Kana::new("た", "タ", ("t", "", "a"), "ta", "ta"),
    Kana::new("ち", "チ", ("t", "", "i"), "chi", "t͡ɕi"),
    Kana::new("つ", "ツ", ("t", "", "u"), "tsu", "t͡sʉ"),
    Kana::new("て", "テ", ("t", "", "e"), "te", "te"),
    Kana::new("と", "ト", ("t", "", "o"), "to", "to"),
    Kana::new("ちゃ", "チャ", ("t", "j", "a"), "cha", "t͡ɕja"),
    Kana::new("ちゅ", "チュ", ("t", "j", "u"), "chu", "t͡ɕjʉ"),
    Kana::new("ちょ", "チョ", ("t", "j", "o"), "cho", "t͡ɕjo"),
    Kana::new("な", "ナ", ("n", "", "a"), "na", "na"),
    Kana::new("に", "ニ", ("n", "", "i"), "ni", "ni"),
    Kana::new("ぬ", "ヌ", ("n", "", "u"), "nu", "nʉ"),
    Kana::new("ね", "ネ", ("n", "", "e"), "ne", "ne"),
    Kana::new("の", "ノ", ("n", "", "o"), "no", "no"),
    Kana::new("にゃ", "ニャ", ("n", "j", "a"), "nya", "nja"),
    Kana::new("にゅ", "ニュ", ("n", "j", "u"), "nyu", "njʉ"),
    Kana::new("にょ", "ニョ", ("n", "j", "o"), "nyo", "njo"),
    Kana::new("は", "ハ", ("h", "", "a"), "ha", "ha"),
    Kana::new("ひ", "ヒ", ("h", "", "i"), "hi", "çi"),
    Kana::new("ふ", "フ", ("h", "", "u"), "fu", "ɸʉ"),
    Kana::new("へ", "ヘ", ("h", "", "e"), "he", "he"),
    Kana::new("ほ", "ホ", ("h", "", "o"), "ho", "ho"),
    Kana::new("ひゃ", "ヒャ", ("h", "j", "a"), "hya", "çja"),
    Kana::new("ひゅ", "ヒュ", ("h", "j", "u"), "hyu", "çjʉ"),
    Kana::new("ひょ", "ヒョ", ("h", "j", "o"), "hyo", "çjo"),
    Kana::new("ま", "マ", ("m", "", "a"), "ma", "ma"),
    Kana::new("み", "ミ", ("m", "", "i"), "mi", "mi"),
    Kana::new("む", "ム", ("m", "", "u"), "mu", "mʉ"),
    Kana::new("め", "メ", ("m", "", "e"), "me", "me"),
    Kana::new("も", "モ", ("m", "", "o"), "mo", "mo"),
    Kana::new("みゃ", "ミャ", ("m", "j", "a"), "mya", "mja"),
    Kana::new("みゅ", "ミュ", ("m", "j", "u"), "myu", "mjʉ"),
    Kana::new("みょ", "ミョ", ("m", "j", "o"), "myo", "mjo"),
    Kana::new("ら", "ラ", ("r", "", "a"), "ra", "ɾa"),
    Kana::new("り", "リ", ("r", "", "i"), "ri", "ɾi"),
    Kana::new("る", "ル", ("r", "", "u"), "ru", "ɾʉ"),
    Kana::new("れ", "レ", ("r", "", "e"), "re", "ɾe"),
    Kana::new("ろ", "ロ", ("r", "", "o"), "ro", "ɾo"),
    Kana::new("りゃ", "リャ", ("r", "j", "a"), "rya", "ɾja"),
    Kana::new("りゅ", "リュ", ("r", "j", "u"), "ryu", "ɾjʉ"),
    Kana::new("りょ", "リョ", ("r", "j", "o"), "ryo", "ɾjo"),
    Kana::new("わ", "ワ", ("", "w", "a"), "wa", "wa"),
    Kana::new("ゐ", "ヰ", ("", "w", "i"), "wi", "wi"),
    Kana::new("ゑ", "ヱ", ("", "w", "e"), "we", "we"),
    Kana::new("を", "ヲ", ("", "w", "o"), "wo", "wo"),
    Kana::new("ゐゃ", "ヰャ", ("", "wj", "a"), "wya", "wja"),
    Kana::new("ゐゅ", "ヰュ", ("", "wj", "u"), "wyu", "wjʉ"),
    Kana::new("ゐょ", "ヰョ", ("", "wj", "o"), "wyo", "wjo"),
    Kana::new("が", "ガ", ("g", "", "a"), "ga", "ga"),
    Kana::new("ぎ", "ギ", ("g", "", "i"), "gi", "gi"),
    Kana::new("ぐ", "グ", ("g", "", "u"), "gu", "gʉ"),
    Kana::new("げ", "ゲ", ("g", "", "e"), "ge", "ge"),
    Kana::new("ご", "ゴ", ("g", "", "o"), "go", "go"),
    Kana::new("ぎゃ", "ギャ", ("g", "j", "a"), "gya", "gja"),
    Kana::new("ぎゅ", "ギュ", ("g", "j", "u"), "gyu", "gjʉ"),
    Kana::new("ぎょ", "ギョ", ("g", "j", "o"), "gyo", "gjo"),
    Kana::new("ざ", "ザ", ("z", "", "a"), "za", "za"),
    Kana::new("じ", "ジ", ("z", "", "i"), "ji", "ʑi"),
    Kana::new("ず", "ズ", ("z", "", "u"), "zu", "zʉ"),
    Kana::new("ぜ", "ゼ", ("z", "", "e"), "ze", "ze"),
    Kana::new("ぞ", "ゾ", ("z", "", "o"), "zo", "zo"),
    Kana::new("じゃ", "ジャ", ("z", "j", "a"), "ja", "ʑja"),
    Kana::new("じゅ", "ジュ", ("z", "j", "u"), "ju", "ʑjʉ"),
    Kana::new("じょ", "ジョ", ("z", "j", "o"), "jo", "ʑjo"),
    Kana::new("だ", "ダ", ("d", "", "a"), "da", "da"),
    Kana::new("ぢ", "ヂ", ("d", "", "i"), "dji", "d͡ʑi"),
    Kana::new("づ", "ヅ", ("d", "", "u"), "dzu", "d͡zʉ"),
    Kana::new("で", "デ", ("d", "", "e"), "de", "de"),
    Kana::new("ど", "ド", ("d", "", "o"), "do", "do"),
    Kana::new("ぢゃ", "ヂャ", ("d", "j", "a"), "dja", "d͡ʑja"),
    Kana::new("ぢゅ", "ヂュ", ("d", "j", "u"), "dju", "d͡ʑjʉ"),
    Kana::new("ぢょ", "ヂョ", ("d", "j", "o"), "djo", "d͡ʑjo"),
    Kana::new("ば", "バ", ("b", "", "a"), "ba", "ba"),
    Kana::new("び", "ビ", ("b", "", "i"), "bi", "bi"),
    Kana::new("ぶ", "ブ", ("b", "", "u"), "bu", "bʉ"),
    Kana::new("べ", "ベ", ("b", "", "e"), "be", "be"),
    Kana::new("ぼ", "ボ", ("b", "", "o"), "bo", "bo"),
    Kana::new("びゃ", "ビャ", ("b", "j", "a"), "bya", "bja"),
    Kana::new("びゅ", "ビュ", ("b", "j", "u"), "byu", "bjʉ"),
    Kana::new("びょ", "ビョ", ("b", "j", "o"), "byo", "bjo"),
    Kana::new("ぱ", "パ", ("p", "", "a"), "pa", "pa"),
    Kana::new("ぴ", "ピ", ("p", "", "i"), "pi", "pi"),
    Kana::new("ぷ", "プ", ("p", "", "u"), "pu", "pʉ"),
    Kana::new("ぺ", "ペ", ("p", "", "e"), "pe", "pe"),
    Kana::new("ぽ", "ポ", ("p", "", "o"), "po", "po"),
    Kana::new("ぴゃ", "ピャ", ("p", "j", "a"), "pya", "pja"),
    Kana::new("ぴゅ", "ピュ", ("p", "j", "u"), "pyu", "pjʉ"),
    Kana::new("ぴょ", "ピョ", ("p", "j", "o"), "pyo", "pjo"),
    Kana::new("くわ", "クワ", ("k", "w", "a"), "kwa", "kwa"),
    Kana::new("くゐ", "クヰ", ("k", "w", "i"), "kwi", "kwi"),
    Kana::new("くゑ", "クヱ", ("k", "w", "e"), "kwe", "kwe"),
    Kana::new("くを", "クヲ", ("k", "w", "o"), "kwo", "kwo"),
    Kana::new("くゐゃ", "クヰャ", ("k", "wj", "a"), "kwya", "kwja"),
    Kana::new("くゐゅ", "クヰュ", ("k", "wj", "u"), "kwyu", "kwjʉ"),
    Kana::new("くゐょ", "クヰョ", ("k", "wj", "o"), "kwyo", "kwjo"),
    Kana::new("ぐわ", "グワ", ("g", "w", "a"), "gwa", "gwa"),
    Kana::new("ぐゐ", "グヰ", ("g", "w", "i"), "gwi", "gwi"),
    Kana::new("ぐゑ", "グヱ", ("g", "w", "e"), "gwe", "gwe"),
    Kana::new("ぐを", "グヲ", ("g", "w", "o"), "gwo", "gwo"),
    Kana::new("ぐゐゃ", "グヰャ", ("g", "wj", "a"), "gwya", "gwja"),
    Kana::new("ぐゐゅ", "グヰュ", ("g", "wj", "u"), "gwyu", "gwjʉ"),
    Kana::new("ぐゐょ", "グヰョ", ("g", "wj", "o"), "gwyo", "gwjo"),
    Kana::new("ん", "ン", ("n", "", ""), "n", "ɴ"),
    Kana::new("っ", "ッ", ("q", "", ""), "q", "Q"),
];

/// First unit written `text` in `form`.
pub fn find(text: &str, form: KanaForm) -> Option<&'static Kana> {
    CATALOG.iter().find(|kana| match form {
        KanaForm::Katakana => kana.katakana == text,
        KanaForm::Hiragana => kana.hiragana == text,
        KanaForm::Hepburn => kana.hepburn == text,
        KanaForm::Nippon => kana.nippon() == text,
        KanaForm::Raw => kana.raw() == text,
    })
}

/// First unit, in catalog order, written `text` in any form.
pub fn find_any(text: &str) -> Option<&'static Kana> {
    CATALOG
        .iter()
        .find(|kana| KanaForm::ALL.iter().any(|form| kana.form(*form) == text))
}

/// The unit whose tuple is `(initial, medial, nucleus)`.
pub fn by_tuple(initial: &str, medial: &str, nucleus: &str) -> Option<&'static Kana> {
    CATALOG
        .iter()
        .find(|kana| kana.initial == initial && kana.medial == medial && kana.nucleus == nucleus)
}

const SMALL: [(char, char); 6] = [
    ('ゃ', 'や'),
    ('ャ', 'ヤ'),
    ('ゅ', 'ゆ'),
    ('ュ', 'ユ'),
    ('ょ', 'よ'),
    ('ョ', 'ヨ'),
];

/// Writes small ゃゅょ in full size.
pub fn small_to_normal(text: &str) -> String {
    text.chars()
        .map(|ch| {
            SMALL
                .iter()
                .find(|(small, _)| *small == ch)
                .map_or(ch, |(_, normal)| *normal)
        })
        .collect()
}

/// Writes full-size やゆよ small everywhere except the first character.
pub fn normal_to_small(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(idx, ch)| {
            if idx == 0 {
                return ch;
            }
            SMALL
                .iter()
                .find(|(_, normal)| *normal == ch)
                .map_or(ch, |(small, _)| *small)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nippon_forms_come_from_the_tuple() {
        let kyo = find("キョ", KanaForm::Katakana).expect("catalogued");
        assert_eq!(kyo.nippon(), "kyo");
        assert_eq!(kyo.hepburn, "kyo");
        let chi = find("ち", KanaForm::Hiragana).expect("catalogued");
        assert_eq!(chi.nippon(), "ti");
        assert_eq!(chi.hepburn, "chi");
    }

    #[test]
    fn small_kana_conversions() {
        assert_eq!(small_to_normal("キャウ"), "キヤウ");
        assert_eq!(normal_to_small("キヤウ"), "キャウ");
        assert_eq!(normal_to_small("ヤウ"), "ヤウ");
    }
}
