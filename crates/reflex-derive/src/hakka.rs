//! Middle Chinese → Meixian Hakka.
//!
//! Tones come out in the codec's seven-tone numbering: 上 of voiced
//! obstruents and all of 去 merge as 4, 入 splits into 5 and 6. The rules
//! have no ɥ glide; closed grade-three 山 syllables after velars take `j`.
//! Retroflexed ə is limited to true 知 and 章 initials, never 娘.

use reflex_core::ToneClass;
use reflex_dialects::Hakka;

use crate::engine::{ReflexParts, RuleSet};
use crate::record::{
    Department as D, Grade as G, Initial as I, InitialGroup as Z, Openness as O, Register,
    RhymeClass,
};

/// Rule set for [`Hakka`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HakkaRules;

fn pick(condition: bool, yes: &'static str, no: &'static str) -> &'static str {
    if condition {
        yes
    } else {
        no
    }
}

/// 知 or 章 proper, which keep a retroflex vowel.
fn retroflex(record: &RhymeClass) -> bool {
    matches!(record.group(), Z::Zhi | Z::Zhang) && record.initial != I::Niang
}

impl RuleSet for HakkaRules {
    type Dialect = Hakka;

    fn nucleus(record: &RhymeClass) -> Option<&'static str> {
        let group = record.group();
        let grade = record.grade;
        let openness = record.openness;
        if record.rhyme_group.is_any("元") {
            return Some("a");
        }
        Some(match record.department {
            D::Tong => "u",
            D::Jiang | D::Guo | D::Dang => "o",
            D::Xiao | D::Jia | D::Xian => "a",
            D::Zhi => pick(
                matches!(group, Z::Zhi | Z::Zhang | Z::Jing | Z::Zhuang)
                    && record.initial != I::Niang,
                "ɿ",
                "i",
            ),
            D::Yu => {
                if matches!(group, Z::Jing | Z::Zhuang) {
                    "ɿ"
                } else if grade == G::Three
                    && (matches!(group, Z::Lai | Z::Ri | Z::Jian | Z::Ying)
                        || record.initial == I::Niang)
                {
                    "i"
                } else {
                    "u"
                }
            }
            D::Xie => match (grade, openness) {
                (G::One, O::Open) => match group {
                    Z::Bang => "i",
                    Z::Jian | Z::Ying => "o",
                    _ => "a",
                },
                (G::One, O::Closed) => "i",
                (G::One, O::Unmarked) => return None,
                (G::Two, _) => "a",
                (G::Three | G::Four, O::Open) if matches!(group, Z::Zhang | Z::Jing) => "ɿ",
                (G::Three | G::Four, _) => "i",
            },
            D::Zhen => match (grade, openness) {
                (G::One, _) if group == Z::Duan => "u",
                (G::One, O::Open) => "e",
                (G::One, O::Closed) => "u",
                (G::Three, O::Open) => pick(retroflex(record), "ə", "i"),
                (G::Three, O::Closed) => "u",
                _ => return None,
            },
            D::Shan => match (grade, openness) {
                (G::One, O::Open) if matches!(group, Z::Bang | Z::Jian | Z::Ying) => "o",
                (G::One, O::Closed) if group != Z::Bang => "o",
                (G::One | G::Two, _) => "a",
                (G::Three | G::Four, O::Open) => pick(
                    matches!(group, Z::Zhi | Z::Zhang | Z::Jian | Z::Ying | Z::Ri),
                    "a",
                    "e",
                ),
                (G::Three | G::Four, O::Closed) => match group {
                    Z::Jian | Z::Ying => "a",
                    Z::Jing => "e",
                    _ => "o",
                },
                (G::Three | G::Four, O::Unmarked) => return None,
            },
            D::Geng => match (grade, openness) {
                (G::Two, _) => "e",
                (G::Three | G::Four, O::Open) => pick(retroflex(record), "ə", "i"),
                (G::Three | G::Four, O::Closed) => "u",
                _ => return None,
            },
            D::Zeng => match grade {
                G::One => "e",
                G::Three if group == Z::Zhuang => "e",
                G::Three => pick(retroflex(record), "ə", "i"),
                _ => return None,
            },
            D::Liu => match grade {
                G::One => "e",
                G::Three => pick(group == Z::Zhuang, "e", "u"),
                _ => return None,
            },
            D::Shen => pick(retroflex(record) || group == Z::Zhuang, "ə", "i"),
        })
    }

    fn coda(record: &RhymeClass, nucleus: &str) -> Option<&'static str> {
        let entering = record.is_entering();
        Some(match record.department {
            D::Zhi | D::Yu | D::Guo | D::Jia => "",
            D::Shen | D::Xian => pick(entering, "p", "m"),
            D::Zhen | D::Shan | D::Zeng => pick(entering, "t", "n"),
            D::Tong | D::Jiang | D::Dang => pick(entering, "k", "ŋ"),
            D::Xiao => "u",
            D::Liu => pick(nucleus != "u", "u", ""),
            D::Geng if entering => "k",
            D::Geng => pick(matches!(nucleus, "e" | "i" | "ə"), "n", "ŋ"),
            D::Xie => pick(!matches!(nucleus, "i" | "ɿ" | "e"), "i", ""),
        })
    }

    fn medial(record: &RhymeClass, nucleus: &str, coda: &str) -> Option<&'static str> {
        let group = record.group();
        let department = record.department;
        let grade = record.grade;
        let bare_i = nucleus == "i" && coda.is_empty();
        match record.openness {
            O::Unmarked | O::Open => {
                let palatal = pick(matches!(nucleus, "i" | "ɿ"), "", "j");
                Some(match grade {
                    G::Two
                        if matches!(group, Z::Jian | Z::Ying)
                            && matches!(department, D::Xie | D::Shan) =>
                    {
                        "j"
                    }
                    G::One | G::Two => "",
                    G::Three if group == Z::Bang && record.rhyme_group.labiodentalizes() => {
                        pick(nucleus != "u", "w", "")
                    }
                    G::Three if matches!(group, Z::Zhi | Z::Zhang | Z::Zhuang) => {
                        pick(record.initial == I::Niang, palatal, "")
                    }
                    G::Three if group == Z::Ri => pick(nucleus != "i", "j", ""),
                    G::Three | G::Four => palatal,
                })
            }
            O::Closed => Some(match group {
                Z::Bang => "",
                Z::Duan | Z::Zhi | Z::Zhuang | Z::Zhang | Z::Lai | Z::Jing
                    if department == D::Zhen && grade == G::Three =>
                {
                    ""
                }
                Z::Duan | Z::Zhi | Z::Zhuang | Z::Zhang => pick(bare_i, "w", ""),
                Z::Lai | Z::Jing => {
                    if bare_i {
                        "w"
                    } else if department == D::Shan && matches!(grade, G::Three | G::Four) {
                        "j"
                    } else {
                        ""
                    }
                }
                Z::Ri => pick(nucleus != "i", "j", ""),
                Z::Jian => {
                    if record.initial == I::Yi && department == D::Guo {
                        return Some("");
                    }
                    if department == D::Guo && grade == G::Three {
                        return Some("j");
                    }
                    if matches!(nucleus, "a" | "e") || (coda.is_empty() && matches!(nucleus, "i" | "o")) {
                        return Some("w");
                    }
                    match (department, grade) {
                        (D::Dang, _) => "w",
                        (D::Shan, G::One | G::Two) => "w",
                        (D::Shan, G::Three | G::Four) => "j",
                        (D::Zhen, G::One) => "",
                        (D::Zhen, G::Three) => "j",
                        (D::Geng, G::Three | G::Four) => "j",
                        _ => "",
                    }
                }
                Z::Ying => match grade {
                    G::One | G::Two => pick(nucleus != "u", "w", ""),
                    G::Three | G::Four => {
                        if bare_i {
                            "w"
                        } else {
                            match department {
                                D::Dang => "w",
                                D::Geng | D::Shan | D::Guo | D::Zhen => "j",
                                _ => "",
                            }
                        }
                    }
                },
            }),
        }
    }

    fn initial(record: &RhymeClass, medial: &str, nucleus: &str) -> Option<&'static str> {
        let rounded = medial == "w" || (medial.is_empty() && nucleus == "u");
        let labiodental = record.grade == G::Three && record.rhyme_group.labiodentalizes();
        let closed = record.openness == O::Closed;
        Some(match record.initial {
            I::Bang => pick(labiodental, "f", "p"),
            I::Pang | I::Bing => pick(labiodental, "f", "pʰ"),
            I::Ming => pick(labiodental && !record.rhyme_group.is_any("尤東"), "w", "m"),
            I::Duan => "t",
            I::Tou | I::Ding => "tʰ",
            I::Zhi | I::Jing | I::Zhang | I::Zhuang => "ts",
            I::Che | I::Cheng | I::Qing | I::Cong | I::Chang | I::Chu | I::Chong => "tsʰ",
            I::Ni | I::Niang => pick(medial == "j" || (medial.is_empty() && nucleus == "i"), "ŋ", "n"),
            I::Lai => "l",
            I::Xin | I::Xie | I::Sheng | I::Si | I::Chan | I::Shu | I::Chuan => "s",
            I::Ri | I::Yi => "ŋ",
            I::Jian => "k",
            I::Xi | I::Qun => "kʰ",
            I::Ying | I::Yun | I::Yu => "",
            I::Xiao | I::Xia => match record.grade {
                G::One | G::Two => pick(rounded, "f", "h"),
                G::Three | G::Four => pick(
                    closed && (nucleus == "i" || record.department == D::Dang),
                    "f",
                    "h",
                ),
            },
        })
    }

    fn tone(record: &RhymeClass) -> Option<&'static str> {
        let register = record.register();
        Some(match record.tone {
            ToneClass::Level => pick(register.is_clear(), "1", "2"),
            ToneClass::Rising => pick(register == Register::Voiced, "4", "3"),
            ToneClass::Departing => "4",
            ToneClass::Entering => pick(register == Register::Voiced, "6", "5"),
        })
    }

    fn patch(_record: &RhymeClass, parts: &mut ReflexParts) {
        if parts.initial == "f" && parts.medial == "w" {
            parts.medial = "";
        }
        if parts.initial == "w" {
            parts.initial = "";
            parts.medial = pick(parts.nucleus != "u", "w", "");
        }
        if parts.initial.is_empty() && parts.medial == "w" {
            parts.initial = "v";
            parts.medial = "";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive_parts;
    use crate::record::RhymeGroup;

    #[test]
    fn zero_initial_glide_hardens_to_v() {
        // 王
        let wang = RhymeClass {
            id: 2,
            initial: I::Yun,
            rhyme_group: RhymeGroup::new('陽').unwrap(),
            department: D::Dang,
            grade: G::Three,
            openness: O::Closed,
            tone: ToneClass::Level,
        };
        let parts = derive_parts::<HakkaRules>(&wang).unwrap();
        assert_eq!(parts.to_string(), "voŋ2");
    }

    #[test]
    fn niang_keeps_a_plain_vowel() {
        // 紉
        let nin = RhymeClass {
            id: 3,
            initial: I::Niang,
            rhyme_group: RhymeGroup::new('真').unwrap(),
            department: D::Zhen,
            grade: G::Three,
            openness: O::Open,
            tone: ToneClass::Level,
        };
        let parts = derive_parts::<HakkaRules>(&nin).unwrap();
        assert_eq!(parts.to_string(), "ŋin2");
    }
}
