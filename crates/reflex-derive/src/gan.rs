//! Middle Chinese → Fuzhou Gan, literary layer.

use reflex_core::ToneClass;
use reflex_dialects::Gan;

use crate::engine::{Part, ReflexParts, RuleSet};
use crate::record::{
    Department as D, Grade as G, Initial as I, InitialGroup as Z, Openness as O, Register,
    RhymeClass,
};

/// Rule set for [`Gan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GanRules;

/// High front vowel or palatal glide.
fn is_fine(medial: &str, nucleus: &str) -> bool {
    (medial.is_empty() && matches!(nucleus, "i" | "y")) || matches!(medial, "j" | "ɥ")
}

fn is_rounded(medial: &str, nucleus: &str) -> bool {
    medial == "w" || (medial.is_empty() && nucleus == "u")
}

fn labiodental(record: &RhymeClass) -> bool {
    record.grade == G::Three && record.rhyme_group.labiodentalizes()
}

fn pick(condition: bool, yes: &'static str, no: &'static str) -> &'static str {
    if condition {
        yes
    } else {
        no
    }
}

fn ri_initial(record: &RhymeClass, medial: &str, fine: bool) -> &'static str {
    let closed = record.openness == O::Closed;
    match record.department {
        D::Zhi | D::Xie if closed => "l",
        D::Xiao | D::Dang | D::Xian => "l",
        D::Zhi | D::Yu | D::Zeng if medial.is_empty() => "",
        D::Tong | D::Liu => "",
        D::Shan if record.openness == O::Open => "",
        _ => pick(fine, "n", "l"),
    }
}

impl RuleSet for GanRules {
    type Dialect = Gan;

    const OVERRIDES: &'static [(u32, Part, &'static str)] = &[
        // 疫
        (3715, Part::Medial, ""),
        (3715, Part::Nucleus, "y"),
        // 域
        (3662, Part::Medial, ""),
        (3662, Part::Nucleus, "y"),
    ];

    fn nucleus(record: &RhymeClass) -> Option<&'static str> {
        let group = record.group();
        let grade = record.grade;
        let openness = record.openness;
        if record.department == D::Shen && group == Z::Zhuang {
            return Some("ɛ");
        }
        if record.rhyme_group.is_any("元") {
            match openness {
                O::Open => return Some("ɛ"),
                O::Closed => return Some(pick(group == Z::Bang, "a", "o")),
                O::Unmarked => {}
            }
        }
        Some(match record.department {
            D::Tong => "u",
            D::Jiang | D::Guo | D::Dang => "o",
            D::Shen => "i",
            D::Jia => "a",
            D::Zhi => match (group, openness) {
                (Z::Ri, O::Open) => "ɛ",
                (Z::Jing | Z::Zhuang, O::Open) => "ɿ",
                (Z::Zhuang, O::Closed) => "a",
                _ => "i",
            },
            D::Yu => {
                if record.initial == I::Ri {
                    "ɛ"
                } else if grade == G::Three
                    && (matches!(group, Z::Lai | Z::Jing | Z::Jian | Z::Ying)
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
                (G::Three | G::Four, _) => "i",
            },
            D::Zhen => match (grade, openness) {
                (G::One, O::Open) => "ɛ",
                (G::One, O::Closed) => "u",
                (G::Three, O::Open) => pick(group == Z::Zhuang, "ɛ", "i"),
                (G::Three, O::Closed) => pick(
                    matches!(group, Z::Bang | Z::Zhi | Z::Zhang | Z::Zhuang | Z::Ri),
                    "u",
                    "y",
                ),
                _ => return None,
            },
            D::Shan => match (grade, openness) {
                (G::One, O::Open) if matches!(group, Z::Bang | Z::Jian | Z::Ying) => "o",
                (G::One, O::Closed) => "o",
                (G::One | G::Two, _) => "a",
                (G::Three | G::Four, O::Open) => "ɛ",
                (G::Three | G::Four, O::Closed) => "o",
                (G::Three | G::Four, O::Unmarked) => return None,
            },
            D::Xiao => pick(
                grade == G::Three && (matches!(group, Z::Zhi | Z::Zhang) || record.initial == I::Ri),
                "ɛ",
                "a",
            ),
            D::Geng => match (grade, openness) {
                (G::Two, _) => "ɛ",
                (G::Three | G::Four, O::Open) => pick(group == Z::Zhuang, "ɛ", "i"),
                (G::Three | G::Four, O::Closed) => "u",
                _ => return None,
            },
            D::Zeng => match grade {
                G::One => "ɛ",
                G::Three => pick(group == Z::Zhuang, "ɛ", "i"),
                _ => return None,
            },
            D::Liu => match grade {
                G::One => "ɛ",
                G::Three if record.initial == I::Ming && record.rhyme_group.is_any("尤") => "ɛ",
                G::Three => pick(group == Z::Zhuang, "ɛ", "u"),
                _ => return None,
            },
            D::Xian => match (grade, openness) {
                (G::One, O::Open) if matches!(group, Z::Jian | Z::Ying) => "o",
                (G::One | G::Two, _) => "a",
                (G::Three, O::Closed) => "a",
                (G::Three | G::Four, _) => "ɛ",
            },
        })
    }

    fn coda(record: &RhymeClass, nucleus: &str) -> Option<&'static str> {
        let entering = record.is_entering();
        Some(match record.department {
            D::Zhi | D::Yu | D::Guo | D::Jia => "",
            D::Shen | D::Xian | D::Zhen | D::Shan => pick(entering, "t", "n"),
            D::Tong | D::Jiang | D::Dang => pick(entering, "ʔ", "ŋ"),
            D::Xiao => "u",
            D::Liu => pick(nucleus != "u", "u", ""),
            D::Geng if entering => "ʔ",
            D::Geng => pick(matches!(nucleus, "ɛ" | "i"), "n", "ŋ"),
            D::Zeng => pick(entering, "ʔ", "n"),
            D::Xie => pick(nucleus != "i", "i", ""),
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
                    G::One | G::Two => "",
                    G::Three if group == Z::Bang && record.rhyme_group.labiodentalizes() => {
                        if record.initial == I::Ming && record.rhyme_group.is_any("尤") {
                            ""
                        } else {
                            pick(nucleus != "u", "w", "")
                        }
                    }
                    G::Three if matches!(group, Z::Zhi | Z::Zhang | Z::Zhuang) => {
                        if record.initial == I::Niang {
                            palatal
                        } else if matches!(group, Z::Zhi | Z::Zhang) && department == D::Liu {
                            "j"
                        } else {
                            ""
                        }
                    }
                    G::Three
                        if group == Z::Ri
                            && ((department == D::Zhi && record.openness == O::Open)
                                || matches!(department, D::Yu | D::Xiao | D::Dang | D::Xian)) =>
                    {
                        ""
                    }
                    G::Three | G::Four => palatal,
                })
            }
            O::Closed => Some(match group {
                Z::Bang => "",
                Z::Duan | Z::Zhi | Z::Zhuang | Z::Zhang => pick(bare_i, "w", ""),
                Z::Lai | Z::Jing => {
                    if bare_i {
                        "w"
                    } else if department == D::Shan && matches!(grade, G::Three | G::Four) {
                        "ɥ"
                    } else {
                        ""
                    }
                }
                Z::Ri => match department {
                    D::Zhi | D::Xie => "w",
                    D::Zhen => "",
                    _ => "ɥ",
                },
                Z::Jian => {
                    if record.initial == I::Yi && department == D::Guo {
                        return Some("");
                    }
                    if department == D::Guo && grade == G::Three {
                        return Some("j");
                    }
                    if matches!(nucleus, "a" | "ɛ") || (coda.is_empty() && matches!(nucleus, "i" | "o")) {
                        return Some("w");
                    }
                    match (department, grade) {
                        (D::Dang, _) => "w",
                        (D::Shan, G::One | G::Two) => "w",
                        (D::Shan, G::Three | G::Four) => "ɥ",
                        (D::Zhen, G::One) => "",
                        (D::Zhen, G::Three) => pick(!matches!(nucleus, "u" | "y"), "ɥ", ""),
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
                                D::Geng | D::Guo => "j",
                                D::Shan => "ɥ",
                                D::Zhen => pick(!matches!(nucleus, "u" | "y"), "ɥ", ""),
                                _ => "",
                            }
                        }
                    }
                },
            }),
        }
    }

    fn initial(record: &RhymeClass, medial: &str, nucleus: &str) -> Option<&'static str> {
        let fine = is_fine(medial, nucleus);
        let rounded = is_rounded(medial, nucleus);
        let closed = record.openness == O::Closed;
        Some(match record.initial {
            I::Bang => pick(labiodental(record), "f", "p"),
            I::Pang | I::Bing => pick(labiodental(record), "f", "pʰ"),
            I::Ming => pick(
                labiodental(record) && !record.rhyme_group.is_any("尤東"),
                "w",
                "m",
            ),
            I::Duan | I::Zhang => "t",
            I::Tou | I::Ding | I::Chang => "tʰ",
            I::Zhi => match record.grade {
                G::Two => "ts",
                G::Three => "t",
                _ => return None,
            },
            I::Che | I::Cheng => match record.grade {
                G::Two => "tsʰ",
                G::Three => "tʰ",
                _ => return None,
            },
            I::Ni | I::Niang => pick(fine, "n", "l"),
            I::Lai => pick(fine, "t", "l"),
            I::Jing | I::Zhuang => pick(fine, "tɕ", "ts"),
            I::Qing | I::Cong | I::Chu | I::Chong => pick(fine, "tɕʰ", "tsʰ"),
            I::Xin | I::Xie | I::Sheng | I::Si | I::Chan | I::Shu | I::Chuan => pick(fine, "ɕ", "s"),
            I::Ri => ri_initial(record, medial, fine),
            I::Jian => pick(fine, "tɕ", "k"),
            I::Xi | I::Qun => pick(fine, "tɕʰ", "kʰ"),
            I::Yi if rounded => "",
            I::Yi => pick(fine, "n", "ŋ"),
            I::Ying => pick(rounded || fine, "", "ŋ"),
            I::Xiao | I::Xia => match record.grade {
                G::One | G::Two => pick(rounded, "f", "h"),
                G::Three | G::Four => {
                    let labial = closed
                        && ((nucleus == "i" && !matches!(record.department, D::Geng | D::Zeng))
                            || record.department == D::Dang);
                    pick(labial, "f", "ɕ")
                }
            },
            I::Yun | I::Yu => "",
        })
    }

    fn tone(record: &RhymeClass) -> Option<&'static str> {
        let register = record.register();
        Some(match record.tone {
            ToneClass::Level => pick(register.is_clear(), "1", "2"),
            ToneClass::Rising => pick(register == Register::Voiced, "6", "3"),
            ToneClass::Departing => pick(register.is_clear(), "5", "6"),
            ToneClass::Entering => pick(register == Register::Voiced, "8", "7"),
        })
    }

    fn patch(record: &RhymeClass, parts: &mut ReflexParts) {
        if parts.initial == "f" && parts.medial == "w" {
            parts.medial = "";
        }
        if parts.initial == "w" {
            parts.initial = "";
            parts.medial = pick(parts.nucleus != "u", "w", "");
        }
        if record.group() == Z::Zhuang
            && record.department == D::Zhi
            && record.openness == O::Closed
        {
            parts.coda = "i";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::derive_parts;
    use crate::record::RhymeGroup;

    fn record(initial: I, group: char, department: D, grade: G, openness: O, tone: ToneClass) -> RhymeClass {
        RhymeClass {
            id: 1,
            initial,
            rhyme_group: RhymeGroup::new(group).unwrap(),
            department,
            grade,
            openness,
            tone,
        }
    }

    #[test]
    fn labiodental_nasal_becomes_a_zero_initial_glide() {
        // 文
        let wen = record(I::Ming, '文', D::Zhen, G::Three, O::Closed, ToneClass::Level);
        let parts = derive_parts::<GanRules>(&wen).unwrap();
        assert_eq!((parts.initial, parts.medial, parts.nucleus, parts.coda), ("", "", "u", "n"));
        assert_eq!(parts.tone, "2");
    }

    #[test]
    fn zhuang_closed_zhi_gets_an_i_coda() {
        // 帥
        let shuai = record(I::Sheng, '脂', D::Zhi, G::Three, O::Closed, ToneClass::Departing);
        let parts = derive_parts::<GanRules>(&shuai).unwrap();
        assert_eq!(parts.to_string(), "sai5");
    }
}
