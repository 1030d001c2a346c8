//! Middle Chinese category records.
//!
//! A [`RhymeClass`] is one 小韻 of the rhyme tables with its categorical
//! position. Field names on the wire are the dataset's Chinese column names.

use std::fmt::{self, Display};

use reflex_core::{ErrorInfo, ReflexError, ToneClass};
use serde::{Deserialize, Serialize};

/// Declares a closed category enum whose wire form is its one-character label.
macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The traditional label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Looks a value up by its label.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|value| value.label() == label)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category! {
    /// The 38 initials (聲母) of the rhyme tables.
    pub enum Initial {
        Bang => "幫", Pang => "滂", Bing => "並", Ming => "明",
        Duan => "端", Tou => "透", Ding => "定", Ni => "泥",
        Zhi => "知", Che => "徹", Cheng => "澄", Niang => "娘",
        Jing => "精", Qing => "清", Cong => "從", Xin => "心", Xie => "邪",
        Zhuang => "莊", Chu => "初", Chong => "崇", Sheng => "生", Si => "俟",
        Zhang => "章", Chang => "昌", Chan => "常", Shu => "書", Chuan => "船",
        Ri => "日",
        Jian => "見", Xi => "溪", Qun => "羣", Yi => "疑",
        Ying => "影", Xiao => "曉", Xia => "匣", Yun => "云", Yu => "以",
        Lai => "來",
    }
}

category! {
    /// Initial groups (組).
    pub enum InitialGroup {
        Bang => "幫", Duan => "端", Zhi => "知", Jing => "精", Zhuang => "莊",
        Zhang => "章", Ri => "日", Jian => "見", Ying => "影", Lai => "來",
    }
}

category! {
    /// Phonation register of an initial (清濁).
    pub enum Register {
        Clear => "全清", Aspirated => "次清", Voiced => "全濁", Sonorant => "次濁",
    }
}

category! {
    /// The 16 departments (攝).
    pub enum Department {
        Tong => "通", Jiang => "江", Zhi => "止", Yu => "遇",
        Xie => "蟹", Zhen => "臻", Shan => "山", Xiao => "效",
        Guo => "果", Jia => "假", Dang => "宕", Geng => "梗",
        Zeng => "曾", Liu => "流", Shen => "深", Xian => "咸",
    }
}

category! {
    /// Division (等).
    pub enum Grade {
        One => "一", Two => "二", Three => "三", Four => "四",
    }
}

category! {
    /// Rounding (呼). Rhymes neutral to rounding are [`Openness::Unmarked`].
    pub enum Openness {
        Unmarked => "", Open => "開", Closed => "合",
    }
}

impl Default for Openness {
    fn default() -> Self {
        Openness::Unmarked
    }
}

impl Initial {
    /// The group the initial belongs to.
    pub fn group(self) -> InitialGroup {
        use Initial::*;
        match self {
            Bang | Pang | Bing | Ming => InitialGroup::Bang,
            Duan | Tou | Ding | Ni => InitialGroup::Duan,
            Zhi | Che | Cheng | Niang => InitialGroup::Zhi,
            Jing | Qing | Cong | Xin | Xie => InitialGroup::Jing,
            Zhuang | Chu | Chong | Sheng | Si => InitialGroup::Zhuang,
            Zhang | Chang | Chan | Shu | Chuan => InitialGroup::Zhang,
            Ri => InitialGroup::Ri,
            Jian | Xi | Qun | Yi => InitialGroup::Jian,
            Ying | Xiao | Xia | Yun | Yu => InitialGroup::Ying,
            Lai => InitialGroup::Lai,
        }
    }

    /// The register of the initial.
    pub fn register(self) -> Register {
        use Initial::*;
        match self {
            Bang | Duan | Zhi | Jing | Xin | Zhuang | Sheng | Zhang | Shu | Jian | Ying
            | Xiao => Register::Clear,
            Pang | Tou | Che | Qing | Chu | Chang | Xi => Register::Aspirated,
            Bing | Ding | Cheng | Cong | Xie | Chong | Si | Chan | Chuan | Qun | Xia => {
                Register::Voiced
            }
            Ming | Ni | Niang | Lai | Ri | Yi | Yun | Yu => Register::Sonorant,
        }
    }
}

impl Register {
    /// 清 as opposed to 濁.
    pub fn is_clear(self) -> bool {
        matches!(self, Register::Clear | Register::Aspirated)
    }
}

/// The 61 rhyme groups (韻系), each named by its level-tone rhyme.
pub const RHYME_GROUPS: &str = "東冬鍾江支脂之微魚虞模齊祭泰佳皆夬灰咍廢真諄臻文殷元魂痕寒桓刪山先仙蕭宵肴豪歌戈麻陽唐庚耕清青蒸登尤侯幽侵覃談鹽添咸銜嚴凡";

/// Rhyme groups whose grade-three labials became labiodentals (非敷奉微).
const LABIODENTAL_GROUPS: &str = "東鍾微虞廢文元陽尤凡";

/// A rhyme group (韻系).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RhymeGroup(char);

impl RhymeGroup {
    /// Validates a rhyme group name.
    pub fn new(name: char) -> Option<Self> {
        RHYME_GROUPS.contains(name).then_some(Self(name))
    }

    /// The rhyme group's name character.
    pub fn name(self) -> char {
        self.0
    }

    /// Whether the group is one of `names`.
    pub fn is_any(self, names: &str) -> bool {
        names.contains(self.0)
    }

    /// Whether grade-three labials in this group turned labiodental.
    pub fn labiodentalizes(self) -> bool {
        self.is_any(LABIODENTAL_GROUPS)
    }
}

impl TryFrom<String> for RhymeGroup {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next().and_then(Self::new), chars.next()) {
            (Some(group), None) => Ok(group),
            _ => Err(format!("unknown rhyme group {value:?}")),
        }
    }
}

impl From<RhymeGroup> for String {
    fn from(group: RhymeGroup) -> Self {
        group.0.to_string()
    }
}

impl Display for RhymeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One historical rhyme class (小韻) with its categorical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RhymeClass {
    /// Rhyme-class number.
    #[serde(rename = "小韻號")]
    pub id: u32,
    /// Initial.
    #[serde(rename = "聲母")]
    pub initial: Initial,
    /// Rhyme group.
    #[serde(rename = "韻系")]
    pub rhyme_group: RhymeGroup,
    /// Department.
    #[serde(rename = "攝")]
    pub department: Department,
    /// Division.
    #[serde(rename = "等")]
    pub grade: Grade,
    /// Rounding.
    #[serde(rename = "呼", default)]
    pub openness: Openness,
    /// Tone class.
    #[serde(rename = "聲調")]
    pub tone: ToneClass,
}

impl RhymeClass {
    /// The initial's group.
    pub fn group(&self) -> InitialGroup {
        self.initial.group()
    }

    /// The initial's register.
    pub fn register(&self) -> Register {
        self.initial.register()
    }

    /// Whether the class is an entering-tone (checked) syllable.
    pub fn is_entering(&self) -> bool {
        self.tone == ToneClass::Entering
    }

    /// Short description such as `見合三仙平`.
    pub fn describe(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.initial,
            self.openness,
            self.grade,
            self.rhyme_group,
            self.tone.label()
        )
    }

    /// Reads a JSON array of records.
    pub fn from_json_list(text: &str) -> Result<Vec<RhymeClass>, ReflexError> {
        serde_json::from_str(text).map_err(|err| {
            ReflexError::Serde(
                ErrorInfo::new("invalid-record", format!("cannot read rhyme classes: {err}"))
                    .with_context("line", err.line().to_string())
                    .with_context("column", err.column().to_string()),
            )
        })
    }
}
