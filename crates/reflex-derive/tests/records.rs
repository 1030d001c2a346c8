use reflex_core::{Dialect, ReflexError};
use reflex_derive::{derive_reflex, GanRules, ReflexParts, RhymeClass};

const RECORDS: &str = r#"[
    {"小韻號": 12, "聲母": "見", "韻系": "陽", "攝": "宕", "等": "三", "呼": "開", "聲調": "平"},
    {"小韻號": 40, "聲母": "明", "韻系": "文", "攝": "臻", "等": "三", "呼": "合", "聲調": "平"},
    {"小韻號": 77, "聲母": "云", "韻系": "陽", "攝": "宕", "等": "三", "呼": "合", "聲調": "平"}
]"#;

#[test]
fn dataset_records_derive_in_both_rule_dialects() {
    let records = RhymeClass::from_json_list(RECORDS).expect("records parse");
    assert_eq!(records.len(), 3);

    let gan: Vec<String> = records
        .iter()
        .map(|record| derive_reflex(Dialect::Gan, record).expect("derives").reading().raw)
        .collect();
    assert_eq!(gan, ["tɕjoŋ", "un", "woŋ"]);

    let hakka: Vec<String> = records
        .iter()
        .map(|record| derive_reflex(Dialect::Hakka, record).expect("derives").reading().raw)
        .collect();
    assert_eq!(hakka, ["kjoŋ", "un", "voŋ"]);
}

#[test]
fn derived_parts_serialise_with_slot_names() {
    let records = RhymeClass::from_json_list(RECORDS).expect("records parse");
    let parts: ReflexParts = reflex_derive::derive_parts::<GanRules>(&records[0]).expect("derives");
    let json = serde_json::to_value(parts).expect("serialises");
    assert_eq!(json["initial"], "tɕ");
    assert_eq!(json["medial"], "j");
    assert_eq!(json["tone"], "1");
}

#[test]
fn record_round_trips_through_its_chinese_columns() {
    let records = RhymeClass::from_json_list(RECORDS).expect("records parse");
    let text = serde_json::to_string(&records[1]).expect("serialises");
    assert!(text.contains("\"攝\":\"臻\""));
    let back: RhymeClass = serde_json::from_str(&text).expect("deserialises");
    assert_eq!(back, records[1]);
}

#[test]
fn unknown_category_is_a_serde_error() {
    let err = RhymeClass::from_json_list(r#"[{"小韻號": 1, "聲母": "非"}]"#)
        .expect_err("非 is not a rhyme-table initial");
    match err {
        ReflexError::Serde(info) => assert_eq!(info.code, "invalid-record"),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn dialects_without_rules_are_reported() {
    let records = RhymeClass::from_json_list(RECORDS).expect("records parse");
    let err = derive_reflex(Dialect::Mandarin, &records[0]).expect_err("no Mandarin rules");
    match err {
        ReflexError::DerivationNotFound(info) => {
            assert_eq!(info.code, "no-rule-set");
            assert_eq!(info.dialect, Some(Dialect::Mandarin));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn entering_tone_on_an_open_department_fails_validation() {
    let record: RhymeClass = serde_json::from_str(
        r#"{"小韻號": 9, "聲母": "見", "韻系": "之", "攝": "止", "等": "三", "呼": "開", "聲調": "入"}"#,
    )
    .expect("record parses");
    let err = derive_reflex(Dialect::Gan, &record).expect_err("止 has no stop coda");
    match err {
        ReflexError::InvalidSyllable(info) => {
            assert_eq!(info.code, "illegal-tone");
            assert_eq!(info.context.get("id").map(String::as_str), Some("9"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}
