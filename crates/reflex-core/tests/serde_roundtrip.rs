use reflex_core::{Dialect, ErrorInfo, ReflexError, ToneClass, ToneStyle};

#[test]
fn errors_serialize_with_family_tag() {
    let err = ReflexError::ParseFailure(
        ErrorInfo::new("unparseable", "bad")
            .with_dialect(Dialect::Korean)
            .with_context("text", "x"),
    );
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "ParseFailure");
    assert_eq!(json["detail"]["dialect"], "KR");
    assert_eq!(json["detail"]["context"]["text"], "x");
    let back: ReflexError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, err);
}

#[test]
fn dialects_use_storage_codes() {
    assert_eq!(serde_json::to_string(&Dialect::Hakka).expect("serialize"), "\"MH\"");
    let parsed: Dialect = serde_json::from_str("\"VN\"").expect("deserialize");
    assert_eq!(parsed, Dialect::Vietnamese);
    assert_eq!("gc".parse::<Dialect>().expect("code"), Dialect::Cantonese);
    assert_eq!("上海話".parse::<Dialect>().expect("name"), Dialect::Wu);
    let err = "XX".parse::<Dialect>().expect_err("unknown code");
    assert_eq!(err.info().code, "unknown-dialect");
}

#[test]
fn tone_classes_use_chinese_labels() {
    let json = serde_json::to_string(&ToneClass::Entering).expect("serialize");
    assert_eq!(json, "\"入\"");
    let style: ToneStyle = serde_json::from_str("\"diacritic\"").expect("deserialize");
    assert_eq!(style, ToneStyle::Diacritic);
}
