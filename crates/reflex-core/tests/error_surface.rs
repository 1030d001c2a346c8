use reflex_core::{Dialect, ErrorInfo, ReflexError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_dialect(Dialect::Gan)
        .with_context("text", "qiāng")
}

#[test]
fn invalid_syllable_surface() {
    let err = ReflexError::illegal_slot(Dialect::Gan, "initial", "x", "xa");
    assert_eq!(err.info().code, "illegal-initial");
    assert_eq!(err.info().context["value"], "x");
    assert_eq!(err.info().dialect, Some(Dialect::Gan));
    assert!(!err.info().context.contains_key("dialect"));
}

#[test]
fn parse_failure_surface() {
    let err = ReflexError::unparseable(Dialect::Cantonese, "xyz9");
    assert_eq!(err.info().code, "unparseable");
    assert_eq!(err.info().context["text"], "xyz9");
}

#[test]
fn construction_failures_become_parse_failures() {
    let err = ReflexError::illegal_tone(Dialect::Gan, "4", "tɕʰjaŋ", false)
        .while_parsing(Dialect::Gan, "qiang4");
    match err {
        ReflexError::ParseFailure(info) => {
            assert_eq!(info.code, "unparseable");
            assert_eq!(info.context["text"], "qiang4");
            assert_eq!(info.context["cause"], "illegal-tone");
            assert_eq!(info.context["tone"], "4");
        }
        other => panic!("unexpected error family: {other:?}"),
    }
}

#[test]
fn derivation_errors_pass_through_parse_relabelling() {
    let err = ReflexError::DerivationNotFound(sample_info("category-not-found", "no rule"));
    let relabelled = err.clone().while_parsing(Dialect::Gan, "qiang");
    assert_eq!(relabelled, err);
}

#[test]
fn display_includes_context_and_hint() {
    let err = ReflexError::Serde(sample_info("bad-json", "schema mismatch").with_hint("check the record"));
    let text = err.to_string();
    assert!(text.starts_with("serde error: schema mismatch (code: bad-json, dialect: FG)"));
    assert!(text.contains("text=qiāng"));
    assert!(text.ends_with("hint: check the record"));
}
