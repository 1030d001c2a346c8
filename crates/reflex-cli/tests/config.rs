use std::fs;

use reflex_cli::commands::kebab;
use reflex_cli::CliConfig;
use reflex_core::{Dialect, ReflexError, ToneStyle};
use reflex_dialects::KoreanScript;
use reflex_script::kana::KanaForm;

#[test]
fn yaml_fields_feed_the_render_style() {
    let config = CliConfig::from_yaml(
        "default_dialect: GC\ntone_style: diacritic\nseparate_checked_tone: true\njapanese_script: hepburn\nkorean_script: revised\n",
    )
    .expect("valid configuration");
    assert_eq!(config.default_dialect, Some(Dialect::Cantonese));
    assert_eq!(config.log_level, "info");
    let style = config.render_style();
    assert_eq!(style.tone, ToneStyle::Diacritic);
    assert!(style.separate_checked_tone);
    assert_eq!(style.japanese.script, KanaForm::Hepburn);
    assert!(style.japanese.small_kana);
    assert_eq!(style.korean, KoreanScript::Revised);
}

#[test]
fn empty_document_is_the_default() {
    assert_eq!(CliConfig::from_yaml("").expect("empty is fine"), CliConfig::default());
}

#[test]
fn unknown_tone_style_is_a_serde_error() {
    let err = CliConfig::from_yaml("tone_style: sideways\n").expect_err("not a tone style");
    match err {
        ReflexError::Serde(info) => {
            assert_eq!(info.code, "invalid-config");
            assert_eq!(info.context.get("line").map(String::as_str), Some("1"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn configuration_loads_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("reflex.yaml");
    fs::write(&path, "default_dialect: MH\nlog_level: debug\n").expect("write config");
    let config = CliConfig::load(Some(&path)).expect("config loads");
    assert_eq!(config.default_dialect, Some(Dialect::Hakka));
    assert_eq!(config.log_level, "debug");
    assert_eq!(CliConfig::load(None).expect("defaults"), CliConfig::default());
}

#[test]
fn missing_dialect_is_reported() {
    let config = CliConfig::default();
    assert!(config.dialect(None).is_err());
    assert_eq!(config.dialect(Some(Dialect::Wu)).expect("explicit"), Dialect::Wu);
}

#[test]
fn flag_values_use_kebab_case() {
    assert_eq!(kebab::<ToneStyle>("omitted"), Ok(ToneStyle::Omitted));
    assert_eq!(kebab::<KanaForm>("hiragana"), Ok(KanaForm::Hiragana));
    assert!(kebab::<KoreanScript>("latin").is_err());
}
