use app_errors::{parse_accept_language, BuildOption, Language, ERR_INVALID_ACCEPT_LANGUAGE};
use serial_test::serial;

fn tags(header: &str) -> Vec<String> {
    parse_accept_language(header).unwrap().iter().map(|l| l.to_string()).collect()
}

#[test]
fn wildcard_maps_to_mul() {
    assert_eq!(tags("*"), ["mul"]);
    assert_eq!(parse_accept_language("*").unwrap(), [Language::MUL]);
}

#[test]
fn simple_and_full_tags() {
    assert_eq!(tags("de"), ["de"]);
    assert_eq!(tags("ja-JP"), ["ja-JP"]);
}

#[test]
fn ordered_by_quality_and_deduplicated() {
    assert_eq!(
        tags("fr-CH, fr;q=0.9, en;q=0.8, en, de;q=0.7, de, *;q=0.5"),
        ["fr-CH", "en", "de", "fr", "mul"]
    );
}

#[test]
fn deduplication_ignores_case() {
    assert_eq!(tags("en, EN;q=0.5, fr;q=0.4"), ["en", "fr"]);
    assert_eq!(tags("de-ch;q=0.9, DE-CH, de"), ["DE-CH", "de"]);
}

#[test]
fn empty_header_yields_nothing() {
    assert!(tags("").is_empty());
    assert!(tags(" , ").is_empty());
}

#[test]
#[serial]
fn invalid_header_is_a_bad_request() {
    let err = parse_accept_language("abc123").unwrap_err();
    let info = err.build(&Language::EN, &[BuildOption::no_translation()]).error_info;

    assert_eq!(info.status, 400);
    assert_eq!(info.code, ERR_INVALID_ACCEPT_LANGUAGE);
    assert_eq!(info.message, "invalid language tag `abc123`");

    assert!(parse_accept_language("en;q=high").is_err());
}

#[test]
fn serializes_as_plain_tag() {
    assert_eq!(serde_json::to_string(&Language::ZH).unwrap(), r#""zh""#);
    assert_eq!(serde_json::from_str::<Language>(r#""pt-BR""#).unwrap(), Language::new("pt-BR"));
    assert_eq!(Language::default(), Language::EN);
}
