//! Pipeline integration tests

use citenote_cli::{build_report, CitenoteConfig};

const CLIPBOARD: &str = "For God so loved the world (John 3:16), the _whole_ world__1__.\n@book{carson_1991__john,\n  author = {D. A. Carson},\n  title = {The Gospel According to John},\n  pages = {204},\n}";

#[test]
fn test_report_with_defaults() {
    let report = build_report(CLIPBOARD, None, &CitenoteConfig::default());

    assert_eq!(
        report.parsed.main_text,
        "For God so loved the world ([John 3:16](https://ref.ly/Jn3.16;esv)), the *whole* world<sup>1</sup>."
    );
    assert_eq!(report.parsed.page, Some("204".to_string()));
    assert_eq!(report.cite_key, Some("carson-1991-john".to_string()));
    assert_eq!(
        report.title,
        Some("The Gospel According to John".to_string())
    );
}

#[test]
fn test_report_without_post_processing() {
    let config = CitenoteConfig {
        link_verses: false,
        clean_formatting: false,
        ..Default::default()
    };
    let report = build_report(CLIPBOARD, None, &config);
    assert_eq!(
        report.parsed.main_text,
        "For God so loved the world (John 3:16), the _whole_ world__1__."
    );
}

#[test]
fn test_report_uses_configured_translation() {
    let config = CitenoteConfig {
        translation: "nasb".to_string(),
        ..Default::default()
    };
    let report = build_report(CLIPBOARD, None, &config);
    assert!(report.parsed.main_text.contains("Jn3.16;nasb95"));
}

#[test]
fn test_report_without_record() {
    let report = build_report("Just a thought.", None, &CitenoteConfig::default());
    assert_eq!(report.parsed.main_text, "Just a thought.");
    assert_eq!(report.cite_key, None);
    assert_eq!(report.title, None);
}

#[test]
fn test_report_json_shape() {
    let report = build_report(CLIPBOARD, None, &CitenoteConfig::default());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["citeKey"], "carson-1991-john");
    assert_eq!(json["page"], "204");
    assert!(json["mainText"].is_string());
    assert!(json["bibliographicRecord"]
        .as_str()
        .unwrap()
        .starts_with("@book{carson_1991__john"));
}
