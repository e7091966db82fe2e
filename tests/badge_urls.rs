//! Integration tests for badge descriptions and their URLs

use pretty_assertions::assert_eq;

use readme_icons::badge::{badge_url_with_base, escape_segment, unescape_segment};
use readme_icons::markup::badge_markdown;
use readme_icons::{badge_url, BadgeKind, BadgeSpec, BadgeStyle, IconCatalog};

#[test]
fn test_badge_from_catalog_icon() {
    let icon = IconCatalog::builtin().get("nextdotjs").expect("bundled icon");
    let spec = BadgeSpec::from_icon(icon, "14");

    assert_eq!(
        badge_url(&spec),
        "https://img.shields.io/badge/Next.js-14-000000?style=for-the-badge&logo=nextdotjs&logoColor=white"
    );
}

#[test]
fn test_custom_badge_with_every_option() {
    let spec = BadgeSpec::custom("build-status", "passing tests", "#4c1")
        .with_style(BadgeStyle::FlatSquare)
        .with_logo("githubactions")
        .with_logo_color("#fff");

    assert_eq!(
        badge_url(&spec),
        "https://img.shields.io/badge/build--status-passing_tests-4c1?style=flat-square&logo=githubactions&logoColor=fff"
    );
}

#[test]
fn test_repository_badge_ignores_text_escaping() {
    let spec = BadgeSpec::repository_metric("stars", "some_org", "my-repo");

    assert_eq!(
        badge_url(&spec),
        "https://img.shields.io/github/stars/some_org/my-repo?style=for-the-badge"
    );
}

#[test]
fn test_mode_selects_path_shape() {
    let custom = badge_url(&BadgeSpec::custom("a", "b", "c"));
    let metric = badge_url(&BadgeSpec::repository_metric("forks", "a", "b"));

    assert!(custom.starts_with("https://img.shields.io/badge/"));
    assert!(metric.starts_with("https://img.shields.io/github/forks/"));
}

#[test]
fn test_self_hosted_service() {
    let spec = BadgeSpec::custom("", "ok", "green").with_style(BadgeStyle::Flat);
    assert_eq!(
        badge_url_with_base(&spec, "http://localhost:8080/"),
        "http://localhost:8080/badge/ok-green?style=flat"
    );
}

#[test]
fn test_escaping_reverses() {
    for text in ["hello world", "a-b_c", "C++ & Go", "100%", "semver 1.2.3-rc_1", "ünïcödé"] {
        let escaped = escape_segment(text);
        assert!(!escaped.contains(' '), "{escaped}");
        assert!(!escaped.contains('/'), "{escaped}");
        assert_eq!(unescape_segment(&escaped), text);
    }
}

#[test]
fn test_spec_json_shape() {
    let spec = BadgeSpec::repository_metric("stars", "rust-lang", "rust").with_color("#ff0000");
    let json = serde_json::to_value(&spec).unwrap();

    assert_eq!(json["mode"], "repositoryMetric");
    assert_eq!(json["style"], "for-the-badge");
    assert_eq!(json["color"], "#ff0000");

    let parsed: BadgeSpec = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, spec);
}

#[test]
fn test_spec_from_json_defaults() {
    let spec: BadgeSpec =
        serde_json::from_str(r#"{"mode":"custom","label":"Docs","message":"latest","color":"blue"}"#)
            .unwrap();

    assert_eq!(spec.style, BadgeStyle::ForTheBadge);
    assert_eq!(spec.logo, None);
    assert!(matches!(spec.kind, BadgeKind::Custom { ref label, .. } if label == "Docs"));
}

#[test]
fn test_badge_markdown() {
    let spec = BadgeSpec::repository_metric("forks", "octo", "cat");
    assert_eq!(
        badge_markdown(&spec, None),
        "![forks octo/cat](https://img.shields.io/github/forks/octo/cat?style=for-the-badge)"
    );
}
