//! Section resolution tests
//!
//! Scroll position to active section mapping, including merged sections,
//! the top-of-page sentinel and malformed input.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sitekit::{resolve_active_section, ActiveSection, MergeRule, Section};
use test_case::test_case;

/// The live page: about and service-areas are merged, contact stands alone
fn site_sections() -> Vec<Section> {
    vec![
        Section::new("about", 500.0, 300.0),
        Section::new("service-areas", 820.0, 200.0),
        Section::new("contact", 1100.0, 250.0),
    ]
}

fn about_rule() -> Vec<MergeRule> {
    vec![MergeRule::new("about", "service-areas")]
}

fn section(id: &str) -> ActiveSection {
    ActiveSection::Section(id.to_string())
}

// =============================================================================
// END-TO-END PAGE
// =============================================================================

#[test_case(600.0, section("about") ; "inside about")]
#[test_case(900.0, section("about") ; "inside service areas resolves to about")]
#[test_case(810.0, section("about") ; "gap between merged sections")]
#[test_case(1150.0, section("contact") ; "inside contact")]
#[test_case(50.0, ActiveSection::Top ; "above first section")]
#[test_case(-20.0, ActiveSection::Top ; "negative scroll")]
#[test_case(1050.0, ActiveSection::None ; "gap after merged region")]
#[test_case(5000.0, ActiveSection::None ; "past last section")]
fn test_site_page(position: f64, expected: ActiveSection) {
    assert_eq!(
        resolve_active_section(position, &site_sections(), &about_rule()),
        expected
    );
}

#[test]
fn test_merged_region_bounds() {
    let sections = site_sections();
    let rules = about_rule();
    assert_eq!(resolve_active_section(500.0, &sections, &rules), section("about"));
    assert_eq!(resolve_active_section(1019.9, &sections, &rules), section("about"));
    // Upper bound is exclusive
    assert_eq!(
        resolve_active_section(1020.0, &sections, &rules),
        ActiveSection::None
    );
}

// =============================================================================
// MERGE RULES
// =============================================================================

#[test]
fn test_merge_gap_and_second_section() {
    let sections = vec![
        Section::new("about", 100.0, 100.0),
        Section::new("service-areas", 250.0, 100.0),
    ];
    let rules = about_rule();
    assert_eq!(resolve_active_section(220.0, &sections, &rules), section("about"));
    assert_eq!(resolve_active_section(300.0, &sections, &rules), section("about"));
}

#[test]
fn test_without_rules_sections_stay_separate() {
    let sections = site_sections();
    assert_eq!(
        resolve_active_section(900.0, &sections, &[]),
        section("service-areas")
    );
    assert_eq!(
        resolve_active_section(810.0, &sections, &[]),
        ActiveSection::None
    );
}

#[test]
fn test_rule_without_second_section_is_ignored() {
    let sections = vec![
        Section::new("about", 100.0, 100.0),
        Section::new("contact", 300.0, 100.0),
    ];
    assert_eq!(
        resolve_active_section(250.0, &sections, &about_rule()),
        ActiveSection::None
    );
}

#[test]
fn test_only_configured_pairs_merge() {
    let sections = vec![
        Section::new("services", 0.0, 100.0),
        Section::new("about", 200.0, 100.0),
        Section::new("service-areas", 400.0, 100.0),
    ];
    // services is not a merge source, so the gap after it stays unowned
    assert_eq!(
        resolve_active_section(150.0, &sections, &about_rule()),
        ActiveSection::None
    );
    assert_eq!(
        resolve_active_section(350.0, &sections, &about_rule()),
        section("about")
    );
}

#[test]
fn test_multiple_rules() {
    let sections = vec![
        Section::new("services", 0.0, 100.0),
        Section::new("gallery", 150.0, 100.0),
        Section::new("about", 300.0, 100.0),
        Section::new("service-areas", 450.0, 100.0),
    ];
    let rules = vec![
        MergeRule::new("services", "gallery"),
        MergeRule::new("about", "service-areas"),
    ];
    assert_eq!(resolve_active_section(120.0, &sections, &rules), section("services"));
    assert_eq!(resolve_active_section(200.0, &sections, &rules), section("services"));
    assert_eq!(resolve_active_section(275.0, &sections, &rules), ActiveSection::None);
    assert_eq!(resolve_active_section(500.0, &sections, &rules), section("about"));
}

// =============================================================================
// EDGE CASES
// =============================================================================

#[test_case(-100.0 ; "negative")]
#[test_case(0.0 ; "zero")]
#[test_case(1e9 ; "far down")]
fn test_empty_sections_resolve_to_none(position: f64) {
    assert_eq!(
        resolve_active_section(position, &[], &about_rule()),
        ActiveSection::None
    );
}

#[test]
fn test_zero_height_section_never_matches() {
    let sections = vec![
        Section::new("spacer", 100.0, 0.0),
        Section::new("contact", 100.0, 50.0),
    ];
    assert_eq!(resolve_active_section(100.0, &sections, &[]), section("contact"));
}

#[test]
fn test_first_match_wins_on_overlap() {
    // Overlap is a precondition violation; document order decides
    let sections = vec![Section::new("a", 0.0, 200.0), Section::new("b", 100.0, 200.0)];
    assert_eq!(resolve_active_section(150.0, &sections, &[]), section("a"));
}

#[test]
fn test_top_is_relative_to_first_section_only() {
    // Out of order input: "top" compares against the first listed section
    let sections = vec![Section::new("b", 500.0, 100.0), Section::new("a", 100.0, 100.0)];
    assert_eq!(resolve_active_section(150.0, &sections, &[]), section("a"));
    assert_eq!(resolve_active_section(300.0, &sections, &[]), ActiveSection::Top);
}

#[test]
fn test_resolution_is_idempotent() {
    let sections = site_sections();
    let rules = about_rule();
    for position in [-1.0, 0.0, 499.9, 500.0, 900.0, 1020.0, 1100.0, 1349.9, 1350.0] {
        let first = resolve_active_section(position, &sections, &rules);
        let second = resolve_active_section(position, &sections, &rules);
        assert_eq!(first, second, "position {position}");
    }
}

#[test]
fn test_exactly_one_result_per_position() {
    // Every position inside a section maps to it; the rest is top or none
    let sections = vec![
        Section::new("one", 100.0, 100.0),
        Section::new("two", 200.0, 150.0),
        Section::new("three", 400.0, 100.0),
    ];
    for step in 0..60 {
        let position = f64::from(step) * 10.0;
        let expected = sections
            .iter()
            .find(|s| position >= s.top && position < s.bottom())
            .map_or_else(
                || {
                    if position < 100.0 {
                        ActiveSection::Top
                    } else {
                        ActiveSection::None
                    }
                },
                |s| section(&s.id),
            );
        assert_eq!(
            resolve_active_section(position, &sections, &[]),
            expected,
            "position {position}"
        );
    }
}

#[test]
fn test_active_section_serializes_tagged() {
    let json = serde_json::to_string(&section("about")).unwrap();
    assert_eq!(json, r#"{"kind":"section","id":"about"}"#);
    let json = serde_json::to_string(&ActiveSection::Top).unwrap();
    assert_eq!(json, r#"{"kind":"top"}"#);
    let back: ActiveSection = serde_json::from_str(r#"{"kind":"none"}"#).unwrap();
    assert_eq!(back, ActiveSection::None);
}
