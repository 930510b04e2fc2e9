//! Scroll position to section resolution.

use crate::types::{ActiveSection, MergeRule, Section};

/// End of the containment interval for the section at `index`.
///
/// Normally `top + height`. If the section is the `first` of a merge rule and
/// the rule's `second` appears later in `sections`, the interval reaches the
/// bottom of that later section instead. With several applicable rules the
/// furthest end wins.
pub fn section_end(sections: &[Section], index: usize, rules: &[MergeRule]) -> Option<f64> {
    let section = sections.get(index)?;
    let later = sections.get(index + 1..).unwrap_or_default();

    let end = rules
        .iter()
        .filter(|rule| rule.first == section.id)
        .filter_map(|rule| later.iter().find(|s| s.id == rule.second))
        .map(Section::bottom)
        .fold(section.bottom(), f64::max);
    Some(end)
}

/// Resolve which section a scroll position falls into.
///
/// `scroll_position` is the window scroll offset plus the header offset.
/// Intervals are `[top, end)`; the first section in document order whose
/// interval contains the position wins. A position above the first section
/// resolves to [`ActiveSection::Top`]; anything else that matches nothing
/// (including an empty section list) resolves to [`ActiveSection::None`].
pub fn resolve_active_section(
    scroll_position: f64,
    sections: &[Section],
    rules: &[MergeRule],
) -> ActiveSection {
    if !scroll_position.is_finite() {
        return ActiveSection::None;
    }

    for (index, section) in sections.iter().enumerate() {
        let end = section_end(sections, index, rules).unwrap_or_else(|| section.bottom());
        if scroll_position >= section.top && scroll_position < end {
            return ActiveSection::Section(section.id.clone());
        }
    }

    match sections.first() {
        Some(first) if scroll_position < first.top => ActiveSection::Top,
        _ => ActiveSection::None,
    }
}

/// Insert a merge partner that was located without an id.
///
/// The partner goes in top-offset order but never ahead of the rule's
/// `first` section, so it cannot become the first section and shift the
/// `Top` boundary. Nothing is inserted when `first` is absent or `second`
/// is already present. Returns whether the partner was inserted.
pub fn insert_merge_partner(sections: &mut Vec<Section>, rule: &MergeRule, partner: Section) -> bool {
    if sections.iter().any(|s| s.id == rule.second) {
        return false;
    }
    let Some(first) = sections.iter().position(|s| s.id == rule.first) else {
        return false;
    };
    let by_top = sections
        .iter()
        .position(|s| s.top > partner.top)
        .unwrap_or(sections.len());
    sections.insert(by_top.max(first + 1), partner);
    true
}

/// Window scroll offset that brings a section to just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn about_rule() -> Vec<MergeRule> {
        vec![MergeRule::new("about", "service-areas")]
    }

    #[test]
    fn test_section_end_without_merge() {
        let sections = vec![Section::new("about", 100.0, 100.0)];
        assert_eq!(section_end(&sections, 0, &[]), Some(200.0));
        assert_eq!(section_end(&sections, 1, &[]), None);
    }

    #[test]
    fn test_section_end_absorbs_gap() {
        let sections = vec![
            Section::new("about", 100.0, 100.0),
            Section::new("service-areas", 250.0, 100.0),
        ];
        assert_eq!(section_end(&sections, 0, &about_rule()), Some(350.0));
        // The second section keeps its own interval
        assert_eq!(section_end(&sections, 1, &about_rule()), Some(350.0));
    }

    #[test]
    fn test_merge_ignores_earlier_second() {
        // `second` must come after `first` in document order
        let sections = vec![
            Section::new("service-areas", 0.0, 100.0),
            Section::new("about", 100.0, 100.0),
        ];
        assert_eq!(section_end(&sections, 1, &about_rule()), Some(200.0));
    }

    #[test]
    fn test_furthest_merge_wins() {
        let sections = vec![
            Section::new("about", 0.0, 100.0),
            Section::new("team", 100.0, 100.0),
            Section::new("service-areas", 200.0, 100.0),
        ];
        let rules = vec![
            MergeRule::new("about", "service-areas"),
            MergeRule::new("about", "team"),
        ];
        assert_eq!(section_end(&sections, 0, &rules), Some(300.0));
    }

    #[test]
    fn test_non_finite_position() {
        let sections = vec![Section::new("about", 100.0, 100.0)];
        assert_eq!(
            resolve_active_section(f64::NAN, &sections, &[]),
            ActiveSection::None
        );
        assert_eq!(
            resolve_active_section(f64::NEG_INFINITY, &sections, &[]),
            ActiveSection::None
        );
    }

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_partner_needs_first() {
        let mut sections = vec![Section::new("contact", 1100.0, 250.0)];
        let partner = Section::new("service-areas", 820.0, 200.0);
        assert!(!insert_merge_partner(&mut sections, &about_rule()[0], partner));
        assert_eq!(ids(&sections), ["contact"]);
        // Still `Top` above contact, as if the class element were not there
        assert_eq!(
            resolve_active_section(900.0, &sections, &about_rule()),
            ActiveSection::Top
        );
    }

    #[test]
    fn test_partner_inserted_in_top_order() {
        let mut sections = vec![
            Section::new("about", 500.0, 300.0),
            Section::new("contact", 1100.0, 250.0),
        ];
        let partner = Section::new("service-areas", 820.0, 200.0);
        assert!(insert_merge_partner(&mut sections, &about_rule()[0], partner));
        assert_eq!(ids(&sections), ["about", "service-areas", "contact"]);
        assert_eq!(
            resolve_active_section(900.0, &sections, &about_rule()),
            ActiveSection::Section("about".to_string())
        );
    }

    #[test]
    fn test_partner_never_precedes_first() {
        let mut sections = vec![
            Section::new("about", 500.0, 300.0),
            Section::new("contact", 1100.0, 250.0),
        ];
        // Class element laid out above every section
        let partner = Section::new("service-areas", 0.0, 50.0);
        assert!(insert_merge_partner(&mut sections, &about_rule()[0], partner));
        assert_eq!(ids(&sections), ["about", "service-areas", "contact"]);
        assert_eq!(
            resolve_active_section(20.0, &sections, &about_rule()),
            ActiveSection::Top
        );
    }

    #[test]
    fn test_partner_with_id_not_duplicated() {
        let mut sections = vec![
            Section::new("about", 500.0, 300.0),
            Section::new("service-areas", 820.0, 200.0),
        ];
        let partner = Section::new("service-areas", 900.0, 10.0);
        assert!(!insert_merge_partner(&mut sections, &about_rule()[0], partner));
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(500.0, 80.0), 420.0);
        assert_eq!(scroll_target(20.0, 80.0), -60.0);
    }
}
