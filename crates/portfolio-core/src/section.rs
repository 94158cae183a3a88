//! Page sections and the viewport geometry used to track which one is in view

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the four fixed sections of the page, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in document order. Active-section lookup walks this order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM element id (also the `#fragment` in nav hrefs)
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// Vertical extent of an element relative to the viewport, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line `probe` px below the viewport top crosses
    /// this element (both edges inclusive).
    pub fn spans(&self, probe: f64) -> bool {
        self.top <= probe && self.bottom >= probe
    }
}

/// Geometry captured on a single scroll event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewportSnapshot {
    /// Window vertical scroll offset
    pub scroll_y: f64,

    /// Bounds per section; `None` when the element was not in the DOM
    pub sections: Vec<(Section, Option<SectionBounds>)>,
}

impl ViewportSnapshot {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            sections: Vec::with_capacity(Section::ALL.len()),
        }
    }

    /// Builder-style helper for recording a measured section
    pub fn with_section(mut self, section: Section, bounds: Option<SectionBounds>) -> Self {
        self.sections.push((section, bounds));
        self
    }

    /// Bounds recorded for `section`, if it was measured and present
    pub fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .and_then(|(_, bounds)| *bounds)
    }

    /// First section in document order whose bounds span `probe`.
    ///
    /// Iterates [`Section::ALL`] rather than the recorded order, so a snapshot
    /// measured out of order still resolves deterministically. Missing
    /// elements are skipped.
    pub fn section_in_view(&self, probe: f64) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| self.bounds(*section).is_some_and(|b| b.spans(probe)))
    }

    /// Whether the page has scrolled strictly past `threshold` px
    pub fn is_scrolled_past(&self, threshold: f64) -> bool {
        self.scroll_y > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(bounds: [(f64, f64); 4]) -> ViewportSnapshot {
        Section::ALL
            .into_iter()
            .zip(bounds)
            .fold(ViewportSnapshot::new(0.0), |snap, (section, (top, bottom))| {
                snap.with_section(section, Some(SectionBounds::new(top, bottom)))
            })
    }

    #[test]
    fn test_section_ids_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_section_id_is_an_error() {
        let err = "blog".parse::<Section>().unwrap_err();
        assert!(matches!(err, Error::UnknownSection(ref id) if id == "blog"));
    }

    #[test]
    fn test_nav_labels_in_document_order() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        insta::assert_snapshot!(labels.join(" | "), @"Home | About | Projects | Contact");
    }

    #[test]
    fn test_href_is_fragment() {
        assert_eq!(Section::Projects.href(), "#projects");
    }

    #[test]
    fn test_spans_is_inclusive_on_both_edges() {
        assert!(SectionBounds::new(100.0, 400.0).spans(100.0));
        assert!(SectionBounds::new(-300.0, 100.0).spans(100.0));
        assert!(!SectionBounds::new(100.5, 400.0).spans(100.0));
        assert!(!SectionBounds::new(-300.0, 99.5).spans(100.0));
    }

    #[test]
    fn test_section_in_view_at_top_of_page() {
        let snap = snapshot([(0.0, 800.0), (800.0, 1400.0), (1400.0, 2600.0), (2600.0, 3200.0)]);
        assert_eq!(snap.section_in_view(100.0), Some(Section::Home));
    }

    #[test]
    fn test_section_in_view_mid_page() {
        let snap = snapshot([
            (-1500.0, -700.0),
            (-700.0, -100.0),
            (-100.0, 1100.0),
            (1100.0, 1700.0),
        ]);
        assert_eq!(snap.section_in_view(100.0), Some(Section::Projects));
    }

    #[test]
    fn test_section_in_view_prefers_first_in_document_order() {
        // Overlapping boxes: both about and projects span the probe.
        let snap = snapshot([
            (-900.0, -100.0),
            (50.0, 150.0),
            (90.0, 900.0),
            (900.0, 1500.0),
        ]);
        assert_eq!(snap.section_in_view(100.0), Some(Section::About));
    }

    #[test]
    fn test_section_in_view_ignores_recorded_order() {
        let snap = ViewportSnapshot::new(0.0)
            .with_section(Section::Contact, Some(SectionBounds::new(0.0, 500.0)))
            .with_section(Section::About, Some(SectionBounds::new(0.0, 500.0)));
        assert_eq!(snap.section_in_view(100.0), Some(Section::About));
    }

    #[test]
    fn test_section_in_view_none_in_gap() {
        // Probe line falls in a gap between sections.
        let snap = snapshot([
            (-900.0, 50.0),
            (120.0, 700.0),
            (700.0, 1300.0),
            (1300.0, 1900.0),
        ]);
        assert_eq!(snap.section_in_view(100.0), None);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let snap = ViewportSnapshot::new(300.0)
            .with_section(Section::Home, None)
            .with_section(Section::About, None)
            .with_section(Section::Projects, Some(SectionBounds::new(0.0, 600.0)))
            .with_section(Section::Contact, None);
        assert_eq!(snap.section_in_view(100.0), Some(Section::Projects));
        assert_eq!(snap.bounds(Section::Home), None);
    }

    #[test]
    fn test_empty_snapshot_has_no_section() {
        assert_eq!(ViewportSnapshot::default().section_in_view(100.0), None);
    }

    #[test]
    fn test_is_scrolled_past_is_strict() {
        assert!(!ViewportSnapshot::new(50.0).is_scrolled_past(50.0));
        assert!(ViewportSnapshot::new(50.5).is_scrolled_past(50.0));
        assert!(!ViewportSnapshot::new(0.0).is_scrolled_past(50.0));
    }
}
