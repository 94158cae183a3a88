//! Project metadata shown in the projects section

/// A single project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    /// Stable key within its collection
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Tech-stack tags, in display order
    pub technologies: &'static [&'static str],
    /// Feature bullets; empty for compact ("other") entries
    pub features: &'static [&'static str],
    pub github_url: &'static str,
}

impl ProjectEntry {
    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }
}

/// The two project collections rendered on the page
///
/// Both slices are `'static` and immutable; swapping the whole pair is the
/// only way the page state can change what is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectLists {
    featured: &'static [ProjectEntry],
    other: &'static [ProjectEntry],
}

impl ProjectLists {
    pub const fn new(featured: &'static [ProjectEntry], other: &'static [ProjectEntry]) -> Self {
        Self { featured, other }
    }

    /// Empty lists, before the catalog has been assigned
    pub const fn empty() -> Self {
        Self {
            featured: &[],
            other: &[],
        }
    }

    /// Projects rendered with full description, tags and feature bullets
    pub fn featured(&self) -> &'static [ProjectEntry] {
        self.featured
    }

    /// Projects rendered as compact link cards
    pub fn other(&self) -> &'static [ProjectEntry] {
        self.other
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.other.is_empty()
    }

    pub fn len(&self) -> usize {
        self.featured.len() + self.other.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[ProjectEntry] = &[ProjectEntry {
        id: 1,
        title: "Sample",
        description: "A sample project",
        technologies: &["Rust"],
        features: &[],
        github_url: "https://github.com/example/sample",
    }];

    #[test]
    fn test_empty_lists() {
        let lists = ProjectLists::empty();
        assert!(lists.is_empty());
        assert_eq!(lists.len(), 0);
        assert_eq!(lists, ProjectLists::default());
    }

    #[test]
    fn test_len_counts_both_collections() {
        let lists = ProjectLists::new(SAMPLE, SAMPLE);
        assert_eq!(lists.len(), 2);
        assert!(!lists.is_empty());
    }

    #[test]
    fn test_has_features() {
        assert!(!SAMPLE[0].has_features());
    }
}
