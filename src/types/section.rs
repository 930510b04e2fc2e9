use serde::{Deserialize, Serialize};

/// A named, vertically bounded region of the page.
///
/// Geometry comes straight from the rendered document (`offsetTop` /
/// `offsetHeight`) and is only valid for the resolution call it was read for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Element id (`<section id="...">`)
    pub id: String,
    /// Distance from the top of the page in pixels
    pub top: f64,
    /// Rendered height in pixels
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Exclusive lower edge of the section.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Two sections that are treated as one contiguous region.
///
/// When `first` is followed (anywhere later in document order) by `second`,
/// the interval of `first` is stretched to the bottom of `second`, absorbing
/// any gap in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRule {
    pub first: String,
    pub second: String,
}

impl MergeRule {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Result of resolving a scroll position against the page sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ActiveSection {
    /// Above every section (header / hero area)
    Top,
    /// Inside the section with this id
    Section(String),
    /// Past the last section, or no sections at all
    None,
}

impl ActiveSection {
    /// Section id, if the position landed inside a section.
    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Section(id) => Some(id),
            Self::Top | Self::None => None,
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Self::Top)
    }
}
