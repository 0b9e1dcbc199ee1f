//! Standard spacing values and default element sizes.
//!
//! Both tables are fixed for the life of the process. Lookups that need an
//! ordered view (the spacing guide output) go through [`spacing_table`] and
//! [`element_size_table`], which keep the declaration order below.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::element::ElementBuilder;

pub const SPACING_SM: f64 = 8.0;
/// Gap between form fields and between row buttons.
pub const SPACING_MD: f64 = 16.0;

/// Spacing scale, smallest to largest.
pub const SPACING: [(&str, f64); 6] = [
    ("xs", 4.0),
    ("sm", SPACING_SM),
    ("md", SPACING_MD),
    ("lg", 24.0),
    ("xl", 32.0),
    ("xxl", 48.0),
];

/// Width used when the size catalog has no numeric width for a type.
pub const FALLBACK_WIDTH: f64 = 100.0;
/// Height used when the size catalog has no numeric height for a type.
pub const FALLBACK_HEIGHT: f64 = 40.0;

/// One axis of a catalog size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Fixed(f64),
    /// Fill the parent along this axis.
    MatchParent,
    /// Size to content along this axis.
    WrapContent,
}

impl Dimension {
    pub fn as_fixed(self) -> Option<f64> {
        match self {
            Dimension::Fixed(value) => Some(value),
            Dimension::MatchParent | Dimension::WrapContent => None,
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Fixed(value) => serializer.serialize_f64(*value),
            Dimension::MatchParent => serializer.serialize_str("match_parent"),
            Dimension::WrapContent => serializer.serialize_str("wrap_content"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeDefault {
    pub width: Dimension,
    pub height: Dimension,
}

const fn size(width: Dimension, height: Dimension) -> SizeDefault {
    SizeDefault { width, height }
}

/// Default sizes keyed by element type.
pub const ELEMENT_SIZES: [(&str, SizeDefault); 7] = [
    ("button", size(Dimension::MatchParent, Dimension::Fixed(48.0))),
    ("textfield", size(Dimension::MatchParent, Dimension::Fixed(56.0))),
    ("text", size(Dimension::WrapContent, Dimension::WrapContent)),
    ("image", size(Dimension::Fixed(120.0), Dimension::Fixed(120.0))),
    ("profile_image", size(Dimension::Fixed(80.0), Dimension::Fixed(80.0))),
    ("icon", size(Dimension::Fixed(24.0), Dimension::Fixed(24.0))),
    ("card", size(Dimension::MatchParent, Dimension::WrapContent)),
];

pub fn spacing(name: &str) -> Option<f64> {
    SPACING
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

pub fn size_for(kind: &str) -> Option<SizeDefault> {
    ELEMENT_SIZES
        .iter()
        .find(|(key, _)| *key == kind)
        .map(|(_, size)| *size)
}

/// Resolves the numeric width and height an element of `kind` starts with.
///
/// Only numeric catalog entries are honored. Symbolic entries such as
/// `match_parent` fall back per axis to [`FALLBACK_WIDTH`] and
/// [`FALLBACK_HEIGHT`], as do types missing from the catalog.
pub fn default_size(kind: &str) -> (f64, f64) {
    match size_for(kind) {
        Some(size) => (
            size.width.as_fixed().unwrap_or(FALLBACK_WIDTH),
            size.height.as_fixed().unwrap_or(FALLBACK_HEIGHT),
        ),
        None => (FALLBACK_WIDTH, FALLBACK_HEIGHT),
    }
}

/// Starts an element of `kind` with its catalog geometry applied.
///
/// Callers layer overrides on the returned builder before calling
/// [`ElementBuilder::build`].
pub fn create_element(kind: &str, id: impl Into<String>) -> ElementBuilder {
    let (width, height) = default_size(kind);
    ElementBuilder::new(kind, id).width(width).height(height)
}

pub fn spacing_table() -> IndexMap<&'static str, f64> {
    SPACING.iter().copied().collect()
}

pub fn element_size_table() -> IndexMap<&'static str, SizeDefault> {
    ELEMENT_SIZES.iter().copied().collect()
}

const USAGE_EXAMPLES: [(&str, &str); 4] = [
    ("form_spacing", "Use 'md' (16px) between form fields"),
    ("button_spacing", "Use 'sm' (8px) between buttons in a row"),
    ("section_spacing", "Use 'lg' (24px) between major sections"),
    ("container_padding", "Use 'md' (16px) for container padding"),
];

/// Both catalogs plus guidance on which spacing step to use where.
#[derive(Debug, Clone, Serialize)]
pub struct SpacingGuide {
    pub spacing_values: IndexMap<&'static str, f64>,
    pub element_sizes: IndexMap<&'static str, SizeDefault>,
    pub usage_examples: IndexMap<&'static str, &'static str>,
}

pub fn spacing_guide() -> SpacingGuide {
    SpacingGuide {
        spacing_values: spacing_table(),
        element_sizes: element_size_table(),
        usage_examples: USAGE_EXAMPLES.iter().copied().collect(),
    }
}
