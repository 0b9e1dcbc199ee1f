//! Layout records: elements, containers, and their inset boxes.
//!
//! Every [`Element`] and [`Container`] carries fully populated margin,
//! padding, and property fields. Construction goes through
//! [`ElementBuilder`] or [`Container::new`], and deserialization fills the
//! same defaults for absent or `null` fields.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::{FALLBACK_HEIGHT, FALLBACK_WIDTH, SPACING_MD};

/// Free-form, type-dependent element settings, in insertion order.
pub type Properties = IndexMap<String, Value>;

pub const DEFAULT_ALIGNMENT: &str = "center";

/// Four named insets around a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Insets {
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    pub const fn uniform(value: f64) -> Self {
        Self::symmetric(value, value)
    }

    pub const fn element_margin() -> Self {
        Self::symmetric(8.0, 16.0)
    }

    pub const fn element_padding() -> Self {
        Self::symmetric(12.0, 16.0)
    }

    pub const fn container_padding() -> Self {
        Self::uniform(16.0)
    }
}

/// A leaf UI component destined for code generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "fallback_width")]
    pub width: f64,
    #[serde(default = "fallback_height")]
    pub height: f64,
    #[serde(default = "default_alignment")]
    pub alignment: String,
    #[serde(default = "Insets::element_margin", deserialize_with = "element_margin_or_null")]
    pub margin: Insets,
    #[serde(default = "Insets::element_padding", deserialize_with = "element_padding_or_null")]
    pub padding: Insets,
    #[serde(default, deserialize_with = "properties_or_null")]
    pub properties: Properties,
}

impl Element {
    pub fn builder(kind: impl Into<String>, id: impl Into<String>) -> ElementBuilder {
        ElementBuilder::new(kind, id)
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns a property as display text, or `default` when absent.
    ///
    /// Strings are used verbatim; other JSON values use their compact
    /// JSON form.
    pub fn property_text(&self, key: &str, default: &str) -> String {
        match self.properties.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => default.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Assembles an [`Element`] from defaults plus caller overrides.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            element: Element {
                kind: kind.into(),
                id: id.into(),
                x: 0.0,
                y: 0.0,
                width: FALLBACK_WIDTH,
                height: FALLBACK_HEIGHT,
                alignment: default_alignment(),
                margin: Insets::element_margin(),
                padding: Insets::element_padding(),
                properties: Properties::new(),
            },
        }
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.element.x = x;
        self.element.y = y;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.element.width = width;
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.element.height = height;
        self
    }

    pub fn alignment(mut self, alignment: impl Into<String>) -> Self {
        self.element.alignment = alignment.into();
        self
    }

    pub fn margin(mut self, margin: Insets) -> Self {
        self.element.margin = margin;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.element.padding = padding;
        self
    }

    /// Replaces the whole property bag.
    pub fn properties(mut self, properties: Properties) -> Self {
        self.element.properties = properties;
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.element.properties.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Element {
        self.element
    }
}

/// An ordered group of elements plus layout metadata.
///
/// Element order is rendering order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Container {
    #[serde(rename = "type")]
    pub kind: String,
    pub elements: Vec<Element>,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default = "default_alignment")]
    pub alignment: String,
    #[serde(default = "Insets::container_padding", deserialize_with = "container_padding_or_null")]
    pub padding: Insets,
}

impl Container {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            elements: Vec::new(),
            spacing: default_spacing(),
            alignment: default_alignment(),
            padding: Insets::container_padding(),
        }
    }

    pub fn column() -> Self {
        Self::new("column")
    }

    pub fn row() -> Self {
        Self::new("row")
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = alignment.into();
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn fallback_width() -> f64 {
    FALLBACK_WIDTH
}

fn fallback_height() -> f64 {
    FALLBACK_HEIGHT
}

fn default_spacing() -> f64 {
    SPACING_MD
}

fn default_alignment() -> String {
    DEFAULT_ALIGNMENT.to_string()
}

fn element_margin_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Insets, D::Error> {
    Ok(Option::<Insets>::deserialize(deserializer)?.unwrap_or_else(Insets::element_margin))
}

fn element_padding_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Insets, D::Error> {
    Ok(Option::<Insets>::deserialize(deserializer)?.unwrap_or_else(Insets::element_padding))
}

fn container_padding_or_null<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Insets, D::Error> {
    Ok(Option::<Insets>::deserialize(deserializer)?.unwrap_or_else(Insets::container_padding))
}

fn properties_or_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Properties, D::Error> {
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}
