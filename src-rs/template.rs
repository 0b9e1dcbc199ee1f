//! Starter layout built from the element types an agent spotted in a
//! wireframe.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::create_element;
use crate::element::{Container, Properties};

pub const TEMPLATE_SPACING: f64 = 16.0;

const NEXT_STEPS: [&str; 4] = [
    "Agent should replace placeholder values with actual content from the wireframe",
    "Adjust spacing and alignment based on visual analysis",
    "Add specific styling and properties as needed",
    "Generate Flutter code by placing layout_structure under \"containers\" and running layout-helper --render-layout",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTemplate {
    pub layout_structure: Vec<Container>,
    pub next_steps: Vec<String>,
}

/// Builds one stretched column holding an element per detected type.
///
/// Ids are `{type}_{n}` where `n` is the number of elements already in the
/// column, so repeated types get increasing suffixes in insertion order.
pub fn build_template<S: AsRef<str>>(detected: &[S]) -> LayoutTemplate {
    let mut container = Container::column()
        .with_spacing(TEMPLATE_SPACING)
        .with_alignment("stretch");

    for kind in detected {
        let kind = kind.as_ref();
        let id = format!("{kind}_{}", container.len());
        let element = create_element(kind, id)
            .properties(placeholder_properties(kind))
            .build();
        container.push(element);
    }

    LayoutTemplate {
        layout_structure: vec![container],
        next_steps: NEXT_STEPS.iter().map(|step| step.to_string()).collect(),
    }
}

fn placeholder_properties(kind: &str) -> Properties {
    let pairs = match kind {
        "profile_image" => vec![
            ("shape", json!("circle")),
            ("size", json!(80)),
            ("placeholder", json!("person")),
        ],
        "textfield" => vec![
            ("label", json!("Field Label*")),
            ("required", json!(true)),
            ("validation", json!("required")),
        ],
        "button" => vec![("text", json!("Button Text")), ("style", json!("primary"))],
        _ => Vec::new(),
    };
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
