//! Flutter widget code generation from layout containers.
//!
//! Each element type maps to one snippet renderer. Types without a renderer
//! produce a placeholder comment rather than an error, so any layout can be
//! rendered. The output is plain text; nothing here checks that the emitted
//! Dart compiles.

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::element::{Container, Element};

/// Indentation of each child inside `children: [ ... ]`.
const CHILD_INDENT: &str = "    ";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("container {index} does not match the container shape")]
    MalformedContainer {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

type SnippetRenderer = fn(&Element) -> String;

/// Element type to renderer. Unlisted types fall through to
/// [`placeholder`].
const RENDERERS: [(&str, SnippetRenderer); 4] = [
    ("textfield", text_field),
    ("button", button),
    ("text", text),
    ("profile_image", profile_image),
];

fn renderer_for(kind: &str) -> Option<SnippetRenderer> {
    RENDERERS
        .iter()
        .find(|(key, _)| *key == kind)
        .map(|(_, render)| *render)
}

/// Renders one element as a Flutter widget expression ending in `,`.
pub fn render_element(element: &Element) -> String {
    match renderer_for(&element.kind) {
        Some(render) => render(element),
        None => {
            debug!("no renderer for element type {:?}, emitting placeholder", element.kind);
            placeholder(element)
        }
    }
}

/// Renders a container as a stretched Flutter `Column`.
///
/// Children keep container order. A `SizedBox` gap of the container's
/// spacing sits between consecutive children when the spacing is positive.
pub fn render_column(container: &Container) -> String {
    let gap = (container.spacing > 0.0)
        .then(|| format!("SizedBox(height: {}),", dart_double(container.spacing)));

    let mut children: Vec<String> = Vec::with_capacity(container.elements.len() * 2);
    for (index, element) in container.elements.iter().enumerate() {
        if index > 0 {
            if let Some(gap) = &gap {
                children.push(gap.clone());
            }
        }
        children.push(render_element(element));
    }

    let mut out = String::from("Column(\n  crossAxisAlignment: CrossAxisAlignment.stretch,\n  children: [\n");
    for child in &children {
        for line in child.lines() {
            out.push_str(CHILD_INDENT);
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("  ],\n)");
    out
}

/// Renders every object under the document's `containers` array, separated
/// by blank lines.
///
/// Non-object entries are skipped. A document without `containers` renders
/// to an empty string.
///
/// # Errors
///
/// Returns [`RenderError::MalformedContainer`] for an object entry that does
/// not deserialize as a [`Container`].
pub fn render_all(layout: &Value) -> Result<String, RenderError> {
    let Some(entries) = layout.get("containers").and_then(Value::as_array) else {
        return Ok(String::new());
    };

    let mut rendered = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            continue;
        }
        let container: Container = serde_json::from_value(entry.clone())
            .map_err(|source| RenderError::MalformedContainer { index, source })?;
        rendered.push(render_column(&container));
    }
    Ok(rendered.join("\n\n"))
}

/// Formats a number the way Dart reads a double literal: integral values
/// keep a trailing `.0`.
pub fn dart_double(value: f64) -> String {
    format!("{value:?}")
}

/// Escapes text for a single-quoted Dart string literal.
fn dart_str(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'").replace('$', "\\$")
}

fn text_field(element: &Element) -> String {
    format!(
        "TextFormField(\n  decoration: InputDecoration(\n    labelText: '{}',\n    hintText: '{}',\n  ),\n),",
        dart_str(&element.property_text("label", "")),
        dart_str(&element.property_text("hint", "")),
    )
}

fn button(element: &Element) -> String {
    let widget = if element.property_text("style", "primary") == "primary" {
        "ElevatedButton"
    } else {
        "OutlinedButton"
    };
    format!(
        "{widget}(\n  onPressed: () {{}},\n  child: Text('{}'),\n),",
        dart_str(&element.property_text("text", "Button")),
    )
}

fn text(element: &Element) -> String {
    let weight = element.property_text("font_weight", "normal");
    let style_suffix = if weight == "normal" {
        String::new()
    } else {
        format!(".copyWith(fontWeight: FontWeight.{weight})")
    };
    format!(
        "Text(\n  '{}',\n  style: Theme.of(context).textTheme.bodyMedium{style_suffix},\n),",
        dart_str(&element.property_text("text", "")),
    )
}

fn profile_image(element: &Element) -> String {
    let radius = dart_double(element.width / 2.0);
    let icon_size = dart_double(element.width * 0.6);
    format!(
        "CircleAvatar(\n  radius: {radius},\n  backgroundImage: _profileImage != null\n    ? FileImage(_profileImage!)\n    : null,\n  child: _profileImage == null\n    ? Icon(Icons.person, size: {icon_size})\n    : null,\n),"
    )
}

fn placeholder(element: &Element) -> String {
    format!("// TODO: Implement {} widget", element.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::create_element;
    use serde_json::json;

    fn column_of(elements: Vec<Element>) -> Container {
        Container::column().with_elements(elements)
    }

    #[test]
    fn text_field_uses_label_property() {
        let field = create_element("textfield", "name")
            .property("label", "Name*")
            .build();
        let code = render_column(&column_of(vec![field]));
        assert!(code.contains("labelText: 'Name*'"));
        assert!(code.contains("hintText: ''"));
    }

    #[test]
    fn button_style_picks_widget() {
        let primary = create_element("button", "ok").property("text", "OK").build();
        let secondary = create_element("button", "cancel")
            .property("style", "secondary")
            .build();
        assert!(render_element(&primary).starts_with("ElevatedButton("));
        assert!(render_element(&primary).contains("child: Text('OK'),"));
        let outlined = render_element(&secondary);
        assert!(outlined.starts_with("OutlinedButton("));
        assert!(outlined.contains("child: Text('Button'),"));
    }

    #[test]
    fn text_weight_adds_copy_with() {
        let plain = create_element("text", "t").property("text", "Hello").build();
        assert!(render_element(&plain).contains("bodyMedium,"));

        let bold = create_element("text", "t")
            .property("text", "ชื่อ*")
            .property("font_weight", "w600")
            .build();
        let code = render_element(&bold);
        assert!(code.contains("'ชื่อ*',"));
        assert!(code.contains("bodyMedium.copyWith(fontWeight: FontWeight.w600),"));
    }

    #[test]
    fn profile_image_sizes_from_width() {
        let avatar = create_element("profile_image", "avatar").build();
        let code = render_element(&avatar);
        assert!(code.contains("radius: 40.0,"));
        assert!(code.contains("Icon(Icons.person, size: 48.0)"));
    }

    #[test]
    fn unknown_types_degrade_to_placeholder() {
        let code = render_element(&create_element("carousel", "c").build());
        assert_eq!(code, "// TODO: Implement carousel widget");
    }

    #[test]
    fn quotes_in_text_are_escaped() {
        let button = create_element("button", "b").property("text", "Don't").build();
        assert!(render_element(&button).contains(r"Text('Don\'t')"));
    }

    #[test]
    fn spacing_sits_between_children_only() {
        let container = column_of(vec![
            create_element("text", "a").build(),
            create_element("text", "b").build(),
        ]);
        let code = render_column(&container);
        assert_eq!(code.matches("SizedBox(height: 16.0),").count(), 1);
        assert!(code.starts_with("Column(\n  crossAxisAlignment: CrossAxisAlignment.stretch,\n  children: [\n    Text(\n"));
        assert!(code.ends_with("    ),\n  ],\n)"));

        let tight = container.with_spacing(0.0);
        assert!(!render_column(&tight).contains("SizedBox"));
    }

    #[test]
    fn empty_column_renders_empty_children() {
        assert_eq!(
            render_column(&Container::column()),
            "Column(\n  crossAxisAlignment: CrossAxisAlignment.stretch,\n  children: [\n  ],\n)"
        );
    }

    #[test]
    fn render_all_joins_containers_with_blank_line() {
        let layout = json!({
            "containers": [
                {"type": "column", "elements": [{"type": "button", "id": "go"}]},
                "not a container",
                {"type": "row", "elements": [], "spacing": 8.0}
            ]
        });
        let code = render_all(&layout).unwrap();
        assert_eq!(code.matches("Column(").count(), 2);
        assert!(code.contains(")\n\nColumn("));
        assert!(code.contains("ElevatedButton("));
    }

    #[test]
    fn render_all_without_containers_is_empty() {
        assert_eq!(render_all(&json!({"screen_id": "SC-01"})).unwrap(), "");
    }

    #[test]
    fn render_all_rejects_malformed_entries() {
        let layout = json!({"containers": [{"type": "column"}]});
        let err = render_all(&layout).unwrap_err();
        assert!(matches!(err, RenderError::MalformedContainer { index: 0, .. }));

        let layout = json!({"containers": [{"type": "column", "elements": [], "colour": "red"}]});
        assert!(render_all(&layout).is_err());
    }

    #[test]
    fn dart_double_keeps_decimal_point() {
        assert_eq!(dart_double(16.0), "16.0");
        assert_eq!(dart_double(12.5), "12.5");
        assert_eq!(dart_double(24.0 * 0.6), "14.399999999999999");
    }
}
