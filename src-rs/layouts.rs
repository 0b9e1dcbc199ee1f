//! Prebuilt layouts for recurring wireframe patterns.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::{create_element, SPACING_MD, SPACING_SM};
use crate::element::{Container, Properties};

/// A screen layout as exchanged between the tools: the screen it belongs
/// to, a layout label, and its containers in rendering order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub screen_id: String,
    pub layout_type: String,
    pub containers: Vec<Container>,
}

/// One input row of a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Element type; `textfield` when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Element id; `field_{index}` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Extra properties; these override `text` and `style` on conflict.
    #[serde(default)]
    pub properties: Properties,
}

/// Builds a column of form fields, each preceded by a text label when the
/// field has a non-empty one.
pub fn create_form_layout(fields: &[FormField]) -> Container {
    let mut container = Container::column().with_spacing(SPACING_MD);

    for (index, field) in fields.iter().enumerate() {
        let kind = field.kind.as_deref().unwrap_or("textfield");
        let id = field
            .id
            .clone()
            .unwrap_or_else(|| format!("field_{index}"));

        if let Some(label) = field.label.as_deref().filter(|label| !label.is_empty()) {
            container.push(
                create_element("text", format!("{id}_label"))
                    .property("text", label)
                    .property("style", "label")
                    .property("font_weight", "w600")
                    .build(),
            );
        }

        container.push(
            create_element(kind, id)
                .properties(field.properties.clone())
                .build(),
        );
    }

    container
}

/// Builds a row of buttons, spread evenly when there is more than one.
pub fn create_button_row(buttons: &[ButtonSpec]) -> Container {
    let elements = buttons
        .iter()
        .map(|button| {
            let mut properties = Properties::new();
            properties.insert(
                "text".to_string(),
                json!(button.text.as_deref().unwrap_or("Button")),
            );
            properties.insert(
                "style".to_string(),
                json!(button.style.as_deref().unwrap_or("primary")),
            );
            for (key, value) in &button.properties {
                properties.insert(key.clone(), value.clone());
            }
            create_element("button", button.id.as_deref().unwrap_or("button"))
                .properties(properties)
                .build()
        })
        .collect();

    let alignment = if buttons.len() > 1 {
        "spaceEvenly"
    } else {
        "center"
    };

    Container::row()
        .with_elements(elements)
        .with_spacing(SPACING_MD)
        .with_alignment(alignment)
}

/// Profile picture with an optional upload button underneath.
pub fn create_profile_header(has_upload: bool) -> Container {
    let mut container = Container::column()
        .with_spacing(SPACING_SM)
        .with_alignment("center");

    container.push(
        create_element("profile_image", "profile_image")
            .property("shape", "circle")
            .property("placeholder", "person_placeholder")
            .build(),
    );

    if has_upload {
        container.push(
            create_element("button", "upload_button")
                .width(100.0)
                .height(32.0)
                .property("text", "อัปโหลด")
                .property("style", "secondary")
                .property("icon", "upload")
                .build(),
        );
    }

    container
}

/// Reference layout for the SC-09 profile form: avatar, upload button,
/// and first/last name fields in one centered column.
pub fn sample_profile_form() -> LayoutDocument {
    let column = Container::column()
        .with_alignment("center")
        .with_elements(vec![
            create_element("profile_image", "profile_image").build(),
            create_element("button", "upload_button")
                .property("text", "อัปโหลด")
                .property("style", "secondary")
                .build(),
            create_element("textfield", "first_name")
                .property("label", "ชื่อ*")
                .property("required", true)
                .build(),
            create_element("textfield", "last_name")
                .property("label", "นามสกุล*")
                .property("required", true)
                .build(),
        ]);

    LayoutDocument {
        screen_id: "SC-09".to_string(),
        layout_type: "form_with_tabs".to_string(),
        containers: vec![column],
    }
}

/// A column with one element per type, labelled `Sample {type}`, for
/// previewing generated code.
pub fn sample_column<S: AsRef<str>>(kinds: &[S]) -> Container {
    let elements = kinds
        .iter()
        .enumerate()
        .map(|(index, kind)| {
            let kind = kind.as_ref();
            let sample = format!("Sample {kind}");
            create_element(kind, format!("{kind}_{index}"))
                .property("label", sample.clone())
                .property("text", sample)
                .build()
        })
        .collect();
    Container::column()
        .with_elements(elements)
        .with_spacing(SPACING_MD)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabLayout {
    #[serde(rename = "type")]
    pub kind: String,
    pub tabs: Vec<Tab>,
    pub properties: Properties,
}

/// Builds a tab strip with the first tab active.
pub fn create_tab_layout<S: AsRef<str>>(names: &[S]) -> TabLayout {
    let tabs = names
        .iter()
        .enumerate()
        .map(|(index, name)| Tab {
            id: format!("tab_{index}"),
            title: name.as_ref().to_string(),
            active: index == 0,
        })
        .collect();

    let mut properties = Properties::new();
    properties.insert("indicator_color".to_string(), json!("primary"));
    properties.insert("label_style".to_string(), json!("tab_label"));

    TabLayout {
        kind: "tab_container".to_string(),
        tabs,
        properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn form_inserts_label_before_labelled_fields() {
        let fields = vec![
            FormField {
                id: Some("first_name".to_string()),
                label: Some("ชื่อ*".to_string()),
                ..Default::default()
            },
            FormField {
                kind: Some("button".to_string()),
                ..Default::default()
            },
        ];
        let form = create_form_layout(&fields);

        let ids: Vec<_> = form.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first_name_label", "first_name", "field_1"]);
        assert_eq!(form.kind, "column");
        assert_eq!(form.spacing, 16.0);

        let label = &form.elements[0];
        assert_eq!(label.kind, "text");
        assert_eq!(label.property_text("text", ""), "ชื่อ*");
        assert_eq!(label.property_text("font_weight", ""), "w600");
        assert_eq!(form.elements[1].kind, "textfield");
        assert_eq!(form.elements[1].height, 56.0);
        assert_eq!(form.elements[2].kind, "button");
    }

    #[test]
    fn form_skips_empty_labels() {
        let fields = vec![FormField {
            label: Some(String::new()),
            ..Default::default()
        }];
        let form = create_form_layout(&fields);
        assert_eq!(form.len(), 1);
        assert_eq!(form.elements[0].id, "field_0");
    }

    #[test]
    fn single_button_row_is_centered() {
        let row = create_button_row(&[ButtonSpec::default()]);
        assert_eq!(row.alignment, "center");
        assert_eq!(row.kind, "row");
        let button = &row.elements[0];
        assert_eq!(button.id, "button");
        assert_eq!(button.property_text("text", ""), "Button");
        assert_eq!(button.property_text("style", ""), "primary");
    }

    #[test]
    fn multi_button_row_spreads_evenly_and_merges_properties() {
        let mut extra = Properties::new();
        extra.insert("style".to_string(), Value::from("danger"));
        extra.insert("icon".to_string(), Value::from("close"));
        let buttons = vec![
            ButtonSpec {
                id: Some("save".to_string()),
                text: Some("Save".to_string()),
                ..Default::default()
            },
            ButtonSpec {
                id: Some("cancel".to_string()),
                style: Some("secondary".to_string()),
                properties: extra,
                ..Default::default()
            },
        ];
        let row = create_button_row(&buttons);
        assert_eq!(row.alignment, "spaceEvenly");
        assert_eq!(row.elements[0].property_text("text", ""), "Save");
        assert_eq!(row.elements[1].property_text("style", ""), "danger");
        assert_eq!(row.elements[1].property_text("icon", ""), "close");
    }

    #[test]
    fn profile_header_with_and_without_upload() {
        let header = create_profile_header(true);
        assert_eq!(header.len(), 2);
        assert_eq!(header.spacing, 8.0);
        assert_eq!(header.elements[0].width, 80.0);
        let upload = &header.elements[1];
        assert_eq!((upload.width, upload.height), (100.0, 32.0));
        assert_eq!(upload.property_text("text", ""), "อัปโหลด");

        let bare = create_profile_header(false);
        assert_eq!(bare.len(), 1);
        assert_eq!(bare.elements[0].kind, "profile_image");
    }

    #[test]
    fn tab_layout_marks_first_active() {
        let tabs = create_tab_layout(&["ข้อมูลส่วนตัว", "การศึกษา", "การทำงาน"]);
        assert_eq!(tabs.kind, "tab_container");
        let active: Vec<_> = tabs.tabs.iter().map(|t| t.active).collect();
        assert_eq!(active, [true, false, false]);
        assert_eq!(tabs.tabs[2].id, "tab_2");

        let value = serde_json::to_value(&tabs).unwrap();
        assert_eq!(value["type"], "tab_container");
        assert_eq!(value["properties"]["indicator_color"], "primary");
    }

    #[test]
    fn sample_profile_form_matches_reference_layout() {
        let doc = sample_profile_form();
        assert_eq!(doc.screen_id, "SC-09");
        let column = &doc.containers[0];
        assert_eq!(column.alignment, "center");
        assert_eq!(column.spacing, 16.0);
        let ids: Vec<_> = column.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["profile_image", "upload_button", "first_name", "last_name"]);
        assert_eq!((column.elements[1].width, column.elements[1].height), (100.0, 48.0));
        assert_eq!(column.elements[3].property_text("label", ""), "นามสกุล*");
    }

    #[test]
    fn layout_document_survives_json_round_trip() {
        let doc = sample_profile_form();
        let raw = serde_json::to_string_pretty(&doc).unwrap();
        let back: LayoutDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn sample_column_labels_each_element() {
        let column = sample_column(&["textfield", "button"]);
        assert_eq!(column.elements[0].id, "textfield_0");
        assert_eq!(column.elements[1].id, "button_1");
        assert_eq!(column.elements[0].property_text("label", ""), "Sample textfield");
        assert_eq!(column.elements[1].property_text("text", ""), "Sample button");
    }

    #[test]
    fn tab_layout_without_names_is_empty() {
        let tabs = create_tab_layout::<&str>(&[]);
        assert!(tabs.tabs.is_empty());
    }
}
