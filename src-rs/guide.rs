//! Checklist an agent follows while reading a wireframe image.

use indexmap::IndexMap;
use serde::Serialize;

use crate::template::LayoutTemplate;

const ANALYSIS_CHECKLIST: [&str; 8] = [
    "Identify the main layout type (Column, Row, Stack, or custom)",
    "List all UI elements from top to bottom, left to right",
    "Note the positioning and alignment of each element",
    "Identify spacing between elements",
    "Check for any tabs or multi-state components",
    "Note any special styling or decorations",
    "Identify required vs optional fields",
    "Check for any icons or images",
];

const ELEMENTS_TO_LOOK_FOR: [&str; 8] = [
    "Profile image (circular)",
    "Upload buttons",
    "Text fields with labels",
    "Required field indicators (*)",
    "Primary/secondary buttons",
    "Tab navigation",
    "Form sections",
    "Headers and titles",
];

/// UI pattern name to the Flutter widget that implements it.
const FLUTTER_MAPPING: [(&str, &str); 8] = [
    ("circular_image", "CircleAvatar"),
    ("text_field", "TextFormField"),
    ("button_primary", "ElevatedButton"),
    ("button_secondary", "OutlinedButton"),
    ("text_label", "Text with style"),
    ("column_layout", "Column"),
    ("row_layout", "Row"),
    ("tabs", "TabBar + TabBarView"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisGuide {
    pub screen_id: String,
    pub analysis_checklist: Vec<&'static str>,
    pub common_elements_to_look_for: Vec<&'static str>,
    pub flutter_mapping: IndexMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_template: Option<LayoutTemplate>,
}

/// The fixed analysis guide. `screen_id` is echoed back unchanged.
pub fn build_guide(screen_id: &str) -> AnalysisGuide {
    AnalysisGuide {
        screen_id: screen_id.to_string(),
        analysis_checklist: ANALYSIS_CHECKLIST.to_vec(),
        common_elements_to_look_for: ELEMENTS_TO_LOOK_FOR.to_vec(),
        flutter_mapping: FLUTTER_MAPPING.iter().copied().collect(),
        layout_template: None,
    }
}

impl AnalysisGuide {
    pub fn with_template(mut self, template: LayoutTemplate) -> Self {
        self.layout_template = Some(template);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::build_template;

    #[test]
    fn guide_is_static_apart_from_screen_id() {
        let a = build_guide("SC-01");
        let b = build_guide("SC-02");
        assert_eq!(a.screen_id, "SC-01");
        assert_eq!(a.analysis_checklist, b.analysis_checklist);
        assert_eq!(a.flutter_mapping, b.flutter_mapping);
        assert_eq!(a.flutter_mapping["tabs"], "TabBar + TabBarView");
        assert_eq!(a.analysis_checklist.len(), 8);
    }

    #[test]
    fn template_field_only_serialized_when_present() {
        let guide = build_guide("SC-09");
        let bare = serde_json::to_value(&guide).unwrap();
        assert!(bare.get("layout_template").is_none());

        let with = serde_json::to_value(guide.with_template(build_template(&["button"]))).unwrap();
        assert_eq!(
            with["layout_template"]["layout_structure"][0]["elements"][0]["id"],
            "button_0"
        );
    }

    #[test]
    fn mapping_serializes_in_declared_order() {
        let raw = serde_json::to_string(&build_guide("SC-09")).unwrap();
        let circular = raw.find("circular_image").unwrap();
        let tabs = raw.find("\"tabs\"").unwrap();
        assert!(circular < tabs);
    }
}
