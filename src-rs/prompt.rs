//! Messages asking the user to attach a wireframe image.
//!
//! Each message has two shapes. When the manifest knows the id, the message
//! names the entry and its declared path; otherwise it asks for the bare id
//! and a `{id}.png` file.

use crate::manifest::{EntryKind, Manifest, ManifestEntry};

/// Name and expected image path for an entry, defaulting to the id and
/// `{id}.png` for fields the manifest leaves out.
fn entry_labels(entry: &ManifestEntry, id: &str) -> (String, String) {
    let name = entry.name.clone().unwrap_or_else(|| id.to_string());
    let path = entry
        .path
        .clone()
        .unwrap_or_else(|| default_image_file(id));
    (name, path)
}

pub fn default_image_file(id: &str) -> String {
    format!("{id}.png")
}

pub fn screen_image_request(manifest: &Manifest, screen_id: &str) -> String {
    match manifest.find(EntryKind::Screen, screen_id) {
        Ok(entry) => {
            let (name, path) = entry_labels(entry, screen_id);
            known_screen_request(screen_id, &name, &path)
        }
        Err(_) => unknown_screen_request(screen_id),
    }
}

pub fn widget_image_request(manifest: &Manifest, widget_id: &str) -> String {
    match manifest.find(EntryKind::Widget, widget_id) {
        Ok(entry) => {
            let (name, path) = entry_labels(entry, widget_id);
            known_widget_request(widget_id, &name, &path)
        }
        Err(_) => unknown_widget_request(widget_id),
    }
}

fn unknown_screen_request(id: &str) -> String {
    format!(
        "
🖼️ **Image Request for {id}**

I need to see the wireframe image for **{id}** to create the Flutter implementation.

Please attach the wireframe image file for {id} so I can:
1. Analyze the layout and positioning of elements
2. Identify all UI components (buttons, text fields, images, etc.)
3. Generate accurate Flutter code that matches the design

**Expected file:** {id}.png or {id}.jpg

Once you provide the image, I'll use my visual capabilities to analyze it and create the appropriate Flutter widgets with correct positioning and styling.
"
    )
}

fn known_screen_request(id: &str, name: &str, path: &str) -> String {
    format!(
        "
🖼️ **Image Request for {id}**

I need to see the wireframe image for **{id} - {name}** to create the Flutter implementation.

Please attach the wireframe image file so I can:
1. Analyze the layout and positioning of elements
2. Identify all UI components (buttons, text fields, images, etc.)
3. Generate accurate Flutter code that matches the design exactly

**Expected file path in manifest:** `{path}`
**Screen description:** {name}

Once you provide the image, I'll use my visual capabilities to:
- ✅ Read all text labels and button names accurately
- ✅ Identify the correct layout structure (Column, Row, Stack)
- ✅ Detect proper spacing and alignment
- ✅ Generate Flutter code with 100% accuracy to your wireframe

Please attach the {id} wireframe image now.
"
    )
}

fn unknown_widget_request(id: &str) -> String {
    format!(
        "
🖼️ **Widget Image Request for {id}**

I need to see the wireframe image for **{id}** to create the Flutter widget implementation.

Please attach the wireframe image file for {id} so I can analyze the design and generate the appropriate Flutter widget code.
"
    )
}

fn known_widget_request(id: &str, name: &str, path: &str) -> String {
    format!(
        "
🖼️ **Widget Image Request for {id}**

I need to see the wireframe image for **{id} - {name}** to create the Flutter widget implementation.

Please attach the wireframe image file so I can:
1. Analyze the widget design and layout
2. Identify the correct styling and positioning
3. Generate accurate Flutter widget code

**Expected file path in manifest:** `{path}`
**Widget description:** {name}

Please attach the {id} wireframe image now.
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
screens:
  - id: SC-09
    name: Profile Setup
    path: sc09.png
  - id: SC-11
widgets:
  - id: WG-02
    name: Upload Button
    path: widgets/wg02.png
"#;

    #[test]
    fn unknown_screen_guesses_png_name() {
        let prompt = screen_image_request(&Manifest::empty(), "SC-09");
        assert!(prompt.contains("SC-09.png"));
        assert!(prompt.contains("**Expected file:** SC-09.png or SC-09.jpg"));
        assert!(!prompt.contains("Expected file path in manifest"));
        assert!(!prompt.contains("Screen description"));
    }

    #[test]
    fn known_screen_names_entry_and_path() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let prompt = screen_image_request(&manifest, "SC-09");
        assert!(prompt.contains("**SC-09 - Profile Setup**"));
        assert!(prompt.contains("`sc09.png`"));
        assert!(prompt.contains("**Screen description:** Profile Setup"));
        assert!(prompt.ends_with("Please attach the SC-09 wireframe image now.\n"));
    }

    #[test]
    fn known_screen_without_name_or_path_uses_id() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let prompt = screen_image_request(&manifest, "SC-11");
        assert!(prompt.contains("**SC-11 - SC-11**"));
        assert!(prompt.contains("`SC-11.png`"));
    }

    #[test]
    fn screen_missing_from_loaded_manifest_uses_unknown_branch() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let prompt = screen_image_request(&manifest, "SC-42");
        assert!(prompt.contains("SC-42.png"));
        assert!(!prompt.contains("Profile Setup"));
    }

    #[test]
    fn widget_requests_follow_manifest() {
        let manifest = Manifest::from_yaml_str(MANIFEST).unwrap();
        let known = widget_image_request(&manifest, "WG-02");
        assert!(known.starts_with("\n🖼️ **Widget Image Request for WG-02**"));
        assert!(known.contains("`widgets/wg02.png`"));
        assert!(known.contains("**Widget description:** Upload Button"));

        let unknown = widget_image_request(&manifest, "WG-07");
        assert!(unknown.contains("generate the appropriate Flutter widget code."));
        assert!(!unknown.contains("Widget description"));
    }
}
