//! Wireframe manifest: known screens and widgets with their image paths.
//!
//! The manifest is an optional YAML document with `screens` and `widgets`
//! sequences. A missing file leaves the manifest unloaded, and every lookup
//! then reports [`LookupError::NoManifest`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Screen,
    Widget,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Screen => f.write_str("Screen"),
            EntryKind::Widget => f.write_str("Widget"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No manifest loaded")]
    NoManifest,

    #[error("{kind} {id} not found in manifest")]
    NotFound { kind: EntryKind, id: String },
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest YAML")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Default, Deserialize)]
struct ManifestDocument {
    #[serde(default)]
    screens: Vec<ManifestEntry>,
    #[serde(default)]
    widgets: Vec<ManifestEntry>,
}

#[derive(Debug, Default)]
pub struct Manifest {
    document: Option<ManifestDocument>,
}

impl Manifest {
    /// A manifest with nothing loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads the manifest at `path` when given and present on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] when the file exists but cannot be read or
    /// is not a valid manifest document.
    pub fn load(path: Option<&Path>) -> Result<Self, ManifestError> {
        let Some(path) = path.filter(|path| path.exists()) else {
            debug!("no manifest file, lookups will report no manifest");
            return Ok(Self::empty());
        };
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_yaml_str(&raw)?;
        debug!(
            "loaded manifest {}: {} screens, {} widgets",
            path.display(),
            manifest.screens().len(),
            manifest.widgets().len()
        );
        Ok(manifest)
    }

    /// Parses a manifest document. Blank or `null` documents load nothing.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ManifestError> {
        if raw.trim().is_empty() {
            return Ok(Self::empty());
        }
        let document: Option<ManifestDocument> = serde_yaml::from_str(raw)?;
        Ok(Self { document })
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn screens(&self) -> &[ManifestEntry] {
        self.document
            .as_ref()
            .map(|doc| doc.screens.as_slice())
            .unwrap_or_default()
    }

    pub fn widgets(&self) -> &[ManifestEntry] {
        self.document
            .as_ref()
            .map(|doc| doc.widgets.as_slice())
            .unwrap_or_default()
    }

    pub fn find_screen(&self, id: &str) -> Result<&ManifestEntry, LookupError> {
        self.find(EntryKind::Screen, id)
    }

    pub fn find_widget(&self, id: &str) -> Result<&ManifestEntry, LookupError> {
        self.find(EntryKind::Widget, id)
    }

    /// First entry of `kind` whose id equals `id`.
    pub fn find(&self, kind: EntryKind, id: &str) -> Result<&ManifestEntry, LookupError> {
        let document = self.document.as_ref().ok_or(LookupError::NoManifest)?;
        let entries = match kind {
            EntryKind::Screen => &document.screens,
            EntryKind::Widget => &document.widgets,
        };
        let found = entries.iter().find(|entry| entry.id == id);
        debug!("manifest lookup {kind} {id}: found={}", found.is_some());
        found.ok_or_else(|| LookupError::NotFound {
            kind,
            id: id.to_string(),
        })
    }

    /// Lookup result as a JSON record: the entry itself, or
    /// `{"error": "<message>"}` when the lookup fails.
    pub fn lookup_record(&self, kind: EntryKind, id: &str) -> Value {
        match self.find(kind, id) {
            Ok(entry) => json!(entry),
            Err(err) => json!({ "error": err.to_string() }),
        }
    }
}
