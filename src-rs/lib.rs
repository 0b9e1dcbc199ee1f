//! Helpers for turning wireframe images into Flutter layouts.
//!
//! Two tools share this library. `agent-visual-workflow` asks the user for
//! wireframe images and hands the agent an analysis guide;
//! `layout-helper` exposes the spacing and size catalogs and renders layout
//! containers into Flutter widget code.

pub mod catalog;
pub mod cli;
pub mod element;
pub mod guide;
pub mod layouts;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod prompt;
pub mod render;
pub mod template;

pub use element::{Container, Element, ElementBuilder, Insets, Properties};
pub use manifest::{EntryKind, LookupError, Manifest, ManifestEntry};
pub use render::{render_all, render_column, RenderError};
