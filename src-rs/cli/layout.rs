//! `layout-helper`: catalogs, sample structures, and Flutter code output.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, CommandFactory, Parser};
use serde_json::Value;

use crate::catalog::spacing_guide;
use crate::cli::split_list;
use crate::layouts::{sample_column, sample_profile_form};
use crate::output::{emit, to_pretty_json};
use crate::render::{render_all, render_column};

#[derive(Parser, Debug)]
#[command(
    name = "layout-helper",
    version,
    about = "Layout catalogs and Flutter widget code generation for wireframe screens"
)]
#[command(group(
    ArgGroup::new("action")
        .args([
            "generate_structure",
            "create_spacing_guide",
            "generate_flutter_layout",
            "render_layout",
        ])
        .multiple(false)
))]
pub struct LayoutArgs {
    /// Print the sample layout structure as JSON
    #[arg(long)]
    pub generate_structure: bool,
    /// Print the spacing and element size catalogs as JSON
    #[arg(long)]
    pub create_spacing_guide: bool,
    /// Generate a Flutter Column for the element types given with --elements
    #[arg(long, requires = "elements")]
    pub generate_flutter_layout: bool,
    /// Comma-separated element types
    #[arg(long, value_name = "LIST")]
    pub elements: Option<String>,
    /// Render every container of a layout JSON document as Flutter code
    #[arg(long, value_name = "PATH")]
    pub render_layout: Option<PathBuf>,
    /// Write the result to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

pub fn run(args: &LayoutArgs, stdout: &mut dyn Write) -> Result<()> {
    let sink = args.output.as_deref();

    if args.generate_structure {
        emit(stdout, sink, "Layout structure", &to_pretty_json(&sample_profile_form())?)
    } else if args.create_spacing_guide {
        emit(stdout, sink, "Spacing guide", &to_pretty_json(&spacing_guide())?)
    } else if let (true, Some(raw)) = (args.generate_flutter_layout, &args.elements) {
        let code = render_column(&sample_column(&split_list(raw)));
        emit(stdout, sink, "Flutter layout code", &code)
    } else if let Some(path) = &args.render_layout {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read layout: {}", path.display()))?;
        let layout: Value = serde_json::from_str(&raw)
            .with_context(|| format!("invalid layout JSON: {}", path.display()))?;
        let code = render_all(&layout)
            .with_context(|| format!("failed to render layout: {}", path.display()))?;
        emit(stdout, sink, "Flutter widget code", &code)
    } else {
        writeln!(stdout, "{}", LayoutArgs::command().render_help())?;
        Ok(())
    }
}
