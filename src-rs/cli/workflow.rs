//! `agent-visual-workflow`: image requests and layout analysis guides.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, CommandFactory, Parser};
use log::debug;

use crate::cli::split_list;
use crate::guide::build_guide;
use crate::manifest::Manifest;
use crate::output::{emit, to_pretty_json};
use crate::prompt::{screen_image_request, widget_image_request};
use crate::template::build_template;

#[derive(Parser, Debug)]
#[command(
    name = "agent-visual-workflow",
    version,
    about = "Request wireframe images from the user and prepare layout analysis guides"
)]
#[command(group(
    ArgGroup::new("action")
        .args(["request_image", "request_widget", "prepare_layout"])
        .multiple(false)
))]
pub struct WorkflowArgs {
    /// Generate an image request prompt for a screen ID
    #[arg(long, value_name = "ID")]
    pub request_image: Option<String>,
    /// Generate an image request prompt for a widget ID
    #[arg(long, value_name = "ID")]
    pub request_widget: Option<String>,
    /// Prepare the layout analysis guide for a screen ID
    #[arg(long, value_name = "ID")]
    pub prepare_layout: Option<String>,
    /// Comma-separated element types detected in the wireframe (with --prepare-layout)
    #[arg(long, value_name = "LIST")]
    pub elements_detected: Option<String>,
    /// Path to the wireframes manifest (YAML)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
    /// Write the result to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

pub fn run(args: &WorkflowArgs, stdout: &mut dyn Write) -> Result<()> {
    let manifest = Manifest::load(args.manifest.as_deref()).context("failed to load manifest")?;
    let sink = args.output.as_deref();

    if let Some(screen_id) = &args.request_image {
        let prompt = screen_image_request(&manifest, screen_id);
        emit(stdout, sink, "Image request prompt", &prompt)
    } else if let Some(widget_id) = &args.request_widget {
        let prompt = widget_image_request(&manifest, widget_id);
        emit(stdout, sink, "Widget request prompt", &prompt)
    } else if let Some(screen_id) = &args.prepare_layout {
        let mut guide = build_guide(screen_id);
        if let Some(raw) = &args.elements_detected {
            let detected = split_list(raw);
            debug!("building layout template for {} detected elements", detected.len());
            guide = guide.with_template(build_template(&detected));
        }
        emit(stdout, sink, "Layout analysis guide", &to_pretty_json(&guide)?)
    } else {
        writeln!(stdout, "{}", WorkflowArgs::command().render_help())?;
        Ok(())
    }
}
