use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;

use wireframe_tools::cli::workflow::{self, WorkflowArgs};
use wireframe_tools::logging;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = WorkflowArgs::parse();
    logging::init(&args.log_level);
    debug!("parsed arguments: {args:?}");

    workflow::run(&args, &mut io::stdout().lock())
}
