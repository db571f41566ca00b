use anyhow::{Context, Result};
use clap::Parser;
use respack::source::names_from_args;
use respack::ResourcePacker;
use std::ffi::OsString;
use std::io;
use tracing_subscriber::EnvFilter;

/// Pack resource files into a C source file on stdout
#[derive(Parser, Debug)]
#[command(name = "respack", version, about)]
struct Cli {
    /// Files to embed, in table order
    files: Vec<OsString>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let names = names_from_args(cli.files).context("Invalid resource path")?;

    // Nothing reaches stdout unless every file was read
    let document = ResourcePacker::new()
        .pack_files(&names)
        .context("Failed to pack resources")?;

    document
        .write_to(io::stdout().lock())
        .context("Failed to write generated source")?;

    Ok(())
}

/// Diagnostics go to stderr; stdout is reserved for the document
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("respack=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
