//! CLI entrypoint for `gostart-docgen`.

mod cli;
mod commands;

use camino::Utf8PathBuf;
use clap::Parser;

use gostart_docgen::error::DocgenError;

use crate::cli::Args;

fn main() -> Result<(), DocgenError> {
    run()
}

fn run() -> Result<(), DocgenError> {
    let args = Args::parse();
    let out_dir = resolve_out_dir(args.out_dir);
    let registry = commands::registry();
    gostart_docgen::generate(&registry, &out_dir)?;
    Ok(())
}

fn resolve_out_dir(out_dir: Option<Utf8PathBuf>) -> Utf8PathBuf {
    out_dir.unwrap_or_else(|| Utf8PathBuf::from("."))
}
