//! Command-line interface definitions for `gostart-docgen`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `gostart-docgen`.
#[derive(Debug, Parser)]
#[command(name = "gostart-docgen")]
#[command(about = "Regenerate the gostart usage documentation")]
#[command(version)]
pub struct Args {
    /// Directory the generated doc.go is written into (defaults to the
    /// current working directory).
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
}
