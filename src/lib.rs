//! Build-time usage documentation generator for the `gostart` CLI.
//!
//! Collects the synopsis and help text of every registered command, renders
//! a plain-text usage document, and writes it into `doc.go` as the package
//! comment distributed alongside the host tool.

pub mod error;
pub mod output;
pub mod registry;
pub mod render;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::DocgenError;
use crate::registry::Registry;

/// Runs the whole pipeline: collect, order, render, write.
///
/// The output file is opened (and truncated) before rendering starts, so a
/// failure to create it leaves no partial output, while a failure during the
/// final write leaves `doc.go` truncated. Returns the path of the written
/// file.
///
/// # Errors
///
/// Returns [`DocgenError::Create`] when `doc.go` cannot be created inside
/// `out_dir`, and [`DocgenError::Write`] when flushing the rendered text
/// fails.
pub fn generate(registry: &Registry, out_dir: &Utf8Path) -> Result<Utf8PathBuf, DocgenError> {
    let mut file = output::create_doc_file(out_dir)?;

    let docs = registry::collect_docs(registry);
    let usage = render::usage_document(&docs);
    let source = render::source_file(&usage);

    output::write_doc(&mut file, &source, out_dir)?;
    Ok(out_dir.join(output::DOC_FILE_NAME))
}
