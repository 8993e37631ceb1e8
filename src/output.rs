//! Output file handling for the generated documentation.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File, OpenOptions};
use std::io::Write;

use crate::error::DocgenError;

/// Fixed name of the generated source file.
pub const DOC_FILE_NAME: &str = "doc.go";

/// Creates (or truncates) the documentation file inside `out_dir`.
///
/// The directory must already exist; a missing directory is reported as a
/// creation failure rather than being created on the fly.
///
/// # Errors
///
/// Returns [`DocgenError::Create`] when the directory cannot be opened or
/// the file cannot be created.
pub fn create_doc_file(out_dir: &Utf8Path) -> Result<File, DocgenError> {
    let dir =
        Dir::open_ambient_dir(out_dir, ambient_authority()).map_err(|io_err| {
            DocgenError::Create {
                path: out_dir.to_path_buf(),
                source: io_err,
            }
        })?;

    dir.open_with(
        DOC_FILE_NAME,
        OpenOptions::new().write(true).create(true).truncate(true),
    )
    .map_err(|io_err| DocgenError::Create {
        path: out_dir.join(DOC_FILE_NAME),
        source: io_err,
    })
}

/// Writes the rendered source text to the open documentation file.
///
/// # Errors
///
/// Returns [`DocgenError::Write`] when flushing fails; bytes already written
/// remain in the file, leaving it truncated.
pub fn write_doc(file: &mut File, content: &str, out_dir: &Utf8Path) -> Result<(), DocgenError> {
    file.write_all(content.as_bytes())
        .map_err(|io_err| DocgenError::Write {
            path: out_dir.join(DOC_FILE_NAME),
            source: io_err,
        })
}
