//! Shared helpers for `gostart-docgen` integration tests.

use camino::Utf8PathBuf;

/// Resolves the compiled `gostart-docgen` binary under test.
pub(crate) fn docgen_exe() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_BIN_EXE_gostart-docgen"))
}
