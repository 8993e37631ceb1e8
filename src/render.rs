//! Rendering stages for the usage document and the generated source file.
//!
//! Two pure stages: [`usage_document`] turns the ordered command docs into
//! the plain-text usage document, and [`source_file`] embeds that document
//! verbatim inside the package comment of a generated Go source file. The
//! layout is fixed, so neither stage can fail at runtime.

#![allow(
    clippy::format_push_string,
    reason = "document templating uses format! for clarity"
)]

use crate::registry::CommandDoc;

/// Invocation name of the documented tool.
pub const TOOL_NAME: &str = "gostart";

/// Project page listed under the description line.
pub const REPOSITORY_URL: &str = "https://github.com/gostart-cli/gostart";

/// Width the command-index name column is padded to.
pub const NAME_COLUMN_WIDTH: usize = 11;

/// Renders the plain-text usage document for the given command docs.
///
/// The docs are listed in the order given; callers obtain the sorted,
/// filtered order from [`crate::registry::collect_docs`]. An empty slice
/// still renders the full static prose with no index rows or detail blocks.
#[must_use]
pub fn usage_document(docs: &[CommandDoc]) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(&header());
    out.push_str(&command_index(docs));
    out.push_str(&command_details(docs));
    out
}

/// Embeds the usage document in a generated Go source file.
///
/// The content is inserted verbatim between block-comment delimiters under a
/// fixed do-not-edit header, followed by the `package main` declaration.
#[must_use]
pub fn source_file(content: &str) -> String {
    format!(
        "// DO NOT EDIT THIS FILE.\n// THIS FILE IS GENERATED BY GO GENERATE.\n\n/*\n{content}\n*/\npackage main\n"
    )
}

fn header() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Command {TOOL_NAME} generates a skeleton (codes and its directory structure) you need to start building CLI tool by Golang.\n"
    ));
    out.push_str(REPOSITORY_URL);
    out.push_str("\n\nUsage:\n\n");
    out.push_str(&format!(
        "    {TOOL_NAME} [-version] [-help]  <command> [<options>]\n"
    ));
    out.push_str("\nAvailable commands:\n");
    out
}

fn command_index(docs: &[CommandDoc]) -> String {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&format!(
            "\n    {:<width$} {}",
            doc.name,
            doc.synopsis,
            width = NAME_COLUMN_WIDTH
        ));
    }
    out.push_str(&format!(
        "\n\nUse \"{TOOL_NAME} <command> -help\" for more information about command.\n\n"
    ));
    out
}

fn command_details(docs: &[CommandDoc]) -> String {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&format!("\n\n{}\n\n{}\n\n", doc.synopsis, doc.help));
    }
    out.push('\n');
    out
}
