//! CLI command implementations.

pub(crate) mod fields;
pub(crate) mod linkify;
pub(crate) mod render;

use std::io::{Read, Write};
use std::path::Path;

pub(crate) use fields::FieldsCommand;
pub(crate) use linkify::LinkifyArgs;
pub(crate) use render::RenderArgs;

/// Read the whole input from `path`, or from stdin when `None`.
pub(crate) fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write command output to stdout.
pub(crate) fn write_output(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
