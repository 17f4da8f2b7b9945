use crate::error::Res;
use anyhow::Context;
use std::io::ErrorKind;
use std::path::Path;

/// Write a file, replacing its contents.
pub(crate) fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Res<()> {
    let path = path.as_ref();
    std::fs::write(path, contents).with_context(|| format!("Unable to write to {}", path.display()))
}

/// Read a file to a `String`. Returns `None` if there is no file at `path`.
pub(crate) fn read_optional(path: impl AsRef<Path>) -> Res<Option<String>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            _ => Err(e).with_context(|| format!("Unable to read file {}", path.display())),
        },
    }
}
