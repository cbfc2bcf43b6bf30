use crate::StripError;
use crate::stripper::{FileKind, strip_comments};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn map_io_err(
    p: &Path,
    variant: fn(PathBuf, io::Error) -> StripError,
) -> impl FnOnce(io::Error) -> StripError {
    let path = p.to_path_buf();
    move |source| variant(path, source)
}

fn read_err(path: PathBuf, source: io::Error) -> StripError {
    StripError::Read { path, source }
}

fn write_err(path: PathBuf, source: io::Error) -> StripError {
    StripError::Write { path, source }
}

/// `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Strips comments from `path` and overwrites it with the result.
///
/// Line endings are read as text and written back as `\n`. Nothing is written
/// when the read fails. The write truncates in place, so a failed write may
/// leave the file partially written.
pub fn strip_file(path: &Path) -> Result<(), StripError> {
    let content = fs::read_to_string(path)
        .map(normalize_newlines)
        .map_err(map_io_err(path, read_err))?;

    let stripped_content = strip_comments(&content, FileKind::from_path(path));

    fs::write(path, stripped_content).map_err(map_io_err(path, write_err))
}
