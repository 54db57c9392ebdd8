//! Filesystem helpers built on `cap-std` and `camino`.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors returned by [`read_json`].
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// The file could not be opened.
    #[error("failed to open {path:?}: {source}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The file was not valid JSON for the expected type.
    #[error("failed to parse JSON in {path:?}: {source}")]
    Parse {
        /// Path whose contents failed to parse.
        path: Utf8PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
///
/// Returns any IO error raised while opening the file.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns an IO error when the parent directory cannot be opened or the
/// entry cannot be inspected; a missing file surfaces as
/// [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Decode a JSON document from `path`.
///
/// # Errors
///
/// Returns [`JsonFileError::Open`] when the file cannot be opened and
/// [`JsonFileError::Parse`] when its contents do not decode as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, JsonFileError> {
    let file = open_utf8_file(path).map_err(|source| JsonFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| JsonFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
