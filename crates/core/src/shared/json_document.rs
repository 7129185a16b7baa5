use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A transcript or trigger-map document that could not be loaded.
///
/// Fatal: the pipeline aborts before producing any output.
#[derive(Error, Debug)]
pub enum MalformedInputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses a JSON input document.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, MalformedInputError> {
    let text = fs::read_to_string(path).map_err(|e| MalformedInputError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| MalformedInputError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
