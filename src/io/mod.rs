//! Persistence for scenes and marching configuration
//!
//! Everything is stored as JSON through `serde_json`, streamed with
//! `BufReader`/`BufWriter`. This is the only fallible surface of the crate.

mod json;

pub use json::{
    from_json_string, load_config, load_tree_json, save_config, save_tree_json, to_json_string,
};

use thiserror::Error;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Tree written by an incompatible crate version
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            IoError::Io(e.into())
        } else {
            IoError::Serialization(e.to_string())
        }
    }
}

/// Leading numeric component of a `major.minor.patch` string
pub(crate) fn major_version(version: &str) -> Option<u32> {
    version.split('.').next()?.trim().parse().ok()
}
