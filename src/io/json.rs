//! JSON persistence for trees and marching configuration

use crate::io::{major_version, IoError};
use crate::raycast::RaymarchConfig;
use crate::types::SdfTree;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Save a marching configuration as pretty-printed JSON
pub fn save_config(config: &RaymarchConfig, path: impl AsRef<Path>) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Load a marching configuration
///
/// Missing fields take their default values. Degenerate values are accepted
/// with a warning; marchers answer them with misses.
pub fn load_config(path: impl AsRef<Path>) -> Result<RaymarchConfig, IoError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let config: RaymarchConfig = serde_json::from_reader(reader)?;

    if config.is_degenerate() {
        log::warn!("{}: degenerate raymarch configuration, every march will miss", path.display());
    } else {
        log::debug!("loaded raymarch configuration from {}", path.display());
    }
    Ok(config)
}

/// Save an SDF tree as pretty-printed JSON
pub fn save_tree_json<V: Serialize>(tree: &SdfTree<V>, path: impl AsRef<Path>) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, tree)?;
    writer.flush()?;
    Ok(())
}

/// Load an SDF tree from JSON
///
/// Fails with [`IoError::UnsupportedVersion`] when the tree was written by a
/// crate with a different major version.
pub fn load_tree_json<V: DeserializeOwned>(path: impl AsRef<Path>) -> Result<SdfTree<V>, IoError> {
    let reader = BufReader::new(File::open(path)?);
    let tree: SdfTree<V> = serde_json::from_reader(reader)?;
    check_version(tree)
}

/// Serialize an SDF tree to a JSON string
pub fn to_json_string<V: Serialize>(tree: &SdfTree<V>) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Parse an SDF tree from a JSON string, with the same version check as
/// [`load_tree_json`]
pub fn from_json_string<V: DeserializeOwned>(json: &str) -> Result<SdfTree<V>, IoError> {
    let tree: SdfTree<V> = serde_json::from_str(json)?;
    check_version(tree)
}

fn check_version<V>(tree: SdfTree<V>) -> Result<SdfTree<V>, IoError> {
    let found = major_version(&tree.version)
        .ok_or_else(|| IoError::InvalidFormat(format!("malformed version '{}'", tree.version)))?;

    if Some(found) != major_version(crate::VERSION) {
        return Err(IoError::UnsupportedVersion(tree.version));
    }
    Ok(tree)
}
