use std::fs;
use std::path::Path;

use crate::error::BootstrapError;
use crate::tree::{Key, Tree};

/// Parses a JSON array of integers, e.g. `[5, 3, 8]`.
pub fn parse_keys(text: &str) -> Result<Vec<Key>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Reads the initial key list from `path` and builds a tree from it in order.
pub fn load_tree(path: &Path) -> Result<Tree, BootstrapError> {
    let text = fs::read_to_string(path).map_err(|source| BootstrapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let keys = parse_keys(&text).map_err(|source| BootstrapError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = Tree::from_keys(keys)?;
    log::info!("loaded {} keys from {}", tree.len(), path.display());
    Ok(tree)
}
