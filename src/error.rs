use std::num::ParseIntError;
use std::path::PathBuf;

use crate::tree::Key;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("this node value already exists (key: {0})")]
    DuplicateKey(Key),
    #[error("value to be deleted does not exist in the tree (key: {0})")]
    NotFound(Key),
    #[error("can not delete from an empty tree")]
    EmptyTree,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', expected one of: search, insert, delete")]
    UnknownCommand(String),
    #[error("missing value for '{0}'")]
    MissingValue(String),
    #[error("unexpected input after value: '{0}'")]
    TrailingInput(String),
    #[error("invalid value (error: {0})")]
    InvalidValue(#[from] ParseIntError),
}

#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    #[error("unable to read file {} (error: {source})", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to unmarshal data from file {} (error: {source})", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("unable to build tree from initial keys (error: {0})")]
    Build(#[from] TreeError),
}
