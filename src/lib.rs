#![forbid(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod service;
pub mod tree;

pub use bootstrap::load_tree;
pub use error::{BootstrapError, CommandError, TreeError};
pub use service::{Command, Response, Service};
pub use tree::{Key, Tree};
