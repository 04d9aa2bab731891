//! CLI command implementations

pub mod create;

pub use create::{resolve_dev_dependencies, CreateCommand, CreateOptions};
