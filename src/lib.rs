//! create-spark library
//!
//! Scaffolds a minimal Vite-based front-end project: a package manifest,
//! an HTML entry document, a stylesheet, and optional per-feature files
//! (TypeScript, Tailwind CSS, Vitest, OxLint, Prettier), followed by a
//! single dependency installation via pnpm.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod error;
pub mod files;
pub mod install;
pub mod templates;

pub use commands::{CreateCommand, CreateOptions};
pub use error::ScaffoldError;
pub use files::{FileSystem, LocalFileSystem};
pub use install::{Installer, PnpmInstaller};
pub use templates::TemplateCatalog;

/// Feature selection for a new project
///
/// Each flag is independent; any subset is valid. A flag never implies or
/// excludes another one (Tailwind without TypeScript is fine, and produces
/// the plain-CSS, non-TS HTML variant).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// TypeScript entry script and compiler config
    pub typescript: bool,
    /// Tailwind CSS v4 with the Vite plugin
    pub tailwind: bool,
    /// Vitest test setup
    pub test: bool,
    /// OxLint configuration
    pub lint: bool,
    /// Prettier configuration
    pub format: bool,
    /// Rolldown-Vite instead of Vite as the bundler
    pub rolldown: bool,
}
