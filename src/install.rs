//! Dependency installation capability

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::ScaffoldError;

/// Narrow interface over the package manager's "add" operation
///
/// The composer only observes completion status; the child process inherits
/// stdio so the package manager's own output streams through untouched.
#[async_trait]
pub trait Installer: Send + Sync {
    /// Install `packages` into the project at `project_path`
    ///
    /// Package names are passed through verbatim and in the given order;
    /// `dev` selects a dev-dependency install.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Installation`] with the exit code when the
    /// package manager exits non-zero, or [`ScaffoldError::InstallerSpawn`]
    /// when the process cannot be started.
    async fn install(
        &self,
        project_path: &Path,
        packages: &[&str],
        dev: bool,
    ) -> Result<(), ScaffoldError>;
}

/// Installer capability backed by `pnpm add`
#[derive(Debug, Clone, Copy, Default)]
pub struct PnpmInstaller;

#[async_trait]
impl Installer for PnpmInstaller {
    async fn install(
        &self,
        project_path: &Path,
        packages: &[&str],
        dev: bool,
    ) -> Result<(), ScaffoldError> {
        let mut command = Command::new("pnpm");
        command.arg("add");
        if dev {
            command.arg("-D");
        }
        command.args(packages).current_dir(project_path);

        let status = command
            .status()
            .await
            .map_err(ScaffoldError::InstallerSpawn)?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::Installation {
                code: status.code().unwrap_or(-1),
            })
        }
    }
}
