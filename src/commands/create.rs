//! Project creation command
//!
//! The composer: sequences directory creation, artifact writes, and
//! dependency installation. This is the only module with I/O and ordering
//! concerns; artifact contents come from the [`TemplateCatalog`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::ProgressBar;

use crate::error::ScaffoldError;
use crate::files::{FileSystem, LocalFileSystem};
use crate::install::{Installer, PnpmInstaller};
use crate::templates::TemplateCatalog;
use crate::FeatureFlags;

/// Bundler package installed as a dev dependency by default
const BUNDLER_PACKAGE: &str = "vite";

/// Bundler package installed as a regular dependency under `--rolldown`
const ALT_BUNDLER_PACKAGE: &str = "rolldown-vite";

/// Options for a single project creation
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Directory under which the project directory is created
    pub directory: PathBuf,
    /// Selected features
    pub flags: FeatureFlags,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            flags: FeatureFlags::default(),
        }
    }
}

/// Create a new project skeleton on disk and install its dependencies
pub struct CreateCommand<F = LocalFileSystem, I = PnpmInstaller> {
    files: F,
    installer: I,
    catalog: TemplateCatalog,
}

impl CreateCommand {
    /// Create a command instance backed by the real filesystem and pnpm
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(LocalFileSystem, PnpmInstaller)
    }
}

impl Default for CreateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem, I: Installer> CreateCommand<F, I> {
    /// Create a command instance with explicit capabilities
    pub fn with_capabilities(files: F, installer: I) -> Self {
        Self {
            files,
            installer,
            catalog: TemplateCatalog::new(),
        }
    }

    /// Execute the command: scaffold `name` under `options.directory`
    ///
    /// Strictly sequential pipeline: project directory, base artifacts,
    /// per-flag setup steps, dependency installation. A failure at any step
    /// aborts immediately; nothing already written is rolled back. Re-running
    /// with the same arguments is safe, since directory creation is
    /// idempotent and identical flags reproduce identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::DirectoryCreation`] or
    /// [`ScaffoldError::FileWrite`] when the filesystem capability fails,
    /// and [`ScaffoldError::Installation`] (carrying the exit code) or
    /// [`ScaffoldError::InstallerSpawn`] when dependency installation fails.
    pub async fn execute(&self, name: &str, options: &CreateOptions) -> Result<(), ScaffoldError> {
        let project_path = options.directory.join(name);
        let flags = &options.flags;

        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Generating project files...");

        // The spinner must be cleared before the installer runs: the child
        // process inherits stdio.
        let generated = self.generate(&project_path, name, flags).await;
        spinner.finish_and_clear();
        generated?;

        self.install_dependencies(&project_path, flags).await
    }

    /// Create the project directory and write every artifact
    async fn generate(
        &self,
        project_path: &Path,
        name: &str,
        flags: &FeatureFlags,
    ) -> Result<(), ScaffoldError> {
        self.create_directory(project_path).await?;
        self.setup_base(project_path, name, flags).await?;

        if flags.typescript {
            self.setup_typescript(project_path).await?;
        }
        if flags.tailwind {
            self.setup_tailwind(project_path).await?;
        }
        if flags.test {
            self.setup_test_root(project_path).await?;
        }
        if flags.lint {
            self.setup_lint(project_path).await?;
        }
        if flags.format {
            self.setup_format(project_path).await?;
        }

        Ok(())
    }

    /// Write the base artifacts every project gets
    ///
    /// All three are rendered from the full flag set up front; no later step
    /// rewrites them.
    async fn setup_base(
        &self,
        project_path: &Path,
        name: &str,
        flags: &FeatureFlags,
    ) -> Result<(), ScaffoldError> {
        let manifest = self.catalog.package_manifest(name, flags)?;
        self.write(project_path, "package.json", &manifest).await?;

        let html = self.catalog.index_html(flags)?;
        self.write(project_path, "index.html", &html).await?;

        self.write(project_path, "styles.css", self.catalog.stylesheet(flags))
            .await
    }

    async fn setup_typescript(&self, project_path: &Path) -> Result<(), ScaffoldError> {
        self.create_directory(&project_path.join("scripts")).await?;

        let config = self.catalog.ts_config()?;
        self.write(project_path, "tsconfig.json", &config).await?;
        self.write(project_path, "scripts/main.ts", self.catalog.entry_script())
            .await
    }

    async fn setup_tailwind(&self, project_path: &Path) -> Result<(), ScaffoldError> {
        self.write(project_path, "vite.config.js", self.catalog.vite_config())
            .await
    }

    /// Create the empty test-root directory
    async fn setup_test_root(&self, project_path: &Path) -> Result<(), ScaffoldError> {
        self.create_directory(&project_path.join("__tests__")).await
    }

    async fn setup_lint(&self, project_path: &Path) -> Result<(), ScaffoldError> {
        let config = self.catalog.lint_config()?;
        self.write(project_path, ".oxlintrc.json", &config).await
    }

    async fn setup_format(&self, project_path: &Path) -> Result<(), ScaffoldError> {
        let config = self.catalog.format_config()?;
        self.write(project_path, ".prettierrc", &config).await?;
        self.write(project_path, ".prettierignore", self.catalog.format_ignore())
            .await
    }

    /// Install the dependency set implied by the flags
    ///
    /// One dev install for the accumulated list (skipped when empty), then a
    /// separate non-dev install of the alternate bundler when `--rolldown`
    /// is set.
    async fn install_dependencies(
        &self,
        project_path: &Path,
        flags: &FeatureFlags,
    ) -> Result<(), ScaffoldError> {
        let dev_packages = resolve_dev_dependencies(flags);

        if !dev_packages.is_empty() {
            self.installer
                .install(project_path, &dev_packages, true)
                .await?;
        }

        if flags.rolldown {
            self.installer
                .install(project_path, &[ALT_BUNDLER_PACKAGE], false)
                .await?;
        }

        Ok(())
    }

    async fn create_directory(&self, path: &Path) -> Result<(), ScaffoldError> {
        self.files
            .create_directory(path)
            .await
            .map_err(|source| ScaffoldError::DirectoryCreation {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write(
        &self,
        project_path: &Path,
        relative_path: &str,
        content: &str,
    ) -> Result<(), ScaffoldError> {
        let path = project_path.join(relative_path);
        self.files
            .write_file(&path, content)
            .await
            .map_err(|source| ScaffoldError::FileWrite { path, source })
    }
}

/// Resolve the dev-dependency list implied by the flags
///
/// Order is fixed for reproducibility: bundler (unless `--rolldown` replaces
/// it with the separate non-dev install), TypeScript, the two Tailwind
/// packages, Vitest, OxLint, Prettier.
#[must_use]
pub fn resolve_dev_dependencies(flags: &FeatureFlags) -> Vec<&'static str> {
    let mut packages = Vec::new();

    if !flags.rolldown {
        packages.push(BUNDLER_PACKAGE);
    }
    if flags.typescript {
        packages.push("typescript");
    }
    if flags.tailwind {
        packages.push("tailwindcss");
        packages.push("@tailwindcss/vite");
    }
    if flags.test {
        packages.push("vitest");
    }
    if flags.lint {
        packages.push("oxlint");
    }
    if flags.format {
        packages.push("prettier");
    }

    packages
}
