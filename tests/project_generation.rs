//! Integration tests for on-disk project generation

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use create_spark::{
    CreateCommand, CreateOptions, FeatureFlags, FileSystem, Installer, LocalFileSystem,
    ScaffoldError,
};

/// Installer that records calls instead of spawning pnpm
#[derive(Clone, Default)]
struct RecordingInstaller {
    calls: Arc<Mutex<Vec<(PathBuf, Vec<String>, bool)>>>,
}

impl RecordingInstaller {
    fn calls(&self) -> Vec<(PathBuf, Vec<String>, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Installer for RecordingInstaller {
    async fn install(
        &self,
        project_path: &Path,
        packages: &[&str],
        dev: bool,
    ) -> Result<(), ScaffoldError> {
        self.calls.lock().unwrap().push((
            project_path.to_path_buf(),
            packages.iter().map(ToString::to_string).collect(),
            dev,
        ));
        Ok(())
    }
}

fn command(installer: RecordingInstaller) -> CreateCommand<LocalFileSystem, RecordingInstaller> {
    CreateCommand::with_capabilities(LocalFileSystem, installer)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[tokio::test]
async fn test_basic_project_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let installer = RecordingInstaller::default();

    let options = CreateOptions {
        directory: temp_dir.path().to_path_buf(),
        flags: FeatureFlags::default(),
    };
    command(installer.clone())
        .execute("starter", &options)
        .await
        .unwrap();

    let project = temp_dir.path().join("starter");
    assert!(project.is_dir());

    let manifest = read(&project.join("package.json"));
    assert!(manifest.contains(r#""name": "starter""#));

    let html = read(&project.join("index.html"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("class="));

    assert_eq!(read(&project.join("styles.css")), "");

    // No feature files without the corresponding flags
    assert!(!project.join("tsconfig.json").exists());
    assert!(!project.join("vite.config.js").exists());
    assert!(!project.join("__tests__").exists());

    assert_eq!(
        installer.calls(),
        vec![(project, vec!["vite".to_string()], true)]
    );
}

#[tokio::test]
async fn test_full_featured_project_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let installer = RecordingInstaller::default();

    let options = CreateOptions {
        directory: temp_dir.path().to_path_buf(),
        flags: FeatureFlags {
            typescript: true,
            tailwind: true,
            test: true,
            lint: true,
            format: true,
            rolldown: false,
        },
    };
    command(installer.clone())
        .execute("kitchen-sink", &options)
        .await
        .unwrap();

    let project = temp_dir.path().join("kitchen-sink");

    assert!(project.join("scripts").is_dir());
    assert!(project.join("__tests__").is_dir());
    assert_eq!(fs::read_dir(project.join("__tests__")).unwrap().count(), 0);

    assert!(read(&project.join("tsconfig.json")).contains(r#""target": "ES2020""#));
    assert_eq!(
        read(&project.join("scripts/main.ts")),
        "console.log('Hello from TypeScript!')"
    );
    assert!(read(&project.join("vite.config.js")).contains("@tailwindcss/vite"));
    assert_eq!(read(&project.join("styles.css")), r#"@import "tailwindcss";"#);

    let html = read(&project.join("index.html"));
    assert!(html.contains(r#"src="/scripts/main.ts""#));
    assert!(html.contains(r#"class="bg-gray-950"#));

    assert!(project.join(".oxlintrc.json").exists());
    assert!(project.join(".prettierrc").exists());
    assert!(project.join(".prettierignore").exists());

    let manifest = read(&project.join("package.json"));
    assert!(manifest.contains(r#""lint": "oxlint""#));
    assert!(manifest.contains(r#""format": "prettier --write .""#));
    assert!(manifest.contains(r#""test": "vitest""#));

    assert_eq!(
        installer.calls(),
        vec![(
            project,
            vec![
                "vite".to_string(),
                "typescript".to_string(),
                "tailwindcss".to_string(),
                "@tailwindcss/vite".to_string(),
                "vitest".to_string(),
                "oxlint".to_string(),
                "prettier".to_string()
            ],
            true
        )]
    );
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let installer = RecordingInstaller::default();
    let cmd = command(installer);

    let options = CreateOptions {
        directory: temp_dir.path().to_path_buf(),
        flags: FeatureFlags {
            typescript: true,
            tailwind: true,
            ..FeatureFlags::default()
        },
    };

    cmd.execute("repeat", &options).await.unwrap();

    let project = temp_dir.path().join("repeat");
    let files = [
        "package.json",
        "index.html",
        "styles.css",
        "tsconfig.json",
        "scripts/main.ts",
        "vite.config.js",
    ];
    let first_pass: Vec<String> = files.iter().map(|f| read(&project.join(f))).collect();

    // Second run against the already-populated target must not fail and must
    // reproduce every artifact byte-for-byte.
    cmd.execute("repeat", &options).await.unwrap();

    for (file, expected) in files.iter().zip(&first_pass) {
        assert_eq!(&read(&project.join(file)), expected, "{file} changed");
    }
}

#[tokio::test]
async fn test_creates_missing_ancestor_directories() {
    let temp_dir = TempDir::new().unwrap();
    let installer = RecordingInstaller::default();

    let options = CreateOptions {
        directory: temp_dir.path().join("path/to/projects"),
        flags: FeatureFlags::default(),
    };
    command(installer)
        .execute("nested", &options)
        .await
        .unwrap();

    assert!(temp_dir
        .path()
        .join("path/to/projects/nested/package.json")
        .exists());
}

#[tokio::test]
async fn test_path_exists_folds_errors_to_false() {
    let temp_dir = TempDir::new().unwrap();
    let fs_capability = LocalFileSystem;

    assert!(fs_capability.path_exists(temp_dir.path()).await);
    assert!(!fs_capability.path_exists(&temp_dir.path().join("absent")).await);

    // Traversing through a regular file is an access error (ENOTDIR), not a
    // plain not-found; it must fold to false all the same.
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, "contents").unwrap();
    assert!(fs_capability.path_exists(&file).await);
    assert!(!fs_capability.path_exists(&file.join("sub")).await);
}
