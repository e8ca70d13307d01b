//! Core manifest logic: scan the template folders, pair up real/fake
//! variants by filename, and read/write `manifest.json`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const REAL_DIR: &str = "real";
pub const FAKE_DIR: &str = "fake";

const HTML_SUFFIX: &str = ".html";

/// The document written to `<root>/manifest.json`. `file_pairs` holds
/// basenames (extension stripped) for which both a real and a fake
/// template exist.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct Manifest {
    pub file_pairs: Vec<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("template folder not found: {0}")]
    FolderNotFound(String),
    #[error("manifest not found: {0}")]
    ManifestNotFound(String),
    #[error("manifest out of date (missing: {missing:?}, unlisted: {unlisted:?})")]
    StaleManifest {
        missing: Vec<String>,
        unlisted: Vec<String>,
    },
}

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Full `.html` filenames directly under `dir`, in directory-listing order.
/// The suffix match is case-sensitive; anything else is ignored.
fn list_html_files(dir: &Path) -> anyhow::Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(ManifestError::FolderNotFound(dir.display().to_string()).into());
    }
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(HTML_SUFFIX) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Scan `<root>/real` and `<root>/fake` and collect the basenames present
/// in both. Order follows the real folder's directory listing unless
/// `sort` asks for lexicographic output.
pub fn build_manifest(root: &Path, sort: bool) -> anyhow::Result<Manifest> {
    let real = list_html_files(&root.join(REAL_DIR))?;
    let fake: HashSet<String> = list_html_files(&root.join(FAKE_DIR))?.into_iter().collect();

    let mut file_pairs: Vec<String> = real
        .into_iter()
        .filter(|name| fake.contains(name))
        .filter_map(|name| name.strip_suffix(HTML_SUFFIX).map(|base| base.to_string()))
        .collect();
    if sort {
        file_pairs.sort();
    }
    Ok(Manifest { file_pairs })
}

/// Serialize the manifest (pretty, 2-space indent) and write it to
/// `<root>/manifest.json`, replacing any previous file.
pub fn write_manifest(root: &Path, manifest: &Manifest) -> anyhow::Result<PathBuf> {
    let path = manifest_path(root);
    std::fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

pub fn load_manifest(root: &Path) -> anyhow::Result<Manifest> {
    let path = manifest_path(root);
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound(path.display().to_string()).into());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Compare the recorded manifest against a fresh scan. Drift is an error
/// carrying the basenames on each side of the difference.
pub fn check_manifest(root: &Path) -> anyhow::Result<()> {
    let recorded: HashSet<String> = load_manifest(root)?.file_pairs.into_iter().collect();
    let current: HashSet<String> = build_manifest(root, false)?.file_pairs.into_iter().collect();

    let mut missing: Vec<String> = recorded.difference(&current).cloned().collect();
    let mut unlisted: Vec<String> = current.difference(&recorded).cloned().collect();
    if missing.is_empty() && unlisted.is_empty() {
        return Ok(());
    }
    missing.sort();
    unlisted.sort();
    Err(ManifestError::StaleManifest { missing, unlisted }.into())
}
