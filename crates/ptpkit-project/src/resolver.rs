//! Directory resolution
//!
//! Users often point the editor at the root of their robot code repository
//! rather than at the folder holding the paths. Resolution maps the selected
//! directory to the project directory actually used:
//!
//! 1. a directory already named `autos` is used as is
//! 2. a repository root (one containing `src/main/deploy`) is redirected to
//!    `src/main/deploy/autos`
//! 3. anything else is used as is
//!
//! The resolver only asks "is this a directory?" through a [`DirProbe`], so it
//! can be exercised against a simulated filesystem.

use std::path::{Path, PathBuf};

/// Name of the leaf directory that holds a project inside a robot repository.
pub const PATHS_LEAF_DIR: &str = "autos";

/// Directory chain beneath a repository root that identifies its layout.
pub const REPO_DEPLOY_CHAIN: [&str; 3] = ["src", "main", "deploy"];

/// Existence check used by the resolver and the recent-projects filter.
pub trait DirProbe {
    fn is_dir(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirProbe for FsProbe {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Resolve a selected directory to the project directory to use.
pub fn resolve_project_dir(selected: &Path, probe: &dyn DirProbe) -> PathBuf {
    if selected.file_name().is_some_and(|name| name == PATHS_LEAF_DIR) {
        return selected.to_path_buf();
    }

    let deploy: PathBuf = REPO_DEPLOY_CHAIN
        .iter()
        .fold(selected.to_path_buf(), |dir, segment| dir.join(segment));
    if probe.is_dir(&deploy) {
        return deploy.join(PATHS_LEAF_DIR);
    }

    selected.to_path_buf()
}

/// Make `path` absolute against the current directory, without touching the
/// filesystem. Falls back to the path unchanged if the current directory is
/// unavailable.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
