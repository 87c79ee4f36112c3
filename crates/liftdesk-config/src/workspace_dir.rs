//! Discovery and management of the `.liftdesk/` directory.
//!
//! The `.liftdesk/` directory is the root of a sales workspace: it holds
//! `config.yaml` and the JSONL record files. This module finds it by
//! walking up the directory tree and creates it on `init`.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// The name of the liftdesk workspace directory.
const WORKSPACE_DIR_NAME: &str = ".liftdesk";

/// Environment variable that can override workspace discovery.
const WORKSPACE_DIR_ENV: &str = "LIFTDESK_DIR";

/// Walk up the directory tree from `start` looking for a `.liftdesk/`
/// directory.
///
/// The `LIFTDESK_DIR` environment variable is checked first (highest
/// priority). Returns `None` if the filesystem root is reached without a
/// match.
pub fn find_workspace_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(WORKSPACE_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = match start.canonicalize() {
        Ok(p) => p,
        Err(_) => return None,
    };

    let mut current = start.as_path();
    loop {
        let candidate = current.join(WORKSPACE_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
            }
            _ => break, // Reached filesystem root.
        }
    }

    None
}

/// Like [`find_workspace_dir`], but converts `None` into
/// [`ConfigError::WorkspaceNotFound`].
pub fn find_workspace_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_workspace_dir(start).ok_or(ConfigError::WorkspaceNotFound)
}

/// Ensure a `.liftdesk/` directory exists at the given path.
///
/// If `path` itself is not called `.liftdesk`, a `.liftdesk/` subdirectory
/// is created under it. Returns the path to the workspace directory.
pub fn ensure_workspace_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let workspace_dir = if path.ends_with(WORKSPACE_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(WORKSPACE_DIR_NAME)
    };

    std::fs::create_dir_all(&workspace_dir)?;
    Ok(workspace_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_in_same_directory() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = dir.path().join(".liftdesk");
        std::fs::create_dir(&workspace).unwrap();

        let found = find_workspace_dir(dir.path()).unwrap();
        assert_eq!(
            found.canonicalize().unwrap(),
            workspace.canonicalize().unwrap()
        );
    }

    #[test]
    fn find_from_nested_child() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = dir.path().join(".liftdesk");
        std::fs::create_dir(&workspace).unwrap();

        let child = dir.path().join("reports").join("q3");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_workspace_dir(&child).unwrap();
        assert_eq!(
            found.canonicalize().unwrap(),
            workspace.canonicalize().unwrap()
        );
    }

    #[test]
    fn ensure_creates_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_workspace_dir(dir.path()).unwrap();
        assert!(first.is_dir());
        assert!(first.ends_with(".liftdesk"));

        let second = ensure_workspace_dir(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ensure_accepts_already_named_path() {
        let dir = tempfile::tempdir().unwrap();
        let named = dir.path().join(".liftdesk");
        let result = ensure_workspace_dir(&named).unwrap();
        assert_eq!(result, named);
        assert!(result.is_dir());
    }
}
