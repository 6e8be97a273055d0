//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Resolve the project root to an absolute path.
///
/// The assembly phases do not validate the root themselves; that contract is
/// enforced here, at the caller.
pub(crate) fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .map_err(|_| CliError::RootNotFound(root.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(CliError::RootNotFound(root.to_path_buf()));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_roots_are_rejected() {
        let err = resolve_root(Path::new("/definitely/not/a/real/root")).unwrap_err();
        assert!(matches!(err, CliError::RootNotFound(_)));
    }

    #[test]
    fn files_are_not_roots() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = resolve_root(file.path()).unwrap_err();
        assert!(matches!(err, CliError::RootNotFound(_)));
    }

    #[test]
    fn existing_directories_resolve_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_root(dir.path()).unwrap();
        assert!(resolved.is_absolute());
    }
}
