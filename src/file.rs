//! File discovery for ecfg files.
//!
//! Each [`SearchPath`] resolves to a single directory, which is checked for
//! `{dir}/{file_name}`. Missing files and unresolvable directories (e.g. no
//! home directory) are skipped. A path that exists but is not a regular file
//! is an error, as is any I/O failure other than "not found".

use std::path::{Path, PathBuf};

use crate::error::EcfgError;
use crate::types::{SearchMode, SearchPath};

/// Resolve a [`SearchPath`] to a concrete directory.
///
/// `app_name` is used by `SearchPath::Platform` to construct the platform-specific
/// config directory (e.g. `~/.config/{app_name}/` on Linux).
pub fn resolve_search_path(sp: &SearchPath, app_name: &str) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Resolve all search paths to directories, keeping their priority order.
pub fn expand_search_paths(search_paths: &[SearchPath], app_name: &str) -> Vec<PathBuf> {
    search_paths
        .iter()
        .filter_map(|sp| resolve_search_path(sp, app_name))
        .collect()
}

/// Find ecfg files in `dirs` (priority-ascending).
///
/// In [`SearchMode::Merge`] every existing file is returned, lowest priority
/// first. In [`SearchMode::FirstMatch`] only the highest-priority file is.
pub fn find_files(
    dirs: &[PathBuf],
    file_name: &str,
    mode: SearchMode,
) -> Result<Vec<PathBuf>, EcfgError> {
    match mode {
        SearchMode::Merge => {
            let mut found = Vec::new();
            for dir in dirs {
                if let Some(path) = candidate(dir, file_name)? {
                    found.push(path);
                }
            }
            Ok(found)
        }
        SearchMode::FirstMatch => {
            for dir in dirs.iter().rev() {
                if let Some(path) = candidate(dir, file_name)? {
                    return Ok(vec![path]);
                }
            }
            Ok(vec![])
        }
    }
}

fn candidate(dir: &Path, file_name: &str) -> Result<Option<PathBuf>, EcfgError> {
    let path = dir.join(file_name);
    match std::fs::metadata(&path) {
        Ok(meta) if meta.is_file() => {
            tracing::debug!(path = %path.display(), "found ecfg file");
            Ok(Some(path))
        }
        Ok(_) => Err(EcfgError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            path,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::trace!(path = %path.display(), "no ecfg file");
            Ok(None)
        }
        Err(source) => Err(EcfgError::IoError { path, source }),
    }
}
