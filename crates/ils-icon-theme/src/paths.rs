//! Icon theme search paths.
//!
//! Builds the ordered list of base directories that may contain icon themes,
//! following the XDG base directory conventions:
//!
//! 1. `$XDG_DATA_HOME/icons` (or `~/.local/share/icons`)
//! 2. `~/.icons`
//! 3. `<dir>/icons` for each entry of `$XDG_DATA_DIRS`
//!    (default `/usr/local/share:/usr/share`)
//!
//! Environment access goes through a lookup function so callers (and tests)
//! can supply their own environment.

use std::path::{Path, PathBuf};

/// Default value of `XDG_DATA_DIRS` when unset.
const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Ordered, de-duplicated list of icon theme base directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    paths: Vec<PathBuf>,
}

impl SearchPaths {
    /// Create search paths from an explicit list.
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut search = Self::default();
        for path in paths {
            search.push(path);
        }
        search
    }

    /// Build the default search paths from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the default search paths using `lookup` to read environment variables.
    ///
    /// Empty variables are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let home = home_dir_with(&var);
        let mut search = Self::default();

        if let Some(data_home) = var("XDG_DATA_HOME") {
            search.push(PathBuf::from(data_home).join("icons"));
        } else if let Some(home) = &home {
            search.push(home.join(".local/share/icons"));
        }

        if let Some(home) = &home {
            search.push(home.join(".icons"));
        }

        let data_dirs = var("XDG_DATA_DIRS").unwrap_or_else(|| DEFAULT_DATA_DIRS.to_string());
        for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
            search.push(PathBuf::from(dir).join("icons"));
        }

        search
    }

    /// Append a search path unless it is already present.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Iterate over the search paths in probe order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Get the search paths as a slice.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of search paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether there are no search paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Resolve the user's home directory.
///
/// Uses `$HOME` when set, falling back to the password database.
pub fn home_dir() -> Option<PathBuf> {
    home_dir_with(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
}

fn home_dir_with<F>(var: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    var("HOME").map(PathBuf::from).or_else(dirs::home_dir)
}

/// Expand a leading `~` or `$HOME` in a configured path.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    for prefix in ["$HOME", "${HOME}", "~"] {
        if let Some(rest) = path.strip_prefix(prefix) {
            if rest.is_empty() {
                return home.to_path_buf();
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return home.join(rest);
            }
        }
    }

    PathBuf::from(path)
}
