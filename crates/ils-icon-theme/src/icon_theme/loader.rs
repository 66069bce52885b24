//! Icon theme loading.
//!
//! Resolves theme names against the search paths, loads inherited themes
//! before the themes depending on them, and indexes every loaded theme's
//! icon directories into a shared [`IconIndex`].

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, trace, warn};

use super::index::{IconIndex, LoadTier, ThemePriority};
use super::parser::{self, INDEX_FILE};
use super::scanner;
use super::types::ThemeDescriptor;
use crate::paths::SearchPaths;

/// Deepest inheritance recursion followed before giving up.
pub const MAX_DEPTH: usize = 10;

/// Below this many populated directories the filesystem scanner runs.
pub const MIN_POPULATED_DIRECTORIES: usize = 3;

/// Loaded themes, in load order.
///
/// Inherited themes come before the themes that inherit them. A theme id
/// appears at most once.
#[derive(Debug, Default)]
pub struct ThemeChain {
    themes: Vec<ThemeDescriptor>,
}

impl ThemeChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a theme with this id has been loaded.
    pub fn contains(&self, id: &str) -> bool {
        self.themes.iter().any(|t| t.id == id)
    }

    /// Get a loaded theme by id.
    pub fn get(&self, id: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Append a theme. Returns false if its id is already present.
    pub fn push(&mut self, theme: ThemeDescriptor) -> bool {
        if self.contains(&theme.id) {
            return false;
        }
        self.themes.push(theme);
        true
    }

    /// Loaded themes in load order.
    pub fn themes(&self) -> &[ThemeDescriptor] {
        &self.themes
    }

    /// Ids of the loaded themes in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.id.as_str())
    }

    /// Number of loaded themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether no theme is loaded.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Drop every loaded theme.
    pub fn clear(&mut self) {
        self.themes.clear();
    }
}

/// Theme chain plus the icon index built from it.
#[derive(Debug, Default)]
pub struct ThemeState {
    /// Loaded themes
    pub chain: ThemeChain,
    /// Icons of every loaded theme
    pub index: IconIndex,
}

impl ThemeState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all loaded themes and icons.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.index.clear();
    }
}

/// Loads icon themes from the search paths.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    search_paths: SearchPaths,
}

impl ThemeLoader {
    /// Create a loader probing the given search paths.
    pub fn new(search_paths: SearchPaths) -> Self {
        Self { search_paths }
    }

    /// Create a loader using the XDG search paths of the current process.
    pub fn from_env() -> Self {
        Self::new(SearchPaths::from_env())
    }

    /// Get the search paths.
    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// Find the directory of a theme.
    ///
    /// The first `<search path>/<name>` that holds an `index.theme` or looks
    /// like an icon theme laid out by size wins.
    pub fn find_theme_path(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') {
            return None;
        }

        self.search_paths
            .iter()
            .map(|base| base.join(name))
            .find(|candidate| {
                candidate.is_dir()
                    && (candidate.join(INDEX_FILE).is_file()
                        || scanner::has_size_subdirectories(candidate))
            })
    }

    /// Load a theme and everything it inherits into `state`.
    ///
    /// Returns true if the theme is in the chain afterwards. Loading a theme
    /// that is already present succeeds without rescanning it.
    pub fn load(&self, name: &str, tier: LoadTier, state: &mut ThemeState) -> bool {
        let mut visiting = HashSet::new();
        self.load_at_depth(name, 0, tier, &mut visiting, state)
    }

    fn load_at_depth(
        &self,
        name: &str,
        depth: usize,
        tier: LoadTier,
        visiting: &mut HashSet<String>,
        state: &mut ThemeState,
    ) -> bool {
        if depth > MAX_DEPTH {
            warn!(target: "ils_icon_theme::loader", theme = name, depth, "inheritance too deep");
            return false;
        }
        if state.chain.contains(name) {
            return true;
        }
        if !visiting.insert(name.to_string()) {
            debug!(target: "ils_icon_theme::loader", theme = name, "inheritance cycle");
            return true;
        }

        let Some(path) = self.find_theme_path(name) else {
            debug!(target: "ils_icon_theme::loader", theme = name, "theme not found");
            visiting.remove(name);
            return false;
        };

        let mut theme = parser::parse_index_theme(&path, name);

        for parent in theme.inherits.clone() {
            if !self.load_at_depth(&parent, depth + 1, tier, visiting, state) {
                debug!(
                    target: "ils_icon_theme::loader",
                    theme = name,
                    parent = %parent,
                    "inherited theme not loaded"
                );
            }
        }
        visiting.remove(name);

        let priority = ThemePriority::new(tier, state.chain.len());
        let icons = index_theme(&mut theme, &mut state.index, priority);

        debug!(
            target: "ils_icon_theme::loader",
            theme = name,
            path = %path.display(),
            directories = theme.directories.len(),
            icons,
            ?tier,
            "loaded theme"
        );
        state.chain.push(theme);
        true
    }
}

/// Index a theme's declared directories, falling back to a filesystem scan
/// when too few of them hold icons.
///
/// Directories discovered by the scan are appended to the descriptor.
/// Returns the number of icons indexed.
fn index_theme(theme: &mut ThemeDescriptor, index: &mut IconIndex, priority: ThemePriority) -> usize {
    let mut icons = 0;
    let mut populated = 0;

    for dir in &theme.directories {
        let added = index.index_directory(&theme.path.join(&dir.name), dir, &theme.id, priority);
        if added > 0 {
            populated += 1;
            icons += added;
        }
    }

    if populated < MIN_POPULATED_DIRECTORIES {
        trace!(
            target: "ils_icon_theme::loader",
            theme = %theme.id,
            populated,
            "scanning theme directories"
        );
        for dir in scanner::scan_directories(&theme.path) {
            if theme.directory(&dir.name).is_some() {
                continue;
            }
            let added = index.index_directory(&theme.path.join(&dir.name), &dir, &theme.id, priority);
            if added > 0 {
                icons += added;
                theme.directories.push(dir);
            }
        }
    }

    icons
}
