//! In-memory icon index.
//!
//! Icons discovered in theme directories are recorded once at load time and
//! answered from memory afterwards. Each entry keeps a copy of the directory
//! metadata it was found under, so size matching never touches the disk.
//!
//! Theme precedence is explicit: every entry carries the [`ThemePriority`]
//! of its theme, and ties in size distance are broken by priority first and
//! by insertion order second.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use super::matcher;
use super::types::DirectoryDescriptor;

/// File extensions recognized as icons.
pub const ICON_EXTENSIONS: [&str; 4] = ["png", "svg", "svgz", "xpm"];

/// Which part of a session loaded a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadTier {
    /// Universal fallbacks added by the engine (`hicolor`, well-known themes)
    Fallback,
    /// The requested theme and everything it inherits
    Primary,
}

/// Rank of a theme for tie-breaking. Higher wins.
///
/// Within a tier, themes appended to the chain later rank higher, so a
/// theme always outranks the themes it inherits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemePriority {
    /// Load tier, compared first
    pub tier: LoadTier,
    /// Position in the theme chain
    pub position: usize,
}

impl ThemePriority {
    /// Create a priority.
    pub fn new(tier: LoadTier, position: usize) -> Self {
        Self { tier, position }
    }
}

/// One icon file known to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconIndexEntry {
    /// Icon name without extension
    pub name: String,
    /// Absolute path of the icon file
    pub path: PathBuf,
    /// Context label of the directory the icon was found in
    pub context: Option<String>,
    /// Id of the owning theme
    pub theme: String,
    /// Metadata of the directory the icon was found in
    pub directory: DirectoryDescriptor,
    /// Rank of the owning theme
    pub priority: ThemePriority,
    seq: usize,
}

impl IconIndexEntry {
    /// Size distance of this entry for `size`.
    pub fn distance(&self, size: u32) -> u32 {
        matcher::distance(&self.directory, size)
    }
}

/// Name-keyed icon index.
#[derive(Debug, Default)]
pub struct IconIndex {
    entries: Vec<IconIndexEntry>,
    by_name: HashMap<String, Vec<usize>>,
}

impl IconIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an icon to the index.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        theme: impl Into<String>,
        directory: &DirectoryDescriptor,
        priority: ThemePriority,
    ) {
        let seq = self.entries.len();
        let name = name.into();
        self.by_name.entry(name.clone()).or_default().push(seq);
        self.entries.push(IconIndexEntry {
            name,
            path: path.into(),
            context: directory.context.clone(),
            theme: theme.into(),
            directory: directory.clone(),
            priority,
            seq,
        });
    }

    /// Scan one directory (non-recursively) and index its icon files.
    ///
    /// Regular files and symlinks with a recognized extension are indexed
    /// under their extension-stripped name. A missing or unreadable
    /// directory indexes nothing. Returns the number of icons added.
    pub fn index_directory(
        &mut self,
        dir_path: &Path,
        directory: &DirectoryDescriptor,
        theme: &str,
        priority: ThemePriority,
    ) -> usize {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(_) => return 0,
        };

        let mut icons: Vec<(String, PathBuf)> = entries
            .flatten()
            .filter(|entry| {
                entry
                    .file_type()
                    .map(|t| t.is_file() || t.is_symlink())
                    .unwrap_or(false)
            })
            .filter_map(|entry| {
                let path = entry.path();
                let name = icon_name(&path)?;
                Some((name, path))
            })
            .collect();
        icons.sort();

        let added = icons.len();
        for (name, path) in icons {
            self.insert(name, path, theme, directory, priority);
        }

        if added > 0 {
            trace!(
                target: "ils_icon_theme::index",
                theme,
                directory = %directory.name,
                added,
                "indexed directory"
            );
        }
        added
    }

    /// All entries for an icon name, in insertion order.
    pub fn lookup<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a IconIndexEntry> + 'a {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&i| &self.entries[i])
    }

    /// Best entry for `name` at `size`, optionally restricted to a context label.
    ///
    /// Lowest size distance wins. Ties go to the higher theme priority, then
    /// to the entry inserted last.
    pub fn best_match(
        &self,
        name: &str,
        size: u32,
        context: Option<&str>,
    ) -> Option<&IconIndexEntry> {
        self.lookup(name)
            .filter(|entry| context.is_none() || entry.context.as_deref() == context)
            .min_by_key(|entry| (entry.distance(size), Reverse(entry.priority), Reverse(entry.seq)))
    }

    /// Whether any entry has this name.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[IconIndexEntry] {
        &self.entries
    }

    /// Number of indexed icon files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_name.clear();
    }
}

/// Icon name for a file path, if the extension marks it as an icon.
fn icon_name(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !ICON_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}
