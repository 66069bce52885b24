//! Filesystem discovery of icon directories.
//!
//! Many installed themes ship no `index.theme`, or one that lists only a
//! handful of directories. For those, icon directories are rediscovered from
//! the directory layout itself:
//!
//! - size-first: `48x48/apps`, `scalable/mimetypes`
//! - context-first: `apps/48`, `mimetypes/scalable`
//!
//! This is heuristic discovery; nothing here is dictated by `index.theme`.

use std::fs;
use std::path::Path;

use super::matcher::{self, NamedSize};
use super::types::{DEFAULT_SCALABLE_MAX, DirectoryDescriptor, IconContext};

/// Lower bound given to discovered scalable directories.
const SCALABLE_MIN: u32 = 16;

/// Size bucket encoded in a single directory name.
fn bucket(name: &str) -> Option<NamedSize> {
    if name.contains('/') {
        return None;
    }
    matcher::parse_named_size(name)
}

/// Canonical context label for a directory name, or the name itself.
pub fn context_label(dir_name: &str) -> String {
    IconContext::parse(dir_name)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| dir_name.to_string())
}

/// Sorted names of the immediate subdirectories of `path`.
fn subdirectories(path: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    names
}

fn synthesize(name: String, size: NamedSize, context: String) -> DirectoryDescriptor {
    match size {
        NamedSize::Pixels(pixels) => DirectoryDescriptor::fixed(name, pixels, Some(context)),
        NamedSize::Scalable => {
            DirectoryDescriptor::scalable(name, SCALABLE_MIN, DEFAULT_SCALABLE_MAX, Some(context))
        }
    }
}

/// Whether `theme_path` looks like an icon theme laid out by size.
pub fn has_size_subdirectories(theme_path: &Path) -> bool {
    subdirectories(theme_path).iter().any(|top| {
        bucket(top).is_some()
            || (IconContext::parse(top).is_some()
                && subdirectories(&theme_path.join(top))
                    .iter()
                    .any(|child| bucket(child).is_some()))
    })
}

/// Discover icon directories under `theme_path`.
///
/// Size-first buckets become `Fixed` directories of their size, or
/// `Scalable` directories spanning 16..=512. Context names are mapped to
/// their canonical labels; unknown names are used verbatim.
pub fn scan_directories(theme_path: &Path) -> Vec<DirectoryDescriptor> {
    let mut found = Vec::new();

    for top in subdirectories(theme_path) {
        if let Some(size) = bucket(&top) {
            for context in subdirectories(&theme_path.join(&top)) {
                let label = context_label(&context);
                found.push(synthesize(format!("{top}/{context}"), size, label));
            }
        } else if let Some(context) = IconContext::parse(&top) {
            for child in subdirectories(&theme_path.join(&top)) {
                if let Some(size) = bucket(&child) {
                    found.push(synthesize(
                        format!("{top}/{child}"),
                        size,
                        context.label().to_string(),
                    ));
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_theme::types::DirectoryType;
    use tempfile::TempDir;

    fn make_dirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_context_label() {
        assert_eq!(context_label("apps"), "Applications");
        assert_eq!(context_label("applications"), "Applications");
        assert_eq!(context_label("mimetypes"), "MimeTypes");
        assert_eq!(context_label("places"), "Places");
        assert_eq!(context_label("devices"), "Devices");
        assert_eq!(context_label("actions"), "Actions");
        assert_eq!(context_label("categories"), "Categories");
        assert_eq!(context_label("status"), "Status");
        assert_eq!(context_label("emblems"), "Emblems");
        assert_eq!(context_label("legacy"), "legacy");
    }

    #[test]
    fn test_scan_size_first_layout() {
        let temp = TempDir::new().unwrap();
        make_dirs(temp.path(), &["48x48/apps", "48x48/legacy", "scalable/mimetypes", "cursors"]);

        let dirs = scan_directories(temp.path());
        assert_eq!(dirs.len(), 3);

        let apps = dirs.iter().find(|d| d.name == "48x48/apps").unwrap();
        assert_eq!(apps.dir_type, DirectoryType::Fixed);
        assert_eq!(apps.size, 48);
        assert_eq!(apps.context.as_deref(), Some("Applications"));

        let legacy = dirs.iter().find(|d| d.name == "48x48/legacy").unwrap();
        assert_eq!(legacy.context.as_deref(), Some("legacy"));

        let scalable = dirs.iter().find(|d| d.name == "scalable/mimetypes").unwrap();
        assert_eq!(scalable.dir_type, DirectoryType::Scalable);
        assert_eq!((scalable.min_size, scalable.max_size), (16, 512));
        assert_eq!(scalable.context.as_deref(), Some("MimeTypes"));
    }

    #[test]
    fn test_scan_context_first_layout() {
        let temp = TempDir::new().unwrap();
        make_dirs(temp.path(), &["places/32", "places/scalable", "places/symbolic"]);

        let dirs = scan_directories(temp.path());
        assert_eq!(dirs.len(), 2);
        assert!(dirs.iter().all(|d| d.context.as_deref() == Some("Places")));
        assert_eq!(dirs[0].name, "places/32");
        assert_eq!(dirs[0].size, 32);
        assert_eq!(dirs[1].dir_type, DirectoryType::Scalable);
    }

    #[test]
    fn test_has_size_subdirectories() {
        let sized = TempDir::new().unwrap();
        make_dirs(sized.path(), &["16x16/apps"]);
        assert!(has_size_subdirectories(sized.path()));

        let context_first = TempDir::new().unwrap();
        make_dirs(context_first.path(), &["apps/22"]);
        assert!(has_size_subdirectories(context_first.path()));

        let cursors = TempDir::new().unwrap();
        make_dirs(cursors.path(), &["cursors"]);
        assert!(!has_size_subdirectories(cursors.path()));

        assert!(!has_size_subdirectories(Path::new("/definitely/not/here")));
    }
}
