//! End-to-end icon resolution tests against throwaway theme trees.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use ils_icon_theme::prelude::*;
use tempfile::TempDir;
use tracing_subscriber::filter::LevelFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
}

/// A directory of icon themes.
struct ThemeTree {
    root: TempDir,
}

impl ThemeTree {
    fn new() -> Self {
        init_tracing();
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn theme(&self, id: &str, index: Option<&str>) -> &Self {
        let dir = self.path().join(id);
        fs::create_dir_all(&dir).unwrap();
        if let Some(index) = index {
            fs::write(dir.join("index.theme"), index).unwrap();
        }
        self
    }

    fn icon(&self, id: &str, rel: &str) -> PathBuf {
        let path = self.path().join(id).join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(&path).unwrap();
        path
    }

    fn engine(&self, icon_size: u32) -> IconEngine {
        let config = EngineConfig::default()
            .with_icon_size(icon_size)
            .without_custom_icons()
            .with_search_paths([self.path().to_path_buf()]);
        IconEngine::new(config)
    }
}

const HICOLOR_INDEX: &str = r#"[Icon Theme]
Name=Hicolor
Comment=Fallback icon theme
Hidden=true
Directories=48x48/mimetypes,scalable/mimetypes,48x48/places

[48x48/mimetypes]
Size=48
Context=MimeTypes
Type=Threshold

[scalable/mimetypes]
Size=128
MinSize=8
MaxSize=512
Context=MimeTypes
Type=Scalable

[48x48/places]
Size=48
Context=Places
Type=Threshold
"#;

fn theme_index(inherits: &str) -> String {
    format!(
        "[Icon Theme]\nName=Theme\nInherits={inherits}\nDirectories=48x48/mimetypes\n\n\
         [48x48/mimetypes]\nSize=48\nContext=MimeTypes\nType=Fixed\n"
    )
}

#[test]
fn test_hicolor_txt_at_48() {
    let tree = ThemeTree::new();
    tree.theme("hicolor", Some(HICOLOR_INDEX));
    let generic = tree.icon("hicolor", "48x48/mimetypes/text-x-generic.png");

    let mut engine = tree.engine(48);
    assert!(engine.init_theme("hicolor"));
    assert_eq!(engine.resolve_icon("notes.txt", false, false), Some(generic));
}

#[test]
fn test_hicolor_txt_at_64_uses_scalable() {
    let tree = ThemeTree::new();
    tree.theme("hicolor", Some(HICOLOR_INDEX));
    tree.icon("hicolor", "48x48/mimetypes/text-x-generic.png");
    let scalable = tree.icon("hicolor", "scalable/mimetypes/text-x-generic.svg");

    let mut engine = tree.engine(64);
    engine.init_theme("hicolor");
    assert_eq!(engine.resolve_icon("notes.txt", false, false), Some(scalable));
}

#[test]
fn test_inheriting_theme_wins_ties() {
    let tree = ThemeTree::new();
    tree.theme("child", Some(&theme_index("parent")));
    tree.theme("parent", Some(&theme_index("")));
    let child = tree.icon("child", "48x48/mimetypes/text-x-python.png");
    tree.icon("parent", "48x48/mimetypes/text-x-python.png");

    let mut engine = tree.engine(48);
    assert!(engine.init_theme("child"));
    assert_eq!(engine.resolve_icon("main.py", false, false), Some(child));
}

#[test]
fn test_primary_chain_outranks_hicolor() {
    let tree = ThemeTree::new();
    tree.theme("hicolor", Some(HICOLOR_INDEX));
    tree.theme("breeze", Some(&theme_index("")));
    tree.icon("hicolor", "48x48/mimetypes/text-x-python.png");
    let breeze = tree.icon("breeze", "48x48/mimetypes/text-x-python.png");

    let mut engine = tree.engine(48);
    engine.init_theme("breeze");

    let ids: Vec<&str> = engine.theme_chain().unwrap().ids().collect();
    assert_eq!(ids, ["breeze", "hicolor"]);
    assert_eq!(engine.resolve_icon("main.py", false, false), Some(breeze));
}

#[test]
fn test_closer_size_beats_theme_priority() {
    let tree = ThemeTree::new();
    tree.theme("hicolor", Some(HICOLOR_INDEX));
    tree.theme("breeze", Some(&theme_index("")));
    let exact = tree.icon("hicolor", "48x48/mimetypes/text-x-python.png");
    tree.icon("breeze", "22x22/mimetypes/text-x-python.png");

    let mut engine = tree.engine(48);
    engine.init_theme("breeze");
    assert_eq!(engine.resolve_icon("main.py", false, false), Some(exact));
}

#[test]
fn test_inheritance_cycle() {
    let tree = ThemeTree::new();
    tree.theme("a", Some(&theme_index("b")));
    tree.theme("b", Some(&theme_index("a")));
    tree.icon("a", "48x48/mimetypes/text-x-python.png");
    tree.icon("b", "48x48/mimetypes/text-x-python.png");

    let mut engine = tree.engine(48);
    assert!(engine.init_theme("a"));

    let chain = engine.theme_chain().unwrap();
    assert_eq!(chain.len(), 2);
    assert_eq!(engine.index().unwrap().lookup("text-x-python").count(), 2);
}

#[test]
fn test_reinit_discards_previous_theme() {
    let tree = ThemeTree::new();
    tree.theme("first", Some(&theme_index("")));
    tree.theme("second", Some(&theme_index("")));
    let first = tree.icon("first", "48x48/mimetypes/text-x-python.png");
    let second = tree.icon("second", "48x48/mimetypes/text-x-rust.png");

    let mut engine = tree.engine(48);
    engine.init_theme("first");
    assert_eq!(engine.resolve_icon("a.py", false, false), Some(first.clone()));

    engine.init_theme("second");
    assert_eq!(engine.resolve_icon("a.rs", false, false), Some(second));
    assert_eq!(engine.resolve_icon("a.py", false, false), None);
    assert!(
        engine
            .index()
            .unwrap()
            .entries()
            .iter()
            .all(|entry| entry.path != first)
    );
}

#[test]
fn test_indexless_theme_is_scanned() {
    let tree = ThemeTree::new();
    tree.theme("candy", None);
    let folder = tree.icon("candy", "48x48/places/folder.svg");
    let documents = tree.icon("candy", "48x48/places/folder-documents.svg");
    let text = tree.icon("candy", "scalable/mimetypes/text-x-generic.svg");

    let mut engine = tree.engine(48);
    assert!(engine.init_theme("candy"));
    assert_eq!(engine.active_theme(), Some("candy"));
    assert_eq!(engine.default_file_icon(), Some(text.as_path()));
    assert_eq!(engine.default_directory_icon(), Some(folder.as_path()));
    assert_eq!(engine.resolve_icon("Documents", true, false), Some(documents));
    assert_eq!(engine.resolve_icon("report.unknownext", false, false), Some(text));
}

#[test]
fn test_fallback_theme_when_primary_missing() {
    let tree = ThemeTree::new();
    tree.theme("gnome", Some(&theme_index("")));
    let python = tree.icon("gnome", "48x48/mimetypes/text-x-python.png");

    let mut engine = tree.engine(48);
    assert!(!engine.init_theme("does-not-exist"));
    assert_eq!(engine.active_theme(), Some("gnome"));
    assert_eq!(engine.resolve_icon("x.py", false, false), Some(python));
}

#[test]
fn test_nothing_installed() {
    let tree = ThemeTree::new();
    let mut engine = tree.engine(48);

    assert!(!engine.init_theme("hicolor"));
    assert!(engine.is_ready());
    assert_eq!(engine.active_theme(), None);
    assert_eq!(engine.resolve_icon("x.py", false, false), None);
    assert_eq!(engine.resolve_icon("src", true, false), None);
}

#[test]
fn test_executable_and_directory_fallbacks() {
    let tree = ThemeTree::new();
    tree.theme("hicolor", Some(HICOLOR_INDEX));
    let exec = tree.icon("hicolor", "48x48/mimetypes/application-x-executable.png");
    let folder = tree.icon("hicolor", "48x48/places/folder.png");
    let generic = tree.icon("hicolor", "48x48/mimetypes/text-x-generic.png");

    let mut engine = tree.engine(48);
    engine.init_theme("hicolor");

    assert_eq!(engine.resolve_mode("configure", 0o100755), Some(exec));
    assert_eq!(engine.resolve_mode("configure", 0o100644), Some(generic));
    assert_eq!(engine.resolve_mode("Pictures", 0o040755), Some(folder));
}
