//! The icon engine.
//!
//! [`IconEngine`] owns everything a session needs: the loaded theme chain,
//! the icon index built from it and the default icons derived at init. It
//! moves between two states:
//!
//! ```text
//! Uninitialized --init_theme--> Ready --teardown_theme--> Uninitialized
//! ```
//!
//! Calling [`IconEngine::init_theme`] again from `Ready` discards the
//! previous session first, so no path from an earlier theme survives.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::icon_theme::{
    FallbackResolver, IconIndex, LoadTier, MIME_CONTEXT, ThemeChain, ThemeLoader, ThemeState,
    mime,
};

/// Theme every session falls back to.
pub const HICOLOR: &str = "hicolor";

/// Icon names tried, in order, for the default file icon.
pub const FILE_ICON_CANDIDATES: [&str; 6] = [
    "text-x-generic",
    "text-plain",
    "unknown",
    "application-x-generic",
    "gtk-file",
    "file",
];

/// Icon names tried, in order, for the default directory icon.
pub const DIRECTORY_ICON_CANDIDATES: [&str; 6] = [
    "folder",
    "inode-directory",
    "directory",
    "folder-open",
    "gtk-directory",
    "file-manager",
];

/// Icon for executable files without a better match.
pub const EXECUTABLE_ICON: &str = "application-x-executable";

/// Context used for well-known folder icons.
pub const PLACES_CONTEXT: &str = "Places";

/// Well-known directory names and their icons.
const WELL_KNOWN_FOLDERS: &[(&str, &str)] = &[
    ("Desktop", "user-desktop"),
    ("Documents", "folder-documents"),
    ("Downloads", "folder-download"),
    ("Music", "folder-music"),
    ("Pictures", "folder-pictures"),
    ("Videos", "folder-videos"),
    ("Templates", "folder-templates"),
    ("Public", "folder-publicshare"),
    ("Trash", "user-trash"),
    (".Trash", "user-trash"),
];

const S_IFMT: u32 = 0o170000;
const S_IFDIR: u32 = 0o040000;
const S_IXUSR: u32 = 0o000100;

/// Icon name for a well-known directory, matched case-insensitively on the
/// directory's own name.
pub fn well_known_folder_icon(dir_name: &str) -> Option<&'static str> {
    let name = Path::new(dir_name).file_name()?.to_str()?;
    WELL_KNOWN_FOLDERS
        .iter()
        .find(|(folder, _)| folder.eq_ignore_ascii_case(name))
        .map(|&(_, icon)| icon)
}

/// Look up the MIME type of a file extension.
///
/// The match is case-insensitive; the leading dot is optional.
pub fn extension_to_mime_type(extension: &str) -> Option<&'static str> {
    mime::extension_to_mime_type(extension)
}

/// State of a loaded theme session.
#[derive(Debug)]
struct Session {
    themes: ThemeState,
    active_theme: Option<String>,
    default_file_icon: Option<PathBuf>,
    default_directory_icon: Option<PathBuf>,
}

#[derive(Debug, Default)]
enum EngineState {
    #[default]
    Uninitialized,
    Ready(Session),
}

/// Resolves icons for files from the configured icon themes.
#[derive(Debug)]
pub struct IconEngine {
    config: EngineConfig,
    loader: ThemeLoader,
    state: EngineState,
}

impl IconEngine {
    /// Create an engine. No theme is loaded until [`init_theme`](Self::init_theme).
    pub fn new(config: EngineConfig) -> Self {
        let loader = ThemeLoader::new(config.resolved_search_paths());
        Self::with_loader(config, loader)
    }

    /// Create an engine with an explicit theme loader.
    pub fn with_loader(config: EngineConfig, loader: ThemeLoader) -> Self {
        Self {
            config,
            loader,
            state: EngineState::Uninitialized,
        }
    }

    /// Create an engine from the default configuration and the process
    /// environment.
    pub fn from_env() -> Self {
        Self::new(EngineConfig::default().with_env_overrides())
    }

    /// Get the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the theme loader.
    pub fn loader(&self) -> &ThemeLoader {
        &self.loader
    }

    /// Icon size used for every lookup.
    pub fn icon_size(&self) -> u32 {
        self.config.icon_size
    }

    /// Whether a theme session is loaded.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, EngineState::Ready(_))
    }

    fn session(&self) -> Option<&Session> {
        match &self.state {
            EngineState::Ready(session) => Some(session),
            EngineState::Uninitialized => None,
        }
    }

    /// Load the configured default theme.
    pub fn init(&mut self) -> bool {
        let theme = self.config.theme.clone();
        self.init_theme(&theme)
    }

    /// Load `theme` and start a new session, discarding any previous one.
    ///
    /// `hicolor` is always loaded as well. If `theme` cannot be loaded, the
    /// configured fallback themes are tried in order until one loads. Themes
    /// loaded this way rank below every theme of the requested chain.
    ///
    /// Returns true if `theme` itself was loaded. The engine is ready
    /// afterwards either way.
    pub fn init_theme(&mut self, theme: &str) -> bool {
        self.teardown_theme();

        let mut themes = ThemeState::new();
        let primary_loaded = self.loader.load(theme, LoadTier::Primary, &mut themes);
        if !primary_loaded {
            warn!(target: "ils_icon_theme::engine", theme, "icon theme not found");
        }

        let hicolor_loaded = self.loader.load(HICOLOR, LoadTier::Fallback, &mut themes);

        let mut active_theme = primary_loaded.then(|| theme.to_string());
        if !primary_loaded {
            active_theme = self
                .config
                .fallback_themes
                .iter()
                .find(|fallback| self.loader.load(fallback, LoadTier::Fallback, &mut themes))
                .cloned();
        }
        if active_theme.is_none() && hicolor_loaded {
            active_theme = Some(HICOLOR.to_string());
        }

        let size = self.config.icon_size;
        let default_file_icon = first_exact(&themes.index, &FILE_ICON_CANDIDATES, size);
        let default_directory_icon = first_exact(&themes.index, &DIRECTORY_ICON_CANDIDATES, size);

        let session = Session {
            themes,
            active_theme,
            default_file_icon,
            default_directory_icon,
        };
        self.log_summary(&session);
        self.state = EngineState::Ready(session);

        primary_loaded
    }

    fn log_summary(&self, session: &Session) {
        let file_icon = display_or_none(session.default_file_icon.as_deref());
        let directory_icon = display_or_none(session.default_directory_icon.as_deref());
        let active = session.active_theme.as_deref().unwrap_or("NONE");
        let icons = session.themes.index.len();

        if self.config.debug {
            info!(target: "ils_icon_theme::engine", active, icons, %file_icon, %directory_icon, "theme initialization complete");
        } else {
            debug!(target: "ils_icon_theme::engine", active, icons, %file_icon, %directory_icon, "theme initialization complete");
        }

        for theme in session.themes.chain.themes() {
            let path = theme.path.display();
            let directories = theme.directories.len();
            if self.config.debug {
                info!(target: "ils_icon_theme::engine", theme = %theme.id, name = %theme.name, %path, directories, "loaded theme");
            } else {
                debug!(target: "ils_icon_theme::engine", theme = %theme.id, name = %theme.name, %path, directories, "loaded theme");
            }
        }
    }

    /// Discard the current session. Does nothing when no theme is loaded.
    pub fn teardown_theme(&mut self) {
        if let EngineState::Ready(session) = std::mem::take(&mut self.state) {
            debug!(
                target: "ils_icon_theme::engine",
                themes = session.themes.chain.len(),
                icons = session.themes.index.len(),
                "theme session released"
            );
        }
    }

    /// Resolve the icon for a file.
    ///
    /// Custom icons configured for the literal file name win. Directories
    /// use the well-known folder icons, then the default directory icon.
    /// Files use their extension, then `application-x-executable` when
    /// executable, then the default file icon.
    pub fn resolve_icon(&self, filename: &str, is_directory: bool, is_executable: bool) -> Option<PathBuf> {
        if let Some(custom) = self.config.custom_icon(filename) {
            return Some(custom);
        }

        let session = self.session()?;
        let resolver = FallbackResolver::new(&session.themes.index);
        let size = self.config.icon_size;

        if is_directory {
            return well_known_folder_icon(filename)
                .and_then(|icon| resolver.resolve(icon, size, Some(PLACES_CONTEXT)))
                .or_else(|| session.default_directory_icon.clone());
        }

        mime::file_extension(filename)
            .and_then(|extension| resolver.resolve_extension(extension, size))
            .or_else(|| {
                is_executable
                    .then(|| resolver.resolve(EXECUTABLE_ICON, size, Some(MIME_CONTEXT)))
                    .flatten()
            })
            .or_else(|| session.default_file_icon.clone())
    }

    /// Resolve the icon for a file from its Unix mode bits.
    ///
    /// `S_IFDIR` marks a directory and `S_IXUSR` an executable.
    pub fn resolve_mode(&self, filename: &str, mode: u32) -> Option<PathBuf> {
        let is_directory = mode & S_IFMT == S_IFDIR;
        let is_executable = mode & S_IXUSR != 0;
        self.resolve_icon(filename, is_directory, is_executable)
    }

    /// Resolve an icon by name with the full fallback sequence.
    pub fn resolve_name(&self, icon_name: &str, context: Option<&str>) -> Option<PathBuf> {
        let session = self.session()?;
        FallbackResolver::new(&session.themes.index).resolve(icon_name, self.config.icon_size, context)
    }

    /// Theme that answered the last init, if any.
    pub fn active_theme(&self) -> Option<&str> {
        self.session()?.active_theme.as_deref()
    }

    /// Default icon for files.
    pub fn default_file_icon(&self) -> Option<&Path> {
        self.session()?.default_file_icon.as_deref()
    }

    /// Default icon for directories.
    pub fn default_directory_icon(&self) -> Option<&Path> {
        self.session()?.default_directory_icon.as_deref()
    }

    /// Themes of the current session, in load order.
    pub fn theme_chain(&self) -> Option<&ThemeChain> {
        Some(&self.session()?.themes.chain)
    }

    /// Icon index of the current session.
    pub fn index(&self) -> Option<&IconIndex> {
        Some(&self.session()?.themes.index)
    }
}

/// Path of the first candidate present in the index, by exact name.
fn first_exact(index: &IconIndex, candidates: &[&str], size: u32) -> Option<PathBuf> {
    candidates
        .iter()
        .find_map(|name| index.best_match(name, size, None))
        .map(|entry| entry.path.clone())
}

fn display_or_none(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "NONE".to_string())
}
