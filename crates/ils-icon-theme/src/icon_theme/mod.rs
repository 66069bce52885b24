//! XDG icon theme machinery.
//!
//! This module turns installed icon themes into an in-memory index and
//! answers icon lookups from it. It includes:
//!
//! - **Parsing**: `index.theme` descriptors ([`parse_index_theme`])
//! - **Discovery**: size/context directories of themes without a usable
//!   descriptor ([`scan_directories`])
//! - **Loading**: theme chains with recursive inheritance ([`ThemeLoader`])
//! - **Indexing**: icon files with their directory metadata ([`IconIndex`])
//! - **Size matching**: `Fixed`, `Scalable` and `Threshold` distances
//! - **Resolution**: name, context and MIME fallbacks ([`FallbackResolver`])
//!
//! # Example
//!
//! ```no_run
//! use ils_icon_theme::icon_theme::{FallbackResolver, LoadTier, ThemeLoader, ThemeState};
//!
//! let loader = ThemeLoader::from_env();
//! let mut state = ThemeState::new();
//! loader.load("Adwaita", LoadTier::Primary, &mut state);
//! loader.load("hicolor", LoadTier::Fallback, &mut state);
//!
//! let resolver = FallbackResolver::new(&state.index);
//! let icon = resolver.resolve("text-x-python", 48, Some("MimeTypes"));
//! ```

mod index;
mod loader;
mod matcher;
pub mod mime;
mod parser;
mod resolver;
mod scanner;
mod types;

pub use index::{ICON_EXTENSIONS, IconIndex, IconIndexEntry, LoadTier, ThemePriority};
pub use loader::{MAX_DEPTH, MIN_POPULATED_DIRECTORIES, ThemeChain, ThemeLoader, ThemeState};
pub use matcher::{INCOMPATIBLE, NamedSize, distance, nominal_size, parse_named_size, size_from_directory_name};
pub use parser::{INDEX_FILE, parse_index_str, parse_index_theme, read_index_theme};
pub use resolver::{FallbackResolver, MIME_CONTEXT, context_variants, name_variants};
pub use scanner::{context_label, has_size_subdirectories, scan_directories};
pub use types::{
    DEFAULT_DIRECTORY_SIZE, DEFAULT_SCALABLE_MAX, DEFAULT_THRESHOLD, DirectoryDescriptor,
    DirectoryType, IconContext, MAX_INHERITS, ThemeDescriptor,
};
