//! XDG icon theme resolution for `ils`.
//!
//! This crate finds the icon file that represents a file in a listing,
//! following the layered fallback rules of the freedesktop icon theme
//! specification. It features:
//!
//! - **Theme chains**: recursive `Inherits` loading with cycle and depth guards
//! - **Icon index**: every icon of every loaded theme, scanned once at init
//! - **Size matching**: `Fixed`, `Scalable` and `Threshold` directory scoring
//! - **Fallbacks**: generic names, style suffixes and MIME types
//! - **Configuration**: TOML config with environment overrides
//!
//! # Example
//!
//! ```no_run
//! use ils_icon_theme::prelude::*;
//!
//! let config = EngineConfig::default().with_icon_size(48).with_env_overrides();
//! let mut engine = IconEngine::new(config);
//! engine.init_theme("Papirus");
//!
//! let icon = engine.resolve_icon("main.rs", false, false);
//! let folder = engine.resolve_mode("Documents", 0o040755);
//! engine.teardown_theme();
//! ```

pub mod config;
pub mod engine;
pub mod icon_theme;
pub mod paths;

mod error;

pub use config::EngineConfig;
pub use engine::{IconEngine, extension_to_mime_type};
pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::{IconEngine, extension_to_mime_type};
    pub use crate::icon_theme::{
        DirectoryDescriptor, DirectoryType, FallbackResolver, IconIndex, LoadTier, ThemeDescriptor,
        ThemeLoader, ThemeState,
    };
    pub use crate::paths::SearchPaths;
    pub use crate::{Error, Result};
}
