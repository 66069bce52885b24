//! Engine configuration.
//!
//! [`EngineConfig`] can be built in code with the `with_*` methods or read
//! from a TOML file. Every field has a default, so a config file only needs
//! the keys it changes:
//!
//! ```toml
//! theme = "Papirus"
//! icon_size = 48
//! fallback_themes = ["Adwaita"]
//!
//! [custom_icons]
//! lemon = "~/.local/share/customLogos/lemon.svg"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::paths::{self, SearchPaths};
use crate::{Error, Result};

/// Environment variables that enable the init summary at `info` level.
pub const DEBUG_ENV_VARS: [&str; 2] = ["DEBUG_ICONS", "ILS_DEBUG_ICONS"];

/// Default icon size in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Configuration of an [`IconEngine`](crate::IconEngine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Requested icon size in pixels
    pub icon_size: u32,
    /// Theme loaded when none is named explicitly
    pub theme: String,
    /// Themes tried in order when the requested theme cannot be loaded
    pub fallback_themes: Vec<String>,
    /// Explicit theme search paths, replacing the XDG defaults
    pub search_paths: Option<Vec<PathBuf>>,
    /// Literal file names mapped to fixed icon paths
    pub custom_icons: BTreeMap<String, String>,
    /// Log the init summary at `info` instead of `debug`
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let custom_icons = ["lemon", "sentiments", "memory", "state", "test"]
            .into_iter()
            .map(|name| (name.to_string(), format!("$HOME/.local/share/customLogos/{name}.svg")))
            .collect();

        Self {
            icon_size: DEFAULT_ICON_SIZE,
            theme: "hicolor".to_string(),
            fallback_themes: vec!["Adwaita".into(), "gnome".into(), "oxygen".into()],
            search_paths: None,
            custom_icons,
            debug: false,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(None, e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(Some(path.to_path_buf()), e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.icon_size == 0 {
            return Err(Error::invalid_value("icon_size", "must be at least 1 pixel"));
        }
        if self.theme.trim().is_empty() {
            return Err(Error::invalid_value("theme", "must not be empty"));
        }
        Ok(())
    }

    /// Set the icon size.
    pub fn with_icon_size(mut self, size: u32) -> Self {
        self.icon_size = size;
        self
    }

    /// Set the default theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Replace the well-known fallback themes.
    pub fn with_fallback_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_themes = themes.into_iter().map(Into::into).collect();
        self
    }

    /// Use explicit search paths instead of the XDG defaults.
    pub fn with_search_paths<I, P>(mut self, search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = Some(search_paths.into_iter().map(Into::into).collect());
        self
    }

    /// Map a literal file name to a fixed icon path.
    pub fn with_custom_icon(mut self, filename: impl Into<String>, path: impl Into<String>) -> Self {
        self.custom_icons.insert(filename.into(), path.into());
        self
    }

    /// Remove every custom icon mapping.
    pub fn without_custom_icons(mut self) -> Self {
        self.custom_icons.clear();
        self
    }

    /// Enable or disable the debug summary.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to read environment variables.
    ///
    /// Any non-empty debug variable turns the debug summary on.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if DEBUG_ENV_VARS
            .iter()
            .any(|key| lookup(key).is_some_and(|v| !v.is_empty()))
        {
            self.debug = true;
        }
        self
    }

    /// Search paths to probe for themes, with `~` and `$HOME` expanded.
    pub fn resolved_search_paths(&self) -> SearchPaths {
        match &self.search_paths {
            Some(configured) => {
                let home = paths::home_dir();
                SearchPaths::new(configured.iter().map(|p| match p.to_str() {
                    Some(s) => paths::expand_home(s, home.as_deref()),
                    None => p.clone(),
                }))
            }
            None => SearchPaths::from_env(),
        }
    }

    /// Fixed icon path for a literal file name, with `~` and `$HOME` expanded.
    pub fn custom_icon(&self, filename: &str) -> Option<PathBuf> {
        self.custom_icons
            .get(filename)
            .map(|path| paths::expand_home(path, paths::home_dir().as_deref()))
    }
}
