//! Core types for the icon theme system.
//!
//! This module provides the fundamental types for icon theming, including:
//! - Icon context categories (Applications, MimeTypes, etc.)
//! - Directory size types and per-directory metadata
//! - Theme metadata as parsed from `index.theme`

use std::fmt;
use std::path::PathBuf;

/// Maximum number of parent themes honored from an `Inherits` list.
pub const MAX_INHERITS: usize = 16;

/// Nominal size assigned to directories that do not declare one.
pub const DEFAULT_DIRECTORY_SIZE: u32 = 48;

/// Threshold assigned to `Threshold` directories that do not declare one.
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Upper bound assigned to `Scalable` directories that do not declare one.
pub const DEFAULT_SCALABLE_MAX: u32 = 512;

/// Icon context/category following the freedesktop specification.
///
/// Contexts organize icons by purpose. Theme files spell them in
/// several ways (`MimeTypes`, `mimetypes`, `apps`, `Applications`), so
/// directory descriptors keep the raw label and this enum is used to
/// canonicalize names discovered on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconContext {
    /// Icons for user actions (copy, save, etc.)
    Actions,
    /// Loading and processing animations
    Animations,
    /// Application icons
    Applications,
    /// Program menu categories
    Categories,
    /// Hardware devices
    Devices,
    /// File/folder emblems and tags
    Emblems,
    /// Emoticons for chat
    Emotes,
    /// Country flags
    International,
    /// File type icons (MIME types)
    MimeTypes,
    /// Filesystem locations
    Places,
    /// System status indicators
    Status,
}

impl IconContext {
    /// Canonical `Context=` label as written in `index.theme`.
    pub fn label(&self) -> &'static str {
        match self {
            IconContext::Actions => "Actions",
            IconContext::Animations => "Animations",
            IconContext::Applications => "Applications",
            IconContext::Categories => "Categories",
            IconContext::Devices => "Devices",
            IconContext::Emblems => "Emblems",
            IconContext::Emotes => "Emotes",
            IconContext::International => "International",
            IconContext::MimeTypes => "MimeTypes",
            IconContext::Places => "Places",
            IconContext::Status => "Status",
        }
    }

    /// Parse a context from a label or a directory name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "actions" => Some(IconContext::Actions),
            "animations" => Some(IconContext::Animations),
            "apps" | "applications" => Some(IconContext::Applications),
            "categories" => Some(IconContext::Categories),
            "devices" => Some(IconContext::Devices),
            "emblems" => Some(IconContext::Emblems),
            "emotes" => Some(IconContext::Emotes),
            "intl" | "international" => Some(IconContext::International),
            "mimetypes" | "mime-types" | "mimes" => Some(IconContext::MimeTypes),
            "places" => Some(IconContext::Places),
            "status" => Some(IconContext::Status),
            _ => None,
        }
    }
}

impl fmt::Display for IconContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Size matching type for icon theme directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DirectoryType {
    /// Fixed size icons - must match exactly
    Fixed,
    /// Scalable icons (typically SVG) usable within `[min_size, max_size]`
    Scalable,
    /// Usable within `threshold` pixels of the nominal size
    #[default]
    Threshold,
}

impl DirectoryType {
    /// Parse a `Type=` value. Unknown values fall back to `Threshold`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => DirectoryType::Fixed,
            "scalable" => DirectoryType::Scalable,
            _ => DirectoryType::Threshold,
        }
    }

    /// Name as written in `index.theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryType::Fixed => "Fixed",
            DirectoryType::Scalable => "Scalable",
            DirectoryType::Threshold => "Threshold",
        }
    }
}

impl fmt::Display for DirectoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one icon directory of a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDescriptor {
    /// Directory path relative to the theme root (e.g. `48x48/apps`)
    pub name: String,
    /// Declared nominal size (`Size=`)
    pub size: u32,
    /// Context label as declared (`Context=`), or derived from the directory name
    pub context: Option<String>,
    /// Size matching type
    pub dir_type: DirectoryType,
    /// Minimum size (Scalable)
    pub min_size: u32,
    /// Maximum size (Scalable)
    pub max_size: u32,
    /// Size tolerance (Threshold)
    pub threshold: u32,
}

impl DirectoryDescriptor {
    /// Descriptor for a directory listed in `Directories=` before its own
    /// section is read: `Threshold`, size 48, threshold 2.
    pub fn declared(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_DIRECTORY_SIZE,
            context: None,
            dir_type: DirectoryType::Threshold,
            min_size: 0,
            max_size: 0,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// A `Fixed` directory of the given size.
    pub fn fixed(name: impl Into<String>, size: u32, context: Option<String>) -> Self {
        Self {
            name: name.into(),
            size,
            context,
            dir_type: DirectoryType::Fixed,
            min_size: 0,
            max_size: 0,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// A `Scalable` directory usable between `min_size` and `max_size`.
    pub fn scalable(
        name: impl Into<String>,
        min_size: u32,
        max_size: u32,
        context: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_DIRECTORY_SIZE,
            context,
            dir_type: DirectoryType::Scalable,
            min_size,
            max_size,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// A `Threshold` directory of the given nominal size and tolerance.
    pub fn threshold(
        name: impl Into<String>,
        size: u32,
        threshold: u32,
        context: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            context,
            dir_type: DirectoryType::Threshold,
            min_size: 0,
            max_size: 0,
            threshold,
        }
    }

    /// Fill in type-specific defaults for unset (zero) bounds.
    pub fn apply_type_defaults(&mut self) {
        match self.dir_type {
            DirectoryType::Scalable => {
                if self.min_size == 0 {
                    self.min_size = 1;
                }
                if self.max_size == 0 {
                    self.max_size = DEFAULT_SCALABLE_MAX;
                }
            }
            DirectoryType::Threshold => {
                if self.threshold == 0 {
                    self.threshold = DEFAULT_THRESHOLD;
                }
            }
            DirectoryType::Fixed => {}
        }
    }

    /// Whether this directory's context label is exactly `context`.
    pub fn has_context(&self, context: &str) -> bool {
        self.context.as_deref() == Some(context)
    }
}

/// Icon theme metadata parsed from `index.theme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Theme identifier (the theme's directory name)
    pub id: String,
    /// Human-readable theme name (`Name=`)
    pub name: String,
    /// Directory the theme was loaded from
    pub path: PathBuf,
    /// Theme description
    pub comment: Option<String>,
    /// Theme example icon name
    pub example: Option<String>,
    /// Whether to hide from theme selection UI
    pub hidden: bool,
    /// Parent themes for inheritance, in declaration order
    pub inherits: Vec<String>,
    /// Theme directories, in `Directories=` order
    pub directories: Vec<DirectoryDescriptor>,
}

impl ThemeDescriptor {
    /// Create an empty descriptor for a theme directory.
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            path: path.into(),
            comment: None,
            example: None,
            hidden: false,
            inherits: Vec::new(),
            directories: Vec::new(),
        }
    }

    /// Stub descriptor for a theme without an `index.theme` file.
    pub fn unknown(id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let mut theme = Self::new(id, path);
        theme.name = "unknown".to_string();
        theme
    }

    /// Look up a declared directory by name.
    pub fn directory(&self, name: &str) -> Option<&DirectoryDescriptor> {
        self.directories.iter().find(|d| d.name == name)
    }

    /// Mutable lookup of a declared directory by name.
    pub fn directory_mut(&mut self, name: &str) -> Option<&mut DirectoryDescriptor> {
        self.directories.iter_mut().find(|d| d.name == name)
    }
}
