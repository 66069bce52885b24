//! On-disk cache of rasterized icons and thumbnails.
//!
//! Terminals display PNG data, so vector icons are rendered once per size
//! and kept under the cache directory:
//!
//! - icons: `<dir>/<stem>_<N>x<N>.png`
//! - thumbnails of image files: `<dir>/thumb_<file name>_<N>x<N>.png`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::converter::Converter;
use crate::error::{Error, Result};

/// Cache directory below the home directory.
pub const CACHE_DIR: &str = ".local/share/ils/icons";

/// File extensions treated as images that get thumbnails.
pub const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif", "svg"];

/// Default cache directory, `~/.local/share/ils/icons`.
///
/// Uses `$HOME` when set, falling back to the password database.
pub fn default_cache_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .map(|home| home.join(CACHE_DIR))
        .ok_or(Error::NoHomeDir)
}

/// Whether a file name has an image extension, case-insensitively.
pub fn is_image_file(filename: &str) -> bool {
    match filename.rfind('.') {
        Some(0) | None => false,
        Some(i) => {
            let ext = &filename[i + 1..];
            IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known))
        }
    }
}

/// Rasterized icons of one size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterCache {
    dir: PathBuf,
    size: u32,
}

impl RasterCache {
    /// Create a cache rooted at `dir` for `size`x`size` rasters.
    pub fn new(dir: impl Into<PathBuf>, size: u32) -> Self {
        Self {
            dir: dir.into(),
            size,
        }
    }

    /// Create a cache in the default directory.
    pub fn with_default_dir(size: u32) -> Result<Self> {
        Ok(Self::new(default_cache_dir()?, size))
    }

    /// Get the cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the raster size in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Create the cache directory and its parents.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::create_dir(&self.dir, e))
    }

    /// Cache path of the raster for an icon file.
    pub fn cached_png_path(&self, icon_path: &Path) -> PathBuf {
        let stem = icon_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.dir.join(format!("{stem}_{0}x{0}.png", self.size))
    }

    /// Cache path of the thumbnail for an image file name.
    pub fn thumbnail_path(&self, file_name: &str) -> PathBuf {
        self.dir
            .join(format!("thumb_{file_name}_{0}x{0}.png", self.size))
    }

    /// Path of a PNG for `icon_path` at the cache size, rendering it if needed.
    ///
    /// PNG icons are used in place. Other formats reuse an existing cached
    /// raster or are converted into the cache. Returns `None` when the source
    /// is missing or conversion fails.
    pub fn ensure_raster(&self, icon_path: &Path, converter: &dyn Converter) -> Option<PathBuf> {
        if !icon_path.is_file() {
            return None;
        }

        let is_png = icon_path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if is_png {
            return Some(icon_path.to_path_buf());
        }

        let cached = self.cached_png_path(icon_path);
        self.convert_into(icon_path, cached, converter)
    }

    /// Path of a thumbnail for the image `source`, rendering it if needed.
    pub fn ensure_thumbnail(&self, source: &Path, converter: &dyn Converter) -> Option<PathBuf> {
        if !source.is_file() {
            return None;
        }
        let file_name = source.file_name()?.to_str()?;
        let thumbnail = self.thumbnail_path(file_name);
        self.convert_into(source, thumbnail, converter)
    }

    fn convert_into(&self, source: &Path, dest: PathBuf, converter: &dyn Converter) -> Option<PathBuf> {
        if dest.is_file() {
            trace!(target: "ils_raster::cache", path = %dest.display(), "cache hit");
            return Some(dest);
        }

        if let Err(e) = self.ensure_dir() {
            debug!(target: "ils_raster::cache", "{e}");
            return None;
        }

        if converter.convert(source, &dest, self.size) && dest.is_file() {
            debug!(target: "ils_raster::cache", source = %source.display(), dest = %dest.display(), "rasterized");
            Some(dest)
        } else {
            None
        }
    }
}
