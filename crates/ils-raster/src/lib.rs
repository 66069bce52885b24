//! Raster cache for `ils` icons.
//!
//! Resolved icons are often SVG files, and image files in a listing are
//! shown as thumbnails. This crate maps both to PNG files of the display
//! size in a cache directory, rendering them with an external
//! [`Converter`] the first time they are needed.
//!
//! The icon engine only resolves theme icons. Choosing between the two
//! paths is left to the display layer: entries for which [`is_image_file`]
//! holds go to [`RasterCache::ensure_thumbnail`], everything else resolves
//! an icon and passes it to [`RasterCache::ensure_raster`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use ils_raster::{CommandConverter, RasterCache};
//!
//! let cache = RasterCache::with_default_dir(64)?;
//! let png = cache.ensure_raster(
//!     Path::new("/usr/share/icons/hicolor/scalable/apps/firefox.svg"),
//!     &CommandConverter::new(),
//! );
//! # Ok::<(), ils_raster::Error>(())
//! ```

mod cache;
mod converter;
mod error;

pub use cache::{CACHE_DIR, IMAGE_EXTENSIONS, RasterCache, default_cache_dir, is_image_file};
pub use converter::{CommandConverter, Converter};
pub use error::{Error, Result};
