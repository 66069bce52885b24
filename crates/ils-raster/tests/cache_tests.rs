//! Raster cache tests with an in-process converter.

use std::cell::Cell;
use std::fs;
use std::path::Path;

use ils_raster::{Converter, RasterCache, is_image_file};
use tempfile::TempDir;

/// Writes a placeholder PNG and counts calls.
#[derive(Default)]
struct FakeConverter {
    calls: Cell<usize>,
    fail: bool,
}

impl Converter for FakeConverter {
    fn convert(&self, _source: &Path, dest: &Path, size: u32) -> bool {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return false;
        }
        fs::write(dest, format!("png {size}")).is_ok()
    }
}

#[test]
fn test_svg_is_converted_once() {
    let temp = TempDir::new().unwrap();
    let svg = temp.path().join("firefox.svg");
    fs::write(&svg, "<svg/>").unwrap();

    let cache = RasterCache::new(temp.path().join("cache/icons"), 64);
    let converter = FakeConverter::default();

    let first = cache.ensure_raster(&svg, &converter).unwrap();
    assert_eq!(first, temp.path().join("cache/icons/firefox_64x64.png"));
    assert_eq!(fs::read_to_string(&first).unwrap(), "png 64");

    let second = cache.ensure_raster(&svg, &converter).unwrap();
    assert_eq!(first, second);
    assert_eq!(converter.calls.get(), 1);
}

#[test]
fn test_png_is_used_in_place() {
    let temp = TempDir::new().unwrap();
    let png = temp.path().join("folder.png");
    fs::write(&png, "png").unwrap();

    let cache = RasterCache::new(temp.path().join("cache"), 32);
    let converter = FakeConverter::default();

    assert_eq!(cache.ensure_raster(&png, &converter), Some(png));
    assert_eq!(converter.calls.get(), 0);
    assert!(!cache.dir().exists());
}

#[test]
fn test_missing_source_and_failed_conversion() {
    let temp = TempDir::new().unwrap();
    let cache = RasterCache::new(temp.path().join("cache"), 32);

    let converter = FakeConverter::default();
    assert_eq!(cache.ensure_raster(&temp.path().join("gone.svg"), &converter), None);
    assert_eq!(converter.calls.get(), 0);

    let svg = temp.path().join("broken.svg");
    fs::write(&svg, "not really svg").unwrap();
    let failing = FakeConverter {
        fail: true,
        ..Default::default()
    };
    assert_eq!(cache.ensure_raster(&svg, &failing), None);
    assert_eq!(failing.calls.get(), 1);
}

#[test]
fn test_thumbnail() {
    let temp = TempDir::new().unwrap();
    let photo = temp.path().join("holiday.jpg");
    fs::write(&photo, "jpeg").unwrap();

    let cache = RasterCache::new(temp.path().join("cache"), 16);
    let converter = FakeConverter::default();

    let thumb = cache.ensure_thumbnail(&photo, &converter).unwrap();
    assert_eq!(thumb, temp.path().join("cache/thumb_holiday.jpg_16x16.png"));
    assert!(thumb.is_file());
}

#[test]
fn test_listing_routes_images_to_thumbnails() {
    let temp = TempDir::new().unwrap();
    let listing = temp.path().join("listing");
    fs::create_dir_all(&listing).unwrap();
    fs::write(listing.join("cat.png"), "png").unwrap();
    fs::write(listing.join("notes.txt"), "text").unwrap();
    let text_icon = temp.path().join("text-x-generic.svg");
    fs::write(&text_icon, "<svg/>").unwrap();

    let cache = RasterCache::new(temp.path().join("cache"), 32);
    let converter = FakeConverter::default();

    let mut shown = Vec::new();
    for name in ["cat.png", "notes.txt"] {
        let path = if is_image_file(name) {
            cache.ensure_thumbnail(&listing.join(name), &converter)
        } else {
            cache.ensure_raster(&text_icon, &converter)
        };
        shown.push(path.unwrap());
    }

    assert_eq!(shown[0], temp.path().join("cache/thumb_cat.png_32x32.png"));
    assert_eq!(shown[1], temp.path().join("cache/text-x-generic_32x32.png"));
    assert_eq!(converter.calls.get(), 2);
}

#[test]
fn test_ensure_dir_creates_parents() {
    let temp = TempDir::new().unwrap();
    let cache = RasterCache::new(temp.path().join("a/b/c"), 64);
    cache.ensure_dir().unwrap();
    assert!(temp.path().join("a/b/c").is_dir());
    cache.ensure_dir().unwrap();
}
