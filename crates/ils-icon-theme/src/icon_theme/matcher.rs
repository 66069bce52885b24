//! Size matching between icon directories and requested pixel sizes.
//!
//! Every candidate icon carries the metadata of the directory it was found
//! in. [`distance`] turns that metadata into a score where 0 is a perfect
//! match and [`INCOMPATIBLE`] means the directory cannot serve the size.

use super::types::{DEFAULT_DIRECTORY_SIZE, DirectoryDescriptor, DirectoryType};

/// Distance reported for a directory that cannot serve the requested size.
pub const INCOMPATIBLE: u32 = u32::MAX;

/// A size encoded in a directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedSize {
    /// A pixel size such as `48x48` or `16`
    Pixels(u32),
    /// The directory holds scalable icons
    Scalable,
}

/// Extract the size encoded in a directory path.
///
/// Each `/`-separated segment is examined in order. A segment made only of
/// digits, or containing digits followed by `x` (`48x48`, `24x24@2x`),
/// yields a pixel size; a segment containing `scalable` marks a scalable
/// directory.
pub fn parse_named_size(name: &str) -> Option<NamedSize> {
    for segment in name.split('/') {
        if let Some(pixels) = segment_pixels(segment) {
            return Some(NamedSize::Pixels(pixels));
        }
        if segment.to_ascii_lowercase().contains("scalable") {
            return Some(NamedSize::Scalable);
        }
    }
    None
}

/// Pixel size encoded in a directory name; 0 for scalable or unsized names.
pub fn size_from_directory_name(name: &str) -> u32 {
    match parse_named_size(name) {
        Some(NamedSize::Pixels(pixels)) => pixels,
        Some(NamedSize::Scalable) | None => 0,
    }
}

fn segment_pixels(segment: &str) -> Option<u32> {
    if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
        return segment.parse().ok().filter(|&n| n > 0);
    }

    let bytes = segment.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if bytes.get(end) == Some(&b'x') {
            return segment[start..end].parse().ok().filter(|&n| n > 0);
        }
        start = end;
    }
    None
}

/// Nominal size of a directory.
///
/// A size in the directory name wins over the declared `Size=`; scalable
/// directory names give 0; otherwise the declared size, or 48.
pub fn nominal_size(dir: &DirectoryDescriptor) -> u32 {
    match parse_named_size(&dir.name) {
        Some(NamedSize::Pixels(pixels)) => pixels,
        Some(NamedSize::Scalable) => 0,
        None if dir.size > 0 => dir.size,
        None => DEFAULT_DIRECTORY_SIZE,
    }
}

/// Score how well `dir` serves `size`.
///
/// - `Fixed`: 0 on an exact nominal match, else [`INCOMPATIBLE`].
/// - `Scalable`: 0 inside `[min_size, max_size]`, else the gap to the
///   nearest bound.
/// - `Threshold`: `|nominal - size|` inside `[nominal - threshold,
///   nominal + threshold]`, else the gap to the nearest band edge.
pub fn distance(dir: &DirectoryDescriptor, size: u32) -> u32 {
    match dir.dir_type {
        DirectoryType::Fixed => {
            if nominal_size(dir) == size {
                0
            } else {
                INCOMPATIBLE
            }
        }
        DirectoryType::Scalable => {
            if size < dir.min_size {
                dir.min_size - size
            } else if size > dir.max_size {
                size - dir.max_size
            } else {
                0
            }
        }
        DirectoryType::Threshold => {
            let nominal = i64::from(nominal_size(dir));
            let threshold = i64::from(dir.threshold);
            let size = i64::from(size);
            let (low, high) = (nominal - threshold, nominal + threshold);

            let score = if size < low {
                low - size
            } else if size > high {
                size - high
            } else {
                (nominal - size).abs()
            };
            u32::try_from(score).unwrap_or(INCOMPATIBLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_directory_name() {
        assert_eq!(size_from_directory_name("48x48"), 48);
        assert_eq!(size_from_directory_name("scalable"), 0);
        assert_eq!(size_from_directory_name("16"), 16);
        assert_eq!(size_from_directory_name("foo"), 0);
        assert_eq!(size_from_directory_name("24x24@2x/apps"), 24);
        assert_eq!(size_from_directory_name("apps/32"), 32);
        assert_eq!(size_from_directory_name("mimetypes"), 0);
    }

    #[test]
    fn test_parse_named_size_scalable() {
        assert_eq!(parse_named_size("scalable/apps"), Some(NamedSize::Scalable));
        assert_eq!(
            parse_named_size("apps/scalable-up-to-32"),
            Some(NamedSize::Scalable)
        );
        assert_eq!(parse_named_size("256x256/places"), Some(NamedSize::Pixels(256)));
        assert_eq!(parse_named_size("places"), None);
    }

    #[test]
    fn test_nominal_size_precedence() {
        let mut dir = DirectoryDescriptor::declared("48x48/apps");
        dir.size = 32;
        assert_eq!(nominal_size(&dir), 48);

        let mut dir = DirectoryDescriptor::declared("apps");
        dir.size = 32;
        assert_eq!(nominal_size(&dir), 32);

        dir.size = 0;
        assert_eq!(nominal_size(&dir), 48);

        assert_eq!(nominal_size(&DirectoryDescriptor::declared("scalable/apps")), 0);
    }

    #[test]
    fn test_fixed_distance_exact_only() {
        for nominal in [16u32, 22, 48, 256] {
            let dir = DirectoryDescriptor::fixed(format!("{nominal}x{nominal}/apps"), nominal, None);
            for requested in 1..=512u32 {
                let expected = if requested == nominal { 0 } else { INCOMPATIBLE };
                assert_eq!(distance(&dir, requested), expected);
            }
        }
    }

    #[test]
    fn test_threshold_distance() {
        let dir = DirectoryDescriptor::threshold("48x48/mimetypes", 48, 2, None);
        let cases = [(44, 2), (46, 2), (48, 0), (50, 2), (52, 2), (60, 10)];
        for (size, expected) in cases {
            assert_eq!(distance(&dir, size), expected, "size {size}");
        }
    }

    #[test]
    fn test_threshold_band_below_zero() {
        let dir = DirectoryDescriptor::threshold("apps", 2, 4, None);
        assert_eq!(distance(&dir, 1), 1);
        assert_eq!(distance(&dir, 7), 1);
    }

    #[test]
    fn test_scalable_distance() {
        let dir = DirectoryDescriptor::scalable("scalable/apps", 16, 256, None);
        for size in 16..=256 {
            assert_eq!(distance(&dir, size), 0);
        }

        let mut previous = 0;
        for size in (1..16).rev() {
            let d = distance(&dir, size);
            assert!(d > previous);
            previous = d;
        }

        let mut previous = 0;
        for size in 257..=512 {
            let d = distance(&dir, size);
            assert!(d > previous);
            previous = d;
        }
    }
}
