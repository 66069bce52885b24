//! `index.theme` parsing.
//!
//! The format is INI-like: `[Section]` headers, `key=value` lines and `#`
//! comments. Parsing is best-effort; lines that do not parse are skipped and
//! never abort the rest of the file.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{trace, warn};

use super::types::{DirectoryDescriptor, DirectoryType, MAX_INHERITS, ThemeDescriptor};

/// File name of a theme's descriptor.
pub const INDEX_FILE: &str = "index.theme";

/// Name of the main section of `index.theme`.
const ICON_THEME_SECTION: &str = "Icon Theme";

/// Read and parse `<theme_dir>/index.theme`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_index_theme(theme_dir: &Path, id: &str) -> crate::Result<Option<ThemeDescriptor>> {
    let index_path = theme_dir.join(INDEX_FILE);
    let content = match fs::read_to_string(&index_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(crate::Error::io(&index_path, e)),
    };

    let mut theme = ThemeDescriptor::new(id, theme_dir);
    parse_index_str(&content, &mut theme);
    Ok(Some(theme))
}

/// Parse a theme directory's descriptor, never failing.
///
/// A missing or unreadable `index.theme` yields a stub named `"unknown"`
/// with no directories; the directory scanner fills in from the filesystem.
pub fn parse_index_theme(theme_dir: &Path, id: &str) -> ThemeDescriptor {
    match read_index_theme(theme_dir, id) {
        Ok(Some(theme)) => theme,
        Ok(None) => {
            trace!(theme = id, path = %theme_dir.display(), "no index.theme");
            ThemeDescriptor::unknown(id, theme_dir)
        }
        Err(e) => {
            warn!(theme = id, "{e}");
            ThemeDescriptor::unknown(id, theme_dir)
        }
    }
}

/// Parse `index.theme` content into `theme`.
pub fn parse_index_str(content: &str, theme: &mut ThemeDescriptor) {
    let mut section: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = Some(name.trim().to_string());
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(value.trim());

        match section.as_deref() {
            Some(ICON_THEME_SECTION) => apply_theme_key(theme, key, value),
            Some(dir_name) => {
                // Only directories declared earlier in the file are configurable.
                if let Some(dir) = theme.directory_mut(dir_name) {
                    apply_directory_key(dir, key, value);
                }
            }
            None => {}
        }
    }

    for dir in &mut theme.directories {
        dir.apply_type_defaults();
    }

    if theme.name.is_empty() {
        theme.name = theme.id.clone();
    }
}

fn apply_theme_key(theme: &mut ThemeDescriptor, key: &str, value: &str) {
    match key {
        "Name" => theme.name = value.to_string(),
        "Comment" => theme.comment = Some(value.to_string()),
        "Example" => theme.example = Some(value.to_string()),
        "Hidden" => theme.hidden = value.eq_ignore_ascii_case("true"),
        "Inherits" => {
            theme.inherits = split_list(value).take(MAX_INHERITS).collect();
        }
        "Directories" | "ScaledDirectories" => {
            for name in split_list(value) {
                if theme.directory(&name).is_none() {
                    theme.directories.push(DirectoryDescriptor::declared(name));
                }
            }
        }
        _ => {}
    }
}

fn apply_directory_key(dir: &mut DirectoryDescriptor, key: &str, value: &str) {
    match key {
        "Size" => dir.size = parse_leading_u32(value),
        "Context" => dir.context = Some(value.to_string()),
        "Type" => dir.dir_type = DirectoryType::parse(value),
        "MinSize" => dir.min_size = parse_leading_u32(value),
        "MaxSize" => dir.max_size = parse_leading_u32(value),
        "Threshold" => dir.threshold = parse_leading_u32(value),
        _ => {}
    }
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse the leading decimal digits of `value`; anything unparseable is 0.
pub(crate) fn parse_leading_u32(value: &str) -> u32 {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().unwrap_or(0)
}
