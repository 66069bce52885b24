//! Icon name resolution with fallbacks.
//!
//! The [`FallbackResolver`] turns an abstract icon name into a file by
//! trying progressively looser variants of the name against an
//! [`IconIndex`]:
//!
//! 1. the exact name
//! 2. generic replacements for dashed names (`text-x-python` tries
//!    `text-x-x-generic`, `text-x-generic`, then `text`)
//! 3. the name without a `-symbolic`, `-dark`, `-light` or `-color` suffix
//!
//! Each variant is tried restricted to the preferred context, then to its
//! case-swapped spelling, then with no context restriction.

use std::path::PathBuf;

use tracing::trace;

use super::index::{IconIndex, IconIndexEntry};
use super::mime;
use super::types::IconContext;

/// Style suffixes stripped as a last resort.
const STYLE_SUFFIXES: [&str; 4] = ["-symbolic", "-dark", "-light", "-color"];

/// Context used for MIME type icons.
pub const MIME_CONTEXT: &str = "MimeTypes";

/// Resolves icon names against an index.
#[derive(Debug, Clone, Copy)]
pub struct FallbackResolver<'a> {
    index: &'a IconIndex,
}

impl<'a> FallbackResolver<'a> {
    /// Create a resolver over `index`.
    pub fn new(index: &'a IconIndex) -> Self {
        Self { index }
    }

    /// Resolve an icon name to its best index entry.
    pub fn resolve_entry(
        &self,
        icon_name: &str,
        size: u32,
        preferred_context: Option<&str>,
    ) -> Option<&'a IconIndexEntry> {
        let contexts = context_variants(preferred_context);

        for name in name_variants(icon_name) {
            for context in &contexts {
                if let Some(entry) = self.index.best_match(&name, size, context.as_deref()) {
                    trace!(
                        target: "ils_icon_theme::resolver",
                        requested = icon_name,
                        matched = %name,
                        context = ?context,
                        path = %entry.path.display(),
                        "resolved icon"
                    );
                    return Some(entry);
                }
            }
        }

        None
    }

    /// Resolve an icon name to a file path.
    pub fn resolve(
        &self,
        icon_name: &str,
        size: u32,
        preferred_context: Option<&str>,
    ) -> Option<PathBuf> {
        self.resolve_entry(icon_name, size, preferred_context)
            .map(|entry| entry.path.clone())
    }

    /// Resolve the icon for a file extension such as `.py`.
    ///
    /// Known extensions resolve their MIME type icon in the `MimeTypes`
    /// context. When that fails, or the extension is unknown, the bare
    /// lowercase extension is tried as an icon name.
    pub fn resolve_extension(&self, extension: &str, size: u32) -> Option<PathBuf> {
        if let Some(mime_type) = mime::extension_to_mime_type(extension) {
            let icon_name = mime::mime_icon_name(mime_type);
            if let Some(path) = self.resolve(&icon_name, size, Some(MIME_CONTEXT)) {
                return Some(path);
            }
            trace!(
                target: "ils_icon_theme::resolver",
                extension,
                mime_type,
                "no icon for mime type"
            );
        }

        let bare = extension.trim_start_matches('.').to_ascii_lowercase();
        if bare.is_empty() {
            return None;
        }
        self.resolve(&bare, size, None)
    }

    /// Resolve the first of several candidate names.
    pub fn resolve_first<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        size: u32,
        preferred_context: Option<&str>,
    ) -> Option<PathBuf> {
        names
            .into_iter()
            .find_map(|name| self.resolve(name, size, preferred_context))
    }
}

/// Context restrictions to try, in order.
///
/// The preferred context, its case-swapped spelling when that differs,
/// then no restriction.
pub fn context_variants(preferred: Option<&str>) -> Vec<Option<String>> {
    let mut variants = Vec::with_capacity(3);

    if let Some(context) = preferred {
        variants.push(Some(context.to_string()));

        let swapped = if context.chars().any(|c| c.is_ascii_uppercase()) {
            Some(context.to_ascii_lowercase())
        } else {
            IconContext::parse(context).map(|c| c.label().to_string())
        };
        if let Some(swapped) = swapped
            && swapped != context
        {
            variants.push(Some(swapped));
        }
    }

    variants.push(None);
    variants
}

/// Names to try for `icon_name`, in order, without duplicates.
pub fn name_variants(icon_name: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    let mut push = |candidate: String| {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };

    push(icon_name.to_string());

    if let Some(last_dash) = icon_name.rfind('-') {
        push(format!("{}-x-generic", &icon_name[..last_dash]));

        if let Some(first_dash) = icon_name.find('-') {
            let top = &icon_name[..first_dash];
            push(format!("{top}-x-generic"));
            push(top.to_string());
        }
    }

    for suffix in STYLE_SUFFIXES {
        if let Some(stripped) = icon_name.strip_suffix(suffix) {
            push(stripped.to_string());
        }
    }

    variants
}
