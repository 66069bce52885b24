//! File extension to MIME type mapping.

/// Known extensions (lowercase, with the leading dot) and their MIME types.
const MIME_TYPES: &[(&str, &str)] = &[
    // Source code
    (".py", "text/x-python"),
    (".js", "text/javascript"),
    (".ts", "text/x-typescript"),
    (".c", "text/x-csrc"),
    (".cpp", "text/x-c++src"),
    (".cxx", "text/x-c++src"),
    (".cc", "text/x-c++src"),
    (".h", "text/x-chdr"),
    (".hpp", "text/x-c++hdr"),
    (".java", "text/x-java"),
    (".php", "text/x-php"),
    (".rb", "text/x-ruby"),
    (".go", "text/x-go"),
    (".rs", "text/x-rust"),
    (".sh", "application/x-shellscript"),
    (".bash", "application/x-shellscript"),
    // Markup and data
    (".html", "text/html"),
    (".htm", "text/html"),
    (".css", "text/css"),
    (".xml", "text/xml"),
    (".json", "application/json"),
    (".yaml", "text/x-yaml"),
    (".yml", "text/x-yaml"),
    // Documents
    (".pdf", "application/pdf"),
    (".doc", "application/msword"),
    (
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (".odt", "application/vnd.oasis.opendocument.text"),
    (".xls", "application/vnd.ms-excel"),
    (
        ".xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (".ppt", "application/vnd.ms-powerpoint"),
    (
        ".pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    (".txt", "text/plain"),
    (".md", "text/x-markdown"),
    // Archives
    (".zip", "application/zip"),
    (".tar", "application/x-tar"),
    (".gz", "application/x-gzip"),
    (".7z", "application/x-7z-compressed"),
    (".rar", "application/x-rar"),
    (".bz2", "application/x-bzip2"),
    // Images
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
    (".bmp", "image/bmp"),
    (".tiff", "image/tiff"),
    (".tif", "image/tiff"),
    // Audio
    (".mp3", "audio/mpeg"),
    (".wav", "audio/wav"),
    (".ogg", "audio/ogg"),
    (".flac", "audio/flac"),
    // Video
    (".mp4", "video/mp4"),
    (".mkv", "video/x-matroska"),
    (".avi", "video/x-msvideo"),
    (".mov", "video/quicktime"),
    (".webm", "video/webm"),
    // Disk images and packages
    (".iso", "application/x-iso9660-image"),
    (".deb", "application/x-deb"),
    (".rpm", "application/x-rpm"),
    (".exe", "application/x-ms-dos-executable"),
    (".dmg", "application/x-apple-diskimage"),
];

/// Look up the MIME type of a file extension.
///
/// The match is case-insensitive; the leading dot is optional.
pub fn extension_to_mime_type(extension: &str) -> Option<&'static str> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    if bare.is_empty() {
        return None;
    }

    MIME_TYPES
        .iter()
        .find(|(ext, _)| ext[1..].eq_ignore_ascii_case(bare))
        .map(|&(_, mime)| mime)
}

/// Icon name for a MIME type: `text/x-python` becomes `text-x-python`.
pub fn mime_icon_name(mime_type: &str) -> String {
    mime_type.replace('/', "-")
}

/// Extension of a file name, including the dot.
///
/// Everything from the last `.` on, unless that dot starts the name
/// (`.bashrc` has no extension).
pub fn file_extension(filename: &str) -> Option<&str> {
    match filename.rfind('.') {
        Some(0) | None => None,
        Some(i) => Some(&filename[i..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_to_mime_type() {
        assert_eq!(extension_to_mime_type(".py"), Some("text/x-python"));
        assert_eq!(extension_to_mime_type(".PY"), Some("text/x-python"));
        assert_eq!(extension_to_mime_type("txt"), Some("text/plain"));
        assert_eq!(extension_to_mime_type(".tar"), Some("application/x-tar"));
        assert_eq!(extension_to_mime_type(".unknownext"), None);
        assert_eq!(extension_to_mime_type("."), None);
        assert_eq!(extension_to_mime_type(""), None);
    }

    #[test]
    fn test_table_is_well_formed() {
        for (ext, mime) in MIME_TYPES {
            assert!(ext.starts_with('.'), "{ext}");
            assert_eq!(*ext, ext.to_ascii_lowercase());
            assert!(mime.contains('/'), "{mime}");
        }
    }

    #[test]
    fn test_mime_icon_name() {
        assert_eq!(mime_icon_name("text/x-python"), "text-x-python");
        assert_eq!(mime_icon_name("image/svg+xml"), "image-svg+xml");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("main.rs"), Some(".rs"));
        assert_eq!(file_extension("archive.tar.gz"), Some(".gz"));
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension("trailing."), Some("."));
    }
}
