//! Extension-based MIME inference for the response envelope.

use std::path::Path;

pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Best-effort MIME type from the file extension (case-insensitive).
pub fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_images_and_fallback() {
        assert_eq!(guess_mime(Path::new("/d/a.PNG")), "image/png");
        assert_eq!(guess_mime(Path::new("/d/a.jpeg")), "image/jpeg");
        assert_eq!(guess_mime(Path::new("/d/a.webp")), "image/webp");
        assert_eq!(guess_mime(Path::new("/d/README")), FALLBACK_MIME);
        assert_eq!(guess_mime(Path::new("/d/a.unknown")), FALLBACK_MIME);
    }
}
