//! MIME type detection utilities.
//!
//! Covers the image types a theme references (favicon, share image).

/// Common MIME type constants.
pub const SVG: &str = "image/svg+xml";
pub const PNG: &str = "image/png";
pub const JPEG: &str = "image/jpeg";
pub const GIF: &str = "image/gif";
pub const WEBP: &str = "image/webp";
pub const AVIF: &str = "image/avif";
pub const ICO: &str = "image/x-icon";

/// Guess an image MIME type from the extension of a URL or path.
///
/// Query strings and fragments are ignored. Returns `None` for anything
/// that is not a known image extension.
pub fn for_image(url_or_path: &str) -> Option<&'static str> {
    let path = url_or_path.split(['?', '#']).next().unwrap_or(url_or_path);
    let file = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = file.rsplit_once('.')?;

    match ext.to_ascii_lowercase().as_str() {
        "svg" => Some(SVG),
        "png" => Some(PNG),
        "jpg" | "jpeg" => Some(JPEG),
        "gif" => Some(GIF),
        "webp" => Some(WEBP),
        "avif" => Some(AVIF),
        "ico" => Some(ICO),
        _ => None,
    }
}
