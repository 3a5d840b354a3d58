//! Content-type inference from file extensions.

/// Content type reported when no known extension matches.
pub const FALLBACK: &str = "application/unknown";

/// The dot introducing the extension must sit within this many bytes of
/// the end of the path.
const EXTENSION_WINDOW: usize = 9;

/// Guesses the content type of a path from its extension.
///
/// The extension is whatever follows the last `.` found within the final
/// nine bytes of the path, matched case-insensitively against a fixed
/// table. When that window holds no usable dot, or the extension is
/// empty or unknown, the result is [`FALLBACK`]. Pure lookup with no I/O;
/// every input yields a value.
pub fn mime_for_path(path: &str) -> &'static str {
    let ext = match trailing_extension(path) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return FALLBACK,
    };

    match ext.as_str() {
        "css" => "text/css",
        "eof" => "application/vnd.ms-fontobject",
        "gif" => "image/gif",
        "htm" | "html" => "text/html",
        "js" => "application/javascript",
        "json" => "application/json",
        "jpg" | "jpeg" => "image/jpeg",
        "otf" => "application/x-font-opentype",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "tiff" => "image/tiff",
        "ttf" => "application/x-font-ttf",
        "txt" => "text/plain",
        "woff" => "application/font-woff",
        _ => FALLBACK,
    }
}

fn trailing_extension(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    let window_start = bytes.len().saturating_sub(EXTENSION_WINDOW);

    let dot = bytes[window_start..]
        .iter()
        .rposition(|&b| b == b'.')
        .map(|i| window_start + i)?;

    if dot == 0 || dot + 1 == bytes.len() {
        return None;
    }

    Some(&path[dot + 1..])
}
