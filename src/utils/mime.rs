use std::path::Path;

/// Sniffs a file's MIME type from its content, falling back to the
/// extension when the file is unreadable or unrecognized.
pub fn sniff_mime(path: &Path) -> String {
    if let Ok(Some(kind)) = infer::get_from_path(path) {
        return kind.mime_type().to_string();
    }
    mime_from_extension(path)
}

/// Same, for in-memory contents (files dropped without a backing path).
pub fn sniff_mime_bytes(name: &str, bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    mime_from_extension(Path::new(name))
}

fn mime_from_extension(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "mp4" => "video/mp4",
        _ => "application/octet-stream",
    }
    .to_string()
}
