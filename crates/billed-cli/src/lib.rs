use std::path::Path;

/// Media type a file source would declare for the given path, derived from
/// the extension. Unknown extensions map to application/octet-stream and
/// get rejected downstream by the receipt validator.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn jpeg_extensions_map_to_image_jpeg() {
        assert_eq!(media_type_for_path(Path::new("receipt.jpg")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("receipt.JPEG")), "image/jpeg");
    }

    #[test]
    fn png_maps_to_image_png() {
        assert_eq!(media_type_for_path(Path::new("scan.png")), "image/png");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(
            media_type_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(
            media_type_for_path(&PathBuf::from("noextension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn rejected_types_are_still_reported_accurately() {
        assert_eq!(
            media_type_for_path(Path::new("facture.pdf")),
            "application/pdf"
        );
        assert_eq!(media_type_for_path(Path::new("anim.gif")), "image/gif");
    }
}
