//! Photo loading and request encoding

use crate::error::{CarAiError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use car_ai_common::validate;
use std::path::Path;

/// Read a photo from disk, validate it, and return the base64 request
/// payload the prediction endpoints expect.
pub fn encode_image(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CarAiError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let bytes = std::fs::read(path)?;
    validate::validate_image_bytes(&file_name, &bytes)?;

    // A full decode rejects truncated or corrupt files before they reach
    // the service.
    image::load_from_memory(&bytes)
        .map_err(|e| CarAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    Ok(STANDARD.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    // Smallest valid PNG: 1x1 transparent pixel
    const PNG_1X1_BASE64: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn png_1x1_bytes() -> Vec<u8> {
        STANDARD.decode(PNG_1X1_BASE64).expect("valid fixture")
    }

    #[test]
    fn test_encode_image_roundtrip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("pixel.png");
        let bytes = png_1x1_bytes();
        std::fs::File::create(&path).unwrap().write_all(&bytes).unwrap();

        let encoded = encode_image(&path).expect("encode failed");
        assert_eq!(encoded, PNG_1X1_BASE64);
    }

    #[test]
    fn test_encode_image_missing_file() {
        let result = encode_image(Path::new("/nonexistent/car.jpg"));
        assert!(matches!(result, Err(CarAiError::FileNotFound(_))));
    }

    #[test]
    fn test_encode_image_rejects_non_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("fake.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = encode_image(&path);
        assert!(matches!(result, Err(CarAiError::Common(_))));
    }

    #[test]
    fn test_encode_image_rejects_truncated_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("cut.png");
        let mut bytes = png_1x1_bytes();
        bytes.truncate(16); // keeps the magic, loses the image data
        std::fs::write(&path, &bytes).unwrap();

        let result = encode_image(&path);
        assert!(matches!(result, Err(CarAiError::ImageLoad(_))));
    }
}
