//! Selected-file validation
//!
//! The form only accepts PNG or JPEG photos up to 10MB. The web form checks
//! the declared MIME type and byte length before the file is stored; the CLI
//! has the bytes in hand and sniffs the real format from the magic numbers.

use crate::error::{Error, Result};

/// Maximum accepted photo size (10MB)
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the classification service accepts
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn is_accepted_mime_type(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.iter().any(|&m| m == mime)
}

/// Identify the image format from its leading bytes.
pub fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if bytes.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else {
        None
    }
}

/// Validate a selection by its declared MIME type and size.
pub fn validate_image(file_name: &str, mime: &str, byte_len: u64) -> Result<()> {
    if !is_accepted_mime_type(mime) {
        return Err(Error::Validation(format!(
            "{} is not a supported image. Please choose a PNG or JPEG photo.",
            file_name
        )));
    }
    if byte_len > MAX_IMAGE_BYTES {
        return Err(Error::Validation(format!(
            "{} is too large. Photos must be 10MB or smaller.",
            file_name
        )));
    }
    Ok(())
}

/// Validate raw file contents by magic numbers and size.
pub fn validate_image_bytes(file_name: &str, bytes: &[u8]) -> Result<()> {
    let mime = detect_image_mime(bytes).ok_or_else(|| {
        Error::Validation(format!(
            "{} is not a supported image. Please choose a PNG or JPEG photo.",
            file_name
        ))
    })?;
    validate_image(file_name, mime, bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_mime_types() {
        assert!(is_accepted_mime_type("image/jpeg"));
        assert!(is_accepted_mime_type("image/png"));
        assert!(!is_accepted_mime_type("image/gif"));
        assert!(!is_accepted_mime_type("image/webp"));
        assert!(!is_accepted_mime_type("application/pdf"));
        assert!(!is_accepted_mime_type(""));
    }

    #[test]
    fn test_detect_image_mime_jpeg() {
        let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(detect_image_mime(&bytes), Some("image/jpeg"));
    }

    #[test]
    fn test_detect_image_mime_png() {
        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(detect_image_mime(&bytes), Some("image/png"));
    }

    #[test]
    fn test_detect_image_mime_unknown() {
        assert_eq!(detect_image_mime(b"GIF89a"), None);
        assert_eq!(detect_image_mime(b""), None);
        assert_eq!(detect_image_mime(b"\xFF\xD8"), None); // truncated magic
    }

    #[test]
    fn test_validate_image_ok() {
        assert!(validate_image("car.jpg", "image/jpeg", 1024).is_ok());
        assert!(validate_image("car.png", "image/png", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_validate_image_rejects_type() {
        let err = validate_image("car.gif", "image/gif", 1024).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("car.gif"));
        assert!(message.contains("PNG or JPEG"));
    }

    #[test]
    fn test_validate_image_rejects_oversized() {
        let err = validate_image("huge.jpg", "image/jpeg", MAX_IMAGE_BYTES + 1).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("huge.jpg"));
        assert!(message.contains("10MB"));
    }

    #[test]
    fn test_validate_image_bytes_ok() {
        let mut bytes = vec![0xFF, 0xD8, 0xFF];
        bytes.extend_from_slice(&[0u8; 64]);
        assert!(validate_image_bytes("car.jpg", &bytes).is_ok());
    }

    #[test]
    fn test_validate_image_bytes_rejects_non_image() {
        let err = validate_image_bytes("note.txt", b"hello").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
