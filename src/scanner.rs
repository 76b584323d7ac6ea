use crate::error::{CarAiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(CarAiError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if IMAGE_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                images.push(ImageInfo {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }

    // Sort by file name for a stable report order
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

#[cfg(test)]
fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("png"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("gif"));
        assert!(!is_image_extension("webp"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_folder_empty() {
        let temp_dir = std::env::temp_dir().join("car-ai-test-empty");
        fs::create_dir_all(&temp_dir).unwrap();

        let result = scan_folder(&temp_dir, false).unwrap();
        assert!(result.is_empty());

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_folder_with_images() {
        let temp_dir = std::env::temp_dir().join("car-ai-test-images");
        fs::create_dir_all(&temp_dir).unwrap();

        File::create(temp_dir.join("suv.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("ute.JPG")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("sedan.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(temp_dir.join("notes.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(&temp_dir, false).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].file_name, "sedan.png");
        assert_eq!(result[1].file_name, "suv.jpg");
        assert_eq!(result[2].file_name, "ute.JPG");

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_scan_folder_recursive() {
        let temp_dir = std::env::temp_dir().join("car-ai-test-recursive");
        let nested = temp_dir.join("lot-b");
        fs::create_dir_all(&nested).unwrap();

        File::create(temp_dir.join("a.jpg")).unwrap();
        File::create(nested.join("b.jpg")).unwrap();

        let flat = scan_folder(&temp_dir, false).unwrap();
        assert_eq!(flat.len(), 1);

        let deep = scan_folder(&temp_dir, true).unwrap();
        assert_eq!(deep.len(), 2);
        assert_eq!(deep[0].file_name, "a.jpg");
        assert_eq!(deep[1].file_name, "b.jpg");

        fs::remove_dir_all(&temp_dir).ok();
    }
}
