use crate::domain::constants::IMAGE_EXTENSIONS;
use crate::domain::models::ImageFile;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    #[error("image directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("no image files found in {0}")]
    NoImages(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

pub fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        _ => "image/jpeg",
    }
}

fn read(path: &Path) -> Result<Vec<u8>, ImageError> {
    std::fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Lists the supported images directly inside `dir`, sorted by file name.
pub fn list_images(dir: &Path) -> Result<Vec<ImageFile>, ImageError> {
    if !dir.is_dir() {
        return Err(ImageError::DirectoryNotFound(dir.to_path_buf()));
    }
    let entries = std::fs::read_dir(dir).map_err(|source| ImageError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ImageError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = read(&path)?;
        out.push(ImageFile {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            mime: mime_for(&path).to_string(),
            sha256: hex::encode(Sha256::digest(&bytes)),
            path,
        });
    }

    if out.is_empty() {
        return Err(ImageError::NoImages(dir.to_path_buf()));
    }
    Ok(out)
}

/// Reads an image and encodes it as a `data:` URL for chat-style vision APIs.
pub fn data_url(image: &ImageFile) -> Result<String, ImageError> {
    let bytes = read(&image.path)?;
    Ok(format!("data:{};base64,{}", image.mime, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture_dir() -> TempDir {
        let tmp = TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("b_road.JPG"), b"jpeg-bytes").unwrap();
        std::fs::write(tmp.path().join("a_ramp.png"), b"png-bytes").unwrap();
        std::fs::write(tmp.path().join("c_hill.jpeg"), b"more").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), b"ignored").unwrap();
        std::fs::create_dir_all(tmp.path().join("nested.png")).unwrap();
        tmp
    }

    #[test]
    fn lists_supported_images_sorted_by_name() {
        let tmp = fixture_dir();
        let images = list_images(tmp.path()).unwrap();
        let names: Vec<_> = images.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a_ramp.png", "b_road.JPG", "c_hill.jpeg"]);
        assert_eq!(images[0].mime, "image/png");
        assert_eq!(images[1].mime, "image/jpeg");
    }

    #[test]
    fn digest_is_sha256_of_file_bytes() {
        let tmp = fixture_dir();
        let images = list_images(tmp.path()).unwrap();
        assert_eq!(images[0].sha256, hex::encode(Sha256::digest(b"png-bytes")));
        assert_eq!(images[0].sha256.len(), 64);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = list_images(&tmp.path().join("absent")).unwrap_err();
        assert!(matches!(err, ImageError::DirectoryNotFound(_)));
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("readme.md"), "x").unwrap();
        let err = list_images(tmp.path()).unwrap_err();
        assert!(err.to_string().starts_with("no image files found"));
    }

    #[test]
    fn data_url_embeds_base64_payload() {
        let tmp = fixture_dir();
        let images = list_images(tmp.path()).unwrap();
        let url = data_url(&images[0]).unwrap();
        assert_eq!(url, format!("data:image/png;base64,{}", STANDARD.encode(b"png-bytes")));
    }
}
