//! Local storage for the images served by the companion server.
//!
//! The server serves everything under its public directory statically, so a
//! show image only needs to be placed at `public/images/<n>.png` to become
//! reachable as `{base}/images/<n>.png`. Files are numbered sequentially
//! and always stored as PNG, whatever format the user picked.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions counted when looking for the next free image number.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Errors that can occur while storing show images.
#[derive(Debug, Error)]
pub enum ImageStoreError {
    /// Failed to create the images directory
    #[error("Failed to create images directory {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open or decode the picked image file
    #[error("Failed to read image {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Failed to write the converted PNG
    #[error("Failed to write image {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Manages the `images/` subdirectory of the server's public directory.
pub struct ImageStore {
    images_dir: PathBuf,
}

impl ImageStore {
    /// Creates a store rooted at the given public directory.
    ///
    /// Nothing is touched on disk until an image is imported.
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: public_dir.into().join("images"),
        }
    }

    /// Returns the directory images are stored in.
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Determines the number for the next image file.
    ///
    /// Scans the images directory for image files whose stem is all digits
    /// and returns one past the highest, or 1 when the directory does not
    /// exist yet or holds no numbered images.
    pub fn next_image_number(&self) -> u32 {
        let entries = match fs::read_dir(&self.images_dir) {
            Ok(entries) => entries,
            Err(_) => return 1,
        };

        let highest = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| has_image_extension(path))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(|stem| stem.parse::<u32>().ok())
            })
            .max()
            .unwrap_or(0);

        highest + 1
    }

    /// Imports a picked image file into the store.
    ///
    /// The file is decoded, re-encoded as PNG under the next free number,
    /// and the stored filename (e.g. `4.png`) is returned so the caller can
    /// build the served URL.
    pub fn import(&self, source: &Path) -> Result<String, ImageStoreError> {
        fs::create_dir_all(&self.images_dir).map_err(|e| {
            ImageStoreError::DirectoryCreationFailed {
                path: self.images_dir.clone(),
                source: e,
            }
        })?;

        let filename = format!("{}.png", self.next_image_number());
        let destination = self.images_dir.join(&filename);

        let decoded = image::open(source).map_err(|e| ImageStoreError::ReadFailed {
            path: source.to_path_buf(),
            source: e,
        })?;

        decoded
            .save_with_format(&destination, image::ImageFormat::Png)
            .map_err(|e| ImageStoreError::WriteFailed {
                path: destination.clone(),
                source: e,
            })?;

        Ok(filename)
    }
}

/// Checks whether a path carries one of the recognized image extensions.
fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_next_image_number_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("public"));

        assert_eq!(store.next_image_number(), 1);
    }

    #[test]
    fn test_next_image_number_skips_non_numeric_stems() {
        let dir = tempfile::tempdir().unwrap();
        let images_dir = dir.path().join("images");
        fs::create_dir_all(&images_dir).unwrap();

        for name in ["1.png", "3.jpg", "cover.png", "7.txt", "notes"] {
            fs::write(images_dir.join(name), b"x").unwrap();
        }

        let store = ImageStore::new(dir.path());
        assert_eq!(store.next_image_number(), 4);
    }

    #[test]
    fn test_import_converts_to_numbered_png() {
        let dir = tempfile::tempdir().unwrap();

        // A real image file in a non-PNG format to be imported
        let source = dir.path().join("picked.jpg");
        let picked = RgbaImage::from_pixel(8, 8, image::Rgba([255, 0, 0, 255]));
        image::DynamicImage::ImageRgba8(picked)
            .to_rgb8()
            .save_with_format(&source, image::ImageFormat::Jpeg)
            .unwrap();

        let store = ImageStore::new(dir.path().join("public"));
        let filename = store.import(&source).unwrap();

        assert_eq!(filename, "1.png");
        let stored = store.images_dir().join(&filename);
        assert!(stored.is_file());

        // The stored file decodes as PNG with the original dimensions
        let reloaded = image::open(&stored).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (8, 8));

        // A second import lands on the next number
        assert_eq!(store.import(&source).unwrap(), "2.png");
    }

    #[test]
    fn test_import_rejects_non_image_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("not_an_image.jpg");
        fs::write(&source, b"plain text").unwrap();

        let store = ImageStore::new(dir.path().join("public"));
        assert!(matches!(
            store.import(&source),
            Err(ImageStoreError::ReadFailed { .. })
        ));
    }
}
