use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;
use crate::video::domain::image_reader::ImageReader;

/// An image file that exists as a path but could not be decoded.
#[derive(Error, Debug)]
#[error("failed to load image {path}: {source}")]
pub struct ImageLoadError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Decodes a template image file into a [`Frame`] via the `image`
/// crate. Templates are small UI crops; everything is normalized to
/// RGB8 on the way in.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::open(path).map_err(|e| ImageLoadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Frame::from_rgb_image(img.to_rgb8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("template.png");
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_returns_rgb_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 24, 16);

        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.width(), 24);
        assert_eq!(frame.height(), 16);
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let result = ImageFileReader::new().read(Path::new("/nonexistent/template.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let err = ImageFileReader::new().read(&path).unwrap_err();
        assert!(err.to_string().contains("corrupt.png"));
    }

    #[test]
    fn test_grayscale_image_normalized_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let img = image::GrayImage::from_pixel(8, 8, image::Luma([77]));
        img.save(&path).unwrap();

        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[77, 77, 77]);
    }
}
