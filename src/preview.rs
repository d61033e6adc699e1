//! Retrieval and scaling of show preview images.
//!
//! The details pane shows a scaled-down rendition of the selected show's
//! image. The image is fetched from its URL with a blocking GET, decoded,
//! and scaled to the largest size that fits the preview area while keeping
//! its aspect ratio.

use image::imageops::FilterType;
use thiserror::Error;

/// Width of the preview bounding box in pixels.
pub const PREVIEW_MAX_WIDTH: u32 = 300;

/// Height of the preview bounding box in pixels.
pub const PREVIEW_MAX_HEIGHT: u32 = 200;

/// Errors that can occur while loading a preview image.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Request for the image failed
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The downloaded bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    DecodeError(String),
}

/// A decoded, scaled preview image in RGBA8 form.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8 pixel data, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

/// Computes the largest dimensions that fit inside a bounding box while
/// preserving the aspect ratio of the original dimensions.
///
/// Both shrinking and enlarging are possible; the result always touches the
/// box on at least one axis and never has a zero dimension.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    let fitted_width = ((width as f64 * scale).round() as u32).max(1);
    let fitted_height = ((height as f64 * scale).round() as u32).max(1);

    (fitted_width.min(max_width), fitted_height.min(max_height))
}

/// Fetches an image from the given URL and scales it to fit the preview
/// bounding box.
///
/// # Arguments
///
/// * `url` - Absolute URL of the image to load
///
/// # Returns
///
/// The scaled image as RGBA8 pixels, or an error if the request or the
/// decoding failed.
pub fn fetch_preview(url: &str) -> Result<PreviewImage, PreviewError> {
    let response =
        reqwest::blocking::get(url).map_err(|e| PreviewError::RequestError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(PreviewError::RequestError(format!(
            "HTTP {} {}",
            response.status().as_u16(),
            response.status().canonical_reason().unwrap_or("Unknown")
        )));
    }

    let bytes = response
        .bytes()
        .map_err(|e| PreviewError::RequestError(e.to_string()))?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| PreviewError::DecodeError(e.to_string()))?;

    let (width, height) = fit_within(
        decoded.width(),
        decoded.height(),
        PREVIEW_MAX_WIDTH,
        PREVIEW_MAX_HEIGHT,
    );
    let scaled = decoded.resize_exact(width, height, FilterType::Lanczos3);

    let rgba = scaled.to_rgba8();
    Ok(PreviewImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_shrinks_wide_images() {
        // 600x200 is twice as wide as the box allows
        assert_eq!(fit_within(600, 200, 300, 200), (300, 100));
    }

    #[test]
    fn test_fit_within_shrinks_tall_images() {
        assert_eq!(fit_within(300, 400, 300, 200), (150, 200));
    }

    #[test]
    fn test_fit_within_enlarges_small_images() {
        assert_eq!(fit_within(30, 20, 300, 200), (300, 200));
        assert_eq!(fit_within(100, 100, 300, 200), (200, 200));
    }

    #[test]
    fn test_fit_within_never_exceeds_bounds() {
        for &(w, h) in &[(1, 1), (7, 3000), (4096, 13), (299, 201)] {
            let (fw, fh) = fit_within(w, h, 300, 200);
            assert!(fw >= 1 && fw <= 300, "width {fw} out of bounds for {w}x{h}");
            assert!(fh >= 1 && fh <= 200, "height {fh} out of bounds for {w}x{h}");
        }
    }

    #[test]
    fn test_fit_within_preserves_aspect_ratio() {
        let (fw, fh) = fit_within(1600, 900, 300, 200);
        let original = 1600.0 / 900.0;
        let fitted = fw as f64 / fh as f64;
        assert!((original - fitted).abs() < 0.02);
    }
}
