//! Preview handling for uploaded images. The preview shown next to a
//! generated caption is always 800x500 without preserving the aspect
//! ratio. The original bytes are what get sent to the vision model.

use std::io::Cursor;

use anyhow::{Error, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, imageops::FilterType};

pub const PREVIEW_WIDTH: u32 = 800;
pub const PREVIEW_HEIGHT: u32 = 500;

/// MIME types accepted by the upload widget
const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

pub fn is_allowed_mime_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// Map a file extension to the MIME type sent to the vision model.
/// Mirrors the upload allow-list (jpg/jpeg/png).
pub fn mime_for_path(path: &str) -> Result<&'static str, Error> {
    let ext = path.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        other => bail!("Unsupported image type: .{}", other),
    }
}

/// Decode the uploaded bytes and resize to exactly
/// PREVIEW_WIDTH x PREVIEW_HEIGHT. A corrupt upload fails here at
/// decode time.
pub fn resize_for_preview(bytes: &[u8]) -> Result<image::DynamicImage, Error> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.resize_exact(PREVIEW_WIDTH, PREVIEW_HEIGHT, FilterType::Triangle))
}

/// Build the data URL the page renders in the preview column
pub fn preview_data_url(bytes: &[u8]) -> Result<String, Error> {
    let resized = resize_for_preview(bytes)?;
    let mut buf = Vec::new();
    resized.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([200u8, 30u8, 30u8]),
        ));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_resize_is_exactly_800_by_500() {
        let resized = resize_for_preview(&png_bytes(1600, 1000)).unwrap();
        assert_eq!(resized.width(), 800);
        assert_eq!(resized.height(), 500);
    }

    #[test]
    fn test_resize_ignores_aspect_ratio() {
        // Dimensions that do not share the preview's aspect ratio
        // still come out at 800x500
        for (w, h) in [(300, 300), (2500, 400), (50, 1200)] {
            let resized = resize_for_preview(&png_bytes(w, h)).unwrap();
            assert_eq!((resized.width(), resized.height()), (800, 500));
        }
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        let result = resize_for_preview(b"this is not an image");
        assert!(result.is_err());
    }

    #[test]
    fn test_preview_data_url_prefix() {
        let url = preview_data_url(&png_bytes(100, 100)).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        // Round-trip the payload to confirm the preview dimensions
        let encoded = url.trim_start_matches("data:image/png;base64,");
        let bytes = STANDARD.decode(encoded).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (800, 500));
    }

    #[test]
    fn test_mime_allow_list() {
        assert!(is_allowed_mime_type("image/jpeg"));
        assert!(is_allowed_mime_type("image/png"));
        assert!(!is_allowed_mime_type("image/gif"));
        assert!(!is_allowed_mime_type("application/pdf"));
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path("photo.jpg").unwrap(), "image/jpeg");
        assert_eq!(mime_for_path("photo.JPEG").unwrap(), "image/jpeg");
        assert_eq!(mime_for_path("chart.png").unwrap(), "image/png");
        assert!(mime_for_path("doc.gif").is_err());
        assert!(mime_for_path("noextension").is_err());
    }
}
