// SPDX-License-Identifier: MPL-2.0
//! Preview decoding for accepted upload candidates.
//!
//! Raster formats (PNG, JPEG, GIF, WebP, BMP) are decoded with `image_rs`;
//! SVG files are rasterized with resvg. Either way the result is normalized
//! to PNG so the preview can also be carried as a `data:` URI in the inquiry
//! payload.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Displayable decoding of an accepted candidate's bytes.
///
/// At most one preview is materialized per widget instance at a time; it is
/// replaced when a newer candidate's decode completes and cleared on removal.
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// PNG bytes base64-encoded as a `data:image/png;base64,…` URI.
    pub data_uri: String,
}

impl Preview {
    /// Builds a preview from PNG-encoded bytes.
    #[must_use]
    pub fn from_png(png_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        let data_uri = format!("data:image/png;base64,{}", BASE64.encode(&png_bytes));
        Self {
            handle: image::Handle::from_bytes(png_bytes),
            width,
            height,
            data_uri,
        }
    }

    /// Builds a preview directly from an existing `data:` URI string, used to
    /// seed the widget with a previously stored image.
    pub fn from_data_uri(data_uri: &str) -> Result<Self> {
        let encoded = data_uri
            .split_once(";base64,")
            .map(|(_, rest)| rest)
            .ok_or_else(|| Error::Image("not a base64 data URI".into()))?;
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| Error::Image(e.to_string()))?;
        let img = image_rs::load_from_memory(&bytes)?;
        let (width, height) = img.dimensions();

        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
            data_uri: data_uri.to_string(),
        })
    }
}

/// Decode the file at `path` into a [`Preview`].
///
/// Blocking; UI code goes through [`decode_preview_off_thread`] instead. The
/// caller tags the result with a request token so stale decodes can be
/// discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image data is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn decode_preview<P: AsRef<Path>>(path: P) -> Result<Preview> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;

        Ok(Preview::from_png(png_data, width, height))
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;
        let (width, height) = img.dimensions();

        let mut png_data = Vec::new();
        img.write_to(&mut Cursor::new(&mut png_data), image_rs::ImageFormat::Png)?;

        Ok(Preview::from_png(png_data, width, height))
    }
}

/// Decode the file at `path` on a blocking worker thread.
///
/// Reading the file (up to the configured ceiling) and decoding or
/// rasterizing it is CPU-bound work; running it through `spawn_blocking`
/// keeps the UI executor's worker threads free while the decode runs.
///
/// # Errors
///
/// Propagates [`decode_preview`] errors; a panicked worker surfaces as
/// [`Error::Image`].
pub async fn decode_preview_off_thread(path: PathBuf) -> Result<Preview> {
    tokio::task::spawn_blocking(move || decode_preview(&path))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        img.save(path).expect("failed to save test image");
    }

    #[test]
    fn decode_png_produces_data_uri() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("square.png");
        write_png(&path, 4, 4);

        let preview = decode_preview(&path).expect("decode should succeed");
        assert_eq!(preview.width, 4);
        assert_eq!(preview.height, 4);
        assert!(preview.data_uri.starts_with("data:image/"));
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("junk.png");
        fs::write(&path, b"not an image at all").expect("failed to write");

        let result = decode_preview(&path);
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn decode_missing_file_is_io_error() {
        let result = decode_preview("/no/such/preview.png");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn decode_svg_rasterizes_to_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("shape.svg");
        fs::write(
            &path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="8"><rect width="10" height="8" fill="red"/></svg>"#,
        )
        .expect("failed to write svg");

        let preview = decode_preview(&path).expect("svg decode should succeed");
        assert_eq!(preview.width, 10);
        assert_eq!(preview.height, 8);
        assert!(preview.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn preview_round_trips_through_data_uri() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("seed.png");
        write_png(&path, 3, 5);

        let original = decode_preview(&path).expect("decode should succeed");
        let restored = Preview::from_data_uri(&original.data_uri).expect("restore should succeed");
        assert_eq!(restored.width, 3);
        assert_eq!(restored.height, 5);
        assert_eq!(restored.data_uri, original.data_uri);
    }

    #[test]
    fn from_data_uri_rejects_plain_strings() {
        let result = Preview::from_data_uri("https://example.com/image.png");
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
