// SPDX-License-Identifier: MPL-2.0
//! File candidates and preview generation for the upload widget.
//!
//! A [`FileCandidate`] is a file the user offered via the browse dialog or a
//! drop, described just well enough for validation (MIME type and size). A
//! [`Preview`] is the displayable decoding of an accepted candidate.

pub mod preview;

pub use preview::{decode_preview, decode_preview_off_thread, Preview};

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A file offered by the user, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    /// MIME type derived from the file extension.
    pub mime: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    /// Describe the file at `path` for validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be
    /// stat'd.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)?;
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            mime: mime_for_extension(extension).to_string(),
            size_bytes: metadata.len(),
        })
    }

    /// Whether the candidate's MIME type carries the `image/` prefix.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Image file extensions offered in the browse dialog.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Map a file extension to a MIME type.
///
/// Unknown and missing extensions map to `application/octet-stream`, which
/// fails the upload widget's `image/` prefix check.
pub fn mime_for_extension(extension: &str) -> &'static str {
    let ext = extension.to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn mime_detection_for_common_images() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("svg"), "image/svg+xml");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(mime_for_extension("zip"), "application/octet-stream");
        assert_eq!(mime_for_extension(""), "application/octet-stream");
    }

    #[test]
    fn candidate_from_path_records_size_and_mime() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.png");
        let mut file = fs::File::create(&path).expect("failed to create file");
        file.write_all(&[0u8; 1024]).expect("failed to write");

        let candidate = FileCandidate::from_path(&path).expect("candidate should build");
        assert_eq!(candidate.size_bytes, 1024);
        assert_eq!(candidate.mime, "image/png");
        assert!(candidate.is_image());
    }

    #[test]
    fn candidate_without_extension_is_not_an_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("README");
        fs::write(&path, b"hello").expect("failed to write");

        let candidate = FileCandidate::from_path(&path).expect("candidate should build");
        assert!(!candidate.is_image());
    }

    #[test]
    fn candidate_from_missing_path_errors() {
        let result = FileCandidate::from_path("/no/such/file.png");
        assert!(result.is_err());
    }
}
