// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Svg(String),
    Config(String),
    Upload(UploadError),
}

/// Validation failures for the upload widget.
/// Both kinds are local, recoverable conditions rendered inline next to the
/// widget; they never abort the hosting screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The candidate's MIME type does not start with `image/`.
    InvalidType {
        /// MIME type that was offered (kept for diagnostics).
        mime: String,
    },

    /// The candidate exceeds the configured size ceiling.
    TooLarge {
        /// Configured ceiling in mebibytes.
        max_mib: u32,
    },
}

impl UploadError {
    /// Returns the i18n message key for this error kind.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::InvalidType { .. } => "upload-error-invalid-type",
            UploadError::TooLarge { .. } => "upload-error-too-large",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::InvalidType { .. } => write!(f, "Please select an image file"),
            UploadError::TooLarge { max_mib } => {
                write!(f, "File size must be less than {}MB", max_mib)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Upload(e) => write!(f, "Upload Error: {}", e),
        }
    }
}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Error::Upload(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn invalid_type_message_is_user_facing() {
        let err = UploadError::InvalidType {
            mime: "application/pdf".to_string(),
        };
        assert_eq!(format!("{}", err), "Please select an image file");
    }

    #[test]
    fn too_large_message_embeds_configured_ceiling() {
        let err = UploadError::TooLarge { max_mib: 5 };
        assert_eq!(format!("{}", err), "File size must be less than 5MB");

        let err = UploadError::TooLarge { max_mib: 12 };
        assert_eq!(format!("{}", err), "File size must be less than 12MB");
    }

    #[test]
    fn upload_error_i18n_keys() {
        assert_eq!(
            UploadError::InvalidType {
                mime: "text/plain".into()
            }
            .i18n_key(),
            "upload-error-invalid-type"
        );
        assert_eq!(
            UploadError::TooLarge { max_mib: 5 }.i18n_key(),
            "upload-error-too-large"
        );
    }

    #[test]
    fn upload_error_converts_into_error() {
        let err: Error = UploadError::TooLarge { max_mib: 5 }.into();
        assert!(matches!(err, Error::Upload(UploadError::TooLarge { .. })));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
