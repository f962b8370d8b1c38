// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Json(String),
    Gallery(GalleryError),
}

/// Specific error types for gallery catalog loading.
/// Used to decide what the inline error panel should say.
#[derive(Debug, Clone)]
pub enum GalleryError {
    /// The listing endpoint answered with a non-success status code.
    BadStatus(u16),

    /// The listing endpoint could not be reached at all.
    Unreachable(String),

    /// The listing body was not the expected `{ "files": [...] }` shape.
    MalformedListing(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::BadStatus(status) => {
                write!(f, "Listing endpoint returned status {}", status)
            }
            GalleryError::Unreachable(msg) => write!(f, "Listing endpoint unreachable: {}", msg),
            GalleryError::MalformedListing(msg) => write!(f, "Malformed gallery listing: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Json(e) => write!(f, "JSON Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn gallery_bad_status_includes_code() {
        let err = Error::from(GalleryError::BadStatus(500));
        assert!(format!("{}", err).contains("500"));
    }

    #[test]
    fn gallery_malformed_listing_display() {
        let err = GalleryError::MalformedListing("missing files array".into());
        assert!(format!("{}", err).contains("missing files array"));
    }
}
