// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The catalog failed validation (e.g. duplicate ids).
    Catalog(String),
    /// A remote rendition could not be downloaded.
    Fetch(FetchError),
    /// Downloaded bytes could not be decoded into an image.
    Decode(String),
}

/// Reasons a media download can fail.
/// Used to pick a user-facing message key for the failed tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The HTTP client could not be built or the request never completed.
    Request(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The body exceeded the configured download limit.
    TooLarge { limit_bytes: u64 },

    /// The connection broke while streaming the body.
    Interrupted(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Request(_) => "error-media-request",
            FetchError::Status(_) => "error-media-status",
            FetchError::TooLarge { .. } => "error-media-too-large",
            FetchError::Interrupted(_) => "error-media-interrupted",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::TooLarge { limit_bytes } => {
                write!(f, "body exceeds {} bytes", limit_bytes)
            }
            FetchError::Interrupted(msg) => write!(f, "download interrupted: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error is shown in place
    /// of a media rendition.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Fetch(err) => err.i18n_key(),
            Error::Decode(_) => "error-media-decode",
            Error::Io(_) | Error::Config(_) | Error::Catalog(_) => "error-media-general",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
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
    fn catalog_error_formats_properly() {
        let err = Error::Catalog("duplicate id 3".into());
        assert_eq!(format!("{}", err), "Catalog Error: duplicate id 3");
    }

    #[test]
    fn fetch_error_converts_and_keeps_status() {
        let err: Error = FetchError::Status(404).into();
        assert_eq!(err, Error::Fetch(FetchError::Status(404)));
        assert!(format!("{}", err).contains("404"));
    }

    #[test]
    fn i18n_keys_follow_error_kind() {
        assert_eq!(
            Error::Fetch(FetchError::TooLarge { limit_bytes: 10 }).i18n_key(),
            "error-media-too-large"
        );
        assert_eq!(
            Error::Decode("bad png".into()).i18n_key(),
            "error-media-decode"
        );
        assert_eq!(Error::Io("x".into()).i18n_key(), "error-media-general");
    }
}
