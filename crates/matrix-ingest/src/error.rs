#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported payload shape: {message}")]
    UnsupportedShape { message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Failure reported by a data provider.
///
/// Carries a human-readable message for the error view. There is no retry;
/// recovery is a fresh fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    status: Option<u16>,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Classify a non-success HTTP status from the upstream tabular API.
    pub fn from_status(status: u16, detail: &str) -> Self {
        let summary = match status {
            401 => "Unauthorized: the access token is invalid or expired.",
            403 => "Authentication error: the access token lacks permission for this base.",
            404 => "Not found: the base or table could not be found.",
            429 => "Rate limit exceeded: too many requests, try again later.",
            _ => "Failed to fetch organization data.",
        };
        let message = if detail.trim().is_empty() {
            summary.to_string()
        } else {
            format!("{summary} ({status}: {})", detail.trim())
        };
        Self {
            message,
            status: Some(status),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl From<IngestError> for FetchError {
    fn from(error: IngestError) -> Self {
        Self::new(error.to_string())
    }
}
