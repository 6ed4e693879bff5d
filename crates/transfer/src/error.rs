use reqwest::{Method, StatusCode};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = TransferError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[error("File [{}] not found", .0.display())]
    NotFound(PathBuf),

    /// Non-success response; `body` keeps the server's explanation for diagnostics
    #[error("{method} {url} failed: {status} - {body}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{context} {path:?}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TransferError {
    pub(crate) fn invalid_argument(
        name: &'static str,
    ) -> impl FnOnce(common::file_utils::InputValidationError) -> Self {
        move |e| TransferError::InvalidArgument {
            name,
            reason: e.message(),
        }
    }

    pub(crate) fn io(context: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| TransferError::Io {
            context,
            path,
            source,
        }
    }

    /// HTTP status of a rejected request, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransferError::Status { status, .. } => Some(*status),
            TransferError::Http(e) => e.status(),
            _ => None,
        }
    }
}
