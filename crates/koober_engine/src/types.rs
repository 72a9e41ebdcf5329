use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidCredentials,
    HttpStatus(u16),
    Timeout,
    InvalidResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidCredentials => write!(f, "invalid credentials"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure reported by an [`crate::AuthRemoteApi`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct RemoteApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl RemoteApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Failure reported by a [`crate::UserSessionDataStore`].
#[derive(Debug, Error)]
pub enum DataStoreError {
    #[error("session directory missing or not writable: {0}")]
    Directory(String),
    #[error("session file is not valid: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("could not encode session: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Repository failures carry the underlying error untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Remote(#[from] RemoteApiError),
    #[error(transparent)]
    DataStore(#[from] DataStoreError),
}
