use crate::core_handlers::operation::Operation;
use thiserror::Error;

/// Failures reported by the FTP client collaborator.
#[derive(Error, Debug)]
pub enum FtpClientError {
    #[error(transparent)]
    Ftp(#[from] suppaftp::FtpError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unrecognised listing line: {0}")]
    Listing(String),
}

/// Every error the binding can return to its caller.
///
/// Each variant names the phase that failed, so callers can tell a rejected
/// login from a missing directory or a failed close handshake without parsing
/// the message.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("ftp binding error: invalid configuration: {0}")]
    Config(String),

    #[error("ftp binding error: {0}")]
    Validation(String),

    #[error("ftp binding error: path {path:?} rejected under root {root:?}: {reason}")]
    Security {
        root: String,
        path: String,
        reason: String,
    },

    #[error("ftp binding error: connection error to {server}: {source}")]
    Connection {
        server: String,
        source: FtpClientError,
    },

    #[error("ftp binding error: login error with user {user}: {source}")]
    Auth {
        user: String,
        source: FtpClientError,
    },

    #[error("ftp binding error: {operation}: directory error for {directory}: {source}")]
    Directory {
        operation: Operation,
        directory: String,
        source: FtpClientError,
    },

    #[error("ftp binding error: {operation} error for {target}: {source}")]
    Action {
        operation: Operation,
        target: String,
        source: FtpClientError,
    },

    /// The action ran, but the QUIT handshake failed afterwards.
    #[error("ftp binding error: {operation}: quit error: {source}")]
    SessionClose {
        operation: Operation,
        source: FtpClientError,
    },

    #[error("ftp binding error: error encoding response as JSON: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("ftp binding error: unsupported operation {0}")]
    UnsupportedOperation(String),

    /// The blocking worker running the session did not return.
    #[error("ftp binding error: {operation} worker failed: {message}")]
    Task {
        operation: Operation,
        message: String,
    },
}

impl BindingError {
    pub fn security(root: &str, path: &str, reason: &str) -> Self {
        BindingError::Security {
            root: root.to_string(),
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Stable name of the phase that produced this error.
    pub fn kind(&self) -> &'static str {
        match self {
            BindingError::Config(_) => "config",
            BindingError::Validation(_) => "validation",
            BindingError::Security { .. } => "security",
            BindingError::Connection { .. } => "connection",
            BindingError::Auth { .. } => "auth",
            BindingError::Directory { .. } => "directory",
            BindingError::Action { .. } => "action",
            BindingError::SessionClose { .. } => "session_close",
            BindingError::Encoding(_) => "encoding",
            BindingError::UnsupportedOperation(_) => "unsupported_operation",
            BindingError::Task { .. } => "task",
        }
    }
}
