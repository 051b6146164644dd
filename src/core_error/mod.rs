// Error types for the FTP binding

pub mod error;

pub use error::{BindingError, FtpClientError};
