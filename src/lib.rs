//! FTP output binding: `create`, `list`, `get` and `delete` against a remote
//! FTP server, with every request path confined to a configured root.

pub mod binding;
pub mod config;
pub mod constants;
pub mod core_cli;
pub mod core_error;
pub mod core_handlers;
pub mod core_path;
pub mod core_session;
pub mod helpers;

#[cfg(test)]
mod testing;

pub use binding::{FtpBinding, InvokeRequest, InvokeResponse};
pub use config::{BindingConfig, RequestOverrides};
pub use core_error::{BindingError, FtpClientError};
pub use core_handlers::Operation;
