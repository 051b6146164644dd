// Here's the list of the binding operations implemented
pub mod create;
pub mod delete;
pub mod get;
pub mod handlers;
pub mod list;
pub mod operation;
pub mod response;

use crate::config::{BindingConfig, RequestOverrides};
use crate::core_error::BindingError;
use crate::core_path::{resolve, ResolvedPath};

pub use operation::Operation;

/// Returns the request filename, which must be present and non-empty.
pub fn required_filename(overrides: &RequestOverrides) -> Result<&str, BindingError> {
    overrides
        .filename
        .as_deref()
        .filter(|f| !f.is_empty())
        .ok_or_else(|| BindingError::Validation("filename is empty".to_string()))
}

/// Resolves `filename` below the root. The `directory` setting only scopes
/// listings; file operations always address `root/<filename>`.
pub fn resolve_request_file(
    config: &BindingConfig,
    filename: &str,
) -> Result<ResolvedPath, BindingError> {
    resolve(&config.root_path, filename)
}
