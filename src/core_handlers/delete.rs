use crate::binding::{InvokeRequest, InvokeResponse};
use crate::config::{BindingConfig, RequestOverrides};
use crate::core_error::BindingError;
use crate::core_handlers::{required_filename, resolve_request_file, Operation};
use crate::core_session::{with_session, Connector, DirectoryMode, SessionPlan};

/// Handles the `delete` operation.
///
/// Deleting a file that does not exist is an error, not a no-op.
pub fn handle_delete(
    connector: &dyn Connector,
    config: &BindingConfig,
    request: &InvokeRequest,
) -> Result<InvokeResponse, BindingError> {
    let overrides = RequestOverrides::from_metadata(&request.metadata);
    let filename = required_filename(&overrides)?;
    let resolved = resolve_request_file(&config, filename)?;

    let plan = SessionPlan {
        operation: Operation::Delete,
        directory: resolved.directory(),
        mode: DirectoryMode::MustExist,
        target: resolved.absolute_path(),
    };
    with_session(connector, config, &plan, |client| {
        client.delete(resolved.base_name())
    })?;

    Ok(InvokeResponse::default())
}
