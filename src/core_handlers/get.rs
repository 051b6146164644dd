use crate::binding::{InvokeRequest, InvokeResponse};
use crate::config::{BindingConfig, RequestOverrides};
use crate::core_error::BindingError;
use crate::core_handlers::{required_filename, resolve_request_file, Operation};
use crate::core_session::{with_session, Connector, DirectoryMode, SessionPlan};

/// Handles the `get` operation. The response data is the raw file content.
pub fn handle_get(
    connector: &dyn Connector,
    config: &BindingConfig,
    request: &InvokeRequest,
) -> Result<InvokeResponse, BindingError> {
    let overrides = RequestOverrides::from_metadata(&request.metadata);
    let filename = required_filename(&overrides)?;
    let resolved = resolve_request_file(&config, filename)?;

    let plan = SessionPlan {
        operation: Operation::Get,
        directory: resolved.directory(),
        mode: DirectoryMode::MustExist,
        target: resolved.absolute_path(),
    };
    let data = with_session(connector, config, &plan, |client| {
        client.retrieve(resolved.base_name())
    })?;

    Ok(InvokeResponse::with_data(data))
}
