use crate::binding::{InvokeRequest, InvokeResponse};
use crate::config::{BindingConfig, RequestOverrides};
use crate::core_error::BindingError;
use crate::core_handlers::response::CreateResponse;
use crate::core_handlers::{required_filename, resolve_request_file, Operation};
use crate::core_session::{with_session, Connector, DirectoryMode, SessionPlan};
use log::debug;

/// Handles the `create` operation.
///
/// Stores the request payload under `filename`, replacing any existing file.
/// The target directory is created when missing (one MKD, no recursion).
///
/// # Returns
///
/// `{"fileName": "<absolute path written>"}`
pub fn handle_create(
    connector: &dyn Connector,
    config: &BindingConfig,
    request: &InvokeRequest,
) -> Result<InvokeResponse, BindingError> {
    let overrides = RequestOverrides::from_metadata(&request.metadata);
    let filename = required_filename(&overrides)?;
    let resolved = resolve_request_file(&config, filename)?;

    let plan = SessionPlan {
        operation: Operation::Create,
        directory: resolved.directory(),
        mode: DirectoryMode::CreateMissing,
        target: resolved.absolute_path(),
    };
    let written = with_session(connector, config, &plan, |client| {
        client.store(resolved.base_name(), &request.data)
    })?;
    debug!("Stored {} bytes at {}", written, resolved.absolute_path());

    let body = serde_json::to_vec(&CreateResponse {
        file_name: resolved.absolute_path().to_string(),
    })?;
    Ok(InvokeResponse::with_data(body))
}
