use crate::binding::{InvokeRequest, InvokeResponse};
use crate::config::{BindingConfig, RequestOverrides};
use crate::core_error::BindingError;
use crate::core_handlers::response::{FileInfo, ListResponse};
use crate::core_handlers::Operation;
use crate::core_path::resolve_directory_only;
use crate::core_session::{with_session, Connector, DirectoryMode, SessionPlan};

/// Handles the `list` operation.
///
/// Lists the effective directory (request override or configured default)
/// without recursing. Entries keep the order the server sent them in.
pub fn handle_list(
    connector: &dyn Connector,
    config: &BindingConfig,
    request: &InvokeRequest,
) -> Result<InvokeResponse, BindingError> {
    let config = config.merge(&RequestOverrides::from_metadata(&request.metadata));
    let directory = resolve_directory_only(&config.root_path, &config.directory)?;

    let plan = SessionPlan {
        operation: Operation::List,
        directory: directory.as_str(),
        mode: DirectoryMode::MustExist,
        target: directory.as_str(),
    };
    let entries = with_session(connector, &config, &plan, |client| client.list())?;

    let response = ListResponse {
        directory: directory.as_str().to_string(),
        file_infos: entries
            .into_iter()
            .map(|entry| FileInfo {
                filename: entry.name,
                filetype: entry.kind.as_str().to_string(),
            })
            .collect(),
    };
    Ok(InvokeResponse::with_data(serde_json::to_vec(&response)?))
}
