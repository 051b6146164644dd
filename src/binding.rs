use crate::config::BindingConfig;
use crate::core_error::BindingError;
use crate::core_handlers::handlers::{initialize_operation_handlers, OperationHandler};
use crate::core_handlers::Operation;
use crate::core_session::{Connector, SuppaConnector};
use crate::helpers::log_config;
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::Arc;

/// One inbound invocation: an operation name, request metadata and payload.
#[derive(Debug, Clone, Default)]
pub struct InvokeRequest {
    pub operation: String,
    pub metadata: HashMap<String, String>,
    pub data: Vec<u8>,
}

impl InvokeRequest {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation: operation.as_str().to_string(),
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_data(mut self, data: &[u8]) -> Self {
        self.data = data.to_vec();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeResponse {
    pub data: Vec<u8>,
    pub metadata: HashMap<String, String>,
}

impl InvokeResponse {
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data,
            metadata: HashMap::new(),
        }
    }
}

/// FTP output binding.
///
/// Every invocation opens its own connection, so one binding can be shared
/// across tasks behind an `Arc`.
///
/// Sessions run on tokio's blocking pool. Dropping the future returned by
/// [`invoke`](FtpBinding::invoke) does not interrupt a session that already
/// started; it runs on to its QUIT.
pub struct FtpBinding {
    config: Arc<BindingConfig>,
    connector: Arc<dyn Connector>,
    handlers: HashMap<Operation, OperationHandler>,
}

impl FtpBinding {
    /// Parses the binding properties and connects through `suppaftp`.
    pub fn init(properties: &HashMap<String, String>) -> Result<Self, BindingError> {
        let config = BindingConfig::from_properties(properties)?;
        Ok(Self::new(config, Arc::new(SuppaConnector)))
    }

    pub fn new(config: BindingConfig, connector: Arc<dyn Connector>) -> Self {
        info!("Initialising FTP binding");
        log_config(&config);
        Self {
            config: Arc::new(config),
            connector,
            handlers: initialize_operation_handlers(),
        }
    }

    pub fn operations(&self) -> &'static [Operation] {
        &Operation::ALL
    }

    pub async fn invoke(&self, request: InvokeRequest) -> Result<InvokeResponse, BindingError> {
        let operation: Operation = request.operation.parse()?;
        let handler = *self
            .handlers
            .get(&operation)
            .ok_or_else(|| BindingError::UnsupportedOperation(request.operation.clone()))?;
        debug!("Received {} request", operation);

        let config = Arc::clone(&self.config);
        let connector = Arc::clone(&self.connector);
        let result = tokio::task::spawn_blocking(move || {
            handler(&*connector, &config, &request)
        })
        .await
        .map_err(|e| BindingError::Task {
            operation,
            message: e.to_string(),
        })?;

        if let Err(e) = &result {
            error!("{} failed: {}", operation, e);
        }
        result
    }
}
