use crate::binding::{InvokeRequest, InvokeResponse};
use crate::config::BindingConfig;
use crate::core_error::BindingError;
use crate::core_handlers::operation::Operation;
use crate::core_handlers::{create, delete, get, list};
use crate::core_session::Connector;
use std::collections::HashMap;

pub type OperationHandler =
    fn(&dyn Connector, &BindingConfig, &InvokeRequest) -> Result<InvokeResponse, BindingError>;

pub fn initialize_operation_handlers() -> HashMap<Operation, OperationHandler> {
    let mut handlers: HashMap<Operation, OperationHandler> = HashMap::new();

    handlers.insert(Operation::Create, create::handle_create);
    handlers.insert(Operation::List, list::handle_list);
    handlers.insert(Operation::Get, get::handle_get);
    handlers.insert(Operation::Delete, delete::handle_delete);

    handlers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_has_a_handler() {
        let handlers = initialize_operation_handlers();
        for operation in Operation::ALL {
            assert!(handlers.contains_key(&operation), "{}", operation);
        }
    }
}
