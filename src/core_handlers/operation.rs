use crate::core_error::BindingError;
use std::fmt;
use std::str::FromStr;

/// The operation kinds the binding accepts.
#[derive(Eq, Hash, PartialEq, Debug, Clone, Copy)]
pub enum Operation {
    Create,
    List,
    Get,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Create,
        Operation::List,
        Operation::Get,
        Operation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = BindingError;

    fn from_str(op: &str) -> Result<Self, Self::Err> {
        match op {
            "create" => Ok(Operation::Create),
            "list" => Ok(Operation::List),
            "get" => Ok(Operation::Get),
            "delete" => Ok(Operation::Delete),
            _ => Err(BindingError::UnsupportedOperation(op.to_string())),
        }
    }
}
