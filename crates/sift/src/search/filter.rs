use super::Operation;
use sift_core::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One per-column condition of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Display key of the column to filter on
    pub column: String,

    pub operation: Operation,

    /// Raw value, coerced to the column's kind when the request is shaped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Filter {
    pub fn new(column: impl Into<String>, operation: Operation, value: Option<String>) -> Self {
        Self {
            column: column.into(),
            operation,
            value,
        }
    }
}

/// Parses `<column>:<op-code>[:<value>]`. Only the first two `:` split, so
/// the value may contain `:` itself.
impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');

        let column = match parts.next() {
            Some(column) if !column.is_empty() => column,
            _ => {
                return Err(Error::invalid_request(format!(
                    "filter entry `{s}` has no column"
                )))
            }
        };

        let Some(operation) = parts.next() else {
            return Err(Error::invalid_request(format!(
                "filter entry `{s}` has no operation; expected `<column>:<op>[:<value>]`"
            )));
        };

        Ok(Filter::new(
            column,
            operation.parse()?,
            parts.next().map(str::to_string),
        ))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.operation)?;

        if let Some(value) = &self.value {
            write!(f, ":{value}")?;
        }

        Ok(())
    }
}
