use sift_core::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A filter operation, identified on the wire by a short op-code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "eq")]
    Eq,

    #[serde(rename = "neq")]
    Neq,

    /// Case-insensitive substring match on text columns
    #[serde(rename = "like")]
    Like,

    #[serde(rename = "lw")]
    Lower,

    #[serde(rename = "lwe")]
    LowerEq,

    #[serde(rename = "gt")]
    Greater,

    #[serde(rename = "gte")]
    GreaterEq,

    #[serde(rename = "isn")]
    IsNull,

    #[serde(rename = "isnn")]
    IsNotNull,

    /// Membership in a comma-separated list
    #[serde(rename = "in")]
    In,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Eq,
        Operation::Neq,
        Operation::Like,
        Operation::Lower,
        Operation::LowerEq,
        Operation::Greater,
        Operation::GreaterEq,
        Operation::IsNull,
        Operation::IsNotNull,
        Operation::In,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Operation::Eq => "eq",
            Operation::Neq => "neq",
            Operation::Like => "like",
            Operation::Lower => "lw",
            Operation::LowerEq => "lwe",
            Operation::Greater => "gt",
            Operation::GreaterEq => "gte",
            Operation::IsNull => "isn",
            Operation::IsNotNull => "isnn",
            Operation::In => "in",
        }
    }

    /// Returns `true` if the operation compares against a request value.
    pub fn requires_value(self) -> bool {
        !matches!(self, Operation::IsNull | Operation::IsNotNull)
    }

    /// Returns `true` for `<`, `<=`, `>` and `>=`.
    pub fn is_ordering(self) -> bool {
        matches!(
            self,
            Operation::Lower | Operation::LowerEq | Operation::Greater | Operation::GreaterEq
        )
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.code() == s)
            .ok_or_else(|| Error::invalid_request(format!("unknown filter operation `{s}`")))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
