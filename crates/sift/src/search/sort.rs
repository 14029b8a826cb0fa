use sift_core::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One ordering entry of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Display key of the column to order by
    pub column: String,

    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl Sort {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Desc)
    }
}

/// Parses `<column>.<asc|desc>`. The order follows the last `.`, so
/// qualified keys such as `Orders.total.desc` parse.
impl FromStr for Sort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((column, order)) = s.rsplit_once('.') else {
            return Err(Error::invalid_request(format!(
                "sort entry `{s}` has no order; expected `<column>.<asc|desc>`"
            )));
        };

        if column.is_empty() {
            return Err(Error::invalid_request(format!(
                "sort entry `{s}` has no column"
            )));
        }

        Ok(Sort::new(column, order.parse()?))
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.column, self.order)
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(Error::invalid_request(format!("unknown sort order `{s}`"))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}
