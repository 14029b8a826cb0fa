use super::{Column, ColumnId};

use heck::ToUpperCamelCase;
use std::fmt;

/// A database table
#[derive(Debug, Clone)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,

    /// The single column used as the ordering tie-break
    pub primary_key: ColumnId,

    /// When set, only these columns may be searched, filtered or sorted on.
    pub filter_columns: Option<Vec<ColumnId>>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_column(&self) -> &Column {
        &self.columns[self.primary_key.index]
    }

    /// Columns eligible for search, filters and sorts.
    ///
    /// Tables declaring a filterable subset contribute only that subset, in
    /// the declared order; others contribute every column.
    pub fn filter_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        let (restricted, all) = match &self.filter_columns {
            Some(ids) => (Some(ids.iter().map(|id| &self.columns[id.index])), None),
            None => (None, Some(self.columns.iter())),
        };

        restricted.into_iter().flatten().chain(all.into_iter().flatten())
    }

    /// The table name as it prefixes display keys of joined columns:
    /// `order_items` becomes `OrderItems`.
    pub fn display_name(&self) -> String {
        self.name.to_upper_camel_case()
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
