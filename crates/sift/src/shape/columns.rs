use sift_core::{
    schema::{Column, Schema},
    stmt::Source,
    Error, Result,
};

use indexmap::IndexMap;

/// Display key to column lookup for one query source.
///
/// Columns of the primary table are keyed by their bare name; columns of
/// joined tables by `<TableName>.<column>` with the table name in
/// UpperCamelCase.
#[derive(Debug)]
pub(crate) struct Columns<'a> {
    by_key: IndexMap<String, &'a Column>,
}

impl<'a> Columns<'a> {
    /// Fails when the source names a table the schema does not have.
    pub(crate) fn new(schema: &'a Schema, source: &Source) -> Result<Self> {
        let mut by_key = IndexMap::new();

        for (position, table_id) in source.tables.iter().enumerate() {
            let table = schema.get_table(*table_id).ok_or_else(|| {
                Error::invalid_request(format!("query source names unknown table {table_id:?}"))
            })?;
            let prefix = table.display_name();

            for column in table.filter_columns() {
                let key = if position == 0 {
                    column.name.clone()
                } else {
                    format!("{prefix}.{}", column.name)
                };

                by_key.insert(key, column);
            }
        }

        Ok(Self { by_key })
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Column> {
        self.by_key.get(key).copied()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &'a Column> + '_ {
        self.by_key.values().copied()
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_key.keys().map(String::as_str)
    }
}
