mod builder;
pub use builder::{Builder, ColumnBuilder, TableBuilder};

mod column;
pub use column::{Column, ColumnId};

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::{Type, TypeEnum};

mod verify;

/// Description of the tables a query may touch.
///
/// Built once at startup by whatever provides the relational schema, then
/// shared by reference across every request. Nothing in a `Schema` changes
/// after [`Builder::build`] returns.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the table, or `None` if `id` is not part of this schema.
    pub fn get_table(&self, id: impl Into<TableId>) -> Option<&Table> {
        self.tables.get(id.into().0)
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        self.tables.get(id.into().0).expect("invalid table ID")
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.table(id.table)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    /// Finds a table by its storage name.
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
