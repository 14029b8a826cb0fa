use super::{Column, ColumnId, Schema, Table, TableId, Type};
use crate::Result;

/// Collects table descriptions and turns them into a verified [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    pub(super) tables: Vec<TableBuilder>,
}

#[derive(Debug)]
pub struct TableBuilder {
    pub(super) name: String,
    pub(super) columns: Vec<ColumnBuilder>,
    pub(super) filterable: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ColumnBuilder {
    pub(super) name: String,
    pub(super) ty: Type,
    pub(super) nullable: bool,
    pub(super) primary_key: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a table. Tables are numbered in declaration order.
    pub fn table(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce(&mut TableBuilder),
    ) -> &mut Self {
        let mut table = TableBuilder {
            name: name.into(),
            columns: vec![],
            filterable: None,
        };
        f(&mut table);
        self.tables.push(table);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        self.verify()?;

        let mut tables = Vec::with_capacity(self.tables.len());

        for (index, builder) in self.tables.iter().enumerate() {
            tables.push(builder.build(TableId(index))?);
        }

        Ok(Schema { tables })
    }
}

impl TableBuilder {
    /// Declares a column. Columns keep their declaration order.
    pub fn column(&mut self, name: impl Into<String>, ty: impl Into<Type>) -> &mut ColumnBuilder {
        self.columns.push(ColumnBuilder {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            primary_key: false,
        });
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    /// Restricts search, filters and sorts to the named columns.
    pub fn filterable<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filterable = Some(names.into_iter().map(Into::into).collect());
        self
    }

    fn build(&self, id: TableId) -> Result<Table> {
        let columns: Vec<_> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| Column {
                id: ColumnId { table: id, index },
                name: column.name.clone(),
                ty: column.ty.clone(),
                nullable: column.nullable,
                primary_key: column.primary_key,
            })
            .collect();

        let Some(primary_key) = columns.iter().find(|column| column.primary_key) else {
            return Err(crate::Error::invalid_schema(format!(
                "table `{}` has no primary key",
                self.name
            )));
        };
        let primary_key = primary_key.id;

        let filter_columns = match &self.filterable {
            Some(names) => {
                let mut ids = Vec::with_capacity(names.len());
                for name in names {
                    let Some(column) = columns.iter().find(|column| &column.name == name) else {
                        return Err(crate::Error::invalid_schema(format!(
                            "table `{}` declares unknown filterable column `{name}`",
                            self.name
                        )));
                    };
                    ids.push(column.id);
                }
                Some(ids)
            }
            None => None,
        };

        Ok(Table {
            id,
            name: self.name.clone(),
            columns,
            primary_key,
            filter_columns,
        })
    }
}

impl ColumnBuilder {
    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(&mut self) -> &mut Self {
        self.primary_key = true;
        self
    }
}
