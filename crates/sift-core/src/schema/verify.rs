use super::Builder;
use crate::Result;

use std::collections::HashSet;

struct Verify<'a> {
    builder: &'a Builder,
}

impl Builder {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { builder: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.verify_table_names_are_unique()?;
        self.verify_column_names_are_unique()?;
        self.verify_each_table_has_one_primary_key()?;
        Ok(())
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.builder.tables {
            if !names.insert(table.name.as_str()) {
                return Err(crate::Error::invalid_schema(format!(
                    "duplicate table name `{}`",
                    table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_column_names_are_unique(&self) -> Result<()> {
        for table in &self.builder.tables {
            let mut names = HashSet::new();

            for column in &table.columns {
                if !names.insert(column.name.as_str()) {
                    return Err(crate::Error::invalid_schema(format!(
                        "duplicate column `{}` in table `{}`",
                        column.name, table.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_each_table_has_one_primary_key(&self) -> Result<()> {
        for table in &self.builder.tables {
            let count = table
                .columns
                .iter()
                .filter(|column| column.primary_key)
                .count();

            match count {
                1 => {}
                0 => {
                    return Err(crate::Error::invalid_schema(format!(
                        "table `{}` has no primary key",
                        table.name
                    )))
                }
                n => {
                    return Err(crate::Error::invalid_schema(format!(
                        "table `{}` has {n} primary key columns; exactly one is required",
                        table.name
                    )))
                }
            }
        }

        Ok(())
    }
}
