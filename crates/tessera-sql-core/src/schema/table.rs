//! Base tables.

use super::column::{Column, ColumnRef, IntoColumns};
use super::Relation;
use crate::builder::{SerializeOptions, Serializable, SqlBuilder, StatementKind};
use crate::error::Result;
use crate::expr::{Category, ColumnType};

/// A named table with an ordered column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    schema: String,
    name: String,
    alias: String,
    columns: Vec<ColumnRef>,
}

impl Table {
    /// Creates a table and binds every column to it.
    ///
    /// Columns are qualified with `alias` when it is not empty, with `name`
    /// otherwise. Column order is kept exactly as supplied.
    ///
    /// ```rust
    /// use tessera_sql_core::schema::{integer_column, string_column, Relation, Table};
    ///
    /// let users = Table::new("public", "users", "", (integer_column("id"), string_column("name")));
    /// assert_eq!(users.columns()[0].name(), "id");
    /// assert_eq!(users.columns()[1].table_name(), Some("users"));
    /// ```
    #[must_use]
    pub fn new(schema: &str, name: &str, alias: &str, columns: impl IntoColumns) -> Self {
        let qualifier = if alias.is_empty() { name } else { alias };
        let mut columns = columns.into_columns();
        for column in &mut columns {
            column.bind(qualifier);
        }
        Self {
            schema: String::from(schema),
            name: String::from(name),
            alias: String::from(alias),
            columns,
        }
    }

    /// Returns a copy of this table under another alias, columns rebound.
    #[must_use]
    pub fn aliased(&self, alias: &str) -> Self {
        Self::new(&self.schema, &self.name, alias, self.columns.clone())
    }

    /// Looks up a bound column by name.
    ///
    /// Returns `None` when there is no such column or when its declared
    /// category differs from `C` (any column can be looked up as `Any`).
    #[must_use]
    pub fn column<C: Category>(&self, name: &str) -> Option<Column<C>> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .filter(|c| C::TYPE == ColumnType::Any || c.column_type() == C::TYPE)
            .map(|c| Column::from_ref(c.clone()))
    }
}

impl Relation for Table {
    fn schema_name(&self) -> &str {
        &self.schema
    }

    fn table_name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> &str {
        &self.alias
    }

    fn columns(&self) -> &[ColumnRef] {
        &self.columns
    }
}

impl Serializable for Table {
    fn serialize(
        &self,
        _statement: StatementKind,
        out: &mut SqlBuilder,
        _options: SerializeOptions,
    ) -> Result<()> {
        out.write_qualified_name(&self.schema, &self.name);
        if !self.alias.is_empty() {
            out.write_str("AS");
            out.write_identifier(&self.alias);
        }
        Ok(())
    }
}
