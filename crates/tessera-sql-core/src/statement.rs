//! Statements.
//!
//! Only the surface needed to use relations and subqueries is provided: a
//! [`Select`] with a projection list, a FROM relation and a WHERE condition.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::builder::{SerializeOptions, Serializable, SqlBuilder, SqlValue, StatementKind};
use crate::dialect::Dialect;
use crate::error::{Result, SerializeError};
use crate::expr::{Any, Bool, Category, Expr, Node};
use crate::schema::Relation;

/// A complete statement that can stand on its own or as a subquery.
pub trait Statement: Serializable + fmt::Debug + Send + Sync {
    /// The kind of statement, used to render its children.
    fn statement_kind(&self) -> StatementKind;
}

/// A SELECT statement.
///
/// ```rust
/// use tessera_sql_core::expr::Integer;
/// use tessera_sql_core::schema::{integer_column, string_column, Table};
/// use tessera_sql_core::statement::Select;
///
/// let users = Table::new("", "users", "", (integer_column("id"), string_column("name")));
/// let id = users.column::<Integer>("id").unwrap();
///
/// let (sql, params) = Select::from_relation(users)
///     .where_clause(id.expr().eq(42))
///     .build()
///     .unwrap();
///
/// assert_eq!(sql, "SELECT users.id, users.name\nFROM users\nWHERE users.id = ?");
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    projections: Vec<Expr<Any>>,
    from: Option<Arc<dyn Relation>>,
    filter: Option<Expr<Bool>>,
}

impl Select {
    /// Creates a SELECT with the given projection list.
    #[must_use]
    pub fn new(projections: Vec<Expr<Any>>) -> Self {
        Self {
            projections,
            from: None,
            filter: None,
        }
    }

    /// Selects every column of `relation`, in positional order, from it.
    #[must_use]
    pub fn from_relation(relation: impl Relation + 'static) -> Self {
        let projections = relation
            .columns()
            .iter()
            .map(|c| Expr::from_node(Node::Column(c.clone())))
            .collect();
        Self::new(projections).from(relation)
    }

    /// Appends one expression to the projection list.
    #[must_use]
    pub fn project<C: Category>(mut self, expr: impl Into<Expr<C>>) -> Self {
        self.projections.push(expr.into().erase());
        self
    }

    /// Sets the FROM relation.
    #[must_use]
    pub fn from(mut self, relation: impl Relation + 'static) -> Self {
        self.from = Some(Arc::new(relation));
        self
    }

    /// Sets the WHERE condition, replacing any earlier one.
    #[must_use]
    pub fn where_clause(mut self, condition: impl Into<Expr<Bool>>) -> Self {
        self.filter = Some(condition.into());
        self
    }

    /// Builds the statement and returns SQL with `?` placeholders and the
    /// collected parameters.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any part of the statement.
    pub fn build(&self) -> Result<(String, Vec<SqlValue>)> {
        self.render(SqlBuilder::new(StatementKind::Select))
    }

    /// Like [`build`](Self::build), with another dialect's placeholders.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any part of the statement.
    pub fn build_with_dialect(
        &self,
        dialect: &'static dyn Dialect,
    ) -> Result<(String, Vec<SqlValue>)> {
        self.render(SqlBuilder::new(StatementKind::Select).with_dialect(dialect))
    }

    /// Builds the statement with literal values inlined.
    ///
    /// **Warning**: meant for logs and tests. Prefer [`build`](Self::build)
    /// for anything sent to a database.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any part of the statement.
    pub fn debug_sql(&self) -> Result<String> {
        let (sql, _) = self.render(SqlBuilder::new(StatementKind::Select).inline_values(true))?;
        Ok(sql)
    }

    fn render(&self, mut out: SqlBuilder) -> Result<(String, Vec<SqlValue>)> {
        out.append(self)?;
        let (sql, params) = out.finish();
        debug!(sql_len = sql.len(), params = params.len(), "built SELECT");
        Ok((sql, params))
    }
}

impl Statement for Select {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Select
    }
}

impl Serializable for Select {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        if self.projections.is_empty() {
            return Err(SerializeError::EmptyProjection);
        }
        let child = options.for_child();

        out.write_str("SELECT");
        for (i, projection) in self.projections.iter().enumerate() {
            if i > 0 {
                out.write_str(",");
            }
            projection.serialize(statement, out, child)?;
        }

        if let Some(from) = &self.from {
            out.new_line();
            out.write_str("FROM");
            from.serialize(statement, out, child)?;
        }

        if let Some(filter) = &self.filter {
            out.new_line();
            out.write_str("WHERE");
            filter.serialize(statement, out, child | SerializeOptions::NO_WRAP)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::PostgresDialect;
    use crate::expr::{raw, Integer, Text};
    use crate::schema::{integer_column, string_column, RelationExt, Table};

    fn users() -> Table {
        Table::new("", "users", "", (integer_column("id"), string_column("name")))
    }

    #[test]
    fn test_select_all_columns() {
        let (sql, params) = Select::from_relation(users()).build().unwrap();
        assert_eq!(sql, "SELECT users.id, users.name\nFROM users");
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_without_from() {
        let sql = Select::new(vec![]).project::<Integer>(1).debug_sql().unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn test_where_is_not_wrapped() {
        let users = users();
        let name = users.column::<Text>("name").unwrap();
        let sql = Select::new(vec![])
            .project::<Text>(&name)
            .from(users)
            .where_clause(name.expr().like("a%").or(name.expr().is_null()))
            .debug_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT users.name\nFROM users\nWHERE (users.name LIKE 'a%') OR (users.name IS NULL)"
        );
    }

    #[test]
    fn test_postgres_placeholders() {
        let users = users();
        let id = users.column::<Integer>("id").unwrap();
        let (sql, params) = Select::from_relation(users)
            .where_clause(id.expr().gt(1).and(id.expr().lt(9)))
            .build_with_dialect(&PostgresDialect)
            .unwrap();
        assert_eq!(
            sql,
            "SELECT users.id, users.name\nFROM users\nWHERE (users.id > $1) AND (users.id < $2)"
        );
        assert_eq!(params, vec![SqlValue::Int(1), SqlValue::Int(9)]);
    }

    #[test]
    fn test_select_from_join() {
        let orders = Table::new("", "orders", "o", integer_column("user_id"));
        let users = users();
        let on = users
            .column::<Integer>("id")
            .unwrap()
            .expr()
            .eq(&orders.column::<Integer>("user_id").unwrap());
        let sql = Select::from_relation(users.inner_join(orders, on))
            .debug_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT users.id, users.name, o.user_id\n\
             FROM users\n\
             INNER JOIN orders AS o ON (users.id = o.user_id)"
        );
    }

    #[test]
    fn test_empty_projection_fails() {
        assert_eq!(
            Select::new(vec![]).from(users()).build().unwrap_err(),
            SerializeError::EmptyProjection
        );
    }

    #[test]
    fn test_errors_in_where_propagate() {
        let bad: Expr<Bool> = crate::expr::case::<Bool>().into();
        let err = Select::new(vec![raw("1")])
            .where_clause(bad)
            .build()
            .unwrap_err();
        assert_eq!(err, SerializeError::MissingBranch);
    }
}
