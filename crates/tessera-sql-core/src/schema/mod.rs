//! Relations: tables, columns and joins.
//!
//! A [`Relation`] is anything rows can be read from. It exposes its schema
//! and table names and an ordered column list. The column order is part of
//! the contract: positional consumers (projection, result mapping) rely on
//! it.

mod column;
mod join;
mod table;

use std::fmt;

pub use column::{
    bool_column, column, date_time_column, float_column, integer_column, string_column, Column,
    ColumnRef, IntoColumns,
};
pub use join::{Join, JoinType};
pub use table::Table;

use crate::builder::Serializable;
use crate::expr::{Bool, Expr};

/// A source of rows with an ordered column list.
pub trait Relation: Serializable + fmt::Debug + Send + Sync {
    /// Schema used to qualify the relation in a FROM clause.
    fn schema_name(&self) -> &str;

    /// The relation's own name; empty for derived relations such as joins.
    fn table_name(&self) -> &str;

    /// The alias, or an empty string.
    fn alias(&self) -> &str {
        ""
    }

    /// Columns in positional order.
    fn columns(&self) -> &[ColumnRef];

    /// Whether this relation is a join (needs grouping on the right side of
    /// another join).
    fn is_join(&self) -> bool {
        false
    }
}

/// Join shorthands available on every relation.
///
/// ```rust
/// use tessera_sql_core::builder::{to_sql, StatementKind};
/// use tessera_sql_core::expr::Integer;
/// use tessera_sql_core::schema::{integer_column, RelationExt, Table};
///
/// let users = Table::new("", "users", "", integer_column("id"));
/// let orders = Table::new("", "orders", "", integer_column("user_id"));
/// let on = users
///     .column::<Integer>("id")
///     .unwrap()
///     .expr()
///     .eq(&orders.column::<Integer>("user_id").unwrap());
///
/// let join = users.left_join(orders, on);
/// assert_eq!(
///     to_sql(&join, StatementKind::Select).unwrap().0,
///     "users\nLEFT JOIN orders ON (users.id = orders.user_id)"
/// );
/// ```
pub trait RelationExt: Relation + Sized + 'static {
    /// `self INNER JOIN right ON on`
    #[must_use]
    fn inner_join(self, right: impl Relation + 'static, on: impl Into<Expr<Bool>>) -> Join {
        Join::new(self, right, JoinType::Inner, Some(on.into()))
    }

    /// `self LEFT JOIN right ON on`
    #[must_use]
    fn left_join(self, right: impl Relation + 'static, on: impl Into<Expr<Bool>>) -> Join {
        Join::new(self, right, JoinType::Left, Some(on.into()))
    }

    /// `self RIGHT JOIN right ON on`
    #[must_use]
    fn right_join(self, right: impl Relation + 'static, on: impl Into<Expr<Bool>>) -> Join {
        Join::new(self, right, JoinType::Right, Some(on.into()))
    }

    /// `self FULL JOIN right ON on`
    #[must_use]
    fn full_join(self, right: impl Relation + 'static, on: impl Into<Expr<Bool>>) -> Join {
        Join::new(self, right, JoinType::Full, Some(on.into()))
    }

    /// `self CROSS JOIN right`
    #[must_use]
    fn cross_join(self, right: impl Relation + 'static) -> Join {
        Join::cross(self, right)
    }
}

impl<R: Relation + 'static> RelationExt for R {}
