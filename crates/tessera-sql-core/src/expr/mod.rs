//! Typed expression trees.
//!
//! An [`Expr<C>`] is an immutable, cheaply cloneable SQL expression whose
//! result category `C` is tracked by the type system. Composite expressions
//! always render fully parenthesized, so operator precedence in the
//! generated SQL never depends on how the tree was assembled.
//!
//! ```rust
//! use tessera_sql_core::builder::{debug_sql, StatementKind};
//! use tessera_sql_core::schema::{bool_column, integer_column};
//!
//! let active = bool_column("active");
//! let age = integer_column("age");
//! let expr = active.expr().not().and(age.expr().gt_eq(18));
//!
//! assert_eq!(
//!     debug_sql(&expr, StatementKind::Select).unwrap(),
//!     "((NOT active) AND (age >= 18))"
//! );
//! ```

mod case;
mod category;
pub mod operators;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::builder::{
    SerializeOptions, Serializable, SqlBuilder, SqlValue, StatementKind, ToSqlValue,
};
use crate::error::{Result, SerializeError};
use crate::schema::ColumnRef;
use crate::statement::Statement;

pub(crate) use case::CaseNode;
pub use case::{case, case_on, CaseOperator};
pub use category::{Any, Bool, Category, ColumnType, DateTime, Float, Integer, Numeric, Text};

/// The node kinds an expression tree is made of.
#[derive(Debug)]
pub(crate) enum Node {
    Literal(SqlValue),
    Column(ColumnRef),
    Binary {
        lhs: Arc<Node>,
        op: &'static str,
        rhs: Arc<Node>,
    },
    Prefix {
        op: &'static str,
        operand: Arc<Node>,
    },
    Postfix {
        operand: Arc<Node>,
        op: &'static str,
    },
    InList {
        operand: Arc<Node>,
        list: Vec<Arc<Node>>,
        negated: bool,
    },
    Case(CaseNode),
    Raw(String),
    Subquery(Arc<dyn Statement>),
}

impl Serializable for Node {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        let child = options.for_child();
        match self {
            Self::Literal(value) => {
                out.write_value(value);
                Ok(())
            }
            Self::Column(column) => column.serialize(statement, out, options),
            Self::Binary { lhs, op, rhs } => wrapped(out, options, |out| {
                lhs.serialize(statement, out, child)?;
                out.write_str(op);
                rhs.serialize(statement, out, child)
            }),
            Self::Prefix { op, operand } => wrapped(out, options, |out| {
                out.write_str(op);
                operand.serialize(statement, out, child)
            }),
            Self::Postfix { operand, op } => wrapped(out, options, |out| {
                operand.serialize(statement, out, child)?;
                out.write_str(op);
                Ok(())
            }),
            Self::InList { list, negated, .. } if list.is_empty() => {
                Err(SerializeError::EmptyInList { negated: *negated })
            }
            Self::InList {
                operand,
                list,
                negated,
            } => wrapped(out, options, |out| {
                operand.serialize(statement, out, child)?;
                out.write_str(if *negated { "NOT IN" } else { "IN" });
                out.write_str("(");
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        out.write_str(",");
                    }
                    item.serialize(statement, out, child)?;
                }
                out.write_str(")");
                Ok(())
            }),
            Self::Case(case) => case.serialize(statement, out, options),
            Self::Raw(sql) => {
                out.write_str(sql);
                Ok(())
            }
            Self::Subquery(stmt) => {
                // A subquery is parenthesized whatever the caller asked for.
                out.write_str("(");
                stmt.serialize(stmt.statement_kind(), out, SerializeOptions::NONE)?;
                out.write_str(")");
                Ok(())
            }
        }
    }
}

/// Runs `body` between parentheses unless `options` says `NO_WRAP`.
fn wrapped(
    out: &mut SqlBuilder,
    options: SerializeOptions,
    body: impl FnOnce(&mut SqlBuilder) -> Result<()>,
) -> Result<()> {
    let wrap = !options.no_wrap();
    if wrap {
        out.write_str("(");
    }
    body(out)?;
    if wrap {
        out.write_str(")");
    }
    Ok(())
}

/// A SQL expression with result category `C`.
pub struct Expr<C> {
    node: Arc<Node>,
    _category: PhantomData<fn() -> C>,
}

impl<C: Category> Expr<C> {
    pub(crate) fn from_node(node: Node) -> Self {
        Self::from_arc(Arc::new(node))
    }

    pub(crate) fn from_arc(node: Arc<Node>) -> Self {
        Self {
            node,
            _category: PhantomData,
        }
    }

    pub(crate) fn node(&self) -> Arc<Node> {
        Arc::clone(&self.node)
    }

    /// Creates an expression of category `C` from raw SQL.
    ///
    /// **Warning**: Only use this for SQL fragments that don't contain user input.
    #[must_use]
    pub fn from_raw(sql: impl Into<String>) -> Self {
        Self::from_node(Node::Raw(sql.into()))
    }

    /// Creates a literal expression (rendered as a bind parameter).
    #[must_use]
    pub fn value(value: impl ToSqlValue) -> Self {
        Self::from_node(Node::Literal(value.to_sql_value()))
    }

    /// Forgets the result category.
    #[must_use]
    pub fn erase(&self) -> Expr<Any> {
        Expr::from_arc(self.node())
    }

    /// Returns the runtime tag of this expression's category.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        C::TYPE
    }
}

impl<C> Clone for Expr<C> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            _category: PhantomData,
        }
    }
}

impl<C: Category> fmt::Debug for Expr<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("category", &C::TYPE)
            .field("node", &self.node)
            .finish()
    }
}

impl<C: Category> Serializable for Expr<C> {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        self.node.serialize(statement, out, options)
    }
}

impl<C: Category> From<&Expr<C>> for Expr<C> {
    fn from(expr: &Expr<C>) -> Self {
        expr.clone()
    }
}

/// Creates an expression from raw SQL.
///
/// **Warning**: Only use this for SQL fragments that don't contain user input.
#[must_use]
pub fn raw(sql: impl Into<String>) -> Expr<Any> {
    Expr::from_raw(sql)
}

/// Creates a NULL literal of any category.
#[must_use]
pub fn null<C: Category>() -> Expr<C> {
    Expr::from_node(Node::Literal(SqlValue::Null))
}

macro_rules! impl_literal {
    ($category:ty => $($ty:ty),+) => {
        $(
            impl From<$ty> for Expr<$category> {
                fn from(value: $ty) -> Self {
                    Self::value(value)
                }
            }
        )+
    };
}

impl_literal!(Bool => bool);
impl_literal!(Integer => i8, i16, i32, i64, u8, u16, u32);
impl_literal!(Float => f32, f64);
impl_literal!(Text => String, &str);
impl_literal!(DateTime => NaiveDate, NaiveDateTime);
