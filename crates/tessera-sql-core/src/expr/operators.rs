//! Operator constructors.
//!
//! Each constructor only records an operator token and its operands; the
//! shared [`Node`] variants do all the rendering. A new binary operator is a
//! token plus a result category.
//!
//! The free functions mirror SQL spelling and the inherent methods on
//! [`Expr`] are sugar over them:
//!
//! ```rust
//! use tessera_sql_core::builder::{debug_sql, StatementKind};
//! use tessera_sql_core::expr::operators::{eq, not};
//! use tessera_sql_core::schema::bool_column;
//!
//! let a = bool_column("a");
//! let b = bool_column("b");
//!
//! let expr = eq(not(&a), &b);
//! assert_eq!(debug_sql(&expr, StatementKind::Select).unwrap(), "((NOT a) = b)");
//! ```

use std::sync::Arc;

use super::{Bool, Category, Expr, Integer, Node, Numeric, Text};
use crate::statement::Statement;

fn binary<L, R, Out>(
    lhs: impl Into<Expr<L>>,
    op: &'static str,
    rhs: impl Into<Expr<R>>,
) -> Expr<Out>
where
    L: Category,
    R: Category,
    Out: Category,
{
    Expr::from_node(Node::Binary {
        lhs: lhs.into().node(),
        op,
        rhs: rhs.into().node(),
    })
}

fn prefix<In: Category, Out: Category>(
    op: &'static str,
    operand: impl Into<Expr<In>>,
) -> Expr<Out> {
    Expr::from_node(Node::Prefix {
        op,
        operand: operand.into().node(),
    })
}

fn postfix<In: Category>(operand: impl Into<Expr<In>>, op: &'static str) -> Expr<Bool> {
    Expr::from_node(Node::Postfix {
        operand: operand.into().node(),
        op,
    })
}

fn membership<C, I>(operand: impl Into<Expr<C>>, items: I, negated: bool) -> Expr<Bool>
where
    C: Category,
    I: IntoIterator,
    I::Item: Into<Expr<C>>,
{
    Expr::from_node(Node::InList {
        operand: operand.into().node(),
        list: items.into_iter().map(|item| item.into().node()).collect(),
        negated,
    })
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// `lhs = rhs`
#[must_use]
pub fn eq<C: Category>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, "=", rhs)
}

/// `lhs != rhs`
#[must_use]
pub fn not_eq<C: Category>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, "!=", rhs)
}

/// `lhs IS DISTINCT FROM rhs`
#[must_use]
pub fn is_distinct_from<C: Category>(
    lhs: impl Into<Expr<C>>,
    rhs: impl Into<Expr<C>>,
) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, "IS DISTINCT FROM", rhs)
}

/// `lhs IS NOT DISTINCT FROM rhs`
#[must_use]
pub fn is_not_distinct_from<C: Category>(
    lhs: impl Into<Expr<C>>,
    rhs: impl Into<Expr<C>>,
) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, "IS NOT DISTINCT FROM", rhs)
}

/// `lhs < rhs`
#[must_use]
pub fn lt<C: Category>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, "<", rhs)
}

/// `lhs <= rhs`
#[must_use]
pub fn lt_eq<C: Category>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, "<=", rhs)
}

/// `lhs > rhs`
#[must_use]
pub fn gt<C: Category>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, ">", rhs)
}

/// `lhs >= rhs`
#[must_use]
pub fn gt_eq<C: Category>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<Bool> {
    binary::<C, C, Bool>(lhs, ">=", rhs)
}

/// `expr IS NULL`
#[must_use]
pub fn is_null<C: Category>(expr: impl Into<Expr<C>>) -> Expr<Bool> {
    postfix::<C>(expr, "IS NULL")
}

/// `expr IS NOT NULL`
#[must_use]
pub fn is_not_null<C: Category>(expr: impl Into<Expr<C>>) -> Expr<Bool> {
    postfix::<C>(expr, "IS NOT NULL")
}

/// `expr IN (items...)`
///
/// An empty `items` list fails at render time with
/// [`SerializeError::EmptyInList`](crate::error::SerializeError::EmptyInList).
#[must_use]
pub fn in_list<C, I>(expr: impl Into<Expr<C>>, items: I) -> Expr<Bool>
where
    C: Category,
    I: IntoIterator,
    I::Item: Into<Expr<C>>,
{
    membership::<C, I>(expr, items, false)
}

/// `expr NOT IN (items...)`
#[must_use]
pub fn not_in_list<C, I>(expr: impl Into<Expr<C>>, items: I) -> Expr<Bool>
where
    C: Category,
    I: IntoIterator,
    I::Item: Into<Expr<C>>,
{
    membership::<C, I>(expr, items, true)
}

/// `EXISTS (subquery)`
#[must_use]
pub fn exists(sub_query: impl Statement + 'static) -> Expr<Bool> {
    Expr::from_node(Node::Prefix {
        op: "EXISTS",
        operand: Arc::new(Node::Subquery(Arc::new(sub_query))),
    })
}

// ---------------------------------------------------------------------------
// Logical
// ---------------------------------------------------------------------------

/// `lhs AND rhs`
#[must_use]
pub fn and(lhs: impl Into<Expr<Bool>>, rhs: impl Into<Expr<Bool>>) -> Expr<Bool> {
    binary::<Bool, Bool, Bool>(lhs, "AND", rhs)
}

/// `lhs OR rhs`
#[must_use]
pub fn or(lhs: impl Into<Expr<Bool>>, rhs: impl Into<Expr<Bool>>) -> Expr<Bool> {
    binary::<Bool, Bool, Bool>(lhs, "OR", rhs)
}

/// `NOT expr`
#[must_use]
pub fn not(expr: impl Into<Expr<Bool>>) -> Expr<Bool> {
    prefix::<Bool, Bool>("NOT", expr)
}

// ---------------------------------------------------------------------------
// Arithmetic and bitwise
// ---------------------------------------------------------------------------

/// `lhs + rhs`
#[must_use]
pub fn add<C: Numeric>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<C> {
    binary::<C, C, C>(lhs, "+", rhs)
}

/// `lhs - rhs`
#[must_use]
pub fn sub<C: Numeric>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<C> {
    binary::<C, C, C>(lhs, "-", rhs)
}

/// `lhs * rhs`
#[must_use]
pub fn mul<C: Numeric>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<C> {
    binary::<C, C, C>(lhs, "*", rhs)
}

/// `lhs / rhs`
#[must_use]
pub fn div<C: Numeric>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<C> {
    binary::<C, C, C>(lhs, "/", rhs)
}

/// `lhs % rhs`
#[must_use]
pub fn modulo<C: Numeric>(lhs: impl Into<Expr<C>>, rhs: impl Into<Expr<C>>) -> Expr<C> {
    binary::<C, C, C>(lhs, "%", rhs)
}

/// `lhs & rhs`
#[must_use]
pub fn bit_and(lhs: impl Into<Expr<Integer>>, rhs: impl Into<Expr<Integer>>) -> Expr<Integer> {
    binary::<Integer, Integer, Integer>(lhs, "&", rhs)
}

/// `lhs | rhs`
#[must_use]
pub fn bit_or(lhs: impl Into<Expr<Integer>>, rhs: impl Into<Expr<Integer>>) -> Expr<Integer> {
    binary::<Integer, Integer, Integer>(lhs, "|", rhs)
}

/// `lhs # rhs` (PostgreSQL spelling of XOR)
#[must_use]
pub fn bit_xor(lhs: impl Into<Expr<Integer>>, rhs: impl Into<Expr<Integer>>) -> Expr<Integer> {
    binary::<Integer, Integer, Integer>(lhs, "#", rhs)
}

/// `lhs << rhs`
#[must_use]
pub fn shl(lhs: impl Into<Expr<Integer>>, rhs: impl Into<Expr<Integer>>) -> Expr<Integer> {
    binary::<Integer, Integer, Integer>(lhs, "<<", rhs)
}

/// `lhs >> rhs`
#[must_use]
pub fn shr(lhs: impl Into<Expr<Integer>>, rhs: impl Into<Expr<Integer>>) -> Expr<Integer> {
    binary::<Integer, Integer, Integer>(lhs, ">>", rhs)
}

/// `~expr`
#[must_use]
pub fn bit_not(expr: impl Into<Expr<Integer>>) -> Expr<Integer> {
    prefix::<Integer, Integer>("~", expr)
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// `lhs || rhs`
#[must_use]
pub fn concat(lhs: impl Into<Expr<Text>>, rhs: impl Into<Expr<Text>>) -> Expr<Text> {
    binary::<Text, Text, Text>(lhs, "||", rhs)
}

/// `expr LIKE pattern`
#[must_use]
pub fn like(expr: impl Into<Expr<Text>>, pattern: impl Into<Expr<Text>>) -> Expr<Bool> {
    binary::<Text, Text, Bool>(expr, "LIKE", pattern)
}

/// `expr NOT LIKE pattern`
#[must_use]
pub fn not_like(expr: impl Into<Expr<Text>>, pattern: impl Into<Expr<Text>>) -> Expr<Bool> {
    binary::<Text, Text, Bool>(expr, "NOT LIKE", pattern)
}

// ---------------------------------------------------------------------------
// Method sugar
// ---------------------------------------------------------------------------

impl<C: Category> Expr<C> {
    /// Creates an equality expression.
    #[must_use]
    pub fn eq(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        eq::<C>(self, rhs)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        not_eq::<C>(self, rhs)
    }

    /// Creates an `IS DISTINCT FROM` expression.
    #[must_use]
    pub fn is_distinct_from(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        is_distinct_from::<C>(self, rhs)
    }

    /// Creates an `IS NOT DISTINCT FROM` expression.
    #[must_use]
    pub fn is_not_distinct_from(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        is_not_distinct_from::<C>(self, rhs)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        lt::<C>(self, rhs)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        lt_eq::<C>(self, rhs)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        gt::<C>(self, rhs)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(&self, rhs: impl Into<Self>) -> Expr<Bool> {
        gt_eq::<C>(self, rhs)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(&self) -> Expr<Bool> {
        is_null::<C>(self)
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(&self) -> Expr<Bool> {
        is_not_null::<C>(self)
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<I>(&self, items: I) -> Expr<Bool>
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        in_list::<C, I>(self, items)
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list<I>(&self, items: I) -> Expr<Bool>
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        not_in_list::<C, I>(self, items)
    }
}

impl Expr<Bool> {
    /// Creates an AND expression.
    #[must_use]
    pub fn and(&self, rhs: impl Into<Self>) -> Self {
        and(self, rhs)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(&self, rhs: impl Into<Self>) -> Self {
        or(self, rhs)
    }

    /// Negates the expression with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Self {
        not(self)
    }
}

impl<C: Numeric> Expr<C> {
    /// Creates an addition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: impl Into<Self>) -> Self {
        add::<C>(self, rhs)
    }

    /// Creates a subtraction.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, rhs: impl Into<Self>) -> Self {
        sub::<C>(self, rhs)
    }

    /// Creates a multiplication.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, rhs: impl Into<Self>) -> Self {
        mul::<C>(self, rhs)
    }

    /// Creates a division.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn div(&self, rhs: impl Into<Self>) -> Self {
        div::<C>(self, rhs)
    }

    /// Creates a modulo expression.
    #[must_use]
    pub fn modulo(&self, rhs: impl Into<Self>) -> Self {
        modulo::<C>(self, rhs)
    }
}

impl Expr<Integer> {
    /// Creates a bitwise AND.
    #[must_use]
    pub fn bit_and(&self, rhs: impl Into<Self>) -> Self {
        bit_and(self, rhs)
    }

    /// Creates a bitwise OR.
    #[must_use]
    pub fn bit_or(&self, rhs: impl Into<Self>) -> Self {
        bit_or(self, rhs)
    }

    /// Creates a bitwise XOR.
    #[must_use]
    pub fn bit_xor(&self, rhs: impl Into<Self>) -> Self {
        bit_xor(self, rhs)
    }

    /// Creates a left shift.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn shl(&self, rhs: impl Into<Self>) -> Self {
        shl(self, rhs)
    }

    /// Creates a right shift.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn shr(&self, rhs: impl Into<Self>) -> Self {
        shr(self, rhs)
    }

    /// Inverts every bit.
    #[must_use]
    pub fn bit_not(&self) -> Self {
        bit_not(self)
    }
}

impl Expr<Text> {
    /// Creates a `||` concatenation.
    #[must_use]
    pub fn concat(&self, rhs: impl Into<Self>) -> Self {
        concat(self, rhs)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(&self, pattern: impl Into<Self>) -> Expr<Bool> {
        like(self, pattern)
    }

    /// Creates a NOT LIKE expression.
    #[must_use]
    pub fn not_like(&self, pattern: impl Into<Self>) -> Expr<Bool> {
        not_like(self, pattern)
    }
}
