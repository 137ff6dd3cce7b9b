//! CASE expression builder.
//!
//! WHEN, THEN and ELSE operands can be added in any order; the structure is
//! only checked when the expression is rendered, and it is checked again on
//! every render.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::trace;

use super::{Bool, Category, Expr, Node};
use crate::builder::{SerializeOptions, Serializable, SqlBuilder, StatementKind};
use crate::error::{Result, SerializeError};

/// The branches of a CASE expression.
#[derive(Debug, Clone, Default)]
pub(crate) struct CaseNode {
    subject: Option<Arc<Node>>,
    when: Vec<Arc<Node>>,
    then: Vec<Arc<Node>>,
    otherwise: Option<Arc<Node>>,
}

impl CaseNode {
    fn validate(&self) -> Result<()> {
        if self.when.is_empty() || self.then.is_empty() {
            return Err(SerializeError::MissingBranch);
        }
        if self.when.len() != self.then.len() {
            return Err(SerializeError::BranchCountMismatch {
                when: self.when.len(),
                then: self.then.len(),
            });
        }
        Ok(())
    }
}

impl Serializable for CaseNode {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        self.validate()?;
        trace!(branches = self.when.len(), has_else = self.otherwise.is_some(), "rendering CASE");

        let child = options.for_child();
        let keyword_delimited = child | SerializeOptions::NO_WRAP;

        out.write_str("(CASE");
        if let Some(subject) = &self.subject {
            subject.serialize(statement, out, child)?;
        }
        for (when, then) in self.when.iter().zip(&self.then) {
            out.write_str("WHEN");
            when.serialize(statement, out, keyword_delimited)?;
            out.write_str("THEN");
            then.serialize(statement, out, keyword_delimited)?;
        }
        if let Some(otherwise) = &self.otherwise {
            out.write_str("ELSE");
            otherwise.serialize(statement, out, keyword_delimited)?;
        }
        out.write_str("END)");
        Ok(())
    }
}

/// A CASE expression under construction.
///
/// `C` is the category of the THEN/ELSE results, `S` the category of the
/// WHEN operands: `Bool` for a searched CASE, the subject's category for a
/// simple CASE.
///
/// ```rust
/// use tessera_sql_core::builder::{debug_sql, StatementKind};
/// use tessera_sql_core::expr::{case, Text};
/// use tessera_sql_core::schema::integer_column;
///
/// let score = integer_column("score");
/// let grade = case::<Text>()
///     .when(score.expr().gt_eq(90))
///     .then("A")
///     .when(score.expr().gt_eq(75))
///     .then("B")
///     .else_("C");
///
/// assert_eq!(
///     debug_sql(&grade, StatementKind::Select).unwrap(),
///     "(CASE WHEN score >= 90 THEN 'A' WHEN score >= 75 THEN 'B' ELSE 'C' END)"
/// );
/// ```
pub struct CaseOperator<C, S = Bool> {
    node: CaseNode,
    _categories: PhantomData<fn() -> (C, S)>,
}

/// Starts a searched CASE (`CASE WHEN cond THEN ...`).
#[must_use]
pub fn case<C: Category>() -> CaseOperator<C, Bool> {
    CaseOperator {
        node: CaseNode::default(),
        _categories: PhantomData,
    }
}

/// Starts a simple CASE (`CASE subject WHEN value THEN ...`).
#[must_use]
pub fn case_on<C: Category, S: Category>(subject: impl Into<Expr<S>>) -> CaseOperator<C, S> {
    CaseOperator {
        node: CaseNode {
            subject: Some(subject.into().node()),
            ..CaseNode::default()
        },
        _categories: PhantomData,
    }
}

impl<C: Category, S: Category> CaseOperator<C, S> {
    /// Appends a WHEN operand.
    #[must_use]
    pub fn when(mut self, condition: impl Into<Expr<S>>) -> Self {
        self.node.when.push(condition.into().node());
        self
    }

    /// Appends a THEN result.
    #[must_use]
    pub fn then(mut self, result: impl Into<Expr<C>>) -> Self {
        self.node.then.push(result.into().node());
        self
    }

    /// Sets the ELSE result, replacing any earlier one.
    #[must_use]
    pub fn else_(mut self, default: impl Into<Expr<C>>) -> Self {
        self.node.otherwise = Some(default.into().node());
        self
    }

    /// Number of WHEN operands added so far.
    #[must_use]
    pub fn when_count(&self) -> usize {
        self.node.when.len()
    }

    /// Number of THEN results added so far.
    #[must_use]
    pub fn then_count(&self) -> usize {
        self.node.then.len()
    }

    /// Snapshots the current branches as an expression.
    #[must_use]
    pub fn to_expr(&self) -> Expr<C> {
        Expr::from_node(Node::Case(self.node.clone()))
    }
}

impl<C, S> Clone for CaseOperator<C, S> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _categories: PhantomData,
        }
    }
}

impl<C, S> std::fmt::Debug for CaseOperator<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseOperator").field("node", &self.node).finish()
    }
}

impl<C: Category, S: Category> Serializable for CaseOperator<C, S> {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        self.node.serialize(statement, out, options)
    }
}

impl<C: Category, S: Category> Serializable for Option<CaseOperator<C, S>> {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        self.as_ref()
            .ok_or(SerializeError::NilCase)?
            .serialize(statement, out, options)
    }
}

impl<C: Category, S: Category> From<CaseOperator<C, S>> for Expr<C> {
    fn from(case: CaseOperator<C, S>) -> Self {
        Self::from_node(Node::Case(case.node))
    }
}

impl<C: Category, S: Category> From<&CaseOperator<C, S>> for Expr<C> {
    fn from(case: &CaseOperator<C, S>) -> Self {
        case.to_expr()
    }
}
