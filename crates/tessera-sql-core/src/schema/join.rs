//! Join relations.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::column::ColumnRef;
use super::Relation;
use crate::builder::{SerializeOptions, Serializable, SqlBuilder, StatementKind};
use crate::error::{Result, SerializeError};
use crate::expr::{Bool, Expr};

/// SQL join kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two relations joined together.
///
/// A join is itself a [`Relation`], so joins nest: the left side renders
/// first, each joined relation on its own line.
#[derive(Debug, Clone)]
pub struct Join {
    left: Arc<dyn Relation>,
    right: Arc<dyn Relation>,
    kind: JoinType,
    on: Option<Expr<Bool>>,
    columns: Vec<ColumnRef>,
}

impl Join {
    /// Joins `left` and `right`.
    ///
    /// `on` is ignored for [`JoinType::Cross`]; every other kind needs it at
    /// render time.
    #[must_use]
    pub fn new(
        left: impl Relation + 'static,
        right: impl Relation + 'static,
        kind: JoinType,
        on: impl Into<Option<Expr<Bool>>>,
    ) -> Self {
        Self::from_arcs(Arc::new(left), Arc::new(right), kind, on.into())
    }

    /// Cross joins `left` and `right`.
    #[must_use]
    pub fn cross(left: impl Relation + 'static, right: impl Relation + 'static) -> Self {
        Self::new(left, right, JoinType::Cross, None)
    }

    /// Joins two shared relations.
    #[must_use]
    pub fn from_arcs(
        left: Arc<dyn Relation>,
        right: Arc<dyn Relation>,
        kind: JoinType,
        on: Option<Expr<Bool>>,
    ) -> Self {
        let columns = left
            .columns()
            .iter()
            .chain(right.columns())
            .cloned()
            .collect();
        Self {
            left,
            right,
            kind,
            on,
            columns,
        }
    }

    /// Returns the join kind.
    #[must_use]
    pub const fn kind(&self) -> JoinType {
        self.kind
    }

    /// Returns the left relation.
    #[must_use]
    pub fn left(&self) -> &dyn Relation {
        self.left.as_ref()
    }

    /// Returns the right relation.
    #[must_use]
    pub fn right(&self) -> &dyn Relation {
        self.right.as_ref()
    }

    /// Returns the join condition, if any.
    #[must_use]
    pub const fn condition(&self) -> Option<&Expr<Bool>> {
        self.on.as_ref()
    }
}

impl Relation for Join {
    fn schema_name(&self) -> &str {
        self.left.schema_name()
    }

    fn table_name(&self) -> &str {
        ""
    }

    fn columns(&self) -> &[ColumnRef] {
        &self.columns
    }

    fn is_join(&self) -> bool {
        true
    }
}

impl Serializable for Join {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        trace!(kind = %self.kind, "rendering join");

        self.left.serialize(statement, out, options)?;
        out.new_line();
        out.write_str(self.kind.as_str());

        if self.right.is_join() {
            out.write_str("(");
            self.right.serialize(statement, out, options)?;
            out.write_str(")");
        } else {
            self.right.serialize(statement, out, options)?;
        }

        if self.kind != JoinType::Cross {
            let on = self
                .on
                .as_ref()
                .ok_or(SerializeError::MissingJoinCondition { kind: self.kind })?;
            out.write_str("ON");
            on.serialize(statement, out, options.for_child())?;
        }
        Ok(())
    }
}
