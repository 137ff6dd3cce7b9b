//! Serialization error types.

use thiserror::Error;

use crate::schema::JoinType;

/// Errors raised while rendering an expression, relation or statement.
///
/// The first failure aborts rendering. Whatever text the builder holds at
/// that point is unusable and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// A CASE expression was absent when it had to be rendered.
    #[error("case expression is nil")]
    NilCase,

    /// A CASE expression has no WHEN/THEN pair.
    #[error("invalid case expression: at least one WHEN/THEN pair is required")]
    MissingBranch,

    /// A CASE expression has a different number of WHEN and THEN operands.
    #[error("case expression WHEN/THEN count mismatch: {when} WHEN, {then} THEN")]
    BranchCountMismatch {
        /// Number of WHEN operands.
        when: usize,
        /// Number of THEN operands.
        then: usize,
    },

    /// A join other than CROSS JOIN has no ON condition.
    #[error("{kind} requires an ON condition")]
    MissingJoinCondition {
        /// The join kind that was missing its condition.
        kind: JoinType,
    },

    /// A SELECT statement has nothing to project.
    #[error("SELECT requires at least one projection")]
    EmptyProjection,

    /// An IN or NOT IN list has no items.
    #[error("{} requires at least one item", in_keyword(.negated))]
    EmptyInList {
        /// Whether the list belongs to NOT IN.
        negated: bool,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn in_keyword(negated: &bool) -> &'static str {
    if *negated {
        "NOT IN"
    } else {
        "IN"
    }
}

/// Result type alias for serialization.
pub type Result<T> = std::result::Result<T, SerializeError>;
