//! Result categories.
//!
//! Each expression carries its result category as a zero-sized marker type.
//! Operator constructors are bounded on these markers, so combining
//! incompatible expressions is a compile error rather than bad SQL.

use std::fmt;

/// Runtime tag of a result category, used for column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// BOOLEAN.
    Bool,
    /// Integer types.
    Integer,
    /// Floating point and decimal types.
    Float,
    /// Character types.
    Text,
    /// DATE, TIME, TIMESTAMP.
    DateTime,
    /// Anything else.
    Any,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::DateTime => "date-time",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Bool {}
    impl Sealed for super::Integer {}
    impl Sealed for super::Float {}
    impl Sealed for super::Text {}
    impl Sealed for super::DateTime {}
    impl Sealed for super::Any {}
}

/// Marker trait for result categories. Sealed: the set is closed.
pub trait Category: sealed::Sealed + 'static {
    /// The runtime tag for this category.
    const TYPE: ColumnType;
}

/// Categories that support arithmetic.
pub trait Numeric: Category {}

/// Boolean result.
#[derive(Debug, Clone, Copy)]
pub struct Bool;

/// Integer result.
#[derive(Debug, Clone, Copy)]
pub struct Integer;

/// Floating point result.
#[derive(Debug, Clone, Copy)]
pub struct Float;

/// String result.
#[derive(Debug, Clone, Copy)]
pub struct Text;

/// Date or timestamp result.
#[derive(Debug, Clone, Copy)]
pub struct DateTime;

/// Result of unknown category (raw SQL, mixed projections).
#[derive(Debug, Clone, Copy)]
pub struct Any;

impl Category for Bool {
    const TYPE: ColumnType = ColumnType::Bool;
}

impl Category for Integer {
    const TYPE: ColumnType = ColumnType::Integer;
}

impl Category for Float {
    const TYPE: ColumnType = ColumnType::Float;
}

impl Category for Text {
    const TYPE: ColumnType = ColumnType::Text;
}

impl Category for DateTime {
    const TYPE: ColumnType = ColumnType::DateTime;
}

impl Category for Any {
    const TYPE: ColumnType = ColumnType::Any;
}

impl Numeric for Integer {}
impl Numeric for Float {}
