//! Column references.

use std::fmt;
use std::marker::PhantomData;

use crate::builder::{SerializeOptions, Serializable, SqlBuilder, StatementKind};
use crate::error::Result;
use crate::expr::{Any, Bool, Category, ColumnType, DateTime, Expr, Float, Integer, Node, Text};

/// Category-erased column metadata, as stored by relations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    name: String,
    table: Option<String>,
    column_type: ColumnType,
}

impl ColumnRef {
    /// Creates an unbound column.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            table: None,
            column_type,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the relation this column is bound to.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Returns the declared result category.
    #[must_use]
    pub const fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub(crate) fn bind(&mut self, table: &str) {
        self.table = Some(String::from(table));
    }
}

impl Serializable for ColumnRef {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        // INSERT column lists never carry a qualifier.
        let qualify = !options.skip_qualifier() && statement != StatementKind::Insert;
        if let Some(table) = self.table.as_deref().filter(|t| qualify && !t.is_empty()) {
            out.write_identifier(table);
            out.write_str(".");
        }
        out.write_identifier(&self.name);
        Ok(())
    }
}

/// A column whose values have result category `C`.
pub struct Column<C> {
    inner: ColumnRef,
    _category: PhantomData<fn() -> C>,
}

impl<C: Category> Column<C> {
    /// Creates an unbound column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: ColumnRef::new(name, C::TYPE),
            _category: PhantomData,
        }
    }

    pub(crate) fn from_ref(inner: ColumnRef) -> Self {
        Self {
            inner,
            _category: PhantomData,
        }
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the name of the relation this column is bound to.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.inner.table_name()
    }

    /// Returns the category-erased metadata.
    #[must_use]
    pub const fn column_ref(&self) -> &ColumnRef {
        &self.inner
    }

    /// Returns the column as an expression.
    #[must_use]
    pub fn expr(&self) -> Expr<C> {
        Expr::from_node(Node::Column(self.inner.clone()))
    }
}

impl<C> Clone for Column<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _category: PhantomData,
        }
    }
}

impl<C> fmt::Debug for Column<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.inner).finish()
    }
}

impl<C: Category> Serializable for Column<C> {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        self.inner.serialize(statement, out, options)
    }
}

impl<C: Category> From<Column<C>> for Expr<C> {
    fn from(column: Column<C>) -> Self {
        Self::from_node(Node::Column(column.inner))
    }
}

impl<C: Category> From<&Column<C>> for Expr<C> {
    fn from(column: &Column<C>) -> Self {
        column.expr()
    }
}

impl<C> From<Column<C>> for ColumnRef {
    fn from(column: Column<C>) -> Self {
        column.inner
    }
}

/// Creates a BOOLEAN column.
#[must_use]
pub fn bool_column(name: &str) -> Column<Bool> {
    Column::new(name)
}

/// Creates an integer column.
#[must_use]
pub fn integer_column(name: &str) -> Column<Integer> {
    Column::new(name)
}

/// Creates a floating point column.
#[must_use]
pub fn float_column(name: &str) -> Column<Float> {
    Column::new(name)
}

/// Creates a character column.
#[must_use]
pub fn string_column(name: &str) -> Column<Text> {
    Column::new(name)
}

/// Creates a date/time column.
#[must_use]
pub fn date_time_column(name: &str) -> Column<DateTime> {
    Column::new(name)
}

/// Creates a column of unspecified category.
#[must_use]
pub fn column(name: &str) -> Column<Any> {
    Column::new(name)
}

/// Conversion of a column list into relation metadata.
///
/// Implemented for vectors of [`ColumnRef`] and for tuples of typed
/// columns, so a table can be declared from columns of mixed categories.
pub trait IntoColumns {
    /// Returns the columns in declaration order.
    fn into_columns(self) -> Vec<ColumnRef>;
}

impl IntoColumns for Vec<ColumnRef> {
    fn into_columns(self) -> Vec<ColumnRef> {
        self
    }
}

impl<C> IntoColumns for Column<C> {
    fn into_columns(self) -> Vec<ColumnRef> {
        vec![self.inner]
    }
}

macro_rules! impl_into_columns_tuple {
    ($($idx:tt: $col:ident),+) => {
        impl<$($col),+> IntoColumns for ($(Column<$col>,)+) {
            fn into_columns(self) -> Vec<ColumnRef> {
                vec![$(self.$idx.inner),+]
            }
        }
    };
}

impl_into_columns_tuple!(0: C0);
impl_into_columns_tuple!(0: C0, 1: C1);
impl_into_columns_tuple!(0: C0, 1: C1, 2: C2);
impl_into_columns_tuple!(0: C0, 1: C1, 2: C2, 3: C3);
impl_into_columns_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4);
impl_into_columns_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5);
impl_into_columns_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6);
impl_into_columns_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7);
