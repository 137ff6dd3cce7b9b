//! SQL text builder.
//!
//! Every expression, relation and statement renders itself into a
//! [`SqlBuilder`] through the [`Serializable`] trait. One builder belongs to
//! exactly one top-level serialization call.
//!
//! # Example
//!
//! ```rust
//! use tessera_sql_core::builder::{to_sql, StatementKind};
//! use tessera_sql_core::schema::integer_column;
//!
//! let expr = integer_column("intCol1").expr().eq(&integer_column("intCol2"));
//! let (sql, params) = to_sql(&expr, StatementKind::Select).unwrap();
//!
//! assert_eq!(sql, r#"("intCol1" = "intCol2")"#);
//! assert!(params.is_empty());
//! ```

pub mod value;

use std::fmt;
use std::ops::BitOr;

use crate::dialect::{Dialect, GenericDialect};
use crate::error::Result;

pub use value::{SqlValue, ToSqlValue};

/// The kind of statement being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// SELECT statement.
    Select,
    /// INSERT statement.
    Insert,
    /// UPDATE statement.
    Update,
    /// DELETE statement.
    Delete,
}

impl StatementKind {
    /// Returns the leading keyword of the statement.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call rendering flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    no_wrap: bool,
    skip_qualifier: bool,
}

impl SerializeOptions {
    /// No flags set.
    pub const NONE: Self = Self {
        no_wrap: false,
        skip_qualifier: false,
    };

    /// Suppress the outer parentheses of a composite expression.
    pub const NO_WRAP: Self = Self {
        no_wrap: true,
        skip_qualifier: false,
    };

    /// Render column references without their table qualifier.
    pub const SKIP_QUALIFIER: Self = Self {
        no_wrap: false,
        skip_qualifier: true,
    };

    /// Returns whether outer parentheses are suppressed.
    #[must_use]
    pub const fn no_wrap(self) -> bool {
        self.no_wrap
    }

    /// Returns whether column qualifiers are suppressed.
    #[must_use]
    pub const fn skip_qualifier(self) -> bool {
        self.skip_qualifier
    }

    /// Combines two option sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            no_wrap: self.no_wrap || other.no_wrap,
            skip_qualifier: self.skip_qualifier || other.skip_qualifier,
        }
    }

    /// The options handed to children of a composite node.
    ///
    /// Wrapping is decided per node, the qualifier rule is inherited.
    #[must_use]
    pub(crate) const fn for_child(self) -> Self {
        Self {
            no_wrap: false,
            skip_qualifier: self.skip_qualifier,
        }
    }
}

impl BitOr for SerializeOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Anything that can render itself as SQL text.
pub trait Serializable {
    /// Appends this node's SQL to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error when the node, or one of its children, is
    /// structurally invalid.
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()>;
}

impl<T: Serializable + ?Sized> Serializable for &T {
    fn serialize(
        &self,
        statement: StatementKind,
        out: &mut SqlBuilder,
        options: SerializeOptions,
    ) -> Result<()> {
        (**self).serialize(statement, out, options)
    }
}

/// Text accumulation context for one serialization call.
pub struct SqlBuilder {
    sql: String,
    params: Vec<SqlValue>,
    statement: StatementKind,
    dialect: &'static dyn Dialect,
    inline_values: bool,
}

impl SqlBuilder {
    /// Creates an empty builder for a statement of the given kind.
    #[must_use]
    pub fn new(statement: StatementKind) -> Self {
        Self {
            sql: String::new(),
            params: vec![],
            statement,
            dialect: &GenericDialect,
            inline_values: false,
        }
    }

    /// Uses `dialect` for placeholders and identifier quoting.
    #[must_use]
    pub fn with_dialect(mut self, dialect: &'static dyn Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Renders literal values inline instead of as placeholders.
    ///
    /// **Warning**: only meant for logging and debugging.
    #[must_use]
    pub const fn inline_values(mut self, inline: bool) -> Self {
        self.inline_values = inline;
        self
    }

    /// Renders `node` at the top level, for the statement kind this builder
    /// was created for.
    ///
    /// # Errors
    ///
    /// Propagates the first serialization failure.
    pub fn append<S: Serializable + ?Sized>(&mut self, node: &S) -> Result<()> {
        node.serialize(self.statement, self, SerializeOptions::NONE)
    }

    /// Returns the active dialect.
    #[must_use]
    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    /// Appends a token, separating it from the previous one with a space
    /// where needed.
    pub fn write_str(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        if self.needs_space_before(token) {
            self.sql.push(' ');
        }
        self.sql.push_str(token);
    }

    /// Appends an identifier, quoted when it is not a plain lower-case name.
    ///
    /// An empty name writes nothing.
    pub fn write_identifier(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if needs_quoting(name) {
            let quoted = self.dialect.quote_identifier(name);
            self.write_str(&quoted);
        } else {
            self.write_str(name);
        }
    }

    /// Appends `schema.name`, or just `name` when the schema is empty.
    /// Nothing is written when `name` is empty.
    pub fn write_qualified_name(&mut self, schema: &str, name: &str) {
        if name.is_empty() {
            return;
        }
        if !schema.is_empty() {
            self.write_identifier(schema);
            self.write_str(".");
        }
        self.write_identifier(name);
    }

    /// Appends a literal value as a placeholder, or inline in debug mode.
    pub fn write_value(&mut self, value: &SqlValue) {
        if self.inline_values {
            self.write_str(&value.to_sql_inline());
        } else {
            self.params.push(value.clone());
            let placeholder = self.dialect.placeholder(self.params.len());
            self.write_str(&placeholder);
        }
    }

    /// Starts a new line.
    pub fn new_line(&mut self) {
        self.sql.push('\n');
    }

    /// Returns the SQL written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the parameters collected so far.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Consumes the builder and returns the SQL and parameters.
    #[must_use]
    pub fn finish(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }

    fn needs_space_before(&self, token: &str) -> bool {
        let Some(last) = self.sql.chars().last() else {
            return false;
        };
        if last.is_whitespace() || last == '(' || last == '.' {
            return false;
        }
        !token.starts_with([')', ',', '.']) && !token.starts_with(char::is_whitespace)
    }
}

impl fmt::Debug for SqlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlBuilder")
            .field("sql", &self.sql)
            .field("params", &self.params)
            .field("statement", &self.statement)
            .field("dialect", &self.dialect.name())
            .field("inline_values", &self.inline_values)
            .finish()
    }
}

/// Plain identifiers are `[a-z_][a-z0-9_]*`; anything else gets quoted.
fn needs_quoting(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !(first.is_ascii_lowercase() || first == '_') {
        return true;
    }
    !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Renders `node` into a fresh builder and returns the SQL and parameters.
///
/// # Errors
///
/// Propagates the first serialization failure.
pub fn to_sql<S: Serializable + ?Sized>(
    node: &S,
    statement: StatementKind,
) -> Result<(String, Vec<SqlValue>)> {
    let mut out = SqlBuilder::new(statement);
    out.append(node)?;
    Ok(out.finish())
}

/// Renders `node` with literal values inlined.
///
/// # Errors
///
/// Propagates the first serialization failure.
pub fn debug_sql<S: Serializable + ?Sized>(node: &S, statement: StatementKind) -> Result<String> {
    let mut out = SqlBuilder::new(statement).inline_values(true);
    out.append(node)?;
    Ok(out.finish().0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::PostgresDialect;

    #[test]
    fn test_token_spacing() {
        let mut out = SqlBuilder::new(StatementKind::Select);
        out.write_str("(");
        out.write_str("a");
        out.write_str("=");
        out.write_str("b");
        out.write_str(")");
        out.write_str(",");
        out.write_str("c");
        assert_eq!(out.sql(), "(a = b), c");
    }

    #[test]
    fn test_no_space_after_newline_or_dot() {
        let mut out = SqlBuilder::new(StatementKind::Select);
        out.write_qualified_name("schema", "table");
        out.new_line();
        out.write_str("INNER JOIN");
        assert_eq!(out.sql(), "schema.table\nINNER JOIN");
    }

    #[test]
    fn test_identifier_quoting() {
        let mut out = SqlBuilder::new(StatementKind::Select);
        out.write_identifier("plain_name1");
        out.write_identifier("intCol");
        out.write_identifier("with space");
        out.write_identifier("1st");
        assert_eq!(out.sql(), "plain_name1 \"intCol\" \"with space\" \"1st\"");
    }

    #[test]
    fn test_empty_names_write_nothing() {
        let mut out = SqlBuilder::new(StatementKind::Select);
        out.write_qualified_name("schema", "");
        out.write_identifier("");
        assert_eq!(out.sql(), "");

        out.write_str("FROM");
        out.write_qualified_name("", "");
        out.write_str("x");
        assert_eq!(out.sql(), "FROM x");
    }

    #[test]
    fn test_append_uses_builder_statement_kind() {
        let mut column = crate::schema::integer_column("id").column_ref().clone();
        column.bind("users");

        let mut out = SqlBuilder::new(StatementKind::Insert);
        out.append(&column).unwrap();
        assert_eq!(out.sql(), "id");

        let mut out = SqlBuilder::new(StatementKind::Update);
        out.append(&column).unwrap();
        assert_eq!(out.sql(), "users.id");
    }

    #[test]
    fn test_empty_schema_is_omitted() {
        let mut out = SqlBuilder::new(StatementKind::Select);
        out.write_qualified_name("", "users");
        assert_eq!(out.sql(), "users");
    }

    #[test]
    fn test_values_become_placeholders() {
        let mut out = SqlBuilder::new(StatementKind::Select).with_dialect(&PostgresDialect);
        out.write_value(&SqlValue::Int(1));
        out.write_value(&SqlValue::Text(String::from("x")));
        let (sql, params) = out.finish();
        assert_eq!(sql, "$1 $2");
        assert_eq!(params, vec![SqlValue::Int(1), SqlValue::Text(String::from("x"))]);
    }

    #[test]
    fn test_inline_values() {
        let mut out = SqlBuilder::new(StatementKind::Select).inline_values(true);
        out.write_value(&SqlValue::Text(String::from("it's")));
        assert_eq!(out.sql(), "'it''s'");
        assert!(out.params().is_empty());
    }

    #[test]
    fn test_options_union() {
        let both = SerializeOptions::NO_WRAP | SerializeOptions::SKIP_QUALIFIER;
        assert!(both.no_wrap());
        assert!(both.skip_qualifier());
        assert!(!both.for_child().no_wrap());
        assert!(both.for_child().skip_qualifier());
        assert_eq!(SerializeOptions::default(), SerializeOptions::NONE);
    }
}
