//! SQL Dialect support.
//!
//! Dialects differ in how bind parameters are written and how identifiers
//! are quoted. The serializer asks the active dialect for both.

mod generic;
mod postgres;

use serde::{Deserialize, Serialize};

pub use generic::GenericDialect;
pub use postgres::PostgresDialect;

/// Trait for SQL dialect-specific rendering.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the placeholder for the parameter at `index` (1-based).
    fn placeholder(&self, index: usize) -> String;

    /// Quotes an identifier, doubling embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }
}

/// Dialect selector for application configuration.
///
/// ```rust
/// use tessera_sql_core::dialect::DialectKind;
///
/// let kind: DialectKind = serde_json::from_str("\"postgres\"").unwrap();
/// assert_eq!(kind.dialect().name(), "postgres");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// `?` placeholders.
    #[default]
    Generic,
    /// `$n` placeholders.
    Postgres,
}

impl DialectKind {
    /// Returns the dialect implementation for this kind.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GenericDialect,
            Self::Postgres => &PostgresDialect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_escapes_quotes() {
        assert_eq!(GenericDialect.quote_identifier("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn test_dialect_kind_from_config() {
        let kind: DialectKind = serde_json::from_str("\"generic\"").unwrap();
        assert_eq!(kind, DialectKind::Generic);
        assert_eq!(kind.dialect().placeholder(3), "?");

        let kind: DialectKind = serde_json::from_str("\"postgres\"").unwrap();
        assert_eq!(kind.dialect().placeholder(3), "$3");
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"postgres\"");
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        assert!(serde_json::from_str::<DialectKind>("\"oracle\"").is_err());
    }
}
