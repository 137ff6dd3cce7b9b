#![allow(dead_code)]

use tessera_sql_core::builder::{debug_sql, to_sql, SqlBuilder};
use tessera_sql_core::schema::{integer_column, string_column, Table};
use tessera_sql_core::{Serializable, SerializeError, SerializeOptions, SqlValue, StatementKind};

/// Renders `node` for a SELECT and returns the SQL with placeholders.
pub fn render<S: Serializable + ?Sized>(node: &S) -> (String, Vec<SqlValue>) {
    to_sql(node, StatementKind::Select)
        .unwrap_or_else(|e| panic!("Failed to serialize: {e}"))
}

/// Renders `node` for a SELECT with literal values inlined.
pub fn render_inline<S: Serializable + ?Sized>(node: &S) -> String {
    debug_sql(node, StatementKind::Select)
        .unwrap_or_else(|e| panic!("Failed to serialize: {e}"))
}

/// Renders `node` with explicit options into a fresh builder.
pub fn render_with<S: Serializable + ?Sized>(
    node: &S,
    statement: StatementKind,
    options: SerializeOptions,
) -> String {
    let mut out = SqlBuilder::new(statement).inline_values(true);
    node.serialize(statement, &mut out, options)
        .unwrap_or_else(|e| panic!("Failed to serialize: {e}"));
    out.finish().0
}

pub fn render_err<S: Serializable + ?Sized>(node: &S) -> SerializeError {
    match to_sql(node, StatementKind::Select) {
        Ok((sql, _)) => panic!("Expected serialization error, got: {sql}"),
        Err(e) => e,
    }
}

/// Asserts that `node` renders (inlined) to `expected`.
pub fn assert_serialize<S: Serializable + ?Sized>(node: &S, expected: &str) {
    let sql = render_inline(node);
    assert_eq!(sql, expected, "\n  Expected: {expected}\n  Got:      {sql}");
}

pub fn users() -> Table {
    Table::new(
        "public",
        "users",
        "",
        (integer_column("id"), string_column("name"), integer_column("age")),
    )
}

pub fn orders() -> Table {
    Table::new(
        "public",
        "orders",
        "o",
        (integer_column("id"), integer_column("user_id"), integer_column("total")),
    )
}
