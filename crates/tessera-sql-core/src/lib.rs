//! # tessera-sql-core
//!
//! Typed SQL expression trees and the serializer that turns them into SQL
//! text.
//!
//! This crate provides:
//! - Expressions tagged with their result category (`Expr<Bool>`,
//!   `Expr<Integer>`, ...) so that `a AND 1` or `name + 2` do not compile
//! - Operator constructors and a CASE builder
//! - Tables and composable joins with an ordered column list
//! - A serializer that parenthesizes every composite expression and
//!   collects literal values as bind parameters
//!
//! ## Building expressions
//!
//! ```rust
//! use tessera_sql_core::builder::{to_sql, StatementKind};
//! use tessera_sql_core::schema::{integer_column, Table};
//! use tessera_sql_core::expr::Integer;
//!
//! let t = Table::new("schema", "table", "", integer_column("intCol1"));
//! let col = t.column::<Integer>("intCol1").unwrap();
//!
//! let (sql, params) = to_sql(&col.expr().add(1).gt(10), StatementKind::Select).unwrap();
//! assert_eq!(sql, r#"((table."intCol1" + ?) > ?)"#);
//! assert_eq!(params.len(), 2);
//! ```
//!
//! ## Joins
//!
//! ```rust
//! use tessera_sql_core::builder::{to_sql, StatementKind};
//! use tessera_sql_core::schema::{integer_column, Join, JoinType, Relation, Table};
//!
//! let c1 = integer_column("intCol1");
//! let c2 = integer_column("intCol2");
//! let on = c1.expr().eq(&c2);
//! let t1 = Table::new("schema", "table", "", c1);
//! let t2 = Table::new("schema", "table2", "", c2);
//!
//! let join = Join::new(t1, t2, JoinType::Inner, on);
//! let (sql, _) = to_sql(&join, StatementKind::Select).unwrap();
//!
//! assert_eq!(sql, "schema.table\nINNER JOIN schema.table2 ON (\"intCol1\" = \"intCol2\")");
//! assert_eq!(join.schema_name(), "schema");
//! assert_eq!(join.table_name(), "");
//! ```

pub mod builder;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod schema;
pub mod statement;

pub use builder::{SerializeOptions, Serializable, SqlBuilder, SqlValue, StatementKind};
pub use error::{Result, SerializeError};
pub use expr::{case, case_on, raw, CaseOperator, Expr};
pub use schema::{Column, Join, JoinType, Relation, RelationExt, Table};
pub use statement::{Select, Statement};
