//! Tests for SELECT statements built from relations.

mod common;
use common::*;

use tessera_sql_core::dialect::{DialectKind, PostgresDialect};
use tessera_sql_core::expr::{case, raw, Integer, Text};
use tessera_sql_core::schema::RelationExt;
use tessera_sql_core::{Select, SerializeError, SqlValue};

#[test]
fn select_projects_relation_columns_in_order() {
    let (sql, params) = Select::from_relation(users()).build().unwrap();
    assert_eq!(
        sql,
        "SELECT users.id, users.name, users.age\nFROM public.users"
    );
    assert!(params.is_empty());
}

#[test]
fn select_from_join_projects_both_sides() {
    let users = users();
    let orders = orders();
    let on = users
        .column::<Integer>("id")
        .unwrap()
        .expr()
        .eq(&orders.column::<Integer>("user_id").unwrap());
    let sql = Select::from_relation(users.left_join(orders, on))
        .debug_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT users.id, users.name, users.age, o.id, o.user_id, o.total\n\
         FROM public.users\n\
         LEFT JOIN public.orders AS o ON (users.id = o.user_id)"
    );
}

#[test]
fn where_condition_is_not_wrapped() {
    let users = users();
    let age = users.column::<Integer>("age").unwrap();
    let name = users.column::<Text>("name").unwrap();
    let sql = Select::new(vec![])
        .project::<Text>(&name)
        .from(users)
        .where_clause(age.expr().gt_eq(18))
        .debug_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT users.name\nFROM public.users\nWHERE users.age >= 18"
    );
}

#[test]
fn case_projection() {
    let users = users();
    let age = users.column::<Integer>("age").unwrap();
    let bucket = case::<Text>()
        .when(age.expr().lt(18))
        .then("minor")
        .else_("adult");
    let sql = Select::new(vec![])
        .project::<Text>(bucket)
        .from(users)
        .debug_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT (CASE WHEN users.age < 18 THEN 'minor' ELSE 'adult' END)\nFROM public.users"
    );
}

#[test]
fn dialect_from_configuration() {
    let kind: DialectKind = serde_json::from_str("\"postgres\"").unwrap();
    let users = users();
    let age = users.column::<Integer>("age").unwrap();
    let (sql, params) = Select::new(vec![raw("count(*)")])
        .from(users)
        .where_clause(age.expr().gt(18).and(age.expr().lt(65)))
        .build_with_dialect(kind.dialect())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT count(*)\nFROM public.users\nWHERE (users.age > $1) AND (users.age < $2)"
    );
    assert_eq!(params, vec![SqlValue::Int(18), SqlValue::Int(65)]);

    let default: DialectKind = serde_json::from_str("\"generic\"").unwrap();
    assert_eq!(default, DialectKind::default());
    assert!(serde_json::from_str::<DialectKind>("\"oracle\"").is_err());
}

#[test]
fn postgres_numbering_spans_subqueries() {
    let users = users();
    let orders = orders();
    let user_id = users.column::<Integer>("id").unwrap();
    let sub = Select::new(vec![raw("1")])
        .from(orders.clone())
        .where_clause(
            orders
                .column::<Integer>("user_id")
                .unwrap()
                .expr()
                .eq(&user_id)
                .and(orders.column::<Integer>("total").unwrap().expr().gt(50)),
        );
    let (sql, params) = Select::new(vec![user_id.expr().erase()])
        .from(users)
        .where_clause(user_id.expr().gt(10).and(tessera_sql_core::expr::operators::exists(sub)))
        .build_with_dialect(&PostgresDialect)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT users.id\n\
         FROM public.users\n\
         WHERE (users.id > $1) AND (EXISTS (SELECT 1\n\
         FROM public.orders AS o\n\
         WHERE (o.user_id = users.id) AND (o.total > $2)))"
    );
    assert_eq!(params, vec![SqlValue::Int(10), SqlValue::Int(50)]);
}

#[test]
fn empty_projection_is_an_error() {
    let err = Select::new(vec![]).from(users()).build().unwrap_err();
    assert_eq!(err, SerializeError::EmptyProjection);
    assert_eq!(render_err(&Select::new(vec![])), SerializeError::EmptyProjection);
}
