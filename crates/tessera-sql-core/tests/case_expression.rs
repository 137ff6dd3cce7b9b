//! Tests for the CASE builder: rendering, deferred validation and
//! repeated serialization.

mod common;
use common::*;

use chrono::NaiveDate;
use tessera_sql_core::expr::{case, case_on, CaseOperator, DateTime, Expr, Integer, Text};
use tessera_sql_core::schema::{date_time_column, integer_column, string_column};
use tessera_sql_core::{SerializeError, SqlValue};

fn grade() -> CaseOperator<Text> {
    let score = integer_column("score");
    case::<Text>()
        .when(score.expr().gt_eq(90))
        .then("A")
        .when(score.expr().gt_eq(75))
        .then("B")
        .else_("C")
}

#[test]
fn searched_case_without_subject() {
    assert_serialize(
        &grade(),
        "(CASE WHEN score >= 90 THEN 'A' WHEN score >= 75 THEN 'B' ELSE 'C' END)",
    );
}

#[test]
fn searched_case_parameters() {
    let (sql, params) = render(&grade());
    assert_eq!(
        sql,
        "(CASE WHEN score >= ? THEN ? WHEN score >= ? THEN ? ELSE ? END)"
    );
    assert_eq!(
        params,
        vec![
            SqlValue::Int(90),
            SqlValue::Text(String::from("A")),
            SqlValue::Int(75),
            SqlValue::Text(String::from("B")),
            SqlValue::Text(String::from("C")),
        ]
    );
}

#[test]
fn simple_case_with_subject() {
    let kind = string_column("kind");
    let expr = case_on::<Integer, Text>(&kind)
        .when("a")
        .then(1)
        .else_(0);
    assert_serialize(&expr, "(CASE kind WHEN 'a' THEN 1 ELSE 0 END)");
}

#[test]
fn date_results() {
    let created = date_time_column("created");
    let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let expr = case::<DateTime>()
        .when(created.expr().lt(cutoff))
        .then(cutoff)
        .else_(&created);
    assert_serialize(
        &expr,
        "(CASE WHEN created < DATE '2024-01-01' THEN DATE '2024-01-01' ELSE created END)",
    );
}

#[test]
fn serializing_twice_is_identical() {
    let expr = grade();
    let first = render(&expr);
    let second = render(&expr);
    assert_eq!(first, second);
    assert_eq!(render_inline(&expr), render_inline(&expr));
}

#[test]
fn zero_pairs_fail_every_time() {
    let empty = case::<Integer>();
    assert_eq!(render_err(&empty), SerializeError::MissingBranch);
    assert_eq!(render_err(&empty), SerializeError::MissingBranch);
    assert_eq!(render_err(&empty.else_(1)), SerializeError::MissingBranch);
}

#[test]
fn two_whens_one_then_fails_even_with_else() {
    let n = integer_column("n");
    let expr = case::<Text>()
        .when(n.expr().eq(1))
        .when(n.expr().eq(2))
        .then("x")
        .else_("y");
    assert_eq!(
        render_err(&expr),
        SerializeError::BranchCountMismatch { when: 2, then: 1 }
    );
}

#[test]
fn branches_built_across_calling_code() {
    let n = integer_column("n");
    let mut expr = case::<Integer>();
    for i in 1..=3 {
        expr = expr.when(n.expr().eq(i));
    }
    for i in 1..=3 {
        expr = expr.then(i * 10);
    }
    assert_serialize(
        &expr,
        "(CASE WHEN n = 1 THEN 10 WHEN n = 2 THEN 20 WHEN n = 3 THEN 30 END)",
    );
}

#[test]
fn absent_case_is_an_error() {
    let missing: Option<CaseOperator<Text>> = None;
    assert_eq!(render_err(&missing), SerializeError::NilCase);
    assert_serialize(
        &Some(grade()),
        "(CASE WHEN score >= 90 THEN 'A' WHEN score >= 75 THEN 'B' ELSE 'C' END)",
    );
}

#[test]
fn case_inside_comparison() {
    let expr: Expr<Text> = grade().into();
    assert_serialize(
        &expr.eq("A"),
        "((CASE WHEN score >= 90 THEN 'A' WHEN score >= 75 THEN 'B' ELSE 'C' END) = 'A')",
    );
}

#[test]
fn case_can_be_extended_after_rendering() {
    let n = integer_column("n");
    let base = case::<Integer>().when(n.expr().eq(1)).then(1);
    let snapshot = base.to_expr();
    let extended = base.when(n.expr().eq(2)).then(2);

    assert_serialize(&snapshot, "(CASE WHEN n = 1 THEN 1 END)");
    assert_serialize(&extended, "(CASE WHEN n = 1 THEN 1 WHEN n = 2 THEN 2 END)");
}
