//! End-to-end scenarios: trees as a transform layer would hand them over,
//! resolved in sequence against one session.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use calc_eval::{init_tracing, BinaryOp, EvalError, Expr, Session, SymbolRef, Value};
use pretty_assertions::assert_eq;

fn lit(text: &str) -> Expr {
    Expr::literal_from_source(text).unwrap()
}

fn op(name: &str, left: Expr, right: Expr) -> Expr {
    Expr::binary(name.parse::<BinaryOp>().unwrap(), left, right)
}

fn check(session: &mut Session, expr: &Expr, expected: impl Into<Value>) {
    let result = session.resolve(expr).unwrap();
    assert!(
        result.equals(expected),
        "`{expr}` resolved to {result}"
    );
}

#[test]
fn literal_forms() {
    init_tracing();
    let mut session = Session::new();

    check(&mut session, &lit("123"), 123);
    check(&mut session, &lit("999"), 999);
    check(&mut session, &lit("1.4e3"), 1.4e3);
    check(&mut session, &lit("123.4e-3"), 123.4e-3);
    check(&mut session, &lit("1.2"), 1.2);
    check(&mut session, &lit("0.4"), 0.4);
    check(&mut session, &lit("123.456"), 123.456);
    check(&mut session, &lit("123234.45"), 123_234.45);
    check(&mut session, &lit("0x456"), 0x456);
    check(&mut session, &lit("0xFF"), 255);
    check(&mut session, &lit("0o77"), 63);
    check(&mut session, &lit("0o23"), 0o23);

    // Literals never touch the scope
    assert!(session.scope().is_empty());
}

#[test]
fn arithmetic() {
    let mut session = Session::new();

    check(&mut session, &op("add", lit("4"), lit("3")), 7);
    check(&mut session, &op("sub", lit("7"), lit("3")), 4);
    check(&mut session, &op("mul", lit("7"), lit("3")), 21);
    check(&mut session, &op("div", lit("7"), lit("2")), 3.5);
    check(&mut session, &op("eq", lit("4"), lit("4")), true);
    check(&mut session, &op("eq", lit("0xFF"), lit("255")), true);
    check(&mut session, &op("eq", lit("0o10"), lit("9")), false);
}

#[test]
fn symbols_persist_across_statements() {
    let mut session = Session::new();
    let x = || Expr::symbol("x");

    check(
        &mut session,
        &Expr::assign(SymbolRef::new("x"), lit("10")),
        10,
    );
    check(&mut session, &x(), 10);
    check(&mut session, &op("mul", x(), lit("2")), 20);
    check(&mut session, &op("mul", x(), lit("0x2")), 20);

    assert_eq!(
        session.resolve(&Expr::symbol("abc")),
        Err(EvalError::UnboundSymbol {
            name: "abc".to_string()
        })
    );

    // A failed lookup leaves earlier bindings intact
    check(&mut session, &x(), 10);
    assert_eq!(session.resolved_count(), 6);
}

#[test]
fn grouped_expression() {
    // (1 + 2) * 3: grouping is structural, no node of its own
    let mut session = Session::new();
    let expr = op("mul", op("add", lit("1"), lit("2")), lit("3"));
    assert_eq!(expr.to_string(), "(1 + 2) * 3");
    check(&mut session, &expr, 9);
}

#[test]
fn equality_of_assignment_results() {
    let mut session = Session::new();
    let expr = op(
        "eq",
        Expr::assign(SymbolRef::new("a"), lit("0o10")),
        Expr::assign(SymbolRef::new("b"), lit("8")),
    );
    check(&mut session, &expr, true);
    assert_eq!(
        session.scope().bindings(),
        vec![("a", Value::new(8.0)), ("b", Value::new(8.0))]
    );
}
