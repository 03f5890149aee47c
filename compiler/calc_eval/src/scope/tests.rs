use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_scope_set_get() {
    let mut scope = Scope::new();
    let stored = scope.set_symbol("x", Value::new(42.0));
    assert_eq!(stored, Value::new(42.0));
    assert_eq!(scope.get_symbol("x"), Some(Value::new(42.0)));
}

#[test]
fn test_scope_miss_is_none() {
    let scope = Scope::new();
    assert_eq!(scope.get_symbol("never_defined"), None);
    assert!(!scope.contains("never_defined"));
}

#[test]
fn test_scope_zero_is_bound() {
    // A falsy value must still read back as a binding
    let mut scope = Scope::new();
    scope.set_symbol("zero", Value::new(0.0));
    scope.set_symbol("no", Value::FALSE);
    assert_eq!(scope.get_symbol("zero"), Some(Value::new(0.0)));
    assert_eq!(scope.get_symbol("no"), Some(Value::FALSE));
    assert!(scope.contains("zero"));
}

#[test]
fn test_scope_last_write_wins() {
    let mut scope = Scope::new();
    scope.set_symbol("x", Value::new(1.0));
    scope.set_symbol("x", Value::new(2.0));
    assert_eq!(scope.get_symbol("x"), Some(Value::new(2.0)));
    assert_eq!(scope.len(), 1);
}

#[test]
fn test_scope_len_and_empty() {
    let mut scope = Scope::new();
    assert!(scope.is_empty());
    scope.set_symbol("a", Value::new(1.0));
    scope.set_symbol("b", Value::new(2.0));
    assert!(!scope.is_empty());
    assert_eq!(scope.len(), 2);
}

#[test]
fn test_scope_bindings_sorted() {
    let mut scope = Scope::new();
    scope.set_symbol("y", Value::new(2.0));
    scope.set_symbol("abc", Value::new(999.0));
    scope.set_symbol("x", Value::new(10.0));
    assert_eq!(
        scope.bindings(),
        vec![
            ("abc", Value::new(999.0)),
            ("x", Value::new(10.0)),
            ("y", Value::new(2.0)),
        ]
    );
}

#[test]
fn test_independent_scopes() {
    let mut first = Scope::new();
    let second = Scope::new();
    first.set_symbol("x", Value::new(10.0));
    assert_eq!(second.get_symbol("x"), None);
}
