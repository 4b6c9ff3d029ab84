//! The six registered built-in functions.

use super::*;

#[test]
fn len_on_strings_and_arrays() {
    assert_integer(&eval(r#"len("")"#), 0);
    assert_integer(&eval(r#"len("four")"#), 4);
    assert_integer(&eval(r#"len("hello world")"#), 11);
    assert_integer(&eval("len([1, 2, 3])"), 3);
    assert_integer(&eval("len([])"), 0);
}

#[test]
fn len_rejects_unsupported_types_and_arities() {
    assert_error(
        &eval("len(1)"),
        "argument to 'len' not supported, got INTEGER",
    );
    assert_error(
        &eval(r#"len("one", "two")"#),
        "wrong number of arguments. got=2, want=1",
    );
}

#[test]
fn first_and_last() {
    assert_integer(&eval("first([1, 2, 3])"), 1);
    assert!(matches!(eval("first([])"), Value::Null));
    assert_error(
        &eval("first(1)"),
        "argument to 'first' must be ARRAY, got INTEGER",
    );

    assert_integer(&eval("last([1, 2, 3])"), 3);
    assert!(matches!(eval("last([])"), Value::Null));
    assert_error(
        &eval("last(1)"),
        "argument to 'last' must be ARRAY, got INTEGER",
    );
}

#[test]
fn rest_returns_a_new_array_without_the_head() {
    match eval("rest([1, 2, 3])") {
        Value::Array(elements) => {
            assert_eq!(elements.len(), 2);
            assert_integer(&elements[0], 2);
            assert_integer(&elements[1], 3);
        }
        other => panic!("expected Array, got {:?}", other),
    }
    assert!(matches!(eval("rest([])"), Value::Null));
}

#[test]
fn rest_does_not_mutate_the_original_array() {
    let input = "let a = [1, 2, 3]; let b = rest(a); a;";
    match eval(input) {
        Value::Array(elements) => assert_eq!(elements.len(), 3),
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn push_appends_without_mutating_the_original() {
    match eval("push([1, 2], 3)") {
        Value::Array(elements) => {
            assert_eq!(elements.len(), 3);
            assert_integer(&elements[2], 3);
        }
        other => panic!("expected Array, got {:?}", other),
    }

    let input = "let a = [1, 2]; let b = push(a, 3); a;";
    match eval(input) {
        Value::Array(elements) => assert_eq!(elements.len(), 2),
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn push_requires_an_array_first_argument() {
    assert_error(
        &eval("push(1, 2)"),
        "argument to 'push' must be ARRAY, got INTEGER",
    );
}

#[test]
fn puts_returns_null() {
    assert!(matches!(eval(r#"puts("hello")"#), Value::Null));
    assert!(matches!(eval("puts(1, 2, 3)"), Value::Null));
}
