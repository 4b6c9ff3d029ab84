//! Runtime error messages and short-circuiting.

use super::*;

#[test]
fn type_mismatch_and_unknown_operator_errors() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
    ];
    for (input, expected) in cases {
        assert_error(&eval(input), expected);
    }
}

#[test]
fn identifier_not_found() {
    assert_error(&eval("foobar"), "identifier not found: foobar");
}

#[test]
fn hash_key_must_be_hashable() {
    assert_error(
        &eval(r#"{"name": "Monkey"}[fn(x){x}];"#),
        "unusable as hash key: FUNCTION",
    );
}

#[test]
fn index_on_unsupported_type() {
    assert_error(&eval("5[1]"), "index operator not supported INTEGER");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_error(&eval("let x = 5; x();"), "not a function: INTEGER");
}

#[test]
fn error_short_circuits_through_arithmetic() {
    // The left operand's error wins; the right operand is never reached.
    assert_error(&eval("(5 + true) + 5;"), "type mismatch: INTEGER + BOOLEAN");
}
