//! Round-trip property: re-parsing an AST node's canonical stringification
//! yields an AST that stringifies to the same text.

use super::*;

fn assert_roundtrips(input: &str) {
    let first = parse(input);
    let rendered = first.to_string();
    let second = parse(&rendered);
    assert_eq!(
        second.to_string(),
        rendered,
        "round-trip mismatch for {:?}",
        input
    );
}

#[test]
fn arithmetic_expressions_roundtrip() {
    assert_roundtrips("-a * b");
    assert_roundtrips("a + b / c");
    assert_roundtrips("3 + 4 * 5 == 3 * 1 + 4 * 5");
}

#[test]
fn let_and_return_statements_roundtrip() {
    assert_roundtrips("let x = 5;");
    assert_roundtrips("return 10;");
}

#[test]
fn call_and_index_expressions_roundtrip() {
    assert_roundtrips("add(a, b, 1, 2 * 3)");
    assert_roundtrips("myArray[1 + 1]");
}

#[test]
fn if_and_function_literals_roundtrip() {
    assert_roundtrips("if (x < y) { x } else { y }");
    assert_roundtrips("fn(x, y) { x + y; }");
}
