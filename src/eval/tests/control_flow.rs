//! `if`/`else`, `return`, and nested-return unwinding through blocks.

use super::*;

#[test]
fn if_else_expressions() {
    assert_integer(&eval("if (true) { 10 }"), 10);
    assert!(matches!(eval("if (false) { 10 }"), Value::Null));
    assert_integer(&eval("if (1) { 10 }"), 10);
    assert_integer(&eval("if (1 < 2) { 10 }"), 10);
    assert!(matches!(eval("if (1 > 2) { 10 }"), Value::Null));
    assert_integer(&eval("if (1 > 2) { 10 } else { 20 }"), 20);
    assert_integer(&eval("if (1 < 2) { 10 } else { 20 }"), 10);
}

#[test]
fn return_statement_stops_the_program() {
    assert_integer(&eval("return 10;"), 10);
    assert_integer(&eval("return 10; 9;"), 10);
    assert_integer(&eval("return 2 * 5; 9;"), 10);
    assert_integer(&eval("9; return 2 * 5; 9;"), 10);
}

#[test]
fn return_unwinds_through_nested_blocks() {
    let input = "if (10 > 1) { if (10 > 1) { return 10; } return 1; }";
    assert_integer(&eval(input), 10);
}

#[test]
fn return_inside_a_called_function_stops_at_the_function_boundary() {
    let input = "
        let f = fn(x) {
          if (x > 0) {
            return x;
          }
          return 0;
        };
        f(5);
    ";
    assert_integer(&eval(input), 5);
}
