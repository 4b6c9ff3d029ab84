//! Array literals and indexing.

use super::*;

#[test]
fn array_literal_evaluates_each_element() {
    match eval("[1, 2 * 2, 3 + 3]") {
        Value::Array(elements) => {
            assert_eq!(elements.len(), 3);
            assert_integer(&elements[0], 1);
            assert_integer(&elements[1], 4);
            assert_integer(&elements[2], 6);
        }
        other => panic!("expected Array, got {:?}", other),
    }
}

#[test]
fn array_index_in_bounds() {
    assert_integer(&eval("[1, 2, 3][0]"), 1);
    assert_integer(&eval("[1, 2, 3][1]"), 2);
    assert_integer(&eval("[1, 2, 3][2]"), 3);
    assert_integer(&eval("let i = 0; [1][i];"), 1);
    assert_integer(&eval("[1, 2, 3][1 + 1];"), 3);
    assert_integer(&eval("let myArray = [1, 2, 3]; myArray[2];"), 3);
    assert_integer(
        &eval("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];"),
        6,
    );
}

#[test]
fn array_index_out_of_bounds_is_null() {
    assert!(matches!(eval("[1, 2, 3][3]"), Value::Null));
    assert!(matches!(eval("[1, 2, 3][-1]"), Value::Null));
}
