//! Lexical environments and closure capture.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Value;

struct Inner {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A chain of name→value bindings.
///
/// `get` searches the current frame first, then walks the `outer` chain.
/// `set` always writes to the current frame, never an outer one — there
/// is no shadow check, matching a dynamically typed scripting language
/// where `let x = 1; let x = 2;` simply rebinds.
///
/// Cloning an `Environment` is cheap: it shares the underlying store via
/// `Rc<RefCell<_>>`, which is exactly what closures need — a function
/// literal captures its defining environment by holding a clone of it,
/// and later calls see any bindings added to that frame afterward.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Inner>>);

impl Environment {
    /// Creates a new root environment with no outer scope.
    pub fn new() -> Self {
        Environment(Rc::new(RefCell::new(Inner {
            store: HashMap::new(),
            outer: None,
        })))
    }

    /// Creates a new environment nested inside `outer`.
    ///
    /// Used both for the environment a function call runs its body in
    /// (nested inside the function's *captured* environment, not the
    /// caller's) and, in principle, for any other block-scoped frame.
    pub fn enclosed(outer: Environment) -> Self {
        Environment(Rc::new(RefCell::new(Inner {
            store: HashMap::new(),
            outer: Some(outer),
        })))
    }

    /// Looks up `name`, searching this frame then each outer frame in turn.
    pub fn get(&self, name: &str) -> Option<Value> {
        let inner = self.0.borrow();
        if let Some(value) = inner.store.get(name) {
            return Some(value.clone());
        }
        match &inner.outer {
            Some(outer) => outer.get(name),
            None => None,
        }
    }

    /// Binds `name` to `value` in this frame, overwriting any existing
    /// binding of the same name in this frame.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment(..)")
    }
}
