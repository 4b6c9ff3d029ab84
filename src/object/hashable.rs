//! The `HashKey`/`Hashable` protocol.
//!
//! Only `Integer`, `Boolean`, and `String` values can be used as hash
//! keys. A `HashKey` pairs a type tag with a numeric hash of the value,
//! so that two equal guest values always produce equal keys — `Hash` and
//! `Eq` are derived directly from that pair.

use std::hash::{Hash, Hasher};

use super::{TypeTag, Value};

/// The key Monkey `Hash` values are actually indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    tag: TypeTag,
    hash: u64,
}

/// Implemented by the value kinds that can appear as a hash key.
pub trait Hashable {
    /// Computes this value's `HashKey`, or `None` if it isn't hashable.
    fn hash_key(&self) -> Option<HashKey>;
}

impl Hashable for Value {
    fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(i) => Some(HashKey {
                tag: TypeTag::Integer,
                hash: *i as u64,
            }),
            Value::Boolean(b) => Some(HashKey {
                tag: TypeTag::Boolean,
                hash: if *b { 1 } else { 0 },
            }),
            Value::String(s) => {
                let mut hasher = std::collections::hash_map::DefaultHasher::new();
                s.hash(&mut hasher);
                Some(HashKey {
                    tag: TypeTag::String,
                    hash: hasher.finish(),
                })
            }
            _ => None,
        }
    }
}
