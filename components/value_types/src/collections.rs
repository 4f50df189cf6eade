//! Map and Set collection operations.
//!
//! The ordered collections use SameValueZero key comparison and preserve
//! insertion order. The weak collections key on object identity, so only
//! reference values can be stored in them.

use crate::value::Value;

impl Value {
    /// Set a key-value pair in a Map. No-op on non-Map values.
    pub fn map_set(&self, key: Value, value: Value) {
        if let Value::Map(data) = self {
            let mut map_data = data.borrow_mut();
            if let Some(index) = map_data
                .entries
                .iter()
                .position(|(k, _)| k.same_value_zero(&key))
            {
                // Update in place, preserving insertion order.
                map_data.entries[index].1 = value;
            } else {
                map_data.entries.push((key, value));
            }
        }
    }

    /// Look up a key in a Map.
    pub fn map_get(&self, key: &Value) -> Option<Value> {
        match self {
            Value::Map(data) => data
                .borrow()
                .entries
                .iter()
                .find(|(k, _)| k.same_value_zero(key))
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Number of entries in a Map (0 for non-Maps).
    pub fn map_size(&self) -> usize {
        match self {
            Value::Map(data) => data.borrow().entries.len(),
            _ => 0,
        }
    }

    /// Add a value to a Set. No-op on non-Set values and on duplicates.
    pub fn set_add(&self, value: Value) {
        if let Value::Set(data) = self {
            let mut set_data = data.borrow_mut();
            if !set_data.values.iter().any(|v| v.same_value_zero(&value)) {
                set_data.values.push(value);
            }
        }
    }

    /// Whether a Set contains a value.
    pub fn set_has(&self, value: &Value) -> bool {
        match self {
            Value::Set(data) => data.borrow().values.iter().any(|v| v.same_value_zero(value)),
            _ => false,
        }
    }

    /// Number of values in a Set (0 for non-Sets).
    pub fn set_size(&self) -> usize {
        match self {
            Value::Set(data) => data.borrow().values.len(),
            _ => 0,
        }
    }

    /// Store an entry in a WeakMap. The key must be a reference value;
    /// primitive keys are silently ignored, as are non-WeakMap receivers.
    pub fn weak_map_set(&self, key: &Value, value: Value) {
        if let Value::WeakMap(data) = self {
            if let Some(identity) = key.object_identity() {
                data.borrow_mut().entries.insert(identity, value);
            }
        }
    }

    /// Look up an entry in a WeakMap by key identity.
    pub fn weak_map_get(&self, key: &Value) -> Option<Value> {
        match self {
            Value::WeakMap(data) => key
                .object_identity()
                .and_then(|identity| data.borrow().entries.get(&identity).cloned()),
            _ => None,
        }
    }

    /// Add a reference value to a WeakSet.
    pub fn weak_set_add(&self, value: &Value) {
        if let Value::WeakSet(data) = self {
            if let Some(identity) = value.object_identity() {
                data.borrow_mut().values.insert(identity, ());
            }
        }
    }

    /// Whether a WeakSet contains a value, by identity.
    pub fn weak_set_has(&self, value: &Value) -> bool {
        match self {
            Value::WeakSet(data) => value
                .object_identity()
                .is_some_and(|identity| data.borrow().values.contains_key(&identity)),
            _ => false,
        }
    }
}
