//! Boolean predicate layer.
//!
//! Flat module of pure functions: each predicate is a view over the
//! classifier's output or a narrow variant check. None of them hold
//! state and none of them can fail.

use value_types::{BoxedPrimitive, Prototype, Value};

use crate::classifier::{resolve_type_name, PRIMITIVE_NAMES};

/// Options for [`is_number`].
///
/// Both options default to true, so plain `is_number` accepts NaN and
/// the infinities.
#[derive(Debug, Clone, Copy)]
pub struct NumberOptions {
    /// Whether NaN counts as a number.
    pub allow_nan: bool,
    /// Whether positive/negative infinity count as numbers.
    pub allow_infinity: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        NumberOptions {
            allow_nan: true,
            allow_infinity: true,
        }
    }
}

/// The numeric payload of a number or boxed Number, if any.
fn number_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::Boxed(b) => match **b {
            BoxedPrimitive::Number(n) => Some(n),
            _ => None,
        },
        _ => None,
    }
}

/// Whether the value is a string (primitive or boxed String).
pub fn is_string(value: &Value) -> bool {
    resolve_type_name(value) == "string"
}

/// Whether the value is a symbol.
pub fn is_symbol(value: &Value) -> bool {
    resolve_type_name(value) == "symbol"
}

/// Whether the value is a number (primitive or boxed Number).
///
/// `options.allow_nan = false` rejects NaN; `options.allow_infinity =
/// false` rejects any non-finite value, NaN included.
pub fn is_number(value: &Value, options: NumberOptions) -> bool {
    if resolve_type_name(value) != "number" {
        return false;
    }
    let num = match number_value(value) {
        Some(n) => n,
        None => return false,
    };
    if !options.allow_nan && num.is_nan() {
        return false;
    }
    if !options.allow_infinity && !num.is_finite() {
        return false;
    }
    true
}

/// [`is_number`] with the default options (NaN and infinities accepted).
pub fn is_number_default(value: &Value) -> bool {
    is_number(value, NumberOptions::default())
}

/// Whether the value is a bigint (primitive or boxed BigInt).
pub fn is_bigint(value: &Value) -> bool {
    resolve_type_name(value) == "bigint"
}

/// Whether the value is numeric (number or bigint).
pub fn is_numeric(value: &Value) -> bool {
    is_number_default(value) || is_bigint(value)
}

/// Whether the value is a boolean (primitive or boxed Boolean).
pub fn is_boolean(value: &Value) -> bool {
    resolve_type_name(value) == "boolean"
}

/// Whether the value is undefined.
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Whether the value is null.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Whether the value is an ordinary function (not a class constructor).
pub fn is_function(value: &Value) -> bool {
    resolve_type_name(value) == "function"
}

/// Whether the value is a user-defined class constructor.
pub fn is_user_defined_class(value: &Value) -> bool {
    resolve_type_name(value) == "class"
}

/// Whether the value is a plain object: generic object tag with a
/// prototype that is either the root object prototype or absent.
pub fn is_plain_object(value: &Value) -> bool {
    if value.tag() != "Object" {
        return false;
    }
    matches!(
        value.prototype(),
        Some(Prototype::ObjectRoot) | Some(Prototype::Null)
    )
}

/// Whether the value is a non-wrapper object: non-null, object-coarse,
/// not an array, and not stamped with a boxed-primitive or function tag.
/// Includes containers like Date, Map and Set.
pub fn is_object(value: &Value) -> bool {
    if matches!(value, Value::Null) || value.type_of() != "object" || matches!(value, Value::Array(_))
    {
        return false;
    }
    !matches!(
        value.tag(),
        "String" | "Number" | "Boolean" | "BigInt" | "Symbol" | "Function"
    )
}

/// Whether the value is an array.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Whether the value is a Date.
pub fn is_date(value: &Value) -> bool {
    resolve_type_name(value) == "Date"
}

/// Whether the value is an error object.
///
/// Checked through the slot tag, which is stable across realms; an
/// error subclass instance still stamps "Error".
pub fn is_error(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Undefined) && value.tag() == "Error"
}

/// Whether the value is one of the five primitive types, boxed forms
/// included.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Undefined)
        && PRIMITIVE_NAMES.contains(&resolve_type_name(value).as_str())
}

/// Whether the value is an integral number (bigint, or number with zero
/// fractional part), optionally constrained by an additional predicate.
pub fn is_integral(value: &Value, additional: Option<&dyn Fn(&Value) -> bool>) -> bool {
    let integral = is_bigint(value)
        || (is_number(value, NumberOptions::default())
            && number_value(value).is_some_and(|n| n.floor() == n));
    integral && additional.map_or(true, |pred| pred(value))
}

/// Whether the value is iterable: its iteration-protocol slot holds a
/// function or generator function.
pub fn is_iterable(value: &Value) -> bool {
    match value.iterator_slot() {
        Some(slot) => is_function_or_generator_function(&slot),
        None => false,
    }
}

/// Whether the value is a function or a generator function.
pub fn is_function_or_generator_function(value: &Value) -> bool {
    let coarse = value.type_of();
    (coarse == "object" || coarse == "function")
        && matches!(value.tag(), "Function" | "GeneratorFunction")
}

/// Whether the value is a generator function.
pub fn is_generator_function(value: &Value) -> bool {
    value.tag() == "GeneratorFunction"
}

/// Whether the value is an async function.
pub fn is_async_function(value: &Value) -> bool {
    value.tag() == "AsyncFunction"
}

/// Whether the value is a RegExp.
pub fn is_regexp(value: &Value) -> bool {
    resolve_type_name(value) == "RegExp"
}

/// Whether the value is a Map.
pub fn is_map(value: &Value) -> bool {
    resolve_type_name(value) == "Map"
}

/// Whether the value is a Set.
pub fn is_set(value: &Value) -> bool {
    resolve_type_name(value) == "Set"
}

/// Whether the value is a WeakMap.
pub fn is_weak_map(value: &Value) -> bool {
    resolve_type_name(value) == "WeakMap"
}

/// Whether the value is a WeakSet.
pub fn is_weak_set(value: &Value) -> bool {
    resolve_type_name(value) == "WeakSet"
}

/// Whether the value is a Promise.
pub fn is_promise(value: &Value) -> bool {
    resolve_type_name(value) == "Promise"
}

/// Whether the value is "empty".
///
/// Empty means: null or undefined; a string or array of length zero; a
/// Map or Set of size zero; a plain object with no own string-keyed
/// properties. Numbers and booleans are never empty; neither is any
/// other value kind.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Boxed(b) => match &**b {
            BoxedPrimitive::String(s) => s.is_empty(),
            _ => false,
        },
        Value::Array(_) => value.array_length() == 0,
        Value::Map(_) => value.map_size() == 0,
        Value::Set(_) => value.set_size() == 0,
        _ => is_plain_object(value) && value.own_property_count() == 0,
    }
}

/// Negation of [`is_empty`].
pub fn is_not_empty(value: &Value) -> bool {
    !is_empty(value)
}
