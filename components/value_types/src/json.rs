//! JSON ingestion boundary.
//!
//! Externally-sourced dynamic data enters the value model here: a parsed
//! JSON tree becomes a `Value` tree that classification can inspect.
//! Ingestion is total; the reverse direction is fallible because several
//! value categories have no JSON form.

use serde_json::Value as JsonValue;

use crate::error::ValueError;
use crate::value::{BoxedPrimitive, Value};

impl Value {
    /// Build a value tree from parsed JSON.
    ///
    /// JSON objects become plain objects hanging off the root object
    /// prototype, so they satisfy plain-object detection like any
    /// literal-style object would.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_types::Value;
    ///
    /// let json: serde_json::Value = serde_json::from_str(r#"{"n": 1}"#).unwrap();
    /// let value = Value::from_json(&json);
    /// assert_eq!(value.get("n"), Some(Value::number(1.0)));
    /// ```
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::boolean(*b),
            JsonValue::Number(n) => Value::number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::string(s.clone()),
            JsonValue::Array(items) => {
                Value::array_from(items.iter().map(Value::from_json).collect())
            }
            JsonValue::Object(fields) => {
                let obj = Value::object();
                for (key, field) in fields {
                    obj.set(key, Value::from_json(field));
                }
                obj
            }
        }
    }

    /// Render this value as JSON, where a JSON form exists.
    ///
    /// Non-finite numbers serialize as null. Dates serialize as their
    /// string form, boxed primitives unwrap, and the container types
    /// without JSON content (Map, Set, weak collections, RegExp, Promise,
    /// Error) flatten to an empty object. Undefined, BigInt, symbols and
    /// functions have no JSON representation.
    pub fn to_json(&self) -> Result<JsonValue, ValueError> {
        match self {
            Value::Null => Ok(JsonValue::Null),
            Value::Boolean(b) => Ok(JsonValue::Bool(*b)),
            Value::Number(n) => Ok(number_to_json(*n)),
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::Boxed(b) => match &**b {
                BoxedPrimitive::String(s) => Ok(JsonValue::String(s.clone())),
                BoxedPrimitive::Number(n) => Ok(number_to_json(*n)),
                BoxedPrimitive::Boolean(v) => Ok(JsonValue::Bool(*v)),
                BoxedPrimitive::BigInt(_) | BoxedPrimitive::Symbol(_) => {
                    Err(ValueError::UnrepresentableJson {
                        type_tag: self.tag(),
                    })
                }
            },
            Value::Object(obj) => {
                let mut fields = serde_json::Map::new();
                for (key, field) in &obj.borrow().properties {
                    fields.insert(key.clone(), field.to_json()?);
                }
                Ok(JsonValue::Object(fields))
            }
            Value::Array(arr) => {
                let mut items = Vec::new();
                for element in &arr.borrow().elements {
                    items.push(element.to_json()?);
                }
                Ok(JsonValue::Array(items))
            }
            Value::Date(d) => Ok(JsonValue::String(d.to_string())),
            Value::RegExp(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::WeakMap(_)
            | Value::WeakSet(_)
            | Value::Promise(_)
            | Value::Error(_) => Ok(JsonValue::Object(serde_json::Map::new())),
            Value::Undefined | Value::BigInt(_) | Value::Symbol(_) | Value::Function(_) => {
                Err(ValueError::UnrepresentableJson {
                    type_tag: self.tag(),
                })
            }
        }
    }
}

fn number_to_json(n: f64) -> JsonValue {
    serde_json::Number::from_f64(n)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}
