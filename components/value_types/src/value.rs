//! Tagged dynamic value representation.
//!
//! This module provides the core `Value` enum that represents every value
//! the classifier can be handed. Primitives are stored inline; reference
//! types are shared through `Rc` so that equality can follow object
//! identity, the way a JS engine compares reference values.

use num_bigint::BigInt as NumBigInt;
use num_traits::Zero;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::date::DateValue;
use crate::error::ErrorValue;
use crate::function::{FunctionData, FunctionKind};
use crate::promise::PromiseData;
use crate::regexp::RegExpValue;
use crate::symbol::SymbolValue;

/// Arbitrary precision integer value wrapper.
///
/// Wraps `num_bigint::BigInt` so the value model owns its own comparison
/// and display semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntValue {
    inner: NumBigInt,
}

impl BigIntValue {
    /// Create a new BigIntValue from a `num_bigint::BigInt`.
    pub fn new(inner: NumBigInt) -> Self {
        BigIntValue { inner }
    }

    /// Get a reference to the inner BigInt.
    pub fn inner(&self) -> &NumBigInt {
        &self.inner
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
}

impl From<i64> for BigIntValue {
    fn from(v: i64) -> Self {
        BigIntValue::new(NumBigInt::from(v))
    }
}

impl From<NumBigInt> for BigIntValue {
    fn from(v: NumBigInt) -> Self {
        BigIntValue::new(v)
    }
}

impl fmt::Display for BigIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Prototype link of an object.
///
/// The distinction between the realm's root object prototype and a missing
/// prototype matters for plain-object detection: literal-style objects hang
/// off the root, `create(null)`-style objects have no prototype at all, and
/// everything else chains to some other object.
#[derive(Debug, Clone)]
pub enum Prototype {
    /// The root object prototype of the value's realm.
    ObjectRoot,
    /// No prototype at all.
    Null,
    /// Some other prototype object (class instances, exotic objects).
    Chained(Box<Value>),
}

/// Internal object data.
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// String-keyed own properties.
    pub properties: HashMap<String, Value>,
    /// Symbol-keyed own properties, keyed by symbol id.
    pub symbol_properties: HashMap<u64, Value>,
    /// Prototype link.
    pub prototype: Prototype,
    /// Constructor name recorded at construction. Absent for anonymous
    /// or foreign objects whose constructor is not visible.
    pub constructor_name: Option<String>,
}

/// Internal array data.
#[derive(Debug, Clone)]
pub struct ArrayData {
    /// Array elements.
    pub elements: Vec<Value>,
}

/// Internal map data - preserves insertion order.
#[derive(Debug, Clone)]
pub struct MapData {
    /// Map entries in insertion order.
    pub entries: Vec<(Value, Value)>,
}

/// Internal set data - preserves insertion order.
#[derive(Debug, Clone)]
pub struct SetData {
    /// Set values in insertion order.
    pub values: Vec<Value>,
}

/// Internal weak map data - keys are object identities.
#[derive(Debug, Clone, Default)]
pub struct WeakMapData {
    /// Map entries keyed by object pointer address.
    pub entries: HashMap<usize, Value>,
}

/// Internal weak set data - values are object identities.
#[derive(Debug, Clone, Default)]
pub struct WeakSetData {
    /// Set of object pointer addresses.
    pub values: HashMap<usize, ()>,
}

/// An object-wrapped primitive (boxed form of one of the five primitives).
#[derive(Debug, Clone)]
pub enum BoxedPrimitive {
    /// String wrapper object.
    String(String),
    /// Number wrapper object.
    Number(f64),
    /// Boolean wrapper object.
    Boolean(bool),
    /// BigInt wrapper object.
    BigInt(BigIntValue),
    /// Symbol wrapper object.
    Symbol(SymbolValue),
}

impl BoxedPrimitive {
    /// The built-in tag stamped on the wrapper object.
    pub fn tag(&self) -> &'static str {
        match self {
            BoxedPrimitive::String(_) => "String",
            BoxedPrimitive::Number(_) => "Number",
            BoxedPrimitive::Boolean(_) => "Boolean",
            BoxedPrimitive::BigInt(_) => "BigInt",
            BoxedPrimitive::Symbol(_) => "Symbol",
        }
    }
}

/// Dynamically-typed value representation.
///
/// # Examples
///
/// ```
/// use value_types::Value;
///
/// let n = Value::number(42.0);
/// assert_eq!(n.type_of(), "number");
/// assert_eq!(n.tag(), "Number");
///
/// let arr = Value::array_from(vec![Value::number(1.0)]);
/// assert_eq!(arr.type_of(), "object");
/// assert_eq!(arr.to_tag_string(), "[object Array]");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// BigInt value (arbitrary precision integer)
    BigInt(BigIntValue),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// Boxed primitive wrapper object
    Boxed(Rc<BoxedPrimitive>),
    /// Object with properties
    Object(Rc<RefCell<ObjectData>>),
    /// Array
    Array(Rc<RefCell<ArrayData>>),
    /// Date object
    Date(Rc<DateValue>),
    /// RegExp object
    RegExp(Rc<RegExpValue>),
    /// Map collection
    Map(Rc<RefCell<MapData>>),
    /// Set collection
    Set(Rc<RefCell<SetData>>),
    /// WeakMap collection
    WeakMap(Rc<RefCell<WeakMapData>>),
    /// WeakSet collection
    WeakSet(Rc<RefCell<WeakSetData>>),
    /// Promise object
    Promise(Rc<RefCell<PromiseData>>),
    /// Error object
    Error(Rc<ErrorValue>),
    /// Function object (ordinary, generator, async, or class constructor)
    Function(Rc<FunctionData>),
}

impl Value {
    /// Create undefined value.
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Create boolean value.
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create number value.
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create BigInt value.
    pub fn bigint(v: impl Into<BigIntValue>) -> Self {
        Value::BigInt(v.into())
    }

    /// Create string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a symbol value.
    pub fn symbol(sym: SymbolValue) -> Self {
        Value::Symbol(sym)
    }

    /// Create a boxed String wrapper object.
    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::String(s.into())))
    }

    /// Create a boxed Number wrapper object.
    pub fn boxed_number(v: f64) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::Number(v)))
    }

    /// Create a boxed Boolean wrapper object.
    pub fn boxed_boolean(v: bool) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::Boolean(v)))
    }

    /// Create a boxed BigInt wrapper object.
    pub fn boxed_bigint(v: impl Into<BigIntValue>) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::BigInt(v.into())))
    }

    /// Create a boxed Symbol wrapper object.
    pub fn boxed_symbol(sym: SymbolValue) -> Self {
        Value::Boxed(Rc::new(BoxedPrimitive::Symbol(sym)))
    }

    /// Create an empty plain object hanging off the root object prototype.
    pub fn object() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype: Prototype::ObjectRoot,
            constructor_name: Some("Object".to_string()),
        })))
    }

    /// Create an empty object with no prototype (`create(null)` style).
    pub fn object_without_proto() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype: Prototype::Null,
            constructor_name: Some("Object".to_string()),
        })))
    }

    /// Create an object chained to the given prototype object.
    pub fn object_with_proto(proto: &Value) -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype: Prototype::Chained(Box::new(proto.clone())),
            constructor_name: Some("Object".to_string()),
        })))
    }

    /// Create a class instance: an object carrying the class name as its
    /// constructor name, chained to a non-root prototype.
    pub fn class_instance(class_name: impl Into<String>) -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype: Prototype::Chained(Box::new(Value::object())),
            constructor_name: Some(class_name.into()),
        })))
    }

    /// Create a foreign object whose constructor is not visible from the
    /// inspecting realm. Its constructor name is absent; only the slot tag
    /// remains usable.
    pub fn anonymous_object() -> Self {
        Value::Object(Rc::new(RefCell::new(ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype: Prototype::Null,
            constructor_name: None,
        })))
    }

    /// Create empty array.
    pub fn array() -> Self {
        Value::Array(Rc::new(RefCell::new(ArrayData {
            elements: Vec::new(),
        })))
    }

    /// Create array from values.
    pub fn array_from(values: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// Create a Date value.
    pub fn date(date: DateValue) -> Self {
        Value::Date(Rc::new(date))
    }

    /// Create a RegExp value.
    pub fn regexp(re: RegExpValue) -> Self {
        Value::RegExp(Rc::new(re))
    }

    /// Create an empty Map.
    pub fn map() -> Self {
        Value::Map(Rc::new(RefCell::new(MapData {
            entries: Vec::new(),
        })))
    }

    /// Create an empty Set.
    pub fn set_collection() -> Self {
        Value::Set(Rc::new(RefCell::new(SetData { values: Vec::new() })))
    }

    /// Create an empty WeakMap.
    pub fn weak_map() -> Self {
        Value::WeakMap(Rc::new(RefCell::new(WeakMapData::default())))
    }

    /// Create an empty WeakSet.
    pub fn weak_set() -> Self {
        Value::WeakSet(Rc::new(RefCell::new(WeakSetData::default())))
    }

    /// Create a pending Promise.
    pub fn promise() -> Self {
        Value::Promise(Rc::new(RefCell::new(PromiseData::new())))
    }

    /// Create a fulfilled Promise.
    pub fn promise_fulfilled(value: Value) -> Self {
        let mut data = PromiseData::new();
        data.fulfill(value);
        Value::Promise(Rc::new(RefCell::new(data)))
    }

    /// Create a rejected Promise.
    pub fn promise_rejected(reason: Value) -> Self {
        let mut data = PromiseData::new();
        data.reject(reason);
        Value::Promise(Rc::new(RefCell::new(data)))
    }

    /// Create an error value.
    pub fn from_error(error: ErrorValue) -> Self {
        Value::Error(Rc::new(error))
    }

    /// Create an ordinary native function value.
    pub fn function_native(name: impl Into<String>) -> Self {
        Value::Function(Rc::new(FunctionData::native(name)))
    }

    /// Create a function value with explicit source text.
    pub fn function_with_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Value::Function(Rc::new(FunctionData::new(
            name,
            FunctionKind::Normal,
            source,
        )))
    }

    /// Create a generator function value.
    pub fn generator_function(name: impl Into<String>) -> Self {
        Value::Function(Rc::new(FunctionData::generator(name)))
    }

    /// Create an async function value.
    pub fn async_function(name: impl Into<String>) -> Self {
        Value::Function(Rc::new(FunctionData::async_fn(name)))
    }

    /// Create a class constructor value.
    pub fn class_constructor(name: impl Into<String>) -> Self {
        Value::Function(Rc::new(FunctionData::class_declaration(name)))
    }

    /// Get as boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as BigInt.
    pub fn as_bigint(&self) -> Option<&BigIntValue> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    /// Get array length (0 for non-arrays).
    pub fn array_length(&self) -> usize {
        match self {
            Value::Array(arr) => arr.borrow().elements.len(),
            _ => 0,
        }
    }

    /// Set object property.
    pub fn set(&self, key: &str, value: Value) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().properties.insert(key.to_string(), value);
        }
    }

    /// Get object property.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().properties.get(key).cloned(),
            _ => None,
        }
    }

    /// Check if object has own property.
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            Value::Object(obj) => obj.borrow().properties.contains_key(key),
            _ => false,
        }
    }

    /// Number of own string-keyed properties (0 for non-objects).
    /// Symbol-keyed properties are not counted, matching key enumeration.
    pub fn own_property_count(&self) -> usize {
        match self {
            Value::Object(obj) => obj.borrow().properties.len(),
            _ => 0,
        }
    }

    /// Set object property with symbol key.
    pub fn set_symbol(&self, sym: &SymbolValue, value: Value) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().symbol_properties.insert(sym.id(), value);
        }
    }

    /// Get object property with symbol key.
    pub fn get_symbol(&self, sym: &SymbolValue) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().symbol_properties.get(&sym.id()).cloned(),
            _ => None,
        }
    }

    /// Get the object's prototype link (None for non-objects).
    pub fn prototype(&self) -> Option<Prototype> {
        match self {
            Value::Object(obj) => Some(obj.borrow().prototype.clone()),
            _ => None,
        }
    }

    /// Get the constructor name visible on this value, if any.
    ///
    /// Built-in reference types report their canonical constructor name.
    /// Plain objects report whatever was recorded at construction, which
    /// may be nothing for anonymous or foreign objects. Error objects
    /// report their error name, so a subclassed error surfaces its
    /// subclass name here.
    pub fn constructor_name(&self) -> Option<String> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some("Boolean".to_string()),
            Value::Number(_) => Some("Number".to_string()),
            Value::BigInt(_) => Some("BigInt".to_string()),
            Value::String(_) => Some("String".to_string()),
            Value::Symbol(_) => Some("Symbol".to_string()),
            Value::Boxed(b) => Some(b.tag().to_string()),
            Value::Object(obj) => obj.borrow().constructor_name.clone(),
            Value::Array(_) => Some("Array".to_string()),
            Value::Date(_) => Some("Date".to_string()),
            Value::RegExp(_) => Some("RegExp".to_string()),
            Value::Map(_) => Some("Map".to_string()),
            Value::Set(_) => Some("Set".to_string()),
            Value::WeakMap(_) => Some("WeakMap".to_string()),
            Value::WeakSet(_) => Some("WeakSet".to_string()),
            Value::Promise(_) => Some("Promise".to_string()),
            Value::Error(err) => Some(err.name().to_string()),
            Value::Function(_) => Some("Function".to_string()),
        }
    }

    /// The built-in slot tag of this value.
    ///
    /// The tag is intrinsic to the representation and therefore stable
    /// across realms, unlike constructor identity or constructor-name
    /// metadata. This is the low-level signal classification rests on.
    pub fn tag(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Boxed(b) => b.tag(),
            Value::Object(_) => "Object",
            Value::Array(_) => "Array",
            Value::Date(_) => "Date",
            Value::RegExp(_) => "RegExp",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
            Value::WeakMap(_) => "WeakMap",
            Value::WeakSet(_) => "WeakSet",
            Value::Promise(_) => "Promise",
            Value::Error(_) => "Error",
            Value::Function(f) => f.tag(),
        }
    }

    /// The `[object X]` stamped form of the slot tag.
    pub fn to_tag_string(&self) -> String {
        format!("[object {}]", self.tag())
    }

    /// The coarse category of the value (what `typeof` would report).
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // typeof null quirk
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Boxed(_)
            | Value::Object(_)
            | Value::Array(_)
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Map(_)
            | Value::Set(_)
            | Value::WeakMap(_)
            | Value::WeakSet(_)
            | Value::Promise(_)
            | Value::Error(_) => "object",
        }
    }

    /// The value's iteration-protocol slot, if it has one.
    ///
    /// Arrays, strings and the ordered collections expose their built-in
    /// iterator function. Plain objects expose whatever is stored under
    /// the well-known iterator symbol. Everything else has no slot.
    pub fn iterator_slot(&self) -> Option<Value> {
        match self {
            Value::Array(_) | Value::Map(_) | Value::Set(_) => {
                Some(Value::function_native("values"))
            }
            Value::String(_) => Some(Value::function_native("[Symbol.iterator]")),
            Value::Boxed(b) => match **b {
                BoxedPrimitive::String(_) => Some(Value::function_native("[Symbol.iterator]")),
                _ => None,
            },
            Value::Object(_) => self.get_symbol(SymbolValue::iterator()),
            _ => None,
        }
    }

    /// Get the object pointer identity (used for WeakMap/WeakSet keys).
    ///
    /// Returns Some(address) for reference types, None for primitives.
    pub fn object_identity(&self) -> Option<usize> {
        match self {
            Value::Boxed(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Object(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Array(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Date(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::RegExp(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Map(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Set(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::WeakMap(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::WeakSet(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Promise(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Error(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Function(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Undefined
            | Value::Null
            | Value::Boolean(_)
            | Value::Number(_)
            | Value::BigInt(_)
            | Value::String(_)
            | Value::Symbol(_) => None,
        }
    }

    /// Whether this value is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            // All objects are truthy, including wrapper objects.
            _ => true,
        }
    }

    /// Check equality (loose comparison; reference types by identity).
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    false
                } else {
                    a == b
                }
            }
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.id() == b.id(),
            // Reference types - same instance only
            (Value::Boxed(a), Value::Boxed(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Date(a), Value::Date(b)) => Rc::ptr_eq(a, b),
            (Value::RegExp(a), Value::RegExp(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            (Value::WeakMap(a), Value::WeakMap(b)) => Rc::ptr_eq(a, b),
            (Value::WeakSet(a), Value::WeakSet(b)) => Rc::ptr_eq(a, b),
            (Value::Promise(a), Value::Promise(b)) => Rc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// SameValueZero comparison for Map/Set key equality.
    ///
    /// Like `equals` but treats NaN equal to NaN and -0 equal to +0.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b // already treats -0 == +0
                }
            }
            _ => self.equals(other),
        }
    }

    /// Convert to display string the way the host language would.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::BigInt(n) => format!("{}n", n),
            Value::String(s) => s.clone(),
            Value::Symbol(sym) => sym.to_string(),
            Value::Boxed(b) => match &**b {
                BoxedPrimitive::String(s) => s.clone(),
                BoxedPrimitive::Number(n) => format_number(*n),
                BoxedPrimitive::Boolean(v) => v.to_string(),
                BoxedPrimitive::BigInt(n) => format!("{}n", n),
                BoxedPrimitive::Symbol(sym) => sym.to_string(),
            },
            Value::Object(_) => "[object Object]".to_string(),
            Value::Array(arr) => {
                let elements: Vec<String> = arr
                    .borrow()
                    .elements
                    .iter()
                    .map(|e| e.to_display_string())
                    .collect();
                elements.join(",")
            }
            Value::Date(d) => d.to_string(),
            Value::RegExp(re) => re.to_string(),
            Value::Map(_) => "[object Map]".to_string(),
            Value::Set(_) => "[object Set]".to_string(),
            Value::WeakMap(_) => "[object WeakMap]".to_string(),
            Value::WeakSet(_) => "[object WeakSet]".to_string(),
            Value::Promise(_) => "[object Promise]".to_string(),
            Value::Error(err) => err.to_string(),
            Value::Function(f) => f.source().to_string(),
        }
    }
}

/// Format a double the way the host language stringifies numbers.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}
