//! Dynamic value model for runtime type classification.
//!
//! This crate provides the `Value` enum and its payload types: a tagged
//! representation of dynamically-typed values in the style of a JavaScript
//! engine, including primitives, boxed primitive wrappers, plain objects
//! with prototype links, arrays, dates, regular expressions, ordered Map
//! and Set collections, identity-keyed weak collections, promises, errors,
//! and functions carrying their source text.
//!
//! Values constructed here are what the `inspect` crate classifies. Two
//! properties of the model matter for classification:
//!
//! - the **slot tag** ([`Value::tag`]) is intrinsic to the representation
//!   and therefore stable regardless of which realm a value came from;
//! - the **constructor name** ([`Value::constructor_name`]) is metadata
//!   recorded at construction time and may be absent for anonymous or
//!   foreign objects.
//!
//! # Examples
//!
//! ```
//! use value_types::Value;
//!
//! let obj = Value::object();
//! obj.set("answer", Value::number(42.0));
//!
//! assert_eq!(obj.tag(), "Object");
//! assert_eq!(obj.type_of(), "object");
//! assert_eq!(obj.get("answer"), Some(Value::number(42.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod collections;
mod date;
mod error;
mod function;
mod json;
mod promise;
mod regexp;
mod symbol;
mod value;

pub use date::DateValue;
pub use error::{ErrorKind, ErrorValue, ValueError};
pub use function::{FunctionData, FunctionKind};
pub use promise::{PromiseData, PromiseState};
pub use regexp::RegExpValue;
pub use symbol::SymbolValue;
pub use value::{
    ArrayData, BigIntValue, BoxedPrimitive, MapData, ObjectData, Prototype, SetData, Value,
    WeakMapData, WeakSetData,
};
