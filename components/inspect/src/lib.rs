//! Runtime value classification.
//!
//! This crate answers one question about any [`value_types::Value`]: what
//! is it, semantically? The classifier maps every value to a canonical
//! type name, the predicate layer derives boolean views from it, and the
//! inference helpers reinterpret strings as typed values where the whole
//! string reads as one.
//!
//! Classification never inspects constructor identity: the slot tag is
//! the base signal because it is stable across realms, with the
//! constructor name consulted only as a human-readable refinement. The
//! entire surface is total over all values and never fails.
//!
//! # Example
//!
//! ```
//! use inspect::{infer_value_type, predicates, resolve_type_name};
//! use value_types::Value;
//!
//! assert_eq!(resolve_type_name(&Value::map()), "Map");
//! assert_eq!(resolve_type_name(&Value::boxed_string("x")), "string");
//!
//! assert!(predicates::is_empty(&Value::array()));
//!
//! let inferred = infer_value_type(&Value::string("42"));
//! assert_eq!(inferred.parsed, Value::number(42.0));
//! assert_eq!(inferred.type_name, "number");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classifier;
mod infer;
pub mod predicates;

pub use classifier::{is_type, resolve_type_name};
pub use infer::{infer_value_type, parse_bool, Inference};
pub use predicates::{is_number_default, NumberOptions};
