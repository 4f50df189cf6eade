//! The type-name classifier.
//!
//! Maps any value to a canonical TypeName string. The resolution order is
//! fixed: null wins outright, functions are split into "class" and
//! "function" by their source text, and everything object-coarse resolves
//! through the slot tag before the constructor name is consulted. The slot
//! tag comes first because it is intrinsic to the representation and
//! therefore survives realm boundaries; constructor names are metadata
//! that foreign values may not carry.

use regex::Regex;
use std::sync::LazyLock;
use value_types::Value;

/// The five primitive type names, as the classifier reports them.
pub(crate) const PRIMITIVE_NAMES: [&str; 5] = ["string", "number", "bigint", "boolean", "symbol"];

static CLASS_SOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^class\s").expect("literal pattern compiles"));

/// Whether a function's source text declares a class.
///
/// A non-class function whose stored source happens to start with
/// `class ` defeats this heuristic; that is an accepted limitation of
/// textual detection, not a correctness bug.
pub(crate) fn is_class_source(source: &str) -> bool {
    CLASS_SOURCE.is_match(source.trim_start())
}

/// Resolve the canonical type name of a value.
///
/// - Primitives report their primitive name: `"string"`, `"number"`, ...
/// - Boxed primitives resolve to their bare primitive name.
/// - Plain objects report `"object"`, arrays `"array"`.
/// - Built-in reference types report their constructor name: `"Date"`,
///   `"Map"`, `"Promise"`, ...
/// - Class constructors report `"class"`, other functions `"function"`.
/// - Objects without a visible constructor name fall back to their
///   lower-cased slot tag.
///
/// Total over all values; never fails.
///
/// # Examples
///
/// ```
/// use inspect::resolve_type_name;
/// use value_types::Value;
///
/// assert_eq!(resolve_type_name(&Value::null()), "null");
/// assert_eq!(resolve_type_name(&Value::number(1.5)), "number");
/// assert_eq!(resolve_type_name(&Value::array()), "array");
/// assert_eq!(resolve_type_name(&Value::map()), "Map");
/// assert_eq!(resolve_type_name(&Value::class_constructor("Point")), "class");
/// ```
pub fn resolve_type_name(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Function(f) => if is_class_source(f.source()) {
            "class"
        } else {
            "function"
        }
        .to_string(),
        _ => {
            let coarse = value.type_of();
            if coarse != "object" {
                return coarse.to_string();
            }
            let tag = value.tag().to_lowercase();
            if PRIMITIVE_NAMES.contains(&tag.as_str()) {
                // Boxed primitive wrapper: report the bare primitive name.
                return tag;
            }
            match value.constructor_name() {
                Some(name) => {
                    if name == "Object" || name == "Array" {
                        name.to_lowercase()
                    } else {
                        name
                    }
                }
                // No usable constructor name: degrade to the slot tag.
                None => tag,
            }
        }
    }
}

/// Check whether the value's type name matches the expected name.
///
/// # Examples
///
/// ```
/// use inspect::is_type;
/// use value_types::Value;
///
/// assert!(is_type(&Value::map(), "Map"));
/// assert!(!is_type(&Value::map(), "Set"));
/// ```
pub fn is_type(value: &Value, type_name: &str) -> bool {
    resolve_type_name(value) == type_name
}
