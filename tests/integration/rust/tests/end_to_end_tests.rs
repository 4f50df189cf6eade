//! End-to-end classification tests.
//!
//! Builds values through the full `value_types` surface and verifies the
//! `inspect` surface agrees with itself: classifier output, predicates
//! derived from it, and inference over string payloads.

use inspect::{infer_value_type, is_type, parse_bool, predicates, resolve_type_name};
use value_types::{DateValue, ErrorValue, RegExpValue, SymbolValue, Value};

/// Helper asserting the classifier and `is_type` agree on a value's name.
fn assert_classified(value: &Value, expected: &str) {
    assert_eq!(resolve_type_name(value), expected);
    assert!(is_type(value, expected));
}

#[test]
fn test_every_category_classifies() {
    assert_classified(&Value::undefined(), "undefined");
    assert_classified(&Value::null(), "null");
    assert_classified(&Value::boolean(true), "boolean");
    assert_classified(&Value::number(1.0), "number");
    assert_classified(&Value::bigint(1), "bigint");
    assert_classified(&Value::string("s"), "string");
    assert_classified(&Value::symbol(SymbolValue::new()), "symbol");
    assert_classified(&Value::object(), "object");
    assert_classified(&Value::array(), "array");
    assert_classified(&Value::date(DateValue::now()), "Date");
    assert_classified(&Value::regexp(RegExpValue::new("a", "").unwrap()), "RegExp");
    assert_classified(&Value::map(), "Map");
    assert_classified(&Value::set_collection(), "Set");
    assert_classified(&Value::weak_map(), "WeakMap");
    assert_classified(&Value::weak_set(), "WeakSet");
    assert_classified(&Value::promise(), "Promise");
    assert_classified(&Value::from_error(ErrorValue::new("e")), "Error");
    assert_classified(&Value::function_native("f"), "function");
    assert_classified(&Value::class_constructor("A"), "class");
}

#[test]
fn test_populated_containers_flow_through_predicates() {
    let map = Value::map();
    map.map_set(Value::string("answer"), Value::number(42.0));

    let set = Value::set_collection();
    set.set_add(Value::string("only"));

    let registry = Value::weak_map();
    let entry = Value::class_instance("Session");
    registry.weak_map_set(&entry, Value::boolean(true));

    assert!(predicates::is_map(&map));
    assert!(predicates::is_not_empty(&map));
    assert!(predicates::is_set(&set));
    assert!(predicates::is_not_empty(&set));
    assert!(predicates::is_weak_map(&registry));
    assert_eq!(registry.weak_map_get(&entry), Some(Value::boolean(true)));
    assert_eq!(resolve_type_name(&entry), "Session");
}

#[test]
fn test_heterogeneous_array_classification() {
    let mixed = Value::array_from(vec![
        Value::null(),
        Value::string("true"),
        Value::boxed_number(2.0),
        Value::class_instance("Point"),
        Value::generator_function("walk"),
    ]);

    assert!(predicates::is_array(&mixed));
    assert!(predicates::is_iterable(&mixed));

    let names: Vec<String> = match &mixed {
        Value::Array(data) => data
            .borrow()
            .elements
            .iter()
            .map(resolve_type_name)
            .collect(),
        other => panic!("expected an array, got {:?}", other),
    };
    assert_eq!(names, vec!["null", "string", "number", "Point", "function"]);
}

#[test]
fn test_inference_composes_with_classification() {
    let raw = Value::string("1500");
    let inferred = infer_value_type(&raw);
    assert_eq!(inferred.type_name, "number");
    assert!(predicates::is_integral(&inferred.parsed, None));
    assert_eq!(resolve_type_name(&inferred.parsed), inferred.type_name);

    let flag = infer_value_type(&Value::string(" false "));
    assert_eq!(flag.parsed, Value::boolean(false));
    assert_eq!(parse_bool(&flag.parsed), Some(false));
}

#[test]
fn test_classifier_never_fails_on_awkward_values() {
    // Values chosen to stress the fallback paths rather than the happy
    // ones: missing metadata, hostile function source, invalid dates.
    let awkward = vec![
        Value::anonymous_object(),
        Value::function_with_source("evil", "class warfare() {}"),
        Value::function_with_source("empty", ""),
        Value::date(DateValue::invalid()),
        Value::number(-0.0),
        Value::string("\u{feff}42"),
    ];
    for value in &awkward {
        let name = resolve_type_name(value);
        assert!(!name.is_empty(), "no type name for {:?}", value);
        assert_eq!(name, resolve_type_name(value));
    }
}
