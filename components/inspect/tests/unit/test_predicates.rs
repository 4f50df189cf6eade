//! Tests for the predicate layer, following the contract table.

use inspect::predicates::*;
use inspect::NumberOptions;
use value_types::{DateValue, ErrorValue, RegExpValue, SymbolValue, Value};

#[test]
fn test_is_string_covers_boxed() {
    assert!(is_string(&Value::string("hi")));
    assert!(is_string(&Value::boxed_string("hi")));
    assert!(!is_string(&Value::number(1.0)));
    assert!(!is_string(&Value::null()));
}

#[test]
fn test_is_number_defaults_accept_nan_and_infinity() {
    let defaults = NumberOptions::default();
    assert!(is_number(&Value::number(1.5), defaults));
    assert!(is_number(&Value::number(f64::NAN), defaults));
    assert!(is_number(&Value::number(f64::INFINITY), defaults));
    assert!(is_number(&Value::boxed_number(2.0), defaults));
    assert!(!is_number(&Value::string("1"), defaults));
    assert!(!is_number(&Value::bigint(1), defaults));
}

#[test]
fn test_is_number_option_rejections() {
    let no_nan = NumberOptions {
        allow_nan: false,
        allow_infinity: true,
    };
    assert!(!is_number(&Value::number(f64::NAN), no_nan));
    assert!(is_number(&Value::number(f64::INFINITY), no_nan));

    let no_infinity = NumberOptions {
        allow_nan: true,
        allow_infinity: false,
    };
    assert!(!is_number(&Value::number(f64::INFINITY), no_infinity));
    assert!(!is_number(&Value::number(f64::NEG_INFINITY), no_infinity));
    assert!(is_number(&Value::number(0.0), no_infinity));
}

#[test]
fn test_is_number_default_matches_default_options() {
    assert!(is_number_default(&Value::number(1.5)));
    assert!(is_number_default(&Value::number(f64::NAN)));
    assert!(is_number_default(&Value::number(f64::INFINITY)));
    assert!(is_number_default(&Value::boxed_number(2.0)));
    assert!(!is_number_default(&Value::string("1")));
    assert!(!is_number_default(&Value::bigint(1)));
}

#[test]
fn test_is_numeric() {
    assert!(is_numeric(&Value::number(1.0)));
    assert!(is_numeric(&Value::bigint(1)));
    assert!(!is_numeric(&Value::string("1")));
    assert!(!is_numeric(&Value::boolean(true)));
}

#[test]
fn test_nullish_identity_checks() {
    assert!(is_undefined(&Value::undefined()));
    assert!(!is_undefined(&Value::null()));
    assert!(is_null(&Value::null()));
    assert!(!is_null(&Value::undefined()));
}

#[test]
fn test_function_vs_class() {
    assert!(is_function(&Value::function_native("f")));
    assert!(!is_function(&Value::class_constructor("A")));
    assert!(is_user_defined_class(&Value::class_constructor("A")));
    assert!(!is_user_defined_class(&Value::function_native("f")));
}

#[test]
fn test_is_plain_object() {
    assert!(is_plain_object(&Value::object()));
    assert!(is_plain_object(&Value::object_without_proto()));
    assert!(!is_plain_object(&Value::array()));
    assert!(!is_plain_object(&Value::class_instance("Point")));
    assert!(!is_plain_object(&Value::map()));
    assert!(!is_plain_object(&Value::string("s")));
}

#[test]
fn test_is_object_excludes_wrappers_callables_and_arrays() {
    assert!(is_object(&Value::object()));
    assert!(is_object(&Value::date(DateValue::now())));
    assert!(is_object(&Value::map()));
    assert!(is_object(&Value::from_error(ErrorValue::new("e"))));
    assert!(!is_object(&Value::array()));
    assert!(!is_object(&Value::boxed_number(1.0)));
    assert!(!is_object(&Value::function_native("f")));
    assert!(!is_object(&Value::null()));
    assert!(!is_object(&Value::string("s")));
}

#[test]
fn test_is_error_is_tag_based() {
    assert!(is_error(&Value::from_error(ErrorValue::new("boom"))));
    assert!(is_error(&Value::from_error(ErrorValue::subclass(
        "ParseFailure",
        "bad"
    ))));
    assert!(!is_error(&Value::null()));
    assert!(!is_error(&Value::undefined()));
    assert!(!is_error(&Value::string("Error")));
}

#[test]
fn test_is_primitive() {
    assert!(is_primitive(&Value::string("s")));
    assert!(is_primitive(&Value::number(0.0)));
    assert!(is_primitive(&Value::bigint(0)));
    assert!(is_primitive(&Value::boolean(false)));
    assert!(is_primitive(&Value::symbol(SymbolValue::new())));
    // Boxed forms resolve to their bare primitive name.
    assert!(is_primitive(&Value::boxed_string("s")));
    assert!(!is_primitive(&Value::null()));
    assert!(!is_primitive(&Value::undefined()));
    assert!(!is_primitive(&Value::object()));
}

#[test]
fn test_is_integral() {
    assert!(is_integral(&Value::number(42.0), None));
    assert!(is_integral(&Value::number(-7.0), None));
    assert!(is_integral(&Value::bigint(42), None));
    assert!(!is_integral(&Value::number(3.14), None));
    assert!(!is_integral(&Value::number(f64::NAN), None));
    assert!(!is_integral(&Value::string("42"), None));
}

#[test]
fn test_is_integral_additional_predicate() {
    let positive = |v: &Value| v.as_number().map(|n| n > 0.0).unwrap_or(false);
    assert!(is_integral(&Value::number(4.0), Some(&positive)));
    assert!(!is_integral(&Value::number(-4.0), Some(&positive)));
    // The extra predicate only narrows; a non-integral never passes.
    assert!(!is_integral(&Value::number(0.5), Some(&positive)));
}

#[test]
fn test_is_iterable() {
    assert!(is_iterable(&Value::array()));
    assert!(is_iterable(&Value::string("ab")));
    assert!(is_iterable(&Value::map()));
    assert!(is_iterable(&Value::set_collection()));
    assert!(!is_iterable(&Value::number(1.0)));
    assert!(!is_iterable(&Value::object()));
    assert!(!is_iterable(&Value::weak_map()));

    let custom = Value::object();
    custom.set_symbol(SymbolValue::iterator(), Value::generator_function("gen"));
    assert!(is_iterable(&custom));

    let broken = Value::object();
    broken.set_symbol(SymbolValue::iterator(), Value::number(1.0));
    assert!(!is_iterable(&broken));
}

#[test]
fn test_generator_and_async_tags() {
    assert!(is_generator_function(&Value::generator_function("g")));
    assert!(!is_generator_function(&Value::function_native("f")));
    assert!(is_async_function(&Value::async_function("a")));
    assert!(!is_async_function(&Value::generator_function("g")));

    assert!(is_function_or_generator_function(&Value::function_native(
        "f"
    )));
    assert!(is_function_or_generator_function(
        &Value::generator_function("g")
    ));
    assert!(!is_function_or_generator_function(&Value::async_function(
        "a"
    )));
    assert!(!is_function_or_generator_function(&Value::object()));
}

#[test]
fn test_container_detection_matrix() {
    let map = Value::map();
    let set = Value::set_collection();
    let weak_map = Value::weak_map();
    let weak_set = Value::weak_set();
    let promise = Value::promise();
    let regexp = Value::regexp(RegExpValue::new("x", "").unwrap());

    assert!(is_map(&map) && !is_map(&set) && !is_map(&weak_map));
    assert!(is_set(&set) && !is_set(&map) && !is_set(&weak_set));
    assert!(is_weak_map(&weak_map) && !is_weak_map(&map));
    assert!(is_weak_set(&weak_set) && !is_weak_set(&set));
    assert!(is_promise(&promise) && !is_promise(&map));
    assert!(is_regexp(&regexp) && !is_regexp(&promise));
}

#[test]
fn test_is_empty() {
    assert!(is_empty(&Value::null()));
    assert!(is_empty(&Value::undefined()));
    assert!(is_empty(&Value::string("")));
    assert!(is_empty(&Value::boxed_string("")));
    assert!(is_empty(&Value::array()));
    assert!(is_empty(&Value::map()));
    assert!(is_empty(&Value::set_collection()));
    assert!(is_empty(&Value::object()));

    assert!(!is_empty(&Value::string("x")));
    assert!(!is_empty(&Value::array_from(vec![Value::number(1.0)])));

    let map = Value::map();
    map.map_set(Value::string("k"), Value::number(1.0));
    assert!(!is_empty(&map));

    let obj = Value::object();
    obj.set("k", Value::number(1.0));
    assert!(!is_empty(&obj));

    // Numbers and booleans are never empty, not even zero and false.
    assert!(!is_empty(&Value::number(0.0)));
    assert!(!is_empty(&Value::boolean(false)));
    // Non-plain containers without a size notion are never empty either.
    assert!(!is_empty(&Value::weak_map()));
    assert!(!is_empty(&Value::class_instance("Point")));
}

#[test]
fn test_is_not_empty_negates() {
    let battery = vec![
        Value::null(),
        Value::undefined(),
        Value::string(""),
        Value::string("x"),
        Value::array(),
        Value::map(),
        Value::object(),
        Value::number(0.0),
        Value::weak_set(),
    ];
    for value in &battery {
        assert_eq!(is_not_empty(value), !is_empty(value));
    }
}
