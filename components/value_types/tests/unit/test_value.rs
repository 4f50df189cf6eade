//! Tests for the Value representation: tags, constructor metadata,
//! prototypes, equality, and the payload types behind reference values.

use value_types::{
    DateValue, ErrorValue, FunctionKind, PromiseState, Prototype, RegExpValue, SymbolValue, Value,
};

#[test]
fn test_coarse_categories() {
    assert_eq!(Value::undefined().type_of(), "undefined");
    assert_eq!(Value::boolean(true).type_of(), "boolean");
    assert_eq!(Value::number(1.0).type_of(), "number");
    assert_eq!(Value::bigint(7).type_of(), "bigint");
    assert_eq!(Value::string("s").type_of(), "string");
    assert_eq!(Value::symbol(SymbolValue::new()).type_of(), "symbol");
    assert_eq!(Value::function_native("f").type_of(), "function");
    assert_eq!(Value::class_constructor("A").type_of(), "function");
    // Everything else is object-coarse, wrappers included.
    assert_eq!(Value::object().type_of(), "object");
    assert_eq!(Value::boxed_number(1.0).type_of(), "object");
    assert_eq!(Value::promise().type_of(), "object");
}

#[test]
fn test_typeof_null_quirk() {
    assert_eq!(Value::null().type_of(), "object");
    assert_eq!(Value::null().tag(), "Null");
}

#[test]
fn test_slot_tags_for_builtins() {
    assert_eq!(Value::date(DateValue::now()).tag(), "Date");
    assert_eq!(Value::regexp(RegExpValue::new("a", "").unwrap()).tag(), "RegExp");
    assert_eq!(Value::weak_map().tag(), "WeakMap");
    assert_eq!(Value::weak_set().tag(), "WeakSet");
    assert_eq!(Value::promise().tag(), "Promise");
    assert_eq!(Value::from_error(ErrorValue::new("x")).tag(), "Error");
}

#[test]
fn test_function_kind_tags() {
    assert_eq!(Value::function_native("f").tag(), "Function");
    assert_eq!(Value::generator_function("g").tag(), "GeneratorFunction");
    assert_eq!(Value::async_function("a").tag(), "AsyncFunction");
    // Class constructors carry the plain Function tag; only their
    // source text tells them apart.
    assert_eq!(Value::class_constructor("A").tag(), "Function");
}

#[test]
fn test_error_subclass_keeps_error_tag() {
    let err = Value::from_error(ErrorValue::subclass("ParseFailure", "bad input"));
    assert_eq!(err.tag(), "Error");
    assert_eq!(err.constructor_name(), Some("ParseFailure".to_string()));
}

#[test]
fn test_prototype_links() {
    assert!(matches!(
        Value::object().prototype(),
        Some(Prototype::ObjectRoot)
    ));
    assert!(matches!(
        Value::object_without_proto().prototype(),
        Some(Prototype::Null)
    ));
    assert!(matches!(
        Value::class_instance("Point").prototype(),
        Some(Prototype::Chained(_))
    ));
    assert!(Value::number(1.0).prototype().is_none());
}

#[test]
fn test_object_with_proto_chains_to_given_object() {
    let base = Value::object();
    base.set("shared", Value::boolean(true));
    let derived = Value::object_with_proto(&base);
    match derived.prototype() {
        Some(Prototype::Chained(proto)) => {
            assert!(proto.equals(&base));
            assert_eq!(proto.get("shared"), Some(Value::boolean(true)));
        }
        other => panic!("expected a chained prototype, got {:?}", other),
    }
    // The link is to the prototype; own properties stay empty.
    assert_eq!(derived.own_property_count(), 0);
}

#[test]
fn test_primitive_accessors() {
    assert_eq!(Value::boolean(true).as_boolean(), Some(true));
    assert_eq!(Value::number(2.5).as_number(), Some(2.5));
    assert_eq!(Value::string("hi").as_string(), Some("hi"));
    assert_eq!(
        Value::bigint(12).as_bigint().map(|bi| bi.to_string()),
        Some("12".to_string())
    );
    // Each accessor is narrow: it answers None for every other variant,
    // boxed wrappers included.
    assert_eq!(Value::boxed_boolean(true).as_boolean(), None);
    assert_eq!(Value::string("2.5").as_number(), None);
    assert_eq!(Value::boxed_string("hi").as_string(), None);
    assert_eq!(Value::number(12.0).as_bigint(), None);
}

#[test]
fn test_symbol_keyed_properties() {
    let obj = Value::object();
    let key = SymbolValue::with_description("hidden");
    obj.set_symbol(&key, Value::number(9.0));
    assert_eq!(obj.get_symbol(&key), Some(Value::number(9.0)));
    // Symbol-keyed properties do not show up in the string-keyed count.
    assert_eq!(obj.own_property_count(), 0);
}

#[test]
fn test_boxed_primitives_are_reference_values() {
    let a = Value::boxed_string("x");
    let b = Value::boxed_string("x");
    assert!(!a.equals(&b));
    assert!(a.equals(&a.clone()));
    assert!(a.object_identity().is_some());
    assert!(Value::string("x").object_identity().is_none());
}

#[test]
fn test_promise_states() {
    let fulfilled = Value::promise_fulfilled(Value::number(1.0));
    match &fulfilled {
        Value::Promise(data) => {
            assert!(matches!(data.borrow().state(), PromiseState::Fulfilled(_)));
        }
        other => panic!("expected a promise, got {:?}", other),
    }

    let rejected = Value::promise_rejected(Value::string("boom"));
    match &rejected {
        Value::Promise(data) => {
            assert!(matches!(data.borrow().state(), PromiseState::Rejected(_)));
        }
        other => panic!("expected a promise, got {:?}", other),
    }
}

#[test]
fn test_function_source_round_trip() {
    let f = Value::function_with_source("weird", "class ical() {}");
    match &f {
        Value::Function(data) => {
            assert_eq!(data.kind(), FunctionKind::Normal);
            assert_eq!(data.source(), "class ical() {}");
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_display_forms() {
    assert_eq!(Value::object().to_string(), "[object Object]");
    assert_eq!(
        Value::array_from(vec![Value::number(1.0), Value::number(2.0)]).to_string(),
        "1,2"
    );
    assert_eq!(Value::bigint(5).to_string(), "5n");
    assert_eq!(
        Value::from_error(ErrorValue::type_error("bad")).to_string(),
        "TypeError: bad"
    );
    assert_eq!(
        Value::regexp(RegExpValue::new("a+", "i").unwrap()).to_string(),
        "/a+/i"
    );
}
