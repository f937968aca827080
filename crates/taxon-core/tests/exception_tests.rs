//! Public surface of the taxonomy across every variant.

use serde_json::{json, Map, Value};
use strum::IntoEnumIterator;
use taxon_core::{
    Cause, Construct, ConstructError, DecoratorFields, DecoratorType, Exception, ExceptionKind,
    ExternalFields, IndexFields, Init, InterruptFields, NotImplementedFields, TimeoutFields,
};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_display_and_value_for_every_kind() {
    for kind in ExceptionKind::iter() {
        let ex = Exception::from_message(kind, "boom");
        assert_eq!(ex.to_string(), format!("{} [0x{:x}]: boom", kind.name(), kind.code()));
        assert_eq!(ex.value_of(), kind.code());
        assert_eq!(ex.name(), kind.name());
    }
}

#[test]
fn test_default_message_for_every_kind() {
    for kind in ExceptionKind::iter() {
        let ex = Exception::new(kind);
        assert_eq!(ex.message(), kind.default_message());
        assert!(ex.data().is_none());
        assert!(ex.cause().is_none());
    }
}

#[test]
fn test_every_kind_is_an_exception() {
    for kind in ExceptionKind::iter() {
        assert!(Exception::new(kind).is_a(ExceptionKind::Exception));
    }
}

#[test]
fn test_free_form_data_is_accepted_by_every_kind() {
    for kind in ExceptionKind::iter() {
        let data = object(json!({ "attempt": 2 }));
        let ex = Exception::build(kind, Construct::from_fields(data)).unwrap();
        assert_eq!(ex.data().and_then(|d| d.get("attempt")), Some(&json!(2)));
    }
}

#[test]
fn test_typed_fields_rejected_outside_their_family() {
    let result = Exception::build(
        ExceptionKind::Interrupt,
        Construct::from_fields(TimeoutFields::default().operation_timeout(3)),
    );
    assert!(matches!(result, Err(ConstructError::Schema { .. })));

    let result = Exception::build(
        ExceptionKind::Format,
        Construct::from_fields(NotImplementedFields::default()),
    );
    assert!(matches!(result, Err(ConstructError::Schema { .. })));
}

#[test]
fn test_negative_upper_bound_for_every_shape() {
    let fields = IndexFields::default().index(1).upper_bound(-1);

    assert!(Exception::index(fields.clone()).is_err());
    let construct = Construct::from_fields(fields.clone());
    assert!(Exception::build(ExceptionKind::Index, construct).is_err());
    assert!(Exception::build(
        ExceptionKind::Index,
        Construct::message_with("explicit", Init::new(fields)),
    )
    .is_err());
}

#[test]
fn test_bounds_error_converts_to_range_exception() {
    let err = Exception::index(IndexFields::default().upper_bound(-7)).unwrap_err();
    let ex: Exception = err.into();
    assert_eq!(ex.kind(), ExceptionKind::Range);
    assert_eq!(ex.data().and_then(|d| d.get("upperBound")), Some(&json!(-7)));
}

#[test]
fn test_cause_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "socket idle");
    let timeout = Exception::timeout(
        Init::new(TimeoutFields::default().operation_type("read")).with_cause(Cause::native(io)),
    );
    let external = Exception::external(
        Init::new(ExternalFields::default().dependency_type("cache")).with_cause(timeout),
    );

    assert_eq!(external.message(), "An external cache failed.");

    let cause = external.cause().unwrap();
    assert_eq!(cause.name(), "TimeoutException");
    assert_eq!(cause.message(), "A read timed out.");

    let inner = cause.as_exception().and_then(|ex| ex.cause()).unwrap();
    assert_eq!(inner.name(), "Error");
    assert_eq!(inner.message(), "socket idle");

    use std::error::Error;
    let source = external.source().and_then(|s| s.source()).unwrap();
    assert_eq!(source.to_string(), "socket idle");
}

#[test]
fn test_data_excludes_cause() {
    let ex = Exception::interrupt(
        Init::new(InterruptFields::default()).with_cause(Exception::new(ExceptionKind::Memory)),
    );
    assert!(ex.data().is_none());
    assert!(ex.cause().is_some());
}

#[test]
fn test_decorator_types() {
    let expected = [
        (DecoratorType::Class, "A class decorator failed to apply."),
        (DecoratorType::Method, "A method decorator failed to apply."),
        (DecoratorType::Accessor, "An accessor decorator failed to apply."),
        (DecoratorType::Property, "A property decorator failed to apply."),
        (DecoratorType::Parameter, "A parameter decorator failed to apply."),
    ];

    for (decorator_type, message) in expected {
        let ex = Exception::decorator(DecoratorFields::default().decorator_type(decorator_type));
        assert_eq!(ex.message(), message);
    }
}

#[test]
fn test_exceptions_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Exception>();
    assert_send_sync::<Cause>();
}

#[test]
fn test_free_form_negative_upper_bound_is_rejected() {
    let data = object(json!({ "index": 5, "upperBound": -1 }));

    let result = Exception::build(ExceptionKind::Index, Construct::from_fields(data.clone()));
    assert!(matches!(result, Err(ConstructError::Bounds(_))));

    let result = Exception::build(
        ExceptionKind::Index,
        Construct::message_with("explicit", Init::new(data.clone())),
    );
    assert!(matches!(result, Err(ConstructError::Bounds(_))));

    let result = Exception::with_data(ExceptionKind::Index, data);
    assert!(matches!(result, Err(ConstructError::Bounds(_))));
}

#[test]
fn test_free_form_data_synthesizes_like_typed_fields() {
    let cases = [
        (
            ExceptionKind::Index,
            json!({ "index": 5, "upperBound": 9 }),
            "The index 5 is outside the bounds of an array. It must be 0, 9, or between them.",
        ),
        (
            ExceptionKind::Timeout,
            json!({ "operationName": "example", "operationTimeout": 1 }),
            "The operation \"example\" timed after 1 second.",
        ),
        (
            ExceptionKind::Iteration,
            json!({ "operationType": "loop", "iterationCount": 3 }),
            "A loop exceeded the maximum iteration count of 3 iterations.",
        ),
        (
            ExceptionKind::Aborted,
            json!({ "operationType": "import" }),
            "An import was interrupted.",
        ),
    ];

    for (kind, data, message) in cases {
        let ex = Exception::with_data(kind, object(data.clone())).unwrap();
        assert_eq!(ex.message(), message, "{}", kind);
        assert_eq!(ex.data().cloned().map(Value::Object), Some(data));
    }
}

#[test]
fn test_free_form_keeps_unknown_keys_as_data() {
    let data = object(json!({ "operationName": "sync", "attempt": 4 }));
    let ex = Exception::with_data(ExceptionKind::Timeout, data).unwrap();

    assert_eq!(ex.message(), "The operation \"sync\" timed out.");
    assert_eq!(ex.data().and_then(|d| d.get("attempt")), Some(&json!(4)));
}

#[test]
fn test_free_form_with_mistyped_field_is_rejected() {
    // Timeouts are whole seconds
    let data = object(json!({ "operationTimeout": 1.5 }));
    let result = Exception::with_data(ExceptionKind::Timeout, data);
    assert!(matches!(
        result,
        Err(ConstructError::Fields { kind: ExceptionKind::Timeout, .. })
    ));

    let data = object(json!({ "decoratorType": "function" }));
    let result = Exception::with_data(ExceptionKind::Decorator, data);
    assert!(matches!(result, Err(ConstructError::Fields { .. })));
}
