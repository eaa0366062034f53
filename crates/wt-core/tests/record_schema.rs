//! JsonSchema validation tests for serialized component records.

use schemars::schema_for;
use wt_core::{
    AttributeRecord, ComponentRecord, EventRecord, MethodRecord, PlainValue, SlotRecord,
};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! validates {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

validates!(attribute_defaults, AttributeRecord, AttributeRecord::default());
validates!(event_defaults, EventRecord, EventRecord::default());
validates!(slot_defaults, SlotRecord, SlotRecord::default());
validates!(method_defaults, MethodRecord, MethodRecord::default());
validates!(component_defaults, ComponentRecord, ComponentRecord::default());

validates!(
    attribute_with_absent_and_nested_values,
    AttributeRecord,
    AttributeRecord {
        name: "size".into(),
        kind: PlainValue::Absent,
        default_value: PlainValue::Object(vec![(
            "sizes".to_string(),
            PlainValue::Array(vec!["small".into(), 2.0.into(), true.into()]),
        )]),
        description: "尺寸".into(),
    }
);

validates!(
    populated_component,
    ComponentRecord,
    ComponentRecord {
        name: "button".into(),
        description: PlainValue::Absent,
        attributes: vec![AttributeRecord {
            name: "size".into(),
            kind: "string".into(),
            ..AttributeRecord::default()
        }],
        events: vec![EventRecord::default()],
        slots: vec![SlotRecord::default()],
        methods: vec![MethodRecord::default()],
    }
);

#[test]
fn absent_name_is_not_required() {
    let schema = serde_json::to_value(schema_for!(SlotRecord)).unwrap();
    let instance = serde_json::json!({"description": ""});
    assert!(validate_against_schema(&schema, &instance).is_empty());
}

validates!(
    component_with_unresolved_fields,
    ComponentRecord,
    ComponentRecord {
        name: PlainValue::Absent,
        description: PlainValue::Absent,
        attributes: vec![AttributeRecord {
            name: PlainValue::Absent,
            kind: PlainValue::Absent,
            default_value: PlainValue::Absent,
            description: PlainValue::Absent,
        }],
        ..ComponentRecord::default()
    }
);

#[test]
fn only_lists_are_required_on_components() {
    let schema = serde_json::to_value(schema_for!(ComponentRecord)).unwrap();
    let mut required: Vec<&str> = schema["required"]
        .as_array()
        .map(|items| items.iter().filter_map(serde_json::Value::as_str).collect())
        .unwrap_or_default();
    required.sort_unstable();
    assert_eq!(required, ["attributes", "events", "methods", "slots"]);
}
