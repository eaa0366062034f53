//! Vetur `tags` and `attributes` tables.
//!
//! Both tables are JSON objects keyed by interpolated tag names. Keys keep
//! their first insertion position; a component or attribute declared twice
//! overwrites the earlier entry in place.

use serde::Serialize;
use serde_json::{Map, Value};
use wt_config::LibraryConfig;
use wt_core::{ComponentRecord, PlainValue};

use crate::error::EmitError;

#[derive(Debug, Serialize)]
struct TagDescriptor<'a> {
    attributes: Vec<&'a PlainValue>,
}

#[derive(Debug, Serialize)]
struct AttributeDescriptor<'a> {
    #[serde(skip_serializing_if = "is_absent")]
    description: &'a PlainValue,
    #[serde(rename = "type", skip_serializing_if = "is_absent")]
    kind: &'a PlainValue,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_absent(value: &&PlainValue) -> bool {
    value.is_absent()
}

/// `<tag_prefix><name>` → `{ "attributes": [attribute names] }`.
///
/// # Errors
/// Returns `EmitError::Json` if an entry cannot be converted to JSON.
pub fn tags_table(
    components: &[ComponentRecord],
    library: &LibraryConfig,
) -> Result<Map<String, Value>, EmitError> {
    let mut table = Map::new();
    for component in components {
        let descriptor = TagDescriptor {
            attributes: component.attributes.iter().map(|a| &a.name).collect(),
        };
        table.insert(
            format!("{}{}", library.tag_prefix, component.name),
            serde_json::to_value(descriptor)?,
        );
    }
    Ok(table)
}

/// `<tag_prefix><name>/<attribute>` → `{ "description", "type" }`.
///
/// # Errors
/// Returns `EmitError::Json` if an entry cannot be converted to JSON.
pub fn attributes_table(
    components: &[ComponentRecord],
    library: &LibraryConfig,
) -> Result<Map<String, Value>, EmitError> {
    let mut table = Map::new();
    for component in components {
        for attribute in &component.attributes {
            tracing::debug!(
                component = %component.name,
                attribute = %attribute.name,
                kind = %attribute.kind,
                "emitting attribute"
            );
            let descriptor = AttributeDescriptor {
                description: &attribute.description,
                kind: &attribute.kind,
            };
            table.insert(
                format!("{}{}/{}", library.tag_prefix, component.name, attribute.name),
                serde_json::to_value(descriptor)?,
            );
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wt_core::AttributeRecord;

    fn attr(name: &str, kind: &str, description: &str) -> AttributeRecord {
        AttributeRecord {
            name: name.into(),
            kind: kind.into(),
            default_value: PlainValue::empty(),
            description: description.into(),
        }
    }

    fn component(name: &str, attributes: Vec<AttributeRecord>) -> ComponentRecord {
        ComponentRecord {
            name: name.into(),
            attributes,
            ..ComponentRecord::default()
        }
    }

    #[test]
    fn tags_list_attribute_names() {
        let components = [
            component("button", vec![attr("size", "string", ""), attr("disabled", "boolean", "")]),
            component("alert", vec![]),
        ];
        let table = tags_table(&components, &LibraryConfig::default()).unwrap();
        assert_eq!(
            Value::Object(table),
            json!({
                "tiny-button": { "attributes": ["size", "disabled"] },
                "tiny-alert": { "attributes": [] },
            })
        );
    }

    #[test]
    fn attributes_keyed_by_tag_and_name() {
        let components = [component("button", vec![attr("size", "string", "尺寸")])];
        let table = attributes_table(&components, &LibraryConfig::default()).unwrap();
        assert_eq!(
            Value::Object(table),
            json!({ "tiny-button/size": { "description": "尺寸", "type": "string" } })
        );
    }

    #[test]
    fn repeated_key_overwrites_in_first_position() {
        let components = [
            component("a", vec![attr("x", "1", "")]),
            component("b", vec![]),
            component("a", vec![attr("y", "2", "")]),
        ];
        let table = tags_table(&components, &LibraryConfig::default()).unwrap();
        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(keys, ["tiny-a", "tiny-b"]);
        assert_eq!(table["tiny-a"], json!({ "attributes": ["y"] }));
    }

    #[test]
    fn absent_fields_follow_json_conventions() {
        let components = [component(
            "grid",
            vec![AttributeRecord {
                name: PlainValue::Absent,
                kind: PlainValue::Absent,
                default_value: PlainValue::Absent,
                description: "d".into(),
            }],
        )];
        let library = LibraryConfig::default();

        let tags = tags_table(&components, &library).unwrap();
        assert_eq!(tags["tiny-grid"], json!({ "attributes": [null] }));

        let attributes = attributes_table(&components, &library).unwrap();
        assert_eq!(attributes["tiny-grid/undefined"], json!({ "description": "d" }));
    }

    #[test]
    fn non_string_names_interpolate() {
        let components = [ComponentRecord {
            name: PlainValue::Array(vec!["a".into(), PlainValue::Bool(true)]),
            attributes: vec![AttributeRecord {
                name: PlainValue::Object(Vec::new()),
                ..AttributeRecord::default()
            }],
            ..ComponentRecord::default()
        }];
        let table = attributes_table(&components, &LibraryConfig::default()).unwrap();
        assert!(table.contains_key("tiny-a,true/[object Object]"));
    }
}
