use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wt_config::{LibraryConfig, OutputConfig};
use wt_core::{AttributeRecord, ComponentRecord, PlainValue};
use wt_emit::{EmitError, write_descriptors, write_json};

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

fn components() -> Vec<ComponentRecord> {
    vec![ComponentRecord {
        name: "tabs".into(),
        description: "标签页".into(),
        attributes: vec![AttributeRecord {
            name: "v-model".into(),
            kind: "string".into(),
            default_value: PlainValue::empty(),
            description: "绑定值".into(),
        }],
        ..ComponentRecord::default()
    }]
}

#[test]
fn writes_all_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputConfig {
        dir: dir.path().join("out").display().to_string(),
        ..OutputConfig::default()
    };

    let written = write_descriptors(&components(), &LibraryConfig::default(), &output).unwrap();
    assert_eq!(written.web_types, dir.path().join("out/web-types.json"));

    let web_types = read_json(&written.web_types);
    assert_eq!(web_types["contributions"]["html"]["tags"][0]["name"], json!("tiny-tabs"));
    assert_eq!(
        web_types["contributions"]["html"]["tags"][0]["attributes"][0]["default"],
        json!("")
    );

    assert_eq!(
        read_json(&written.tags),
        json!({ "tiny-tabs": { "attributes": ["v-model"] } })
    );
    assert_eq!(
        read_json(&written.attributes),
        json!({ "tiny-tabs/v-model": { "description": "绑定值", "type": "string" } })
    );
}

#[test]
fn output_is_pretty_printed_with_two_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.json");
    write_json(&path, &json!({ "a": [1] })).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
}

#[test]
fn empty_component_list_still_writes_documents() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputConfig {
        dir: dir.path().display().to_string(),
        ..OutputConfig::default()
    };
    let written = write_descriptors(&[], &LibraryConfig::default(), &output).unwrap();
    assert_eq!(
        read_json(&written.web_types)["contributions"]["html"]["tags"],
        json!([])
    );
    assert_eq!(read_json(&written.tags), json!({}));
}

#[test]
fn unwritable_location_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();
    let target = blocker.join("nested.json");

    let err = write_json(&target, &json!({})).unwrap_err();
    assert!(matches!(err, EmitError::Io { ref path, .. } if *path == target));
}
