//! JetBrains web-types document.
//!
//! Field order of every struct is the key order of the written JSON.

use serde::Serialize;
use wt_config::LibraryConfig;
use wt_core::{ComponentRecord, PlainValue};

use crate::casing::to_pascal_case;

pub const WEB_TYPES_SCHEMA: &str =
    "https://raw.githubusercontent.com/JetBrains/web-types/master/schema/web-types.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebTypes {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub framework: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "js-types-syntax")]
    pub js_types_syntax: &'static str,
    #[serde(rename = "description-markup")]
    pub description_markup: &'static str,
    pub contributions: Contributions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributions {
    pub html: HtmlContributions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlContributions {
    pub tags: Vec<TagEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagEntry {
    pub name: String,
    pub source: SourceSymbol,
    #[serde(skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
    #[serde(rename = "doc-url")]
    pub doc_url: String,
    pub attributes: Vec<AttributeEntry>,
    pub events: Vec<MemberEntry>,
    pub methods: Vec<MemberEntry>,
    pub slots: Vec<MemberEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSymbol {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeEntry {
    #[serde(skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
    /// Single-element list; an absent type is written as `[null]`.
    #[serde(rename = "type")]
    pub kind: Vec<PlainValue>,
    #[serde(skip_serializing_if = "PlainValue::is_absent")]
    pub default: PlainValue,
    #[serde(rename = "doc-url")]
    pub doc_url: String,
}

/// Event, method or slot entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberEntry {
    #[serde(skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
    #[serde(rename = "doc-url")]
    pub doc_url: String,
}

/// Build the web-types document for `components`, in input order.
#[must_use]
pub fn build_web_types(components: &[ComponentRecord], library: &LibraryConfig) -> WebTypes {
    WebTypes {
        schema: WEB_TYPES_SCHEMA,
        framework: library.framework.clone(),
        name: library.name.clone(),
        version: library.version.clone(),
        js_types_syntax: "typescript",
        description_markup: "markdown",
        contributions: Contributions {
            html: HtmlContributions {
                tags: components
                    .iter()
                    .map(|component| tag_entry(component, library))
                    .collect(),
            },
        },
    }
}

fn tag_entry(component: &ComponentRecord, library: &LibraryConfig) -> TagEntry {
    let name = component.name.to_string();
    let page_url = format!("{}/{name}", library.doc_base_url);
    let api_url = format!("{page_url}#api");
    let member = |name: &PlainValue, description: &PlainValue| MemberEntry {
        name: name.clone(),
        description: description.clone(),
        doc_url: api_url.clone(),
    };

    TagEntry {
        name: format!("{}{name}", library.tag_prefix),
        source: SourceSymbol {
            symbol: format!("{}{}", library.symbol_prefix, to_pascal_case(&name)),
        },
        description: component.description.clone(),
        attributes: component
            .attributes
            .iter()
            .map(|attr| AttributeEntry {
                name: attr.name.clone(),
                description: attr.description.clone(),
                kind: vec![attr.kind.clone()],
                default: attr.default_value.clone(),
                doc_url: api_url.clone(),
            })
            .collect(),
        events: component
            .events
            .iter()
            .map(|e| member(&e.name, &e.description))
            .collect(),
        methods: component
            .methods
            .iter()
            .map(|m| member(&m.name, &m.description))
            .collect(),
        slots: component
            .slots
            .iter()
            .map(|s| member(&s.name, &s.description))
            .collect(),
        doc_url: page_url,
    }
}
