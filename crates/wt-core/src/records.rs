//! Normalized component records.
//!
//! Every record kind is a struct whose fields all hold a [`PlainValue`], so a
//! record always exposes its full key set. `Default` yields the values used
//! when the source object omits a field.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

use crate::value::PlainValue;

/// One entry of a component's `props` list.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRecord {
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(rename = "type", default, skip_serializing_if = "PlainValue::is_absent")]
    pub kind: PlainValue,
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub default_value: PlainValue,
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
}

impl Default for AttributeRecord {
    fn default() -> Self {
        Self {
            name: "unknown".into(),
            kind: "unknown".into(),
            default_value: PlainValue::empty(),
            description: PlainValue::empty(),
        }
    }
}

/// One entry of a component's `events` list.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(rename = "type", default, skip_serializing_if = "PlainValue::is_absent")]
    pub kind: PlainValue,
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
}

impl Default for EventRecord {
    fn default() -> Self {
        Self {
            name: "unknown".into(),
            kind: PlainValue::empty(),
            description: PlainValue::empty(),
        }
    }
}

/// One entry of a component's `slots` list.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SlotRecord {
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
}

impl Default for SlotRecord {
    fn default() -> Self {
        Self {
            name: "unknown".into(),
            description: PlainValue::empty(),
        }
    }
}

/// One entry of a component's `methods` list.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MethodRecord {
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
}

impl Default for MethodRecord {
    fn default() -> Self {
        Self {
            name: "unknown".into(),
            description: PlainValue::empty(),
        }
    }
}

/// A component extracted from one element of an `apis` array.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ComponentRecord {
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub name: PlainValue,
    #[serde(default, skip_serializing_if = "PlainValue::is_absent")]
    pub description: PlainValue,
    pub attributes: Vec<AttributeRecord>,
    pub events: Vec<EventRecord>,
    pub slots: Vec<SlotRecord>,
    pub methods: Vec<MethodRecord>,
}

impl Default for ComponentRecord {
    fn default() -> Self {
        Self {
            name: "Unnamed Component".into(),
            description: PlainValue::empty(),
            attributes: Vec::new(),
            events: Vec::new(),
            slots: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// The member lists a component declares, named by their source property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberList {
    Props,
    Events,
    Slots,
    Methods,
}

impl MemberList {
    /// Property name of the list inside a component object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Props => "props",
            Self::Events => "events",
            Self::Slots => "slots",
            Self::Methods => "methods",
        }
    }
}

impl fmt::Display for MemberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
