//! Field extractors for a component's member lists.
//!
//! Each extractor takes the value node of a `props` / `events` / `slots` /
//! `methods` property. A missing or non-array node yields an empty list;
//! each element must be an object literal, otherwise the module is rejected
//! with [`ExtractError::MalformedElement`]. A hole (`[a, , b]`) is malformed
//! too.

use ast_grep_core::Node;
use wt_core::{AttributeRecord, EventRecord, MemberList, MethodRecord, PlainValue, SlotRecord};

use crate::error::ExtractError;
use crate::literal::{array_elements, reconstruct};
use crate::properties::{PropertyMap, as_array, as_object, locale_entry, named_properties};

/// Extract `props` entries into attribute records.
///
/// # Errors
/// Returns `ExtractError::MalformedElement` if an element is not an object literal.
pub fn extract_attributes<D: ast_grep_core::Doc>(
    node: Option<&Node<D>>,
    locale: &str,
) -> Result<Vec<AttributeRecord>, ExtractError> {
    extract_list(node, MemberList::Props, |props| {
        let defaults = AttributeRecord::default();
        AttributeRecord {
            name: field_or(props, "name", defaults.name),
            kind: field_or(props, "type", defaults.kind),
            default_value: field_or(props, "defaultValue", defaults.default_value),
            description: localized_description(props, locale),
        }
    })
}

/// Extract `events` entries into event records.
///
/// # Errors
/// Returns `ExtractError::MalformedElement` if an element is not an object literal.
pub fn extract_events<D: ast_grep_core::Doc>(
    node: Option<&Node<D>>,
    locale: &str,
) -> Result<Vec<EventRecord>, ExtractError> {
    extract_list(node, MemberList::Events, |props| {
        let defaults = EventRecord::default();
        EventRecord {
            name: field_or(props, "name", defaults.name),
            kind: field_or(props, "type", defaults.kind),
            description: localized_description(props, locale),
        }
    })
}

/// Extract `slots` entries into slot records.
///
/// # Errors
/// Returns `ExtractError::MalformedElement` if an element is not an object literal.
pub fn extract_slots<D: ast_grep_core::Doc>(
    node: Option<&Node<D>>,
    locale: &str,
) -> Result<Vec<SlotRecord>, ExtractError> {
    extract_list(node, MemberList::Slots, |props| {
        let defaults = SlotRecord::default();
        SlotRecord {
            name: field_or(props, "name", defaults.name),
            description: localized_description(props, locale),
        }
    })
}

/// Extract `methods` entries into method records.
///
/// Methods carry a plain `description` field rather than a localized `desc`.
///
/// # Errors
/// Returns `ExtractError::MalformedElement` if an element is not an object literal.
pub fn extract_methods<D: ast_grep_core::Doc>(
    node: Option<&Node<D>>,
) -> Result<Vec<MethodRecord>, ExtractError> {
    extract_list(node, MemberList::Methods, |props| {
        let defaults = MethodRecord::default();
        MethodRecord {
            name: field_or(props, "name", defaults.name),
            description: field_or(props, "description", defaults.description),
        }
    })
}

fn extract_list<D, T, F>(
    node: Option<&Node<D>>,
    list: MemberList,
    build: F,
) -> Result<Vec<T>, ExtractError>
where
    D: ast_grep_core::Doc,
    F: Fn(&PropertyMap<'_, D>) -> T,
{
    let Some(array) = node.and_then(as_array) else {
        return Ok(Vec::new());
    };
    array_elements(&array)
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let malformed = |kind: String| ExtractError::MalformedElement { list, index, kind };
            let element = slot.as_ref().ok_or_else(|| malformed("hole".to_string()))?;
            let object = as_object(element).ok_or_else(|| malformed(element.kind().to_string()))?;
            Ok(build(&named_properties(&object)))
        })
        .collect()
}

/// Reconstruct an identifier-keyed field, or fall back to its default.
pub(crate) fn field_or<D: ast_grep_core::Doc>(
    props: &PropertyMap<'_, D>,
    key: &str,
    default: PlainValue,
) -> PlainValue {
    props.get(key).map_or(default, reconstruct)
}

/// The `desc` entry for `locale`, or an empty string.
fn localized_description<D: ast_grep_core::Doc>(
    props: &PropertyMap<'_, D>,
    locale: &str,
) -> PlainValue {
    props
        .get("desc")
        .and_then(as_object)
        .and_then(|desc| locale_entry(&desc, locale))
        .map_or_else(PlainValue::empty, |value| reconstruct(&value))
}

#[cfg(test)]
#[path = "tests/members.rs"]
mod tests;
