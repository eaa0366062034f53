//! Component extractor: one `apis` element → [`ComponentRecord`].

use ast_grep_core::Node;
use wt_core::ComponentRecord;

use crate::error::ExtractError;
use crate::members::{extract_attributes, extract_events, extract_methods, extract_slots, field_or};
use crate::properties::named_properties;

/// Extract one component from an object literal in an `apis` array.
///
/// The component's attribute list is read from its `props` property.
///
/// # Errors
/// Returns `ExtractError` if one of the member lists holds a non-object element.
pub fn extract_component<D: ast_grep_core::Doc>(
    object: &Node<D>,
    locale: &str,
) -> Result<ComponentRecord, ExtractError> {
    let props = named_properties(object);
    let defaults = ComponentRecord::default();
    Ok(ComponentRecord {
        name: field_or(&props, "name", defaults.name),
        description: field_or(&props, "description", defaults.description),
        attributes: extract_attributes(props.get("props"), locale)?,
        events: extract_events(props.get("events"), locale)?,
        slots: extract_slots(props.get("slots"), locale)?,
        methods: extract_methods(props.get("methods"))?,
    })
}

#[cfg(test)]
#[path = "tests/component.rs"]
mod tests;
