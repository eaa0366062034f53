//! Property lookup over object literal nodes.
//!
//! Two lookups exist on purpose and never share a code path:
//! - [`named_properties`] matches identifier keys (`name: ...`) by name.
//! - [`locale_entry`] matches string-literal keys (`"zh-CN": ...`) by value.

use ast_grep_core::Node;

use crate::literal::unquote_js_string;

/// Key of an object literal property that can be read statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    /// `name: value` or shorthand `name`.
    Identifier(String),
    /// `"name": value`, holding the decoded string.
    String(String),
}

/// Statically keyed properties of an object literal, in declaration order.
///
/// Computed keys, numeric keys, spreads and methods are skipped. A shorthand
/// property pairs its key with the identifier node itself, which
/// reconstructs to an absent value.
pub fn object_entries<'r, D: ast_grep_core::Doc>(
    object: &Node<'r, D>,
) -> Vec<(PropertyKey, Node<'r, D>)> {
    let mut entries = Vec::new();
    for child in object.children() {
        match child.kind().as_ref() {
            "pair" => {
                let (Some(key), Some(value)) = (child.field("key"), child.field("value")) else {
                    continue;
                };
                let key = match key.kind().as_ref() {
                    "property_identifier" => PropertyKey::Identifier(key.text().to_string()),
                    "string" => PropertyKey::String(unquote_js_string(&key.text())),
                    _ => continue,
                };
                entries.push((key, value));
            }
            "shorthand_property_identifier" => {
                entries.push((PropertyKey::Identifier(child.text().to_string()), child));
            }
            _ => {}
        }
    }
    entries
}

/// Identifier-keyed property lookup for one object literal.
pub struct PropertyMap<'r, D: ast_grep_core::Doc> {
    entries: Vec<(String, Node<'r, D>)>,
}

impl<'r, D: ast_grep_core::Doc> PropertyMap<'r, D> {
    /// Value node of the property named `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&Node<'r, D>> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the identifier key → value node lookup of an object literal.
///
/// A repeated key keeps the last declared value.
pub fn named_properties<'r, D: ast_grep_core::Doc>(object: &Node<'r, D>) -> PropertyMap<'r, D> {
    let mut entries: Vec<(String, Node<'r, D>)> = Vec::new();
    for (key, value) in object_entries(object) {
        let PropertyKey::Identifier(name) = key else {
            continue;
        };
        if let Some(slot) = entries.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = value;
        } else {
            entries.push((name, value));
        }
    }
    PropertyMap { entries }
}

/// Value node of the first string-keyed property equal to `locale`.
///
/// Identifier keys never match, even when their name equals the tag.
pub fn locale_entry<'r, D: ast_grep_core::Doc>(
    object: &Node<'r, D>,
    locale: &str,
) -> Option<Node<'r, D>> {
    object_entries(object)
        .into_iter()
        .find_map(|(key, value)| match key {
            PropertyKey::String(tag) if tag == locale => Some(value),
            _ => None,
        })
}

/// Strip any number of wrapping parentheses from an expression.
pub fn unwrap_parens<'r, D: ast_grep_core::Doc>(mut node: Node<'r, D>) -> Node<'r, D> {
    while node.kind().as_ref() == "parenthesized_expression" {
        let Some(inner) = node
            .children()
            .find(|c| c.is_named() && c.kind().as_ref() != "comment")
        else {
            break;
        };
        node = inner;
    }
    node
}

/// Whether the node (after unwrapping parentheses) is an object literal.
pub fn as_object<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let node = unwrap_parens(node.clone());
    (node.kind().as_ref() == "object").then_some(node)
}

/// Whether the node (after unwrapping parentheses) is an array literal.
pub fn as_array<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    let node = unwrap_parens(node.clone());
    (node.kind().as_ref() == "array").then_some(node)
}
