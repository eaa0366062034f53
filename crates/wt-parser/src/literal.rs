//! Literal reconstruction: AST literal nodes → [`PlainValue`].
//!
//! Only statically written data is understood. Identifiers, calls,
//! template strings, `null`, negative numbers (unary expressions) and every
//! other computed form reconstruct to [`PlainValue::Absent`].

use ast_grep_core::Node;
use wt_core::PlainValue;

use crate::properties::{self, PropertyKey};

/// The closed set of node shapes the reconstructor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Number,
    Boolean(bool),
    Array,
    Object,
    Other,
}

impl LiteralKind {
    /// Classify a node by its tree-sitter kind.
    pub fn of<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        match node.kind().as_ref() {
            "string" => Self::String,
            "number" => Self::Number,
            "true" => Self::Boolean(true),
            "false" => Self::Boolean(false),
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::Other,
        }
    }
}

/// Reconstruct a literal expression node into a plain value.
///
/// Never fails; unsupported shapes become [`PlainValue::Absent`].
pub fn reconstruct<D: ast_grep_core::Doc>(node: &Node<D>) -> PlainValue {
    let node = properties::unwrap_parens(node.clone());
    match LiteralKind::of(&node) {
        LiteralKind::String => PlainValue::String(unquote_js_string(&node.text())),
        LiteralKind::Number => {
            parse_js_number(&node.text()).map_or(PlainValue::Absent, PlainValue::Number)
        }
        LiteralKind::Boolean(b) => PlainValue::Bool(b),
        LiteralKind::Array => {
            let items = array_elements(&node)
                .iter()
                .map(|slot| slot.as_ref().map_or(PlainValue::Absent, reconstruct))
                .collect();
            PlainValue::Array(items)
        }
        LiteralKind::Object => {
            let mut entries = Vec::new();
            for (key, value) in properties::object_entries(&node) {
                let key = match key {
                    PropertyKey::Identifier(name) | PropertyKey::String(name) => name,
                };
                PlainValue::insert_entry(&mut entries, key, reconstruct(&value));
            }
            PlainValue::Object(entries)
        }
        LiteralKind::Other => PlainValue::Absent,
    }
}

/// Element slots of an array literal, in source order.
///
/// A hole (`[a, , b]`) occupies a slot as `None`. A single trailing comma
/// closes the last element without adding a slot, so `[a,]` has one slot.
/// Comments are dropped.
pub fn array_elements<'r, D: ast_grep_core::Doc>(
    array: &Node<'r, D>,
) -> Vec<Option<Node<'r, D>>> {
    let mut slots = Vec::new();
    let mut pending = None;
    for child in array.children() {
        match child.kind().as_ref() {
            "[" | "comment" => {}
            "," => slots.push(pending.take()),
            "]" => {
                if let Some(last) = pending.take() {
                    slots.push(Some(last));
                }
            }
            _ if child.is_named() => pending = Some(child),
            _ => {}
        }
    }
    slots
}

/// Decode a quoted JavaScript string literal, including its escape sequences.
pub fn unquote_js_string(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);
    unescape(inner)
}

fn unescape(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            break;
        };
        match esc {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                push_code_unit(&mut out, u32::from_str_radix(&hex, 16).ok(), &hex, 'x');
            }
            'u' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    let hex: String = chars.by_ref().take_while(|&c| c != '}').collect();
                    push_code_unit(&mut out, u32::from_str_radix(&hex, 16).ok(), &hex, 'u');
                } else {
                    let hex: String = chars.by_ref().take(4).collect();
                    let unit = u32::from_str_radix(&hex, 16).ok();
                    // Surrogate pairs arrive as two consecutive `\uXXXX` escapes.
                    if let Some(high @ 0xD800..=0xDBFF) = unit
                        && let Some(low) = take_low_surrogate(&mut chars)
                    {
                        let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                        push_code_unit(&mut out, Some(combined), &hex, 'u');
                    } else {
                        push_code_unit(&mut out, unit, &hex, 'u');
                    }
                }
            }
            // Line continuation.
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn take_low_surrogate(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    let rest: String = chars.clone().take(6).collect();
    let hex = rest.strip_prefix("\\u")?;
    let low = u32::from_str_radix(hex, 16).ok()?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    for _ in 0..6 {
        chars.next();
    }
    Some(low)
}

fn push_code_unit(out: &mut String, unit: Option<u32>, raw: &str, marker: char) {
    match unit.and_then(char::from_u32) {
        Some(ch) => out.push(ch),
        None => {
            out.push(marker);
            out.push_str(raw);
        }
    }
}

/// Parse a JavaScript numeric literal.
///
/// Handles decimal, exponent, `0x`/`0o`/`0b` prefixes and `_` separators.
/// `BigInt` literals (`10n`) and legacy octal literals (`010`) yield `None`.
pub fn parse_js_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|&c| c != '_').collect();
    if cleaned.ends_with('n') {
        return None;
    }
    // Legacy octal (`010`) and leading-zero decimals (`08`) are not module syntax.
    let mut chars = cleaned.chars();
    if chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let radix = match cleaned.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    match radix {
        #[allow(clippy::cast_precision_loss)]
        Some(radix) => u128::from_str_radix(&cleaned[2..], radix)
            .ok()
            .map(|n| n as f64),
        None => cleaned.parse::<f64>().ok(),
    }
}
