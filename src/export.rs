// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::ast::{Payload, Property};

/// One indentation unit per nesting level. Purely cosmetic.
const INDENT: &str = "\t";

/// Render a forest back into text lines.
///
/// Every name and value is quoted, so the output re-parses to an equal
/// tree whatever the strings contain:
/// - leaf  → `"name" "value"`
/// - block → `"name"`, `{`, children indented one level, `}`
///
/// # Examples
/// ```
/// use kvtree::{parse, serialize};
///
/// let forest = parse(["Item { Type ITEM_BUTTON }"]).unwrap();
/// assert_eq!(
///     serialize(&forest),
///     vec!["\"Item\"", "{", "\t\"Type\" \"ITEM_BUTTON\"", "}"]
/// );
/// ```
pub fn serialize(forest: &[Property]) -> Vec<String> {
    let mut lines = Vec::new();
    for prop in forest {
        write_property(prop, 0, &mut lines);
    }
    lines
}

/// `serialize`, joined with newlines.
pub fn serialize_to_string(forest: &[Property]) -> String {
    serialize(forest).join("\n")
}

fn write_property(prop: &Property, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);
    match &prop.payload {
        Payload::Leaf(value) => {
            lines.push(format!("{}{} {}", indent, quote(&prop.name), quote(value)));
        }
        Payload::Block(children) => {
            lines.push(format!("{}{}", indent, quote(&prop.name)));
            lines.push(format!("{}{{", indent));
            for child in children {
                write_property(child, depth + 1, lines);
            }
            lines.push(format!("{}}}", indent));
        }
    }
}

/// Wrap a string in quotes, escaping what the tokenizer would otherwise
/// read as syntax. Newlines must be escaped since tokens never span lines.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

impl Property {
    /// Serialize this node (and its subtree) on its own.
    pub fn to_lines(&self) -> Vec<String> {
        serialize(std::slice::from_ref(self))
    }
}

/// Export a forest as JSON.
///
/// Blocks become arrays of `{"key": .., "value": ..}` entries rather than
/// objects so repeated names and their order survive:
///
/// ```text
/// [
///   {"key": "Item", "value": [
///     {"key": "Type", "value": "ITEM_BUTTON"}
///   ]}
/// ]
/// ```
pub fn forest_to_json(forest: &[Property]) -> serde_json::Value {
    fn property_to_json(prop: &Property) -> serde_json::Value {
        let value = match &prop.payload {
            Payload::Leaf(v) => json!(v),
            Payload::Block(children) => forest_to_json(children),
        };
        json!({ "key": prop.name, "value": value })
    }

    serde_json::Value::Array(forest.iter().map(property_to_json).collect())
}

/// `forest_to_json`, pretty-printed.
pub fn export_forest_to_json(forest: &[Property]) -> String {
    format!("{:#}", forest_to_json(forest))
}
