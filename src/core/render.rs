//! Purpose: Canonical JSON text rendering for value trees.
//! Exports: `render`, `escape_string`.
//! Role: Pure depth-first serializer; the inverse of construction.
//! Invariants: Rendering never fails for a constructed tree.
//! Invariants: Output re-parses to a structurally equal tree (round-trip).
//! Invariants: Keys and strings are re-escaped canonically, not echoed verbatim.
use std::fmt::Write as _;

use crate::core::value::{Scalar, Value};

/// Render a tree as canonical JSON text.
///
/// Objects and arrays emit members/elements in stored order; strings are
/// JSON-escaped; numbers use the host parser's canonical textual form.
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(members) => {
            out.push('{');
            for (idx, (key, child)) in members.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                escape_string(key, out);
                out.push(':');
                write_value(child, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (idx, child) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(child, out);
            }
            out.push(']');
        }
        Value::Scalar(scalar) => write_scalar(scalar, out),
    }
}

fn write_scalar(scalar: &Scalar, out: &mut String) {
    match scalar {
        Scalar::Null => out.push_str("null"),
        Scalar::Bool(true) => out.push_str("true"),
        Scalar::Bool(false) => out.push_str("false"),
        Scalar::Number(num) => {
            let _ = write!(out, "{num}");
        }
        Scalar::Text(text) => escape_string(text, out),
    }
}

/// Append `text` as a JSON string literal, escaping quotes, backslashes,
/// and control characters.
pub fn escape_string(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}
