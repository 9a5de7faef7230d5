//! Purpose: Render pretty value trees with optional ANSI colorization for CLI output.
//! Exports: colorize_value.
//! Role: Small, pure formatter used by CLI emission paths.
//! Invariants: When color is disabled, output is plain two-space-indented JSON.
//! Invariants: ANSI escapes appear only when explicitly enabled.
//! Invariants: Uncolored token text matches the canonical renderer's escaping.
use sheetcast::api::{Scalar, Value};
use sheetcast::core::render::escape_string;

const INDENT: &str = "  ";

// Conservative 8/16-color palette for broad terminal compatibility.
// Avoid bright variants that can lose contrast on themes like Solarized.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";

pub fn colorize_value(value: &Value, use_color: bool) -> String {
    let mut out = String::new();
    write_value(value, 0, use_color, &mut out);
    out
}

fn write_value(value: &Value, indent: usize, use_color: bool, out: &mut String) {
    match value {
        Value::Scalar(scalar) => write_scalar(scalar, use_color, out),
        Value::Array(items) => write_array(items, indent, use_color, out),
        Value::Object(members) => write_object(members, indent, use_color, out),
    }
}

fn write_scalar(scalar: &Scalar, use_color: bool, out: &mut String) {
    match scalar {
        Scalar::Null => push_colored("null", COLOR_NULL, use_color, out),
        Scalar::Bool(val) => {
            let text = if *val { "true" } else { "false" };
            push_colored(text, COLOR_BOOL, use_color, out);
        }
        Scalar::Number(num) => push_colored(&num.to_string(), COLOR_NUMBER, use_color, out),
        Scalar::Text(text) => {
            let mut encoded = String::new();
            escape_string(text, &mut encoded);
            push_colored(&encoded, COLOR_STRING, use_color, out);
        }
    }
}

fn write_array(items: &[Value], indent: usize, use_color: bool, out: &mut String) {
    if items.is_empty() {
        push_colored("[]", COLOR_PUNCT, use_color, out);
        return;
    }
    push_colored("[", COLOR_PUNCT, use_color, out);
    out.push('\n');
    for (idx, item) in items.iter().enumerate() {
        push_indent(indent + 1, out);
        write_value(item, indent + 1, use_color, out);
        if idx + 1 < items.len() {
            push_colored(",", COLOR_PUNCT, use_color, out);
        }
        out.push('\n');
    }
    push_indent(indent, out);
    push_colored("]", COLOR_PUNCT, use_color, out);
}

fn write_object(members: &[(String, Value)], indent: usize, use_color: bool, out: &mut String) {
    if members.is_empty() {
        push_colored("{}", COLOR_PUNCT, use_color, out);
        return;
    }
    push_colored("{", COLOR_PUNCT, use_color, out);
    out.push('\n');
    let len = members.len();
    for (idx, (key, value)) in members.iter().enumerate() {
        push_indent(indent + 1, out);
        let mut encoded = String::new();
        escape_string(key, &mut encoded);
        push_colored(&encoded, COLOR_KEY, use_color, out);
        push_colored(":", COLOR_PUNCT, use_color, out);
        out.push(' ');
        write_value(value, indent + 1, use_color, out);
        if idx + 1 < len {
            push_colored(",", COLOR_PUNCT, use_color, out);
        }
        out.push('\n');
    }
    push_indent(indent, out);
    push_colored("}", COLOR_PUNCT, use_color, out);
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

fn push_colored(text: &str, color: &str, use_color: bool, out: &mut String) {
    if !use_color {
        out.push_str(text);
        return;
    }
    out.push_str("\u{1b}[");
    out.push_str(color);
    out.push('m');
    out.push_str(text);
    out.push_str("\u{1b}[0m");
}
