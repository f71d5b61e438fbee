//! Cleanup for text returned by the service.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// ASCII control characters other than tab, line feed and carriage return.
const INVALID_CHARS: &str = r"[\x00-\x08\x0b\x0c\x0e-\x1f]";

fn invalid_chars() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(INVALID_CHARS) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("Failed to compile invalid character pattern: {}", e);
            None
        }
    })
    .as_ref()
}

/// Strips control characters that break XML and terminal output.
pub fn remove_invalid_chars(text: &str) -> Cow<'_, str> {
    match invalid_chars() {
        Some(re) => re.replace_all(text, ""),
        None => Cow::Borrowed(text),
    }
}

/// Applies [`remove_invalid_chars`] to every string inside a JSON value.
pub fn sanitize_json(value: &mut Value) {
    match value {
        Value::String(s) => {
            if let Cow::Owned(clean) = remove_invalid_chars(s) {
                *s = clean;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitize_json),
        Value::Object(map) => map.values_mut().for_each(sanitize_json),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_control_chars_only() {
        let text = "a\u{0}b\u{8}c\td\ne\u{b}f\u{c}g\rh\u{1f}i";
        assert_eq!(remove_invalid_chars(text), "abc\td\nefg\rhi");
    }

    #[test]
    fn clean_text_is_borrowed() {
        assert!(matches!(remove_invalid_chars("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn sanitizes_nested_json() {
        let mut value = serde_json::json!({
            "title": "x\u{1}y",
            "list": ["\u{2}z", 3],
        });
        sanitize_json(&mut value);
        assert_eq!(value["title"], "xy");
        assert_eq!(value["list"][0], "z");
        assert_eq!(value["list"][1], 3);
    }
}
