// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::mime;

/// Pretty-print a body according to its declared content type.
///
/// JSON bodies are re-serialized with indentation; everything else passes
/// through unchanged. A body that fails to validate against its declared
/// content type is returned unchanged, with a warning unless
/// `suppress_validation_warning` is set. Never fails.
#[must_use]
pub fn format_body(
    body: &str,
    content_type: Option<&str>,
    suppress_validation_warning: bool,
) -> String {
    let Some(content_type) = content_type else {
        return body.to_string();
    };

    let mime = mime::parse(content_type);
    if mime.is("application/json") || mime.has_suffix("json") {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
            }
            Err(err) => {
                if !suppress_validation_warning {
                    tracing::warn!(
                        %err,
                        content_type,
                        "body does not validate as its declared content type"
                    );
                }
                body.to_string()
            }
        }
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_json_body_is_pretty_printed() {
        let formatted = format_body(r#"{"a":1}"#, Some("application/json"), false);
        assert_eq2!(formatted, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_json_suffix_is_pretty_printed() {
        let formatted = format_body("[1,2]", Some("application/hal+json"), false);
        assert_eq2!(formatted, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_invalid_json_passes_through_unchanged() {
        let body = "{not json";
        assert_eq2!(format_body(body, Some("application/json"), false), body);
        // Same result with the warning suppressed.
        assert_eq2!(format_body(body, Some("application/json"), true), body);
    }

    #[test]
    fn test_non_json_passes_through_unchanged() {
        let body = "<p>hi</p>";
        assert_eq2!(format_body(body, Some("text/html"), false), body);
    }

    #[test]
    fn test_missing_content_type_passes_through_unchanged() {
        assert_eq2!(format_body("whatever", None, false), "whatever");
    }
}
