// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Process-global syntax resources.
//!
//! The [`SyntaxSet`] is compiled once per process and read-only afterwards:
//! the default syntect grammar dump plus one embedded sublime-syntax
//! definition for HTTP protocol lines (status line, request line, header
//! fields), which the default dump does not ship.

use std::sync::LazyLock;

use syntect::parsing::{SyntaxSet, syntax_definition::SyntaxDefinition};

/// Name of the embedded grammar for protocol preview lines.
pub const HTTP_SYNTAX_NAME: &str = "HTTP";

/// Minimal grammar for HTTP/1.x protocol lines. Scope names follow the
/// TextMate conventions so the generated CSS classes line up with ordinary
/// highlight themes.
const HTTP_SUBLIME_SYNTAX: &str = r#"%YAML 1.2
---
name: HTTP
file_extensions:
  - http
scope: source.http

contexts:
  main:
    # Status line, e.g. `HTTP/1.1 200 OK`.
    - match: '^(HTTP)(/)([0-9.]+) +([0-9]{3}) *(.*)$'
      captures:
        1: keyword.other.protocol.http
        2: punctuation.separator.http
        3: constant.numeric.version.http
        4: constant.numeric.status-code.http
        5: string.unquoted.status-text.http
    # Request line, e.g. `GET https://example.org/ HTTP/1.1`.
    - match: '^([A-Z]+) +(\S+)(?: +(HTTP)(/)([0-9.]+))? *$'
      captures:
        1: keyword.control.method.http
        2: markup.underline.link.url.http
        3: keyword.other.protocol.http
        4: punctuation.separator.http
        5: constant.numeric.version.http
    # Header field, e.g. `Content-Type: application/json`.
    - match: '^([\w-]+)(:) *(.*)$'
      captures:
        1: support.type.header-name.http
        2: punctuation.separator.key-value.http
        3: string.unquoted.header-value.http
"#;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(|| {
    let mut builder = SyntaxSet::load_defaults_newlines().into_builder();
    match SyntaxDefinition::load_from_str(
        HTTP_SUBLIME_SYNTAX,
        /* lines_include_newline */ true,
        Some(HTTP_SYNTAX_NAME),
    ) {
        Ok(definition) => builder.add(definition),
        Err(err) => tracing::warn!(
            %err,
            "embedded HTTP syntax failed to load; protocol lines fall back to plain text"
        ),
    }
    builder.build()
});

/// The process-global [`SyntaxSet`]: syntect defaults + the embedded HTTP
/// grammar.
#[must_use]
pub fn syntax_set() -> &'static SyntaxSet { &SYNTAX_SET }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_http_syntax_loads() {
        assert!(syntax_set().find_syntax_by_name(HTTP_SYNTAX_NAME).is_some());
    }

    #[test]
    fn test_default_grammars_are_present() {
        assert!(syntax_set().find_syntax_by_token("json").is_some());
        assert!(syntax_set().find_syntax_by_token("xml").is_some());
        assert!(syntax_set().find_syntax_by_token("html").is_some());
    }
}
