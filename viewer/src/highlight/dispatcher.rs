// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Content-type → grammar dispatch.
//!
//! This module decides *which* grammar highlights a body; the grammars
//! themselves come from syntect. Dispatch never fails: an unknown or
//! missing content type takes the automatic-detection path, and any
//! highlighter error degrades to escaped plain text.

use syntect::{html::{ClassStyle, ClassedHTMLGenerator},
              parsing::{SyntaxReference, SyntaxSet},
              util::LinesWithEndings};

use super::syntax_resources::{HTTP_SYNTAX_NAME, syntax_set};
use crate::{markup::escape_html, mime};

/// Map a content type to a grammar tag.
///
/// `application/json` or any `+json` suffix → `json`;
/// `application/javascript` → `javascript`; `application/xml`, `text/xml`,
/// or any `+xml` suffix → `xml`; `text/html` → `html`; anything else →
/// `None` (callers fall back to automatic detection).
#[must_use]
pub fn grammar_tag_for(content_type: Option<&str>) -> Option<&'static str> {
    let mime = mime::parse(content_type?);
    if mime.is("application/json") || mime.has_suffix("json") {
        Some("json")
    } else if mime.is("application/javascript") {
        Some("javascript")
    } else if mime.is("application/xml") || mime.is("text/xml") || mime.has_suffix("xml") {
        Some("xml")
    } else if mime.is("text/html") {
        Some("html")
    } else {
        None
    }
}

/// Highlight body text by content type, producing class-based `<span>`
/// markup (colors come from the external stylesheet).
///
/// A resolved grammar tag selects that grammar; otherwise first-line
/// detection runs, and plain text is the last resort. Pure function of its
/// inputs.
#[must_use]
pub fn highlight(text: &str, content_type: Option<&str>) -> String {
    let syntax_set = syntax_set();

    let maybe_syntax = match grammar_tag_for(content_type) {
        Some(tag) => {
            tracing::debug!(grammar = tag, "dispatching grammar by content type");
            syntax_set.find_syntax_by_token(tag)
        }
        None => {
            tracing::debug!(?content_type, "no grammar tag; using first-line detection");
            let first_line = text.lines().next().unwrap_or_default();
            syntax_set.find_syntax_by_first_line(first_line)
        }
    };
    let syntax = maybe_syntax.unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    generate_classed_markup(text, syntax, syntax_set)
}

/// Highlight protocol preview lines (status line, request line, header
/// fields) with the fixed embedded HTTP grammar, independent of
/// content-type dispatch.
#[must_use]
pub fn highlight_protocol(text: &str) -> String {
    let syntax_set = syntax_set();
    let syntax = syntax_set
        .find_syntax_by_name(HTTP_SYNTAX_NAME)
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());
    generate_classed_markup(text, syntax, syntax_set)
}

fn generate_classed_markup(
    text: &str,
    syntax: &SyntaxReference,
    syntax_set: &SyntaxSet,
) -> String {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, ClassStyle::Spaced);
    for line in LinesWithEndings::from(text) {
        if let Err(err) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!(%err, "highlighting failed; falling back to escaped plain text");
            return escape_html(text);
        }
    }
    generator.finalize()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(Some("application/json"), Some("json") ; "json")]
    #[test_case(Some("application/hal+json; charset=utf-8"), Some("json") ; "json suffix")]
    #[test_case(Some("application/javascript"), Some("javascript") ; "javascript")]
    #[test_case(Some("application/xml"), Some("xml") ; "application xml")]
    #[test_case(Some("text/xml"), Some("xml") ; "text xml")]
    #[test_case(Some("image/svg+xml"), Some("xml") ; "xml suffix")]
    #[test_case(Some("text/html"), Some("html") ; "html")]
    #[test_case(Some("text/plain"), None ; "plain")]
    #[test_case(Some("application/octet-stream"), None ; "octet stream")]
    #[test_case(Some(""), None ; "empty")]
    #[test_case(None, None ; "missing")]
    fn test_grammar_tag_table(content_type: Option<&str>, expected: Option<&str>) {
        assert_eq2!(grammar_tag_for(content_type), expected);
    }

    #[test]
    fn test_highlight_json_produces_span_markup() {
        let markup = highlight("{\"a\": 1}", Some("application/json"));
        assert!(markup.contains("<span"), "got: {markup}");
        assert!(markup.contains("</span>"));
    }

    #[test]
    fn test_highlight_unknown_content_type_never_fails() {
        let markup = highlight("just some text", Some("application/x-who-knows"));
        assert!(markup.contains("just some text"));
    }

    #[test]
    fn test_highlight_empty_input_is_harmless() {
        let _markup = highlight("", None);
    }

    #[test]
    fn test_highlight_escapes_text_content() {
        let markup = highlight("<script>alert(1)</script>", Some("text/plain"));
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_highlight_protocol_keeps_line_text() {
        let markup = highlight_protocol("HTTP/1.1 200 OK\nContent-Type: text/plain\n");
        assert!(markup.contains("200"));
        assert!(markup.contains("Content-Type"));
    }
}
