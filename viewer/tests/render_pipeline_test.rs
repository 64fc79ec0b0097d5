// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end pipeline tests: exchange JSON in, preview document out.

use httpview::{AssetPaths, Exchange, ExchangePreview, MarkupEvent, Settings, assert_eq2,
               tokenize};

const EXCHANGE_JSON: &str = r#"{
    "request": {
        "method": "GET",
        "url": "https://api.example.org/users/42",
        "headers": {
            "Accept": "application/json",
            "User-Agent": "hv"
        }
    },
    "response": {
        "httpVersion": "1.1",
        "statusCode": 200,
        "statusMessage": "OK",
        "headers": {
            "Content-Type": "application/json; charset=utf-8",
            "Server": "demo"
        },
        "body": {"text": "{\"user\":{\"id\":42,\"name\":\"Ada\",\"link\":\"https://example.org/ada\"},\"ok\":true}"},
        "bodySizeInBytes": 78
    }
}"#;

fn render_with_defaults() -> String {
    let exchange = Exchange::from_json(EXCHANGE_JSON).unwrap();
    let preview = ExchangePreview::new(Settings::default(), AssetPaths::default());
    preview.render(Some(&exchange))
}

/// The document segment between the style block and the trailing script
/// tag.
fn body_of(document: &str) -> &str {
    document
        .split_once("</style>\n")
        .expect("style block present")
        .1
        .rsplit_once("\n<script")
        .expect("script tag present")
        .0
}

#[test]
fn test_document_structure() {
    let document = render_with_defaults();

    assert!(document.starts_with("<link rel=\"stylesheet\" href=\"assets/preview.css\">"));
    assert!(document.contains("<style>"));
    assert!(document.ends_with("<script src=\"assets/fold.js\"></script>"));
}

#[test]
fn test_lines_are_numbered_consecutively() {
    let document = render_with_defaults();
    let body = body_of(&document);

    let line_count = body.lines().count();
    assert!(line_count > 5, "expected a multi-line preview, got {line_count}");
    for (index, _line) in body.lines().enumerate() {
        let marker = format!("data-line=\"{}\"", index + 1);
        assert!(body.contains(&marker), "missing {marker}");
    }
}

#[test]
fn test_every_line_is_tag_balanced() {
    let document = render_with_defaults();

    for line in body_of(&document).lines() {
        let mut depth: isize = 0;
        for event in tokenize(line) {
            match event {
                MarkupEvent::OpenTag(_) => depth += 1,
                MarkupEvent::CloseTag(_) => {
                    depth -= 1;
                    assert!(depth >= 0, "negative nesting in line: {line}");
                }
                MarkupEvent::Newline(_) | MarkupEvent::Text(_) => {}
            }
        }
        assert_eq2!(depth, 0, "unbalanced line: {line}");
    }
}

#[test]
fn test_pretty_printed_json_body_produces_folds() {
    let document = render_with_defaults();
    let body = body_of(&document);

    // The nested JSON object spans multiple indented lines after
    // formatting, so at least one folding range must be detected.
    assert!(body.contains("range-start="), "no folds in:\n{body}");
    assert!(body.contains("range-end="));
    assert!(body.contains("fold-toggle"));
}

#[test]
fn test_status_line_and_headers_are_present() {
    let document = render_with_defaults();
    let body = body_of(&document);

    assert!(body.contains("200"));
    assert!(body.contains("Content-Type"));
    // Default mode carries no request echo.
    assert!(!body.contains("User-Agent"));
}

#[test]
fn test_literal_url_in_body_is_linked() {
    let document = render_with_defaults();
    assert!(document.contains("<a href=\"https://example.org/ada"));
}

#[test]
fn test_rendering_no_exchange_is_empty() {
    let preview = ExchangePreview::new(Settings::default(), AssetPaths::default());
    assert_eq2!(preview.render(None), "");
}
