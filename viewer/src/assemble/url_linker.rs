// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Literal-URL-to-link rewriting.
//!
//! Fixed matching policy: URL schemes (`http`, `https`, `ftp`) and `www.`
//! prefixes only — bare top-level domains are not matched, there is no
//! email or phone matching, and no prefix or trailing-slash stripping (the
//! anchor text is exactly the matched text). Rewriting applies only to
//! plain-text segments of the markup, never inside tags and never inside an
//! existing anchor element.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{MarkupEvent, tokenize};

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:(?:https?|ftp)://|www\.)[^\s<>"]+"#)
        .expect("URL pattern is a valid regex")
});

/// Rewrite literal URLs in the markup's text segments into anchors.
#[must_use]
pub fn link_urls(markup: &str) -> String {
    let mut acc = String::with_capacity(markup.len());
    let mut anchor_depth = 0_usize;

    for event in tokenize(markup) {
        match event {
            MarkupEvent::OpenTag(token) => {
                if is_anchor_open(token) {
                    anchor_depth += 1;
                }
                acc.push_str(token);
            }
            MarkupEvent::CloseTag(token) => {
                if token.eq_ignore_ascii_case("</a>") {
                    anchor_depth = anchor_depth.saturating_sub(1);
                }
                acc.push_str(token);
            }
            MarkupEvent::Text(token) if anchor_depth == 0 => {
                acc.push_str(&link_text_segment(token));
            }
            MarkupEvent::Text(token) | MarkupEvent::Newline(token) => {
                acc.push_str(token);
            }
        }
    }

    acc
}

fn is_anchor_open(token: &str) -> bool {
    let name = token[1..]
        .split(|it: char| it == '>' || it.is_ascii_whitespace())
        .next()
        .unwrap_or_default();
    name.eq_ignore_ascii_case("a")
}

fn link_text_segment(text: &str) -> String {
    URL_PATTERN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            // `www.` matches get a scheme in the href; the anchor text stays
            // exactly as matched.
            let href = if matched.starts_with("www.") {
                format!("http://{matched}")
            } else {
                matched.to_string()
            };
            format!("<a href=\"{href}\">{matched}</a>")
        })
        .into_owned()
}
