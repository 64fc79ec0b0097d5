// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Balance-preserving rewrite of markup across line boundaries.

use smallvec::SmallVec;

use super::{markup_event::MarkupEvent, tokenizer::tokenize};

/// The stack depth bound is the maximum nesting depth of the highlighter's
/// output; in practice a handful of scopes.
type OpenTagStack<'a> = SmallVec<[&'a str; 8]>;

/// Rewrite markup so that every element open before a newline is closed
/// before it and reopened after it.
///
/// Single pass over the event stream, maintaining a stack of currently open
/// tag tokens:
/// - open token: push, emit unchanged.
/// - close token: pop, emit unchanged (tags are well-nested by
///   construction, so the pop always matches).
/// - newline with open elements: emit a close token for every stack entry
///   top→bottom, the newline, then the saved open tokens bottom→top.
/// - everything else: emit unchanged.
///
/// Postcondition: splitting the result on newline boundaries yields lines
/// that are each independently well-formed — which also makes this function
/// idempotent.
#[must_use]
pub fn rebalance(markup: &str) -> String {
    let mut acc = String::with_capacity(markup.len() + markup.len() / 4);
    let mut open_stack = OpenTagStack::new();

    for event in tokenize(markup) {
        match event {
            MarkupEvent::OpenTag(token) => {
                open_stack.push(token);
                acc.push_str(token);
            }
            MarkupEvent::CloseTag(token) => {
                open_stack.pop();
                acc.push_str(token);
            }
            MarkupEvent::Newline(token) => {
                for open_token in open_stack.iter().rev() {
                    acc.push_str("</");
                    acc.push_str(element_name(open_token));
                    acc.push('>');
                }
                acc.push_str(token);
                for open_token in &open_stack {
                    acc.push_str(open_token);
                }
            }
            MarkupEvent::Text(token) => acc.push_str(token),
        }
    }

    // A highlighter may leave its outermost scopes open at end of input;
    // close them so the final line is well-formed like every other.
    for open_token in open_stack.iter().rev() {
        acc.push_str("</");
        acc.push_str(element_name(open_token));
        acc.push('>');
    }

    acc
}

/// Element name of an open token: `<span class="k">` → `span`.
fn element_name(open_token: &str) -> &str {
    open_token[1..]
        .split(|it: char| it == '>' || it.is_ascii_whitespace())
        .next()
        .unwrap_or_default()
}
