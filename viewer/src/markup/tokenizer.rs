// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Markup tokenizer: one left-to-right pass producing the flat
//! [`MarkupEvent`] stream that [`crate::markup::rebalance`] and
//! [`crate::markup::split_lines`] consume.

use nom::{IResult,
          Parser,
          branch::alt,
          bytes::complete::{tag, take_till1, take_while1},
          character::complete::{anychar, char},
          combinator::{map, recognize},
          sequence::delimited};

use super::markup_event::MarkupEvent;

/// Tokenize a markup string into events, in original order.
///
/// Total function: every byte of the input ends up in exactly one event, so
/// concatenating `as_str()` of all events reproduces the input. Malformed
/// markup (a stray `<` with no closing `>`) degrades to plain text rather
/// than failing.
#[must_use]
pub fn tokenize(markup: &str) -> Vec<MarkupEvent<'_>> {
    let mut events = Vec::new();
    let mut rest = markup;
    while !rest.is_empty() {
        match parse_event(rest) {
            Ok((remaining, event)) => {
                events.push(event);
                rest = remaining;
            }
            Err(_) => {
                // Unreachable: the single-char fallback accepts any
                // non-empty input. Kept as a degradation path regardless.
                events.push(MarkupEvent::Text(rest));
                break;
            }
        }
    }
    events
}

#[rustfmt::skip]
fn parse_event(input: &str) -> IResult<&str, MarkupEvent<'_>> {
    alt((
        parse_newline,
        parse_tag_token,
        parse_text,
        parse_stray_char,
    )).parse(input)
}

/// Matches one line terminator. `\r\n` must be tried before `\r`.
#[rustfmt::skip]
fn parse_newline(input: &str) -> IResult<&str, MarkupEvent<'_>> {
    map(
        alt((tag("\r\n"), tag("\r"), tag("\n"))),
        MarkupEvent::Newline,
    ).parse(input)
}

/// Matches a complete `<...>` token on a single line, then classifies it as
/// open, close, or (for self-closing tokens) plain text.
#[rustfmt::skip]
fn parse_tag_token(input: &str) -> IResult<&str, MarkupEvent<'_>> {
    map(
        recognize(delimited(
            char('<'),
            take_while1(|it: char| it != '>' && it != '\r' && it != '\n'),
            char('>'),
        )),
        classify_tag_token,
    ).parse(input)
}

fn classify_tag_token(token: &str) -> MarkupEvent<'_> {
    if token.starts_with("</") {
        MarkupEvent::CloseTag(token)
    } else if token.ends_with("/>") {
        // Self-closing: opens nothing, treated as plain text.
        MarkupEvent::Text(token)
    } else {
        MarkupEvent::OpenTag(token)
    }
}

/// Matches a run of plain text up to the next tag or line terminator.
#[rustfmt::skip]
fn parse_text(input: &str) -> IResult<&str, MarkupEvent<'_>> {
    map(
        take_till1(|it: char| it == '<' || it == '\r' || it == '\n'),
        MarkupEvent::Text,
    ).parse(input)
}

/// Fallback for a `<` that does not begin a well-formed tag token.
#[rustfmt::skip]
fn parse_stray_char(input: &str) -> IResult<&str, MarkupEvent<'_>> {
    map(recognize(anychar), MarkupEvent::Text).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_tokenize_mixed_events() {
        let markup = "<span class=\"k\">let</span> x\n";
        let events = tokenize(markup);
        assert_eq2!(events, vec![
            MarkupEvent::OpenTag("<span class=\"k\">"),
            MarkupEvent::Text("let"),
            MarkupEvent::CloseTag("</span>"),
            MarkupEvent::Text(" x"),
            MarkupEvent::Newline("\n"),
        ]);
    }

    #[test]
    fn test_tokenize_newline_variants() {
        let events = tokenize("a\r\nb\rc\nd");
        assert_eq2!(events, vec![
            MarkupEvent::Text("a"),
            MarkupEvent::Newline("\r\n"),
            MarkupEvent::Text("b"),
            MarkupEvent::Newline("\r"),
            MarkupEvent::Text("c"),
            MarkupEvent::Newline("\n"),
            MarkupEvent::Text("d"),
        ]);
    }

    #[test]
    fn test_tokenize_self_closing_is_text() {
        let events = tokenize("<br/>");
        assert_eq2!(events, vec![MarkupEvent::Text("<br/>")]);
    }

    #[test]
    fn test_tokenize_stray_angle_bracket_is_text() {
        let events = tokenize("1 < 2");
        assert_eq2!(events, vec![
            MarkupEvent::Text("1 "),
            MarkupEvent::Text("<"),
            MarkupEvent::Text(" 2"),
        ]);
    }

    #[test]
    fn test_tokenize_is_lossless() {
        let markup = "<span class=\"a\">x<b>y</b></span>\r\nplain < text\n<br/>";
        let reassembled: String =
            tokenize(markup).iter().map(MarkupEvent::as_str).collect();
        assert_eq2!(reassembled, markup);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
