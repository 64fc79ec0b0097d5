// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// One token of a markup string, in original order. Borrowed from the input;
/// the tokenizer never allocates.
///
/// Anything that is not an inline-element open/close token or a newline is a
/// [`MarkupEvent::Text`] event — including self-closing tokens like
/// `<br/>`, which open nothing and therefore play no part in rebalancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    /// Full open token text, e.g. `<span class="keyword">`.
    OpenTag(&'a str),
    /// Full close token text, e.g. `</span>`.
    CloseTag(&'a str),
    /// One line terminator: `\r\n`, `\r`, or `\n`.
    Newline(&'a str),
    /// A run of plain text (no tags, no line terminators).
    Text(&'a str),
}

impl<'a> MarkupEvent<'a> {
    /// The exact input slice this event was produced from.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match self {
            MarkupEvent::OpenTag(it)
            | MarkupEvent::CloseTag(it)
            | MarkupEvent::Newline(it)
            | MarkupEvent::Text(it) => it,
        }
    }
}
