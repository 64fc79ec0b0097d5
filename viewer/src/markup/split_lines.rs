// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{markup_event::MarkupEvent, rebalance::rebalance, tokenizer::tokenize};

/// One display line of the split markup: tag-balanced content plus its
/// 1-based display number (array index + 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub markup: String,
    pub number: usize,
}

/// Rebalance markup, then split it on newline boundaries (`\r\n`, `\r`, or
/// `\n`) into the ordered [`Line`] sequence.
///
/// N newline-delimited segments yield exactly N lines numbered `1..=N` —
/// a trailing newline produces a final empty line, same as the host
/// editor's own splitting.
#[must_use]
pub fn split_lines(markup: &str) -> Vec<Line> {
    let balanced = rebalance(markup);

    let mut lines = Vec::new();
    let mut current = String::new();
    for event in tokenize(&balanced) {
        if let MarkupEvent::Newline(_) = event {
            lines.push(Line {
                markup: std::mem::take(&mut current),
                number: lines.len() + 1,
            });
        } else {
            current.push_str(event.as_str());
        }
    }
    lines.push(Line {
        markup: current,
        number: lines.len() + 1,
    });

    lines
}

/// The visible text of a markup string: plain-text and newline events only,
/// with every tag token dropped. Used to measure indentation for folding.
#[must_use]
pub fn visible_text(markup: &str) -> String {
    tokenize(markup)
        .iter()
        .filter_map(|event| match event {
            MarkupEvent::Text(it) | MarkupEvent::Newline(it) => Some(*it),
            MarkupEvent::OpenTag(_) | MarkupEvent::CloseTag(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    /// Scans a single line and checks every tag opened within it is closed
    /// within it, without the nesting depth ever going negative.
    fn assert_tag_balanced(line: &Line) {
        let mut depth: isize = 0;
        for event in tokenize(&line.markup) {
            match event {
                MarkupEvent::OpenTag(_) => depth += 1,
                MarkupEvent::CloseTag(_) => {
                    depth -= 1;
                    assert!(depth >= 0, "negative nesting in {:?}", line.markup);
                }
                MarkupEvent::Newline(_) | MarkupEvent::Text(_) => {}
            }
        }
        assert_eq2!(depth, 0);
    }

    #[test]
    fn test_split_preserves_line_count_and_numbering() {
        let lines = split_lines("a\nb\r\nc\rd");
        assert_eq2!(lines.len(), 4);
        let numbers: Vec<usize> = lines.iter().map(|it| it.number).collect();
        assert_eq2!(numbers, vec![1, 2, 3, 4]);
        let contents: Vec<&str> = lines.iter().map(|it| it.markup.as_str()).collect();
        assert_eq2!(contents, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_trailing_newline_yields_final_empty_line() {
        let lines = split_lines("a\n");
        assert_eq2!(lines.len(), 2);
        assert_eq2!(lines[1].markup, "");
    }

    #[test]
    fn test_every_split_line_is_tag_balanced() {
        let markup = "<span class=\"a\">one<span class=\"b\">two\nthree</span>\nfour</span>";
        let lines = split_lines(markup);
        assert_eq2!(lines.len(), 3);
        for line in &lines {
            assert_tag_balanced(line);
        }
    }

    #[test]
    fn test_single_line_input_yields_one_line() {
        let lines = split_lines("no newline here");
        assert_eq2!(lines.len(), 1);
        assert_eq2!(lines[0].number, 1);
    }

    #[test]
    fn test_visible_text_strips_tags() {
        let markup = "  <span class=\"k\">let</span> x\n<span class=\"n\">1</span>";
        assert_eq2!(visible_text(markup), "  let x\n1");
    }
}
