// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap, fmt::Write as _};

use crate::{fold::FoldingRange, markup::Line};

/// Wrap each split line in its numbered container.
///
/// Every line gets the shared gutter width class and its 1-based display
/// number. A line that opens a folding range additionally carries the
/// `range-start` / `range-end` attributes the external fold script consumes,
/// plus a fold-toggle affordance marker appended after the content. Lines
/// are concatenated with `\n`.
#[must_use]
pub fn annotate(
    lines: &[Line],
    fold_ranges: &HashMap<usize, FoldingRange>,
    gutter_width: usize,
) -> String {
    let mut acc = String::with_capacity(lines.iter().map(|it| it.markup.len() + 64).sum());

    for line in lines {
        if line.number > 1 {
            acc.push('\n');
        }
        match fold_ranges.get(&line.number) {
            Some(range) => {
                _ = write!(
                    acc,
                    "<span class=\"line gutter-{gutter_width}\" data-line=\"{}\" \
                     range-start=\"{}\" range-end=\"{}\">{}\
                     <span class=\"fold-toggle\"></span></span>",
                    line.number, range.start, range.end, line.markup
                );
            }
            None => {
                _ = write!(
                    acc,
                    "<span class=\"line gutter-{gutter_width}\" data-line=\"{}\">{}</span>",
                    line.number, line.markup
                );
            }
        }
    }

    acc
}
