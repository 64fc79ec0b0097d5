// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use super::fold_range::{FoldingRange, IndentEntry};

/// Extract the [`IndentEntry`] sequence from the visible text of the
/// display lines. Blank lines produce no entry at all, so a blank line
/// neither closes nor continues a block by itself.
///
/// Indentation is the 0-based *character* column of the first
/// non-whitespace character.
#[must_use]
pub fn indent_entries(lines: &[&str]) -> Vec<IndentEntry> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line_index, line)| {
            line.chars()
                .position(|it| !it.is_whitespace())
                .map(|indent| IndentEntry { line_index, indent })
        })
        .collect()
}

/// Detect folding ranges from indentation, keyed by the 1-based display
/// number of the line that opens each fold.
///
/// Walks consecutive pairs of the filtered indentation sequence (the first
/// entry has no predecessor and only serves as the baseline):
/// - predecessor shallower than current: the predecessor opens a block —
///   push it.
/// - predecessor deeper than current: pop every open block at least as deep
///   as the current indent; each popped entry becomes a range ending at the
///   current (dedenting) line's index.
/// - equal indentation: sibling lines at the same depth; no push or pop.
///
/// Blocks still open at the end of input produce no range (there is no
/// dedenting line for `end` to point at).
#[must_use]
pub fn detect_folds(lines: &[&str]) -> HashMap<usize, FoldingRange> {
    let entries = indent_entries(lines);

    let mut ranges = HashMap::new();
    let mut open_blocks: Vec<IndentEntry> = Vec::new();

    for pair in entries.windows(2) {
        let (prev, current) = (pair[0], pair[1]);
        if prev.indent < current.indent {
            open_blocks.push(prev);
        } else if prev.indent > current.indent {
            while open_blocks
                .last()
                .is_some_and(|top| top.indent >= current.indent)
            {
                if let Some(popped) = open_blocks.pop() {
                    ranges.insert(popped.line_index + 1, FoldingRange {
                        start: popped.line_index + 1,
                        end: current.line_index,
                    });
                }
            }
        }
    }

    ranges
}
