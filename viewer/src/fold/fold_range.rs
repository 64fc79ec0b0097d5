// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A contiguous block of lines collapsible in the viewer.
///
/// Invariant consumed by the external fold script via the `range-start` /
/// `range-end` attributes: `start` is the 1-based display number of the
/// line that opens the fold, while `end` is the 0-based array index of the
/// first line that dedents below the block. The asymmetry is part of the
/// wire contract and must not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldingRange {
    pub start: usize,
    pub end: usize,
}

/// Indentation of one non-blank line: the line's 0-based index in the full
/// line array, and the 0-based column of its first non-whitespace
/// character.
///
/// Blank lines (no non-whitespace character at all) get no entry — they are
/// excluded from the indentation sequence entirely, not merely skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentEntry {
    pub line_index: usize,
    pub indent: usize,
}
