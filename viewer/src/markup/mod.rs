// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Markup-aware line splitting.
//!
//! Highlighted markup may contain an inline element whose open tag appears
//! before a newline and whose close tag appears after one or more subsequent
//! newlines (a single highlighted token spanning multiple source lines, e.g.
//! a multi-line string literal). Splitting naively on newlines would leave a
//! dangling open tag on one line and an orphaned close tag on a later one —
//! both invalid in isolation.
//!
//! This module solves that with two small composable passes:
//! 1. [`tokenize`] — a flat event stream of open-tag / close-tag / newline /
//!    plain-text tokens.
//! 2. [`rebalance`] — a stack-based pass that closes every open element
//!    before each newline and reopens it after, so that a plain newline
//!    split ([`split_lines`]) yields independently well-formed lines.

// Attach sources.
pub mod escape;
pub mod markup_event;
pub mod rebalance;
pub mod split_lines;
pub mod tokenizer;

// Re-export.
pub use escape::*;
pub use markup_event::*;
pub use rebalance::*;
pub use split_lines::*;
pub use tokenizer::*;
