// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # httpview
//!
//! Render a raw HTTP exchange (request/response headers and body) into a
//! single self-contained, line-numbered, foldable, syntax-highlighted HTML
//! document.
//!
//! # Pipeline
//!
//! The pipeline is a sequence of deterministic, side-effect-free
//! transformations; each render call is independent and re-entrant:
//!
//! 1. [`highlight()`] / [`highlight_protocol`] — dispatch a syntect grammar by
//!    content type (with automatic first-line detection as fallback) and
//!    produce class-based `<span>` markup.
//! 2. [`split_lines`] — rebalance inline tags across newlines
//!    ([`rebalance`]) so the markup can be split into lines that are each
//!    independently well-formed.
//! 3. [`detect_folds`] — compute indentation-based folding ranges from the
//!    visible text of the lines (off-side rule, blank lines excluded).
//! 4. [`annotate()`] — wrap each line in a numbered container with a uniform
//!    gutter width ([`gutter_width`]) and `range-start` / `range-end` fold
//!    attributes.
//! 5. [`ExchangePreview::render`] — assemble the style block, the annotated
//!    markup, and the exchange's non-body parts into the final document,
//!    with literal-URL linking and the image / large-response bypasses.
//!
//! The pipeline never fails on malformed or unusual input — it degrades:
//! unknown content types fall back to detection, binary bodies become
//! placeholders or embedded images, oversized bodies skip highlighting
//! and/or linking per the configured thresholds, and a missing exchange
//! renders as empty output.
//!
//! # Example
//!
//! ```
//! use httpview::{AssetPaths, ExchangePreview, Settings};
//!
//! let preview = ExchangePreview::new(Settings::default(), AssetPaths::default());
//!
//! // Nothing to render is not an error.
//! assert_eq!(preview.render(None), "");
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod annotate;
pub mod assemble;
pub mod common;
pub mod config;
pub mod exchange;
pub mod fold;
pub mod format;
pub mod highlight;
pub mod markup;
pub mod mime;

// Re-export.
pub use annotate::*;
pub use assemble::*;
pub use common::*;
pub use config::*;
pub use exchange::*;
pub use fold::*;
pub use format::*;
pub use highlight::*;
pub use markup::*;
