// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Indentation-based folding range detection.
//!
//! An off-side-rule block detector: block structure is inferred purely from
//! indentation depth changes, so any indentation-structured content (most
//! source code, pretty-printed JSON or XML) can be folded without knowing
//! the highlighted language's syntax.

// Attach sources.
pub mod fold_detector;
pub mod fold_range;

// Re-export.
pub use fold_detector::*;
pub use fold_range::*;
