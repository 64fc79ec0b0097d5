// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gutter;
pub mod line_annotator;

// Re-export.
pub use gutter::*;
pub use line_annotator::*;
