// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod body_formatter;

// Re-export.
pub use body_formatter::*;
