// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod dispatcher;
pub mod syntax_resources;

// Re-export.
pub use dispatcher::*;
pub use syntax_resources::*;
