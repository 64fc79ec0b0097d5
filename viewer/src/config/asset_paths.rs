// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Paths to the two external static assets the rendered document references:
/// the stylesheet that colors highlighter classes, and the script that
/// implements collapse/expand on the emitted `range-start` / `range-end`
/// attributes.
///
/// Injected at construction time so the core never resolves asset locations
/// through ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPaths {
    pub stylesheet: String,
    pub script: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            stylesheet: "assets/preview.css".into(),
            script: "assets/fold.js".into(),
        }
    }
}
