// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use super::preview_mode::PreviewMode;
use crate::common::PreviewError;

/// Render options, deserializable straight from the host editor's settings
/// JSON (hence the camelCase field renames).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub preview_option: PreviewMode,

    /// Applied verbatim as the CSS `font-family` value when present.
    pub font_family: Option<String>,
    /// Applied verbatim as the CSS `font-size` value when present.
    pub font_size: Option<String>,
    /// Applied verbatim as the CSS `font-weight` value when present.
    pub font_weight: Option<String>,

    /// Skip highlighting (and with it line splitting and folding) for
    /// response bodies over the size limit.
    pub disable_highlight_response_body_for_large_response: bool,
    /// Skip literal-URL link rewriting for response bodies over the size
    /// limit.
    pub disable_adding_href_link_for_large_response: bool,
    #[serde(rename = "largeResponseBodySizeLimitInMB")]
    pub large_response_body_size_limit_in_mb: u64,

    /// Silence the warning emitted when a body fails validation against its
    /// declared content type (e.g. unparseable JSON).
    pub suppress_response_body_content_type_validation_warning: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_option: PreviewMode::default(),
            font_family: None,
            font_size: None,
            font_weight: None,
            disable_highlight_response_body_for_large_response: true,
            disable_adding_href_link_for_large_response: true,
            large_response_body_size_limit_in_mb: 10,
            suppress_response_body_content_type_validation_warning: false,
        }
    }
}

impl Settings {
    /// Deserialize settings from the host editor's settings JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidSettings`] when the JSON does not
    /// match the settings schema.
    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        serde_json::from_str(json).map_err(PreviewError::InvalidSettings)
    }

    /// The large-response threshold in bytes. A body strictly larger than
    /// this triggers the configured bypasses.
    #[must_use]
    pub fn large_response_size_limit_bytes(&self) -> u64 {
        self.large_response_body_size_limit_in_mb * 1024 * 1024
    }
}
