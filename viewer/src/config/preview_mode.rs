// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which parts of the exchange the rendered document shows.
#[derive(Debug,
         Clone,
         Copy,
         Default,
         PartialEq,
         Eq,
         Serialize,
         Deserialize,
         Display,
         EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum PreviewMode {
    /// Request echo + response status line, headers, and body.
    Exchange,
    /// Response status line and headers only.
    Headers,
    /// Response body only.
    Body,
    /// Response status line, headers, and body — no request echo.
    #[default]
    Full,
}

impl PreviewMode {
    #[must_use]
    pub fn shows_request(&self) -> bool { matches!(self, PreviewMode::Exchange) }

    #[must_use]
    pub fn shows_response_headers(&self) -> bool {
        !matches!(self, PreviewMode::Body)
    }

    #[must_use]
    pub fn shows_response_body(&self) -> bool {
        !matches!(self, PreviewMode::Headers)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_full() {
        assert_eq2!(PreviewMode::default(), PreviewMode::Full);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq2!(
            PreviewMode::from_str("exchange").unwrap(),
            PreviewMode::Exchange
        );
        assert_eq2!(
            PreviewMode::from_str("Headers").unwrap(),
            PreviewMode::Headers
        );
    }

    #[test]
    fn test_visibility_table() {
        assert!(PreviewMode::Exchange.shows_request());
        assert!(!PreviewMode::Full.shows_request());
        assert!(!PreviewMode::Body.shows_response_headers());
        assert!(!PreviewMode::Headers.shows_response_body());
        assert!(PreviewMode::Full.shows_response_headers());
        assert!(PreviewMode::Full.shows_response_body());
    }
}
