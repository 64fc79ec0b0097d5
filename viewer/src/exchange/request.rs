// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::headers::Headers;

/// The request half of an [`crate::Exchange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: RequestBody,
}

impl Request {
    /// The request's own `Content-Type` header, used to dispatch a grammar
    /// for the echoed request body.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|it| it.as_str())
    }
}

/// A request body as captured by the host: inline text, a reference to a
/// file the host streamed the body from, or nothing.
///
/// Only the `Text` variant is displayable. The other variants render as a
/// fixed placeholder instead of failing (the pipeline never errors on
/// unusual input).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestBody {
    Text(String),
    FileRef(PathBuf),
    #[default]
    None,
}

impl RequestBody {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequestBody::Text(text) => Some(text),
            RequestBody::FileRef(_) | RequestBody::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_request_deserializes_with_defaults() {
        let json = r#"{"method": "GET", "url": "https://example.org/api"}"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq2!(request.method, "GET");
        assert_eq2!(request.body, RequestBody::None);
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_request_body_variants_round_trip() {
        let json = r#"{
            "method": "POST",
            "url": "https://example.org/api",
            "headers": {"Content-Type": "application/json"},
            "body": {"text": "{\"a\": 1}"}
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq2!(request.body.as_text(), Some("{\"a\": 1}"));
        assert_eq2!(request.content_type(), Some("application/json"));
    }
}
