// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use base64::{Engine, engine::general_purpose};
use serde::{Deserialize, Serialize};

use super::headers::Headers;

/// The response half of an [`crate::Exchange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub http_version: String,
    pub status_code: u16,
    pub status_message: String,
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: ResponseBody,
    /// Byte size reported by the host (usually `Content-Length`). When the
    /// host did not report one, [`Response::body_size`] falls back to the
    /// actual body length.
    #[serde(default)]
    pub body_size_in_bytes: u64,
}

impl Response {
    /// The response's `Content-Type` header.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(|it| it.as_str())
    }

    /// Reported byte size, falling back to the in-memory body length when
    /// the host reported none. Drives the large-response bypasses.
    #[must_use]
    pub fn body_size(&self) -> u64 {
        if self.body_size_in_bytes > 0 {
            return self.body_size_in_bytes;
        }
        match &self.body {
            ResponseBody::Text(text) => text.len() as u64,
            ResponseBody::Binary(bytes) => bytes.len() as u64,
        }
    }
}

/// A response body: text, or raw bytes (images, other binary payloads).
///
/// Binary bodies are serialized as base64 in exchange JSON; decoding happens
/// once, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ResponseBodyRepr", into = "ResponseBodyRepr")]
pub enum ResponseBody {
    Text(String),
    Binary(Vec<u8>),
}

impl Default for ResponseBody {
    fn default() -> Self { ResponseBody::Text(String::new()) }
}

/// Wire form of [`ResponseBody`]: `{"text": "..."}` or
/// `{"binary": "<base64>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
enum ResponseBodyRepr {
    Text(String),
    Binary(String),
}

impl TryFrom<ResponseBodyRepr> for ResponseBody {
    type Error = String;

    fn try_from(repr: ResponseBodyRepr) -> Result<Self, Self::Error> {
        match repr {
            ResponseBodyRepr::Text(text) => Ok(ResponseBody::Text(text)),
            ResponseBodyRepr::Binary(encoded) => general_purpose::STANDARD
                .decode(encoded.as_bytes())
                .map(ResponseBody::Binary)
                .map_err(|err| format!("invalid base64 response body: {err}")),
        }
    }
}

impl From<ResponseBody> for ResponseBodyRepr {
    fn from(body: ResponseBody) -> Self {
        match body {
            ResponseBody::Text(text) => ResponseBodyRepr::Text(text),
            ResponseBody::Binary(bytes) => {
                ResponseBodyRepr::Binary(general_purpose::STANDARD.encode(bytes))
            }
        }
    }
}
