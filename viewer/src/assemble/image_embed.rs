// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use base64::{Engine, engine::general_purpose};

use crate::mime;

/// Image formats a browser can display inline. `image/svg+xml` is absent
/// deliberately: its `+xml` suffix routes it through the XML grammar as
/// text instead.
const BROWSER_IMAGE_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/x-icon",
];

/// Whether the content type is a browser-displayable image format. Bodies
/// with such a type bypass highlighting, line splitting, and folding
/// entirely and render as an embedded image.
#[must_use]
pub fn is_browser_image(content_type: &str) -> bool {
    let mime = mime::parse(content_type);
    BROWSER_IMAGE_TYPES.contains(&mime.essence.as_str())
}

/// Render body bytes as a self-contained `<img>` with a base64 data URI.
#[must_use]
pub fn embed_image(content_type: &str, bytes: &[u8]) -> String {
    let essence = mime::parse(content_type).essence;
    format!(
        "<img class=\"response-image\" src=\"data:{essence};base64,{}\">",
        general_purpose::STANDARD.encode(bytes)
    )
}
