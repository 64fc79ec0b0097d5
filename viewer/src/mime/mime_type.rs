// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Minimal content-type parsing for grammar dispatch.
//!
//! This is intentionally not a full RFC 2045 media-type parser. The
//! highlighter dispatcher only needs the normalized `type/subtype` essence
//! and the optional structured-syntax suffix (`+json`, `+xml`, ...), so
//! that is all [`parse`] extracts. It never fails: garbage input produces an
//! empty essence, which downstream simply treats as "unknown content type".

/// A parsed content type: the lowercased `type/subtype` essence (parameters
/// stripped) and the structured-syntax suffix, if one is present.
///
/// ```
/// use httpview::mime::parse;
///
/// let mime = parse("application/vnd.github+json; charset=utf-8");
/// assert_eq!(mime.essence, "application/vnd.github+json");
/// assert_eq!(mime.suffix.as_deref(), Some("json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    pub essence: String,
    pub suffix: Option<String>,
}

impl MimeType {
    /// Compare against a `type/subtype` essence, e.g. `"application/json"`.
    #[must_use]
    pub fn is(&self, essence: &str) -> bool { self.essence == essence }

    /// Compare against a structured-syntax suffix without the leading `+`,
    /// e.g. `"json"` matches `application/vnd.github+json`.
    #[must_use]
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.suffix.as_deref() == Some(suffix)
    }
}

/// Parse a `Content-Type` header value into a [`MimeType`].
///
/// Parameters (`; charset=utf-8`) are stripped, the essence is lowercased
/// and trimmed, and the suffix is split off the subtype when present. Input
/// with no `/` yields an empty essence and no suffix.
#[must_use]
pub fn parse(content_type: &str) -> MimeType {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if !essence.contains('/') {
        return MimeType {
            essence: String::new(),
            suffix: None,
        };
    }

    // The suffix is everything after the *last* `+` in the subtype.
    let suffix = essence
        .rsplit_once('+')
        .map(|(_, suffix)| suffix.to_string())
        .filter(|it| !it.is_empty());

    MimeType { essence, suffix }
}
