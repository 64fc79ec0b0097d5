// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Header fields with an explicit value type at the boundary.
//!
//! Header values arrive from the host as untyped JSON; they are coerced into
//! [`HeaderValue`] exactly once, when the exchange is constructed. Nothing
//! downstream ever deals with a non-string header value.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize, de::MapAccess, de::Visitor, ser::SerializeMap};

/// A single header value. Construction sanitizes CR/LF so a value can never
/// smuggle a line break into the rendered protocol preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct HeaderValue(String);

impl HeaderValue {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw: String = raw.into();
        let sanitized = if raw.contains(['\r', '\n']) {
            raw.replace(['\r', '\n'], " ")
        } else {
            raw
        };
        Self(sanitized)
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for HeaderValue {
    fn from(raw: String) -> Self { Self::new(raw) }
}

impl From<&str> for HeaderValue {
    fn from(raw: &str) -> Self { Self::new(raw) }
}

impl From<HeaderValue> for String {
    fn from(value: HeaderValue) -> Self { value.0 }
}

impl Display for HeaderValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of header fields.
///
/// Serialized as a JSON object (`{"name": "value", ...}`) so host-editor
/// exchange dumps deserialize directly; insertion order is preserved, which
/// keeps the rendered preview deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<(String, HeaderValue)>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<HeaderValue>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Case-insensitive lookup of the first field with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.fields
            .iter()
            .find(|(it, _)| it.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.fields.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl<K: Into<String>, V: Into<HeaderValue>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let fields = iter
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { fields }
    }
}

impl Serialize for Headers {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, HeaderValue>()? {
                    fields.push((name, value));
                }
                Ok(Headers { fields })
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_header_value_sanitizes_line_breaks() {
        let value = HeaderValue::new("multi\r\nline");
        assert_eq2!(value.as_str(), "multi  line");
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let headers: Headers =
            [("Content-Type", "application/json")].into_iter().collect();
        assert_eq2!(
            headers.get("content-type").map(HeaderValue::as_str),
            Some("application/json")
        );
        assert_eq2!(headers.get("accept"), None);
    }

    #[test]
    fn test_serde_round_trip_preserves_insertion_order() {
        let headers: Headers = [("B-First", "1"), ("A-Second", "2")].into_iter().collect();
        let json = serde_json::to_string(&headers).unwrap();
        assert_eq2!(json, r#"{"B-First":"1","A-Second":"2"}"#);

        let parsed: Headers = serde_json::from_str(&json).unwrap();
        assert_eq2!(parsed, headers);
    }
}
