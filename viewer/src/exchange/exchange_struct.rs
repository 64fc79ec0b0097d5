// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use super::{request::Request, response::Response};
use crate::common::PreviewError;

/// One HTTP transaction: the request that was sent and the response that
/// came back. Immutable input to the render pipeline; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub request: Request,
    pub response: Response,
}

impl Exchange {
    /// Deserialize an exchange from the JSON form the `hv` binary consumes.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidExchange`] when the JSON does not
    /// match the exchange schema.
    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        serde_json::from_str(json).map_err(PreviewError::InvalidExchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, exchange::ResponseBody};

    #[test]
    fn test_exchange_from_json() {
        let json = r#"{
            "request": {
                "method": "GET",
                "url": "https://example.org/users",
                "headers": {"Accept": "application/json"}
            },
            "response": {
                "httpVersion": "1.1",
                "statusCode": 200,
                "statusMessage": "OK",
                "headers": {"Content-Type": "application/json"},
                "body": {"text": "[]"},
                "bodySizeInBytes": 2
            }
        }"#;
        let exchange = Exchange::from_json(json).unwrap();
        assert_eq2!(exchange.request.method, "GET");
        assert_eq2!(exchange.response.status_code, 200);
        assert_eq2!(exchange.response.body, ResponseBody::Text("[]".into()));
        assert_eq2!(
            exchange.response.content_type(),
            Some("application/json")
        );
    }

    #[test]
    fn test_exchange_from_bad_json_is_an_error() {
        let result = Exchange::from_json("{");
        assert!(matches!(result, Err(PreviewError::InvalidExchange(_))));
    }
}
