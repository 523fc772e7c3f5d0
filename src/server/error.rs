use std::fmt::Display;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::parser::ParseError;

pub const BASIC_CHALLENGE: &str = r#"Basic realm="odata""#;

#[derive(Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// Upstream answered with a non-2xx status.
    UpstreamStatus(u16),
    /// Upstream did not answer within the configured timeout.
    UpstreamTimeout,
    /// Network failure, unreadable body, payload of the wrong shape.
    Unexpected(String),
    /// `$filter` rejected in strict mode.
    BadQuery(ParseError),
    /// Missing or wrong inbound credentials.
    Unauthorized,
}

impl AdapterError {
    pub fn status(&self) -> StatusCode {
        match self {
            AdapterError::UpstreamStatus(_) | AdapterError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdapterError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AdapterError::BadQuery(_) => StatusCode::BAD_REQUEST,
            AdapterError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::UpstreamStatus(status) => write!(f, "Upstream API error (status {})", status),
            AdapterError::UpstreamTimeout => write!(f, "Upstream timeout"),
            AdapterError::Unexpected(message) => write!(f, "{}", message),
            AdapterError::BadQuery(err) => write!(f, "Invalid $filter: {}", err.message),
            AdapterError::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl std::error::Error for AdapterError {}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AdapterError::UpstreamStatus(upstream) => json!({ "error": "Upstream API error", "status": upstream }),
            AdapterError::BadQuery(err) => json!({ "error": self.to_string(), "position": err.start }),
            _ => json!({ "error": self.to_string() }),
        };

        let mut response = (status, Json(body)).into_response();
        if matches!(self, AdapterError::Unauthorized) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(BASIC_CHALLENGE));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::{StatusCode, header}, response::IntoResponse};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    use super::AdapterError;

    async fn body_json(err: AdapterError) -> (StatusCode, Option<String>, Value) {
        let response = err.into_response();
        let status = response.status();
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, challenge, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn upstream_status_embeds_upstream_code() {
        let (status, _, body) = body_json(AdapterError::UpstreamStatus(503)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Upstream API error", "status": 503 }));
    }

    #[tokio::test]
    async fn timeout_is_gateway_timeout() {
        let (status, _, body) = body_json(AdapterError::UpstreamTimeout).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body, json!({ "error": "Upstream timeout" }));
    }

    #[tokio::test]
    async fn unexpected_carries_message() {
        let (status, _, body) = body_json(AdapterError::Unexpected("connection refused".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "connection refused" }));
    }

    #[tokio::test]
    async fn unauthorized_sets_challenge() {
        let (status, challenge, _) = body_json(AdapterError::Unauthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(challenge.as_deref(), Some(r#"Basic realm="odata""#));
    }
}
