use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::server::{AdapterError, AppState, BasicCredentials};

/// Inbound Basic auth guard for the `/odata` routes.
///
/// Passes every request through when no credentials are configured; the
/// router logs a warning about that once at startup.
pub async fn require_basic_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(expected) = state.config.inbound_credentials.as_ref() else {
        return next.run(request).await;
    };

    match BasicAuth::from_headers(request.headers()) {
        Some(supplied) if supplied.matches(expected) => next.run(request).await,
        Some(_) => {
            tracing::debug!("rejected request with wrong credentials");
            AdapterError::Unauthorized.into_response()
        }
        None => {
            tracing::debug!("rejected request without credentials");
            AdapterError::Unauthorized.into_response()
        }
    }
}

/// Credentials decoded from an `Authorization: Basic ...` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        Self::parse(value)
    }

    pub fn parse(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self { username: username.to_string(), password: password.to_string() })
    }

    /// Compare both halves without short-circuiting on the first mismatch.
    pub fn matches(&self, expected: &BasicCredentials) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), expected.username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), expected.password.as_bytes());
        user_ok & pass_ok
    }
}

/// Byte comparison whose running time depends only on the input lengths.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let mut diff = a.len() ^ b.len();
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= usize::from(x ^ y);
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use base64::{Engine, engine::general_purpose::STANDARD};

    use super::*;

    fn header_for(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
    }

    #[test]
    fn parse_valid_header() {
        let auth = BasicAuth::parse(&header_for("reader", "s3cret")).unwrap();
        assert_eq!(auth.username, "reader");
        assert_eq!(auth.password, "s3cret");
    }

    #[test]
    fn password_may_contain_colons() {
        let auth = BasicAuth::parse(&header_for("reader", "a:b:c")).unwrap();
        assert_eq!(auth.password, "a:b:c");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let value = header_for("u", "p").replacen("Basic", "basic", 1);
        assert!(BasicAuth::parse(&value).is_some());
    }

    #[test]
    fn malformed_headers_are_rejected() {
        assert!(BasicAuth::parse("Bearer abc").is_none());
        assert!(BasicAuth::parse("Basic !!!notbase64").is_none());
        assert!(BasicAuth::parse(&format!("Basic {}", STANDARD.encode("nocolon"))).is_none());
        assert!(BasicAuth::parse("Basic").is_none());
    }

    #[test]
    fn matches_requires_both_halves() {
        let expected = BasicCredentials::new("reader", "s3cret");

        assert!(BasicAuth::parse(&header_for("reader", "s3cret")).unwrap().matches(&expected));
        assert!(!BasicAuth::parse(&header_for("reader", "wrong")).unwrap().matches(&expected));
        assert!(!BasicAuth::parse(&header_for("other", "s3cret")).unwrap().matches(&expected));
        assert!(!BasicAuth::parse(&header_for("reader", "s3cret2")).unwrap().matches(&expected));
    }

    #[test]
    fn constant_time_eq_behaves_like_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(constant_time_eq(b"", b""));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(!constant_time_eq(b"", b"a"));
    }
}
