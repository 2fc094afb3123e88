//! Credential extraction from request headers
//!
//! Only the raw credential is pulled out here; handlers resolve it to an
//! identity explicitly via `identity::resolve`. There is no middleware that
//! authenticates on the side.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;

use crate::common::auth::Credential;

/// Name of the session cookie carrying the signed token for browser clients.
pub const SESSION_COOKIE: &str = "onvet_session";

/// Extract the credential from a request, preferring the Authorization
/// header over the session cookie.
pub fn credential_from_headers(headers: &HeaderMap) -> Credential {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        // Handle both "Bearer <token>" and a raw token
        let token = value.strip_prefix("Bearer ").unwrap_or(value);
        if !token.is_empty() {
            return Credential::Bearer(token.to_string());
        }
    }

    if let Some(cookies) = headers.get(COOKIE).and_then(|v| v.to_str().ok()) {
        for part in cookies.split(';') {
            if let Some(token) = part.trim().strip_prefix(&format!("{}=", SESSION_COOKIE)) {
                if !token.is_empty() {
                    return Credential::SessionCookie(token.to_string());
                }
            }
        }
    }

    Credential::Missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_header_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(
            credential_from_headers(&headers),
            Credential::Bearer("abc123".to_string())
        );
    }

    #[test]
    fn test_raw_token_without_bearer_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("abc123"));
        assert_eq!(
            credential_from_headers(&headers),
            Credential::Bearer("abc123".to_string())
        );
    }

    #[test]
    fn test_session_cookie_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; onvet_session=tok456; lang=ko"),
        );
        assert_eq!(
            credential_from_headers(&headers),
            Credential::SessionCookie("tok456".to_string())
        );
    }

    #[test]
    fn test_authorization_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer header-tok"));
        headers.insert(COOKIE, HeaderValue::from_static("onvet_session=cookie-tok"));
        assert_eq!(
            credential_from_headers(&headers),
            Credential::Bearer("header-tok".to_string())
        );
    }

    #[test]
    fn test_no_credential_is_missing() {
        let headers = HeaderMap::new();
        assert_eq!(credential_from_headers(&headers), Credential::Missing);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(credential_from_headers(&headers), Credential::Missing);
    }
}
