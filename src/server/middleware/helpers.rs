//! Credential extraction from request headers

use crate::auth::AuthMethod;
use actix_web::http::header::HeaderMap;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookie_str = headers.get("cookie")?.to_str().ok()?;
    cookie_str.split(';').find_map(|cookie| {
        cookie
            .trim()
            .strip_prefix("session=")
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

/// Extract the session token from the cookie or an `Authorization: Session` header
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = session_cookie(headers) {
        return Some(token);
    }

    let auth_str = headers.get("authorization")?.to_str().ok()?;
    auth_str.strip_prefix("Session ").map(str::to_string)
}

/// Extract authentication method from headers
///
/// A session wins over a bearer token.
pub fn extract_auth_method(headers: &HeaderMap) -> AuthMethod {
    if let Some(token) = extract_session_token(headers) {
        return AuthMethod::Session(token);
    }

    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(stripped) = auth_str.strip_prefix("Bearer ") {
                return AuthMethod::Jwt(stripped.to_string());
            }
        }
    }

    AuthMethod::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }

    #[test]
    fn test_session_cookie() {
        let map = headers(&[("cookie", "theme=dark; session=abc123; other=value")]);
        assert_eq!(
            extract_auth_method(&map),
            AuthMethod::Session("abc123".to_string())
        );
    }

    #[test]
    fn test_session_header() {
        let map = headers(&[("authorization", "Session tok")]);
        assert_eq!(extract_session_token(&map).as_deref(), Some("tok"));
    }

    #[test]
    fn test_bearer_token() {
        let map = headers(&[("authorization", "Bearer eyJ.x.y")]);
        assert_eq!(
            extract_auth_method(&map),
            AuthMethod::Jwt("eyJ.x.y".to_string())
        );
    }

    #[test]
    fn test_cookie_wins_over_bearer() {
        let map = headers(&[("authorization", "Bearer eyJ.x.y"), ("cookie", "session=s1")]);
        assert_eq!(extract_auth_method(&map), AuthMethod::Session("s1".to_string()));
    }

    #[test]
    fn test_no_credentials() {
        assert_eq!(extract_auth_method(&HeaderMap::new()), AuthMethod::None);
        let map = headers(&[("cookie", "session=")]);
        assert_eq!(extract_auth_method(&map), AuthMethod::None);
    }
}
