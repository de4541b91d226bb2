//! `Location` header values for created and updated users.

use axum::http::{HeaderMap, header};

const FALLBACK_HOST: &str = "localhost";

/// Host (and port) the client addressed, from the `Host` header.
pub fn request_host(headers: &HeaderMap) -> &str {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or(FALLBACK_HOST)
}

/// Location of a resource created under the collection at `path`,
/// e.g. `http://localhost:3000/api/users/122`.
pub fn child_location(host: &str, path: &str, id: i64) -> String {
    format!("http://{host}{}/{id}", path.trim_end_matches('/'))
}

/// Location of the resource addressed by `path` itself.
pub fn self_location(host: &str, path: &str) -> String {
    format!("http://{host}{}", path.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_child_location() {
        assert_eq!(child_location("localhost:3000", "/api/users", 122), "http://localhost:3000/api/users/122");
        assert_eq!(child_location("example.com", "/api/users/", 5), "http://example.com/api/users/5");
    }

    #[test]
    fn test_self_location() {
        assert_eq!(self_location("localhost:3000", "/api/users/9"), "http://localhost:3000/api/users/9");
    }

    #[test]
    fn test_request_host() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_host(&headers), "localhost");

        headers.insert(header::HOST, HeaderValue::from_static("api.example.com:8080"));
        assert_eq!(request_host(&headers), "api.example.com:8080");
    }
}
