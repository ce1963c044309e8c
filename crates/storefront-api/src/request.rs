//! HTTP request builder.

use crate::ApiError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add multiple query parameters.
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Set the request body as raw bytes with a content type.
    pub fn bytes(mut self, body: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        self.headers
            .insert("Content-Type".to_string(), content_type.into());
        self.body = Some(body.into());
        self
    }

    /// The full URL including the encoded query string.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let qs: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
            .collect();
        format!("{}?{}", self.url, qs.join("&"))
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The headers set so far.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The body, if one has been set.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Percent-encode a query component.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push_str("%20"),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_full_url_without_query() {
        let req = RequestBuilder::new(Method::Get, "http://localhost/api/cart");
        assert_eq!(req.full_url(), "http://localhost/api/cart");
    }

    #[test]
    fn test_full_url_with_query() {
        let req = RequestBuilder::new(Method::Get, "http://localhost/api/products")
            .query("page", "0")
            .query("search", "gaming laptop");
        assert_eq!(
            req.full_url(),
            "http://localhost/api/products?page=0&search=gaming%20laptop"
        );
    }

    #[test]
    fn test_bearer_auth_header() {
        let req = RequestBuilder::new(Method::Get, "http://x").bearer_auth("tok-123");
        assert_eq!(
            req.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-123")
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(serde::Serialize)]
        struct Body {
            code: String,
        }

        let req = RequestBuilder::new(Method::Post, "http://x")
            .json(&Body {
                code: "SAVE20".to_string(),
            })
            .unwrap();
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(req.body.is_some());
    }

    #[test]
    fn test_urlencode_special_chars() {
        let req = RequestBuilder::new(Method::Get, "http://x").query("q", "a&b=c");
        assert_eq!(req.full_url(), "http://x?q=a%26b%3Dc");
    }
}
