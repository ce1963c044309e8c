//! The API client: base URL, bearer token, transport seam.

use crate::{ApiError, Envelope, Method, Pagination, RequestBuilder, Response, TokenStore};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// The seam between the client and the wire.
///
/// Production uses [`HttpTransport`]; tests script responses through a mock.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError>;
}

/// Transport backed by reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let method = reqwest::Method::from_bytes(request.method().as_str().as_bytes())
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let url = request.full_url();

        let mut req = self.client.request(method, &url);
        for (key, value) in &request.headers {
            req = req.header(key, value);
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_builder() {
                ApiError::InvalidUrl(url.clone())
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = resp.status().as_u16();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// Typed client for the storefront backend.
///
/// Attaches the bearer token to every request, decodes the response
/// envelope, and treats `status == "error"` as a failure even on HTTP 200.
/// Every call is a single attempt; there is no retry layer.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: TokenStore,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client against a base URL with the reqwest transport.
    pub fn new(base_url: impl Into<String>, token: TokenStore) -> Self {
        Self::with_transport(base_url, token, Arc::new(HttpTransport::new()))
    }

    /// Create a client with an explicit transport (used by tests).
    pub fn with_transport(
        base_url: impl Into<String>,
        token: TokenStore,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token,
            transport,
        }
    }

    /// The token store this client authenticates with.
    pub fn token_store(&self) -> &TokenStore {
        &self.token
    }

    /// GET a list endpoint, returning payload and pagination.
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<(T, Option<Pagination>), ApiError> {
        let request = self.request(Method::Get, path).query_pairs(query);
        self.dispatch(request).await
    }

    /// GET a single resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::Get, path);
        self.dispatch(request).await.map(|(data, _)| data)
    }

    /// POST a JSON body and decode the payload.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::Post, path).json(body)?;
        self.dispatch(request).await.map(|(data, _)| data)
    }

    /// POST a JSON body where only the acknowledgement matters.
    pub async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self.request(Method::Post, path).json(body)?;
        self.dispatch_ack(request).await
    }

    /// POST raw bytes (uploads) and decode the payload.
    pub async fn post_bytes<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::Post, path).bytes(body, content_type);
        self.dispatch(request).await.map(|(data, _)| data)
    }

    /// PUT a JSON body and decode the payload.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::Put, path).json(body)?;
        self.dispatch(request).await.map(|(data, _)| data)
    }

    /// DELETE a resource, expecting an acknowledgement.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::Delete, path);
        self.dispatch_ack(request).await
    }

    /// DELETE a resource and decode a payload (e.g., the updated cart).
    pub async fn delete_with_body<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::Delete, path);
        self.dispatch(request).await.map(|(data, _)| data)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = RequestBuilder::new(method, url);
        if let Some(token) = self.token.get() {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<(T, Option<Pagination>), ApiError> {
        let url = request.full_url();
        tracing::debug!(method = request.method().as_str(), %url, "dispatching request");

        let response = self.transport.send(request).await?;
        if response.status == 401 {
            // No redirect and no token refresh; the failure just surfaces.
            tracing::warn!(%url, "unauthorized response");
        }
        let response = response.error_for_status()?;
        let envelope: Envelope<T> = Envelope::from_bytes(&response.body)?;
        envelope.into_result()
    }

    async fn dispatch_ack(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let url = request.full_url();
        tracing::debug!(method = request.method().as_str(), %url, "dispatching request");

        let response = self.transport.send(request).await?;
        if response.status == 401 {
            tracing::warn!(%url, "unauthorized response");
        }
        let response = response.error_for_status()?;
        let envelope: Envelope<serde_json::Value> = Envelope::from_bytes(&response.body)?;
        envelope.ack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Transport that returns a canned response and records the request.
    struct CannedTransport {
        response: Mutex<Option<Response>>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &[u8]) -> Self {
            Self {
                response: Mutex::new(Some(Response::new(
                    status,
                    HashMap::new(),
                    body.to_vec(),
                ))),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
            let auth = request
                .headers
                .get("Authorization")
                .cloned()
                .unwrap_or_default();
            self.seen
                .lock()
                .unwrap()
                .push((request.full_url(), auth));
            Ok(self.response.lock().unwrap().take().expect("one request"))
        }
    }

    fn client(transport: Arc<CannedTransport>, token: TokenStore) -> ApiClient {
        ApiClient::with_transport("http://localhost:8080/", token, transport)
    }

    #[tokio::test]
    async fn test_get_attaches_bearer_token() {
        let transport = Arc::new(CannedTransport::new(
            200,
            br#"{"status":"success","data":{"ok":true}}"#,
        ));
        let token = TokenStore::with_token("tok-1");
        let api = client(transport.clone(), token);

        let _: serde_json::Value = api.get("/api/cart").await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].0, "http://localhost:8080/api/cart");
        assert_eq!(seen[0].1, "Bearer tok-1");
    }

    #[tokio::test]
    async fn test_no_token_no_auth_header() {
        let transport = Arc::new(CannedTransport::new(
            200,
            br#"{"status":"success","data":[]}"#,
        ));
        let api = client(transport.clone(), TokenStore::new());

        let _: Vec<serde_json::Value> = api.get("/api/products").await.unwrap();
        assert_eq!(transport.seen.lock().unwrap()[0].1, "");
    }

    #[tokio::test]
    async fn test_application_error_on_http_200() {
        let transport = Arc::new(CannedTransport::new(
            200,
            br#"{"status":"error","message":"Invalid discount code"}"#,
        ));
        let api = client(transport, TokenStore::new());

        let err = api
            .get::<serde_json::Value>("/api/discounts/apply")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Application(_)));
        assert_eq!(err.user_message(), "Invalid discount code");
    }

    #[tokio::test]
    async fn test_http_error_surfaces() {
        let transport = Arc::new(CannedTransport::new(
            500,
            br#"{"status":"error","message":"boom"}"#,
        ));
        let api = client(transport, TokenStore::new());

        let err = api.get::<serde_json::Value>("/api/cart").await.unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unauthorized_is_an_error() {
        let transport = Arc::new(CannedTransport::new(
            401,
            br#"{"status":"error","message":"Unauthenticated"}"#,
        ));
        let api = client(transport, TokenStore::new());

        let err = api.get::<serde_json::Value>("/api/orders").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_paginated_get() {
        let transport = Arc::new(CannedTransport::new(
            200,
            br#"{"status":"success","data":[1,2],"pagination":{"currentPage":1,"totalPages":4,"totalItems":40}}"#,
        ));
        let api = client(transport, TokenStore::new());

        let (data, pagination): (Vec<i64>, _) = api
            .get_paginated("/api/products", vec![("page".to_string(), "1".to_string())])
            .await
            .unwrap();
        assert_eq!(data, vec![1, 2]);
        assert_eq!(pagination.unwrap().display_page(), 2);
    }
}
