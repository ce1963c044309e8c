//! Scripted transport and helpers shared by the integration tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront_api::{ApiClient, ApiError, RequestBuilder, Response, TokenStore, Transport};
use storefront_client::Storefront;
use storefront_store::{AppState, Store};

/// One request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

struct Scripted {
    status: u16,
    body: Vec<u8>,
    delay: Duration,
}

/// Transport that replays scripted responses in order and records every
/// request. Running out of script is a transport error, so a test asserting
/// "no network call" just scripts nothing.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(self: &Arc<Self>, status: u16, body: &str) -> Arc<Self> {
        self.respond_after(status, body, Duration::ZERO)
    }

    /// Script a response that arrives only after `delay`.
    pub fn respond_after(self: &Arc<Self>, status: u16, body: &str, delay: Duration) -> Arc<Self> {
        self.script.lock().unwrap().push_back(Scripted {
            status,
            body: body.as_bytes().to_vec(),
            delay,
        });
        self.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method().as_str().to_string(),
            url: request.full_url(),
            headers: request.headers().clone(),
            body: request.body().map(<[u8]>::to_vec),
        });
        let scripted = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no scripted response".to_string()))?;
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        Ok(Response::new(scripted.status, HashMap::new(), scripted.body))
    }
}

/// Build the full service bundle over a mock transport.
pub fn storefront(transport: Arc<MockTransport>) -> Storefront {
    let api = ApiClient::with_transport("http://test", TokenStore::new(), transport);
    Storefront::new(api, Store::spawn())
}

/// Wait until the store snapshot satisfies the predicate.
pub async fn wait_for(store: &Store, pred: impl Fn(&AppState) -> bool) -> AppState {
    let mut rx = store.subscribe();
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if pred(&rx.borrow()) {
                return rx.borrow().clone();
            }
            rx.changed().await.expect("store writer gone");
        }
    })
    .await
    .expect("state never matched predicate")
}
