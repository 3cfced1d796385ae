#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use xbox_identity::auth::{AccessToken, CodeExchanger};
use xbox_identity::config::ApplicationConfigEndpoints;
use xbox_identity::{AuthError, HttpClient, HttpResponse, Stage, TransportError, XboxAuthProvider};

/// What the fake answers for a URL
#[derive(Clone, Debug)]
pub enum Reply {
    Response(u16, String),
    Transport(String),
    /// Never completes
    Pending,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Reply::Response(status, body.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl RecordedCall {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct FakeHttpInner {
    routes: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// Recording [`HttpClient`] answering from a fixed route table
#[derive(Clone, Default)]
pub struct FakeHttp {
    inner: Arc<FakeHttpInner>,
}

impl FakeHttp {
    pub fn route(self, url: &str, reply: Reply) -> Self {
        self.inner
            .routes
            .lock()
            .unwrap()
            .insert(url.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.url == url).collect()
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
        body: &Value,
    ) -> Result<HttpResponse, TransportError> {
        self.inner.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: body.clone(),
        });

        let reply = self.inner.routes.lock().unwrap().get(url).cloned();
        match reply {
            Some(Reply::Response(status, body)) => Ok(HttpResponse::new(status, body)),
            Some(Reply::Transport(message)) => Err(TransportError(message)),
            Some(Reply::Pending) => std::future::pending().await,
            None => Ok(HttpResponse::new(404, "no route")),
        }
    }
}

/// [`CodeExchanger`] that hands out a fixed access token
#[derive(Clone)]
pub struct FakeExchanger {
    result: Result<String, (u16, String)>,
    exchanges: Arc<AtomicUsize>,
}

impl FakeExchanger {
    pub fn ok(token: &str) -> Self {
        Self {
            result: Ok(token.to_string()),
            exchanges: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn rejecting(status: u16, body: &str) -> Self {
        Self {
            result: Err((status, body.to_string())),
            exchanges: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn exchanges(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeExchanger for FakeExchanger {
    async fn exchange(&self, _code: &str) -> Result<AccessToken, AuthError> {
        self.exchanges.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(token) => Ok(AccessToken::new(token.clone())),
            Err((status, body)) => Err(AuthError::upstream(
                Stage::CodeExchange,
                *status,
                body.clone(),
            )),
        }
    }
}

pub fn endpoints() -> ApplicationConfigEndpoints {
    ApplicationConfigEndpoints::default()
}

pub fn user_token_fixture() -> Value {
    json!({ "Token": "UT1" })
}

pub fn xsts_fixture() -> Value {
    json!({
        "Token": "XT1",
        "DisplayClaims": { "xui": [{ "xid": "X123", "uhs": "H1" }] }
    })
}

pub fn profile_fixture() -> Value {
    json!({
        "profileUsers": [{
            "id": "X123",
            "settings": [
                { "id": "GameDisplayName", "value": "Player1" },
                { "id": "GameDisplayPicRaw", "value": "http://img" }
            ]
        }]
    })
}

/// A fake answering every Xbox Live hop with the happy-path fixture
pub fn happy_http() -> FakeHttp {
    let endpoints = endpoints();
    FakeHttp::default()
        .route(
            &endpoints.user_token_url,
            Reply::json(200, user_token_fixture()),
        )
        .route(&endpoints.xsts_url, Reply::json(200, xsts_fixture()))
        .route(&endpoints.profile_url, Reply::json(200, profile_fixture()))
}

pub fn provider(
    exchanger: FakeExchanger,
    http: FakeHttp,
) -> XboxAuthProvider<FakeExchanger, FakeHttp> {
    XboxAuthProvider::new(exchanger, http, endpoints())
}
