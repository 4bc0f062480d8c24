//! HTTP adapter for the remote question-answering service.
//!
//! Issues one POST per send cycle against the backend's `/ask` route.
//! Uses browser `fetch()` via gloo-net for WASM compatibility, raced
//! against a gloo-timers deadline so a hung backend cannot leave the
//! placeholder message visible forever.

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use kbchat_core::ports::{AskPort, AskReply, AskRequest};
use kbchat_types::{message::Source, ChatError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Client for the `/ask` endpoint
pub struct AskHttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl AskHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/ask", self.base_url.trim_end_matches('/'))
    }

    async fn post(&self, req: &AskRequest) -> Result<AskReply> {
        let response = Request::post(&self.endpoint())
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::Backend(format!("HTTP {}: {}", status, text)));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Serialization(e.to_string()))?;

        Ok(AskReply {
            content: data.message.content,
            sources: data.message.sources,
        })
    }
}

impl Default for AskHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait(?Send)]
impl AskPort for AskHttpClient {
    async fn ask(&self, req: AskRequest) -> Result<AskReply> {
        let request = self.post(&req);
        let deadline = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(request);
        futures::pin_mut!(deadline);

        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("ask request timed out after {}ms", self.timeout_ms);
                Err(ChatError::Timeout(self.timeout_ms as u64))
            }
        }
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: String,
    #[serde(default)]
    sources: Vec<Source>,
}
