//! Mock provider backends for integration tests
//!
//! One server answers for Gemini (`/gemini/v1`), ElevenLabs (`/elevenlabs/v1`)
//! and Open Library (`/openlibrary`) with canned responses.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use super::config::{ELEVENLABS_KEY, GEMINI_KEY, VOICE_ID};

/// Summary text every successful Gemini call returns
pub const SUMMARY: &str = "A clever fox flatters a crow into dropping its cheese.";

/// Audio bytes every successful ElevenLabs call returns
pub const AUDIO: &[u8] = b"ID3\x04\x00mock-mpeg-audio";

/// Number of search documents the mock returns for every title
pub const SEARCH_DOCS: usize = 12;

pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    summary_count: AtomicU32,
    speech_count: AtomicU32,
    search_count: AtomicU32,
    work_count: AtomicU32,
    fail_summaries: AtomicBool,
    fail_speech: AtomicBool,
    fail_search: AtomicBool,
    prompts: Mutex<Vec<String>>,
    speech_requests: Mutex<Vec<Value>>,
    works: Mutex<HashMap<String, Value>>,
}

impl MockUpstream {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockState::default());

        let app = Router::new()
            .route("/gemini/v1/models/{action}", routing::post(handle_generate))
            .route("/elevenlabs/v1/text-to-speech/{voice}", routing::post(handle_speech))
            .route("/openlibrary/search.json", routing::get(handle_search))
            .route("/openlibrary/works/{file}", routing::get(handle_work))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();

        let cancelled = shutdown.clone();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { cancelled.cancelled().await })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Register a work record served at `/works/{id}.json`
    pub fn add_work(&self, id: &str, record: Value) {
        self.state.works.lock().unwrap().insert(id.to_owned(), record);
    }

    pub fn fail_summaries(&self) {
        self.state.fail_summaries.store(true, Ordering::Relaxed);
    }

    pub fn fail_speech(&self) {
        self.state.fail_speech.store(true, Ordering::Relaxed);
    }

    pub fn fail_search(&self) {
        self.state.fail_search.store(true, Ordering::Relaxed);
    }

    pub fn summary_count(&self) -> u32 {
        self.state.summary_count.load(Ordering::Relaxed)
    }

    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    pub fn search_count(&self) -> u32 {
        self.state.search_count.load(Ordering::Relaxed)
    }

    pub fn work_count(&self) -> u32 {
        self.state.work_count.load(Ordering::Relaxed)
    }

    /// Prompt texts received by the Gemini endpoint
    pub fn prompts(&self) -> Vec<String> {
        self.state.prompts.lock().unwrap().clone()
    }

    /// JSON bodies received by the ElevenLabs endpoint
    pub fn speech_requests(&self) -> Vec<Value> {
        self.state.speech_requests.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn header_is(headers: &HeaderMap, name: &str, expected: &str) -> bool {
    headers.get(name).and_then(|v| v.to_str().ok()) == Some(expected)
}

async fn handle_generate(
    State(state): State<Arc<MockState>>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.summary_count.fetch_add(1, Ordering::Relaxed);

    if !header_is(&headers, "x-goog-api-key", GEMINI_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": {"code": 401}}))).into_response();
    }

    if action != "gemini-2.5-pro:generateContent" {
        return (StatusCode::NOT_FOUND, Json(json!({"error": {"code": 404}}))).into_response();
    }

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or_default().to_owned();
    state.prompts.lock().unwrap().push(prompt);

    if state.fail_summaries.load(Ordering::Relaxed) {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"error": {"code": 503, "message": "overloaded", "status": "UNAVAILABLE"}})),
        )
            .into_response();
    }

    Json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": SUMMARY}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 42, "candidatesTokenCount": 12, "totalTokenCount": 54}
    }))
    .into_response()
}

async fn handle_speech(
    State(state): State<Arc<MockState>>,
    Path(voice): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.speech_count.fetch_add(1, Ordering::Relaxed);
    state.speech_requests.lock().unwrap().push(body);

    if !header_is(&headers, "xi-api-key", ELEVENLABS_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "invalid_api_key"}))).into_response();
    }

    if voice != VOICE_ID {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "voice_not_found"}))).into_response();
    }

    if state.fail_speech.load(Ordering::Relaxed) {
        return (StatusCode::TOO_MANY_REQUESTS, Json(json!({"detail": "quota_exceeded"}))).into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], AUDIO).into_response()
}

async fn handle_search(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.search_count.fetch_add(1, Ordering::Relaxed);

    if state.fail_search.load(Ordering::Relaxed) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "search unavailable").into_response();
    }

    let title = params.get("title").cloned().unwrap_or_default();

    let docs: Vec<Value> = (0..SEARCH_DOCS)
        .map(|i| match i {
            0 => json!({
                "title": title,
                "author_name": ["J.R.R. Tolkien", "Christopher Tolkien"],
                "key": "/works/OL27482W",
                "cover_i": 14_627_509,
                "edition_count": 120
            }),
            1 => json!({"title": format!("{title}: a companion"), "key": "/works/OL1W"}),
            _ => json!({"title": format!("{title} {i}"), "author_name": ["Anon"], "key": format!("/works/OL{i}W")}),
        })
        .collect();

    Json(json!({"numFound": SEARCH_DOCS, "start": 0, "docs": docs})).into_response()
}

async fn handle_work(State(state): State<Arc<MockState>>, Path(file): Path<String>) -> Response {
    state.work_count.fetch_add(1, Ordering::Relaxed);

    let record = file
        .strip_suffix(".json")
        .and_then(|id| state.works.lock().unwrap().get(id).cloned());

    match record {
        Some(record) => Json(record).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "notfound", "key": file}))).into_response(),
    }
}
