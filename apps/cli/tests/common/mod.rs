//! Common test utilities for pipeline integration tests.
//!
//! Provides a local stand-in for the dictionary site and its audio CDN, served
//! by axum on an ephemeral port, plus helpers for building a `Config` that
//! points at it.

pub mod fixtures;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use longman_anki::config::Config;

#[derive(Default)]
struct SiteState {
    pages: Mutex<HashMap<String, (StatusCode, Vec<u8>)>>,
    audio: Mutex<HashMap<String, Vec<u8>>>,
    requests: Mutex<Vec<String>>,
}

/// Running fake dictionary site. Content can be registered after start,
/// since pages embed audio URLs that depend on the bound port.
pub struct FakeSite {
    pub base_url: String,
    state: Arc<SiteState>,
}

impl FakeSite {
    pub async fn start() -> Self {
        let state = Arc::new(SiteState::default());
        let app = Router::new()
            .route("/dictionary/:word", get(dictionary_page))
            .route("/media/english/:folder/:file", get(audio_file))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Serve `html` for `/dictionary/<word>`.
    pub fn page(&self, word: &str, html: String) {
        self.page_bytes(word, html.into_bytes());
    }

    /// Serve raw `body` bytes for `/dictionary/<word>`.
    pub fn page_bytes(&self, word: &str, body: Vec<u8>) {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert(word.to_string(), (StatusCode::OK, body));
    }

    /// Answer `/dictionary/<word>` with an error status.
    pub fn failing_page(&self, word: &str, status: StatusCode) {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert(word.to_string(), (status, Vec::new()));
    }

    /// Serve `bytes` for `/media/english/<folder>/<file>`. Unregistered files are 404.
    pub fn audio(&self, folder: &str, file: &str, bytes: &[u8]) {
        self.state
            .audio
            .lock()
            .unwrap()
            .insert(format!("{}/{}", folder, file), bytes.to_vec());
    }

    /// Audio CDN prefix served by this site.
    pub fn audio_url(&self) -> String {
        format!("{}/media/english/", self.base_url)
    }

    /// Config pointing at this site and at files under `dir`.
    pub fn config(&self, dir: &Path) -> Config {
        Config {
            wordlist_path: dir.join("wordlist.txt"),
            output_path: dir.join("anki_output.txt"),
            audio_dir: dir.join("media"),
            dictionary_url: format!("{}/dictionary/", self.base_url),
            audio_url: self.audio_url(),
        }
    }

    /// Request paths in the order they were received.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Base URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind unused port");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

async fn dictionary_page(State(state): State<Arc<SiteState>>, UrlPath(word): UrlPath<String>) -> Response {
    state.requests.lock().unwrap().push(format!("/dictionary/{}", word));
    let page = state.pages.lock().unwrap().get(&word).cloned();
    match page {
        Some((status, body)) => (status, body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn audio_file(
    State(state): State<Arc<SiteState>>,
    UrlPath((folder, file)): UrlPath<(String, String)>,
) -> Response {
    let key = format!("{}/{}", folder, file);
    state.requests.lock().unwrap().push(format!("/media/english/{}", key));
    let bytes = state.audio.lock().unwrap().get(&key).cloned();
    match bytes {
        Some(bytes) => bytes.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
