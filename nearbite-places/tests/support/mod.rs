//! Local HTTP server returning canned places responses.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use serde_json::Value;
use tokio::sync::oneshot;

/// One request seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path without the query string.
    pub path: String,
    /// Decoded query parameters.
    pub query: HashMap<String, String>,
}

type Responder = dyn Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync;

#[derive(Clone)]
struct ServerState {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Server bound to an ephemeral local port; stopped on drop.
pub struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl CannedServer {
    /// Start a server answering every request with `status` and `body`.
    pub fn fixed(status: StatusCode, body: Value) -> Self {
        Self::start(move |_| (status, body.clone()))
    }

    /// Start a server whose answers are computed by `responder`.
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener
            .set_nonblocking(true)
            .expect("listener should switch to non-blocking");
        let address = listener.local_addr().expect("listener has an address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            responder: Arc::new(responder),
            requests: Arc::clone(&requests),
        };
        let (shutdown, signal) = oneshot::channel::<()>();

        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("server runtime should build");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("listener should register with tokio");
                let app = Router::new().fallback(respond).with_state(state);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = signal.await;
                    })
                    .await
                    .expect("server should run");
            });
        });

        Self {
            base_url: format!("http://{address}"),
            requests,
            shutdown: Some(shutdown),
            thread: Some(thread),
        }
    }

    /// Root URL of the server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn respond(
    State(state): State<ServerState>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let request = RecordedRequest {
        path: uri.path().to_owned(),
        query,
    };
    let (status, body) = (state.responder)(&request);
    state
        .requests
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(request);
    (status, Json(body))
}
