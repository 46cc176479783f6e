//! Stub transcription endpoint for exercising the recognizer without the network.

use std::sync::{Arc, Mutex};

use axum::extract::Multipart;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;

const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

/// One multipart field as the server received it.
#[derive(Clone, Debug, Default)]
pub struct CapturedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl CapturedField {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub fields: Vec<CapturedField>,
}

impl CapturedRequest {
    pub fn field(&self, name: &str) -> Option<&CapturedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Serves canned responses on a loopback port from its own tokio runtime,
/// so blocking clients can call it from a plain `#[test]`.
pub struct StubServer {
    base_url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
    runtime: Option<Runtime>,
}

impl StubServer {
    /// Answer every POST with `status` and `body`, recording the last request.
    pub fn respond(status: u16, body: &str) -> Self {
        let runtime = Runtime::new().unwrap();
        let captured = Arc::new(Mutex::new(None));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let status = StatusCode::from_u16(status).unwrap();
        let body = body.to_string();
        let sink = captured.clone();
        let app = Router::new().route(
            TRANSCRIPTIONS_PATH,
            post(move |headers: HeaderMap, multipart: Multipart| {
                let sink = sink.clone();
                let body = body.clone();
                async move {
                    let request = capture(&headers, multipart).await;
                    *sink.lock().unwrap() = Some(request);
                    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
                }
            }),
        );

        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();

        runtime.spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{addr}"),
            captured,
            shutdown: Some(shutdown_tx),
            runtime: Some(runtime),
        }
    }

    /// URL of a port nothing is listening on.
    pub fn closed_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}{TRANSCRIPTIONS_PATH}")
    }

    pub fn url(&self) -> String {
        format!("{}{TRANSCRIPTIONS_PATH}", self.base_url)
    }

    /// The last request received. Panics if none arrived.
    pub fn request(&self) -> CapturedRequest {
        self.captured
            .lock()
            .unwrap()
            .clone()
            .expect("stub server received no request")
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

async fn capture(headers: &HeaderMap, mut multipart: Multipart) -> CapturedRequest {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        fields.push(CapturedField {
            name,
            file_name,
            content_type,
            data,
        });
    }

    CapturedRequest {
        authorization,
        fields,
    }
}
