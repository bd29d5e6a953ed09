//! Local stand-in for the Gravatar HTTP API.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Path and query of a request the server received.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
}

/// Canned reply, served in the order enqueued.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
    delay: Duration,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::status(404)
    }
}

impl MockResponse {
    pub fn png(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "image/png",
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            content_type: "text/plain",
            body: b"Not Found".to_vec(),
            delay: Duration::ZERO,
        }
    }

    /// 200 with a body no image decoder accepts.
    pub fn garbage() -> Self {
        Self {
            body: b"definitely not a png".to_vec(),
            ..Self::png(Vec::new())
        }
    }

    pub fn with_delay(self, ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            ..self
        }
    }
}

#[derive(Default)]
struct Exchange {
    queued: Mutex<VecDeque<MockResponse>>,
    seen: Mutex<Vec<CapturedRequest>>,
}

/// Avatar server on an ephemeral local port. Stops when dropped.
pub struct MockAvatarServer {
    addr: SocketAddr,
    exchange: Arc<Exchange>,
    stop: Option<oneshot::Sender<()>>,
}

impl MockAvatarServer {
    pub async fn start() -> Self {
        let exchange = Arc::new(Exchange::default());
        let app = Router::new()
            .fallback(serve_avatar)
            .with_state(Arc::clone(&exchange));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock avatar server");
        let addr = listener.local_addr().expect("mock server address");
        let (stop, stopped) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            addr,
            exchange,
            stop: Some(stop),
        }
    }

    /// Queue the reply for the next request; unqueued requests get a 404.
    pub fn enqueue_response(&self, response: MockResponse) {
        self.exchange.queued.lock().push_back(response);
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.exchange.seen.lock().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockAvatarServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn serve_avatar(State(exchange): State<Arc<Exchange>>, uri: Uri) -> Response {
    exchange.seen.lock().push(CapturedRequest {
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
    });
    let reply = exchange.queued.lock().pop_front().unwrap_or_default();

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, reply.content_type)],
        reply.body,
    )
        .into_response()
}
