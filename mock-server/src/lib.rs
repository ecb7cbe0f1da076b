use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

pub use axum::http::StatusCode as PageStatus;

/// What the page route answers with.
#[derive(Clone, Debug)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Serves `page` at `/`; every other path is 404.
pub fn app(page: Page) -> Router {
    Router::new()
        .route("/", get(root))
        .with_state(Arc::new(page))
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn root(State(page): State<Arc<Page>>) -> impl IntoResponse {
    (
        page.status,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        page.body.clone(),
    )
}

/// Behaviour of the raw TCP server for responses axum cannot produce.
#[derive(Clone, Debug)]
pub enum RawScript {
    /// Write these bytes after the request head, then close.
    Reply(Vec<u8>),
    /// Read the request and never answer.
    Silent,
}

/// Accept connections forever, answering each according to `script`.
pub async fn run_raw(listener: TcpListener, script: RawScript) -> Result<(), std::io::Error> {
    loop {
        let (stream, _) = listener.accept().await?;
        let script = script.clone();
        tokio::spawn(async move {
            let _ = handle_raw(stream, script).await;
        });
    }
}

async fn handle_raw(mut stream: TcpStream, script: RawScript) -> Result<(), std::io::Error> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        head.extend_from_slice(&buf[..n]);
    }
    match script {
        RawScript::Reply(bytes) => {
            stream.write_all(&bytes).await?;
            stream.shutdown().await
        }
        RawScript::Silent => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        }
    }
}

/// Bind a random local port and serve `router` from a background thread.
pub fn spawn_app(router: Router) -> SocketAddr {
    spawn_with(move |listener| async move { run(listener, router).await })
}

/// Bind a random local port and serve `script` from a background thread.
pub fn spawn_raw(script: RawScript) -> SocketAddr {
    spawn_with(move |listener| async move { run_raw(listener, script).await })
}

fn spawn_with<F, Fut>(serve: F) -> SocketAddr
where
    F: FnOnce(TcpListener) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<(), std::io::Error>>,
{
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    let addr = std_listener.local_addr().expect("mock server address");
    std_listener.set_nonblocking(true).expect("nonblocking listener");

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("mock server runtime");
        rt.block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            serve(listener).await
        })
    });
    addr
}
