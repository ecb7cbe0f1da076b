use mock_server::Page;
use tokio::net::TcpListener;

const DEMO_PAGE: &str = "<html><head><title>Mock page</title></head>\
<body><h1>Mock page</h1><p>The quick brown fox jumps over the lazy dog. \
The dog sleeps.</p></body></html>";

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let body = match std::env::var("PAGE_FILE") {
        Ok(path) => std::fs::read_to_string(path)?,
        Err(_) => DEMO_PAGE.to_string(),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, mock_server::app(Page::ok(body))).await
}
