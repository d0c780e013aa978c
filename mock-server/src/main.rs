use mock_server::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(config.addr()).await?;
    mock_server::run(listener).await
}
