//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use header_echo::config::EchoConfig;
use header_echo::http::HttpServer;

/// Start the fixture on an ephemeral port and return its address.
pub async fn start_fixture() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(EchoConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
