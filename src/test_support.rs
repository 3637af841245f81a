//! Local HTTP stubs for unit tests of the outbound adapters.

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral loopback port for the rest of the test.
pub async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    addr
}

pub fn stub_url(addr: SocketAddr, path: &str) -> url::Url {
    url::Url::parse(&format!("http://{addr}{path}")).expect("stub url")
}
