//! Test server harness.

use plagiscan::evidence::{EvidenceSource, MockEvidenceSource};
use plagiscan::fetch::{MockPageFetcher, PageFetcher};
use plagiscan::gateway::{HandlerState, create_router_with_state};
use plagiscan::pipeline::{PipelineConfig, PlagiarismChecker};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub evidence: MockEvidenceSource,
    pub fetcher: MockPageFetcher,
    pub pipeline: PipelineConfig,
    pub min_text_chars: usize,
    pub cors_origins: Vec<String>,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            evidence: MockEvidenceSource::new(),
            fetcher: MockPageFetcher::new(),
            pipeline: PipelineConfig::default().with_batch_pause(Duration::ZERO),
            min_text_chars: 100,
            cors_origins: Vec::new(),
        }
    }
}

impl TestServerConfig {
    pub fn with_evidence(mut self, evidence: MockEvidenceSource) -> Self {
        self.evidence = evidence;
        self
    }

    pub fn with_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Spawns a server whose evidence source and page fetcher are in-memory
/// mocks. No request leaves the loopback interface.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let checker = PlagiarismChecker::new(config.evidence, config.fetcher, config.pipeline);
    spawn_server_with(checker, config.min_text_chars, config.cors_origins).await
}

/// Spawns the full router over any checker on an ephemeral port.
pub async fn spawn_server_with<E, F>(
    checker: PlagiarismChecker<E, F>,
    min_text_chars: usize,
    cors_origins: Vec<String>,
) -> Result<TestServer, ServerStartupError>
where
    E: EvidenceSource + 'static,
    F: PageFetcher + 'static,
{
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let state = HandlerState::new(checker, min_text_chars);
    let app = create_router_with_state(state, &cors_origins);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Serves `router` on an ephemeral port, standing in for an outbound
/// collaborator (search page, metadata API, article host).
pub async fn spawn_stub(router: axum::Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    addr
}
