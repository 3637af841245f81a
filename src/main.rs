//! Plagiscan HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use plagiscan::config::Config;
use plagiscan::evidence::{DefaultRetriever, EvidenceConfig};
use plagiscan::fetch::{FetcherConfig, HttpFetcher};
use plagiscan::gateway::{HandlerState, create_router_with_state};
use plagiscan::pipeline::{PipelineConfig, PlagiarismChecker};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // The probe builds its own runtime, so it must run before `serve` starts one.
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    serve()
}

#[tokio::main]
async fn serve() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    let pipeline_config = PipelineConfig::from_env();
    pipeline_config.validate()?;
    let evidence_config = EvidenceConfig::from_env()?;
    evidence_config.validate()?;
    let fetcher_config = FetcherConfig::from_env();
    fetcher_config.validate()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        web_search = %evidence_config.web_search_url,
        academic_search = %evidence_config.academic_search_url,
        batch_size = pipeline_config.batch_size,
        fetch_concurrency = pipeline_config.fetch_concurrency,
        "Plagiscan starting"
    );

    let retriever = DefaultRetriever::from_config(&evidence_config)?;
    let fetcher = HttpFetcher::new(&fetcher_config)?;
    let checker = PlagiarismChecker::new(retriever, fetcher, pipeline_config);

    let state = HandlerState::new(checker, config.min_text_chars);
    let app = create_router_with_state(state, &config.cors_origins);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Plagiscan shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("PLAGISCAN_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(plagiscan::constants::DEFAULT_PORT);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
