//! Test server harness.

use grader::embedding::{EncoderConfig, SentenceEncoder};
use grader::gateway::{AppState, create_router};
use grader::similarity::{EmbeddingSimilarity, FallbackSimilarity, SimilarityProvider};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

/// Which similarity provider the spawned server grades with.
#[derive(Debug, Clone, Copy, Default)]
pub enum TestProvider {
    /// No model: every answer gets the fallback similarity.
    #[default]
    Fallback,
    /// Deterministic stub embeddings.
    StubEncoder,
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
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

fn build_provider(kind: TestProvider) -> Result<Arc<dyn SimilarityProvider>, ServerStartupError> {
    match kind {
        TestProvider::Fallback => Ok(Arc::new(FallbackSimilarity)),
        TestProvider::StubEncoder => {
            let encoder = SentenceEncoder::load(EncoderConfig::stub())
                .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
            Ok(Arc::new(EmbeddingSimilarity::new(encoder)))
        }
    }
}

/// Spawns a server on an ephemeral localhost port.
///
/// No model files are needed for either [`TestProvider`].
pub async fn spawn_test_server(kind: TestProvider) -> Result<TestServer, ServerStartupError> {
    spawn_server_with_provider(build_provider(kind)?).await
}

/// Spawns a server around an arbitrary provider.
pub async fn spawn_server_with_provider(
    provider: Arc<dyn SimilarityProvider>,
) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let app = create_router(AppState::new(provider));

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
