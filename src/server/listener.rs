use crate::config::Config;
use crate::http::connection::Connection;
use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Owns the listening socket. Only the accept loop reads from it; every
/// accepted connection gets its own detached task.
pub struct Listener {
    inner: TcpListener,
    root_dir: String,
}

impl Listener {
    /// Binds the listening socket. A failure here is the one fatal error
    /// the server has: it propagates out of `main` with no retry.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr = cfg.listen_addr();
        let inner = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        Ok(Self {
            inner,
            root_dir: cfg.root_dir.clone(),
        })
    }

    /// The bound address, useful when the configured port was 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!("Serving {} on {}", self.root_dir, self.inner.local_addr()?);

        loop {
            let (socket, peer) = self.inner.accept().await?;
            info!("Accepted connection from {}", peer);

            let root_dir = self.root_dir.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, root_dir);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg).await?.run().await
}
