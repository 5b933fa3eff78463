use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use clap::Parser;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    api::{AppState, router},
    cli::{ConfigArgs, load_readings},
    core::engine::Engine,
    db::Db,
    prelude::*,
};

#[derive(Parser)]
pub struct ServeArgs {
    #[clap(long, default_value = "0.0.0.0:8080", env = "BIND_ADDRESS")]
    pub bind_address: SocketAddr,

    #[clap(long, default_value = "10s", env = "REQUEST_TIMEOUT")]
    pub request_timeout: humantime::Duration,

    /// JSON file with an array of meter readings to load on start-up.
    #[clap(long = "seed-readings", env = "SEED_READINGS_PATH")]
    pub seed_readings_path: Option<PathBuf>,
}

impl ServeArgs {
    pub async fn run(&self, config: &ConfigArgs) -> Result {
        let (catalog, accounts) = config.load()?;
        info!(n_price_plans = catalog.len(), "loaded the configuration");
        let db = Db::new(accounts);
        if let Some(path) = &self.seed_readings_path {
            load_readings(path, &db.readings)?;
        }

        let state = AppState { engine: Engine::new(catalog), db };
        let app = router(Arc::new(state)).layer((
            TraceLayer::new_for_http(),
            TimeoutLayer::new(self.request_timeout.into()),
        ));
        let listener = TcpListener::bind(self.bind_address)
            .await
            .with_context(|| format!("failed to bind to `{}`", self.bind_address))?;

        info!(bind_address = %self.bind_address, "serving…");
        axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
        info!("stopped");
        Ok(())
    }
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {error:#}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!("failed to install the signal handler: {error:#}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
