//! Application lifecycle.

use crate::{di::AppModule, startup};
use axum::Router;
use fitlog_config::AppConfig;
use fitlog_core::{FitlogError, FitlogResult};
use fitlog_repository::create_pool;
use fitlog_rest::create_router;
use std::future::Future;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

/// A wired application ready to serve.
#[derive(Debug)]
pub struct Application {
    config: AppConfig,
    module: AppModule,
}

impl Application {
    /// Opens the store, applies migrations and wires the components.
    ///
    /// # Errors
    ///
    /// Fails if the database cannot be opened or migrated.
    pub async fn build(config: AppConfig) -> FitlogResult<Self> {
        let pool = create_pool(&config.database).await?;
        pool.run_migrations().await?;

        let module = AppModule::builder().with_database_pool(pool).build()?;
        Ok(Self { config, module })
    }

    /// The configuration the application was built with.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds the HTTP router.
    #[must_use]
    pub fn router(&self) -> Router {
        create_router(self.module.app_state(), &self.config.server)
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Fails if the address cannot be bound or the server stops with an error.
    pub async fn run(self) -> FitlogResult<()> {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| FitlogError::Internal(format!("Failed to bind {addr}: {e}")))?;

        startup::print_startup_info(&self.config.server);
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on `listener` until `shutdown` resolves, then closes the pool.
    ///
    /// # Errors
    ///
    /// Fails if the server stops with an error.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> FitlogResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(local) = listener.local_addr() {
            info!("Listening on http://{}", local);
        }

        let result = axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| FitlogError::Internal(format!("HTTP server error: {e}")));

        self.module.database_pool().close().await;
        info!("Server shutdown complete");
        result
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
