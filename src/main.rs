//! Aidra landing site
//!
//! With the `server` feature this binary renders pages and serves the client
//! bundle; built for the browser it hydrates the same `App`. Both install a
//! tracing subscriber that forwards ERROR events to the collector when a DSN
//! is configured.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}

#[cfg(not(feature = "server"))]
fn main() {
    #[cfg(target_arch = "wasm32")]
    client::init_logging();
    #[cfg(not(target_arch = "wasm32"))]
    dioxus::logger::initialize_default();

    // The guard cannot locate the session without these; refuse to mount.
    if let Err(e) = aidra_landing::auth::AuthConfig::from_build_env() {
        tracing::error!("Missing auth configuration, not starting: {}", e);
        return;
    }

    dioxus::launch(aidra_landing::app::App);
}

/// Browser console logging plus error reporting with the baked-in DSN.
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
mod client {
    use aidra_landing::telemetry;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

    pub fn init_logging() {
        console_error_panic_hook::set_once();

        let (layer, reporter, telemetry_error) = match telemetry::init(telemetry::baked_dsn()) {
            Ok(Some((layer, reporter))) => (Some(layer), Some(reporter), None),
            Ok(None) => (None, None, None),
            Err(e) => (None, None, Some(e)),
        };

        let console = WASMLayer::new(
            WASMLayerConfigBuilder::new()
                .set_max_level(tracing::Level::INFO)
                .build(),
        );
        if let Err(e) = tracing_subscriber::registry()
            .with(console)
            .with(layer)
            .try_init()
        {
            tracing::warn!("Logger already installed: {}", e);
        }

        match (reporter, telemetry_error) {
            (Some(reporter), _) => {
                reporter.spawn();
                tracing::debug!("Error reporting enabled");
            }
            (None, Some(e)) => tracing::warn!("Error reporting disabled: {}", e),
            (None, None) => {}
        }
    }
}

#[cfg(feature = "server")]
mod server {
    use std::net::SocketAddr;

    use aidra_landing::app::App;
    use aidra_landing::{config, site, telemetry};
    use anyhow::{Context, Result};
    use axum::{routing::get, Json, Router};
    use tokio::signal;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    pub async fn run() -> Result<()> {
        // Load configuration first: the telemetry layer depends on it
        let config = config::load_config()?;

        let (reporting, telemetry_error) = match telemetry::init(config.telemetry.dsn.as_deref()) {
            Ok(reporting) => (reporting, None),
            Err(e) => (None, Some(e)),
        };
        let (layer, reporter) = match reporting {
            Some((layer, reporter)) => (Some(layer), Some(reporter)),
            None => (None, None),
        };

        // Initialize logging
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "aidra_landing=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .with(layer)
            .init();

        tracing::info!(
            "Starting Aidra landing v{} ({})",
            env!("AIDRA_VERSION"),
            env!("AIDRA_GIT_SHA")
        );

        match (&reporter, telemetry_error) {
            (Some(_), _) => tracing::info!("Error reporting enabled"),
            (None, Some(e)) => tracing::warn!("Error reporting disabled: {}", e),
            (None, None) => tracing::debug!("No telemetry DSN configured"),
        }
        if let Some(reporter) = reporter {
            reporter.spawn();
        }

        let auth = config
            .auth()
            .context("auth service settings are required (AIDRA_AUTH__URL, AIDRA_AUTH__ANON_KEY)")?;
        tracing::info!("Auth project: {}", auth.project_ref());

        if !site::nav::set_platform_login_url(config.platform_login_url.clone()) {
            tracing::warn!("Platform login URL was already set");
        }
        tracing::info!("Configuration loaded, port: {}", config.port);

        let app = Router::new()
            .route("/healthz", get(health_handler))
            .merge(dioxus::server::router(App))
            // Middleware
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http());

        // Start server with graceful shutdown
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        tracing::info!("Listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Shutdown complete");
        Ok(())
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ok",
            "version": env!("AIDRA_VERSION"),
            "git_sha": env!("AIDRA_GIT_SHA"),
        }))
    }

    /// Wait for shutdown signal (Ctrl+C or SIGTERM)
    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                    tracing::error!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
            _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
        }
    }
}
