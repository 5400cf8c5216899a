use anyhow::Result;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use translate_relay::tasks::TaskRegistry;
use translate_relay::{create_routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Pull in .env before reading configuration or RUST_LOG
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translate_relay=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load().map_err(|e| {
        error!("{}", e);
        e
    })?;
    info!(
        "Loaded configuration: port={}, fallback_model={}, delay_ms={}",
        config.port, config.fallback_model, config.delay_ms
    );

    let app_state = AppState::new(&config)?;
    let delayed_tasks = app_state.delayed_tasks.clone();
    let app = create_routes(app_state);

    let host: std::net::IpAddr = config.host.parse()?;
    let addr = SocketAddr::from((host, config.port));
    info!("Server is running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(delayed_tasks))
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(delayed_tasks: TaskRegistry) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    let cancelled = delayed_tasks.cancel_all();
    info!("Shutting down, cancelled {} delayed task(s)", cancelled);
}
