mod conf;
mod error;
mod handler;

pub use conf::{Config, ParseEnvError};
use dash_observability::{TracingConfig, setup_tracing};
pub use error::{PageError, ServerError};
pub use handler::{SERVICE_NAME, build_router};
use tokio::net::TcpListener;
use tracing::info;

pub fn init_tracing(config: &Config) -> Result<(), ServerError> {
    let tracing_config = TracingConfig::from_env(
        SERVICE_NAME,
        &config.log_level,
        config.json_logs(),
    );
    setup_tracing(tracing_config)?;
    Ok(())
}

pub async fn start_server(config: Config) -> Result<(), ServerError> {
    init_tracing(&config)?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await.map_err(|source| {
        ServerError::Bind {
            addr: addr.clone(),
            source,
        }
    })?;
    info!("start server on {}", addr);
    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::terminate(),
        )
        .expect("failed to install signal handler")
        .recv()
        .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
