use dash_observability::{TracingConfig, setup_tracing};
use dash_server::{Config, SERVICE_NAME, start_server};

fn main() {
    let cpus = num_cpus::get();
    let worker_threads = std::cmp::max(1, cpus);
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to build tokio runtime: {e}");
            std::process::exit(1);
        }
    };
    runtime.block_on(async { start().await });
}

async fn start() {
    match Config::load_from_env() {
        Ok(conf) => {
            if let Err(e) = start_server(conf).await {
                tracing::error!("Error starting server: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            let _ = setup_tracing(TracingConfig::from_env(
                SERVICE_NAME,
                "info",
                false,
            ));
            tracing::error!("Failed to load config from env: {}", e);
            std::process::exit(1);
        }
    }
}
