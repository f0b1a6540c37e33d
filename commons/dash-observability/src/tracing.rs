use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub service_name: String,
    pub log_level: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "dash-service".to_string(),
            log_level: "info".to_string(),
            json_format: false,
        }
    }
}

impl TracingConfig {
    pub fn from_env(
        service_name: &str,
        log_level: &str,
        json_format: bool,
    ) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: log_level.to_string(),
            json_format,
        }
    }
}

/// Interprets a `LOG_FORMAT` value. Unknown or missing values fall back to
/// plain text.
pub fn is_json_format(log_format: Option<&str>) -> bool {
    match log_format.map(|s| s.trim().to_ascii_lowercase()) {
        Some(ref v) if v == "json" || v == "structured" => true,
        Some(ref v) if v == "plain" || v == "text" || v == "pretty" => false,
        _ => false,
    }
}

pub fn setup_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_file(true)
        .with_line_number(true);

    let fmt_layer = if config.json_format {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    // log_level is already resolved from the environment by the caller
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TracingError::Setup(e.to_string()))?;

    ::tracing::debug!(service = %config.service_name, "tracing initialized");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing setup error: {0}")]
    Setup(String),
}
