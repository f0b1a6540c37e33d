use envconfig::Envconfig;
use std::{env, fmt::Display, str::FromStr};

const ENV_PREFIX: &str = "DASH_";

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "HTTP_HOST", default = "0.0.0.0")]
    pub http_host: String,
    #[envconfig(from = "HTTP_PORT", default = "8080")]
    pub http_port: u16,
    // Optional: either "json" or "plain"/"text"; defaults handled in tracing setup
    #[envconfig(from = "LOG_FORMAT")]
    pub log_format: Option<String>,
    #[envconfig(from = "RUST_LOG", default = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("ParseError {{ name: '{name}', value: '{value}' }}")]
pub struct ParseEnvError {
    pub name: String,
    pub value: String,
}

fn read_env<T>(name: &str) -> Result<Option<T>, ParseEnvError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    match env::var(name) {
        Ok(val) => match val.parse::<T>() {
            Ok(v) => Ok(Some(v)),
            Err(_e) => Err(ParseEnvError {
                name: name.to_string(),
                value: val,
            }),
        },
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(os)) => Err(ParseEnvError {
            name: name.to_string(),
            value: format!("non-unicode: {:?}", os),
        }),
    }
}

fn read_with_prefix<T>(base: &str) -> Result<Option<T>, ParseEnvError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    let prefixed = format!("{}{}", ENV_PREFIX, base);
    if let Some(v) = read_env::<T>(&prefixed)? {
        return Ok(Some(v));
    }
    read_env::<T>(base)
}

impl Config {
    /// Reads every setting as `DASH_<NAME>` first, then `<NAME>`.
    pub fn load_from_env() -> Result<Self, ParseEnvError> {
        let http_host = read_with_prefix::<String>("HTTP_HOST")?
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let http_port = read_with_prefix::<u16>("HTTP_PORT")?.unwrap_or(8080);
        let log_format = read_with_prefix::<String>("LOG_FORMAT")?;
        let log_level = read_with_prefix::<String>("RUST_LOG")?
            .unwrap_or_else(|| "info".to_string());
        Ok(Config {
            http_host,
            http_port,
            log_format,
            log_level,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn json_logs(&self) -> bool {
        dash_observability::is_json_format(self.log_format.as_deref())
    }
}
