use dash_server::Config;
use serial_test::serial;
use std::env;

const VARS: [&str; 8] = [
    "HTTP_HOST",
    "HTTP_PORT",
    "LOG_FORMAT",
    "RUST_LOG",
    "DASH_HTTP_HOST",
    "DASH_HTTP_PORT",
    "DASH_LOG_FORMAT",
    "DASH_RUST_LOG",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn defaults_without_env() {
    clear_env();
    let config = Config::load_from_env().expect("defaults should load");
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    assert_eq!(config.log_level, "info");
    assert!(!config.json_logs());
}

#[test]
#[serial]
fn prefixed_value_wins() {
    clear_env();
    unsafe {
        env::set_var("HTTP_PORT", "3000");
        env::set_var("DASH_HTTP_PORT", "4000");
        env::set_var("HTTP_HOST", "127.0.0.1");
        env::set_var("LOG_FORMAT", "json");
    }
    let config = Config::load_from_env().expect("config should load");
    assert_eq!(config.http_port, 4000);
    assert_eq!(config.http_host, "127.0.0.1");
    assert!(config.json_logs());
    clear_env();
}

#[test]
#[serial]
fn unparsable_port_is_reported() {
    clear_env();
    unsafe {
        env::set_var("DASH_HTTP_PORT", "abc");
    }
    let err = Config::load_from_env().expect_err("port must be numeric");
    assert_eq!(err.name, "DASH_HTTP_PORT");
    assert_eq!(err.value, "abc");
    clear_env();
}

#[test]
#[serial]
fn prefixed_log_level_beats_rust_log() {
    clear_env();
    unsafe {
        env::set_var("RUST_LOG", "warn");
        env::set_var("DASH_RUST_LOG", "debug");
    }
    let config = Config::load_from_env().expect("config should load");
    assert_eq!(config.log_level, "debug");
    dash_server::init_tracing(&config).expect("first tracing init");
    assert!(tracing::enabled!(tracing::Level::DEBUG));
    clear_env();
}
