use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_settings_file(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("clientes_settings_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn defaults_point_at_local_server() {
    let settings = load_settings_from(Path::new("/nonexistent/clientes.toml"), no_env);
    assert_eq!(settings, ClientSettings::default());
    assert_eq!(settings.server_url, "http://localhost:3000");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_are_applied() {
    let path = temp_settings_file("server_url = \"http://api.local:8080\"\nlog_filter = \"debug\"\n");
    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings.server_url, "http://api.local:8080");
    assert_eq!(settings.log_filter, "debug");
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_file_is_ignored() {
    let path = temp_settings_file("server_url = [1, 2");
    let settings = load_settings_from(&path, no_env);
    assert_eq!(settings, ClientSettings::default());
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn app_prefixed_env_overrides_short_env_and_file() {
    let path = temp_settings_file("server_url = \"http://from-file:1\"\n");
    let settings = load_settings_from(&path, |name| match name {
        "CLIENTES_SERVER_URL" => Some("http://short:2".to_string()),
        "APP__SERVER_URL" => Some("http://app:3".to_string()),
        "CLIENTES_LOG" => Some("warn".to_string()),
        _ => None,
    });
    assert_eq!(settings.server_url, "http://app:3");
    assert_eq!(settings.log_filter, "warn");
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn normalizes_trailing_slashes_and_whitespace() {
    assert_eq!(
        normalize_server_url("  http://localhost:3000/  ").expect("url"),
        "http://localhost:3000"
    );
    assert_eq!(
        normalize_server_url("https://api.example.com/v1//").expect("url"),
        "https://api.example.com/v1"
    );
}

#[test]
fn empty_server_url_falls_back_to_default() {
    assert_eq!(normalize_server_url("   ").expect("url"), DEFAULT_SERVER_URL);
}

#[test]
fn rejects_non_http_urls() {
    assert!(normalize_server_url("localhost:3000").is_err());
    assert!(normalize_server_url("ftp://files.example.com").is_err());
    assert!(normalize_server_url("not a url").is_err());
}
