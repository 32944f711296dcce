//! Configuration loading from the process environment
//!
//! These tests mutate environment variables and therefore run serially.

use std::time::Duration;

use assert_matches::assert_matches;
use serial_test::serial;

use blogd::backend::server::{ConfigError, ServerConfig};

const KEYS: [&str; 5] = [
    "JWT_SECRET",
    "SECRETS_DIR",
    "CACHE_TTL_SECS",
    "SERVER_PORT",
    "DATABASE_URL",
];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

fn empty_secrets_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("blogd-env-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    std::env::set_var("JWT_SECRET", "env-secret");
    std::env::set_var("CACHE_TTL_SECS", "42");
    std::env::set_var("SERVER_PORT", "3001");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.jwt_secret().expose(), "env-secret");
    assert_eq!(config.cache_ttl(), Duration::from_secs(42));
    assert_eq!(config.port(), 3001);
    assert_eq!(config.database_url(), None);

    clear_env();
}

#[test]
#[serial]
fn test_from_env_without_secret_fails() {
    clear_env();
    std::env::set_var("SECRETS_DIR", empty_secrets_dir());

    assert_matches!(ServerConfig::from_env(), Err(ConfigError::MissingValue("JWT_SECRET")));

    clear_env();
}

#[test]
#[serial]
fn test_from_env_reads_secret_file() {
    clear_env();
    let dir = empty_secrets_dir();
    std::fs::write(dir.join("jwt_secret"), "file-secret\n\n").unwrap();
    std::env::set_var("SECRETS_DIR", &dir);

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.jwt_secret().expose(), "file-secret");

    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_bad_ttl() {
    clear_env();
    std::env::set_var("JWT_SECRET", "s");
    std::env::set_var("CACHE_TTL_SECS", "-5");

    assert_matches!(
        ServerConfig::from_env(),
        Err(ConfigError::InvalidValue { key: "CACHE_TTL_SECS", .. })
    );

    clear_env();
}
