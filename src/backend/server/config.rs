/**
 * Server Configuration
 *
 * `ServerConfig` is loaded once at startup from environment variables (after
 * `dotenv` has read an optional `.env` file) or built programmatically with
 * `ServerConfig::builder()`.
 *
 * # Variables
 *
 * - `JWT_SECRET` (required) - token signing secret. When unset, the file
 *   `$SECRETS_DIR/jwt_secret` is read instead (default `/run/secrets`).
 * - `CACHE_TTL_SECS` - lifetime of cached users and posts (default 300,
 *   at most `MAX_CACHE_TTL_SECS`)
 * - `SERVER_PORT` - listen port (default 8080)
 * - `DATABASE_URL` - PostgreSQL connection string; without it the server
 *   runs against the in-memory store
 */

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
/// One week
pub const MAX_CACHE_TTL_SECS: u64 = 7 * 24 * 60 * 60;
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SECRETS_DIR: &str = "/run/secrets";
const SECRET_FILE_NAME: &str = "jwt_secret";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("failed to read secret file {}: {source}", path.display())]
    SecretFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Token signing secret; `Debug` never prints the value
#[derive(Clone, PartialEq, Eq)]
pub struct JwtSecret(String);

impl JwtSecret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(<redacted>)")
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    jwt_secret: JwtSecret,
    cache_ttl: Duration,
    port: u16,
    database_url: Option<String>,
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => Some(secret),
            None => {
                let dir = get("SECRETS_DIR").unwrap_or_else(|| DEFAULT_SECRETS_DIR.to_string());
                read_secret_file(&Path::new(&dir).join(SECRET_FILE_NAME))?
            }
        };

        let mut builder = Self::builder();
        if let Some(secret) = jwt_secret {
            builder = builder.jwt_secret(secret);
        }
        if let Some(raw) = get("CACHE_TTL_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CACHE_TTL_SECS",
                    value: raw.clone(),
                })?;
            builder = builder.cache_ttl(Duration::from_secs(secs));
        }
        if let Some(raw) = get("SERVER_PORT") {
            let port = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "SERVER_PORT",
                    value: raw.clone(),
                })?;
            builder = builder.port(port);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        builder.build()
    }

    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}

/// Read a container secret, trimming trailing whitespace
///
/// A missing file is not an error; it simply yields no secret.
fn read_secret_file(path: &Path) -> Result<Option<String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let secret = contents.trim_end();
            if secret.is_empty() {
                Ok(None)
            } else {
                tracing::info!("Loaded JWT secret from {}", path.display());
                Ok(Some(secret.to_string()))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::SecretFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    jwt_secret: Option<String>,
    cache_ttl: Option<Duration>,
    port: Option<u16>,
    database_url: Option<String>,
}

impl ServerConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// * `MissingValue("JWT_SECRET")` - no secret or an empty one
    /// * `InvalidValue` - cache TTL of zero or above `MAX_CACHE_TTL_SECS`
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let cache_ttl = self
            .cache_ttl
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS));
        if cache_ttl.is_zero() || cache_ttl > Duration::from_secs(MAX_CACHE_TTL_SECS) {
            return Err(ConfigError::InvalidValue {
                key: "CACHE_TTL_SECS",
                value: cache_ttl.as_secs().to_string(),
            });
        }

        Ok(ServerConfig {
            jwt_secret: JwtSecret(jwt_secret),
            cache_ttl,
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
        })
    }
}

/// Connect to PostgreSQL and apply pending migrations
///
/// Connection failure is fatal. A failed migration is logged and startup
/// continues, since the schema may already be current.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
