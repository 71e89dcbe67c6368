/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the database pool.
 *
 * # Configuration Sources
 *
 * Everything comes from the environment (after `.env` is loaded in `main`),
 * with defaults suitable for local development. A value that fails to parse
 * is logged and replaced by its default.
 *
 * # Error Handling
 *
 * Configuration loading itself never fails. Database connection and
 * migration failures are returned to the caller; the server does not start
 * without a working database.
 */

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://inkpost.db?mode=rwc";
pub const DEFAULT_JWT_SECRET: &str = "supersecret";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_COOKIE_DOMAIN: &str = "localhost";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_TOKEN_TTL_DAYS: u64 = 30;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Lowest cost bcrypt accepts
const TEST_BCRYPT_COST: u32 = 4;

/// Settings for the authentication service
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Lifetime of an issued session token
    pub token_ttl: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

/// Attributes of the `token` session cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    /// `Domain` attribute; `None` leaves it off
    pub domain: Option<String>,
    /// `Secure` attribute, on in production
    pub secure: bool,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
    pub cookie: CookieSettings,
    /// Single origin allowed to make credentialed cross-origin requests
    pub cors_origin: Option<String>,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using the built-in development secret");
            DEFAULT_JWT_SECRET.to_string()
        });

        let port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => parse_or("SERVER_PORT", &raw, DEFAULT_PORT),
            None => DEFAULT_PORT,
        };

        let production = lookup("APP_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let domain = match lookup("COOKIE_DOMAIN") {
            Some(d) if d.trim().is_empty() => None,
            Some(d) => Some(d),
            None => Some(DEFAULT_COOKIE_DOMAIN.to_string()),
        };

        let cors_origin = match lookup("CORS_ORIGIN") {
            Some(o) if o.trim().is_empty() => None,
            Some(o) => Some(o),
            None => Some(DEFAULT_CORS_ORIGIN.to_string()),
        };

        let ttl_days = lookup_parsed(&lookup, "TOKEN_TTL_DAYS", DEFAULT_TOKEN_TTL_DAYS);

        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            auth: AuthConfig {
                jwt_secret,
                bcrypt_cost: lookup_parsed(&lookup, "BCRYPT_COST", DEFAULT_BCRYPT_COST),
                token_ttl: token_ttl(ttl_days),
            },
            cookie: CookieSettings {
                domain,
                secure: production,
            },
            cors_origin,
            upload_dir: PathBuf::from(
                lookup("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            max_upload_bytes: lookup_parsed(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Configuration for tests: in-memory database, uploads under `upload_dir`,
    /// and the cheapest bcrypt cost
    pub fn for_tests(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            auth: AuthConfig {
                jwt_secret: "test-secret".to_string(),
                bcrypt_cost: TEST_BCRYPT_COST,
                token_ttl: token_ttl(DEFAULT_TOKEN_TTL_DAYS),
            },
            cookie: CookieSettings {
                domain: None,
                secure: false,
            },
            cors_origin: None,
            upload_dir: upload_dir.into(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Token lifetime for a number of days, or the default when it overflows
fn token_ttl(days: u64) -> Duration {
    match days.checked_mul(SECONDS_PER_DAY) {
        Some(secs) => Duration::from_secs(secs),
        None => {
            tracing::warn!(
                "TOKEN_TTL_DAYS {} is too large, using {}",
                days,
                DEFAULT_TOKEN_TTL_DAYS
            );
            Duration::from_secs(DEFAULT_TOKEN_TTL_DAYS * SECONDS_PER_DAY)
        }
    }
}

fn lookup_parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_or(key, &raw, default),
        None => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid value for {}: {:?}, using {}", key, raw, default);
        default
    })
}

/// Open the database connection pool
///
/// The database file is created if it does not exist yet. Migrations are run
/// separately by `init::build_app`.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}
