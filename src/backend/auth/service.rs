/**
 * Authentication Service
 *
 * Registration, login and token verification. The service owns its secret
 * and bcrypt cost, handed in at construction from `AuthConfig`; nothing here
 * reads the environment.
 *
 * bcrypt runs on tokio's blocking pool so a slow hash does not stall the
 * worker that accepted the request.
 *
 * A login for an unknown username still pays for one bcrypt verification,
 * against a hash made once at the configured cost, so response time does
 * not reveal which usernames exist.
 */

use std::sync::Arc;

use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use crate::backend::auth::sessions::{create_token, verify_token, Claims};
use crate::backend::auth::users::{create_user, get_user_by_username};
use crate::backend::error::BackendError;
use crate::backend::server::config::AuthConfig;
use crate::shared::{Credentials, UserPublic};

/// Password hashing and session token issuing
#[derive(Clone, Debug)]
pub struct AuthService {
    config: Arc<AuthConfig>,
    dummy_hash: Arc<OnceCell<String>>,
}

/// Password the unknown-user hash is made from; never matches a real login
const DUMMY_PASSWORD: &str = "inkpost-unknown-user";

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `DuplicateUsername` - the username is taken
    /// * `Hash` / `Store` - hashing or the insert failed
    pub async fn register(
        &self,
        pool: &SqlitePool,
        credentials: Credentials,
    ) -> Result<UserPublic, BackendError> {
        let Credentials { username, password } = credentials;

        if get_user_by_username(pool, &username).await?.is_some() {
            tracing::warn!("Username already exists: {}", username);
            return Err(BackendError::DuplicateUsername { username });
        }

        let password_hash = self.hash_password(password).await?;

        // A concurrent registration can still win the race to the UNIQUE index.
        let user = create_user(pool, &username, &password_hash)
            .await
            .map_err(|e| {
                if BackendError::is_unique_violation(&e) {
                    tracing::warn!("Username already exists: {}", username);
                    BackendError::DuplicateUsername {
                        username: username.clone(),
                    }
                } else {
                    BackendError::Store(e)
                }
            })?;

        tracing::info!("User registered: {} ({})", user.username, user.id);
        Ok(user.to_public())
    }

    /// Check credentials and issue a session token
    ///
    /// Unknown usernames and wrong passwords both return `InvalidCredentials`.
    pub async fn login(
        &self,
        pool: &SqlitePool,
        credentials: Credentials,
    ) -> Result<(String, UserPublic), BackendError> {
        let Credentials { username, password } = credentials;

        let user = match get_user_by_username(pool, &username).await? {
            Some(user) => user,
            None => {
                tracing::warn!("Login for unknown user: {}", username);
                let hash = self.dummy_hash().await?;
                self.verify_password(password, hash).await?;
                return Err(BackendError::InvalidCredentials);
            }
        };

        if !self.verify_password(password, user.password_hash.clone()).await? {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(BackendError::InvalidCredentials);
        }

        let token = create_token(
            self.config.jwt_secret.as_bytes(),
            user.id,
            &user.username,
            self.config.token_ttl,
        )?;

        tracing::info!("User logged in: {} ({})", user.username, user.id);
        Ok((token, user.to_public()))
    }

    /// Verify a session token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, BackendError> {
        verify_token(self.config.jwt_secret.as_bytes(), token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            BackendError::unauthenticated("Invalid token")
        })
    }

    async fn dummy_hash(&self) -> Result<String, BackendError> {
        self.dummy_hash
            .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD.to_string()))
            .await
            .cloned()
    }

    async fn hash_password(&self, password: String) -> Result<String, BackendError> {
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| BackendError::Hash(e.to_string()))?
            .map_err(|e| BackendError::Hash(e.to_string()))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, BackendError> {
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| BackendError::Hash(e.to_string()))?
            .map_err(|e| BackendError::Hash(e.to_string()))
    }
}
