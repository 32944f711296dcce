/**
 * User Service
 *
 * Registration, login and cached user lookups.
 *
 * # Authentication Flow
 *
 * 1. **Register**: validate input → hash password (blocking thread) → store
 *    user with role `user`
 * 2. **Authenticate**: look up user → verify password (blocking thread) → issue token
 *
 * Unknown usernames and wrong passwords produce the same
 * `InvalidCredentials` error. Passwords and hashes are never logged.
 *
 * # Caching
 *
 * Successful lookups by username and by id are kept in an
 * `ExpiringCache<User>` under `name:<username>` / `id:<uuid>` keys. Misses
 * and errors are not cached.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::credentials::{self, CredentialError};
use crate::backend::auth::identity::{Identity, DEFAULT_ROLE};
use crate::backend::auth::tokens::TokenService;
use crate::backend::cache::ExpiringCache;
use crate::backend::repository::{parse_id, RepositoryError, UserRepository};
use crate::backend::services::ServiceError;
use crate::shared::models::User;
use crate::shared::SharedError;

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    cache: ExpiringCache<User>,
    tokens: Arc<TokenService>,
}

fn name_key(username: &str) -> String {
    format!("name:{}", username)
}

fn id_key(id: Uuid) -> String {
    format!("id:{}", id)
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: ExpiringCache<User>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            repository,
            cache,
            tokens,
        }
    }

    /// Register a new user with the default role
    ///
    /// # Errors
    /// * `Validation` - empty username or password
    /// * `Credential(HashingFailed)` - password rejected by the hasher
    /// * `Repository(Conflict)` - username already taken
    pub async fn register(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(SharedError::validation("username", "Username must not be empty").into());
        }
        if password.is_empty() {
            return Err(SharedError::validation("password", "Password must not be empty").into());
        }

        tracing::info!("Registering user: {}", username);

        let plaintext = password.to_string();
        let password_hash =
            tokio::task::spawn_blocking(move || credentials::hash_password(&plaintext)).await??;

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            role: DEFAULT_ROLE.to_string(),
        };

        let user = self.repository.create_user(user).await.map_err(|e| {
            tracing::warn!("Failed to register user {}: {}", username, e);
            e
        })?;

        tracing::info!("User registered successfully: {}", user.username);
        Ok(user)
    }

    /// Verify credentials and issue a token
    ///
    /// # Returns
    /// Signed token carrying the user's username and role
    ///
    /// The username is trimmed exactly as in `register`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, ServiceError> {
        let username = username.trim();
        let user = match self.get_user_by_username(username).await {
            Ok(user) => user,
            Err(ServiceError::Repository(RepositoryError::NotFound)) => {
                tracing::warn!("Login failed for unknown user: {}", username);
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let stored_hash = user.password_hash.clone();
        let plaintext = password.to_string();
        let verified =
            tokio::task::spawn_blocking(move || credentials::verify_password(&stored_hash, &plaintext))
                .await?;

        match verified {
            Ok(()) => {}
            Err(CredentialError::PasswordMismatch) => {
                tracing::warn!("Login failed for user {}: wrong password", username);
                return Err(ServiceError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!("Stored hash for user {} is unusable: {}", username, e);
                return Err(ServiceError::InvalidCredentials);
            }
        }

        let token = self
            .tokens
            .issue_token(&Identity::new(user.username.clone(), user.role.clone()))?;

        tracing::info!("User logged in successfully: {}", user.username);
        Ok(token)
    }

    /// Look up a user by username, consulting the cache first
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, ServiceError> {
        let key = name_key(username);
        if let Some(user) = self.cache.get(&key) {
            tracing::debug!("User cache hit: {}", username);
            return Ok(user);
        }

        let user = self
            .repository
            .get_user_by_username(username)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.cache.set(key, user.clone());
        Ok(user)
    }

    /// Look up a user by id, consulting the cache first
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, ServiceError> {
        let id = parse_id(id)?;
        let key = id_key(id);
        if let Some(user) = self.cache.get(&key) {
            tracing::debug!("User cache hit: {}", id);
            return Ok(user);
        }

        let user = self
            .repository
            .get_user_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.cache.set(key, user.clone());
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.repository.list_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::repository::MemoryStore;
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn service() -> (UserService, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new("user-service-secret").unwrap());
        let service = UserService::new(
            Arc::new(MemoryStore::new()),
            ExpiringCache::new(Duration::from_secs(60)),
            tokens.clone(),
        );
        (service, tokens)
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let (users, tokens) = service();
        let alice = users.register("alice", "secret").await.unwrap();
        assert_eq!(alice.role, "user");
        assert_ne!(alice.password_hash, "secret");

        let token = users.authenticate("alice", "secret").await.unwrap();
        let claims = tokens.verify_token(&token).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "user");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (users, _) = service();
        users.register("alice", "secret").await.unwrap();

        assert_matches!(users.authenticate("alice", "wrong").await, Err(ServiceError::InvalidCredentials));
        assert_matches!(users.authenticate("nobody", "secret").await, Err(ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_padded_username_logs_in() {
        let (users, tokens) = service();
        let stored = users.register(" alice ", "secret").await.unwrap();
        assert_eq!(stored.username, "alice");

        let token = users.authenticate(" alice ", "secret").await.unwrap();
        assert_eq!(tokens.verify_token(&token).unwrap().username, "alice");
        assert!(users.authenticate("alice", "secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_register_validation() {
        let (users, _) = service();
        assert_matches!(users.register("  ", "secret").await, Err(ServiceError::Validation(_)));
        assert_matches!(users.register("alice", "").await, Err(ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let (users, _) = service();
        users.register("alice", "secret").await.unwrap();
        assert_matches!(
            users.register("alice", "other").await,
            Err(ServiceError::Repository(RepositoryError::Conflict(_)))
        );
    }

    #[tokio::test]
    async fn test_lookup_by_id_uses_cache() {
        let store = MemoryStore::new();
        let cache = ExpiringCache::new(Duration::from_secs(60));
        let users = UserService::new(
            Arc::new(store.clone()),
            cache.clone(),
            Arc::new(TokenService::new("s").unwrap()),
        );

        let alice = users.register("alice", "secret").await.unwrap();
        let found = users.get_user_by_id(&alice.id.to_string()).await.unwrap();
        assert_eq!(found.username, "alice");
        assert!(cache.get(&id_key(alice.id)).is_some());
    }

    #[tokio::test]
    async fn test_missing_user_not_cached() {
        let store = MemoryStore::new();
        let cache = ExpiringCache::new(Duration::from_secs(60));
        let users = UserService::new(
            Arc::new(store.clone()),
            cache.clone(),
            Arc::new(TokenService::new("s").unwrap()),
        );

        assert_matches!(
            users.get_user_by_username("ghost").await,
            Err(ServiceError::Repository(RepositoryError::NotFound))
        );
        assert!(cache.is_empty());

        // A user registered after the miss is found immediately.
        users.register("ghost", "boo").await.unwrap();
        assert!(users.get_user_by_username("ghost").await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let (users, _) = service();
        assert_matches!(
            users.get_user_by_id("nope").await,
            Err(ServiceError::Repository(RepositoryError::InvalidId(_)))
        );
    }
}
