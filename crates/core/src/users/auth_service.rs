//! Registration, login, and bearer token management.
//!
//! Passwords are hashed with Argon2id. Bearer tokens are opaque random
//! values returned to the client once; only their SHA-256 digest is stored,
//! so a leaked token table cannot be replayed.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use log::info;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::errors::{Error, Result, ValidationError};

use super::users_model::{NewUser, User};
use super::users_traits::{AuthTokenRepositoryTrait, UserRepositoryTrait};

const TOKEN_BYTES: usize = 32;
const MIN_PASSWORD_CHARS: usize = 8;

/// A freshly minted bearer token. The plaintext exists only in this value.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
}

pub struct AuthService {
    users: Arc<dyn UserRepositoryTrait>,
    tokens: Arc<dyn AuthTokenRepositoryTrait>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        tokens: Arc<dyn AuthTokenRepositoryTrait>,
    ) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and mint their first token.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, IssuedToken)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::InvalidInput(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_CHARS
            ))
            .into());
        }

        if self.users.find_by_email(&email)?.is_some() {
            return Err(
                ValidationError::InvalidInput("email is already registered".to_string()).into(),
            );
        }

        let password_hash = hash_password(password)?;
        let user = self
            .users
            .insert_user(NewUser {
                name: name.to_string(),
                email,
                password_hash,
            })
            .await?;

        info!("registered user {}", user.id);
        let token = self.issue_token(&user).await?;
        Ok((user, token))
    }

    /// Verify credentials and mint a token. Unknown email and wrong
    /// password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken> {
        let email = normalize_email(email)?;
        let user = self
            .users
            .find_by_email(&email)?
            .ok_or_else(|| Error::Auth("invalid credentials".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(Error::Auth("invalid credentials".to_string()));
        }

        self.issue_token(&user).await
    }

    /// Resolve a plaintext bearer token to its user.
    pub fn authenticate(&self, bearer_token: &str) -> Result<User> {
        let digest = token_digest(bearer_token);
        self.tokens
            .find_user_by_token_hash(&digest)?
            .ok_or_else(|| Error::Auth("invalid or expired token".to_string()))
    }

    async fn issue_token(&self, user: &User) -> Result<IssuedToken> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let access_token = URL_SAFE_NO_PAD.encode(bytes);

        self.tokens
            .insert_token(user.id.clone(), token_digest(&access_token))
            .await?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer",
        })
    }
}

fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email".to_string()).into());
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidInput("email is not valid".to_string()).into());
    }
    Ok(email)
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Unexpected(format!("password hashing failed: {}", e)))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| Error::Unexpected(format!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn token_digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryUsers {
        by_email: Mutex<HashMap<String, User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MemoryUsers {
        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self.by_email.lock().unwrap().get(email).cloned())
        }

        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .by_email
                .lock()
                .unwrap()
                .values()
                .find(|u| u.id == user_id)
                .cloned())
        }

        async fn insert_user(&self, new_user: NewUser) -> Result<User> {
            let user = User {
                id: format!("user-{}", new_user.email),
                name: new_user.name,
                email: new_user.email.clone(),
                password_hash: new_user.password_hash,
                created_at: String::new(),
            };
            self.by_email
                .lock()
                .unwrap()
                .insert(new_user.email, user.clone());
            Ok(user)
        }
    }

    #[derive(Default)]
    struct MemoryTokens {
        by_hash: Mutex<HashMap<String, String>>,
        users: Arc<MemoryUsers>,
    }

    #[async_trait]
    impl AuthTokenRepositoryTrait for MemoryTokens {
        async fn insert_token(&self, user_id: String, token_hash: String) -> Result<()> {
            self.by_hash.lock().unwrap().insert(token_hash, user_id);
            Ok(())
        }

        fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>> {
            let user_id = match self.by_hash.lock().unwrap().get(token_hash) {
                Some(id) => id.clone(),
                None => return Ok(None),
            };
            self.users.find_by_id(&user_id)
        }
    }

    fn service() -> AuthService {
        let users = Arc::new(MemoryUsers::default());
        let tokens = Arc::new(MemoryTokens {
            users: users.clone(),
            ..Default::default()
        });
        AuthService::new(users, tokens)
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let auth = service();
        let (user, token) = auth
            .register("John Doe", "John@Example.com", "correct horse")
            .await
            .unwrap();
        assert_eq!(user.email, "john@example.com");
        assert_eq!(token.token_type, "Bearer");

        let token = auth.login("john@example.com", "correct horse").await.unwrap();
        let authed = auth.authenticate(&token.access_token).unwrap();
        assert_eq!(authed.id, user.id);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let auth = service();
        auth.register("John", "john@example.com", "correct horse")
            .await
            .unwrap();

        let err = auth
            .login("john@example.com", "wrong horse!!")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let auth = service();
        auth.register("John", "john@example.com", "correct horse")
            .await
            .unwrap();

        let err = auth
            .register("Jane", "john@example.com", "another pass")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let auth = service();
        let err = auth
            .register("John", "john@example.com", "short")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn garbage_token_does_not_authenticate() {
        let auth = service();
        let err = auth.authenticate("not-a-token").unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn token_digest_is_sha256_hex() {
        let digest = token_digest("abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
