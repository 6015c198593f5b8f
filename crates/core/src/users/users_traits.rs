//! Repository contracts for users and bearer tokens.

use async_trait::async_trait;

use crate::errors::Result;

use super::users_model::{NewUser, User};

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    async fn insert_user(&self, new_user: NewUser) -> Result<User>;
}

#[async_trait]
pub trait AuthTokenRepositoryTrait: Send + Sync {
    async fn insert_token(&self, user_id: String, token_hash: String) -> Result<()>;

    /// Resolve a stored token digest back to its user.
    fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>>;
}
