use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use verdant_core::errors::Result;
use verdant_core::users::{AuthTokenRepositoryTrait, NewUser, User, UserRepositoryTrait};

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{auth_tokens, users};

use super::model::{AuthTokenDB, UserDB};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .filter(users::email.eq(email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }

    async fn insert_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row = UserDB {
                    id: Uuid::new_v4().to_string(),
                    name: new_user.name,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now().to_rfc3339(),
                };

                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(inserted))
            })
            .await
    }
}

pub struct AuthTokenRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AuthTokenRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AuthTokenRepository { pool, writer }
    }
}

#[async_trait]
impl AuthTokenRepositoryTrait for AuthTokenRepository {
    async fn insert_token(&self, user_id: String, token_hash: String) -> Result<()> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let row = AuthTokenDB {
                    id: Uuid::new_v4().to_string(),
                    user_id,
                    token_hash,
                    created_at: Utc::now().to_rfc3339(),
                };

                diesel::insert_into(auth_tokens::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let row = auth_tokens::table
            .inner_join(users::table)
            .filter(auth_tokens::token_hash.eq(token_hash))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(User::from))
    }
}
