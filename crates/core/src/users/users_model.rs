//! User domain models.

use serde::{Deserialize, Serialize};

/// A registered user. The password hash never leaves the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

/// Input for a user insert. `password_hash` is already an Argon2 PHC
/// string by the time it reaches storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A minted bearer token at rest. Only the SHA-256 digest of the token is
/// stored; the plaintext is returned to the client once and never kept.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub id: String,
    pub user_id: String,
    pub token_hash: String,
    pub created_at: String,
}
