//! User-store interface used by authentication.
//!
//! Responsibility:
//! - `find_by_id` resolves a verified subject id to a user, with credential
//!   fields already projected out by the implementation.
//! - Backend failures are typed separately from "no such user" so callers
//!   can distinguish an outage (500) from an authentication failure (401).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::repos::error::RepoError;

/// A user as authentication sees it: identity plus public profile fields.
///
/// Never carries the password hash; store implementations must project it
/// out at the query level, not strip it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// A minimal user lookup interface.
///
/// Implementations must be cheap to share (`Arc<dyn UserStore>` in AppState).
#[async_trait]
pub trait UserStore: Send + Sync {
    // Look up a user by internal id.
    //
    // Returns:
    // - `Ok(Some(user))` => user exists
    // - `Ok(None)`       => no such user (callers treat as auth failure)
    // - `Err(_)`         => backend failure (not an auth failure)
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, UserStoreError>;
}
