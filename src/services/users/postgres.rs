use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::user_repo;
use crate::services::users::store::{AuthUser, UserStore, UserStoreError};

/// Postgres-backed user store.
///
/// Thin adapter over `user_repo`; the SQL projection there guarantees that
/// credential columns never reach this type.
#[derive(Clone, Debug)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, UserStoreError> {
        let row = user_repo::find_auth_user(&self.db, id).await?;

        Ok(row.map(|r| AuthUser {
            id: r.id,
            user_name: r.user_name,
            email: r.email,
            image_url: r.image_url,
            created_at: r.created_at,
        }))
    }
}
