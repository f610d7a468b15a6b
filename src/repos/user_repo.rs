/*
 * Responsibility
 * - users テーブル向け SQLx 操作 (read-only: authentication only looks up)
 * - PgPool を受け取り lookup を提供
 * - Credential columns ("passwordHash") are never part of the projection
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct AuthUserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    #[sqlx(rename = "userName")]
    pub user_name: String,
    pub email: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub async fn find_auth_user(db: &PgPool, user_id: Uuid) -> Result<Option<AuthUserRow>, RepoError> {
    let row = sqlx::query_as::<_, AuthUserRow>(
        r#"
        SELECT "userId", "userName", "email", "imageUrl", "createdAt"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
