/*
 * Responsibility
 * - User response DTO
 * - Credential fields never appear here: exclusion is by construction,
 *   not by filtering at serialization time
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
