/*
 * Responsibility
 * - The "authenticated context" type as handlers see it
 * - The middleware verifies the token, resolves the user, and stores this
 *   in request extensions; handlers only ever receive this type
 */

use uuid::Uuid;

use crate::services::users::AuthUser;

/// Context attached to an authenticated request.
///
/// - `user` is the resolved store record, with credential fields already
///   projected out by the store
/// - valid only for the lifetime of the request it is attached to
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user: AuthUser,
}

impl AuthCtx {
    pub fn new(user: AuthUser) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}
