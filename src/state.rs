/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone-cheap (Arc inside)
 */
use std::sync::Arc;

use crate::services::{auth::AuthService, users::UserStore};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, users: Arc<dyn UserStore>) -> Self {
        Self { auth, users }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The store is a trait object and the verifier holds key material;
        // neither belongs in logs.
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
