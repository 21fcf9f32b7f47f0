use async_trait::async_trait;
use thiserror::Error;

use crate::auth::{Profile, UserRole};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account already exists for {0}")]
    EmailTaken(String),

    #[error("auth backend unavailable: {0}")]
    Unavailable(String),
}

/// The authentication backend consumed by the app.
///
/// Implementations live outside this crate (the hosted backend, or an
/// in-memory fake in tests). Callers persist the returned profile through
/// [`crate::auth::Session`].
#[async_trait]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Profile, AuthError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<Profile, AuthError>;

    async fn sign_out(&self);
}
