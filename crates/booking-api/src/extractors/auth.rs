//! Authentication and role-gate extractors
//!
//! [`AuthUser`] is the credential verifier: it extracts the bearer token,
//! validates it against the process-wide secret, and resolves the subject to
//! an existing user row. The three failure modes (missing header, invalid
//! token, expired token) stay distinguishable all the way to the client.
//!
//! [`CoachUser`] composes the verifier with the role gate: same pipeline,
//! then a pure role check that rejects anything but COACH.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use booking_common::AppError;
use booking_core::entities::User;
use booking_core::value_objects::UserRole;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved user row (id and role at minimum; the full record is
    /// attached for handler convenience)
    pub user: User,
}

impl AuthUser {
    /// Acting user's id
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Acting user's role
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.user.role
    }
}

async fn resolve_user<S>(parts: &mut Parts, state: &S) -> Result<User, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    // Missing or malformed Authorization header
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::App(AppError::MissingAuth))?;

    let app_state = AppState::from_ref(state);

    // Cryptographic validation; expiry is classified separately
    let claims = app_state
        .jwt_service()
        .decode_token(bearer.token())
        .map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            ApiError::App(e)
        })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid subject in token");
        ApiError::App(e)
    })?;

    // The subject must resolve to an existing user record
    let user = app_state
        .service_context()
        .user_repo()
        .find_by_id(user_id)
        .await
        .map_err(ApiError::Domain)?
        .ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Token subject does not resolve to a user");
            ApiError::App(AppError::InvalidToken)
        })?;

    Ok(user)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = resolve_user(parts, state).await?;
        Ok(AuthUser { user })
    }
}

/// Authenticated user that passed the coach role gate
#[derive(Debug, Clone)]
pub struct CoachUser {
    pub user: User,
}

impl CoachUser {
    /// Acting coach's user id
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CoachUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = resolve_user(parts, state).await?;

        // Pure predicate: no identity or wrong role rejects with a kind
        // distinct from the verifier's failures
        if user.role != UserRole::Coach {
            tracing::warn!(user_id = %user.id, "Coach gate rejected non-coach user");
            return Err(ApiError::App(AppError::NotCoach));
        }

        Ok(CoachUser { user })
    }
}
