//! Authentication and account service
//!
//! Handles signup, login, profile reads/updates, and password changes.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use booking_common::auth::{hash_password, verify_password};
use booking_common::AppError;
use booking_core::entities::User;

use crate::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, ProfileResponse, SignupRequest,
    SignupResponse, UpdateProfileRequest, UpdatedNameResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user with the USER role
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        if self.ctx.user_repo().email_exists(&request.email).await? {
            warn!(email = %request.email, "Signup rejected: email already in use");
            return Err(ServiceError::conflict("Email already in use"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(Uuid::new_v4(), request.name, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        Ok(SignupResponse::new(&user))
    }

    /// Login with email and password, issuing a bearer token
    ///
    /// Unknown email and wrong password produce the same client-visible
    /// failure.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self
            .ctx
            .jwt_service()
            .generate_token(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse::new(token, user.name))
    }

    /// Fetch the acting user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(ProfileResponse::from(&user))
    }

    /// Update the acting user's display name
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UpdatedNameResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if user.name == request.name {
            return Err(ServiceError::validation("Display name is unchanged"));
        }

        self.ctx.user_repo().update_name(user_id, &request.name).await?;

        info!(user_id = %user_id, "Display name updated");

        Ok(UpdatedNameResponse { name: request.name })
    }

    /// Change the acting user's password
    ///
    /// Cross-field rules (new != old, new == confirmation) are enforced by
    /// the request DTO; this verifies the old password before rehashing.
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let is_valid = verify_password(&request.password, &current_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user_id, "Password change failed: wrong current password");
            return Err(ServiceError::validation("Current password is incorrect"));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx.user_repo().update_password(user_id, &new_hash).await?;

        info!(user_id = %user_id, "Password changed");

        Ok(())
    }
}
